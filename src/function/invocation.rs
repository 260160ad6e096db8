//! The dual-view argument frame handed to function bodies.
//!
//! At the moment of final invocation the body receives two coordinated
//! views of the same argument list:
//!
//! - **Named bindings** ([`Invocation::values`]): one value copy per
//!   declared parameter, with collectors already materialized and
//!   reference cells dereferenced. Reassigning a copy is invisible to the
//!   caller.
//! - **Raw slots** ([`Invocation::raw`]): the pre-collection argument
//!   list exactly as passed, cells intact. Writing through
//!   [`Invocation::set_raw`] mutates the caller's storage — where the
//!   caller opted in by passing a cell.
//!
//! This reproduces "pass-by-reference for the raw list, pass-by-value for
//! named parameters" without pretending Rust has implicit aliasing.

use crate::value::Value;

use super::error::AliasingUnsupportedError;

/// The argument frame for one final invocation.
///
/// # Examples
///
/// ```rust
/// use currier::function::ArityFunction;
/// use currier::value::{Value, ValueCell};
///
/// let stamp = ArityFunction::of_arity(1, |frame| {
///     let before = frame.value(0).clone();
///     frame.set_raw(0, Value::from("stamped"))?;
///     Ok(before)
/// })
/// .curried();
///
/// let storage = ValueCell::new(Value::from("original"));
/// let result = stamp.call([Value::Cell(storage.clone())]);
///
/// // The named binding saw the pre-write contents...
/// assert_eq!(result, Ok(Value::from("original")));
/// // ...and the caller's storage saw the write.
/// assert_eq!(storage.get(), Value::from("stamped"));
/// ```
#[derive(Debug)]
pub struct Invocation {
    values: Vec<Value>,
    raw: Vec<Value>,
}

impl Invocation {
    pub(crate) const fn new(values: Vec<Value>, raw: Vec<Value>) -> Self {
        Self { values, raw }
    }

    pub(crate) const fn empty() -> Self {
        Self {
            values: Vec::new(),
            raw: Vec::new(),
        }
    }

    // =========================================================================
    // Named bindings (value copies)
    // =========================================================================

    /// The named bindings: one value per declared parameter, collectors
    /// materialized, cells dereferenced.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The named binding for declared parameter `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a declared parameter slot.
    #[must_use]
    pub fn value(&self, index: usize) -> &Value {
        &self.values[index]
    }

    // =========================================================================
    // Raw slots (caller storage)
    // =========================================================================

    /// The raw argument list exactly as passed, before collection.
    ///
    /// Its length is at least the arity and can exceed it when collector
    /// slots absorbed surplus values.
    #[must_use]
    pub fn raw(&self) -> &[Value] {
        &self.raw
    }

    /// Number of raw slots.
    #[must_use]
    pub fn raw_len(&self) -> usize {
        self.raw.len()
    }

    /// Writes `value` through the caller's storage behind raw slot
    /// `index`.
    ///
    /// The write is visible to the caller after the call returns.
    ///
    /// # Errors
    ///
    /// Returns [`AliasingUnsupportedError`] when the slot was passed by
    /// plain value: there is no storage to write through, and silently
    /// dropping the write would lose the aliasing contract.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a raw slot.
    pub fn set_raw(&mut self, index: usize, value: Value) -> Result<(), AliasingUnsupportedError> {
        match &self.raw[index] {
            Value::Cell(cell) => {
                cell.set(value);
                Ok(())
            }
            _ => Err(AliasingUnsupportedError { index }),
        }
    }
}
