//! The `CurriedFunction` accumulator and its call contract.
//!
//! A `CurriedFunction` pairs a shared [`ArityFunction`] descriptor with
//! the ordered arguments bound so far. Every call decides between four
//! outcomes:
//!
//! 1. **Identity**: no new arguments — the same function, unchanged.
//! 2. **Accumulate**: still short of arity — a new snapshot with the
//!    arguments appended; the body is never touched.
//! 3. **Invoke**: arity reached — collectors resolve, the body runs once,
//!    and its result is returned. A fully-bound function value is never
//!    observed from outside.
//! 4. **Overflow**: past arity with no collectors — the body runs on the
//!    first `arity` values and the surplus becomes a new call against the
//!    result, which must itself be callable.
//!
//! Snapshots are immutable: binding more arguments produces a new value
//! and leaves every previously obtained partial application intact.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

use super::arity::ArityFunction;
use super::error::{CallError, CollectorError, OverflowError};
use super::invocation::Invocation;

/// Bound-argument buffer, in binding order.
///
/// Heap-backed rather than inline: a `Value` can itself be a
/// [`Value::Function`] wrapping a `CurriedFunction`, so storing bound
/// `Value`s inline here would make the type recursively sized. The
/// indirection through `Vec` breaks that cycle.
type BoundArgs = Vec<Value>;

/// A function value with some (possibly zero) arguments already bound.
///
/// Obtained from [`ArityFunction::curried`] or
/// [`ArityFunction::instantiate`], and from any call that does not reach
/// full arity. Cloning is cheap and yields a behaviorally identical
/// snapshot.
///
/// # Examples
///
/// ```rust
/// use currier::function::ArityFunction;
/// use currier::value::Value;
///
/// let subtract = ArityFunction::of_arity(2, |frame| {
///     let difference =
///         frame.value(0).as_int().unwrap_or(0) - frame.value(1).as_int().unwrap_or(0);
///     Ok(Value::Int(difference))
/// })
/// .curried();
///
/// // Bind the minuend, keep the partial application around, reuse it.
/// let from_ten = subtract.call([Value::Int(10)]).unwrap();
/// let from_ten = from_ten.as_function().unwrap();
///
/// assert_eq!(from_ten.call([Value::Int(3)]), Ok(Value::Int(7)));
/// assert_eq!(from_ten.call([Value::Int(4)]), Ok(Value::Int(6)));
/// ```
#[derive(Clone)]
pub struct CurriedFunction {
    target: Rc<ArityFunction>,
    bound: BoundArgs,
}

impl CurriedFunction {
    pub(crate) fn root(target: Rc<ArityFunction>) -> Self {
        Self {
            target,
            bound: BoundArgs::new(),
        }
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    /// The declared arity of the underlying function.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.target.arity()
    }

    /// How many arguments are already bound.
    #[must_use]
    pub fn bound_len(&self) -> usize {
        self.bound.len()
    }

    /// How many scalar arguments are still missing before invocation.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.target.arity() - self.bound.len()
    }

    /// The shared descriptor this function dispatches to.
    #[must_use]
    pub fn target(&self) -> &ArityFunction {
        &self.target
    }

    // =========================================================================
    // Call dispatch
    // =========================================================================

    /// Calls the function with `arguments`, following the call contract.
    ///
    /// Returns either the body's result (arity reached) or a new function
    /// value holding the accumulated arguments. Calling with no arguments
    /// returns this same function unchanged: supplying no new information
    /// is a no-op, not an invocation trigger.
    ///
    /// # Errors
    ///
    /// - [`CallError::Overflow`] when surplus arguments meet a
    ///   non-callable result
    /// - [`CallError::Collector`] when a map collector cannot shape the
    ///   remainder
    /// - whatever the body itself raises
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currier::function::ArityFunction;
    /// use currier::value::Value;
    ///
    /// let multiply = ArityFunction::of_arity(2, |frame| {
    ///     let product =
    ///         frame.value(0).as_int().unwrap_or(0) * frame.value(1).as_int().unwrap_or(0);
    ///     Ok(Value::Int(product))
    /// })
    /// .curried();
    ///
    /// // All groupings of the same arguments agree.
    /// assert_eq!(multiply.call([Value::Int(6), Value::Int(7)]), Ok(Value::Int(42)));
    ///
    /// let partial = multiply.call([Value::Int(6)]).unwrap();
    /// let partial = partial.as_function().unwrap();
    /// assert_eq!(partial.call([Value::Int(7)]), Ok(Value::Int(42)));
    /// ```
    pub fn call<I>(&self, arguments: I) -> Result<Value, CallError>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut total = self.bound.clone();
        total.extend(arguments);

        if total.len() == self.bound.len() {
            return Ok(Value::Function(self.clone()));
        }

        let arity = self.target.arity();
        if total.len() < arity {
            return Ok(Value::Function(Self {
                target: Rc::clone(&self.target),
                bound: total,
            }));
        }

        if total.len() == arity || self.target.has_collectors() {
            return self.invoke(total);
        }

        // Surplus without collectors: invoke on the first `arity` values,
        // then the surplus is a new call against the result.
        let supplied = total.len();
        let mut consumed = total;
        let surplus = consumed.split_off(arity);
        match self.invoke(consumed)? {
            Value::Function(next) => next.call(surplus),
            _ => Err(CallError::Overflow(OverflowError { arity, supplied })),
        }
    }

    /// Calls the function with a single argument.
    ///
    /// Equivalent to `call([argument])`; this is the shape composition
    /// stages use to thread a piped value.
    ///
    /// # Errors
    ///
    /// As for [`call`](Self::call).
    pub fn apply(&self, argument: Value) -> Result<Value, CallError> {
        self.call([argument])
    }

    fn invoke(&self, total: Vec<Value>) -> Result<Value, CallError> {
        let mut invocation = resolve(&self.target, total)?;
        (self.target.body())(&mut invocation)
    }
}

/// Splits the full argument list into named bindings and the raw view.
fn resolve(target: &ArityFunction, total: Vec<Value>) -> Result<Invocation, CallError> {
    let arity = target.arity();
    let mut values = Vec::with_capacity(target.params().len());
    for slot in &total[..arity] {
        values.push(dereference(slot));
    }

    if target.rest_slot().is_some() {
        let rest: Vec<Value> = total[arity..].iter().map(dereference).collect();
        values.push(Value::List(rest));
        if target.gather_slot().is_some() {
            // The list collector gathered everything from its position
            // onward; the map collector resolves empty.
            values.push(Value::Map(BTreeMap::new()));
        }
    } else if target.gather_slot().is_some() {
        values.push(gather_pairs(&total[arity..], arity)?);
    }

    Ok(Invocation::new(values, total))
}

/// Shapes the remainder into a map from alternating key/value pairs.
fn gather_pairs(remainder: &[Value], offset: usize) -> Result<Value, CallError> {
    if remainder.len() % 2 != 0 {
        return Err(CallError::Collector(CollectorError::OddKeyValues {
            remainder: remainder.len(),
        }));
    }

    let mut entries = BTreeMap::new();
    for (pair_index, pair) in remainder.chunks_exact(2).enumerate() {
        let Value::Str(key) = dereference(&pair[0]) else {
            return Err(CallError::Collector(CollectorError::NonStringKey {
                position: offset + pair_index * 2,
            }));
        };
        entries.insert(key, dereference(&pair[1]));
    }
    Ok(Value::Map(entries))
}

/// Named bindings are value copies: cells arrive dereferenced.
fn dereference(value: &Value) -> Value {
    match value {
        Value::Cell(cell) => cell.get(),
        other => other.clone(),
    }
}

impl PartialEq for CurriedFunction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.target, &other.target) && self.bound == other.bound
    }
}

impl fmt::Debug for CurriedFunction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CurriedFunction")
            .field("name", &self.target.name())
            .field("arity", &self.target.arity())
            .field("bound", &self.bound)
            .finish()
    }
}

impl fmt::Display for CurriedFunction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target.name() {
            Some(name) => write!(
                formatter,
                "<curried {name} {}/{}>",
                self.bound.len(),
                self.target.arity()
            ),
            None => write!(
                formatter,
                "<curried {}/{}>",
                self.bound.len(),
                self.target.arity()
            ),
        }
    }
}

// Snapshots share the descriptor through Rc.
static_assertions::assert_not_impl_any!(CurriedFunction: Send, Sync);
