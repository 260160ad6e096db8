//! The `ArityFunction` descriptor: a body paired with its parameter shape.
//!
//! A declaration front-end (keyword sugar, an explicit registration call,
//! reflection — the runtime does not care) produces an [`ArityFunction`]
//! through the constructor API here. The descriptor is validated once and
//! immutable afterwards; dispatch only ever reads it.
//!
//! # Design Decisions
//!
//! The body is shared behind `std::rc::Rc`, so every partial-application
//! snapshot of a [`CurriedFunction`] points at the same descriptor. This
//! allows:
//!
//! - A curried function to be called multiple times
//! - Partial applications to be reused independently
//! - Composition to capture stages without copying bodies

use std::fmt;
use std::rc::Rc;

use crate::value::Value;

use super::curried::CurriedFunction;
use super::error::{CallError, DeclarationError, DeclarationErrorKind};
use super::invocation::Invocation;

/// The computation behind an [`ArityFunction`], invoked exactly once per
/// successful full invocation.
pub type Body = Rc<dyn Fn(&mut Invocation) -> Result<Value, CallError>>;

/// One declared parameter slot.
///
/// Scalars bind a single value each; the two collector kinds absorb the
/// remaining arguments of the final call as a collection. At most one
/// collector of each kind may be declared, scalars first, `Rest` before
/// `Gather`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// Binds exactly one value.
    Scalar,
    /// List collector: absorbs the remaining positional values as a
    /// [`Value::List`].
    Rest,
    /// Map collector: absorbs the remaining values as alternating
    /// key/value pairs into a [`Value::Map`].
    Gather,
}

/// An immutable descriptor pairing a callable body with its declared
/// parameter shape.
///
/// The *arity* of the function is the number of scalar slots: the minimum
/// argument count that triggers invocation. Collector slots never block
/// invocation; they only shape surplus values.
///
/// # Examples
///
/// ```rust
/// use currier::function::{ArityFunction, Param};
/// use currier::value::Value;
///
/// let join = ArityFunction::new([Param::Scalar, Param::Rest], |frame| {
///     let separator = frame.value(0).as_str().unwrap_or("").to_string();
///     let parts: Vec<String> = frame.value(1).as_list().unwrap_or(&[])
///         .iter()
///         .map(std::string::ToString::to_string)
///         .collect();
///     Ok(Value::Str(parts.join(&separator)))
/// })
/// .expect("scalars precede the collector");
///
/// assert_eq!(join.arity(), 1);
/// let join = join.curried();
/// let result = join.call([Value::from("-"), Value::from(1), Value::from(2)]);
/// assert_eq!(result, Ok(Value::from("1-2")));
/// ```
#[derive(Clone)]
pub struct ArityFunction {
    params: Vec<Param>,
    arity: usize,
    rest_slot: Option<usize>,
    gather_slot: Option<usize>,
    name: Option<&'static str>,
    body: Body,
}

impl ArityFunction {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a descriptor from an ordered parameter shape.
    ///
    /// # Errors
    ///
    /// Returns a [`DeclarationError`] when the shape is malformed: a
    /// scalar after a collector, a duplicate collector kind, or a list
    /// collector declared after the map collector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currier::function::{ArityFunction, DeclarationErrorKind, Param};
    /// use currier::value::Value;
    ///
    /// let error = ArityFunction::new([Param::Rest, Param::Scalar], |_| Ok(Value::Unit))
    ///     .unwrap_err();
    /// assert_eq!(error.kind, DeclarationErrorKind::ScalarAfterCollector);
    /// assert_eq!(error.position, 1);
    /// ```
    pub fn new<I, F>(params: I, body: F) -> Result<Self, DeclarationError>
    where
        I: IntoIterator<Item = Param>,
        F: Fn(&mut Invocation) -> Result<Value, CallError> + 'static,
    {
        let params: Vec<Param> = params.into_iter().collect();
        let mut arity = 0;
        let mut rest_slot = None;
        let mut gather_slot = None;

        for (position, param) in params.iter().enumerate() {
            match param {
                Param::Scalar => {
                    if rest_slot.is_some() || gather_slot.is_some() {
                        return Err(DeclarationError {
                            kind: DeclarationErrorKind::ScalarAfterCollector,
                            position,
                        });
                    }
                    arity += 1;
                }
                Param::Rest => {
                    if rest_slot.is_some() {
                        return Err(DeclarationError {
                            kind: DeclarationErrorKind::DuplicateRest,
                            position,
                        });
                    }
                    if gather_slot.is_some() {
                        return Err(DeclarationError {
                            kind: DeclarationErrorKind::RestAfterGather,
                            position,
                        });
                    }
                    rest_slot = Some(position);
                }
                Param::Gather => {
                    if gather_slot.is_some() {
                        return Err(DeclarationError {
                            kind: DeclarationErrorKind::DuplicateGather,
                            position,
                        });
                    }
                    gather_slot = Some(position);
                }
            }
        }

        Ok(Self {
            params,
            arity,
            rest_slot,
            gather_slot,
            name: None,
            body: Rc::new(body),
        })
    }

    /// Builds an all-scalar descriptor of the given arity.
    ///
    /// This is the common case and cannot produce a malformed shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currier::function::ArityFunction;
    /// use currier::value::Value;
    ///
    /// let negate = ArityFunction::of_arity(1, |frame| {
    ///     Ok(Value::Int(-frame.value(0).as_int().unwrap_or(0)))
    /// });
    /// assert_eq!(negate.arity(), 1);
    /// ```
    pub fn of_arity<F>(arity: usize, body: F) -> Self
    where
        F: Fn(&mut Invocation) -> Result<Value, CallError> + 'static,
    {
        Self {
            params: vec![Param::Scalar; arity],
            arity,
            rest_slot: None,
            gather_slot: None,
            name: None,
            body: Rc::new(body),
        }
    }

    /// Attaches a diagnostic label to the descriptor.
    ///
    /// The label is pure metadata: it shows up in `Display`/`Debug`
    /// output and is never consulted by dispatch.
    #[must_use]
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    // =========================================================================
    // Read-only access
    // =========================================================================

    /// Number of scalar slots: the minimum argument count that triggers
    /// invocation.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// The declared parameter shape, in order.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Slot index of the list collector, if one is declared.
    #[must_use]
    pub const fn rest_slot(&self) -> Option<usize> {
        self.rest_slot
    }

    /// Slot index of the map collector, if one is declared.
    #[must_use]
    pub const fn gather_slot(&self) -> Option<usize> {
        self.gather_slot
    }

    /// Returns `true` if any collector slot is declared.
    #[must_use]
    pub const fn has_collectors(&self) -> bool {
        self.rest_slot.is_some() || self.gather_slot.is_some()
    }

    /// The diagnostic label, if one was attached.
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub(crate) fn body(&self) -> &Body {
        &self.body
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Wraps the descriptor into a curried function with no bound
    /// arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currier::function::ArityFunction;
    /// use currier::value::Value;
    ///
    /// let double = ArityFunction::of_arity(1, |frame| {
    ///     Ok(Value::Int(frame.value(0).as_int().unwrap_or(0) * 2))
    /// })
    /// .curried();
    ///
    /// assert_eq!(double.call([Value::Int(21)]), Ok(Value::Int(42)));
    /// ```
    #[must_use]
    pub fn curried(self) -> CurriedFunction {
        CurriedFunction::root(Rc::new(self))
    }

    /// Definition-time entry point.
    ///
    /// A declaration with no slots at all degenerates to an ordinary
    /// eager call: the body runs immediately and its result is returned.
    /// Every other shape wraps into a [`Value::Function`] with zero bound
    /// arguments.
    ///
    /// # Errors
    ///
    /// Propagates whatever an eagerly-invoked body raises; wrapping a
    /// non-degenerate declaration cannot fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currier::function::ArityFunction;
    /// use currier::value::Value;
    ///
    /// // Zero slots: the body runs at definition time.
    /// let result = ArityFunction::of_arity(0, |_| Ok(Value::Int(7))).instantiate();
    /// assert_eq!(result, Ok(Value::Int(7)));
    ///
    /// // One slot: the definition is a function value.
    /// let waiting = ArityFunction::of_arity(1, |frame| Ok(frame.value(0).clone()))
    ///     .instantiate()
    ///     .unwrap();
    /// assert!(waiting.is_callable());
    /// ```
    pub fn instantiate(self) -> Result<Value, CallError> {
        if self.arity == 0 && !self.has_collectors() {
            let mut invocation = Invocation::empty();
            return (self.body)(&mut invocation);
        }
        Ok(Value::Function(self.curried()))
    }
}

impl fmt::Debug for ArityFunction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ArityFunction")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
