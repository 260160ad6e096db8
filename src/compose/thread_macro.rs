//! The `thread!` macro for eager left-to-right application.
//!
//! This module provides the [`thread!`] macro, which pipes a value
//! through stages immediately instead of building a pipeline function.

/// Pipes a value through stages from left to right, eagerly.
///
/// `thread!(x, f, g)` evaluates to `g(f(x))` as a
/// `Result<Value, CallError>`, stopping at the first stage that fails.
/// Stages are taken by reference, so they remain usable afterwards.
///
/// # Relationship with `chain!`
///
/// `thread!(x, f, g)` agrees with `chain!(f, g).apply(x)`; `thread!`
/// applies immediately while [`chain!`](crate::chain) builds a function.
///
/// # Examples
///
/// ```rust
/// use currier::thread;
/// use currier::function::ArityFunction;
/// use currier::value::Value;
///
/// let double = ArityFunction::of_arity(1, |frame| {
///     Ok(Value::Int(frame.value(0).as_int().unwrap_or(0) * 2))
/// })
/// .curried();
/// let add_one = ArityFunction::of_arity(1, |frame| {
///     Ok(Value::Int(frame.value(0).as_int().unwrap_or(0) + 1))
/// })
/// .curried();
///
/// // add_one(double(5)) = 11
/// let result = thread!(Value::Int(5), double, add_one);
/// assert_eq!(result, Ok(Value::Int(11)));
/// ```
#[macro_export]
macro_rules! thread {
    ($value:expr, $stage:expr $(,)?) => {
        $crate::compose::pipe($value, &$stage)
    };
    ($value:expr, $stage:expr, $($rest:expr),+ $(,)?) => {
        match $crate::compose::pipe($value, &$stage) {
            Ok(next) => $crate::thread!(next, $($rest),+),
            Err(error) => Err(error),
        }
    };
}
