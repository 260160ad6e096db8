//! Named composition operators.
//!
//! Each operator builds (or applies) a pipeline in terms of the ordinary
//! call contract, so partial application keeps working inside composed
//! functions exactly as it does outside them.

use crate::function::{ArityFunction, CallError, CurriedFunction};
use crate::value::Value;

/// Builds an arity-1 function threading its input through `stages` in
/// order.
///
/// This is the shared n-ary builder behind [`forward_compose`] and
/// [`backward_compose`]. Each stage receives the current value as its
/// *next* argument under the normal call contract; a stage still short of
/// arity yields its partial application, which flows to the following
/// stage as an ordinary function value. With no stages the result is the
/// identity function.
///
/// # Examples
///
/// ```rust
/// use currier::compose::compose_stages;
/// use currier::function::ArityFunction;
/// use currier::value::Value;
///
/// let add_one = ArityFunction::of_arity(1, |frame| {
///     Ok(Value::Int(frame.value(0).as_int().unwrap_or(0) + 1))
/// })
/// .curried();
///
/// let add_three = compose_stages([add_one.clone(), add_one.clone(), add_one]);
/// assert_eq!(add_three.apply(Value::Int(0)), Ok(Value::Int(3)));
///
/// let identity = compose_stages([]);
/// assert_eq!(identity.apply(Value::Int(9)), Ok(Value::Int(9)));
/// ```
pub fn compose_stages<I>(stages: I) -> CurriedFunction
where
    I: IntoIterator<Item = CurriedFunction>,
{
    let stages: Vec<CurriedFunction> = stages.into_iter().collect();
    ArityFunction::of_arity(1, move |frame| {
        let mut current = frame.value(0).clone();
        for stage in &stages {
            current = stage.apply(current)?;
        }
        Ok(current)
    })
    .with_name("composed")
    .curried()
}

/// Composes two functions, evaluating `first` first.
///
/// `forward_compose(f, g)` returns `h` with `h(x) = g(f(x))`.
///
/// # Examples
///
/// ```rust
/// use currier::compose::forward_compose;
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
/// let composed = forward_compose(&double, &add_one);
/// assert_eq!(composed.apply(Value::Int(5)), Ok(Value::Int(11)));
/// ```
#[must_use]
pub fn forward_compose(first: &CurriedFunction, second: &CurriedFunction) -> CurriedFunction {
    compose_stages([first.clone(), second.clone()])
}

/// Composes two functions in mathematical order, evaluating `inner`
/// first.
///
/// `backward_compose(f, g)` returns `h` with `h(x) = f(g(x))` — the
/// mirror of [`forward_compose`].
///
/// # Examples
///
/// ```rust
/// use currier::compose::backward_compose;
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
/// // double(add_one(5)) = 12
/// let composed = backward_compose(&double, &add_one);
/// assert_eq!(composed.apply(Value::Int(5)), Ok(Value::Int(12)));
/// ```
#[must_use]
pub fn backward_compose(outer: &CurriedFunction, inner: &CurriedFunction) -> CurriedFunction {
    compose_stages([inner.clone(), outer.clone()])
}

/// Applies `function` to `value` eagerly.
///
/// Not a function-producing operator: `pipe(x, f)` is `f(x)` under the
/// normal call contract, so it yields the body's result when one
/// argument completes `f`, and the resulting partial application
/// otherwise.
///
/// # Errors
///
/// As for [`CurriedFunction::call`].
///
/// # Examples
///
/// ```rust
/// use currier::compose::pipe;
/// use currier::function::ArityFunction;
/// use currier::value::Value;
///
/// let negate = ArityFunction::of_arity(1, |frame| {
///     Ok(Value::Int(-frame.value(0).as_int().unwrap_or(0)))
/// })
/// .curried();
///
/// assert_eq!(pipe(Value::Int(3), &negate), Ok(Value::Int(-3)));
/// ```
pub fn pipe(value: Value, function: &CurriedFunction) -> Result<Value, CallError> {
    function.apply(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_function(name: &'static str, body: fn(i64) -> i64) -> CurriedFunction {
        ArityFunction::of_arity(1, move |frame| {
            Ok(Value::Int(body(frame.value(0).as_int().unwrap_or(0))))
        })
        .with_name(name)
        .curried()
    }

    #[test]
    fn test_forward_evaluates_left_to_right() {
        let double = int_function("double", |value| value * 2);
        let add_one = int_function("add_one", |value| value + 1);

        let composed = forward_compose(&double, &add_one);

        assert_eq!(composed.apply(Value::Int(5)), Ok(Value::Int(11)));
    }

    #[test]
    fn test_backward_mirrors_forward() {
        let double = int_function("double", |value| value * 2);
        let add_one = int_function("add_one", |value| value + 1);

        let backward = backward_compose(&double, &add_one);
        let mirrored = forward_compose(&add_one, &double);

        assert_eq!(backward.apply(Value::Int(5)), mirrored.apply(Value::Int(5)));
    }

    #[test]
    fn test_composed_function_has_arity_one() {
        let double = int_function("double", |value| value * 2);
        let composed = forward_compose(&double, &double);

        assert_eq!(composed.arity(), 1);
        assert_eq!(composed.bound_len(), 0);
    }

    #[test]
    fn test_empty_stage_list_is_identity() {
        let identity = compose_stages([]);
        assert_eq!(identity.apply(Value::from("same")), Ok(Value::from("same")));
    }

    #[test]
    fn test_pipe_applies_eagerly() {
        let add_one = int_function("add_one", |value| value + 1);
        assert_eq!(pipe(Value::Int(1), &add_one), Ok(Value::Int(2)));
    }
}
