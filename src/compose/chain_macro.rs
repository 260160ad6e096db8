//! The `chain!` macro for building pipeline functions.
//!
//! This module provides the [`chain!`] macro, left-to-right sugar over
//! [`compose_stages`](crate::compose::compose_stages).

/// Builds a pipeline function from stages, left to right.
///
/// `chain!(f, g, h)` returns an arity-1 function computing `h(g(f(x)))`:
/// the first stage listed is the first applied, matching the data-flow
/// reading. The stages are moved into the pipeline; pass clones to keep
/// using them separately.
///
/// # Syntax
///
/// - `chain!(f)` - A pipeline with a single stage
/// - `chain!(f, g)` - Equivalent to `forward_compose(&f, &g)`
/// - `chain!(f, g, h, ...)` - Any number of stages
///
/// # Examples
///
/// ## Basic chaining
///
/// ```rust
/// use currier::chain;
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
/// let pipeline = chain!(double, add_one);
/// assert_eq!(pipeline.apply(Value::Int(5)), Ok(Value::Int(11)));
/// ```
///
/// ## Partially applied stages
///
/// ```rust
/// use currier::chain;
/// use currier::function::ArityFunction;
/// use currier::value::Value;
///
/// let concat = ArityFunction::of_arity(2, |frame| {
///     let mut joined = frame.value(0).as_str().unwrap_or("").to_string();
///     joined.push_str(frame.value(1).as_str().unwrap_or(""));
///     Ok(Value::Str(joined))
/// })
/// .curried();
///
/// let prepend = concat.call([Value::from("Ciao ")]).unwrap().into_function().unwrap();
/// let shout = ArityFunction::of_arity(1, |frame| {
///     Ok(Value::Str(format!("{}!", frame.value(0).as_str().unwrap_or(""))))
/// })
/// .curried();
///
/// let pipeline = chain!(prepend, shout);
/// assert_eq!(pipeline.apply(Value::from("Bella")), Ok(Value::from("Ciao Bella!")));
/// ```
#[macro_export]
macro_rules! chain {
    ($($stage:expr),+ $(,)?) => {
        $crate::compose::compose_stages([$($stage),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::function::ArityFunction;
    use crate::value::Value;

    #[test]
    fn test_chain_single_stage() {
        let double = ArityFunction::of_arity(1, |frame| {
            Ok(Value::Int(frame.value(0).as_int().unwrap_or(0) * 2))
        })
        .curried();

        let pipeline = chain!(double);
        assert_eq!(pipeline.apply(Value::Int(4)), Ok(Value::Int(8)));
    }

    #[test]
    fn test_chain_applies_first_stage_first() {
        let double = ArityFunction::of_arity(1, |frame| {
            Ok(Value::Int(frame.value(0).as_int().unwrap_or(0) * 2))
        })
        .curried();
        let add_one = ArityFunction::of_arity(1, |frame| {
            Ok(Value::Int(frame.value(0).as_int().unwrap_or(0) + 1))
        })
        .curried();

        let pipeline = chain!(double, add_one);
        assert_eq!(pipeline.apply(Value::Int(5)), Ok(Value::Int(11)));
    }

    #[test]
    fn test_chain_accepts_trailing_comma() {
        let add_one = ArityFunction::of_arity(1, |frame| {
            Ok(Value::Int(frame.value(0).as_int().unwrap_or(0) + 1))
        })
        .curried();

        let pipeline = chain!(add_one.clone(), add_one,);
        assert_eq!(pipeline.apply(Value::Int(0)), Ok(Value::Int(2)));
    }
}
