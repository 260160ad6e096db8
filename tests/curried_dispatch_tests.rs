//! Integration tests for the curried call contract.
//!
//! Covers progressive binding, the identity/no-op call, invocation,
//! overflow, and the eager zero-slot degenerate case.

use currier::function::{ArityFunction, CallError, CurriedFunction, OverflowError};
use currier::value::Value;
use rstest::rstest;

/// three(one, two, three) = one + two * three
fn three() -> CurriedFunction {
    ArityFunction::of_arity(3, |frame| {
        let one = frame.value(0).as_int().unwrap_or(0);
        let two = frame.value(1).as_int().unwrap_or(0);
        let third = frame.value(2).as_int().unwrap_or(0);
        Ok(Value::Int(one + two * third))
    })
    .with_name("three")
    .curried()
}

fn sum_of_two() -> CurriedFunction {
    ArityFunction::of_arity(2, |frame| {
        let sum = frame.value(0).as_int().unwrap_or(0) + frame.value(1).as_int().unwrap_or(0);
        Ok(Value::Int(sum))
    })
    .with_name("sum")
    .curried()
}

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

// =============================================================================
// Progressive binding
// =============================================================================

mod binding_tests {
    use super::*;

    #[test]
    fn test_one_shot_call() {
        assert_eq!(three().call(ints(&[1, 2, 3])), Ok(Value::Int(7)));
    }

    #[test]
    fn test_partial_application_returns_a_callable() {
        let partial = three().call(ints(&[1])).unwrap();
        assert!(partial.is_callable());

        let partial = partial.into_function().unwrap();
        assert_eq!(partial.bound_len(), 1);
        assert_eq!(partial.remaining(), 2);
    }

    #[test]
    fn test_rest_supplied_in_one_group() {
        let partial = three().call(ints(&[1])).unwrap().into_function().unwrap();
        assert_eq!(partial.call(ints(&[2, 3])), Ok(Value::Int(7)));
    }

    #[test]
    fn test_one_argument_at_a_time() {
        let with_one = three().call(ints(&[1])).unwrap().into_function().unwrap();
        let with_two = with_one.call(ints(&[2])).unwrap().into_function().unwrap();
        assert_eq!(with_two.call(ints(&[3])), Ok(Value::Int(7)));
    }

    #[rstest]
    #[case::singletons(vec![vec![1], vec![2], vec![3]])]
    #[case::pair_then_single(vec![vec![1, 2], vec![3]])]
    #[case::single_then_pair(vec![vec![1], vec![2, 3]])]
    #[case::one_shot(vec![vec![1, 2, 3]])]
    fn test_every_grouping_agrees(#[case] groups: Vec<Vec<i64>>) {
        let mut current = Value::Function(three());
        for group in groups {
            let callable = current.into_function().expect("arity not yet reached");
            current = callable.call(ints(&group)).unwrap();
        }
        assert_eq!(current, Value::Int(7));
    }

    #[test]
    fn test_partial_applications_are_reusable() {
        let add_five = sum_of_two()
            .call(ints(&[5]))
            .unwrap()
            .into_function()
            .unwrap();

        for index in 0..100 {
            assert_eq!(add_five.call(ints(&[index])), Ok(Value::Int(5 + index)));
        }
    }

    #[test]
    fn test_binding_does_not_disturb_earlier_snapshots() {
        let base = sum_of_two();
        let with_one = base.call(ints(&[1])).unwrap().into_function().unwrap();
        let with_two = base.call(ints(&[2])).unwrap().into_function().unwrap();

        assert_eq!(with_one.call(ints(&[10])), Ok(Value::Int(11)));
        assert_eq!(with_two.call(ints(&[10])), Ok(Value::Int(12)));
        assert_eq!(base.bound_len(), 0);
    }
}

// =============================================================================
// Identity / alias calls
// =============================================================================

mod identity_tests {
    use super::*;

    #[test]
    fn test_empty_first_call_yields_an_alias() {
        let original = three();
        let alias = original.call(Vec::new()).unwrap().into_function().unwrap();

        assert_eq!(alias, original);
        assert_eq!(alias.call(ints(&[1, 2, 3])), Ok(Value::Int(7)));
    }

    #[test]
    fn test_empty_call_mid_binding_is_a_no_op() {
        let partial = three().call(ints(&[1])).unwrap().into_function().unwrap();
        let unchanged = partial.call(Vec::new()).unwrap().into_function().unwrap();

        assert_eq!(unchanged, partial);
        assert_eq!(unchanged.call(ints(&[2, 3])), Ok(Value::Int(7)));
    }

    #[test]
    fn test_repeated_empty_calls_never_invoke() {
        let mut current = three();
        for _ in 0..5 {
            current = current.call(Vec::new()).unwrap().into_function().unwrap();
        }
        assert_eq!(current.bound_len(), 0);
    }
}

// =============================================================================
// Overflow
// =============================================================================

mod overflow_tests {
    use super::*;

    #[test]
    fn test_surplus_with_non_callable_result_is_an_error() {
        let error = sum_of_two().call(ints(&[1, 2, 3])).unwrap_err();
        assert_eq!(
            error,
            CallError::Overflow(OverflowError {
                arity: 2,
                supplied: 3
            })
        );
    }

    #[test]
    fn test_surplus_counts_bound_arguments() {
        let partial = sum_of_two()
            .call(ints(&[1]))
            .unwrap()
            .into_function()
            .unwrap();
        let error = partial.call(ints(&[2, 3, 4])).unwrap_err();

        assert_eq!(
            error,
            CallError::Overflow(OverflowError {
                arity: 2,
                supplied: 4
            })
        );
    }

    /// make_adder(a) returns a one-argument function adding a.
    fn make_adder() -> CurriedFunction {
        ArityFunction::of_arity(1, |frame| {
            let base = frame.value(0).as_int().unwrap_or(0);
            Ok(Value::Function(
                ArityFunction::of_arity(1, move |inner| {
                    Ok(Value::Int(base + inner.value(0).as_int().unwrap_or(0)))
                })
                .curried(),
            ))
        })
        .with_name("make_adder")
        .curried()
    }

    #[test]
    fn test_surplus_chains_into_a_callable_result() {
        assert_eq!(make_adder().call(ints(&[40, 2])), Ok(Value::Int(42)));
    }

    #[test]
    fn test_surplus_chains_match_explicit_chains() {
        let chained = make_adder()
            .call(ints(&[40]))
            .unwrap()
            .into_function()
            .unwrap()
            .call(ints(&[2]));

        assert_eq!(make_adder().call(ints(&[40, 2])), chained);
    }

    #[test]
    fn test_exhausted_chain_still_overflows() {
        // Two surplus values against a chain that absorbs only one.
        let error = make_adder().call(ints(&[40, 2, 9])).unwrap_err();
        assert_eq!(
            error,
            CallError::Overflow(OverflowError {
                arity: 1,
                supplied: 2
            })
        );
    }
}

// =============================================================================
// Zero-slot declarations
// =============================================================================

mod eager_tests {
    use super::*;

    #[test]
    fn test_zero_slot_declaration_invokes_at_definition() {
        let result = ArityFunction::of_arity(0, |_| Ok(Value::from("ran"))).instantiate();
        assert_eq!(result, Ok(Value::from("ran")));
    }

    #[test]
    fn test_positive_arity_declaration_waits() {
        let value = ArityFunction::of_arity(2, |_| Ok(Value::Unit))
            .instantiate()
            .unwrap();
        assert!(value.is_callable());
    }
}

// =============================================================================
// Metadata
// =============================================================================

mod metadata_tests {
    use super::*;

    #[test]
    fn test_bound_and_arity_are_inspectable() {
        let function = three();
        assert_eq!(function.arity(), 3);
        assert_eq!(function.bound_len(), 0);
        assert_eq!(function.target().name(), Some("three"));

        let partial = function.call(ints(&[1])).unwrap().into_function().unwrap();
        assert_eq!(partial.arity(), 3);
        assert_eq!(partial.bound_len(), 1);
    }

    #[test]
    fn test_display_shows_binding_progress() {
        let partial = three().call(ints(&[1, 2])).unwrap();
        assert_eq!(partial.to_string(), "<curried three 2/3>");
    }
}
