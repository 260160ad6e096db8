//! The curried-dispatch core: descriptors, call dispatch, invocation
//! frames, and the error taxonomy.
//!
//! # Overview
//!
//! The module provides the following pieces:
//!
//! - [`ArityFunction`]: an immutable descriptor pairing a body with its
//!   declared parameter shape ([`Param`] list); validated at construction
//! - [`CurriedFunction`]: the accumulator/dispatcher implementing the
//!   call contract (identity / accumulate / invoke / overflow)
//! - [`Invocation`]: the dual-view argument frame handed to bodies
//!   (named value copies plus the raw, aliasable slot list)
//! - Errors: [`DeclarationError`], [`OverflowError`],
//!   [`AliasingUnsupportedError`], [`CollectorError`], unified as
//!   [`CallError`]
//!
//! # The call contract
//!
//! A function of arity `n` binds arguments left to right across any
//! number of calls. The grouping of arguments into calls never changes
//! the result:
//!
//! ```text
//! f(a, b, c)  ==  f(a)(b, c)  ==  f(a, b)(c)  ==  f(a)(b)(c)
//! ```
//!
//! Reaching `n` cumulative arguments triggers the body exactly once.
//! Supplying more than `n` is legal only when the body's result is itself
//! callable (the surplus becomes a new call against it) or when the
//! declaration carries collector slots (the surplus is collected).
//!
//! # Examples
//!
//! ```rust
//! use currier::function::ArityFunction;
//! use currier::value::Value;
//!
//! // three(one, two, three) = one + two * three
//! let three = ArityFunction::of_arity(3, |frame| {
//!     let one = frame.value(0).as_int().unwrap_or(0);
//!     let two = frame.value(1).as_int().unwrap_or(0);
//!     let third = frame.value(2).as_int().unwrap_or(0);
//!     Ok(Value::Int(one + two * third))
//! })
//! .with_name("three")
//! .curried();
//!
//! let args = [Value::Int(1), Value::Int(2), Value::Int(3)];
//! assert_eq!(three.call(args.clone()), Ok(Value::Int(7)));
//!
//! let partial = three.call([Value::Int(1)]).unwrap();
//! assert!(partial.is_callable());
//! ```

mod arity;
mod curried;
mod error;
mod invocation;

pub use arity::{ArityFunction, Body, Param};
pub use curried::CurriedFunction;
pub use error::{
    AliasingUnsupportedError, CallError, CollectorError, DeclarationError, DeclarationErrorKind,
    OverflowError,
};
pub use invocation::Invocation;
