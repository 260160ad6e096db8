//! # currier
//!
//! Runtime currying and partial application for Rust: arity-driven call
//! dispatch, argument collectors, and function composition.
//!
//! ## Overview
//!
//! This library implements currying as a *runtime* contract rather than a
//! compile-time one: a function is described by an [`ArityFunction`]
//! (a body plus its declared parameter shape), and every call against the
//! resulting [`CurriedFunction`] either accumulates arguments, triggers the
//! underlying computation, or chains surplus arguments into the result.
//! Because arity is a run-time quantity, the library operates on a dynamic
//! [`Value`] universe, and misuse surfaces as `Result` errors instead of
//! type errors. It includes:
//!
//! - **Curried Dispatch**: progressive left-to-right argument binding with
//!   the accumulate / invoke / overflow call contract
//! - **Argument Collectors**: trailing list and map parameters that absorb
//!   the remaining arguments of the final call
//! - **Invocation Aliasing**: opt-in reference cells ([`ValueCell`]) that
//!   let a body mutate the caller's storage through the raw argument list
//! - **Function Composition**: forward/backward composition and pipe
//!   application, with `chain!` and `thread!` macro sugar
//!
//! ## Feature Flags
//!
//! - `compose`: composition algebra (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use currier::prelude::*;
//!
//! let add = ArityFunction::of_arity(2, |frame| {
//!     let sum = frame.value(0).as_int().unwrap_or(0) + frame.value(1).as_int().unwrap_or(0);
//!     Ok(Value::Int(sum))
//! })
//! .curried();
//!
//! // One-shot call
//! assert_eq!(add.call([Value::Int(2), Value::Int(3)]), Ok(Value::Int(5)));
//!
//! // Progressive binding
//! let add_two = add.call([Value::Int(2)]).unwrap();
//! let add_two = add_two.as_function().unwrap();
//! assert_eq!(add_two.call([Value::Int(3)]), Ok(Value::Int(5)));
//! ```
//!
//! [`ArityFunction`]: function::ArityFunction
//! [`CurriedFunction`]: function::CurriedFunction
//! [`Value`]: value::Value
//! [`ValueCell`]: value::ValueCell

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use currier::prelude::*;
/// ```
pub mod prelude {

    pub use crate::function::*;

    pub use crate::value::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod function;

pub mod value;

#[cfg(feature = "compose")]
pub mod compose;
