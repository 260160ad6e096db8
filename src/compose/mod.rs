//! Function composition algebra over curried functions.
//!
//! This module provides operators that chain curried functions into
//! pipelines: composing produces a new arity-1 [`CurriedFunction`] that
//! threads its single input through a fixed, ordered list of stages;
//! piping applies a value eagerly.
//!
//! # Overview
//!
//! - [`forward_compose`]: evaluate the first function first —
//!   `forward_compose(f, g)(x) = g(f(x))`
//! - [`backward_compose`]: the mirror, mathematical order —
//!   `backward_compose(f, g)(x) = f(g(x))`
//! - [`compose_stages`]: the n-ary builder both operators share
//! - [`pipe`]: eager application — `pipe(x, f) = f(x)`
//! - [`chain!`]: macro sugar building a left-to-right pipeline function
//! - [`thread!`]: macro sugar eagerly piping a value through stages
//!
//! Every stage is invoked through the *normal* call contract, so a stage
//! that is itself partially applied is legal: the piped value becomes
//! that stage's next argument, and a stage left short of arity passes its
//! partial application downstream as an ordinary function value.
//!
//! # Examples
//!
//! ## Forward composition
//!
//! ```rust
//! use currier::prelude::*;
//!
//! let double = ArityFunction::of_arity(1, |frame| {
//!     Ok(Value::Int(frame.value(0).as_int().unwrap_or(0) * 2))
//! })
//! .curried();
//! let add_one = ArityFunction::of_arity(1, |frame| {
//!     Ok(Value::Int(frame.value(0).as_int().unwrap_or(0) + 1))
//! })
//! .curried();
//!
//! // forward_compose(f, g)(x) = g(f(x))
//! let composed = forward_compose(&double, &add_one);
//! assert_eq!(composed.apply(Value::Int(5)), Ok(Value::Int(11)));
//! ```
//!
//! ## Piping through partially applied stages
//!
//! ```rust
//! use currier::prelude::*;
//!
//! let concat = ArityFunction::of_arity(2, |frame| {
//!     let mut joined = frame.value(0).as_str().unwrap_or("").to_string();
//!     joined.push_str(frame.value(1).as_str().unwrap_or(""));
//!     Ok(Value::Str(joined))
//! })
//! .curried();
//!
//! // Bind the first argument, pipe the second.
//! let greet = concat.call([Value::from("Hello, ")]).unwrap();
//! let greet = greet.as_function().unwrap();
//! assert_eq!(pipe(Value::from("World"), greet), Ok(Value::from("Hello, World")));
//! ```
//!
//! # Laws
//!
//! - **Associativity**:
//!   `forward_compose(forward_compose(f, g), h)` and
//!   `forward_compose(f, forward_compose(g, h))` are behaviorally
//!   identical for all inputs (the intermediate representation may
//!   differ).
//! - **Mirror**: `backward_compose(f, g)(x) == forward_compose(g, f)(x)`
//! - **Pipe agreement**: `pipe(x, f)` equals the terminal result of
//!   `f(x)` when one argument completes `f`, and is the resulting
//!   partial application otherwise.
//!
//! [`CurriedFunction`]: crate::function::CurriedFunction

mod chain_macro;
mod operators;
mod thread_macro;

pub use operators::{backward_compose, compose_stages, forward_compose, pipe};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::chain;
pub use crate::thread;
