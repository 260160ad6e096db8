//! Dynamic values for the curried-dispatch runtime.
//!
//! Arity is a run-time quantity in this library, so every argument and
//! every result travels as a [`Value`]: a small dynamic universe of
//! scalars, collections, callable functions, and reference cells.
//!
//! # Overview
//!
//! - Scalars: [`Value::Unit`], [`Value::Bool`], [`Value::Int`],
//!   [`Value::Float`], [`Value::Str`]
//! - Collections: [`Value::List`] and [`Value::Map`] (string keys), the
//!   shapes produced by argument collectors
//! - [`Value::Function`]: a curried function; the only callable value
//! - [`Value::Cell`]: a shared, mutable [`ValueCell`] — the caller's
//!   opt-in addressable storage for raw-slot aliasing
//!
//! Values are immutable snapshots: cloning is always safe and never
//! entangles two owners, with the single deliberate exception of
//! [`Value::Cell`], whose clones share storage by design.
//!
//! # Examples
//!
//! ```rust
//! use currier::value::Value;
//!
//! let number = Value::from(42);
//! assert_eq!(number.as_int(), Some(42));
//! assert!(!number.is_callable());
//!
//! let items = Value::from(vec![Value::from(1), Value::from(2)]);
//! assert_eq!(items.to_string(), "[1, 2]");
//! ```
//!
//! ## Reference cells
//!
//! ```rust
//! use currier::value::{Value, ValueCell};
//!
//! let cell = ValueCell::new(Value::from("before"));
//! let argument = Value::Cell(cell.clone());
//!
//! // Writing through any handle is visible to every other handle.
//! cell.set(Value::from("after"));
//! assert_eq!(argument, Value::Cell(ValueCell::new(Value::from("after"))));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::function::CurriedFunction;

mod cell;

pub use cell::ValueCell;

/// A dynamic runtime value.
///
/// `Value` is the argument and result currency of the dispatch core.
/// Equality is structural, except for [`Value::Function`] (descriptor
/// identity plus bound arguments; bodies are opaque) and
/// [`Value::Cell`] (compared by contents).
///
/// # Examples
///
/// ```rust
/// use currier::value::Value;
///
/// let greeting = Value::from("hello");
/// assert_eq!(greeting.as_str(), Some("hello"));
/// assert_eq!(greeting.type_name(), "string");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The unit value, produced by bodies with nothing to return.
    #[default]
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered list, the shape produced by a list collector.
    List(Vec<Value>),
    /// A string-keyed map, the shape produced by a map collector.
    Map(BTreeMap<String, Value>),
    /// A callable curried function.
    Function(CurriedFunction),
    /// Shared mutable storage the caller opted into for aliasing.
    Cell(ValueCell),
}

impl Value {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Wraps a value in a fresh reference cell.
    ///
    /// This is the caller-side opt-in for raw-slot aliasing: a body can
    /// write through a cell argument, and the write is visible to every
    /// holder of the same cell after the call returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currier::value::Value;
    ///
    /// let argument = Value::cell(Value::Int(1));
    /// assert!(argument.as_cell().is_some());
    /// ```
    pub fn cell(value: Self) -> Self {
        Self::Cell(ValueCell::new(value))
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns the name of this value's type, for diagnostics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currier::value::Value;
    ///
    /// assert_eq!(Value::Unit.type_name(), "unit");
    /// assert_eq!(Value::from(1.5).type_name(), "float");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Function(_) => "function",
            Self::Cell(_) => "cell",
        }
    }

    /// Returns `true` if this value can absorb a call.
    ///
    /// Only [`Value::Function`] is callable; the overflow rule of the
    /// dispatch contract uses this to decide between chaining surplus
    /// arguments and raising an overflow error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currier::value::Value;
    ///
    /// assert!(!Value::Int(3).is_callable());
    /// ```
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the inner integer, if this is an [`Value::Int`].
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the inner float, if this is a [`Value::Float`].
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the inner boolean, if this is a [`Value::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the inner string slice, if this is a [`Value::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the inner list, if this is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the inner map, if this is a [`Value::Map`].
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the inner function, if this is a [`Value::Function`].
    #[must_use]
    pub const fn as_function(&self) -> Option<&CurriedFunction> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the inner cell handle, if this is a [`Value::Cell`].
    #[must_use]
    pub const fn as_cell(&self) -> Option<&ValueCell> {
        match self {
            Self::Cell(cell) => Some(cell),
            _ => None,
        }
    }

    /// Consumes the value and returns the inner function, if callable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currier::value::Value;
    ///
    /// assert!(Value::Int(1).into_function().is_none());
    /// ```
    #[must_use]
    pub fn into_function(self) -> Option<CurriedFunction> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => write!(formatter, "()"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Str(value) => write!(formatter, "{value}"),
            Self::List(values) => {
                write!(formatter, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                write!(formatter, "]")
            }
            Self::Map(entries) => {
                write!(formatter, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                write!(formatter, "}}")
            }
            Self::Function(function) => write!(formatter, "{function}"),
            Self::Cell(cell) => write!(formatter, "cell({})", cell.get()),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self::Map(entries)
    }
}

impl From<CurriedFunction> for Value {
    fn from(function: CurriedFunction) -> Self {
        Self::Function(function)
    }
}

impl From<ValueCell> for Value {
    fn from(cell: ValueCell) -> Self {
        Self::Cell(cell)
    }
}

// Function and Cell variants hold Rc-backed state.
static_assertions::assert_not_impl_any!(Value: Send, Sync);
