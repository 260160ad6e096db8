//! Error types for declaration and call dispatch.
//!
//! Declaration-time problems (a malformed parameter shape) are reported as
//! [`DeclarationError`] and never reach the dispatch loop. Everything a
//! call can raise is unified under [`CallError`] so function bodies and
//! composition stages can propagate failures with `?`. Argument
//! accumulation itself has no failure path: it only appends values and
//! compares lengths.

use std::fmt;

/// The specific way a parameter shape is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationErrorKind {
    /// A scalar parameter was declared after a collector.
    ScalarAfterCollector,
    /// More than one list collector was declared.
    DuplicateRest,
    /// More than one map collector was declared.
    DuplicateGather,
    /// A list collector was declared after the map collector.
    RestAfterGather,
}

/// A malformed function declaration, rejected at construction time.
///
/// The error is fatal to the declaration it names and affects nothing
/// else; no `ArityFunction` is produced.
///
/// # Examples
///
/// ```rust
/// use currier::function::{DeclarationError, DeclarationErrorKind};
///
/// let error = DeclarationError {
///     kind: DeclarationErrorKind::ScalarAfterCollector,
///     position: 2,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "invalid declaration at parameter 2: a scalar parameter may not follow a collector"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationError {
    /// What is wrong with the shape.
    pub kind: DeclarationErrorKind,
    /// Index of the offending parameter in the declared list.
    pub position: usize,
}

impl fmt::Display for DeclarationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            DeclarationErrorKind::ScalarAfterCollector => {
                "a scalar parameter may not follow a collector"
            }
            DeclarationErrorKind::DuplicateRest => "only one list collector may be declared",
            DeclarationErrorKind::DuplicateGather => "only one map collector may be declared",
            DeclarationErrorKind::RestAfterGather => {
                "the list collector must precede the map collector"
            }
        };
        write!(
            formatter,
            "invalid declaration at parameter {}: {reason}",
            self.position
        )
    }
}

impl std::error::Error for DeclarationError {}

/// A call supplied more arguments than the function's arity, and the
/// invocation's result was not callable to absorb the surplus.
///
/// This is a caller bug (too many arguments), not corruption: the body
/// ran, its result was produced, and the surplus had nowhere to go.
///
/// # Examples
///
/// ```rust
/// use currier::function::OverflowError;
///
/// let error = OverflowError { arity: 2, supplied: 3 };
/// assert_eq!(
///     format!("{}", error),
///     "call supplied 3 arguments, but the function takes 2 and its result is not callable"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowError {
    /// The declared arity of the invoked function.
    pub arity: usize,
    /// How many arguments the accumulation held when invocation fired.
    pub supplied: usize,
}

impl fmt::Display for OverflowError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "call supplied {} arguments, but the function takes {} and its result is not callable",
            self.supplied, self.arity
        )
    }
}

impl std::error::Error for OverflowError {}

/// A raw-slot write was requested on a slot with no addressable backing
/// storage.
///
/// Only arguments the caller passed as reference cells can be written
/// through; a plain value has no storage behind it, and silently dropping
/// the write would lose the pass-by-reference contract. The failure is
/// loud and local to the offending slot.
///
/// # Examples
///
/// ```rust
/// use currier::function::AliasingUnsupportedError;
///
/// let error = AliasingUnsupportedError { index: 1 };
/// assert_eq!(
///     format!("{}", error),
///     "raw slot 1 has no addressable backing storage; pass a reference cell to opt into aliasing"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasingUnsupportedError {
    /// Index of the raw slot the write targeted.
    pub index: usize,
}

impl fmt::Display for AliasingUnsupportedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "raw slot {} has no addressable backing storage; pass a reference cell to opt into aliasing",
            self.index
        )
    }
}

impl std::error::Error for AliasingUnsupportedError {}

/// The remaining arguments could not be shaped into a map collector.
///
/// A map collector consumes the remaining arguments as alternating
/// key/value pairs with string keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectorError {
    /// The remainder held an odd number of values, so the last key has
    /// no value.
    OddKeyValues {
        /// How many values the remainder held.
        remainder: usize,
    },
    /// A key position held a non-string value.
    NonStringKey {
        /// Index of the offending value in the full argument list.
        position: usize,
    },
}

impl fmt::Display for CollectorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddKeyValues { remainder } => write!(
                formatter,
                "map collector needs alternating key/value pairs, but {remainder} values remained"
            ),
            Self::NonStringKey { position } => write!(
                formatter,
                "map collector key at argument {position} is not a string"
            ),
        }
    }
}

impl std::error::Error for CollectorError {}

/// Any error a call can raise.
///
/// Function bodies return `Result<Value, CallError>`, so a body that
/// invokes other curried functions (composition stages do exactly this)
/// propagates their failures with `?`.
///
/// # Examples
///
/// ```rust
/// use currier::function::{CallError, OverflowError};
///
/// let error = CallError::from(OverflowError { arity: 2, supplied: 5 });
/// assert!(matches!(error, CallError::Overflow(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// Surplus arguments with a non-callable result.
    Overflow(OverflowError),
    /// A raw-slot write on a slot without backing storage.
    Aliasing(AliasingUnsupportedError),
    /// A malformed map-collector remainder.
    Collector(CollectorError),
}

impl fmt::Display for CallError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow(error) => write!(formatter, "{error}"),
            Self::Aliasing(error) => write!(formatter, "{error}"),
            Self::Collector(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CallError {}

impl From<OverflowError> for CallError {
    fn from(error: OverflowError) -> Self {
        Self::Overflow(error)
    }
}

impl From<AliasingUnsupportedError> for CallError {
    fn from(error: AliasingUnsupportedError) -> Self {
        Self::Aliasing(error)
    }
}

impl From<CollectorError> for CallError {
    fn from(error: CollectorError) -> Self {
        Self::Collector(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_error_display() {
        let error = DeclarationError {
            kind: DeclarationErrorKind::RestAfterGather,
            position: 3,
        };
        assert_eq!(
            format!("{error}"),
            "invalid declaration at parameter 3: the list collector must precede the map collector"
        );
    }

    #[test]
    fn test_overflow_error_display() {
        let error = OverflowError {
            arity: 2,
            supplied: 4,
        };
        assert_eq!(
            format!("{error}"),
            "call supplied 4 arguments, but the function takes 2 and its result is not callable"
        );
    }

    #[test]
    fn test_collector_error_display() {
        let odd = CollectorError::OddKeyValues { remainder: 3 };
        assert_eq!(
            format!("{odd}"),
            "map collector needs alternating key/value pairs, but 3 values remained"
        );

        let key = CollectorError::NonStringKey { position: 2 };
        assert_eq!(
            format!("{key}"),
            "map collector key at argument 2 is not a string"
        );
    }

    #[test]
    fn test_call_error_wraps_each_kind() {
        let overflow = CallError::from(OverflowError {
            arity: 1,
            supplied: 2,
        });
        let aliasing = CallError::from(AliasingUnsupportedError { index: 0 });
        let collector = CallError::from(CollectorError::OddKeyValues { remainder: 1 });

        assert!(matches!(overflow, CallError::Overflow(_)));
        assert!(matches!(aliasing, CallError::Aliasing(_)));
        assert!(matches!(collector, CallError::Collector(_)));
    }

    #[test]
    fn test_call_error_display_delegates() {
        let error = CallError::Aliasing(AliasingUnsupportedError { index: 2 });
        assert_eq!(
            format!("{error}"),
            "raw slot 2 has no addressable backing storage; pass a reference cell to opt into aliasing"
        );
    }
}
