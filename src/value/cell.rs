//! Shared mutable storage for raw-slot aliasing.
//!
//! Most languages this runtime models have implicit pass-by-reference for
//! the raw argument list. Rust does not, so the contract is explicit: a
//! caller who wants a function body's raw-slot writes to be visible after
//! the call wraps the argument in a [`ValueCell`] and passes
//! [`Value::Cell`](crate::value::Value::Cell). Slots passed by plain value
//! have no backing storage and reject writes loudly.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::Value;

/// A shared, mutable cell holding a [`Value`].
///
/// Clones share storage: writing through any handle is observed by every
/// other handle. This is the single mutable entity in the crate, and it
/// only ever enters a call because the caller constructed it.
///
/// Equality compares contents, so a cell is equal to another cell holding
/// an equal value even when their storage is distinct; use
/// [`shares_storage_with`](Self::shares_storage_with) to test identity.
///
/// # Examples
///
/// ```rust
/// use currier::value::{Value, ValueCell};
///
/// let cell = ValueCell::new(Value::Int(1));
/// let handle = cell.clone();
///
/// handle.set(Value::Int(2));
/// assert_eq!(cell.get(), Value::Int(2));
/// assert!(cell.shares_storage_with(&handle));
/// ```
#[derive(Clone, Default)]
pub struct ValueCell(Rc<RefCell<Value>>);

impl ValueCell {
    /// Creates a cell holding `value`.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Returns a snapshot of the current contents.
    ///
    /// # Panics
    ///
    /// Panics if called while a write through another handle is in
    /// progress on the same storage (re-entrant access; see the
    /// concurrency notes in the crate documentation).
    #[must_use]
    pub fn get(&self) -> Value {
        self.0.borrow().clone()
    }

    /// Replaces the contents with `value`.
    ///
    /// # Panics
    ///
    /// Panics on re-entrant access, as for [`get`](Self::get).
    pub fn set(&self, value: Value) {
        *self.0.borrow_mut() = value;
    }

    /// Replaces the contents with `value` and returns the previous value.
    ///
    /// # Panics
    ///
    /// Panics on re-entrant access, as for [`get`](Self::get).
    pub fn replace(&self, value: Value) -> Value {
        self.0.replace(value)
    }

    /// Returns `true` if both handles point at the same storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use currier::value::{Value, ValueCell};
    ///
    /// let cell = ValueCell::new(Value::Int(1));
    /// let twin = ValueCell::new(Value::Int(1));
    ///
    /// assert_eq!(cell, twin); // equal contents
    /// assert!(!cell.shares_storage_with(&twin)); // distinct storage
    /// ```
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ValueCell {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for ValueCell {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ValueCell").field(&*self.0.borrow()).finish()
    }
}
