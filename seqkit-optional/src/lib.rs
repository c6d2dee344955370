//! Presence-aware helpers on top of [`Option`].
//!
//! Reducing a sequence or asking for its first value produces an optional
//! scalar. Rust already has one, so this crate only adds the handful of
//! operations the sequence API leans on: unwrapping with a default or with a
//! caller supplied error, a checked unwrap, and chainable callbacks that fire
//! on presence or absence.
use thiserror::Error;

/// Raised by [`Optional::get`] when no value is present.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no value present")]
    NoSuchElement,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Extension methods for a possibly absent value.
pub trait Optional<T>: Sized {
    /// Whether a value is present.
    fn is_present(&self) -> bool;

    /// Whether no value is present.
    fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// The value, or `default` when absent.
    fn value_or(self, default: T) -> T;

    /// The value, or whatever `supplier` produces when absent.
    fn value_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T;

    /// The value, or the error produced by `error` when absent.
    fn value_or_raise<E, F>(self, error: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> E;

    /// The value, or [`Error::NoSuchElement`] when absent.
    fn get(self) -> Result<T>;

    /// Run `action` on the value if present. Returns the receiver unchanged
    /// so it can be chained with [`Optional::on_absent`] in either order.
    fn on_present<F>(self, action: F) -> Self
    where
        F: FnOnce(&T);

    /// Run `action` if no value is present. Returns the receiver unchanged.
    fn on_absent<F>(self, action: F) -> Self
    where
        F: FnOnce();
}

impl<T> Optional<T> for Option<T> {
    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn value_or(self, default: T) -> T {
        self.unwrap_or(default)
    }

    #[inline]
    fn value_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.unwrap_or_else(supplier)
    }

    #[inline]
    fn value_or_raise<E, F>(self, error: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.ok_or_else(error)
    }

    #[inline]
    fn get(self) -> Result<T> {
        self.ok_or(Error::NoSuchElement)
    }

    fn on_present<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self {
            action(value);
        }
        self
    }

    fn on_absent<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }
}
