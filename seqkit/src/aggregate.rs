//! Strategies for turning the values of a sequence into some other shape.
//!
//! An [`Aggregator`] receives the populated values of a sequence as an
//! ordered slice, which is empty for the empty sequence. Any
//! `FnOnce(&[T]) -> R` closure is an aggregator too.
use std::fmt::{Display, Write};
use std::hash::Hash;

use ahash::{HashSet, HashSetExt};

/// Folds an ordered view of values into an output.
pub trait Aggregator<T> {
    type Output;

    fn aggregate(self, items: &[T]) -> Self::Output;
}

impl<T, R, F> Aggregator<T> for F
where
    F: FnOnce(&[T]) -> R,
{
    type Output = R;

    fn aggregate(self, items: &[T]) -> R {
        self(items)
    }
}

/// Join the `Display` form of each value into one string.
///
/// With no values the result is just the prefix followed by the suffix,
/// which is the empty string by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Joining<'s> {
    separator: &'s str,
    prefix: &'s str,
    suffix: &'s str,
}

impl<'s> Joining<'s> {
    /// Concatenate the values without a separator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(separator: &'s str) -> Self {
        Joining {
            separator,
            ..Self::default()
        }
    }

    pub fn with_affixes(separator: &'s str, prefix: &'s str, suffix: &'s str) -> Self {
        Joining {
            separator,
            prefix,
            suffix,
        }
    }
}

impl<T: Display> Aggregator<T> for Joining<'_> {
    type Output = String;

    fn aggregate(self, items: &[T]) -> String {
        let mut joined = String::from(self.prefix);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                joined.push_str(self.separator);
            }
            // writing into a String cannot fail
            let _ = write!(joined, "{item}");
        }
        joined.push_str(self.suffix);
        joined
    }
}

/// Collapse the values into a set, dropping duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToSet;

impl<T: Eq + Hash + Clone> Aggregator<T> for ToSet {
    type Output = HashSet<T>;

    fn aggregate(self, items: &[T]) -> HashSet<T> {
        let mut set = HashSet::with_capacity(items.len());
        set.extend(items.iter().cloned());
        set
    }
}

/// Copy the values into a `Vec`, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToVec;

impl<T: Clone> Aggregator<T> for ToVec {
    type Output = Vec<T>;

    fn aggregate(self, items: &[T]) -> Vec<T> {
        items.to_vec()
    }
}
