use crate::error::{self, required};

use super::{
    core::Sequence,
    variant::{Empty, Many},
};

impl<T> Sequence<T> {
    /// The canonical empty sequence.
    ///
    /// This allocates nothing; every empty sequence is the same value
    /// whatever its element type.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty(Empty {})
    }

    /// A sequence of the given values, in order.
    pub fn new(items: Vec<T>) -> Self {
        match items.len() {
            0 => Self::empty(),
            1 => match items.into_iter().next() {
                Some(item) => Self::One(item.into()),
                None => Self::empty(),
            },
            _ => Self::Many(Many::new(items)),
        }
    }

    /// A sequence holding `value`, or the empty sequence if it is absent.
    #[inline]
    pub fn one(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::One(value.into()),
            None => Self::empty(),
        }
    }

    /// Copy a collection into a new sequence, keeping its iteration order.
    ///
    /// Fails with [`error::Error::InvalidArgument`] if no collection is given.
    pub fn try_from_collection<I>(collection: Option<I>) -> error::Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let collection = required(collection, "collection")?;
        Ok(collection.into_iter().collect())
    }
}

impl<T: Clone> Sequence<T> {
    /// A sequence of clones of the values in `items`.
    pub fn from_slice(items: &[T]) -> Self {
        Self::new(items.to_vec())
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(Vec::from(items))
    }
}

impl<T> From<Option<T>> for Sequence<T> {
    fn from(value: Option<T>) -> Self {
        Self::one(value)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
