// The variants are dispatched by hand rather than through a trait object, so
// each variant's specialized operations stay statically resolved.

use super::{
    traits::{SequenceCore, SequenceExt},
    variant::{Empty, Many, One},
};

/// An immutable sequence of zero, one or many values.
///
/// Sequences are created by the factories in this module and never change
/// afterwards. Every transformation allocates a new sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sequence<T> {
    Empty(Empty),
    One(One<T>),
    Many(Many<T>),
}

// Read-only sharing across threads is part of the contract.
static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone);
static_assertions::assert_eq_size!(Empty, ());

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::Empty(Empty {})
    }
}

impl<T> SequenceCore<T> for Sequence<T> {
    fn is_empty(&self) -> bool {
        match self {
            Sequence::Empty(inner) => SequenceCore::<T>::is_empty(inner),
            Sequence::One(inner) => inner.is_empty(),
            Sequence::Many(inner) => inner.is_empty(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Sequence::Empty(inner) => SequenceCore::<T>::len(inner),
            Sequence::One(inner) => inner.len(),
            Sequence::Many(inner) => inner.len(),
        }
    }

    fn get(&self, index: usize) -> Option<&T> {
        match self {
            Sequence::Empty(inner) => SequenceCore::<T>::get(inner, index),
            Sequence::One(inner) => inner.get(index),
            Sequence::Many(inner) => inner.get(index),
        }
    }

    fn as_slice(&self) -> &[T] {
        match self {
            Sequence::Empty(inner) => SequenceCore::<T>::as_slice(inner),
            Sequence::One(inner) => inner.as_slice(),
            Sequence::Many(inner) => inner.as_slice(),
        }
    }
}

impl<T> SequenceExt<T> for Sequence<T> {
    fn map<S, F>(&self, transform: F) -> Sequence<S>
    where
        F: FnMut(&T) -> Option<S>,
    {
        match self {
            Sequence::Empty(inner) => SequenceExt::<T>::map(inner, transform),
            Sequence::One(inner) => inner.map(transform),
            Sequence::Many(inner) => inner.map(transform),
        }
    }

    fn filter<P>(&self, predicate: P) -> Sequence<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        match self {
            Sequence::Empty(inner) => SequenceExt::<T>::filter(inner, predicate),
            Sequence::One(inner) => inner.filter(predicate),
            Sequence::Many(inner) => inner.filter(predicate),
        }
    }

    fn reduce<B>(&self, combiner: B) -> Option<T>
    where
        T: Clone,
        B: FnMut(T, T) -> T,
    {
        match self {
            Sequence::Empty(inner) => SequenceExt::<T>::reduce(inner, combiner),
            Sequence::One(inner) => inner.reduce(combiner),
            Sequence::Many(inner) => inner.reduce(combiner),
        }
    }

    fn exists_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Sequence::Empty(inner) => SequenceExt::<T>::exists_match(inner, predicate),
            Sequence::One(inner) => inner.exists_match(predicate),
            Sequence::Many(inner) => inner.exists_match(predicate),
        }
    }

    fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Sequence::Empty(inner) => SequenceExt::<T>::all_match(inner, predicate),
            Sequence::One(inner) => inner.all_match(predicate),
            Sequence::Many(inner) => inner.all_match(predicate),
        }
    }
}
