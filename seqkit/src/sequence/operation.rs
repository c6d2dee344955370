use crate::aggregate::Aggregator;

use super::{
    core::Sequence,
    traits::{SequenceCore, SequenceExt},
};

impl<T> Sequence<T> {
    /// Whether the sequence holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        SequenceCore::is_empty(self)
    }

    /// Whether the sequence holds at least one value.
    #[inline]
    pub fn is_present(&self) -> bool {
        !self.is_empty()
    }

    /// The number of values in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        SequenceCore::len(self)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        SequenceCore::get(self, index)
    }

    /// The values as an ordered slice. Empty for the empty sequence.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        SequenceCore::as_slice(self)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// A reference to the first value, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Transform every value into a new sequence.
    ///
    /// Values for which `transform` returns `None` are dropped; the rest keep
    /// their relative order. An empty sequence maps to the empty sequence
    /// without calling `transform`.
    pub fn map<S, F>(&self, transform: F) -> Sequence<S>
    where
        F: FnMut(&T) -> Option<S>,
    {
        SequenceExt::map(self, transform)
    }

    /// Left fold of the values with `combiner`, starting from the first
    /// value. `None` for the empty sequence.
    ///
    /// The combiner cannot produce an absent value; map to `Option<T>` first
    /// if it needs to.
    pub fn reduce<B>(&self, combiner: B) -> Option<T>
    where
        T: Clone,
        B: FnMut(T, T) -> T,
    {
        SequenceExt::reduce(self, combiner)
    }

    /// Whether at least one value matches. False for the empty sequence.
    pub fn exists_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        SequenceExt::exists_match(self, predicate)
    }

    /// Whether every value matches.
    ///
    /// This is false for the empty sequence: there is nothing that matches.
    pub fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        SequenceExt::all_match(self, predicate)
    }

    /// Call `action` with every value, in order.
    pub fn for_each<A>(&self, action: A)
    where
        A: FnMut(&T),
    {
        SequenceExt::for_each(self, action)
    }

    /// Hand the values, in order, to `aggregator` and return what it builds.
    pub fn export_to<A>(&self, aggregator: A) -> A::Output
    where
        A: Aggregator<T>,
    {
        SequenceExt::export_to(self, aggregator)
    }
}

impl<T: Clone> Sequence<T> {
    /// Keep the values for which `predicate` holds, in order.
    pub fn filter<P>(&self, predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool,
    {
        SequenceExt::filter(self, predicate)
    }

    /// The first value, if any.
    #[inline]
    pub fn first_value(&self) -> Option<T> {
        self.first().cloned()
    }

    /// Collect clones of the values into any collection.
    pub fn collect<B>(&self) -> B
    where
        B: FromIterator<T>,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
