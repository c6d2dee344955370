use crate::sequence::core::Sequence;
use crate::sequence::traits::{SequenceCore, SequenceExt};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct One<T> {
    item: T,
}

impl<T> From<T> for One<T> {
    fn from(item: T) -> Self {
        One { item }
    }
}

impl<T> SequenceCore<T> for One<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn len(&self) -> usize {
        1
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        if index == 0 {
            Some(&self.item)
        } else {
            None
        }
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        std::slice::from_ref(&self.item)
    }
}

impl<T> SequenceExt<T> for One<T> {
    #[inline]
    fn map<S, F>(&self, mut transform: F) -> Sequence<S>
    where
        F: FnMut(&T) -> Option<S>,
    {
        transform(&self.item).into()
    }

    #[inline]
    fn filter<P>(&self, mut predicate: P) -> Sequence<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        if predicate(&self.item) {
            Sequence::One(self.clone())
        } else {
            Sequence::empty()
        }
    }

    // a single value is its own fold; the combiner is never called
    #[inline]
    fn reduce<B>(&self, _combiner: B) -> Option<T>
    where
        T: Clone,
        B: FnMut(T, T) -> T,
    {
        Some(self.item.clone())
    }
}
