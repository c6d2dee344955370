use crate::sequence::core::Sequence;
use crate::sequence::traits::{SequenceCore, SequenceExt};

/// The canonical empty sequence. It owns no storage, so one value serves
/// every element type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Empty {}

impl<T> SequenceCore<T> for Empty {
    #[inline]
    fn is_empty(&self) -> bool {
        true
    }

    #[inline]
    fn len(&self) -> usize {
        0
    }

    #[inline]
    fn get(&self, _index: usize) -> Option<&T> {
        None
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &[]
    }
}

// Nothing to visit, so none of these call the capability they are given.
impl<T> SequenceExt<T> for Empty {
    #[inline]
    fn map<S, F>(&self, _transform: F) -> Sequence<S>
    where
        F: FnMut(&T) -> Option<S>,
    {
        Sequence::empty()
    }

    #[inline]
    fn filter<P>(&self, _predicate: P) -> Sequence<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        Sequence::empty()
    }

    #[inline]
    fn reduce<B>(&self, _combiner: B) -> Option<T>
    where
        T: Clone,
        B: FnMut(T, T) -> T,
    {
        None
    }

    #[inline]
    fn exists_match<P>(&self, _predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        false
    }

    #[inline]
    fn all_match<P>(&self, _predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_never_calls_capabilities() {
        let empty = Empty {};
        let mapped: Sequence<i32> =
            SequenceExt::<i32>::map(&empty, |_: &i32| -> Option<i32> { panic!("called") });
        assert!(mapped.is_empty());
        assert_eq!(
            SequenceExt::<i32>::reduce(&empty, |_, _| panic!("called")),
            None
        );
        assert!(!SequenceExt::<i32>::all_match(&empty, |_| panic!("called")));
    }
}
