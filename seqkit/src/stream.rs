use crate::{
    aggregate::Aggregator,
    error::{self, required},
    sequence::Sequence,
};

/// The sequence contract with capabilities that may be absent.
///
/// Every operation that takes a capability takes it as an `Option` and
/// reports an absent one as [`error::Error::InvalidArgument`], empty
/// receiver or not. [`crate::Guarded`] enforces this in front of any
/// implementation, at every step of a chain.
pub trait Stream: Sized {
    type Item;

    /// The stream produced by mapping to values of type `S`.
    type Mapped<S: Clone>: Stream<Item = S>;

    fn map<S, F>(&self, transform: Option<F>) -> error::Result<Self::Mapped<S>>
    where
        S: Clone,
        F: FnMut(&Self::Item) -> Option<S>;

    fn filter<P>(&self, predicate: Option<P>) -> error::Result<Self>
    where
        P: FnMut(&Self::Item) -> bool;

    fn reduce<B>(&self, combiner: Option<B>) -> error::Result<Option<Self::Item>>
    where
        B: FnMut(Self::Item, Self::Item) -> Self::Item;

    fn exists_match<P>(&self, predicate: Option<P>) -> error::Result<bool>
    where
        P: FnMut(&Self::Item) -> bool;

    fn all_match<P>(&self, predicate: Option<P>) -> error::Result<bool>
    where
        P: FnMut(&Self::Item) -> bool;

    fn for_each<A>(&self, action: Option<A>) -> error::Result<()>
    where
        A: FnMut(&Self::Item);

    fn export_to<A>(&self, aggregator: Option<A>) -> error::Result<A::Output>
    where
        A: Aggregator<Self::Item>;

    fn first_value(&self) -> Option<Self::Item>;

    fn len(&self) -> usize;

    fn is_present(&self) -> bool {
        self.len() > 0
    }

    fn is_empty(&self) -> bool {
        !self.is_present()
    }
}

// Capabilities are checked before the receiver is looked at, so an empty
// sequence rejects an absent one too. The empty case itself never calls the
// capability.
impl<T: Clone> Stream for Sequence<T> {
    type Item = T;
    type Mapped<S: Clone> = Sequence<S>;

    fn map<S, F>(&self, transform: Option<F>) -> error::Result<Sequence<S>>
    where
        S: Clone,
        F: FnMut(&T) -> Option<S>,
    {
        Ok(Sequence::map(self, required(transform, "transform")?))
    }

    fn filter<P>(&self, predicate: Option<P>) -> error::Result<Self>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(Sequence::filter(self, required(predicate, "predicate")?))
    }

    fn reduce<B>(&self, combiner: Option<B>) -> error::Result<Option<T>>
    where
        B: FnMut(T, T) -> T,
    {
        Ok(Sequence::reduce(self, required(combiner, "combiner")?))
    }

    fn exists_match<P>(&self, predicate: Option<P>) -> error::Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(Sequence::exists_match(self, required(predicate, "predicate")?))
    }

    fn all_match<P>(&self, predicate: Option<P>) -> error::Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(Sequence::all_match(self, required(predicate, "predicate")?))
    }

    fn for_each<A>(&self, action: Option<A>) -> error::Result<()>
    where
        A: FnMut(&T),
    {
        Sequence::for_each(self, required(action, "action")?);
        Ok(())
    }

    fn export_to<A>(&self, aggregator: Option<A>) -> error::Result<A::Output>
    where
        A: Aggregator<T>,
    {
        Ok(Sequence::export_to(self, required(aggregator, "aggregator")?))
    }

    fn first_value(&self) -> Option<T> {
        Sequence::first_value(self)
    }

    fn len(&self) -> usize {
        Sequence::len(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Joining};

    use super::*;

    fn no_transform() -> Option<fn(&i32) -> Option<i32>> {
        None
    }

    fn no_predicate() -> Option<fn(&i32) -> bool> {
        None
    }

    #[test]
    fn test_map_rejects_absent_transform_when_populated() {
        let sequence = Sequence::from([1, 2]);
        assert_eq!(
            Stream::map(&sequence, no_transform()),
            Err(Error::InvalidArgument("transform"))
        );
    }

    #[test]
    fn test_empty_rejects_absent_capabilities() {
        let empty = Sequence::<i32>::empty();
        assert_eq!(
            Stream::map(&empty, no_transform()),
            Err(Error::InvalidArgument("transform"))
        );
        assert_eq!(
            Stream::filter(&empty, no_predicate()),
            Err(Error::InvalidArgument("predicate"))
        );
        assert_eq!(
            Stream::reduce(&empty, None::<fn(i32, i32) -> i32>),
            Err(Error::InvalidArgument("combiner"))
        );
        assert_eq!(
            Stream::exists_match(&empty, no_predicate()),
            Err(Error::InvalidArgument("predicate"))
        );
        assert_eq!(
            Stream::all_match(&empty, no_predicate()),
            Err(Error::InvalidArgument("predicate"))
        );
        assert_eq!(
            Stream::for_each(&empty, None::<fn(&i32)>),
            Err(Error::InvalidArgument("action"))
        );
    }

    #[test]
    fn test_empty_never_calls_present_capabilities() {
        let empty = Sequence::<i32>::empty();
        assert_eq!(
            Stream::map(&empty, Some(|_: &i32| -> Option<i32> { panic!("called") })),
            Ok(Sequence::empty())
        );
        assert_eq!(
            Stream::all_match(&empty, Some(|_: &i32| -> bool { panic!("called") })),
            Ok(false)
        );
    }

    #[test]
    fn test_export_always_checks() {
        let empty = Sequence::<i32>::empty();
        assert_eq!(
            Stream::export_to(&empty, None::<Joining>),
            Err(Error::InvalidArgument("aggregator"))
        );
        assert_eq!(
            Stream::export_to(&empty, Some(Joining::new())),
            Ok(String::new())
        );
    }

    #[test]
    fn test_present_capabilities_behave_like_sequence() {
        let sequence = Sequence::from([1, 2, 3]);
        assert_eq!(
            Stream::filter(&sequence, Some(|n: &i32| *n > 1)),
            Ok(Sequence::from([2, 3]))
        );
        assert_eq!(
            Stream::reduce(&sequence, Some(|a: i32, b: i32| a * b)),
            Ok(Some(6))
        );
        assert!(Stream::is_present(&sequence));
        assert_eq!(Stream::len(&sequence), 3);
    }
}
