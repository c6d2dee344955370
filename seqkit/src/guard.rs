use crate::{
    aggregate::Aggregator,
    error::{self, required},
    stream::Stream,
};

/// A stream that rejects absent capabilities before delegating.
///
/// `map` and `filter` wrap their result in another `Guarded`, so every
/// stream reachable from a guarded one checks its arguments too, however
/// long the chain. Terminal operations delegate directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guarded<Q> {
    inner: Q,
}

impl<Q> Guarded<Q> {
    pub fn new(inner: Q) -> Self {
        Guarded { inner }
    }

    pub fn inner(&self) -> &Q {
        &self.inner
    }

    pub fn into_inner(self) -> Q {
        self.inner
    }
}

impl<Q: Stream> Stream for Guarded<Q> {
    type Item = Q::Item;
    type Mapped<S: Clone> = Guarded<Q::Mapped<S>>;

    fn map<S, F>(&self, transform: Option<F>) -> error::Result<Self::Mapped<S>>
    where
        S: Clone,
        F: FnMut(&Q::Item) -> Option<S>,
    {
        let transform = required(transform, "transform")?;
        Ok(Guarded::new(self.inner.map(Some(transform))?))
    }

    fn filter<P>(&self, predicate: Option<P>) -> error::Result<Self>
    where
        P: FnMut(&Q::Item) -> bool,
    {
        let predicate = required(predicate, "predicate")?;
        Ok(Guarded::new(self.inner.filter(Some(predicate))?))
    }

    fn reduce<B>(&self, combiner: Option<B>) -> error::Result<Option<Q::Item>>
    where
        B: FnMut(Q::Item, Q::Item) -> Q::Item,
    {
        let combiner = required(combiner, "combiner")?;
        self.inner.reduce(Some(combiner))
    }

    fn exists_match<P>(&self, predicate: Option<P>) -> error::Result<bool>
    where
        P: FnMut(&Q::Item) -> bool,
    {
        let predicate = required(predicate, "predicate")?;
        self.inner.exists_match(Some(predicate))
    }

    fn all_match<P>(&self, predicate: Option<P>) -> error::Result<bool>
    where
        P: FnMut(&Q::Item) -> bool,
    {
        let predicate = required(predicate, "predicate")?;
        self.inner.all_match(Some(predicate))
    }

    fn for_each<A>(&self, action: Option<A>) -> error::Result<()>
    where
        A: FnMut(&Q::Item),
    {
        let action = required(action, "action")?;
        self.inner.for_each(Some(action))
    }

    fn export_to<A>(&self, aggregator: Option<A>) -> error::Result<A::Output>
    where
        A: Aggregator<Q::Item>,
    {
        let aggregator = required(aggregator, "aggregator")?;
        self.inner.export_to(Some(aggregator))
    }

    fn first_value(&self) -> Option<Q::Item> {
        self.inner.first_value()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
