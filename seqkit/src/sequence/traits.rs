use crate::aggregate::Aggregator;

use super::core::Sequence;

/// The core sequence interface: a sequence variant must implement this to
/// function.
///
/// If you do, SequenceExt provides the pipeline operations on top of it.
pub(crate) trait SequenceCore<T> {
    /// Check whether the sequence is empty
    fn is_empty(&self) -> bool;

    /// The number of values in the sequence
    fn len(&self) -> usize;

    /// Get the value at the index, if it exists
    fn get(&self, index: usize) -> Option<&T>;

    /// The populated values, in order
    fn as_slice(&self) -> &[T];
}

pub(crate) trait SequenceExt<T>: SequenceCore<T> {
    /// Apply `transform` to every value, keeping the values it produces.
    fn map<S, F>(&self, mut transform: F) -> Sequence<S>
    where
        F: FnMut(&T) -> Option<S>,
    {
        let mut mapped = Vec::with_capacity(self.len());
        for value in self.as_slice() {
            if let Some(value) = transform(value) {
                mapped.push(value);
            }
        }
        Sequence::new(mapped)
    }

    /// Keep the values for which `predicate` holds.
    fn filter<P>(&self, mut predicate: P) -> Sequence<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut kept = Vec::with_capacity(self.len());
        for value in self.as_slice() {
            if predicate(value) {
                kept.push(value.clone());
            }
        }
        Sequence::new(kept)
    }

    /// Left fold starting from the first value.
    fn reduce<B>(&self, mut combiner: B) -> Option<T>
    where
        T: Clone,
        B: FnMut(T, T) -> T,
    {
        let (first, rest) = self.as_slice().split_first()?;
        let mut accumulated = first.clone();
        for value in rest {
            accumulated = combiner(accumulated, value.clone());
        }
        Some(accumulated)
    }

    /// Count the values matching `predicate`. The predicate sees every
    /// value exactly once; there is no short-circuit.
    fn matches<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let mut count = 0;
        for value in self.as_slice() {
            if predicate(value) {
                count += 1;
            }
        }
        count
    }

    fn exists_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.is_empty() && self.matches(predicate) > 0
    }

    // an empty sequence does not match, so this is never vacuously true
    fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.is_empty() && self.matches(predicate) == self.len()
    }

    fn for_each<A>(&self, action: A)
    where
        A: FnMut(&T),
    {
        self.as_slice().iter().for_each(action)
    }

    fn export_to<A>(&self, aggregator: A) -> A::Output
    where
        A: Aggregator<T>,
    {
        aggregator.aggregate(self.as_slice())
    }
}
