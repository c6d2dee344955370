use std::sync::Arc;

use crate::sequence::traits::{SequenceCore, SequenceExt};

/// Two or more values. The storage is trimmed to the populated length and
/// never mutated after construction, so clones share it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Many<T> {
    items: Arc<[T]>,
}

impl<T> Many<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        debug_assert!(items.len() > 1);
        Many {
            items: items.into(),
        }
    }
}

impl<T> SequenceCore<T> for Many<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> SequenceExt<T> for Many<T> {}
