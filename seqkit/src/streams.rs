//! Factories for guarded sequences.
//!
//! Everything created here rejects absent capabilities at every step, so a
//! chain like `of_values(..).map(..)?.filter(..)?` fails at the first absent
//! argument no matter how far down the chain it appears.
use crate::{error, guard::Guarded, sequence::Sequence};

/// A guarded sequence holding `value`, or the empty one if it is absent.
pub fn of<T: Clone>(value: Option<T>) -> Guarded<Sequence<T>> {
    Guarded::new(Sequence::one(value))
}

/// A guarded sequence of `values`, in order.
pub fn of_values<T, V>(values: V) -> Guarded<Sequence<T>>
where
    T: Clone,
    V: Into<Sequence<T>>,
{
    Guarded::new(values.into())
}

/// A guarded sequence copied from `collection`.
///
/// Fails with [`error::Error::InvalidArgument`] if no collection is given.
pub fn of_collection<T, I>(collection: Option<I>) -> error::Result<Guarded<Sequence<T>>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    Ok(Guarded::new(Sequence::try_from_collection(collection)?))
}

/// The guarded empty sequence.
pub fn empty<T: Clone>() -> Guarded<Sequence<T>> {
    Guarded::new(Sequence::empty())
}
