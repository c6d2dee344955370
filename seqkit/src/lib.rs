//! An immutable, null-aware sequence container.
//!
//! A [`Sequence`] holds zero, one or many values. Absence is never stored:
//! a sequence built from an absent value is empty, and a transform that
//! produces no value drops the element. Every transformation returns a new
//! sequence; the receiver is never touched.
//!
//! There are two ways in. [`Sequence`] itself exposes an infallible API where
//! every capability is a closure. The [`Stream`] trait describes the same
//! operations with capabilities that may be absent (`Option<F>`), and
//! [`Guarded`] wraps any stream to reject absent capabilities at every step
//! of a chain. The factories in [`streams`] hand out guarded sequences.
pub mod aggregate;
pub mod error;
mod guard;
pub mod sequence;
mod stream;
pub mod streams;

pub use aggregate::{Aggregator, Joining, ToSet, ToVec};
pub use error::{Error, Result};
pub use guard::Guarded;
pub use seqkit_optional::Optional;
pub use sequence::Sequence;
pub use stream::Stream;
