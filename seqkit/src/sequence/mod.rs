//! A sequence holds zero, one or many values and never an absent one.
//!
//! The enum in `core` dispatches to one struct per shape; `creation` holds
//! the factories and `operation` the public pipeline API.
mod core;
mod creation;
mod operation;
#[cfg(feature = "serde")]
mod serialization;
mod traits;
mod variant;

pub use self::core::Sequence;
pub use variant::{Empty, Many, One};
