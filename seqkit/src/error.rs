use thiserror::Error;

/// Sequence error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required capability argument was absent.
    ///
    /// Carries the role of the missing argument, such as `"transform"` or
    /// `"predicate"`.
    #[error("invalid argument: no {0} given")]
    InvalidArgument(&'static str),

    /// A value was required from an optional result that had none.
    #[error(transparent)]
    Optional(#[from] seqkit_optional::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Unwrap a capability argument, rejecting absence.
pub(crate) fn required<F>(capability: Option<F>, role: &'static str) -> Result<F> {
    match capability {
        Some(capability) => Ok(capability),
        None => {
            tracing::trace!(argument = role, "rejected absent argument");
            Err(Error::InvalidArgument(role))
        }
    }
}
