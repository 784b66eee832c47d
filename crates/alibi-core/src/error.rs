//! Configuration errors.

use crate::suspect::SuspectId;

/// A case configuration that can never produce a case.
///
/// Raised at the boundary, before any generation work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("A case needs at least one suspect")]
    NoSuspects,

    #[error("Requested {requested} suspects but the roster only has {available}")]
    TooManySuspects { requested: usize, available: usize },

    #[error("A case needs at least one culprit")]
    NoCulprits,

    #[error("Culprit count {culprits} exceeds suspect count {suspects}")]
    CulpritsExceedSuspects { culprits: usize, suspects: usize },

    #[error("Bound {name}={value} is outside [0, {suspects}]")]
    BoundOutOfRange {
        name: &'static str,
        value: usize,
        suspects: usize,
    },

    #[error("Inverted {name} bounds: min {min} > max {max}")]
    InvertedBounds {
        name: &'static str,
        min: usize,
        max: usize,
    },

    #[error("Liar and truth bounds leave no admissible liar count for {suspects} suspects")]
    EmptyLiarRange { suspects: usize },

    #[error("Suspect id {0} is out of range")]
    IdOutOfRange(SuspectId),
}
