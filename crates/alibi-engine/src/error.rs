//! Engine errors.
//!
//! None of these are user-facing conditions. They mean an assignment was
//! built or deserialized against a different catalog or roster.

use alibi_core::SuspectId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Unknown statement template: {0}")]
    UnknownTemplate(String),

    #[error("Unknown suspect {0}")]
    UnknownSuspect(SuspectId),

    #[error("Template {template} is missing a target binding")]
    MissingTarget { template: &'static str },

    #[error("Speaker {0} is not part of the case")]
    SpeakerNotInCase(SuspectId),
}
