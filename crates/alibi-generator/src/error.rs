//! Generation errors.

use alibi_core::ConfigError;
use alibi_engine::EngineError;

/// Why a generation request produced no case.
///
/// Generation is all-or-nothing: no partial case accompanies an error.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("No case with a unique solution found after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}
