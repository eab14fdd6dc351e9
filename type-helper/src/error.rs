//! Error types for generation
//!
//! Each collaborator has its own error type; [`GeneratorError`] wraps them
//! for the orchestrator.

/// Model descriptor errors
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// No model with that name exists
    #[error("model not found: {0}")]
    NotFound(String),

    /// The model exists but its definition is inconsistent
    #[error("unreadable model {name}: {message}")]
    Unreadable { name: String, message: String },
}

/// Operator interaction errors
#[derive(Debug, thiserror::Error)]
pub enum InteractionError {
    /// The operator cancelled the prompt
    #[error("prompt cancelled")]
    Cancelled,

    /// The prompt could not be shown
    #[error("prompt failed: {0}")]
    Failed(String),
}

/// Artifact emission errors
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("emit error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for a generation run
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Interaction(#[from] InteractionError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Errors raised at runtime by generated authorization scaffolding
///
/// The generator never raises these itself; emitters describe them to the
/// application policy they produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScaffoldError {
    #[error("must be logged in")]
    Unauthenticated,
}

impl ScaffoldError {
    /// Error code surfaced to API clients
    pub fn code(&self) -> &'static str {
        match self {
            ScaffoldError::Unauthenticated => "UNAUTHORIZED",
        }
    }
}
