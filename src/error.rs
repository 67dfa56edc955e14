// ABOUTME: Defines all error types for the turnstile library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under TurnstileError.

/// Top-level error type for the turnstile library.
#[derive(Debug, thiserror::Error)]
pub enum TurnstileError {
    #[error("Gate error: {0}")]
    Gate(#[from] GateError),

    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),

    #[error("Context error: {0}")]
    Context(#[from] ContextError),
}

/// Errors from gate construction and enforcement.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Request forbidden by condition '{condition}'")]
    Forbidden { condition: String },

    #[error("Invalid binding pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Errors from resolving declarative condition specs.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("Unknown condition: {0}")]
    UnknownCondition(String),

    #[error("Empty '{0}' group in condition spec")]
    EmptyGroup(&'static str),
}

/// Errors from request context construction.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("Unknown HTTP method: {0}")]
    UnknownMethod(String),
}
