// ABOUTME: Root module for turnstile - composable request-authorization conditions.
// ABOUTME: Re-exports all public types from submodules.

pub mod condition;
pub mod context;
pub mod error;
pub mod gate;
pub mod prelude;

pub use error::TurnstileError;
