// ABOUTME: Defines the Condition trait - the core abstraction for permission checks.
// ABOUTME: Two phases: request-level check and object-level check, both defaulting to Abstain.

use crate::condition::Outcome;
use crate::context::RequestContext;

/// A permission predicate over a request, generic over the application's
/// object type `O`.
///
/// Both check phases default to [`Outcome::Abstain`], so an implementor
/// overrides only the phases it has an opinion about. A condition that
/// abstains in a phase drops out of combinations in that phase, and does
/// not authorize anything on its own.
pub trait Condition<O = ()>: Send + Sync {
    /// Display name of this condition, used in composite names, audit
    /// records, and denial errors. Defaults to the implementing type's
    /// bare name.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Request-phase check, before any object has been loaded.
    fn check(&self, _request: &RequestContext) -> Outcome {
        Outcome::Abstain
    }

    /// Object-phase check, once the host has loaded the target object.
    fn check_object(&self, _request: &RequestContext, _object: &O) -> Outcome {
        Outcome::Abstain
    }
}
