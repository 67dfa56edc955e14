// ABOUTME: The RequestContext type - everything a condition evaluates against.
// ABOUTME: Built by host glue from the incoming request and the matched route.

use crate::context::{Actor, Method, Route};

/// The request under authorization.
///
/// Hosts construct one per incoming request after routing and
/// authentication, then hand it to a [`Gate`](crate::gate::Gate) or
/// evaluate conditions against it directly.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The HTTP method of the request.
    pub method: Method,

    /// The request path, matched against gate binding patterns.
    pub path: String,

    /// The requesting party.
    pub actor: Actor,

    /// Captures and lookup configuration of the matched route.
    pub route: Route,
}

impl RequestContext {
    /// Create a context with an anonymous actor and an empty route.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            actor: Actor::Anonymous,
            route: Route::new(),
        }
    }

    /// Set the actor.
    pub fn with_actor(mut self, actor: Actor) -> Self {
        self.actor = actor;
        self
    }

    /// Set the route.
    pub fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self
    }
}
