// ABOUTME: The Route type - path captures and lookup configuration for a request.
// ABOUTME: Provides the collection-vs-detail and route-ownership heuristics.

use std::collections::HashMap;

use crate::context::Actor;

/// Path parameters and lookup configuration for the matched route.
///
/// The host router fills `captures` with the named path parameters it
/// extracted. `lookup_param` names the capture that identifies a single
/// object (a detail route); `owner_param` names the capture that carries
/// the owning user's id for ownership checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    captures: HashMap<String, String>,
    lookup_param: Option<String>,
    owner_param: Option<String>,
}

impl Route {
    /// Create a route with no captures and the default parameter names
    /// (`"id"` for detail lookup, `"user_id"` for ownership).
    pub fn new() -> Self {
        Self {
            captures: HashMap::new(),
            lookup_param: Some("id".to_string()),
            owner_param: Some("user_id".to_string()),
        }
    }

    /// Add a captured path parameter.
    pub fn with_capture(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.captures.insert(name.into(), value.into());
        self
    }

    /// Set the capture name that identifies a single object, or `None` for
    /// routes that never address one.
    pub fn with_lookup_param(mut self, name: Option<impl Into<String>>) -> Self {
        self.lookup_param = name.map(Into::into);
        self
    }

    /// Set the capture name that carries the owning user's id, or `None`
    /// for routes without an ownership segment.
    pub fn with_owner_param(mut self, name: Option<impl Into<String>>) -> Self {
        self.owner_param = name.map(Into::into);
        self
    }

    /// Look up a captured path parameter.
    pub fn capture(&self, name: &str) -> Option<&str> {
        self.captures.get(name).map(String::as_str)
    }

    /// Whether the request addresses the collection rather than one object.
    ///
    /// True when no lookup param is configured, or the configured lookup
    /// param was not captured from the path.
    pub fn is_collection(&self) -> bool {
        match &self.lookup_param {
            Some(name) if !name.is_empty() => !self.captures.contains_key(name),
            _ => true,
        }
    }

    /// Whether the route's owner capture names the given actor.
    ///
    /// False for anonymous actors, for routes without an owner capture,
    /// and for owner captures that do not parse as a numeric id.
    pub fn owned_by(&self, actor: &Actor) -> bool {
        let Some(actor_id) = actor.id() else {
            return false;
        };
        let Some(name) = &self.owner_param else {
            return false;
        };
        match self.captures.get(name).and_then(|v| v.parse::<u64>().ok()) {
            Some(owner_id) => owner_id == actor_id,
            None => false,
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}
