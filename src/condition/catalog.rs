// ABOUTME: Built-in conditions - constants, identity checks, method checks,
// ABOUTME: and collection/detail route checks. All are decisive (never abstain).

use crate::condition::{Condition, Outcome};
use crate::context::{Method, RequestContext};

/// Grants everything, both phases.
pub struct AlwaysGrant;

impl<O> Condition<O> for AlwaysGrant {
    fn check(&self, _request: &RequestContext) -> Outcome {
        Outcome::Grant
    }

    fn check_object(&self, _request: &RequestContext, _object: &O) -> Outcome {
        Outcome::Grant
    }
}

/// Denies everything, both phases.
pub struct AlwaysDeny;

impl<O> Condition<O> for AlwaysDeny {
    fn check(&self, _request: &RequestContext) -> Outcome {
        Outcome::Deny
    }

    fn check_object(&self, _request: &RequestContext, _object: &O) -> Outcome {
        Outcome::Deny
    }
}

/// Denies the request phase and grants the object phase. Useful to confine
/// a composite to object-level enforcement.
pub struct ObjectOnly;

impl<O> Condition<O> for ObjectOnly {
    fn check(&self, _request: &RequestContext) -> Outcome {
        Outcome::Deny
    }

    fn check_object(&self, _request: &RequestContext, _object: &O) -> Outcome {
        Outcome::Grant
    }
}

/// Grants safe methods only (GET, HEAD, OPTIONS).
pub struct ReadOnly;

impl<O> Condition<O> for ReadOnly {
    fn check(&self, request: &RequestContext) -> Outcome {
        Outcome::from_bool(request.method.is_safe())
    }

    fn check_object(&self, request: &RequestContext, _object: &O) -> Outcome {
        Outcome::from_bool(request.method.is_safe())
    }
}

/// Grants authenticated actors.
pub struct IsAuthenticated;

impl<O> Condition<O> for IsAuthenticated {
    fn check(&self, request: &RequestContext) -> Outcome {
        Outcome::from_bool(request.actor.is_authenticated())
    }

    fn check_object(&self, request: &RequestContext, _object: &O) -> Outcome {
        Outcome::from_bool(request.actor.is_authenticated())
    }
}

/// Grants actors holding the staff flag.
pub struct IsStaff;

impl<O> Condition<O> for IsStaff {
    fn check(&self, request: &RequestContext) -> Outcome {
        Outcome::from_bool(request.actor.is_staff())
    }

    fn check_object(&self, request: &RequestContext, _object: &O) -> Outcome {
        Outcome::from_bool(request.actor.is_staff())
    }
}

/// Grants actors holding the superuser flag.
pub struct IsSuperuser;

impl<O> Condition<O> for IsSuperuser {
    fn check(&self, request: &RequestContext) -> Outcome {
        Outcome::from_bool(request.actor.is_superuser())
    }

    fn check_object(&self, request: &RequestContext, _object: &O) -> Outcome {
        Outcome::from_bool(request.actor.is_superuser())
    }
}

/// Grants when the route's owner capture names the requesting actor.
pub struct RouteOwner;

impl<O> Condition<O> for RouteOwner {
    fn check(&self, request: &RequestContext) -> Outcome {
        Outcome::from_bool(request.route.owned_by(&request.actor))
    }

    fn check_object(&self, request: &RequestContext, _object: &O) -> Outcome {
        Outcome::from_bool(request.route.owned_by(&request.actor))
    }
}

/// Grants one specific request method. Named after the method, so
/// composites read like `"(POST & IsStaff)"`.
pub struct MethodIs {
    method: Method,
}

impl MethodIs {
    /// Require the given request method.
    pub const fn new(method: Method) -> Self {
        Self { method }
    }
}

impl<O> Condition<O> for MethodIs {
    fn name(&self) -> &str {
        self.method.as_str()
    }

    fn check(&self, request: &RequestContext) -> Outcome {
        Outcome::from_bool(request.method == self.method)
    }

    fn check_object(&self, request: &RequestContext, _object: &O) -> Outcome {
        Outcome::from_bool(request.method == self.method)
    }
}

/// Grants requests addressing the collection route, any method.
pub struct Collection;

impl<O> Condition<O> for Collection {
    fn check(&self, request: &RequestContext) -> Outcome {
        Outcome::from_bool(request.route.is_collection())
    }

    fn check_object(&self, request: &RequestContext, _object: &O) -> Outcome {
        Outcome::from_bool(request.route.is_collection())
    }
}

fn is_list(request: &RequestContext) -> bool {
    request.method == Method::Get && request.route.is_collection()
}

/// Grants list requests: GET on a collection route.
pub struct List;

impl<O> Condition<O> for List {
    fn check(&self, request: &RequestContext) -> Outcome {
        Outcome::from_bool(is_list(request))
    }

    fn check_object(&self, request: &RequestContext, _object: &O) -> Outcome {
        Outcome::from_bool(is_list(request))
    }
}

fn is_create(request: &RequestContext) -> bool {
    request.method == Method::Post && request.route.is_collection()
}

/// Grants create requests: POST on a collection route.
pub struct Create;

impl<O> Condition<O> for Create {
    fn check(&self, request: &RequestContext) -> Outcome {
        Outcome::from_bool(is_create(request))
    }

    fn check_object(&self, request: &RequestContext, _object: &O) -> Outcome {
        Outcome::from_bool(is_create(request))
    }
}

fn is_retrieve(request: &RequestContext) -> bool {
    request.method == Method::Get && !request.route.is_collection()
}

/// Grants retrieve requests: GET on a detail route.
pub struct Retrieve;

impl<O> Condition<O> for Retrieve {
    fn check(&self, request: &RequestContext) -> Outcome {
        Outcome::from_bool(is_retrieve(request))
    }

    fn check_object(&self, request: &RequestContext, _object: &O) -> Outcome {
        Outcome::from_bool(is_retrieve(request))
    }
}

fn is_update(request: &RequestContext) -> bool {
    matches!(request.method, Method::Put | Method::Patch) && !request.route.is_collection()
}

/// Grants update requests: PUT or PATCH on a detail route.
pub struct Update;

impl<O> Condition<O> for Update {
    fn check(&self, request: &RequestContext) -> Outcome {
        Outcome::from_bool(is_update(request))
    }

    fn check_object(&self, request: &RequestContext, _object: &O) -> Outcome {
        Outcome::from_bool(is_update(request))
    }
}

fn is_destroy(request: &RequestContext) -> bool {
    request.method == Method::Delete && !request.route.is_collection()
}

/// Grants destroy requests: DELETE on a detail route.
pub struct Destroy;

impl<O> Condition<O> for Destroy {
    fn check(&self, request: &RequestContext) -> Outcome {
        Outcome::from_bool(is_destroy(request))
    }

    fn check_object(&self, request: &RequestContext, _object: &O) -> Outcome {
        Outcome::from_bool(is_destroy(request))
    }
}
