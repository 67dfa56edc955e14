// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use turnstile::prelude::*;` to get started quickly.

pub use crate::condition::{
    AlwaysDeny, AlwaysGrant, Collection, Cond, Condition, ConditionRegistry, ConditionSpec,
    Create, Destroy, IsAuthenticated, IsStaff, IsSuperuser, List, MethodIs, ObjectOnly, Outcome,
    ReadOnly, Retrieve, RouteOwner, Update, all_of, any_of,
};
pub use crate::context::{Actor, Method, RequestContext, Route, UserInfo};
pub use crate::error::{ContextError, GateError, SpecError, TurnstileError};
pub use crate::gate::{
    AuditRecord, AuditSink, CheckPhase, Gate, GateBuilder, NoopAudit, TracingAudit,
};
