// ABOUTME: Defines the AuditSink trait for async decision reporting.
// ABOUTME: Every gate decision produces one AuditRecord, grant or deny.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use crate::condition::Outcome;
use crate::context::{Method, RequestContext};

/// Which check phase produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckPhase {
    /// Before the target object is loaded.
    Request,
    /// Against the loaded target object.
    Object,
}

impl CheckPhase {
    /// The lowercase name of the phase.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for CheckPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One authorization decision, as reported to audit sinks.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    /// Unique identifier for this decision.
    pub id: String,

    /// Method of the checked request.
    pub method: Method,

    /// Path of the checked request.
    pub path: String,

    /// Id of the requesting actor, if authenticated.
    pub actor_id: Option<u64>,

    /// The phase that was checked.
    pub phase: CheckPhase,

    /// The condition's outcome.
    pub outcome: Outcome,

    /// Display name of the condition that decided.
    pub condition: String,
}

impl AuditRecord {
    /// Assemble a record for one decision, with a fresh id.
    pub fn new(
        request: &RequestContext,
        phase: CheckPhase,
        outcome: Outcome,
        condition: &str,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            method: request.method,
            path: request.path.clone(),
            actor_id: request.actor.id(),
            phase,
            outcome,
            condition: condition.to_string(),
        }
    }
}

/// Trait for receiving authorization decisions.
///
/// Sink failures never change an authorization result; the gate logs them
/// and moves on.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Record one decision.
    async fn record(&self, record: &AuditRecord) -> Result<(), anyhow::Error>;
}

/// An audit sink that discards every record.
pub struct NoopAudit;

#[async_trait]
impl AuditSink for NoopAudit {
    async fn record(&self, _record: &AuditRecord) -> Result<(), anyhow::Error> {
        Ok(())
    }
}

/// An audit sink that emits each record as a structured tracing event
/// under the `turnstile::audit` target.
pub struct TracingAudit;

#[async_trait]
impl AuditSink for TracingAudit {
    async fn record(&self, record: &AuditRecord) -> Result<(), anyhow::Error> {
        tracing::info!(
            target: "turnstile::audit",
            id = %record.id,
            method = %record.method,
            path = %record.path,
            actor_id = ?record.actor_id,
            phase = %record.phase,
            outcome = %record.outcome,
            condition = %record.condition,
            "authorization decision"
        );
        Ok(())
    }
}
