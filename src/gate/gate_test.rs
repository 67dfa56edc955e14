// ABOUTME: Tests for Gate - binding order, fallback, the grant-only
// ABOUTME: boundary rule, pattern errors, and audit reporting.

use std::sync::{Arc, Mutex};

use super::*;
use crate::condition::{
    AlwaysDeny, AlwaysGrant, Cond, Condition, IsAuthenticated, IsStaff, ObjectOnly, Outcome,
    ReadOnly,
};
use crate::context::{Actor, Method, RequestContext};
use crate::error::GateError;

/// An audit sink that appends records to a shared buffer.
struct RecordingAudit {
    records: Arc<Mutex<Vec<AuditRecord>>>,
}

#[async_trait::async_trait]
impl AuditSink for RecordingAudit {
    async fn record(&self, record: &AuditRecord) -> Result<(), anyhow::Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// An audit sink that always fails.
struct FailingAudit;

#[async_trait::async_trait]
impl AuditSink for FailingAudit {
    async fn record(&self, _record: &AuditRecord) -> Result<(), anyhow::Error> {
        Err(anyhow::anyhow!("sink unavailable"))
    }
}

/// A condition that abstains in both phases.
struct Undecided;

impl Condition for Undecided {}

#[tokio::test]
async fn test_authorize_grant_and_deny() {
    let gate: Gate = Gate::builder().bind("/admin/*", IsStaff).build().unwrap();

    let staff = RequestContext::new(Method::Get, "/admin/panel").with_actor(Actor::staff(1));
    assert!(gate.authorize(&staff).await.is_ok());

    let user = RequestContext::new(Method::Get, "/admin/panel").with_actor(Actor::user(2));
    let err = gate.authorize(&user).await.unwrap_err();
    assert!(matches!(err, GateError::Forbidden { condition } if condition == "IsStaff"));
}

#[tokio::test]
async fn test_first_matching_binding_wins() {
    let gate: Gate = Gate::builder()
        .bind("/articles/*", AlwaysGrant)
        .bind("/articles/drafts", AlwaysDeny) // Should not be reached
        .build()
        .unwrap();

    let request = RequestContext::new(Method::Get, "/articles/drafts");
    assert!(gate.authorize(&request).await.is_ok());
}

#[tokio::test]
async fn test_fallback_grants_unbound_paths() {
    let gate: Gate = Gate::builder().bind("/admin/*", IsStaff).build().unwrap();

    let request = RequestContext::new(Method::Get, "/public");
    assert!(gate.authorize(&request).await.is_ok());
}

#[tokio::test]
async fn test_fallback_override() {
    let gate: Gate = Gate::builder().fallback(AlwaysDeny).build().unwrap();

    let err = gate
        .authorize(&RequestContext::new(Method::Get, "/anything"))
        .await
        .unwrap_err();
    assert!(matches!(err, GateError::Forbidden { condition } if condition == "AlwaysDeny"));
}

#[tokio::test]
async fn test_condition_for() {
    let gate: Gate = Gate::builder().bind("/admin/*", IsStaff).build().unwrap();

    assert_eq!(gate.condition_for("/admin/panel").name(), "IsStaff");
    assert_eq!(gate.condition_for("/public").name(), "AlwaysGrant");
}

#[tokio::test]
async fn test_abstain_refuses_at_the_boundary() {
    let gate: Gate = Gate::builder().bind("/things", Undecided).build().unwrap();
    let request = RequestContext::new(Method::Get, "/things");

    assert_eq!(gate.evaluate(&request), Outcome::Abstain);
    assert!(gate.authorize(&request).await.is_err());
}

#[tokio::test]
async fn test_invalid_pattern() {
    let err = Gate::<()>::builder().bind("[", AlwaysDeny).build().unwrap_err();
    assert!(matches!(err, GateError::InvalidPattern { pattern, .. } if pattern == "["));
}

struct Article {
    author_id: u64,
}

/// Grants the article's author, deciding only once the article is loaded.
struct IsAuthor;

impl Condition<Article> for IsAuthor {
    fn check_object(&self, request: &RequestContext, object: &Article) -> Outcome {
        match request.actor.id() {
            Some(id) => Outcome::from_bool(id == object.author_id),
            None => Outcome::Deny,
        }
    }
}

#[tokio::test]
async fn test_authorize_object() {
    let cond: Cond<Article> = Cond::new(ReadOnly) | (Cond::new(IsAuthenticated) & IsAuthor);
    let gate: Gate<Article> = Gate::builder()
        .bind("/articles/*", cond)
        .fallback(AlwaysDeny)
        .build()
        .unwrap();
    let article = Article { author_id: 42 };

    // The request phase passes on authentication alone; the object phase
    // settles ownership
    let author = RequestContext::new(Method::Delete, "/articles/7").with_actor(Actor::user(42));
    assert!(gate.authorize(&author).await.is_ok());
    assert!(gate.authorize_object(&author, &article).await.is_ok());

    let reader = RequestContext::new(Method::Delete, "/articles/7").with_actor(Actor::user(7));
    assert!(gate.authorize(&reader).await.is_ok());
    let err = gate.authorize_object(&reader, &article).await.unwrap_err();
    assert!(matches!(err, GateError::Forbidden { .. }));
}

#[tokio::test]
async fn test_audit_records_decisions() {
    let records = Arc::new(Mutex::new(Vec::new()));
    let gate: Gate = Gate::builder()
        .bind("/admin/*", IsStaff)
        .audit(RecordingAudit {
            records: Arc::clone(&records),
        })
        .build()
        .unwrap();

    let staff = RequestContext::new(Method::Get, "/admin/panel").with_actor(Actor::staff(1));
    gate.authorize(&staff).await.unwrap();

    let user = RequestContext::new(Method::Post, "/admin/panel").with_actor(Actor::user(2));
    let _ = gate.authorize(&user).await;

    let records = records.lock().unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].method, Method::Get);
    assert_eq!(records[0].path, "/admin/panel");
    assert_eq!(records[0].actor_id, Some(1));
    assert_eq!(records[0].phase, CheckPhase::Request);
    assert_eq!(records[0].outcome, Outcome::Grant);
    assert_eq!(records[0].condition, "IsStaff");

    assert_eq!(records[1].outcome, Outcome::Deny);
    assert_eq!(records[1].actor_id, Some(2));
    assert_ne!(records[0].id, records[1].id);
}

#[tokio::test]
async fn test_audit_object_phase() {
    let records = Arc::new(Mutex::new(Vec::new()));
    let gate: Gate = Gate::builder()
        .bind("/things/*", ObjectOnly)
        .audit(RecordingAudit {
            records: Arc::clone(&records),
        })
        .build()
        .unwrap();

    let request = RequestContext::new(Method::Get, "/things/7");
    gate.authorize_object(&request, &()).await.unwrap();

    let records = records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].phase, CheckPhase::Object);
    assert_eq!(records[0].actor_id, None);
}

#[tokio::test]
async fn test_audit_failure_does_not_change_result() {
    let gate: Gate = Gate::builder().audit(FailingAudit).build().unwrap();

    let request = RequestContext::new(Method::Get, "/things");
    assert!(gate.authorize(&request).await.is_ok());
}

#[tokio::test]
async fn test_evaluate_does_not_audit() {
    let records = Arc::new(Mutex::new(Vec::new()));
    let gate: Gate = Gate::builder()
        .bind("/things", AlwaysGrant)
        .audit(RecordingAudit {
            records: Arc::clone(&records),
        })
        .build()
        .unwrap();

    let request = RequestContext::new(Method::Get, "/things");
    assert_eq!(gate.evaluate(&request), Outcome::Grant);
    assert!(records.lock().unwrap().is_empty());
}
