// ABOUTME: Defines the Gate - path-pattern bindings, fallback condition,
// ABOUTME: and enforcement with the strict grant-only boundary rule.

use std::sync::Arc;

use crate::condition::{AlwaysGrant, Cond, Condition, Outcome};
use crate::context::RequestContext;
use crate::error::GateError;
use crate::gate::{AuditRecord, AuditSink, CheckPhase, NoopAudit};

struct Binding<O> {
    pattern: glob::Pattern,
    condition: Cond<O>,
}

/// Binds conditions to request paths and enforces them.
///
/// A gate holds an ordered list of glob-pattern bindings; the first
/// binding whose pattern matches the request path supplies the condition,
/// and the fallback condition applies when none match. At the
/// [`authorize`](Gate::authorize) boundary only an explicit
/// [`Outcome::Grant`] passes; an abstaining composite refuses exactly
/// like a denying one.
pub struct Gate<O = ()> {
    bindings: Vec<Binding<O>>,
    fallback: Cond<O>,
    audit: Arc<dyn AuditSink>,
}

impl<O> std::fmt::Debug for Gate<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gate")
            .field(
                "bindings",
                &self
                    .bindings
                    .iter()
                    .map(|binding| binding.pattern.as_str())
                    .collect::<Vec<_>>(),
            )
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl<O: 'static> Gate<O> {
    /// Create a new gate builder.
    pub fn builder() -> GateBuilder<O> {
        GateBuilder::new()
    }

    /// The condition bound to the given path: the first matching binding,
    /// or the fallback when none match.
    pub fn condition_for(&self, path: &str) -> &Cond<O> {
        self.bindings
            .iter()
            .find(|binding| binding.pattern.matches(path))
            .map(|binding| &binding.condition)
            .unwrap_or(&self.fallback)
    }

    /// Evaluate the request phase without enforcing or auditing.
    pub fn evaluate(&self, request: &RequestContext) -> Outcome {
        self.condition_for(&request.path).check(request)
    }

    /// Evaluate the object phase without enforcing or auditing.
    pub fn evaluate_object(&self, request: &RequestContext, object: &O) -> Outcome {
        self.condition_for(&request.path).check_object(request, object)
    }

    /// Enforce the request phase: `Ok` iff the bound condition grants.
    pub async fn authorize(&self, request: &RequestContext) -> Result<(), GateError> {
        let condition = self.condition_for(&request.path);
        let outcome = condition.check(request);
        self.finish(request, CheckPhase::Request, outcome, condition.name())
            .await
    }

    /// Enforce the object phase: `Ok` iff the bound condition grants for
    /// the loaded object.
    pub async fn authorize_object(
        &self,
        request: &RequestContext,
        object: &O,
    ) -> Result<(), GateError> {
        let condition = self.condition_for(&request.path);
        let outcome = condition.check_object(request, object);
        self.finish(request, CheckPhase::Object, outcome, condition.name())
            .await
    }

    async fn finish(
        &self,
        request: &RequestContext,
        phase: CheckPhase,
        outcome: Outcome,
        condition: &str,
    ) -> Result<(), GateError> {
        let record = AuditRecord::new(request, phase, outcome, condition);
        if let Err(error) = self.audit.record(&record).await {
            tracing::warn!(target: "turnstile::gate", error = %error, "audit sink failed");
        }
        if outcome.is_grant() {
            Ok(())
        } else {
            tracing::debug!(
                target: "turnstile::gate",
                condition = %condition,
                method = %request.method,
                path = %request.path,
                phase = %phase,
                outcome = %outcome,
                "request denied"
            );
            Err(GateError::Forbidden {
                condition: condition.to_string(),
            })
        }
    }
}

impl<O: 'static> Default for Gate<O> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
            fallback: Cond::new(AlwaysGrant),
            audit: Arc::new(NoopAudit),
        }
    }
}

/// Builder for constructing gates.
pub struct GateBuilder<O = ()> {
    bindings: Vec<(String, Cond<O>)>,
    fallback: Cond<O>,
    audit: Arc<dyn AuditSink>,
}

impl<O: 'static> GateBuilder<O> {
    /// Create a new builder with no bindings, the `AlwaysGrant` fallback,
    /// and a no-op audit sink.
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            fallback: Cond::new(AlwaysGrant),
            audit: Arc::new(NoopAudit),
        }
    }

    /// Bind a request-path glob pattern to a condition. The first
    /// matching binding wins, in bind order.
    pub fn bind<C>(mut self, pattern: impl Into<String>, condition: C) -> Self
    where
        C: Condition<O> + 'static,
    {
        self.bindings.push((pattern.into(), Cond::new(condition)));
        self
    }

    /// Set the condition used when no binding matches the request path.
    ///
    /// Defaults to [`AlwaysGrant`], matching hosts that opt routes into
    /// conditions one by one. Deployments that bind everything they
    /// expose should set [`AlwaysDeny`](crate::condition::AlwaysDeny) to
    /// fail closed.
    pub fn fallback<C>(mut self, condition: C) -> Self
    where
        C: Condition<O> + 'static,
    {
        self.fallback = Cond::new(condition);
        self
    }

    /// Install an audit sink. Defaults to [`NoopAudit`].
    pub fn audit<S>(mut self, sink: S) -> Self
    where
        S: AuditSink + 'static,
    {
        self.audit = Arc::new(sink);
        self
    }

    /// Build the gate, compiling binding patterns.
    ///
    /// A malformed pattern is an error rather than a skipped binding.
    pub fn build(self) -> Result<Gate<O>, GateError> {
        let mut bindings = Vec::with_capacity(self.bindings.len());
        for (pattern, condition) in self.bindings {
            let compiled =
                glob::Pattern::new(&pattern).map_err(|source| GateError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
            bindings.push(Binding {
                pattern: compiled,
                condition,
            });
        }
        Ok(Gate {
            bindings,
            fallback: self.fallback,
            audit: self.audit,
        })
    }
}

impl<O: 'static> Default for GateBuilder<O> {
    fn default() -> Self {
        Self::new()
    }
}
