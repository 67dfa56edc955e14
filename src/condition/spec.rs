// ABOUTME: Declarative condition expressions - serde-friendly trees of
// ABOUTME: registered names composed with all/any/not, resolved via the registry.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::condition::{Cond, Condition, ConditionRegistry};
use crate::error::SpecError;

/// A condition expression as it appears in policy documents.
///
/// A bare string names a registered condition; `all`, `any` and `not`
/// compose recursively:
///
/// ```json
/// { "any": ["ReadOnly", { "all": ["IsAuthenticated", "RouteOwner"] }] }
/// ```
///
/// Groups fold left to right, so a resolved chain carries exactly the
/// semantics of writing the operators by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionSpec {
    /// A registered condition, by name.
    Name(String),
    /// Conjunction of the member specs.
    All { all: Vec<ConditionSpec> },
    /// Disjunction of the member specs.
    Any { any: Vec<ConditionSpec> },
    /// Negation of the inner spec.
    Not { not: Box<ConditionSpec> },
}

impl<O: 'static> ConditionRegistry<O> {
    /// Resolve a declarative spec into a composed condition.
    ///
    /// Fails on names that are not registered and on empty `all`/`any`
    /// groups; a policy document that composes nothing is treated as an
    /// authoring mistake rather than silently granted or denied.
    pub async fn resolve(&self, spec: &ConditionSpec) -> Result<Cond<O>, SpecError> {
        let conditions = self.snapshot().await;
        resolve_with(&conditions, spec)
    }
}

fn resolve_with<O: 'static>(
    conditions: &HashMap<String, Arc<dyn Condition<O>>>,
    spec: &ConditionSpec,
) -> Result<Cond<O>, SpecError> {
    match spec {
        ConditionSpec::Name(name) => conditions
            .get(name)
            .cloned()
            .map(Cond::from_arc)
            .ok_or_else(|| SpecError::UnknownCondition(name.clone())),
        ConditionSpec::All { all } => {
            let mut members = all.iter();
            let Some(first) = members.next() else {
                return Err(SpecError::EmptyGroup("all"));
            };
            let mut acc = resolve_with(conditions, first)?;
            for member in members {
                acc = acc.and(resolve_with(conditions, member)?);
            }
            Ok(acc)
        }
        ConditionSpec::Any { any } => {
            let mut members = any.iter();
            let Some(first) = members.next() else {
                return Err(SpecError::EmptyGroup("any"));
            };
            let mut acc = resolve_with(conditions, first)?;
            for member in members {
                acc = acc.or(resolve_with(conditions, member)?);
            }
            Ok(acc)
        }
        ConditionSpec::Not { not } => Ok(resolve_with(conditions, not)?.negate()),
    }
}
