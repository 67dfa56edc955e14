// ABOUTME: Implements the ConditionRegistry - a thread-safe container of
// ABOUTME: named conditions, used to resolve declarative condition specs.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::condition::catalog::{
    AlwaysDeny, AlwaysGrant, Collection, Create, Destroy, IsAuthenticated, IsStaff, IsSuperuser,
    List, MethodIs, ObjectOnly, ReadOnly, Retrieve, RouteOwner, Update,
};
use crate::condition::Condition;
use crate::context::Method;

/// A thread-safe registry of named conditions.
pub struct ConditionRegistry<O = ()> {
    conditions: Arc<RwLock<HashMap<String, Arc<dyn Condition<O>>>>>,
}

impl<O> ConditionRegistry<O> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in catalog pre-registered under
    /// each condition's `name()`, plus `MethodIs` entries for GET, POST,
    /// PUT, PATCH and DELETE under the method names.
    pub fn with_defaults() -> Self {
        let mut conditions: HashMap<String, Arc<dyn Condition<O>>> = HashMap::new();
        let mut add = |condition: Arc<dyn Condition<O>>| {
            conditions.insert(condition.name().to_string(), condition);
        };

        add(Arc::new(AlwaysGrant));
        add(Arc::new(AlwaysDeny));
        add(Arc::new(ObjectOnly));
        add(Arc::new(ReadOnly));
        add(Arc::new(IsAuthenticated));
        add(Arc::new(IsStaff));
        add(Arc::new(IsSuperuser));
        add(Arc::new(RouteOwner));
        add(Arc::new(Collection));
        add(Arc::new(List));
        add(Arc::new(Create));
        add(Arc::new(Retrieve));
        add(Arc::new(Update));
        add(Arc::new(Destroy));
        for method in [
            Method::Get,
            Method::Post,
            Method::Put,
            Method::Patch,
            Method::Delete,
        ] {
            add(Arc::new(MethodIs::new(method)));
        }

        Self {
            conditions: Arc::new(RwLock::new(conditions)),
        }
    }

    /// Register a condition under its own name.
    pub async fn register<C>(&self, condition: C)
    where
        C: Condition<O> + 'static,
    {
        self.register_arc(Arc::new(condition)).await;
    }

    /// Register an already shared condition under its own name.
    pub async fn register_arc(&self, condition: Arc<dyn Condition<O>>) {
        let mut conditions = self.conditions.write().await;
        conditions.insert(condition.name().to_string(), condition);
    }

    /// Register a condition under an explicit name, replacing any previous
    /// entry with that name.
    pub async fn register_as<C>(&self, name: impl Into<String>, condition: C)
    where
        C: Condition<O> + 'static,
    {
        let mut conditions = self.conditions.write().await;
        conditions.insert(name.into(), Arc::new(condition));
    }

    /// Unregister a condition by name.
    pub async fn unregister(&self, name: &str) {
        let mut conditions = self.conditions.write().await;
        conditions.remove(name);
    }

    /// Get a condition by name.
    pub async fn get(&self, name: &str) -> Option<Arc<dyn Condition<O>>> {
        let conditions = self.conditions.read().await;
        conditions.get(name).cloned()
    }

    /// List all condition names, sorted alphabetically.
    pub async fn list(&self) -> Vec<String> {
        let conditions = self.conditions.read().await;
        let mut names: Vec<_> = conditions.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the number of registered conditions.
    pub async fn count(&self) -> usize {
        let conditions = self.conditions.read().await;
        conditions.len()
    }

    pub(crate) async fn snapshot(&self) -> HashMap<String, Arc<dyn Condition<O>>> {
        let conditions = self.conditions.read().await;
        conditions.clone()
    }
}

impl<O> Default for ConditionRegistry<O> {
    fn default() -> Self {
        Self {
            conditions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<O> Clone for ConditionRegistry<O> {
    fn clone(&self) -> Self {
        Self {
            conditions: Arc::clone(&self.conditions),
        }
    }
}
