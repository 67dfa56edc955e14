// ABOUTME: Tests for declarative condition specs - JSON forms, resolution
// ABOUTME: through the registry, and authoring errors.

use super::*;
use crate::context::{Actor, Method, RequestContext, Route};
use crate::error::SpecError;

fn spec(value: serde_json::Value) -> ConditionSpec {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_json_forms() {
    assert_eq!(
        spec(serde_json::json!("ReadOnly")),
        ConditionSpec::Name("ReadOnly".to_string())
    );
    assert_eq!(
        spec(serde_json::json!({ "not": "IsStaff" })),
        ConditionSpec::Not {
            not: Box::new(ConditionSpec::Name("IsStaff".to_string()))
        }
    );
    assert_eq!(
        spec(serde_json::json!({ "all": ["IsAuthenticated", "ReadOnly"] })),
        ConditionSpec::All {
            all: vec![
                ConditionSpec::Name("IsAuthenticated".to_string()),
                ConditionSpec::Name("ReadOnly".to_string()),
            ]
        }
    );
}

#[tokio::test]
async fn test_resolve_name() {
    let registry: ConditionRegistry = ConditionRegistry::with_defaults();
    let cond = registry.resolve(&spec(serde_json::json!("ReadOnly"))).await.unwrap();

    assert_eq!(cond.check(&RequestContext::new(Method::Get, "/articles")), Outcome::Grant);
    assert_eq!(cond.check(&RequestContext::new(Method::Post, "/articles")), Outcome::Deny);
}

#[tokio::test]
async fn test_resolve_unknown() {
    let registry: ConditionRegistry = ConditionRegistry::with_defaults();
    let err = registry
        .resolve(&spec(serde_json::json!("Imaginary")))
        .await
        .unwrap_err();

    assert!(matches!(err, SpecError::UnknownCondition(name) if name == "Imaginary"));
}

#[tokio::test]
async fn test_resolve_all() {
    let registry: ConditionRegistry = ConditionRegistry::with_defaults();
    let cond = registry
        .resolve(&spec(serde_json::json!({ "all": ["IsAuthenticated", "ReadOnly"] })))
        .await
        .unwrap();

    let get = RequestContext::new(Method::Get, "/articles").with_actor(Actor::user(1));
    let post = RequestContext::new(Method::Post, "/articles").with_actor(Actor::user(1));
    let anonymous = RequestContext::new(Method::Get, "/articles");

    assert_eq!(cond.check(&get), Outcome::Grant);
    assert_eq!(cond.check(&post), Outcome::Deny);
    assert_eq!(cond.check(&anonymous), Outcome::Deny);
}

#[tokio::test]
async fn test_resolve_any() {
    let registry: ConditionRegistry = ConditionRegistry::with_defaults();
    let cond = registry
        .resolve(&spec(serde_json::json!({ "any": ["IsStaff", "RouteOwner"] })))
        .await
        .unwrap();

    let staff = RequestContext::new(Method::Get, "/users/42/articles").with_actor(Actor::staff(1));
    let owner = RequestContext::new(Method::Get, "/users/42/articles")
        .with_actor(Actor::user(42))
        .with_route(Route::new().with_capture("user_id", "42"));
    let other = RequestContext::new(Method::Get, "/users/42/articles").with_actor(Actor::user(7));

    assert_eq!(cond.check(&staff), Outcome::Grant);
    assert_eq!(cond.check(&owner), Outcome::Grant);
    assert_eq!(cond.check(&other), Outcome::Deny);
}

#[tokio::test]
async fn test_resolve_not() {
    let registry: ConditionRegistry = ConditionRegistry::with_defaults();
    let cond = registry
        .resolve(&spec(serde_json::json!({ "not": "IsStaff" })))
        .await
        .unwrap();

    let user = RequestContext::new(Method::Get, "/articles").with_actor(Actor::user(1));
    let staff = RequestContext::new(Method::Get, "/articles").with_actor(Actor::staff(2));

    assert_eq!(cond.check(&user), Outcome::Grant);
    assert_eq!(cond.check(&staff), Outcome::Deny);
}

#[tokio::test]
async fn test_resolve_empty_group() {
    let registry: ConditionRegistry = ConditionRegistry::with_defaults();

    let err = registry
        .resolve(&ConditionSpec::All { all: vec![] })
        .await
        .unwrap_err();
    assert!(matches!(err, SpecError::EmptyGroup("all")));

    let err = registry
        .resolve(&ConditionSpec::Any { any: vec![] })
        .await
        .unwrap_err();
    assert!(matches!(err, SpecError::EmptyGroup("any")));
}

#[tokio::test]
async fn test_resolve_nested() {
    let registry: ConditionRegistry = ConditionRegistry::with_defaults();
    let cond = registry
        .resolve(&spec(serde_json::json!({
            "any": ["ReadOnly", { "all": ["IsAuthenticated", "RouteOwner"] }]
        })))
        .await
        .unwrap();

    assert_eq!(cond.name(), "(ReadOnly | (IsAuthenticated & RouteOwner))");

    // Safe methods pass for anyone
    let get = RequestContext::new(Method::Get, "/users/42/articles");
    assert_eq!(cond.check(&get), Outcome::Grant);

    // Writes require the authenticated route owner
    let route = Route::new().with_capture("user_id", "42");
    let owner = RequestContext::new(Method::Post, "/users/42/articles")
        .with_actor(Actor::user(42))
        .with_route(route.clone());
    let other = RequestContext::new(Method::Post, "/users/42/articles")
        .with_actor(Actor::user(7))
        .with_route(route);

    assert_eq!(cond.check(&owner), Outcome::Grant);
    assert_eq!(cond.check(&other), Outcome::Deny);
}

#[tokio::test]
async fn test_resolve_is_snapshot() {
    let registry: ConditionRegistry = ConditionRegistry::new();
    registry.register_as("open", AlwaysGrant).await;

    let cond = registry.resolve(&spec(serde_json::json!("open"))).await.unwrap();
    registry.unregister("open").await;

    // Already-resolved conditions keep working
    let request = RequestContext::new(Method::Get, "/things");
    assert_eq!(cond.check(&request), Outcome::Grant);
}
