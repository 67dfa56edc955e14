// ABOUTME: Condition combinators - And, Or, Not, and the Cond handle with
// ABOUTME: operator sugar. Short-circuiting, with Abstain dropping out of either side.

use std::fmt;
use std::ops;
use std::sync::Arc;

use crate::condition::catalog::{AlwaysDeny, AlwaysGrant};
use crate::condition::{Condition, Outcome};
use crate::context::RequestContext;

/// Combine two outcomes with AND semantics.
///
/// A `Deny` on the left short-circuits; the right operand is not
/// evaluated. An `Abstain` on either side yields the other side's
/// outcome; otherwise the right outcome decides.
fn and_outcomes(left: Outcome, right: impl FnOnce() -> Outcome) -> Outcome {
    if left.is_deny() {
        return Outcome::Deny;
    }
    let right = right();
    if left.is_abstain() {
        return right;
    }
    if right.is_abstain() {
        return left;
    }
    right
}

/// Combine two outcomes with OR semantics.
///
/// A `Grant` on the left short-circuits; the right operand is not
/// evaluated. An `Abstain` on either side yields the other side's
/// outcome; otherwise the right outcome decides.
fn or_outcomes(left: Outcome, right: impl FnOnce() -> Outcome) -> Outcome {
    if left.is_grant() {
        return Outcome::Grant;
    }
    let right = right();
    if left.is_abstain() {
        return right;
    }
    if right.is_abstain() {
        return left;
    }
    right
}

/// Conjunction of two conditions. Named `"(left & right)"`.
pub struct And<O = ()> {
    left: Arc<dyn Condition<O>>,
    right: Arc<dyn Condition<O>>,
    name: String,
}

impl<O> And<O> {
    /// Combine two conditions; both must grant (or abstain in favor of a
    /// granting partner) for the conjunction to grant.
    pub fn new(left: Arc<dyn Condition<O>>, right: Arc<dyn Condition<O>>) -> Self {
        let name = format!("({} & {})", left.name(), right.name());
        Self { left, right, name }
    }
}

impl<O> Condition<O> for And<O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, request: &RequestContext) -> Outcome {
        and_outcomes(self.left.check(request), || self.right.check(request))
    }

    fn check_object(&self, request: &RequestContext, object: &O) -> Outcome {
        and_outcomes(self.left.check_object(request, object), || {
            self.right.check_object(request, object)
        })
    }
}

/// Disjunction of two conditions. Named `"(left | right)"`.
pub struct Or<O = ()> {
    left: Arc<dyn Condition<O>>,
    right: Arc<dyn Condition<O>>,
    name: String,
}

impl<O> Or<O> {
    /// Combine two conditions; one grant suffices for the disjunction to
    /// grant.
    pub fn new(left: Arc<dyn Condition<O>>, right: Arc<dyn Condition<O>>) -> Self {
        let name = format!("({} | {})", left.name(), right.name());
        Self { left, right, name }
    }
}

impl<O> Condition<O> for Or<O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, request: &RequestContext) -> Outcome {
        or_outcomes(self.left.check(request), || self.right.check(request))
    }

    fn check_object(&self, request: &RequestContext, object: &O) -> Outcome {
        or_outcomes(self.left.check_object(request, object), || {
            self.right.check_object(request, object)
        })
    }
}

/// Negation of a condition. Named `"(!inner)"`. Inverts decisive outcomes
/// and leaves `Abstain` untouched.
pub struct Not<O = ()> {
    inner: Arc<dyn Condition<O>>,
    name: String,
}

impl<O> Not<O> {
    /// Invert a condition's decisive outcomes.
    pub fn new(inner: Arc<dyn Condition<O>>) -> Self {
        let name = format!("(!{})", inner.name());
        Self { inner, name }
    }
}

impl<O> Condition<O> for Not<O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, request: &RequestContext) -> Outcome {
        self.inner.check(request).invert()
    }

    fn check_object(&self, request: &RequestContext, object: &O) -> Outcome {
        self.inner.check_object(request, object).invert()
    }
}

/// A cheaply clonable handle to a condition, carrying the composition
/// sugar.
///
/// `Cond` itself implements [`Condition`], so composites nest freely:
///
/// ```
/// use turnstile::condition::{Cond, Condition, IsAuthenticated, IsStaff, Outcome, ReadOnly};
/// use turnstile::context::{Actor, Method, RequestContext};
///
/// let cond: Cond = Cond::new(ReadOnly) | (Cond::new(IsAuthenticated) & IsStaff);
/// let request = RequestContext::new(Method::Get, "/articles").with_actor(Actor::anonymous());
/// assert_eq!(cond.check(&request), Outcome::Grant);
/// ```
pub struct Cond<O = ()> {
    inner: Arc<dyn Condition<O>>,
}

impl<O> Cond<O> {
    /// Wrap a condition in a handle.
    pub fn new<C>(condition: C) -> Self
    where
        C: Condition<O> + 'static,
    {
        Self {
            inner: Arc::new(condition),
        }
    }

    /// Wrap an already shared condition.
    pub fn from_arc(inner: Arc<dyn Condition<O>>) -> Self {
        Self { inner }
    }

    /// Unwrap into the shared condition.
    pub fn into_arc(self) -> Arc<dyn Condition<O>> {
        self.inner
    }
}

impl<O: 'static> Cond<O> {
    /// Conjoin with another condition.
    pub fn and<C>(self, other: C) -> Self
    where
        C: Condition<O> + 'static,
    {
        Cond::new(And::new(self.inner, Arc::new(other)))
    }

    /// Disjoin with another condition.
    pub fn or<C>(self, other: C) -> Self
    where
        C: Condition<O> + 'static,
    {
        Cond::new(Or::new(self.inner, Arc::new(other)))
    }

    /// Negate this condition.
    pub fn negate(self) -> Self {
        Cond::new(Not::new(self.inner))
    }
}

impl<O> Condition<O> for Cond<O> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn check(&self, request: &RequestContext) -> Outcome {
        self.inner.check(request)
    }

    fn check_object(&self, request: &RequestContext, object: &O) -> Outcome {
        self.inner.check_object(request, object)
    }
}

impl<O> Clone for Cond<O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<O> fmt::Debug for Cond<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cond").field(&self.inner.name()).finish()
    }
}

impl<O> fmt::Display for Cond<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inner.name())
    }
}

impl<O: 'static, C: Condition<O> + 'static> ops::BitAnd<C> for Cond<O> {
    type Output = Cond<O>;

    fn bitand(self, rhs: C) -> Cond<O> {
        self.and(rhs)
    }
}

impl<O: 'static, C: Condition<O> + 'static> ops::BitOr<C> for Cond<O> {
    type Output = Cond<O>;

    fn bitor(self, rhs: C) -> Cond<O> {
        self.or(rhs)
    }
}

impl<O: 'static> ops::Not for Cond<O> {
    type Output = Cond<O>;

    fn not(self) -> Cond<O> {
        self.negate()
    }
}

/// Conjoin a sequence of conditions left to right. Empty input yields
/// [`AlwaysGrant`], the identity of conjunction over decisive outcomes.
pub fn all_of<O: 'static>(conditions: impl IntoIterator<Item = Cond<O>>) -> Cond<O> {
    let mut iter = conditions.into_iter();
    match iter.next() {
        None => Cond::new(AlwaysGrant),
        Some(first) => iter.fold(first, |acc, cond| acc.and(cond)),
    }
}

/// Disjoin a sequence of conditions left to right. Empty input yields
/// [`AlwaysDeny`], the identity of disjunction over decisive outcomes.
pub fn any_of<O: 'static>(conditions: impl IntoIterator<Item = Cond<O>>) -> Cond<O> {
    let mut iter = conditions.into_iter();
    match iter.next() {
        None => Cond::new(AlwaysDeny),
        Some(first) => iter.fold(first, |acc, cond| acc.or(cond)),
    }
}
