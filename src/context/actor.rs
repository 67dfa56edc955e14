// ABOUTME: The Actor type - who is making the request.
// ABOUTME: Either anonymous or an identified user with staff/superuser flags.

use serde::{Deserialize, Serialize};

/// Identity details for an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Stable numeric id of the user.
    pub id: u64,

    /// Whether the user holds the staff flag.
    pub staff: bool,

    /// Whether the user holds the superuser flag.
    pub superuser: bool,
}

/// The requesting party, as established by the host's authentication layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    /// No authenticated identity.
    Anonymous,
    /// An authenticated user.
    User(UserInfo),
}

impl Actor {
    /// Create an anonymous actor.
    pub fn anonymous() -> Self {
        Self::Anonymous
    }

    /// Create a plain authenticated user.
    pub fn user(id: u64) -> Self {
        Self::User(UserInfo {
            id,
            staff: false,
            superuser: false,
        })
    }

    /// Create a staff user.
    pub fn staff(id: u64) -> Self {
        Self::User(UserInfo {
            id,
            staff: true,
            superuser: false,
        })
    }

    /// Create a superuser. Superusers carry the staff flag as well.
    pub fn superuser(id: u64) -> Self {
        Self::User(UserInfo {
            id,
            staff: true,
            superuser: true,
        })
    }

    /// Whether the actor is an authenticated user.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::User(_))
    }

    /// Whether the actor holds the staff flag. Anonymous actors never do.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::User(info) if info.staff)
    }

    /// Whether the actor holds the superuser flag. Anonymous actors never do.
    pub fn is_superuser(&self) -> bool {
        matches!(self, Self::User(info) if info.superuser)
    }

    /// The actor's id, if authenticated.
    pub fn id(&self) -> Option<u64> {
        match self {
            Self::Anonymous => None,
            Self::User(info) => Some(info.id),
        }
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::Anonymous
    }
}
