// ABOUTME: The tri-state Outcome of a condition check.
// ABOUTME: Grant and Deny are decisive; Abstain means "no opinion".

use std::fmt;

use serde::{Deserialize, Serialize};

/// The outcome of evaluating a condition.
///
/// `Abstain` lets a condition stay silent in one phase so that combinators
/// fall through to the other operand. At an enforcement boundary only
/// `Grant` authorizes; `Abstain` refuses just like `Deny`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The condition authorizes the request.
    Grant,
    /// The condition refuses the request.
    Deny,
    /// The condition has no opinion.
    Abstain,
}

impl Outcome {
    /// Map a decisive boolean check onto an outcome.
    pub fn from_bool(permitted: bool) -> Self {
        if permitted { Self::Grant } else { Self::Deny }
    }

    /// Whether this outcome is `Grant`.
    pub fn is_grant(self) -> bool {
        self == Self::Grant
    }

    /// Whether this outcome is `Deny`.
    pub fn is_deny(self) -> bool {
        self == Self::Deny
    }

    /// Whether this outcome is `Abstain`.
    pub fn is_abstain(self) -> bool {
        self == Self::Abstain
    }

    /// Invert a decisive outcome. `Abstain` stays `Abstain`.
    pub fn invert(self) -> Self {
        match self {
            Self::Grant => Self::Deny,
            Self::Deny => Self::Grant,
            Self::Abstain => Self::Abstain,
        }
    }

    /// The lowercase name of the outcome.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grant => "grant",
            Self::Deny => "deny",
            Self::Abstain => "abstain",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
