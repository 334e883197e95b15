//! Relationship between an observer and a subject member, as decided by the
//! trust gate.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    /// Observer and subject are the same member
    Owner,
    /// Observer completed a paid job for the subject
    Spender,
    /// No established trust
    Standard,
}

impl Standing {
    /// Only spenders may redeem the subject's offerings
    pub fn can_redeem(&self) -> bool {
        matches!(self, Standing::Spender)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Standing::Owner => "owner",
            Standing::Spender => "spender",
            Standing::Standard => "standard",
        }
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
