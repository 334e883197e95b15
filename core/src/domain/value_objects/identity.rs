//! Caller identity as asserted by the external identity provider.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated caller. The core trusts the id but re-checks role and
/// ownership on every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub member_id: Uuid,
    pub email: String,
    pub name: String,
}

impl Identity {
    pub fn new(member_id: Uuid, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            member_id,
            email: email.into(),
            name: name.into(),
        }
    }
}
