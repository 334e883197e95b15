//! Member entity representing a registered marketplace participant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_CONTACT_INFO_CHARS: usize = 500;

/// Role tag carried by every member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Regular marketplace participant
    #[default]
    Standard,
    /// Operator account
    Admin,
}

impl MemberRole {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Standard => "standard",
            MemberRole::Admin => "admin",
        }
    }
}

impl std::str::FromStr for MemberRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(MemberRole::Standard),
            "admin" => Ok(MemberRole::Admin),
            other => Err(format!("Unknown member role: {}", other)),
        }
    }
}

/// Member entity
///
/// The id is issued by the external identity provider; the member record is
/// created the first time that identity reaches the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Identity provider subject
    pub id: Uuid,

    /// Unique, lower-cased email address
    pub email: String,

    /// Display name
    pub name: String,

    /// Free-text contact details; `None` until onboarding completes
    pub contact_info: Option<String>,

    pub role: MemberRole,

    /// Whether transitions involving this member enqueue notifications
    pub notifications_enabled: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Creates a new member with default role and notifications on
    pub fn new(id: Uuid, email: impl AsRef<str>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: normalize_email(email.as_ref()),
            name: name.into().trim().to_string(),
            contact_info: None,
            role: MemberRole::Standard,
            notifications_enabled: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stores contact details, finishing onboarding
    pub fn complete_onboarding(&mut self, contact_info: impl Into<String>) {
        self.contact_info = Some(contact_info.into().trim().to_string());
        self.updated_at = Utc::now();
    }

    pub fn set_notifications_enabled(&mut self, enabled: bool) {
        self.notifications_enabled = enabled;
        self.updated_at = Utc::now();
    }

    pub fn is_onboarded(&self) -> bool {
        self.contact_info.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role == MemberRole::Admin
    }
}

/// Lower-cases and trims an email so uniqueness is case-insensitive
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
