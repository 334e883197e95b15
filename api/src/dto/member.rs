use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tp_core::domain::entities::member::{Member, MemberRole};
use tp_core::domain::entities::notification::Notification;
use tp_core::domain::value_objects::Standing;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingRequest {
    /// Free-text contact details shown to trading partners
    pub contact_info: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettingsRequest {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationsQuery {
    #[serde(default)]
    pub unread_only: bool,
}

/// The caller's own profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    #[serde(flatten)]
    pub member: Member,
    pub has_unread_notifications: bool,
}

/// Profile fields visible to other members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicMemberResponse {
    pub id: Uuid,
    pub name: String,
    pub role: MemberRole,
    pub created_at: DateTime<Utc>,
}

impl From<Member> for PublicMemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            role: member.role,
            created_at: member.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingResponse {
    pub observer_id: Uuid,
    pub subject_id: Uuid,
    pub standing: Standing,
    pub can_redeem: bool,
}

/// Notification queue; reading it marks every entry read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub marked_read: u64,
}
