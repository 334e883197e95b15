//! Notification queued for a member when a counterpart acts on shared state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Sent to the hirer
    ApplicationReceived,
    /// Sent to the selected worker
    WorkerSelected,
    /// Sent to the worker
    JobCompleted,
    /// Sent to the rating's subject
    RatingReceived,
    /// Sent to the offering owner
    OfferingRedeemed,
}

impl NotificationKind {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::ApplicationReceived => "application_received",
            NotificationKind::WorkerSelected => "worker_selected",
            NotificationKind::JobCompleted => "job_completed",
            NotificationKind::RatingReceived => "rating_received",
            NotificationKind::OfferingRedeemed => "offering_redeemed",
        }
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "application_received" => Ok(NotificationKind::ApplicationReceived),
            "worker_selected" => Ok(NotificationKind::WorkerSelected),
            "job_completed" => Ok(NotificationKind::JobCompleted),
            "rating_received" => Ok(NotificationKind::RatingReceived),
            "offering_redeemed" => Ok(NotificationKind::OfferingRedeemed),
            other => Err(format!("Unknown notification kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub kind: NotificationKind,
    /// Member whose action produced the notification
    pub actor_id: Uuid,
    pub job_id: Option<Uuid>,
    pub offering_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(recipient_id: Uuid, kind: NotificationKind, actor_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipient_id,
            kind,
            actor_id,
            job_id: None,
            offering_id: None,
            is_read: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_job(mut self, job_id: Uuid) -> Self {
        self.job_id = Some(job_id);
        self
    }

    pub fn with_offering(mut self, offering_id: Uuid) -> Self {
        self.offering_id = Some(offering_id);
        self
    }
}
