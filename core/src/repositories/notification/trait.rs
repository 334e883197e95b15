//! Notification queue trait

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::notification::Notification;
use crate::errors::DomainError;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn enqueue(&self, notification: Notification) -> Result<(), DomainError>;

    /// Notifications for the member, most recent first
    async fn list_for_member(&self, member_id: Uuid, unread_only: bool) -> Result<Vec<Notification>, DomainError>;

    /// Marks every unread notification as read and returns how many changed
    async fn mark_all_read(&self, member_id: Uuid) -> Result<u64, DomainError>;

    async fn count_unread(&self, member_id: Uuid) -> Result<u64, DomainError>;
}
