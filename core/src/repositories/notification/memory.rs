//! In-memory implementation of NotificationRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::notification::Notification;
use crate::errors::DomainError;

use super::trait_::NotificationRepository;

#[derive(Clone, Default)]
pub struct InMemoryNotificationRepository {
    queue: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn enqueue(&self, notification: Notification) -> Result<(), DomainError> {
        self.queue.write().await.push(notification);
        Ok(())
    }

    async fn list_for_member(&self, member_id: Uuid, unread_only: bool) -> Result<Vec<Notification>, DomainError> {
        let queue = self.queue.read().await;
        Ok(queue
            .iter()
            .rev()
            .filter(|n| n.recipient_id == member_id && (!unread_only || !n.is_read))
            .cloned()
            .collect())
    }

    async fn mark_all_read(&self, member_id: Uuid) -> Result<u64, DomainError> {
        let mut queue = self.queue.write().await;
        let mut changed = 0;
        for n in queue.iter_mut().filter(|n| n.recipient_id == member_id && !n.is_read) {
            n.is_read = true;
            changed += 1;
        }
        Ok(changed)
    }

    async fn count_unread(&self, member_id: Uuid) -> Result<u64, DomainError> {
        let queue = self.queue.read().await;
        Ok(queue
            .iter()
            .filter(|n| n.recipient_id == member_id && !n.is_read)
            .count() as u64)
    }
}
