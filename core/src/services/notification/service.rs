//! Enqueues notifications for members who have them enabled

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::notification::Notification;
use crate::repositories::{MemberRepository, NotificationRepository};

/// Delivers notifications into the recipient's queue
///
/// Called after the triggering change has been committed. Delivery problems
/// are logged and never undo or fail that change.
pub struct Notifier<M, N>
where
    M: MemberRepository,
    N: NotificationRepository,
{
    member_repository: Arc<M>,
    notification_repository: Arc<N>,
}

impl<M, N> Notifier<M, N>
where
    M: MemberRepository,
    N: NotificationRepository,
{
    pub fn new(member_repository: Arc<M>, notification_repository: Arc<N>) -> Self {
        Self {
            member_repository,
            notification_repository,
        }
    }

    pub async fn notify(&self, notification: Notification) {
        let recipient_id = notification.recipient_id;
        let kind = notification.kind.as_str();

        let recipient = match self.member_repository.find_by_id(recipient_id).await {
            Ok(Some(member)) => member,
            Ok(None) => {
                warn!(%recipient_id, kind, "Notification recipient does not exist");
                return;
            }
            Err(e) => {
                warn!(%recipient_id, kind, error = %e, "Failed to load notification recipient");
                return;
            }
        };

        if !recipient.notifications_enabled {
            debug!(%recipient_id, kind, "Notifications disabled, skipping");
            return;
        }

        if let Err(e) = self.notification_repository.enqueue(notification).await {
            warn!(%recipient_id, kind, error = %e, "Failed to enqueue notification");
        }
    }
}
