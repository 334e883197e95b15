//! MySQL implementation of the NotificationRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use tp_core::domain::entities::notification::{Notification, NotificationKind};
use tp_core::errors::DomainError;
use tp_core::repositories::NotificationRepository;

use super::{column, db_error, optional_uuid_column, parse_tag, uuid_column};

pub struct MySqlNotificationRepository {
    pool: MySqlPool,
}

impl MySqlNotificationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_notification(row: &MySqlRow) -> Result<Notification, DomainError> {
        let kind: String = column(row, "kind")?;
        Ok(Notification {
            id: uuid_column(row, "id")?,
            recipient_id: uuid_column(row, "recipient_id")?,
            kind: parse_tag::<NotificationKind>(&kind)?,
            actor_id: uuid_column(row, "actor_id")?,
            job_id: optional_uuid_column(row, "job_id")?,
            offering_id: optional_uuid_column(row, "offering_id")?,
            is_read: column(row, "is_read")?,
            created_at: column(row, "created_at")?,
        })
    }
}

#[async_trait]
impl NotificationRepository for MySqlNotificationRepository {
    async fn enqueue(&self, notification: Notification) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO notifications (
                id, recipient_id, kind, actor_id, job_id, offering_id, is_read, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(notification.id.to_string())
            .bind(notification.recipient_id.to_string())
            .bind(notification.kind.as_str())
            .bind(notification.actor_id.to_string())
            .bind(notification.job_id.map(|id| id.to_string()))
            .bind(notification.offering_id.map(|id| id.to_string()))
            .bind(notification.is_read)
            .bind(notification.created_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to enqueue notification"))?;

        Ok(())
    }

    async fn list_for_member(&self, member_id: Uuid, unread_only: bool) -> Result<Vec<Notification>, DomainError> {
        let query = if unread_only {
            r#"
                SELECT id, recipient_id, kind, actor_id, job_id, offering_id, is_read, created_at
                FROM notifications
                WHERE recipient_id = ? AND is_read = FALSE
                ORDER BY created_at DESC
            "#
        } else {
            r#"
                SELECT id, recipient_id, kind, actor_id, job_id, offering_id, is_read, created_at
                FROM notifications
                WHERE recipient_id = ?
                ORDER BY created_at DESC
            "#
        };

        let rows = sqlx::query(query)
            .bind(member_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list notifications"))?;

        rows.iter().map(Self::row_to_notification).collect()
    }

    async fn mark_all_read(&self, member_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("UPDATE notifications SET is_read = TRUE WHERE recipient_id = ? AND is_read = FALSE")
            .bind(member_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to mark notifications read"))?;

        Ok(result.rows_affected())
    }

    async fn count_unread(&self, member_id: Uuid) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS unread FROM notifications WHERE recipient_id = ? AND is_read = FALSE")
            .bind(member_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count notifications"))?;

        let unread: i64 = column(&row, "unread")?;
        Ok(unread.max(0) as u64)
    }
}
