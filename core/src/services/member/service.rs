//! Member directory service implementation

use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use tp_shared::validation::validators;

use crate::domain::entities::member::{Member, MAX_CONTACT_INFO_CHARS, MAX_NAME_CHARS};
use crate::domain::entities::notification::Notification;
use crate::domain::value_objects::Identity;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{MemberRepository, NotificationRepository};

pub struct MemberService<M, N>
where
    M: MemberRepository,
    N: NotificationRepository,
{
    member_repository: Arc<M>,
    notification_repository: Arc<N>,
}

impl<M, N> MemberService<M, N>
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

    /// Return the member for an authenticated identity, creating it on first sight
    ///
    /// # Returns
    /// * `Ok(Member)` - Existing or newly created member
    /// * `Err(DomainError::ValidationFailed)` - Malformed email or name
    /// * `Err(DomainError::Conflict)` - Email already belongs to another member
    pub async fn ensure_member(&self, identity: &Identity) -> DomainResult<Member> {
        if let Some(member) = self.member_repository.find_by_id(identity.member_id).await? {
            return Ok(member);
        }

        if !validators::is_valid_email(identity.email.trim()) {
            return Err(DomainError::validation("email", "must be a valid email address"));
        }
        if !validators::not_blank(&identity.name) {
            return Err(DomainError::validation("name", "must not be blank"));
        }
        if !validators::max_chars(identity.name.trim(), MAX_NAME_CHARS) {
            return Err(DomainError::validation(
                "name",
                format!("must be at most {} characters", MAX_NAME_CHARS),
            ));
        }

        let member = Member::new(identity.member_id, &identity.email, identity.name.as_str());
        match self.member_repository.create(member).await {
            Ok(member) => {
                info!(member_id = %member.id, "Member registered");
                Ok(member)
            }
            Err(DomainError::Conflict { message }) => {
                // Another request for the same identity may have won the insert
                match self.member_repository.find_by_id(identity.member_id).await? {
                    Some(member) => Ok(member),
                    None => Err(DomainError::Conflict { message }),
                }
            }
            Err(e) => Err(e),
        }
    }

    pub async fn get(&self, member_id: Uuid) -> DomainResult<Member> {
        self.member_repository
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Member"))
    }

    /// Store contact details, finishing onboarding
    pub async fn complete_onboarding(&self, member_id: Uuid, contact_info: &str) -> DomainResult<Member> {
        if !validators::not_blank(contact_info) {
            return Err(DomainError::validation("contact_info", "must not be blank"));
        }
        if !validators::max_chars(contact_info.trim(), MAX_CONTACT_INFO_CHARS) {
            return Err(DomainError::validation(
                "contact_info",
                format!("must be at most {} characters", MAX_CONTACT_INFO_CHARS),
            ));
        }

        let mut member = self.get(member_id).await?;
        member.complete_onboarding(contact_info);
        let member = self.member_repository.update(member).await?;

        info!(member_id = %member.id, "Onboarding completed");
        Ok(member)
    }

    pub async fn set_notifications(&self, member_id: Uuid, enabled: bool) -> DomainResult<Member> {
        let mut member = self.get(member_id).await?;
        member.set_notifications_enabled(enabled);
        let member = self.member_repository.update(member).await?;

        debug!(member_id = %member.id, enabled, "Notification preference updated");
        Ok(member)
    }

    /// The member's notification queue, most recent first
    pub async fn notifications(&self, member_id: Uuid, unread_only: bool) -> DomainResult<Vec<Notification>> {
        self.get(member_id).await?;
        self.notification_repository
            .list_for_member(member_id, unread_only)
            .await
    }

    /// Returns the number of notifications that were unread
    pub async fn mark_notifications_read(&self, member_id: Uuid) -> DomainResult<u64> {
        self.notification_repository.mark_all_read(member_id).await
    }

    pub async fn has_unread_notifications(&self, member_id: Uuid) -> DomainResult<bool> {
        Ok(self.notification_repository.count_unread(member_id).await? > 0)
    }
}
