//! Offering exchange service implementation

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use tp_shared::validation::validators;

use crate::domain::entities::notification::{Notification, NotificationKind};
use crate::domain::entities::offering::{Offering, OfferingDraft, MAX_OFFERING_DESCRIPTION_CHARS};
use crate::domain::entities::redemption::Redemption;
use crate::domain::value_objects::Standing;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{JobRepository, MemberRepository, NotificationRepository, OfferingRepository};
use crate::services::notification::Notifier;
use crate::services::trust::TrustService;

/// An owner's offerings as seen by a particular viewer
#[derive(Debug, Clone, Serialize)]
pub struct OwnerOfferings {
    pub owner_id: Uuid,
    /// Viewer's standing towards the owner
    pub standing: Standing,
    pub offerings: Vec<Offering>,
}

pub struct OfferingService<O, J, M, N>
where
    O: OfferingRepository,
    J: JobRepository,
    M: MemberRepository,
    N: NotificationRepository,
{
    offering_repository: Arc<O>,
    member_repository: Arc<M>,
    trust_service: Arc<TrustService<J>>,
    notifier: Arc<Notifier<M, N>>,
}

impl<O, J, M, N> OfferingService<O, J, M, N>
where
    O: OfferingRepository,
    J: JobRepository,
    M: MemberRepository,
    N: NotificationRepository,
{
    pub fn new(
        offering_repository: Arc<O>,
        member_repository: Arc<M>,
        trust_service: Arc<TrustService<J>>,
        notifier: Arc<Notifier<M, N>>,
    ) -> Self {
        Self {
            offering_repository,
            member_repository,
            trust_service,
            notifier,
        }
    }

    /// Create an offering, or replace the fields of `offering_id` when given
    ///
    /// # Returns
    /// * `Err(DomainError::ValidationFailed)` - Blank or oversized description,
    ///   negative cost or quantity
    /// * `Err(DomainError::NotFound)` - Unknown offering or caller
    /// * `Err(DomainError::Forbidden)` - Caller does not own the offering
    pub async fn upsert(
        &self,
        caller: Uuid,
        draft: OfferingDraft,
        offering_id: Option<Uuid>,
    ) -> DomainResult<Offering> {
        validate_draft(&draft)?;

        let Some(offering_id) = offering_id else {
            if self.member_repository.find_by_id(caller).await?.is_none() {
                return Err(DomainError::not_found("Member"));
            }
            let offering = self.offering_repository.create(Offering::new(caller, draft)).await?;
            info!(offering_id = %offering.id, owner_id = %caller, "Offering created");
            return Ok(offering);
        };

        let mut offering = self.load(offering_id).await?;
        if !offering.is_owned_by(caller) {
            return Err(DomainError::forbidden("only the owner can edit an offering"));
        }

        offering.apply(draft);
        let offering = self.offering_repository.update(offering).await?;
        info!(%offering_id, "Offering updated");
        Ok(offering)
    }

    pub async fn delete(&self, caller: Uuid, offering_id: Uuid) -> DomainResult<()> {
        let offering = self.load(offering_id).await?;
        if !offering.is_owned_by(caller) {
            return Err(DomainError::forbidden("only the owner can delete an offering"));
        }

        if !self.offering_repository.delete(offering_id).await? {
            return Err(DomainError::not_found("Offering"));
        }
        info!(%offering_id, "Offering deleted");
        Ok(())
    }

    /// Spend `quantity` units of another member's offering
    ///
    /// # Returns
    /// * `Ok(Redemption)` - Receipt of the redemption
    /// * `Err(DomainError::ValidationFailed)` - Quantity below 1
    /// * `Err(DomainError::NotFound)` - Unknown offering
    /// * `Err(DomainError::Forbidden)` - Caller owns the offering or lacks spender standing
    /// * `Err(DomainError::Conflict)` - Not enough stock left
    pub async fn redeem(&self, caller: Uuid, offering_id: Uuid, quantity: i64) -> DomainResult<Redemption> {
        if quantity < 1 {
            return Err(DomainError::validation("quantity", "must be at least 1"));
        }

        let offering = self.load(offering_id).await?;
        if offering.is_owned_by(caller) {
            return Err(DomainError::forbidden("members cannot redeem their own offerings"));
        }

        let standing = self.trust_service.standing(caller, offering.owner_id).await?;
        if !standing.can_redeem() {
            debug!(%offering_id, spender_id = %caller, %standing, "Rejected redemption");
            return Err(DomainError::forbidden(
                "redeeming requires a completed paid job for the owner",
            ));
        }

        let (offering, redemption) = self
            .offering_repository
            .redeem(offering_id, caller, quantity)
            .await?;

        info!(
            %offering_id,
            spender_id = %caller,
            quantity,
            remaining = ?offering.quantity,
            "Offering redeemed"
        );
        self.notifier
            .notify(
                Notification::new(offering.owner_id, NotificationKind::OfferingRedeemed, caller)
                    .with_offering(offering_id),
            )
            .await;
        Ok(redemption)
    }

    /// The owner's offerings together with the viewer's standing towards the owner
    pub async fn list_for_owner(&self, owner_id: Uuid, viewer_id: Uuid) -> DomainResult<OwnerOfferings> {
        let offerings = self.offering_repository.list_by_owner(owner_id).await?;
        let standing = self.trust_service.standing(viewer_id, owner_id).await?;
        Ok(OwnerOfferings {
            owner_id,
            standing,
            offerings,
        })
    }

    pub async fn get(&self, offering_id: Uuid) -> DomainResult<Offering> {
        self.load(offering_id).await
    }

    /// Redemptions made by the spender, most recent first
    pub async fn redemptions_by(&self, spender_id: Uuid) -> DomainResult<Vec<Redemption>> {
        self.offering_repository.list_redemptions_by_spender(spender_id).await
    }

    /// Redemptions of the owner's offerings, most recent first
    pub async fn redemptions_of(&self, owner_id: Uuid) -> DomainResult<Vec<Redemption>> {
        self.offering_repository.list_redemptions_by_owner(owner_id).await
    }

    async fn load(&self, offering_id: Uuid) -> DomainResult<Offering> {
        self.offering_repository
            .find_by_id(offering_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Offering"))
    }
}

fn validate_draft(draft: &OfferingDraft) -> DomainResult<()> {
    if !validators::not_blank(&draft.description) {
        return Err(DomainError::validation("description", "must not be blank"));
    }
    if !validators::max_chars(draft.description.trim(), MAX_OFFERING_DESCRIPTION_CHARS) {
        return Err(DomainError::validation(
            "description",
            format!("must be at most {} characters", MAX_OFFERING_DESCRIPTION_CHARS),
        ));
    }
    if draft.cost < 0 {
        return Err(DomainError::validation("cost", "must not be negative"));
    }
    if matches!(draft.quantity, Some(q) if q < 0) {
        return Err(DomainError::validation("quantity", "must not be negative"));
    }
    Ok(())
}
