//! Offering repository trait, including the atomic redemption primitive.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::offering::Offering;
use crate::domain::entities::redemption::Redemption;
use crate::errors::DomainError;

#[async_trait]
pub trait OfferingRepository: Send + Sync {
    async fn create(&self, offering: Offering) -> Result<Offering, DomainError>;

    /// Replace description, cost and quantity
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - Offering does not exist
    async fn update(&self, offering: Offering) -> Result<Offering, DomainError>;

    /// Hard delete; `Ok(false)` when nothing was deleted
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Offering>, DomainError>;

    /// Offerings owned by the member, newest first
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Offering>, DomainError>;

    /// Take `quantity` units and record the redemption in one atomic step
    ///
    /// Stock is decremented only if the offering is unlimited or holds at
    /// least `quantity` units.
    ///
    /// # Returns
    /// * `Ok((Offering, Redemption))` - Offering after the decrement and the receipt
    /// * `Err(DomainError::Conflict)` - Insufficient stock
    /// * `Err(DomainError::NotFound)` - Offering does not exist
    async fn redeem(
        &self,
        offering_id: Uuid,
        spender_id: Uuid,
        quantity: i64,
    ) -> Result<(Offering, Redemption), DomainError>;

    /// Redemptions made by the spender, most recent first
    async fn list_redemptions_by_spender(&self, spender_id: Uuid) -> Result<Vec<Redemption>, DomainError>;

    /// Redemptions of the owner's offerings, most recent first
    async fn list_redemptions_by_owner(&self, owner_id: Uuid) -> Result<Vec<Redemption>, DomainError>;
}
