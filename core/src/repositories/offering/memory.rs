//! In-memory implementation of OfferingRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::offering::Offering;
use crate::domain::entities::redemption::Redemption;
use crate::errors::DomainError;

use super::trait_::OfferingRepository;

#[derive(Default)]
struct Store {
    offerings: HashMap<Uuid, Offering>,
    redemptions: Vec<Redemption>,
}

/// In-memory offering repository
///
/// Offerings and redemptions share one lock so a redemption and its stock
/// decrement are observed together.
#[derive(Clone, Default)]
pub struct InMemoryOfferingRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryOfferingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OfferingRepository for InMemoryOfferingRepository {
    async fn create(&self, offering: Offering) -> Result<Offering, DomainError> {
        let mut store = self.store.write().await;
        if store.offerings.contains_key(&offering.id) {
            return Err(DomainError::conflict("offering already exists"));
        }
        store.offerings.insert(offering.id, offering.clone());
        Ok(offering)
    }

    async fn update(&self, offering: Offering) -> Result<Offering, DomainError> {
        let mut store = self.store.write().await;
        let stored = store
            .offerings
            .get_mut(&offering.id)
            .ok_or_else(|| DomainError::not_found("Offering"))?;
        *stored = offering.clone();
        Ok(offering)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut store = self.store.write().await;
        Ok(store.offerings.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Offering>, DomainError> {
        let store = self.store.read().await;
        Ok(store.offerings.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Offering>, DomainError> {
        let store = self.store.read().await;
        let mut owned: Vec<Offering> = store
            .offerings
            .values()
            .filter(|o| o.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn redeem(
        &self,
        offering_id: Uuid,
        spender_id: Uuid,
        quantity: i64,
    ) -> Result<(Offering, Redemption), DomainError> {
        let mut store = self.store.write().await;
        let offering = store
            .offerings
            .get_mut(&offering_id)
            .ok_or_else(|| DomainError::not_found("Offering"))?;

        if !offering.has_stock_for(quantity) {
            return Err(DomainError::conflict("insufficient stock"));
        }
        offering.take(quantity);

        let offering = offering.clone();
        let redemption = Redemption::new(&offering, spender_id, quantity);
        store.redemptions.push(redemption.clone());
        Ok((offering, redemption))
    }

    async fn list_redemptions_by_spender(&self, spender_id: Uuid) -> Result<Vec<Redemption>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .redemptions
            .iter()
            .rev()
            .filter(|r| r.spender_id == spender_id)
            .cloned()
            .collect())
    }

    async fn list_redemptions_by_owner(&self, owner_id: Uuid) -> Result<Vec<Redemption>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .redemptions
            .iter()
            .rev()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect())
    }
}
