//! Redemption receipt written together with a successful stock decrement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::offering::Offering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redemption {
    pub id: Uuid,
    pub offering_id: Uuid,
    pub owner_id: Uuid,
    pub spender_id: Uuid,
    pub quantity: i64,
    /// Offering cost at the time of redemption
    pub unit_cost: i64,
    pub total_cost: i64,
    pub created_at: DateTime<Utc>,
}

impl Redemption {
    pub fn new(offering: &Offering, spender_id: Uuid, quantity: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            offering_id: offering.id,
            owner_id: offering.owner_id,
            spender_id,
            quantity,
            unit_cost: offering.cost,
            total_cost: offering.cost.saturating_mul(quantity),
            created_at: Utc::now(),
        }
    }
}
