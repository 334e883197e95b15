//! Offering entity: a unit of a member's redeemable inventory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_OFFERING_DESCRIPTION_CHARS: usize = 500;

/// Editable fields of an offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferingDraft {
    pub description: String,
    /// Price in credits
    pub cost: i64,
    /// `None` means unlimited stock
    pub quantity: Option<i64>,
}

/// Offering entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    pub id: Uuid,
    pub description: String,
    pub cost: i64,
    pub quantity: Option<i64>,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Offering {
    pub fn new(owner_id: Uuid, draft: OfferingDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            description: draft.description.trim().to_string(),
            cost: draft.cost,
            quantity: draft.quantity,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the editable fields
    pub fn apply(&mut self, draft: OfferingDraft) {
        self.description = draft.description.trim().to_string();
        self.cost = draft.cost;
        self.quantity = draft.quantity;
        self.updated_at = Utc::now();
    }

    pub fn is_owned_by(&self, member_id: Uuid) -> bool {
        self.owner_id == member_id
    }

    pub fn is_unlimited(&self) -> bool {
        self.quantity.is_none()
    }

    pub fn has_stock_for(&self, requested: i64) -> bool {
        match self.quantity {
            None => true,
            Some(available) => available >= requested,
        }
    }

    /// Removes `requested` units; the caller must have checked stock
    pub(crate) fn take(&mut self, requested: i64) {
        if let Some(available) = self.quantity.as_mut() {
            *available -= requested;
        }
        self.updated_at = Utc::now();
    }
}
