use serde::{Deserialize, Serialize};
use validator::Validate;

use tp_core::domain::entities::offering::OfferingDraft;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OfferingRequest {
    /// Trimmed and length-checked by `OfferingService::upsert`
    pub description: String,

    #[validate(range(min = 0))]
    pub cost: i64,

    /// Omitted or null for unlimited stock
    #[serde(default)]
    #[validate(range(min = 0))]
    pub quantity: Option<i64>,
}

impl From<OfferingRequest> for OfferingDraft {
    fn from(request: OfferingRequest) -> Self {
        OfferingDraft {
            description: request.description,
            cost: request.cost,
            quantity: request.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RedeemRequest {
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}
