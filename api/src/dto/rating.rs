use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tp_core::services::rating::NewRating;

/// Rating body. Range and length rules are enforced by the rating engine so
/// that eligibility errors take precedence over malformed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRatingRequest {
    pub to_id: Uuid,
    pub value: i32,
    #[serde(default)]
    pub text: Option<String>,
}

impl From<SubmitRatingRequest> for NewRating {
    fn from(request: SubmitRatingRequest) -> Self {
        NewRating {
            to_id: request.to_id,
            value: request.value,
            text: request.text,
        }
    }
}
