use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use tp_core::domain::entities::job::NewJob;

/// Text fields are trimmed and length-checked by `JobService::create`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub location: String,

    /// Whole currency units; zero is allowed
    #[validate(range(min = 0))]
    pub payment: i64,
}

impl From<CreateJobRequest> for NewJob {
    fn from(request: CreateJobRequest) -> Self {
        NewJob {
            title: request.title,
            description: request.description,
            location: request.location,
            payment: request.payment,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectWorkerRequest {
    pub worker_id: Uuid,
}
