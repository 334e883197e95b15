//! Store-backed standing lookup

use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::domain::value_objects::Standing;
use crate::errors::DomainResult;
use crate::repositories::JobRepository;

use super::gate;

/// Reads the candidate jobs and applies the trust gate
pub struct TrustService<J: JobRepository> {
    job_repository: Arc<J>,
}

impl<J: JobRepository> TrustService<J> {
    pub fn new(job_repository: Arc<J>) -> Self {
        Self { job_repository }
    }

    /// Standing of `observer` towards `subject`
    pub async fn standing(&self, observer: Uuid, subject: Uuid) -> DomainResult<Standing> {
        if observer == subject {
            return Ok(Standing::Owner);
        }

        let history = self
            .job_repository
            .find_completed_between(subject, observer)
            .await?;
        let standing = gate::standing(observer, subject, &history);

        debug!(%observer, %subject, %standing, jobs = history.len(), "Resolved standing");
        Ok(standing)
    }
}
