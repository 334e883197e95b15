//! Job repository trait defining the interface for job persistence.
//!
//! Status changes go through [`JobRepository::transition`], a compare-and-set
//! on the job's prior status, so two concurrent transitions from the same
//! state cannot both succeed.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::job::{Job, JobStatus};
use crate::errors::DomainError;

/// Repository trait for Job entity persistence operations
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a newly created job
    async fn create(&self, job: Job) -> Result<Job, DomainError>;

    /// Find a job by id, applicants included
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError>;

    /// Add an applicant while the job is SEARCHING
    ///
    /// # Returns
    /// * `Ok(true)` - Applicant added
    /// * `Ok(false)` - Member had already applied
    /// * `Err(DomainError::NotFound)` - Job does not exist
    /// * `Err(DomainError::InvalidTransition)` - Job is no longer SEARCHING
    async fn add_applicant(&self, job_id: Uuid, member_id: Uuid) -> Result<bool, DomainError>;

    /// Remove an applicant while the job is SEARCHING
    ///
    /// # Returns
    /// * `Ok(true)` - Applicant removed
    /// * `Ok(false)` - Member was not an applicant
    /// * `Err(DomainError::InvalidTransition)` - Job is no longer SEARCHING
    async fn remove_applicant(&self, job_id: Uuid, member_id: Uuid) -> Result<bool, DomainError>;

    /// Persist `job`'s status, worker and `updated_at` if the stored status
    /// still equals `expected`
    ///
    /// Leaving SEARCHING with a worker also requires that worker to still be
    /// among the stored applicants.
    ///
    /// # Returns
    /// * `Ok(Job)` - The stored job after the transition
    /// * `Err(DomainError::Conflict)` - Stored status no longer matches, or the
    ///   worker withdrew
    /// * `Err(DomainError::NotFound)` - Job does not exist
    async fn transition(&self, job: &Job, expected: JobStatus) -> Result<Job, DomainError>;

    /// Jobs in `status`, newest first
    async fn list_by_status(&self, status: JobStatus) -> Result<Vec<Job>, DomainError>;

    /// Jobs where the member is hirer or worker, newest first
    async fn list_for_member(&self, member_id: Uuid) -> Result<Vec<Job>, DomainError>;

    /// Jobs the member has applied to, newest first
    async fn list_applied(&self, member_id: Uuid) -> Result<Vec<Job>, DomainError>;

    /// COMPLETED jobs with the given hirer and worker
    async fn find_completed_between(
        &self,
        hirer_id: Uuid,
        worker_id: Uuid,
    ) -> Result<Vec<Job>, DomainError>;
}
