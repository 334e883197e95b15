//! Rating repository trait. Ratings are append-only.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::rating::Rating;
use crate::errors::DomainError;

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Insert a rating
    ///
    /// # Returns
    /// * `Ok(Rating)` - The stored rating
    /// * `Err(DomainError::Conflict)` - A rating with the same
    ///   (job_id, from_id, to_id) already exists
    async fn create(&self, rating: Rating) -> Result<Rating, DomainError>;

    /// Whether the author already rated the subject for this job
    async fn exists(&self, job_id: Uuid, from_id: Uuid, to_id: Uuid) -> Result<bool, DomainError>;

    /// Ratings received by the member, most recent first
    async fn list_for_subject(&self, member_id: Uuid) -> Result<Vec<Rating>, DomainError>;

    /// Ratings written by the member, most recent first
    async fn list_by_author(&self, member_id: Uuid) -> Result<Vec<Rating>, DomainError>;

    /// Ratings attached to a job, most recent first
    async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<Rating>, DomainError>;
}
