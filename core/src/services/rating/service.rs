//! Reputation service implementation

use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use tp_shared::validation::validators;

use crate::domain::entities::job::{Job, JobStatus};
use crate::domain::entities::notification::{Notification, NotificationKind};
use crate::domain::entities::rating::{
    Rating, RatingDirection, MAX_RATING_TEXT_CHARS, MAX_RATING_VALUE, MIN_RATING_VALUE,
};
use crate::domain::value_objects::RatingSummary;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{JobRepository, MemberRepository, NotificationRepository, RatingRepository};
use crate::services::notification::Notifier;

/// Rating submitted by a job participant
#[derive(Debug, Clone)]
pub struct NewRating {
    pub to_id: Uuid,
    pub value: i32,
    pub text: Option<String>,
}

pub struct RatingService<R, J, M, N>
where
    R: RatingRepository,
    J: JobRepository,
    M: MemberRepository,
    N: NotificationRepository,
{
    rating_repository: Arc<R>,
    job_repository: Arc<J>,
    notifier: Arc<Notifier<M, N>>,
}

impl<R, J, M, N> RatingService<R, J, M, N>
where
    R: RatingRepository,
    J: JobRepository,
    M: MemberRepository,
    N: NotificationRepository,
{
    pub fn new(rating_repository: Arc<R>, job_repository: Arc<J>, notifier: Arc<Notifier<M, N>>) -> Self {
        Self {
            rating_repository,
            job_repository,
            notifier,
        }
    }

    /// Rate the other participant of a completed job
    ///
    /// # Returns
    /// * `Ok(Rating)` - The stored rating
    /// * `Err(DomainError::NotFound)` - Unknown job
    /// * `Err(DomainError::InvalidTransition)` - Job is not COMPLETED
    /// * `Err(DomainError::Forbidden)` - Self-rating, or the pair is not the
    ///   job's hirer and worker
    /// * `Err(DomainError::ValidationFailed)` - Value outside 1..=5 or text too long
    /// * `Err(DomainError::Conflict)` - Caller already rated this member for this job
    pub async fn submit(&self, caller: Uuid, job_id: Uuid, input: NewRating) -> DomainResult<Rating> {
        let job = self.load_job(job_id).await?;

        if job.status != JobStatus::Completed {
            return Err(DomainError::invalid_transition(job.status.as_str(), "rate job"));
        }
        let direction = rating_direction(&job, caller, input.to_id)?;

        if !(MIN_RATING_VALUE..=MAX_RATING_VALUE).contains(&input.value) {
            return Err(DomainError::validation(
                "value",
                format!("must be between {} and {}", MIN_RATING_VALUE, MAX_RATING_VALUE),
            ));
        }
        if let Some(text) = &input.text {
            if !validators::max_chars(text.trim(), MAX_RATING_TEXT_CHARS) {
                return Err(DomainError::validation(
                    "text",
                    format!("must be at most {} characters", MAX_RATING_TEXT_CHARS),
                ));
            }
        }

        let rating = Rating::new(job_id, caller, input.to_id, direction, input.value, input.text);
        let rating = self.rating_repository.create(rating).await?;

        info!(%job_id, from_id = %caller, to_id = %rating.to_id, value = rating.value, "Rating submitted");
        self.notifier
            .notify(Notification::new(rating.to_id, NotificationKind::RatingReceived, caller).with_job(job_id))
            .await;
        Ok(rating)
    }

    /// Ratings the member received, most recent first
    pub async fn list_for_member(&self, member_id: Uuid) -> DomainResult<Vec<Rating>> {
        self.rating_repository.list_for_subject(member_id).await
    }

    /// Ratings the member wrote, most recent first
    pub async fn list_by_member(&self, member_id: Uuid) -> DomainResult<Vec<Rating>> {
        self.rating_repository.list_by_author(member_id).await
    }

    pub async fn list_for_job(&self, job_id: Uuid) -> DomainResult<Vec<Rating>> {
        self.load_job(job_id).await?;
        self.rating_repository.list_for_job(job_id).await
    }

    pub async fn summary(&self, member_id: Uuid) -> DomainResult<RatingSummary> {
        let received = self.rating_repository.list_for_subject(member_id).await?;
        Ok(RatingSummary::from_ratings(&received))
    }

    /// Completed jobs on which the member has not yet rated the other participant
    pub async fn pending_for(&self, member_id: Uuid) -> DomainResult<Vec<Job>> {
        let jobs = self.job_repository.list_for_member(member_id).await?;

        let mut pending = Vec::new();
        for job in jobs.into_iter().filter(|j| j.status == JobStatus::Completed) {
            let Some(counterpart) = job.counterpart(member_id) else {
                continue;
            };
            if !self.rating_repository.exists(job.id, member_id, counterpart).await? {
                pending.push(job);
            }
        }
        Ok(pending)
    }

    async fn load_job(&self, job_id: Uuid) -> DomainResult<Job> {
        self.job_repository
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Job"))
    }
}

/// Role of the rated member, if `from_id` and `to_id` are the job's two participants
fn rating_direction(job: &Job, from_id: Uuid, to_id: Uuid) -> DomainResult<RatingDirection> {
    if from_id == to_id {
        debug!(job_id = %job.id, member_id = %from_id, "Rejected self-rating");
        return Err(DomainError::forbidden("members cannot rate themselves"));
    }

    match job.worker_id {
        Some(worker_id) if job.is_hirer(from_id) && to_id == worker_id => Ok(RatingDirection::Worker),
        Some(worker_id) if from_id == worker_id && job.is_hirer(to_id) => Ok(RatingDirection::Hirer),
        _ => Err(DomainError::forbidden(
            "only the hirer and the worker of a job can rate each other",
        )),
    }
}
