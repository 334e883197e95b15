//! Job lifecycle service implementation

use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use tp_shared::validation::validators;

use crate::domain::entities::job::{
    Job, JobStatus, NewJob, MAX_DESCRIPTION_CHARS, MAX_LOCATION_CHARS, MAX_TITLE_CHARS,
};
use crate::domain::entities::notification::{Notification, NotificationKind};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{JobRepository, MemberRepository, NotificationRepository};
use crate::services::notification::Notifier;

pub struct JobService<J, M, N>
where
    J: JobRepository,
    M: MemberRepository,
    N: NotificationRepository,
{
    job_repository: Arc<J>,
    member_repository: Arc<M>,
    notifier: Arc<Notifier<M, N>>,
}

impl<J, M, N> JobService<J, M, N>
where
    J: JobRepository,
    M: MemberRepository,
    N: NotificationRepository,
{
    pub fn new(job_repository: Arc<J>, member_repository: Arc<M>, notifier: Arc<Notifier<M, N>>) -> Self {
        Self {
            job_repository,
            member_repository,
            notifier,
        }
    }

    /// Post a new job as `caller`
    ///
    /// # Returns
    /// * `Ok(Job)` - SEARCHING job with no worker and no applicants
    /// * `Err(DomainError::ValidationFailed)` - Blank or oversized text, negative payment
    /// * `Err(DomainError::NotFound)` - Caller is not a registered member
    pub async fn create(&self, caller: Uuid, input: NewJob) -> DomainResult<Job> {
        validate_new_job(&input)?;
        self.require_member(caller).await?;

        let job = self.job_repository.create(Job::new(caller, input)).await?;
        info!(job_id = %job.id, hirer_id = %caller, payment = job.payment, "Job created");
        Ok(job)
    }

    /// Register `caller` as an applicant; applying twice is a no-op
    pub async fn apply(&self, caller: Uuid, job_id: Uuid) -> DomainResult<Job> {
        let mut job = self.load(job_id).await?;
        self.require_member(caller).await?;

        if !job.add_applicant(caller)? {
            debug!(%job_id, applicant_id = %caller, "Already applied");
            return Ok(job);
        }

        // The store re-checks SEARCHING, so losing a race with selection fails here
        let inserted = self.job_repository.add_applicant(job_id, caller).await?;
        if inserted {
            info!(%job_id, applicant_id = %caller, "Application received");
            self.notifier
                .notify(
                    Notification::new(job.hirer_id, NotificationKind::ApplicationReceived, caller)
                        .with_job(job_id),
                )
                .await;
        }

        self.load(job_id).await
    }

    /// Remove `caller` from the applicants of an open job
    pub async fn withdraw(&self, caller: Uuid, job_id: Uuid) -> DomainResult<Job> {
        let mut job = self.load(job_id).await?;
        job.remove_applicant(caller)?;

        if self.job_repository.remove_applicant(job_id, caller).await? {
            info!(%job_id, applicant_id = %caller, "Application withdrawn");
        }
        self.load(job_id).await
    }

    /// SEARCHING -> IN_PROGRESS with `worker_id` as the worker
    ///
    /// # Returns
    /// * `Err(DomainError::Forbidden)` - Caller is not the hirer, or the
    ///   worker is the hirer or not an applicant
    /// * `Err(DomainError::InvalidTransition)` - Job is not SEARCHING
    /// * `Err(DomainError::Conflict)` - Another transition won the race
    pub async fn select_worker(&self, caller: Uuid, job_id: Uuid, worker_id: Uuid) -> DomainResult<Job> {
        let mut job = self.load(job_id).await?;
        if !job.is_hirer(caller) {
            debug!(%job_id, %caller, "Rejected worker selection by non-hirer");
            return Err(DomainError::forbidden("only the hirer can select a worker"));
        }

        job.assign_worker(worker_id)?;
        let job = self.job_repository.transition(&job, JobStatus::Searching).await?;

        info!(%job_id, %worker_id, "Worker selected");
        self.notifier
            .notify(Notification::new(worker_id, NotificationKind::WorkerSelected, caller).with_job(job_id))
            .await;
        Ok(job)
    }

    /// IN_PROGRESS -> COMPLETED
    pub async fn complete(&self, caller: Uuid, job_id: Uuid) -> DomainResult<Job> {
        let mut job = self.load(job_id).await?;
        if !job.is_hirer(caller) {
            debug!(%job_id, %caller, "Rejected completion by non-hirer");
            return Err(DomainError::forbidden("only the hirer can complete a job"));
        }

        job.complete()?;
        let job = self.job_repository.transition(&job, JobStatus::InProgress).await?;

        info!(%job_id, payment = job.payment, "Job completed");
        if let Some(worker_id) = job.worker_id {
            self.notifier
                .notify(Notification::new(worker_id, NotificationKind::JobCompleted, caller).with_job(job_id))
                .await;
        }
        Ok(job)
    }

    pub async fn get(&self, job_id: Uuid) -> DomainResult<Job> {
        self.load(job_id).await
    }

    /// Jobs still accepting applications, newest first
    pub async fn list_open(&self) -> DomainResult<Vec<Job>> {
        self.job_repository.list_by_status(JobStatus::Searching).await
    }

    /// Jobs the member hires for or works on, newest first
    pub async fn list_for_member(&self, member_id: Uuid) -> DomainResult<Vec<Job>> {
        self.job_repository.list_for_member(member_id).await
    }

    /// Jobs the member has applied to, newest first
    pub async fn list_applied(&self, member_id: Uuid) -> DomainResult<Vec<Job>> {
        self.job_repository.list_applied(member_id).await
    }

    async fn load(&self, job_id: Uuid) -> DomainResult<Job> {
        self.job_repository
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Job"))
    }

    async fn require_member(&self, member_id: Uuid) -> DomainResult<()> {
        match self.member_repository.find_by_id(member_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Member")),
        }
    }
}

fn validate_new_job(input: &NewJob) -> DomainResult<()> {
    let text_fields = [
        ("title", input.title.as_str(), MAX_TITLE_CHARS),
        ("description", input.description.as_str(), MAX_DESCRIPTION_CHARS),
        ("location", input.location.as_str(), MAX_LOCATION_CHARS),
    ];

    for (field, value, max) in text_fields {
        if !validators::not_blank(value) {
            return Err(DomainError::validation(field, "must not be blank"));
        }
        if !validators::max_chars(value.trim(), max) {
            return Err(DomainError::validation(field, format!("must be at most {} characters", max)));
        }
    }

    if input.payment < 0 {
        return Err(DomainError::validation("payment", "must not be negative"));
    }
    Ok(())
}
