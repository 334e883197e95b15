//! In-memory implementation of JobRepository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::job::{Job, JobStatus};
use crate::errors::DomainError;

use super::trait_::JobRepository;

/// In-memory job repository; every mutation runs under the write lock
#[derive(Clone, Default)]
pub struct InMemoryJobRepository {
    jobs: Arc<RwLock<HashMap<Uuid, Job>>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn collect<F>(&self, predicate: F) -> Vec<Job>
    where
        F: Fn(&Job) -> bool,
    {
        let jobs = self.jobs.read().await;
        let mut matching: Vec<Job> = jobs.values().filter(|j| predicate(j)).cloned().collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn create(&self, job: Job) -> Result<Job, DomainError> {
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&job.id) {
            return Err(DomainError::conflict("job already exists"));
        }
        jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(&id).cloned())
    }

    async fn add_applicant(&self, job_id: Uuid, member_id: Uuid) -> Result<bool, DomainError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&job_id)
            .ok_or_else(|| DomainError::not_found("Job"))?;

        if job.status != JobStatus::Searching {
            return Err(DomainError::invalid_transition(job.status.as_str(), "apply to job"));
        }
        if job.applicants.contains(&member_id) {
            return Ok(false);
        }
        job.applicants.push(member_id);
        job.updated_at = Utc::now();
        Ok(true)
    }

    async fn remove_applicant(&self, job_id: Uuid, member_id: Uuid) -> Result<bool, DomainError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&job_id)
            .ok_or_else(|| DomainError::not_found("Job"))?;

        if job.status != JobStatus::Searching {
            return Err(DomainError::invalid_transition(
                job.status.as_str(),
                "withdraw application",
            ));
        }
        let before = job.applicants.len();
        job.applicants.retain(|id| *id != member_id);
        let removed = job.applicants.len() != before;
        if removed {
            job.updated_at = Utc::now();
        }
        Ok(removed)
    }

    async fn transition(&self, job: &Job, expected: JobStatus) -> Result<Job, DomainError> {
        let mut jobs = self.jobs.write().await;
        let stored = jobs
            .get_mut(&job.id)
            .ok_or_else(|| DomainError::not_found("Job"))?;

        if stored.status != expected {
            return Err(DomainError::conflict(format!(
                "job status changed to {} concurrently",
                stored.status
            )));
        }
        if let (JobStatus::Searching, Some(worker_id)) = (expected, job.worker_id) {
            if !stored.applicants.contains(&worker_id) {
                return Err(DomainError::conflict(
                    "worker withdrew their application concurrently",
                ));
            }
        }

        stored.status = job.status;
        stored.worker_id = job.worker_id;
        stored.updated_at = job.updated_at;
        Ok(stored.clone())
    }

    async fn list_by_status(&self, status: JobStatus) -> Result<Vec<Job>, DomainError> {
        Ok(self.collect(|j| j.status == status).await)
    }

    async fn list_for_member(&self, member_id: Uuid) -> Result<Vec<Job>, DomainError> {
        Ok(self.collect(|j| j.is_participant(member_id)).await)
    }

    async fn list_applied(&self, member_id: Uuid) -> Result<Vec<Job>, DomainError> {
        Ok(self.collect(|j| j.is_applicant(member_id)).await)
    }

    async fn find_completed_between(
        &self,
        hirer_id: Uuid,
        worker_id: Uuid,
    ) -> Result<Vec<Job>, DomainError> {
        Ok(self
            .collect(|j| {
                j.status == JobStatus::Completed
                    && j.hirer_id == hirer_id
                    && j.worker_id == Some(worker_id)
            })
            .await)
    }
}
