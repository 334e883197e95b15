//! Job entity and its lifecycle state machine.
//!
//! ```text
//! SEARCHING --select_worker--> IN_PROGRESS --complete--> COMPLETED
//! ```
//!
//! Status never moves backwards and `worker_id` is set exactly when the job
//! leaves SEARCHING. The methods here enforce the state rules only; who is
//! allowed to call them is decided by the job service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

pub const MAX_TITLE_CHARS: usize = 120;
pub const MAX_DESCRIPTION_CHARS: usize = 5000;
pub const MAX_LOCATION_CHARS: usize = 200;

/// Lifecycle status of a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// Open for applications
    Searching,
    /// A worker has been selected
    InProgress,
    /// Terminal state
    Completed,
}

impl JobStatus {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Searching => "SEARCHING",
            JobStatus::InProgress => "IN_PROGRESS",
            JobStatus::Completed => "COMPLETED",
        }
    }

    /// The single status this one may advance to
    pub fn next(&self) -> Option<JobStatus> {
        match self {
            JobStatus::Searching => Some(JobStatus::InProgress),
            JobStatus::InProgress => Some(JobStatus::Completed),
            JobStatus::Completed => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SEARCHING" => Ok(JobStatus::Searching),
            "IN_PROGRESS" => Ok(JobStatus::InProgress),
            "COMPLETED" => Ok(JobStatus::Completed),
            other => Err(format!("Unknown job status: {}", other)),
        }
    }
}

/// Input for creating a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub location: String,
    pub payment: i64,
}

/// Job entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,

    /// Fixed at creation
    pub payment: i64,

    pub status: JobStatus,

    /// Member who posted and pays for the job
    pub hirer_id: Uuid,

    /// Selected member; `None` while SEARCHING
    pub worker_id: Option<Uuid>,

    /// Members who applied, in application order, without duplicates
    pub applicants: Vec<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Creates a SEARCHING job owned by `hirer_id`
    pub fn new(hirer_id: Uuid, input: NewJob) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            location: input.location.trim().to_string(),
            payment: input.payment,
            status: JobStatus::Searching,
            hirer_id,
            worker_id: None,
            applicants: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_hirer(&self, member_id: Uuid) -> bool {
        self.hirer_id == member_id
    }

    pub fn is_worker(&self, member_id: Uuid) -> bool {
        self.worker_id == Some(member_id)
    }

    pub fn is_applicant(&self, member_id: Uuid) -> bool {
        self.applicants.contains(&member_id)
    }

    /// Hirer or assigned worker
    pub fn is_participant(&self, member_id: Uuid) -> bool {
        self.is_hirer(member_id) || self.is_worker(member_id)
    }

    /// The other participant, if `member_id` is one of them
    pub fn counterpart(&self, member_id: Uuid) -> Option<Uuid> {
        if self.is_hirer(member_id) {
            self.worker_id
        } else if self.is_worker(member_id) {
            Some(self.hirer_id)
        } else {
            None
        }
    }

    /// Whether this job gives its worker spending rights against its hirer
    pub fn establishes_trust(&self) -> bool {
        self.status == JobStatus::Completed && self.payment > 0 && self.worker_id.is_some()
    }

    /// Adds an applicant; returns `false` when already present
    pub fn add_applicant(&mut self, member_id: Uuid) -> DomainResult<bool> {
        if self.is_hirer(member_id) {
            return Err(DomainError::forbidden("hirer cannot apply to their own job"));
        }
        self.require_status(JobStatus::Searching, "apply to job")?;
        if self.is_applicant(member_id) {
            return Ok(false);
        }
        self.applicants.push(member_id);
        self.updated_at = Utc::now();
        Ok(true)
    }

    /// Removes an applicant while the job is still open
    pub fn remove_applicant(&mut self, member_id: Uuid) -> DomainResult<()> {
        if !self.is_applicant(member_id) {
            return Err(DomainError::forbidden("member has not applied to this job"));
        }
        self.require_status(JobStatus::Searching, "withdraw application")?;
        self.applicants.retain(|id| *id != member_id);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// SEARCHING -> IN_PROGRESS with `worker_id` chosen from the applicants
    pub fn assign_worker(&mut self, worker_id: Uuid) -> DomainResult<()> {
        self.require_status(JobStatus::Searching, "select worker")?;
        if self.is_hirer(worker_id) {
            return Err(DomainError::forbidden("hirer cannot select themselves"));
        }
        if !self.is_applicant(worker_id) {
            return Err(DomainError::forbidden("worker must be chosen from the applicants"));
        }
        self.worker_id = Some(worker_id);
        self.status = JobStatus::InProgress;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// IN_PROGRESS -> COMPLETED
    pub fn complete(&mut self) -> DomainResult<()> {
        self.require_status(JobStatus::InProgress, "complete job")?;
        if self.worker_id.is_none() {
            return Err(DomainError::invalid_transition(self.status.as_str(), "complete job without a worker"));
        }
        self.status = JobStatus::Completed;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn require_status(&self, expected: JobStatus, action: &str) -> DomainResult<()> {
        if self.status != expected {
            return Err(DomainError::invalid_transition(self.status.as_str(), action));
        }
        Ok(())
    }
}
