//! MySQL implementation of the JobRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use std::collections::HashMap;
use uuid::Uuid;

use tp_core::domain::entities::job::{Job, JobStatus};
use tp_core::errors::DomainError;
use tp_core::repositories::JobRepository;

use super::{column, db_error, optional_uuid_column, parse_tag, uuid_column};

const SELECT_JOB: &str = r#"
    SELECT j.id, j.title, j.description, j.location, j.payment, j.status,
           j.hirer_id, j.worker_id, j.created_at, j.updated_at
    FROM jobs j
"#;

const SELECT_APPLICANTS: &str = r#"
    SELECT a.job_id, a.member_id
    FROM job_applicants a
    JOIN jobs j ON j.id = a.job_id
"#;

pub struct MySqlJobRepository {
    pool: MySqlPool,
}

impl MySqlJobRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_job(row: &MySqlRow, applicants: Vec<Uuid>) -> Result<Job, DomainError> {
        let status: String = column(row, "status")?;

        Ok(Job {
            id: uuid_column(row, "id")?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            location: column(row, "location")?,
            payment: column(row, "payment")?,
            status: parse_tag::<JobStatus>(&status)?,
            hirer_id: uuid_column(row, "hirer_id")?,
            worker_id: optional_uuid_column(row, "worker_id")?,
            applicants,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    /// Jobs matching `filter`, newest first, with their applicants
    async fn fetch_list(&self, filter: &str, binds: &[String]) -> Result<Vec<Job>, DomainError> {
        let job_query = format!("{} WHERE {} ORDER BY j.created_at DESC", SELECT_JOB, filter);
        let mut q = sqlx::query(&job_query);
        for value in binds {
            q = q.bind(value);
        }
        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list jobs"))?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let applicant_query = format!(
            "{} WHERE {} ORDER BY a.applied_at, a.member_id",
            SELECT_APPLICANTS, filter
        );
        let mut q = sqlx::query(&applicant_query);
        for value in binds {
            q = q.bind(value);
        }
        let applicant_rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list applicants"))?;

        let mut applicants: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for row in &applicant_rows {
            applicants
                .entry(uuid_column(row, "job_id")?)
                .or_default()
                .push(uuid_column(row, "member_id")?);
        }

        rows.iter()
            .map(|row| {
                let id = uuid_column(row, "id")?;
                Self::row_to_job(row, applicants.remove(&id).unwrap_or_default())
            })
            .collect()
    }

    /// Lock the job row and return its status, inside `tx`
    async fn lock_status(
        tx: &mut sqlx::Transaction<'_, sqlx::MySql>,
        job_id: Uuid,
    ) -> Result<JobStatus, DomainError> {
        let row = sqlx::query("SELECT status FROM jobs WHERE id = ? FOR UPDATE")
            .bind(job_id.to_string())
            .fetch_optional(&mut **tx)
            .await
            .map_err(db_error("Failed to lock job"))?
            .ok_or_else(|| DomainError::not_found("Job"))?;

        let status: String = column(&row, "status")?;
        parse_tag(&status)
    }
}

#[async_trait]
impl JobRepository for MySqlJobRepository {
    async fn create(&self, job: Job) -> Result<Job, DomainError> {
        let query = r#"
            INSERT INTO jobs (
                id, title, description, location, payment, status,
                hirer_id, worker_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(job.id.to_string())
            .bind(&job.title)
            .bind(&job.description)
            .bind(&job.location)
            .bind(job.payment)
            .bind(job.status.as_str())
            .bind(job.hirer_id.to_string())
            .bind(job.worker_id.map(|id| id.to_string()))
            .bind(job.created_at)
            .bind(job.updated_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create job"))?;

        Ok(job)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DomainError> {
        let jobs = self.fetch_list("j.id = ?", &[id.to_string()]).await?;
        Ok(jobs.into_iter().next())
    }

    async fn add_applicant(&self, job_id: Uuid, member_id: Uuid) -> Result<bool, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("Failed to begin transaction"))?;

        let status = Self::lock_status(&mut tx, job_id).await?;
        if status != JobStatus::Searching {
            return Err(DomainError::invalid_transition(status.as_str(), "apply to job"));
        }

        let now = Utc::now();
        let inserted = sqlx::query(
            "INSERT IGNORE INTO job_applicants (job_id, member_id, applied_at) VALUES (?, ?, ?)",
        )
        .bind(job_id.to_string())
        .bind(member_id.to_string())
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to add applicant"))?
        .rows_affected()
            == 1;

        if inserted {
            sqlx::query("UPDATE jobs SET updated_at = ? WHERE id = ?")
                .bind(now)
                .bind(job_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(db_error("Failed to touch job"))?;
        }

        tx.commit().await.map_err(db_error("Failed to commit applicant"))?;
        Ok(inserted)
    }

    async fn remove_applicant(&self, job_id: Uuid, member_id: Uuid) -> Result<bool, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("Failed to begin transaction"))?;

        let status = Self::lock_status(&mut tx, job_id).await?;
        if status != JobStatus::Searching {
            return Err(DomainError::invalid_transition(status.as_str(), "withdraw application"));
        }

        let removed = sqlx::query("DELETE FROM job_applicants WHERE job_id = ? AND member_id = ?")
            .bind(job_id.to_string())
            .bind(member_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to remove applicant"))?
            .rows_affected()
            == 1;

        if removed {
            sqlx::query("UPDATE jobs SET updated_at = ? WHERE id = ?")
                .bind(Utc::now())
                .bind(job_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(db_error("Failed to touch job"))?;
        }

        tx.commit().await.map_err(db_error("Failed to commit withdrawal"))?;
        Ok(removed)
    }

    async fn transition(&self, job: &Job, expected: JobStatus) -> Result<Job, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("Failed to begin transaction"))?;

        let status = Self::lock_status(&mut tx, job.id).await?;
        if status != expected {
            tracing::debug!(job_id = %job.id, expected = %expected, actual = %status, "Job transition lost");
            return Err(DomainError::conflict(format!(
                "job status changed to {} concurrently",
                status
            )));
        }

        if let (JobStatus::Searching, Some(worker_id)) = (expected, job.worker_id) {
            let still_applied = sqlx::query(
                "SELECT 1 FROM job_applicants WHERE job_id = ? AND member_id = ?",
            )
            .bind(job.id.to_string())
            .bind(worker_id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error("Failed to check applicant"))?
            .is_some();

            if !still_applied {
                tracing::debug!(job_id = %job.id, %worker_id, "Selected worker withdrew concurrently");
                return Err(DomainError::conflict("worker withdrew their application concurrently"));
            }
        }

        sqlx::query("UPDATE jobs SET status = ?, worker_id = ?, updated_at = ? WHERE id = ?")
            .bind(job.status.as_str())
            .bind(job.worker_id.map(|id| id.to_string()))
            .bind(job.updated_at)
            .bind(job.id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to transition job"))?;

        tx.commit().await.map_err(db_error("Failed to commit transition"))?;

        self.find_by_id(job.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Job"))
    }

    async fn list_by_status(&self, status: JobStatus) -> Result<Vec<Job>, DomainError> {
        self.fetch_list("j.status = ?", &[status.as_str().to_string()]).await
    }

    async fn list_for_member(&self, member_id: Uuid) -> Result<Vec<Job>, DomainError> {
        let id = member_id.to_string();
        self.fetch_list("(j.hirer_id = ? OR j.worker_id = ?)", &[id.clone(), id])
            .await
    }

    async fn list_applied(&self, member_id: Uuid) -> Result<Vec<Job>, DomainError> {
        self.fetch_list(
            "EXISTS (SELECT 1 FROM job_applicants a WHERE a.job_id = j.id AND a.member_id = ?)",
            &[member_id.to_string()],
        )
        .await
    }

    async fn find_completed_between(
        &self,
        hirer_id: Uuid,
        worker_id: Uuid,
    ) -> Result<Vec<Job>, DomainError> {
        self.fetch_list(
            "j.status = ? AND j.hirer_id = ? AND j.worker_id = ?",
            &[
                JobStatus::Completed.as_str().to_string(),
                hirer_id.to_string(),
                worker_id.to_string(),
            ],
        )
        .await
    }
}
