//! Tests for the in-memory job store's atomic operations

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::job::{Job, JobStatus, NewJob};
use crate::errors::DomainError;

use super::{InMemoryJobRepository, JobRepository};

fn sample_job() -> Job {
    Job::new(
        Uuid::new_v4(),
        NewJob {
            title: "Fix gate".to_string(),
            description: "Hinge is loose".to_string(),
            location: "Oak Avenue".to_string(),
            payment: 20,
        },
    )
}

#[tokio::test]
async fn test_transition_rejects_stale_expected_status() {
    let repo = InMemoryJobRepository::new();
    let mut job = repo.create(sample_job()).await.unwrap();
    let worker = Uuid::new_v4();
    repo.add_applicant(job.id, worker).await.unwrap();
    job.applicants.push(worker);

    let mut first = job.clone();
    first.assign_worker(worker).unwrap();
    repo.transition(&first, JobStatus::Searching).await.unwrap();

    let mut second = job.clone();
    second.assign_worker(worker).unwrap();
    let err = repo.transition(&second, JobStatus::Searching).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }));
}

#[tokio::test]
async fn test_add_applicant_guarded_by_status() {
    let repo = InMemoryJobRepository::new();
    let mut job = repo.create(sample_job()).await.unwrap();
    let worker = Uuid::new_v4();

    assert!(repo.add_applicant(job.id, worker).await.unwrap());
    assert!(!repo.add_applicant(job.id, worker).await.unwrap());

    job.applicants.push(worker);
    job.assign_worker(worker).unwrap();
    repo.transition(&job, JobStatus::Searching).await.unwrap();

    let err = repo.add_applicant(job.id, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition { .. }));
}

#[tokio::test]
async fn test_unknown_job() {
    let repo = InMemoryJobRepository::new();
    let err = repo.add_applicant(Uuid::new_v4(), Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_applications_do_not_duplicate() {
    let repo = Arc::new(InMemoryJobRepository::new());
    let job = repo.create(sample_job()).await.unwrap();
    let applicant = Uuid::new_v4();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.add_applicant(job.id, applicant).await })
        })
        .collect();

    let mut inserted = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap() {
            inserted += 1;
        }
    }

    assert_eq!(inserted, 1);
    let stored = repo.find_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(stored.applicants, vec![applicant]);
}
