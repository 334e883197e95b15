//! Pure standing decision over job records

use uuid::Uuid;

use crate::domain::entities::job::Job;
use crate::domain::value_objects::Standing;

/// Standing of `observer` towards `subject` given the jobs between them
///
/// Jobs in `history` that do not have `subject` as hirer and `observer` as
/// worker are ignored, so callers may pass a superset.
pub fn standing(observer: Uuid, subject: Uuid, history: &[Job]) -> Standing {
    if observer == subject {
        return Standing::Owner;
    }

    let paid_for_subject = history
        .iter()
        .any(|job| job.is_hirer(subject) && job.is_worker(observer) && job.establishes_trust());

    if paid_for_subject {
        Standing::Spender
    } else {
        Standing::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::job::{JobStatus, NewJob};

    fn job_between(hirer: Uuid, worker: Uuid, payment: i64, status: JobStatus) -> Job {
        let mut job = Job::new(
            hirer,
            NewJob {
                title: "Walk dog".to_string(),
                description: "Twice a day".to_string(),
                location: "Elm Street".to_string(),
                payment,
            },
        );
        job.worker_id = Some(worker);
        job.status = status;
        job
    }

    #[test]
    fn test_owner_regardless_of_history() {
        let me = Uuid::new_v4();
        assert_eq!(standing(me, me, &[]), Standing::Owner);
    }

    #[test]
    fn test_paid_completed_job_makes_spender() {
        let hirer = Uuid::new_v4();
        let worker = Uuid::new_v4();
        let history = vec![job_between(hirer, worker, 50, JobStatus::Completed)];

        assert_eq!(standing(worker, hirer, &history), Standing::Spender);
        // Trust is one-directional
        assert_eq!(standing(hirer, worker, &history), Standing::Standard);
    }

    #[test]
    fn test_unpaid_or_unfinished_jobs_do_not_count() {
        let hirer = Uuid::new_v4();
        let worker = Uuid::new_v4();
        let history = vec![
            job_between(hirer, worker, 0, JobStatus::Completed),
            job_between(hirer, worker, 80, JobStatus::InProgress),
        ];

        assert_eq!(standing(worker, hirer, &history), Standing::Standard);
    }

    #[test]
    fn test_unrelated_jobs_are_ignored() {
        let hirer = Uuid::new_v4();
        let worker = Uuid::new_v4();
        let history = vec![job_between(hirer, Uuid::new_v4(), 50, JobStatus::Completed)];

        assert_eq!(standing(worker, hirer, &history), Standing::Standard);
    }
}
