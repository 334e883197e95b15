//! Unit tests for rating eligibility, uniqueness and aggregates

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::notification::NotificationKind;
use crate::domain::entities::rating::RatingDirection;
use crate::errors::DomainError;
use crate::services::rating::NewRating;
use crate::services::testing::Marketplace;

fn rating(to_id: Uuid, value: i32) -> NewRating {
    NewRating {
        to_id,
        value,
        text: None,
    }
}

#[tokio::test]
async fn test_participants_rate_each_other_with_subject_direction() {
    let market = Marketplace::new();
    let hirer = market.member("Hana").await;
    let worker = market.member("Wes").await;
    let job = market.completed_job(&hirer, &worker, 50).await;

    let of_worker = market
        .ratings
        .submit(
            hirer.id,
            job.id,
            NewRating {
                to_id: worker.id,
                value: 5,
                text: Some("  Tidy work  ".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(of_worker.direction, RatingDirection::Worker);
    assert_eq!(of_worker.text.as_deref(), Some("Tidy work"));

    let of_hirer = market.ratings.submit(worker.id, job.id, rating(hirer.id, 4)).await.unwrap();
    assert_eq!(of_hirer.direction, RatingDirection::Hirer);

    let queue = market.members.notifications(worker.id, false).await.unwrap();
    assert!(queue.iter().any(|n| n.kind == NotificationKind::RatingReceived));
}

#[tokio::test]
async fn test_rating_requires_completed_job() {
    let market = Marketplace::new();
    let hirer = market.member("Hana").await;
    let worker = market.member("Wes").await;
    let job = market.in_progress_job(&hirer, &worker, 50).await;

    let err = market.ratings.submit(hirer.id, job.id, rating(worker.id, 5)).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition { .. }));

    let err = market
        .ratings
        .submit(hirer.id, Uuid::new_v4(), rating(worker.id, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_self_rating_is_forbidden() {
    let market = Marketplace::new();
    let hirer = market.member("Hana").await;
    let worker = market.member("Wes").await;
    let job = market.completed_job(&hirer, &worker, 50).await;

    let err = market.ratings.submit(hirer.id, job.id, rating(hirer.id, 5)).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden { .. }));
}

#[tokio::test]
async fn test_outsiders_cannot_rate() {
    let market = Marketplace::new();
    let hirer = market.member("Hana").await;
    let worker = market.member("Wes").await;
    let outsider = market.member("Xan").await;
    let job = market.completed_job(&hirer, &worker, 50).await;

    let err = market.ratings.submit(outsider.id, job.id, rating(worker.id, 1)).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden { .. }));

    let err = market.ratings.submit(hirer.id, job.id, rating(outsider.id, 1)).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden { .. }));
}

#[tokio::test]
async fn test_rating_value_and_text_validation() {
    let market = Marketplace::new();
    let hirer = market.member("Hana").await;
    let worker = market.member("Wes").await;
    let job = market.completed_job(&hirer, &worker, 50).await;

    for value in [0, 6, -3] {
        let err = market.ratings.submit(hirer.id, job.id, rating(worker.id, value)).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationFailed { ref field, .. } if field == "value"));
    }

    let long_text = NewRating {
        to_id: worker.id,
        value: 3,
        text: Some("y".repeat(1001)),
    };
    let err = market.ratings.submit(hirer.id, job.id, long_text).await.unwrap_err();
    assert!(matches!(err, DomainError::ValidationFailed { ref field, .. } if field == "text"));
}

#[tokio::test]
async fn test_second_rating_conflicts() {
    let market = Marketplace::new();
    let hirer = market.member("Hana").await;
    let worker = market.member("Wes").await;
    let job = market.completed_job(&hirer, &worker, 50).await;

    market.ratings.submit(hirer.id, job.id, rating(worker.id, 4)).await.unwrap();
    let err = market.ratings.submit(hirer.id, job.id, rating(worker.id, 2)).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }));

    assert_eq!(market.ratings.list_for_job(job.id).await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_double_submission() {
    let market = Arc::new(Marketplace::new());
    let hirer = market.member("Hana").await;
    let worker = market.member("Wes").await;
    let job = market.completed_job(&hirer, &worker, 50).await;

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let market = Arc::clone(&market);
            let (hirer_id, job_id, worker_id) = (hirer.id, job.id, worker.id);
            tokio::spawn(async move { market.ratings.submit(hirer_id, job_id, rating(worker_id, 5)).await })
        })
        .collect();

    let mut ok = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => ok += 1,
            Err(DomainError::Conflict { .. }) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!((ok, conflicts), (1, 1));
}

#[tokio::test]
async fn test_summary_and_listings() {
    let market = Marketplace::new();
    let hirer = market.member("Hana").await;
    let worker = market.member("Wes").await;

    let empty = market.ratings.summary(worker.id).await.unwrap();
    assert_eq!(empty.count, 0);
    assert_eq!(empty.average, 0.0);
    assert_eq!(empty.histogram, [0; 5]);

    let first = market.completed_job(&hirer, &worker, 50).await;
    let second = market.completed_job(&hirer, &worker, 0).await;
    market.ratings.submit(hirer.id, first.id, rating(worker.id, 5)).await.unwrap();
    market.ratings.submit(hirer.id, second.id, rating(worker.id, 2)).await.unwrap();

    let summary = market.ratings.summary(worker.id).await.unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.average, 3.5);
    assert_eq!(summary.histogram, [0, 1, 0, 0, 1]);
    assert_eq!(summary.as_worker.count, 2);
    assert_eq!(summary.as_hirer.count, 0);

    let received = market.ratings.list_for_member(worker.id).await.unwrap();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].job_id, second.id);

    assert_eq!(market.ratings.list_by_member(hirer.id).await.unwrap().len(), 2);
    assert!(market.ratings.list_by_member(worker.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_pending_ratings() {
    let market = Marketplace::new();
    let hirer = market.member("Hana").await;
    let worker = market.member("Wes").await;
    let done = market.completed_job(&hirer, &worker, 50).await;
    market.in_progress_job(&hirer, &worker, 50).await;

    let pending = market.ratings.pending_for(worker.id).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, done.id);

    market.ratings.submit(worker.id, done.id, rating(hirer.id, 5)).await.unwrap();
    assert!(market.ratings.pending_for(worker.id).await.unwrap().is_empty());
    assert_eq!(market.ratings.pending_for(hirer.id).await.unwrap().len(), 1);
}
