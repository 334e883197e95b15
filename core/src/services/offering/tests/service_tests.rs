//! Unit tests for offering ownership and validation

use uuid::Uuid;

use crate::domain::entities::offering::OfferingDraft;
use crate::domain::value_objects::Standing;
use crate::errors::DomainError;
use crate::services::testing::Marketplace;

fn draft(cost: i64, quantity: Option<i64>) -> OfferingDraft {
    OfferingDraft {
        description: "Jar of honey".to_string(),
        cost,
        quantity,
    }
}

#[tokio::test]
async fn test_create_and_update_offering() {
    let market = Marketplace::new();
    let owner = market.member("Olga").await;

    let created = market.offerings.upsert(owner.id, draft(5, Some(3)), None).await.unwrap();
    assert_eq!(created.owner_id, owner.id);
    assert_eq!(created.quantity, Some(3));

    let updated = market
        .offerings
        .upsert(owner.id, draft(7, None), Some(created.id))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.cost, 7);
    assert!(updated.is_unlimited());
    assert_eq!(market.offerings.get(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_upsert_validation() {
    let market = Marketplace::new();
    let owner = market.member("Olga").await;

    let blank = OfferingDraft {
        description: " ".to_string(),
        cost: 1,
        quantity: None,
    };
    let err = market.offerings.upsert(owner.id, blank, None).await.unwrap_err();
    assert!(matches!(err, DomainError::ValidationFailed { ref field, .. } if field == "description"));

    let err = market.offerings.upsert(owner.id, draft(-1, None), None).await.unwrap_err();
    assert!(matches!(err, DomainError::ValidationFailed { ref field, .. } if field == "cost"));

    let err = market.offerings.upsert(owner.id, draft(1, Some(-2)), None).await.unwrap_err();
    assert!(matches!(err, DomainError::ValidationFailed { ref field, .. } if field == "quantity"));

    // Free and sold-out offerings are allowed
    assert!(market.offerings.upsert(owner.id, draft(0, Some(0)), None).await.is_ok());
}

#[tokio::test]
async fn test_only_owner_edits_or_deletes() {
    let market = Marketplace::new();
    let owner = market.member("Olga").await;
    let other = market.member("Pia").await;
    let offering = market.offerings.upsert(owner.id, draft(5, None), None).await.unwrap();

    let err = market
        .offerings
        .upsert(other.id, draft(1, None), Some(offering.id))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden { .. }));

    let err = market.offerings.delete(other.id, offering.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden { .. }));

    market.offerings.delete(owner.id, offering.id).await.unwrap();
    let err = market.offerings.get(offering.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_unknown_offering() {
    let market = Marketplace::new();
    let owner = market.member("Olga").await;

    let err = market
        .offerings
        .upsert(owner.id, draft(5, None), Some(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    let err = market.offerings.delete(owner.id, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_list_for_owner_reports_viewer_standing() {
    let market = Marketplace::new();
    let owner = market.member("Olga").await;
    let worker = market.member("Wes").await;
    let stranger = market.member("Xan").await;
    market.offerings.upsert(owner.id, draft(5, Some(2)), None).await.unwrap();
    market.offerings.upsert(owner.id, draft(9, None), None).await.unwrap();
    market.completed_job(&owner, &worker, 40).await;

    let own_view = market.offerings.list_for_owner(owner.id, owner.id).await.unwrap();
    assert_eq!(own_view.standing, Standing::Owner);
    assert_eq!(own_view.offerings.len(), 2);

    let worker_view = market.offerings.list_for_owner(owner.id, worker.id).await.unwrap();
    assert_eq!(worker_view.standing, Standing::Spender);

    let stranger_view = market.offerings.list_for_owner(owner.id, stranger.id).await.unwrap();
    assert_eq!(stranger_view.standing, Standing::Standard);
}
