//! HTTP tests for offerings and the trust-gated redemption

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use common::Caller;
use serde_json::json;

/// Completes a job hired by `$hirer` and worked by `$worker` for `$payment`
macro_rules! complete_job {
    ($app:expr, $hirer:expr, $worker:expr, $payment:expr) => {{
        let (_, body) = send!(
            $app,
            $hirer.post(
                "/api/v1/jobs",
                json!({ "title": "Fix tap", "description": "Kitchen tap drips", "location": "7 Quay St", "payment": $payment })
            )
        );
        let job_path = format!("/api/v1/jobs/{}", body["data"]["id"].as_str().unwrap());
        send!($app, $worker.post(&format!("{}/apply", job_path), json!({})));
        send!($app, $hirer.post(&format!("{}/select", job_path), json!({ "worker_id": $worker.id })));
        let (status, _) = send!($app, $hirer.post(&format!("{}/complete", job_path), json!({})));
        assert_eq!(status, StatusCode::OK);
    }};
}

#[actix_web::test]
async fn test_redemption_requires_spender_standing() {
    let app = test_app!();
    let owner = Caller::new("Olive");
    let helper = Caller::new("Hugo");
    for caller in [&owner, &helper] {
        send!(app, caller.post("/api/v1/members/me", json!({})));
    }

    let (status, body) = send!(
        app,
        owner.post("/api/v1/offerings", json!({ "description": "Sourdough loaf", "cost": 3, "quantity": 2 }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let redeem_path = format!("/api/v1/offerings/{}/redeem", body["data"]["id"].as_str().unwrap());

    // No shared history yet
    let (_, body) = send!(app, helper.get(&format!("/api/v1/members/{}/standing", owner.id)));
    assert_eq!(body["data"]["standing"], "standard");
    let (status, _) = send!(app, helper.post(&redeem_path, json!({ "quantity": 1 })));
    assert_eq!(status, StatusCode::FORBIDDEN);

    // A zero-payment job does not establish trust
    complete_job!(app, owner, helper, 0);
    let (status, _) = send!(app, helper.post(&redeem_path, json!({ "quantity": 1 })));
    assert_eq!(status, StatusCode::FORBIDDEN);

    complete_job!(app, owner, helper, 25);
    let (_, body) = send!(app, helper.get(&format!("/api/v1/members/{}/standing", owner.id)));
    assert_eq!(body["data"]["standing"], "spender");
    assert_eq!(body["data"]["can_redeem"], true);

    let (status, body) = send!(app, helper.post(&redeem_path, json!({ "quantity": 2 })));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["total_cost"], 6);
    assert_eq!(body["data"]["spender_id"], helper.id.to_string());

    // Stock is exhausted
    let (status, body) = send!(app, helper.post(&redeem_path, json!({})));
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");

    // The owner is told, and both sides see the receipt
    let (_, body) = send!(app, owner.get("/api/v1/members/me/notifications"));
    let kinds: Vec<&str> = body["data"]["notifications"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|n| n["kind"].as_str())
        .collect();
    assert!(kinds.contains(&"offering_redeemed"));

    let (_, body) = send!(app, helper.get("/api/v1/members/me/redemptions"));
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    let (_, body) = send!(app, owner.get("/api/v1/members/me/redemptions/received"));
    assert_eq!(body["data"][0]["quantity"], 2);
}

#[actix_web::test]
async fn test_owner_cannot_redeem_own_offering() {
    let app = test_app!();
    let owner = Caller::new("Olive");
    send!(app, owner.post("/api/v1/members/me", json!({})));

    let (_, body) = send!(app, owner.post("/api/v1/offerings", json!({ "description": "Eggs", "cost": 1 })));
    assert!(body["data"]["quantity"].is_null());
    let offering_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = send!(app, owner.post(&format!("/api/v1/offerings/{}/redeem", offering_id), json!({})));
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send!(
        app,
        owner.post(&format!("/api/v1/offerings/{}/redeem", offering_id), json!({ "quantity": 0 }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_failed");

    let (_, body) = send!(app, owner.get(&format!("/api/v1/members/{}/offerings", owner.id)));
    assert_eq!(body["data"]["standing"], "owner");
    assert_eq!(body["data"]["offerings"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_only_owner_edits_and_deletes() {
    let app = test_app!();
    let owner = Caller::new("Olive");
    let other = Caller::new("Omar");
    send!(app, owner.post("/api/v1/members/me", json!({})));
    send!(app, other.post("/api/v1/members/me", json!({})));

    let (_, body) = send!(
        app,
        owner.post("/api/v1/offerings", json!({ "description": "Jam jar", "cost": 2, "quantity": 5 }))
    );
    let offering_path = format!("/api/v1/offerings/{}", body["data"]["id"].as_str().unwrap());
    let update = json!({ "description": "Plum jam jar", "cost": 3, "quantity": 4 });

    let (status, _) = send!(app, other.put(&offering_path, update.clone()));
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send!(app, owner.put(&offering_path, update));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["description"], "Plum jam jar");
    assert_eq!(body["data"]["quantity"], 4);

    let (status, _) = send!(app, owner.put(&offering_path, json!({ "description": "", "cost": 3 })));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send!(app, owner.put(&offering_path, json!({ "description": "Jam", "cost": -1 })));
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send!(app, other.delete(&offering_path));
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, body) = send!(app, owner.delete(&offering_path));
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = send!(app, owner.get(&offering_path));
    assert_eq!(status, StatusCode::NOT_FOUND);
}
