//! Reputation endpoints

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tp_shared::ApiResponse;

use crate::dto::SubmitRatingRequest;
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;
use crate::state::{AppState, Repositories};

pub fn configure<S: Repositories>(cfg: &mut web::ServiceConfig) {
    cfg.route("/jobs/{id}/ratings", web::post().to(submit::<S>))
        .route("/jobs/{id}/ratings", web::get().to(job_ratings::<S>))
        .route("/members/me/ratings/pending", web::get().to(pending::<S>))
        .route("/members/{id}/ratings", web::get().to(received::<S>))
        .route("/members/{id}/ratings/authored", web::get().to(authored::<S>))
        .route("/members/{id}/ratings/summary", web::get().to(summary::<S>));
}

/// Handler for POST /api/v1/jobs/{id}/ratings
///
/// # Request Body
///
/// ```json
/// { "to_id": "550e8400-e29b-41d4-a716-446655440000", "value": 5, "text": "Great work" }
/// ```
///
/// ## Errors
/// - 403 Forbidden: caller and subject are not the job's hirer and worker
/// - 409 Conflict (`invalid_transition`): the job is not COMPLETED
/// - 400 Bad Request: value outside 1..=5 or oversized text
/// - 409 Conflict (`conflict`): the caller already rated the subject for this job
pub async fn submit<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<SubmitRatingRequest>,
) -> Result<HttpResponse, ApiError> {
    let rating = state
        .rating_service
        .submit(auth.member_id, path.into_inner(), request.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(rating)))
}

pub async fn job_ratings<S: Repositories>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let ratings = state.rating_service.list_for_job(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(ratings)))
}

/// Handler for GET /api/v1/members/{id}/ratings
///
/// Ratings the member received, newest first.
pub async fn received<S: Repositories>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let ratings = state.rating_service.list_for_member(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(ratings)))
}

pub async fn authored<S: Repositories>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let ratings = state.rating_service.list_by_member(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(ratings)))
}

pub async fn summary<S: Repositories>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let summary = state.rating_service.summary(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(summary)))
}

/// Handler for GET /api/v1/members/me/ratings/pending
///
/// Completed jobs where the caller still owes their counterpart a rating.
pub async fn pending<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let jobs = state.rating_service.pending_for(auth.member_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(jobs)))
}
