//! Member directory endpoints
//!
//! `/members/me` routes act on the authenticated caller and are registered
//! before the `/members/{id}` routes so the literal segment wins.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use tp_shared::ApiResponse;

use crate::dto::{
    MemberResponse, NotificationSettingsRequest, NotificationsQuery, NotificationsResponse,
    OnboardingRequest, PublicMemberResponse, StandingResponse,
};
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;
use crate::state::{AppState, Repositories};

pub fn configure<S: Repositories>(cfg: &mut web::ServiceConfig) {
    cfg.route("/members/me", web::post().to(ensure_me::<S>))
        .route("/members/me", web::get().to(me::<S>))
        .route("/members/me/onboarding", web::put().to(complete_onboarding::<S>))
        .route("/members/me/notifications", web::put().to(set_notifications::<S>))
        .route("/members/me/notifications", web::get().to(notifications::<S>))
        .route("/members/{id}", web::get().to(public_profile::<S>))
        .route("/members/{id}/standing", web::get().to(standing::<S>));
}

async fn profile<S: Repositories>(state: &AppState<S>, member_id: Uuid) -> Result<MemberResponse, ApiError> {
    let member = state.member_service.get(member_id).await?;
    let has_unread_notifications = state.member_service.has_unread_notifications(member_id).await?;
    Ok(MemberResponse {
        member,
        has_unread_notifications,
    })
}

/// Handler for POST /api/v1/members/me
///
/// Creates the member record for the token's identity on first call and
/// returns the existing record afterwards.
///
/// ## Errors
/// - 400 Bad Request: token carries a malformed email or a blank name
pub async fn ensure_me<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    state.member_service.ensure_member(&auth.identity()).await?;
    let response = profile(&state, auth.member_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// Handler for GET /api/v1/members/me
pub async fn me<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let response = profile(&state, auth.member_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// Handler for PUT /api/v1/members/me/onboarding
///
/// # Request Body
///
/// ```json
/// { "contact_info": "0412 345 678, evenings" }
/// ```
pub async fn complete_onboarding<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    request: web::Json<OnboardingRequest>,
) -> Result<HttpResponse, ApiError> {
    state
        .member_service
        .complete_onboarding(auth.member_id, &request.contact_info)
        .await?;
    let response = profile(&state, auth.member_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

pub async fn set_notifications<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    request: web::Json<NotificationSettingsRequest>,
) -> Result<HttpResponse, ApiError> {
    state
        .member_service
        .set_notifications(auth.member_id, request.enabled)
        .await?;
    let response = profile(&state, auth.member_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// Handler for GET /api/v1/members/me/notifications
///
/// Returns the queue newest first and marks every entry read.
pub async fn notifications<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    query: web::Query<NotificationsQuery>,
) -> Result<HttpResponse, ApiError> {
    let notifications = state
        .member_service
        .notifications(auth.member_id, query.unread_only)
        .await?;
    let marked_read = state.member_service.mark_notifications_read(auth.member_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(NotificationsResponse {
        notifications,
        marked_read,
    })))
}

pub async fn public_profile<S: Repositories>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let member = state.member_service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(PublicMemberResponse::from(member))))
}

/// Handler for GET /api/v1/members/{id}/standing
///
/// The caller's standing towards the member, as the trust gate decides it.
pub async fn standing<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let subject_id = path.into_inner();
    state.member_service.get(subject_id).await?;
    let standing = state.trust_service.standing(auth.member_id, subject_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(StandingResponse {
        observer_id: auth.member_id,
        subject_id,
        standing,
        can_redeem: standing.can_redeem(),
    })))
}
