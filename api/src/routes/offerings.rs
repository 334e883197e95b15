//! Offering exchange endpoints

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use tp_shared::ApiResponse;

use crate::dto::{OfferingRequest, RedeemRequest};
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;
use crate::state::{AppState, Repositories};

pub fn configure<S: Repositories>(cfg: &mut web::ServiceConfig) {
    cfg.route("/offerings", web::post().to(create_offering::<S>))
        .route("/offerings/{id}", web::get().to(get_offering::<S>))
        .route("/offerings/{id}", web::put().to(update_offering::<S>))
        .route("/offerings/{id}", web::delete().to(delete_offering::<S>))
        .route("/offerings/{id}/redeem", web::post().to(redeem::<S>))
        .route("/members/me/redemptions", web::get().to(my_redemptions::<S>))
        .route("/members/me/redemptions/received", web::get().to(received_redemptions::<S>))
        .route("/members/{id}/offerings", web::get().to(member_offerings::<S>));
}

/// Handler for POST /api/v1/offerings
///
/// # Request Body
///
/// ```json
/// { "description": "Sourdough loaf", "cost": 3, "quantity": 10 }
/// ```
///
/// Omit `quantity` for unlimited stock.
pub async fn create_offering<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    request: web::Json<OfferingRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let offering = state
        .offering_service
        .upsert(auth.member_id, request.into(), None)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(offering)))
}

pub async fn get_offering<S: Repositories>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let offering = state.offering_service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(offering)))
}

/// Handler for PUT /api/v1/offerings/{id}
///
/// Replaces description, cost and quantity. Only the owner may edit.
pub async fn update_offering<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<OfferingRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let offering = state
        .offering_service
        .upsert(auth.member_id, request.into(), Some(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(offering)))
}

pub async fn delete_offering<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    state
        .offering_service
        .delete(auth.member_id, path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Handler for POST /api/v1/offerings/{id}/redeem
///
/// # Request Body
///
/// ```json
/// { "quantity": 2 }
/// ```
///
/// ## Success (201 Created)
/// The redemption receipt.
///
/// ## Errors
/// - 403 Forbidden: the caller owns the offering, or has never completed a
///   paid job for its owner
/// - 409 Conflict: not enough stock left
pub async fn redeem<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<RedeemRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let redemption = state
        .offering_service
        .redeem(auth.member_id, path.into_inner(), request.quantity)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(redemption)))
}

/// Handler for GET /api/v1/members/{id}/offerings
///
/// The owner's offerings together with the caller's standing towards the
/// owner.
pub async fn member_offerings<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let listing = state
        .offering_service
        .list_for_owner(path.into_inner(), auth.member_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(listing)))
}

pub async fn my_redemptions<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let redemptions = state.offering_service.redemptions_by(auth.member_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(redemptions)))
}

pub async fn received_redemptions<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let redemptions = state.offering_service.redemptions_of(auth.member_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(redemptions)))
}
