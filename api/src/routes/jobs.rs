//! Job lifecycle endpoints

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use tp_shared::{ApiResponse, PaginatedResponse, Pagination};

use crate::dto::{CreateJobRequest, SelectWorkerRequest};
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;
use crate::state::{AppState, Repositories};

pub fn configure<S: Repositories>(cfg: &mut web::ServiceConfig) {
    cfg.route("/jobs", web::post().to(create_job::<S>))
        .route("/jobs", web::get().to(list_open::<S>))
        .route("/jobs/{id}", web::get().to(get_job::<S>))
        .route("/jobs/{id}/apply", web::post().to(apply::<S>))
        .route("/jobs/{id}/apply", web::delete().to(withdraw::<S>))
        .route("/jobs/{id}/select", web::post().to(select_worker::<S>))
        .route("/jobs/{id}/complete", web::post().to(complete::<S>))
        .route("/members/me/applications", web::get().to(my_applications::<S>))
        .route("/members/{id}/jobs", web::get().to(member_jobs::<S>));
}

/// Handler for POST /api/v1/jobs
///
/// # Request Body
///
/// ```json
/// {
///     "title": "Paint fence",
///     "description": "Two coats, white",
///     "location": "12 Harbour Road",
///     "payment": 80
/// }
/// ```
///
/// ## Success (201 Created)
/// The new job in SEARCHING with no applicants.
///
/// ## Errors
/// - 400 Bad Request: blank or oversized text, negative payment
/// - 404 Not Found: the caller has not registered via POST /members/me
pub async fn create_job<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    request: web::Json<CreateJobRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    let job = state.job_service.create(auth.member_id, request.into()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(job)))
}

/// Handler for GET /api/v1/jobs
///
/// Jobs still searching for a worker, newest first, one page at a time.
pub async fn list_open<S: Repositories>(
    state: web::Data<AppState<S>>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let jobs = state.job_service.list_open().await?;
    Ok(HttpResponse::Ok().json(PaginatedResponse::from_vec(jobs, query.into_inner())))
}

pub async fn get_job<S: Repositories>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let job = state.job_service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(job)))
}

/// Handler for POST /api/v1/jobs/{id}/apply
///
/// Idempotent: applying twice leaves a single application.
///
/// ## Errors
/// - 403 Forbidden: the hirer applied to their own job
/// - 409 Conflict (`invalid_transition`): a worker has already been selected
pub async fn apply<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let job = state.job_service.apply(auth.member_id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(job)))
}

/// Handler for DELETE /api/v1/jobs/{id}/apply
pub async fn withdraw<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let job = state.job_service.withdraw(auth.member_id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(job)))
}

/// Handler for POST /api/v1/jobs/{id}/select
///
/// # Request Body
///
/// ```json
/// { "worker_id": "550e8400-e29b-41d4-a716-446655440000" }
/// ```
///
/// ## Errors
/// - 403 Forbidden: caller is not the hirer, or the worker is the hirer or
///   not an applicant
/// - 409 Conflict: the job left SEARCHING, or a concurrent selection won
pub async fn select_worker<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<SelectWorkerRequest>,
) -> Result<HttpResponse, ApiError> {
    let job = state
        .job_service
        .select_worker(auth.member_id, path.into_inner(), request.worker_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(job)))
}

pub async fn complete<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let job = state.job_service.complete(auth.member_id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(job)))
}

/// Handler for GET /api/v1/members/{id}/jobs
///
/// Jobs the member hired for or worked on, newest first.
pub async fn member_jobs<S: Repositories>(
    state: web::Data<AppState<S>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let jobs = state.job_service.list_for_member(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(jobs)))
}

pub async fn my_applications<S: Repositories>(
    state: web::Data<AppState<S>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let jobs = state.job_service.list_applied(auth.member_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(jobs)))
}
