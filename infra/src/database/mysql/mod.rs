//! MySQL repository implementations
//!
//! Identifiers are stored as UUID strings. The atomic guarantees the core
//! relies on map onto the store as follows:
//! - job transitions: row lock on the job, status and applicant checks, then `UPDATE`
//! - applicant inserts: row lock on the job, then `INSERT IGNORE`
//! - redemptions: conditional decrement and receipt insert in one transaction
//! - ratings: unique key on `(job_id, from_id, to_id)`

mod job_repository_impl;
mod member_repository_impl;
mod notification_repository_impl;
mod offering_repository_impl;
mod rating_repository_impl;

pub use job_repository_impl::MySqlJobRepository;
pub use member_repository_impl::MySqlMemberRepository;
pub use notification_repository_impl::MySqlNotificationRepository;
pub use offering_repository_impl::MySqlOfferingRepository;
pub use rating_repository_impl::MySqlRatingRepository;

use sqlx::mysql::{MySql, MySqlRow};
use sqlx::Row;
use uuid::Uuid;

use tp_core::errors::DomainError;

/// Map a driver error to `DomainError::Internal`, logging it
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        DomainError::internal(format!("{}: {}", context, e))
    }
}

/// Whether the error is a duplicate-key violation
pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

/// Read a column, reporting decode failures as internal errors
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    row.try_get(name)
        .map_err(|e| DomainError::internal(format!("Failed to get {}: {}", name, e)))
}

pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    parse_uuid(&raw)
}

pub(crate) fn optional_uuid_column(row: &MySqlRow, name: &str) -> Result<Option<Uuid>, DomainError> {
    let raw: Option<String> = column(row, name)?;
    raw.as_deref().map(parse_uuid).transpose()
}

pub(crate) fn parse_uuid(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))
}

/// Parse a stored enum tag
pub(crate) fn parse_tag<T>(raw: &str) -> Result<T, DomainError>
where
    T: std::str::FromStr<Err = String>,
{
    raw.parse::<T>().map_err(DomainError::internal)
}
