//! Member repository trait defining the interface for member persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::member::Member;
use crate::errors::DomainError;

/// Repository trait for Member entity persistence operations
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find a member by id
    ///
    /// # Returns
    /// * `Ok(Some(Member))` - Member found
    /// * `Ok(None)` - No member with given id
    /// * `Err(DomainError)` - Store failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, DomainError>;

    /// Find a member by normalised email address
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError>;

    /// Insert a new member
    ///
    /// # Returns
    /// * `Ok(Member)` - The stored member
    /// * `Err(DomainError::Conflict)` - Id or email already registered
    async fn create(&self, member: Member) -> Result<Member, DomainError>;

    /// Replace an existing member's mutable fields
    ///
    /// # Returns
    /// * `Ok(Member)` - The updated member
    /// * `Err(DomainError::NotFound)` - Member does not exist
    async fn update(&self, member: Member) -> Result<Member, DomainError>;
}
