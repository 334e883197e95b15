//! In-memory implementation of MemberRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::member::{normalize_email, Member};
use crate::errors::DomainError;

use super::trait_::MemberRepository;

/// In-memory member repository
#[derive(Clone, Default)]
pub struct InMemoryMemberRepository {
    members: Arc<RwLock<HashMap<Uuid, Member>>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, DomainError> {
        let members = self.members.read().await;
        Ok(members.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError> {
        let email = normalize_email(email);
        let members = self.members.read().await;
        Ok(members.values().find(|m| m.email == email).cloned())
    }

    async fn create(&self, member: Member) -> Result<Member, DomainError> {
        let mut members = self.members.write().await;

        if members.contains_key(&member.id) {
            return Err(DomainError::conflict("member already registered"));
        }
        if members.values().any(|m| m.email == member.email) {
            return Err(DomainError::conflict("email already registered"));
        }

        members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn update(&self, member: Member) -> Result<Member, DomainError> {
        let mut members = self.members.write().await;

        match members.get_mut(&member.id) {
            Some(existing) => {
                *existing = member.clone();
                Ok(member)
            }
            None => Err(DomainError::not_found("Member")),
        }
    }
}
