//! In-memory implementation of RatingRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::rating::Rating;
use crate::errors::DomainError;

use super::trait_::RatingRepository;

/// In-memory rating repository; insertion order doubles as recency order
#[derive(Clone, Default)]
pub struct InMemoryRatingRepository {
    ratings: Arc<RwLock<Vec<Rating>>>,
}

impl InMemoryRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn newest_first<F>(&self, predicate: F) -> Vec<Rating>
    where
        F: Fn(&Rating) -> bool,
    {
        let ratings = self.ratings.read().await;
        ratings.iter().rev().filter(|r| predicate(r)).cloned().collect()
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn create(&self, rating: Rating) -> Result<Rating, DomainError> {
        let mut ratings = self.ratings.write().await;

        if ratings.iter().any(|r| r.key() == rating.key()) {
            return Err(DomainError::conflict(
                "a rating for this job and direction already exists",
            ));
        }

        ratings.push(rating.clone());
        Ok(rating)
    }

    async fn exists(&self, job_id: Uuid, from_id: Uuid, to_id: Uuid) -> Result<bool, DomainError> {
        let ratings = self.ratings.read().await;
        Ok(ratings.iter().any(|r| r.key() == (job_id, from_id, to_id)))
    }

    async fn list_for_subject(&self, member_id: Uuid) -> Result<Vec<Rating>, DomainError> {
        Ok(self.newest_first(|r| r.to_id == member_id).await)
    }

    async fn list_by_author(&self, member_id: Uuid) -> Result<Vec<Rating>, DomainError> {
        Ok(self.newest_first(|r| r.from_id == member_id).await)
    }

    async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<Rating>, DomainError> {
        Ok(self.newest_first(|r| r.job_id == job_id).await)
    }
}
