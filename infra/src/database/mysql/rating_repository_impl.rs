//! MySQL implementation of the RatingRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use tp_core::domain::entities::rating::{Rating, RatingDirection};
use tp_core::errors::DomainError;
use tp_core::repositories::RatingRepository;

use super::{column, db_error, is_unique_violation, parse_tag, uuid_column};

const SELECT_RATING: &str = r#"
    SELECT id, value, text, direction, from_id, to_id, job_id, created_at, updated_at
    FROM ratings
"#;

pub struct MySqlRatingRepository {
    pool: MySqlPool,
}

impl MySqlRatingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_rating(row: &MySqlRow) -> Result<Rating, DomainError> {
        let direction: String = column(row, "direction")?;
        Ok(Rating {
            id: uuid_column(row, "id")?,
            value: column(row, "value")?,
            text: column(row, "text")?,
            direction: parse_tag::<RatingDirection>(&direction)?,
            from_id: uuid_column(row, "from_id")?,
            to_id: uuid_column(row, "to_id")?,
            job_id: uuid_column(row, "job_id")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    async fn list_where(&self, column_name: &str, id: Uuid) -> Result<Vec<Rating>, DomainError> {
        let query = format!("{} WHERE {} = ? ORDER BY created_at DESC", SELECT_RATING, column_name);
        let rows = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list ratings"))?;

        rows.iter().map(Self::row_to_rating).collect()
    }
}

#[async_trait]
impl RatingRepository for MySqlRatingRepository {
    async fn create(&self, rating: Rating) -> Result<Rating, DomainError> {
        let query = r#"
            INSERT INTO ratings (
                id, value, text, direction, from_id, to_id, job_id,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(rating.id.to_string())
            .bind(rating.value)
            .bind(&rating.text)
            .bind(rating.direction.as_str())
            .bind(rating.from_id.to_string())
            .bind(rating.to_id.to_string())
            .bind(rating.job_id.to_string())
            .bind(rating.created_at)
            .bind(rating.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(rating),
            Err(e) if is_unique_violation(&e) => Err(DomainError::conflict(
                "a rating for this job and direction already exists",
            )),
            Err(e) => Err(db_error("Failed to create rating")(e)),
        }
    }

    async fn exists(&self, job_id: Uuid, from_id: Uuid, to_id: Uuid) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT 1 FROM ratings WHERE job_id = ? AND from_id = ? AND to_id = ? LIMIT 1")
            .bind(job_id.to_string())
            .bind(from_id.to_string())
            .bind(to_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to check rating"))?;

        Ok(row.is_some())
    }

    async fn list_for_subject(&self, member_id: Uuid) -> Result<Vec<Rating>, DomainError> {
        self.list_where("to_id", member_id).await
    }

    async fn list_by_author(&self, member_id: Uuid) -> Result<Vec<Rating>, DomainError> {
        self.list_where("from_id", member_id).await
    }

    async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<Rating>, DomainError> {
        self.list_where("job_id", job_id).await
    }
}
