//! MySQL implementation of the OfferingRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use tp_core::domain::entities::offering::Offering;
use tp_core::domain::entities::redemption::Redemption;
use tp_core::errors::DomainError;
use tp_core::repositories::OfferingRepository;

use super::{column, db_error, uuid_column};

const SELECT_OFFERING: &str = r#"
    SELECT id, description, cost, quantity, owner_id, created_at, updated_at
    FROM offerings
"#;

const SELECT_REDEMPTION: &str = r#"
    SELECT id, offering_id, owner_id, spender_id, quantity, unit_cost, total_cost, created_at
    FROM redemptions
"#;

pub struct MySqlOfferingRepository {
    pool: MySqlPool,
}

impl MySqlOfferingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_offering(row: &MySqlRow) -> Result<Offering, DomainError> {
        Ok(Offering {
            id: uuid_column(row, "id")?,
            description: column(row, "description")?,
            cost: column(row, "cost")?,
            quantity: column(row, "quantity")?,
            owner_id: uuid_column(row, "owner_id")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    fn row_to_redemption(row: &MySqlRow) -> Result<Redemption, DomainError> {
        Ok(Redemption {
            id: uuid_column(row, "id")?,
            offering_id: uuid_column(row, "offering_id")?,
            owner_id: uuid_column(row, "owner_id")?,
            spender_id: uuid_column(row, "spender_id")?,
            quantity: column(row, "quantity")?,
            unit_cost: column(row, "unit_cost")?,
            total_cost: column(row, "total_cost")?,
            created_at: column(row, "created_at")?,
        })
    }

    async fn list_redemptions_where(&self, column_name: &str, id: Uuid) -> Result<Vec<Redemption>, DomainError> {
        let query = format!("{} WHERE {} = ? ORDER BY created_at DESC", SELECT_REDEMPTION, column_name);
        let rows = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list redemptions"))?;

        rows.iter().map(Self::row_to_redemption).collect()
    }
}

#[async_trait]
impl OfferingRepository for MySqlOfferingRepository {
    async fn create(&self, offering: Offering) -> Result<Offering, DomainError> {
        let query = r#"
            INSERT INTO offerings (
                id, description, cost, quantity, owner_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(offering.id.to_string())
            .bind(&offering.description)
            .bind(offering.cost)
            .bind(offering.quantity)
            .bind(offering.owner_id.to_string())
            .bind(offering.created_at)
            .bind(offering.updated_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create offering"))?;

        Ok(offering)
    }

    async fn update(&self, offering: Offering) -> Result<Offering, DomainError> {
        let query = r#"
            UPDATE offerings SET
                description = ?,
                cost = ?,
                quantity = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&offering.description)
            .bind(offering.cost)
            .bind(offering.quantity)
            .bind(offering.updated_at)
            .bind(offering.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update offering"))?;

        if result.rows_affected() == 0 && self.find_by_id(offering.id).await?.is_none() {
            return Err(DomainError::not_found("Offering"));
        }
        Ok(offering)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM offerings WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete offering"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Offering>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_OFFERING);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to load offering"))?;

        row.as_ref().map(Self::row_to_offering).transpose()
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Offering>, DomainError> {
        let query = format!("{} WHERE owner_id = ? ORDER BY created_at DESC", SELECT_OFFERING);
        let rows = sqlx::query(&query)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list offerings"))?;

        rows.iter().map(Self::row_to_offering).collect()
    }

    async fn redeem(
        &self,
        offering_id: Uuid,
        spender_id: Uuid,
        quantity: i64,
    ) -> Result<(Offering, Redemption), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("Failed to begin transaction"))?;

        // NULL quantity is unlimited stock and stays NULL
        let decremented = sqlx::query(
            r#"
            UPDATE offerings SET
                quantity = quantity - ?,
                updated_at = ?
            WHERE id = ? AND (quantity IS NULL OR quantity >= ?)
            "#,
        )
        .bind(quantity)
        .bind(Utc::now())
        .bind(offering_id.to_string())
        .bind(quantity)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to decrement offering stock"))?
        .rows_affected();

        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_OFFERING);
        let offering = sqlx::query(&query)
            .bind(offering_id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_error("Failed to load offering"))?
            .as_ref()
            .map(Self::row_to_offering)
            .transpose()?
            .ok_or_else(|| DomainError::not_found("Offering"))?;

        if decremented == 0 {
            return Err(DomainError::conflict("insufficient stock"));
        }

        let redemption = Redemption::new(&offering, spender_id, quantity);
        sqlx::query(
            r#"
            INSERT INTO redemptions (
                id, offering_id, owner_id, spender_id, quantity, unit_cost, total_cost, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(redemption.id.to_string())
        .bind(redemption.offering_id.to_string())
        .bind(redemption.owner_id.to_string())
        .bind(redemption.spender_id.to_string())
        .bind(redemption.quantity)
        .bind(redemption.unit_cost)
        .bind(redemption.total_cost)
        .bind(redemption.created_at)
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to record redemption"))?;

        tx.commit().await.map_err(db_error("Failed to commit redemption"))?;
        Ok((offering, redemption))
    }

    async fn list_redemptions_by_spender(&self, spender_id: Uuid) -> Result<Vec<Redemption>, DomainError> {
        self.list_redemptions_where("spender_id", spender_id).await
    }

    async fn list_redemptions_by_owner(&self, owner_id: Uuid) -> Result<Vec<Redemption>, DomainError> {
        self.list_redemptions_where("owner_id", owner_id).await
    }
}
