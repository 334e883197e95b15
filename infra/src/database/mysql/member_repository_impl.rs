//! MySQL implementation of the MemberRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use tp_core::domain::entities::member::{normalize_email, Member, MemberRole};
use tp_core::errors::DomainError;
use tp_core::repositories::MemberRepository;

use super::{column, db_error, is_unique_violation, parse_tag, uuid_column};

const SELECT_MEMBER: &str = r#"
    SELECT id, email, name, contact_info, role, notifications_enabled,
           created_at, updated_at
    FROM members
"#;

pub struct MySqlMemberRepository {
    pool: MySqlPool,
}

impl MySqlMemberRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_member(row: &MySqlRow) -> Result<Member, DomainError> {
        let role: String = column(row, "role")?;
        Ok(Member {
            id: uuid_column(row, "id")?,
            email: column(row, "email")?,
            name: column(row, "name")?,
            contact_info: column(row, "contact_info")?,
            role: parse_tag::<MemberRole>(&role)?,
            notifications_enabled: column(row, "notifications_enabled")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl MemberRepository for MySqlMemberRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_MEMBER);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to load member"))?;

        row.as_ref().map(Self::row_to_member).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_MEMBER);
        let row = sqlx::query(&query)
            .bind(normalize_email(email))
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to load member by email"))?;

        row.as_ref().map(Self::row_to_member).transpose()
    }

    async fn create(&self, member: Member) -> Result<Member, DomainError> {
        let query = r#"
            INSERT INTO members (
                id, email, name, contact_info, role, notifications_enabled,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(member.id.to_string())
            .bind(&member.email)
            .bind(&member.name)
            .bind(&member.contact_info)
            .bind(member.role.as_str())
            .bind(member.notifications_enabled)
            .bind(member.created_at)
            .bind(member.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(member),
            Err(e) if is_unique_violation(&e) => {
                Err(DomainError::conflict("member id or email already registered"))
            }
            Err(e) => Err(db_error("Failed to create member")(e)),
        }
    }

    async fn update(&self, member: Member) -> Result<Member, DomainError> {
        let query = r#"
            UPDATE members SET
                name = ?,
                contact_info = ?,
                role = ?,
                notifications_enabled = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&member.name)
            .bind(&member.contact_info)
            .bind(member.role.as_str())
            .bind(member.notifications_enabled)
            .bind(member.updated_at)
            .bind(member.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update member"))?;

        if result.rows_affected() == 0 && self.find_by_id(member.id).await?.is_none() {
            return Err(DomainError::not_found("Member"));
        }
        Ok(member)
    }
}
