/*
 * Responsibility
 * - memories table access behind the MemoryStore trait
 * - PgMemoryStore: SQLx implementation against PgPool
 * - owner ("userId") is set at insert and never part of an update
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MemoryRecord {
    pub id: Uuid,

    #[sqlx(rename = "userId")]
    pub user_id: Uuid,

    pub content: String,

    #[sqlx(rename = "coverUrl")]
    pub cover_url: String,

    #[sqlx(rename = "typeMedia")]
    pub type_media: String,

    #[sqlx(rename = "isPublic")]
    pub is_public: bool,

    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Fields the caller supplies at creation. `id` and `createdAt` are
/// generated here, never taken from input.
#[derive(Debug, Clone)]
pub struct NewMemory {
    pub user_id: Uuid,
    pub content: String,
    pub cover_url: String,
    pub type_media: String,
    pub is_public: bool,
}

/// Full replacement of the mutable fields. The owner is intentionally
/// absent: an update cannot transfer ownership.
#[derive(Debug, Clone)]
pub struct MemoryChanges {
    pub content: String,
    pub cover_url: String,
    pub type_media: String,
    pub is_public: bool,
}

#[async_trait]
pub trait MemoryStore: Send + Sync {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<MemoryRecord>, RepoError>;
    async fn get(&self, id: Uuid) -> Result<Option<MemoryRecord>, RepoError>;
    async fn create(&self, new: NewMemory) -> Result<MemoryRecord, RepoError>;
    async fn update(
        &self,
        id: Uuid,
        changes: MemoryChanges,
    ) -> Result<Option<MemoryRecord>, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<bool, RepoError>;
}

#[derive(Debug, Clone)]
pub struct PgMemoryStore {
    pool: PgPool,
}

impl PgMemoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemoryStore for PgMemoryStore {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<MemoryRecord>, RepoError> {
        let rows = sqlx::query_as::<_, MemoryRecord>(
            r#"
            SELECT id, "userId", content, "coverUrl", "typeMedia", "isPublic", "createdAt"
            FROM memories
            WHERE "userId" = $1
            ORDER BY "createdAt" ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<Option<MemoryRecord>, RepoError> {
        let row = sqlx::query_as::<_, MemoryRecord>(
            r#"
            SELECT id, "userId", content, "coverUrl", "typeMedia", "isPublic", "createdAt"
            FROM memories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create(&self, new: NewMemory) -> Result<MemoryRecord, RepoError> {
        let row = sqlx::query_as::<_, MemoryRecord>(
            r#"
            INSERT INTO memories (id, "userId", content, "coverUrl", "typeMedia", "isPublic", "createdAt")
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, "userId", content, "coverUrl", "typeMedia", "isPublic", "createdAt"
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.user_id)
        .bind(&new.content)
        .bind(&new.cover_url)
        .bind(&new.type_media)
        .bind(new.is_public)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: MemoryChanges,
    ) -> Result<Option<MemoryRecord>, RepoError> {
        // "userId" is deliberately not in the SET list.
        let row = sqlx::query_as::<_, MemoryRecord>(
            r#"
            UPDATE memories
            SET
                content = $2,
                "coverUrl" = $3,
                "typeMedia" = $4,
                "isPublic" = $5
            WHERE id = $1
            RETURNING id, "userId", content, "coverUrl", "typeMedia", "isPublic", "createdAt"
            "#,
        )
        .bind(id)
        .bind(&changes.content)
        .bind(&changes.cover_url)
        .bind(&changes.type_media)
        .bind(changes.is_public)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM memories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
