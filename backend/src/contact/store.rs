use validator::Validate;

use super::model::{ContactRequest, ContactStatus, ContactSummary, NewContactRequest};
use crate::db::{self, Database, SCHEMA_LOCK_KEY};
use crate::error::StoreError;

const COLUMNS: &str = "id, telegram_id, username, first_name, last_name, created_at, status";

/// Append-only log of customer contact requests
#[derive(Clone)]
pub struct ContactStore {
    db: Database,
}

impl ContactStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create the status enum type and the request table if missing
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let mut tx = self.db.begin().await?;
        db::lock_xact(&mut tx, SCHEMA_LOCK_KEY).await?;

        sqlx::query(
            r#"
            DO $$
            BEGIN
                CREATE TYPE contact_status AS ENUM ('new', 'processed');
            EXCEPTION
                WHEN duplicate_object THEN NULL;
            END
            $$
            "#,
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contact_requests (
                id SERIAL PRIMARY KEY,
                telegram_id BIGINT NOT NULL,
                username TEXT NOT NULL DEFAULT '',
                first_name TEXT NOT NULL DEFAULT '',
                last_name TEXT NOT NULL DEFAULT '',
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                status contact_status NOT NULL DEFAULT 'new'
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        // Tables created with bounded name columns are widened in place.
        sqlx::query(
            r#"
            ALTER TABLE contact_requests
                ALTER COLUMN username TYPE TEXT,
                ALTER COLUMN first_name TYPE TEXT,
                ALTER COLUMN last_name TYPE TEXT
            "#,
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn append(&self, request: &NewContactRequest) -> Result<ContactRequest, StoreError> {
        request.validate()?;

        let sql = format!(
            r#"
            INSERT INTO contact_requests (telegram_id, username, first_name, last_name, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            COLUMNS
        );

        let mut tx = self.db.begin().await?;
        let created = sqlx::query_as::<_, ContactRequest>(&sql)
            .bind(request.telegram_id)
            .bind(&request.username)
            .bind(&request.first_name)
            .bind(&request.last_name)
            .bind(ContactStatus::New)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(
            id = created.id,
            telegram_id = created.telegram_id,
            "Contact request received"
        );

        Ok(created)
    }

    /// All requests, newest first
    pub async fn list_all(&self) -> Result<Vec<ContactRequest>, StoreError> {
        let sql = format!(
            "SELECT {} FROM contact_requests ORDER BY created_at DESC, id DESC",
            COLUMNS
        );
        let requests = sqlx::query_as::<_, ContactRequest>(&sql)
            .fetch_all(self.db.pool())
            .await?;
        Ok(requests)
    }

    /// Both counts come from a single statement, hence a single snapshot.
    pub async fn count_unprocessed(&self) -> Result<ContactSummary, StoreError> {
        let summary = sqlx::query_as::<_, ContactSummary>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE status = 'new') AS unprocessed,
                COUNT(*) AS total
            FROM contact_requests
            "#,
        )
        .fetch_one(self.db.pool())
        .await?;
        Ok(summary)
    }

    /// Move a request from `new` to `processed`. Processed requests are left as is.
    pub async fn mark_processed(&self, id: i32) -> Result<ContactRequest, StoreError> {
        let mut tx = self.db.begin().await?;

        let select = format!(
            "SELECT {} FROM contact_requests WHERE id = $1 FOR UPDATE",
            COLUMNS
        );
        let current = sqlx::query_as::<_, ContactRequest>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(StoreError::NotFound {
                resource: "contact request",
                id: i64::from(id),
            })?;

        if current.status == ContactStatus::Processed {
            return Ok(current);
        }

        let update = format!(
            "UPDATE contact_requests SET status = $1 WHERE id = $2 RETURNING {}",
            COLUMNS
        );
        let updated = sqlx::query_as::<_, ContactRequest>(&update)
            .bind(ContactStatus::Processed)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(id, "Contact request marked as processed");
        Ok(updated)
    }
}
