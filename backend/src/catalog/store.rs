use sqlx::PgConnection;
use validator::Validate;

use super::model::{LoanCategory, LoanInput, LoanRecord, SeedOutcome};
use crate::db::{self, Database, SCHEMA_LOCK_KEY};
use crate::error::StoreError;

const COLUMNS: &str = "id, name, rate, term, amount, advantage, details";

/// Durable storage for one loan category
#[derive(Clone)]
pub struct CatalogStore {
    db: Database,
    category: LoanCategory,
}

impl CatalogStore {
    pub fn new(db: Database, category: LoanCategory) -> Self {
        Self { db, category }
    }

    /// Create the category table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let mut tx = self.db.begin().await?;
        db::lock_xact(&mut tx, SCHEMA_LOCK_KEY).await?;

        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id SERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL CHECK (btrim(name) <> ''),
                rate VARCHAR(50) NOT NULL,
                term VARCHAR(50) NOT NULL,
                amount VARCHAR(50) NOT NULL,
                advantage TEXT[] NOT NULL,
                details TEXT NOT NULL
            )
            "#,
            self.category.table()
        );
        sqlx::query(&ddl).execute(&mut *tx).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Insert `records` only when the table is empty.
    ///
    /// The emptiness check and the inserts share one transaction holding a
    /// per-category advisory lock, so concurrent seeders insert at most once.
    pub async fn seed_if_empty(&self, records: &[LoanInput]) -> Result<SeedOutcome, StoreError> {
        for record in records {
            record.validate()?;
        }

        let mut tx = self.db.begin().await?;
        db::lock_xact(&mut tx, self.category.seed_lock_key()).await?;

        let existing = count(&mut tx, self.category).await?;
        if existing > 0 {
            return Ok(SeedOutcome::AlreadyPopulated(existing));
        }

        for record in records {
            insert(&mut tx, self.category, record).await?;
        }

        tx.commit().await?;
        Ok(SeedOutcome::Inserted(records.len()))
    }

    /// All records, ascending by id
    pub async fn list_all(&self) -> Result<Vec<LoanRecord>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id ASC",
            COLUMNS,
            self.category.table()
        );
        let records = sqlx::query_as::<_, LoanRecord>(&sql)
            .fetch_all(self.db.pool())
            .await?;
        Ok(records)
    }

    pub async fn get(&self, id: i32) -> Result<Option<LoanRecord>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            COLUMNS,
            self.category.table()
        );
        let record = sqlx::query_as::<_, LoanRecord>(&sql)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(record)
    }

    pub async fn create(&self, input: &LoanInput) -> Result<LoanRecord, StoreError> {
        input.validate()?;

        let mut tx = self.db.begin().await?;
        let record = insert(&mut tx, self.category, input).await?;
        tx.commit().await?;

        Ok(record)
    }

    /// Overwrite every descriptive field of record `id`
    pub async fn update(&self, id: i32, input: &LoanInput) -> Result<LoanRecord, StoreError> {
        input.validate()?;

        let sql = format!(
            r#"
            UPDATE {}
            SET name = $1, rate = $2, term = $3, amount = $4, advantage = $5, details = $6
            WHERE id = $7
            RETURNING {}
            "#,
            self.category.table(),
            COLUMNS
        );

        let mut tx = self.db.begin().await?;
        let record = sqlx::query_as::<_, LoanRecord>(&sql)
            .bind(&input.name)
            .bind(&input.rate)
            .bind(&input.term)
            .bind(&input.amount)
            .bind(&input.advantage)
            .bind(&input.details)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| self.not_found(id))?;
        tx.commit().await?;

        Ok(record)
    }

    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.category.table());

        let mut tx = self.db.begin().await?;
        let result = sqlx::query(&sql).bind(id).execute(&mut *tx).await?;
        if result.rows_affected() == 0 {
            return Err(self.not_found(id));
        }
        tx.commit().await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.db.acquire().await?;
        Ok(count(&mut conn, self.category).await?)
    }

    fn not_found(&self, id: i32) -> StoreError {
        StoreError::NotFound {
            resource: self.category.resource(),
            id: i64::from(id),
        }
    }
}

async fn count(conn: &mut PgConnection, category: LoanCategory) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}", category.table());
    sqlx::query_scalar::<_, i64>(&sql).fetch_one(conn).await
}

async fn insert(
    conn: &mut PgConnection,
    category: LoanCategory,
    input: &LoanInput,
) -> Result<LoanRecord, sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO {} (name, rate, term, amount, advantage, details)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {}
        "#,
        category.table(),
        COLUMNS
    );

    sqlx::query_as::<_, LoanRecord>(&sql)
        .bind(&input.name)
        .bind(&input.rate)
        .bind(&input.term)
        .bind(&input.amount)
        .bind(&input.advantage)
        .bind(&input.details)
        .fetch_one(conn)
        .await
}
