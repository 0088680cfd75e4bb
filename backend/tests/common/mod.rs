//! Shared helpers for database-backed tests
//!
//! Run with: TEST_DATABASE_URL=postgres://... cargo test -- --ignored
//!
//! The test database must use `ENCODING 'UTF8'`. The samples are Cyrillic, and
//! on a `SQL_ASCII` cluster `VARCHAR(n)` limits count bytes, so they overflow:
//!
//! ```sql
//! CREATE DATABASE aurumbank_test ENCODING 'UTF8' TEMPLATE template0;
//! ```

#![allow(dead_code)]

use sqlx::postgres::PgPoolOptions;
use sqlx::Executor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use aurumbank_backend::catalog::LoanInput;
use aurumbank_backend::db::Database;

static SCHEMA_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn database_url() -> String {
    std::env::var("TEST_DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/aurumbank_test".to_string())
}

/// Pool whose connections all use a fresh, private schema
pub async fn isolated_db() -> Database {
    let url = database_url();

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let schema = format!(
        "test_{}_{}_{}",
        std::process::id(),
        nanos,
        SCHEMA_COUNTER.fetch_add(1, Ordering::SeqCst)
    );

    let admin = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");
    admin
        .execute(format!("CREATE SCHEMA {}", schema).as_str())
        .await
        .expect("Failed to create test schema");
    admin.close().await;

    let search_path = format!("SET search_path TO {}", schema);
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .after_connect(move |conn, _meta| {
            let sql = search_path.clone();
            Box::pin(async move {
                conn.execute(sql.as_str()).await?;
                Ok(())
            })
        })
        .connect(&url)
        .await
        .expect("Failed to connect to test database");

    Database::new(pool)
}

pub fn sample_loan(name: &str) -> LoanInput {
    LoanInput {
        name: name.to_string(),
        rate: "от 8% до 12,5% годовых (зависит от суммы)".to_string(),
        term: "от 6 месяцев до 5 лет".to_string(),
        amount: "до 30 000 BYN".to_string(),
        advantage: vec!["Без поручителей".to_string(), "Онлайн-оформление".to_string()],
        details: "Тестовое предложение.\nВторая строка описания.".to_string(),
    }
}
