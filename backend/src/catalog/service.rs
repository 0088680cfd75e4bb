//! Catalog service layer - one implementation shared by every loan category

use super::model::{LoanCategory, LoanInput, LoanRecord, SeedOutcome};
use super::seed::demo_records;
use super::store::CatalogStore;
use crate::db::Database;
use crate::error::StoreError;

/// Facade over the per-category stores
#[derive(Clone)]
pub struct CatalogService {
    db: Database,
}

impl CatalogService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn store(&self, category: LoanCategory) -> CatalogStore {
        CatalogStore::new(self.db.clone(), category)
    }

    /// Ensure every category table exists and optionally seed the empty ones
    pub async fn initialize(&self, seed_demo_data: bool) -> Result<(), StoreError> {
        for category in LoanCategory::ALL {
            self.store(category).ensure_schema().await?;

            if seed_demo_data {
                match self.seed(category).await? {
                    SeedOutcome::Inserted(n) => {
                        tracing::info!(category = %category, inserted = n, "Seeded demo loans")
                    }
                    SeedOutcome::AlreadyPopulated(existing) => {
                        tracing::debug!(category = %category, existing, "Catalog already populated")
                    }
                }
            }
        }

        tracing::info!("Loan catalogs initialized");
        Ok(())
    }

    pub async fn ensure_schema(&self, category: LoanCategory) -> Result<(), StoreError> {
        self.store(category).ensure_schema().await
    }

    /// Insert the category's demo offers if the catalog is empty
    pub async fn seed(&self, category: LoanCategory) -> Result<SeedOutcome, StoreError> {
        let store = self.store(category);
        store.ensure_schema().await?;
        store.seed_if_empty(&demo_records(category)).await
    }

    pub async fn list(&self, category: LoanCategory) -> Result<Vec<LoanRecord>, StoreError> {
        self.store(category).list_all().await
    }

    pub async fn get(&self, category: LoanCategory, id: i32) -> Result<LoanRecord, StoreError> {
        self.store(category)
            .get(id)
            .await?
            .ok_or(StoreError::NotFound {
                resource: category.resource(),
                id: i64::from(id),
            })
    }

    pub async fn create(
        &self,
        category: LoanCategory,
        input: &LoanInput,
    ) -> Result<LoanRecord, StoreError> {
        let record = self.store(category).create(input).await?;
        tracing::info!(category = %category, id = record.id, "Loan record created");
        Ok(record)
    }

    pub async fn update(
        &self,
        category: LoanCategory,
        id: i32,
        input: &LoanInput,
    ) -> Result<LoanRecord, StoreError> {
        let record = self.store(category).update(id, input).await?;
        tracing::info!(category = %category, id, "Loan record updated");
        Ok(record)
    }

    pub async fn delete(&self, category: LoanCategory, id: i32) -> Result<(), StoreError> {
        self.store(category).delete(id).await?;
        tracing::info!(category = %category, id, "Loan record deleted");
        Ok(())
    }
}
