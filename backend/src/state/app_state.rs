//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::catalog::CatalogService;
use crate::contact::ContactStore;
use crate::db::Database;
use crate::middleware::AdminPolicy;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub catalog_service: Arc<CatalogService>,
    pub contact_store: Arc<ContactStore>,
    pub admin_policy: Arc<dyn AdminPolicy>,
}

impl AppState {
    pub fn new(db: Database, admin_policy: Arc<dyn AdminPolicy>) -> Self {
        Self {
            catalog_service: Arc::new(CatalogService::new(db.clone())),
            contact_store: Arc::new(ContactStore::new(db.clone())),
            db,
            admin_policy,
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Arc<CatalogService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.catalog_service.clone()
    }
}

impl FromRef<AppState> for Arc<ContactStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.contact_store.clone()
    }
}

impl FromRef<AppState> for Arc<dyn AdminPolicy> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.admin_policy.clone()
    }
}
