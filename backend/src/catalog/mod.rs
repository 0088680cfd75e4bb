pub mod model;
pub mod seed;
pub mod service;
pub mod store;

pub use model::*;
pub use seed::demo_records;
pub use service::CatalogService;
pub use store::CatalogStore;
