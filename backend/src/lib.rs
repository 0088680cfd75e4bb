//! AurumBank Backend Library
//!
//! Loan catalog and contact-request API behind the AurumBank Telegram mini-app.

pub mod app;
pub mod catalog;
pub mod client;
pub mod config;
pub mod contact;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use app::build_app;
