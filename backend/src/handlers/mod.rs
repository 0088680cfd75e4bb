//! API handlers for the AurumBank backend

pub mod contact;
pub mod fallback;
pub mod loans;
pub mod status;

pub use contact::*;
pub use fallback::{method_not_allowed, not_found};
pub use loans::{
    create_loan, delete_loan, get_loan, init_catalog, list_loans, seed_catalog, update_loan,
};
pub use status::*;
