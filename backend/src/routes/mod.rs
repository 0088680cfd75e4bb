//! Route definitions for the AurumBank API

mod contact;
mod loan;
mod status;

pub use contact::contact_routes;
pub use loan::loan_routes;
pub use status::status_routes;
