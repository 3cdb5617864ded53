//! Contracts Module
//! Mission: Look up contracts by company and start date

pub mod store;
pub mod validation;

pub use store::ContractStore;
pub use validation::{validate_lookup, LookupParams};
