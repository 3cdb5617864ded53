use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar date format used on the wire for contract start dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A contract record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contract {
    pub id: u64,
    pub company: String,
    pub start_date: NaiveDate, // serialized as YYYY-MM-DD
}

impl Contract {
    pub fn new(id: u64, company: &str, start_date: NaiveDate) -> Self {
        Self {
            id,
            company: company.to_string(),
            start_date,
        }
    }
}

/// Path segments of the contract lookup route
#[derive(Debug, Deserialize)]
pub struct ContractPath {
    pub empresa: String,
    pub inicio: String,
}

/// Contract lookup response
#[derive(Debug, Serialize, Deserialize)]
pub struct ContractsResponse {
    pub data: Vec<Contract>,
}

/// Body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
