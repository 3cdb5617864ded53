//! Contract Storage
//! Mission: Hold the fixed set of contracts loaded at startup

use crate::contracts::validation::LookupParams;
use crate::models::{Contract, DATE_FORMAT};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Read-only, in-memory contract store
#[derive(Debug)]
pub struct ContractStore {
    contracts: Vec<Contract>,
}

impl ContractStore {
    pub fn new(contracts: Vec<Contract>) -> Self {
        Self { contracts }
    }

    /// Store with the built-in contracts
    pub fn seeded() -> Result<Self> {
        let store = Self::new(vec![
            Contract::new(1, "empresa1", parse_date("2023-01-01")?),
            Contract::new(2, "empresa2", parse_date("2023-02-01")?),
        ]);

        info!("📄 Contract store loaded with {} contracts", store.len());

        Ok(store)
    }

    /// Contracts whose company and start date both match exactly
    pub fn find(&self, params: &LookupParams<'_>) -> Vec<Contract> {
        // A well-shaped string that is not a real date matches nothing
        let Ok(start_date) = NaiveDate::parse_from_str(params.start_date, DATE_FORMAT) else {
            debug!("Start date {} is not a calendar date", params.start_date);
            return Vec::new();
        };

        self.contracts
            .iter()
            .filter(|c| c.company == params.company && c.start_date == start_date)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .with_context(|| format!("Invalid contract start date: {}", raw))
}
