//! Lookup parameter validation.
//!
//! Path segments are checked against allow-list patterns before they reach the
//! store, so nothing outside word characters and whitespace is ever compared.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMPANY_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9_\s]+$").expect("company pattern compiles");
    static ref DATE_PATTERN: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles");
}

/// Validated contract lookup parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupParams<'a> {
    pub company: &'a str,
    pub start_date: &'a str,
}

/// Company names: ASCII letters, digits, underscore and whitespace, at least one.
pub fn is_valid_company(company: &str) -> bool {
    COMPANY_PATTERN.is_match(company)
}

/// Start dates: exactly `NNNN-NN-NN`.
pub fn is_valid_start_date(start_date: &str) -> bool {
    DATE_PATTERN.is_match(start_date)
}

/// Returns the parameters only when both pass their patterns.
pub fn validate_lookup<'a>(company: &'a str, start_date: &'a str) -> Option<LookupParams<'a>> {
    if is_valid_company(company) && is_valid_start_date(start_date) {
        Some(LookupParams {
            company,
            start_date,
        })
    } else {
        None
    }
}
