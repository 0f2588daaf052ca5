pub mod errors;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::DomainError;

/// Identifier assigned to a record by the store on insertion.
pub type RecordId = u64;

/// Business model a calculation was made under. Closed set; the tags are
/// part of the persisted record shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scenario {
    #[serde(rename = "SaaS")]
    Saas,
    Ecommerce,
    #[serde(rename = "B2B")]
    B2b,
    Cooperative,
}

impl Scenario {
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Saas => "SaaS",
            Scenario::Ecommerce => "E-commerce",
            Scenario::B2b => "B2B services",
            Scenario::Cooperative => "Cooperative",
        }
    }

    pub fn all() -> [Scenario; 4] {
        [
            Scenario::Saas,
            Scenario::Ecommerce,
            Scenario::B2b,
            Scenario::Cooperative,
        ]
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scenario {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "saas" => Ok(Scenario::Saas),
            "ecommerce" | "e-commerce" => Ok(Scenario::Ecommerce),
            "b2b" => Ok(Scenario::B2b),
            "cooperative" | "coop" => Ok(Scenario::Cooperative),
            other => Err(DomainError::UnknownScenario(other.to_string())),
        }
    }
}

/// One persisted calculation result. Immutable once created; corrections are
/// made by inserting a new record for the same month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: RecordId,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub scenario: Scenario,
    pub ltv: f64,
    pub cac: f64,
    pub notes: String,
    /// Reporting month the result belongs to, always day-normalized to the
    /// first of the month. Distinct from `created_at` (submission time).
    pub analysis_date: NaiveDate,
}

/// A record as handed to the store; the store assigns the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub scenario: Scenario,
    pub ltv: f64,
    pub cac: f64,
    pub notes: String,
    pub analysis_date: NaiveDate,
}

impl NewRecord {
    pub fn into_record(self, id: RecordId) -> CalculationRecord {
        CalculationRecord {
            id,
            username: self.username,
            created_at: self.created_at,
            scenario: self.scenario,
            ltv: self.ltv,
            cac: self.cac,
            notes: self.notes,
            analysis_date: self.analysis_date,
        }
    }
}

/// One entry in the rolling trend window. Derived, never persisted; all
/// numeric fields are absent when no record exists for the month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: NaiveDate,
    pub ltv: Option<f64>,
    pub cac: Option<f64>,
    pub ratio: Option<f64>,
}

impl MonthlyPoint {
    pub fn absent(month: NaiveDate) -> Self {
        MonthlyPoint {
            month,
            ltv: None,
            cac: None,
            ratio: None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.ltv.is_some() || self.cac.is_some()
    }
}

/// Normalize a date to the first day of its month.
pub fn month_floor(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
