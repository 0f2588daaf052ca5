// Export modules for library usage
pub mod advisory;
pub mod cli;
pub mod commands;
pub mod core;
pub mod formulas;
pub mod history;
pub mod io;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    errors::{DomainError, Error, Result, StoreError},
    month_floor, CalculationRecord, MonthlyPoint, NewRecord, RecordId, Scenario,
};

pub use crate::formulas::{
    cac, ltv_b2b, ltv_cooperative, ltv_ecommerce, ltv_saas, B2bInputs, CooperativeInputs,
    EcommerceInputs, SaasInputs, ScenarioInputs,
};

pub use crate::advisory::{
    assess, benchmark, Benchmark, PaybackAdvisory, RatioAssessment, RatioThresholds, RatioTier,
};

pub use crate::history::{monthly_series, trend_report, TrendReport, WINDOW_MONTHS};

pub use crate::session::{
    analyze, evaluate, AcquisitionInputs, AnalysisReport, CalculationRequest, Evaluation,
};

pub use crate::store::{JsonFileStore, MemoryStore, RecordStore};

pub use crate::io::{create_writer, OutputFormat, OutputWriter};
