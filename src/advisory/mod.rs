//! Classification of an (LTV, CAC) pair into a recommendation tier and a
//! payback advisory, plus the static per-scenario benchmark table.

pub mod benchmarks;
pub mod tiers;

pub use benchmarks::{benchmark, Benchmark};
pub use tiers::{
    assess, classify_payback, classify_ratio, PaybackAdvisory, RatioAssessment, RatioThresholds,
    RatioTier,
};
