//! Tier classification for LTV/CAC results
//!
//! Turns a numeric (LTV, CAC) pair into a recommendation tier on the ratio
//! axis and an advisory on the independent payback axis. Pure transformation;
//! no persistence or I/O.

use serde::{Deserialize, Serialize};

use crate::core::errors::DomainError;

/// Recommendation tier derived from the LTV/CAC ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RatioTier {
    /// Ratio below 1: every acquired customer loses money
    Unsustainable,

    /// Ratio in [1, 3): profitable, but with little headroom
    MarginallyViable,

    /// Ratio of 3 or more: healthy, scalable economics
    Healthy,
}

impl RatioTier {
    /// Get tier label for display
    pub fn label(&self) -> &'static str {
        match self {
            RatioTier::Unsustainable => "Unsustainable",
            RatioTier::MarginallyViable => "Marginally viable",
            RatioTier::Healthy => "Healthy",
        }
    }

    /// General recommendation text for the tier
    pub fn advice(&self) -> &'static str {
        match self {
            RatioTier::Unsustainable => {
                "The business model is not sustainable in its current state."
            }
            RatioTier::MarginallyViable => {
                "The model is marginally profitable, but there is room to improve."
            }
            RatioTier::Healthy => "The business model is healthy and profitable.",
        }
    }
}

/// Advisory on the payback period, independent of the ratio tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PaybackAdvisory {
    /// CAC recovered in under 6 months
    Excellent,

    /// CAC recovered within 6 to 12 months
    Good,

    /// CAC takes more than 12 months to recover
    TooSlow,
}

impl PaybackAdvisory {
    pub fn label(&self) -> &'static str {
        match self {
            PaybackAdvisory::Excellent => "Excellent",
            PaybackAdvisory::Good => "Good",
            PaybackAdvisory::TooSlow => "Too slow",
        }
    }

    /// Payback guidance text for the advisory band
    pub fn advice(&self) -> &'static str {
        match self {
            PaybackAdvisory::Excellent => {
                "Excellent payback period. Consider whether you can invest more aggressively in growth."
            }
            PaybackAdvisory::Good => {
                "Good payback period. Keep optimizing to improve it further."
            }
            PaybackAdvisory::TooSlow => {
                "Consider strategies to bring the payback period under 12 months."
            }
        }
    }
}

/// Configuration for tier and advisory boundaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioThresholds {
    /// Ratio at which the model stops losing money on each customer
    pub viable_ratio: f64,

    /// Ratio at which the model counts as healthy (inclusive)
    pub healthy_ratio: f64,

    /// Payback months below which recovery is excellent (exclusive)
    pub excellent_payback_months: f64,

    /// Payback months above which recovery is too slow (exclusive)
    pub slow_payback_months: f64,
}

impl Default for RatioThresholds {
    fn default() -> Self {
        Self {
            viable_ratio: 1.0,
            healthy_ratio: 3.0,
            excellent_payback_months: 6.0,
            slow_payback_months: 12.0,
        }
    }
}

/// Structured result of classifying one (LTV, CAC) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioAssessment {
    pub ratio: f64,
    pub payback_months: f64,
    pub tier: RatioTier,
    pub advisory: PaybackAdvisory,
}

/// Map a ratio onto its tier. First match wins; the healthy boundary is
/// inclusive.
pub fn classify_ratio(ratio: f64, thresholds: &RatioThresholds) -> RatioTier {
    if ratio < thresholds.viable_ratio {
        RatioTier::Unsustainable
    } else if ratio < thresholds.healthy_ratio {
        RatioTier::MarginallyViable
    } else {
        RatioTier::Healthy
    }
}

/// Map a payback period onto its advisory band. Both boundary months belong
/// to the Good band.
pub fn classify_payback(payback_months: f64, thresholds: &RatioThresholds) -> PaybackAdvisory {
    if payback_months > thresholds.slow_payback_months {
        PaybackAdvisory::TooSlow
    } else if payback_months < thresholds.excellent_payback_months {
        PaybackAdvisory::Excellent
    } else {
        PaybackAdvisory::Good
    }
}

/// Derive ratio and payback from an (LTV, CAC) pair and classify both.
///
/// Payback treats LTV as an annualized figure, uniformly across all
/// scenarios: `cac / (ltv / 12)`.
pub fn assess(ltv: f64, cac: f64, thresholds: &RatioThresholds) -> Result<RatioAssessment, DomainError> {
    if cac <= 0.0 {
        return Err(DomainError::NonPositiveInput {
            name: "cac",
            value: cac,
        });
    }
    if ltv == 0.0 {
        return Err(DomainError::ZeroLifetimeValue);
    }

    let ratio = ltv / cac;
    let payback_months = cac / (ltv / 12.0);

    Ok(RatioAssessment {
        ratio,
        payback_months,
        tier: classify_ratio(ratio, thresholds),
        advisory: classify_payback(payback_months, thresholds),
    })
}
