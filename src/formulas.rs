//! Scenario LTV formulas and the shared CAC formula.
//!
//! Pure and deterministic. Every function fails fast with a [`DomainError`]
//! when a required divisor is zero or a rate falls outside `[0, 1]`; nothing
//! here ever produces NaN or infinity. Rate parameters are fractions, not
//! percentages; the CLI layer normalizes percentage input before calling.

use serde::{Deserialize, Serialize};

use crate::core::errors::DomainError;
use crate::core::Scenario;

fn check_rate(name: &'static str, value: f64) -> Result<(), DomainError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::RateOutOfRange { name, value })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), DomainError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::NonPositiveInput { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), DomainError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::NegativeInput { name, value })
    }
}

/// Customer acquisition cost: total spend divided by customers acquired.
pub fn cac(total_acquisition_cost: f64, total_customers_acquired: f64) -> Result<f64, DomainError> {
    check_non_negative("total acquisition cost", total_acquisition_cost)?;
    check_positive("total customers acquired", total_customers_acquired)?;
    Ok(total_acquisition_cost / total_customers_acquired)
}

/// Inputs for the subscription-software model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaasInputs {
    pub monthly_revenue: f64,
    pub gross_margin: f64,
    pub churn_rate: f64,
    pub expansion_rate: f64,
    pub service_cost: f64,
    pub conversion_rate: f64,
}

/// SaaS lifetime value.
///
/// Expected customer lifetime is `1/churn` months; the compounding
/// adjustment `(1 + growth/churn)` applies only while net expansion is
/// positive. A zero or negative growth rate collapses to the simple-churn
/// lifetime, and the asymmetry is intentional.
pub fn ltv_saas(inputs: &SaasInputs) -> Result<f64, DomainError> {
    check_positive("monthly revenue", inputs.monthly_revenue)?;
    check_non_negative("service cost", inputs.service_cost)?;
    check_rate("gross margin", inputs.gross_margin)?;
    check_rate("expansion rate", inputs.expansion_rate)?;
    check_rate("churn rate", inputs.churn_rate)?;
    check_rate("conversion rate", inputs.conversion_rate)?;
    check_positive("churn rate", inputs.churn_rate)?;
    check_positive("conversion rate", inputs.conversion_rate)?;

    let net_revenue = inputs.monthly_revenue - inputs.service_cost;
    let net_margin = inputs.gross_margin - inputs.service_cost / inputs.monthly_revenue;
    let growth_rate = inputs.expansion_rate - inputs.churn_rate;

    let lifetime_months = if growth_rate <= 0.0 {
        1.0 / inputs.churn_rate
    } else {
        (1.0 / inputs.churn_rate) * (1.0 + growth_rate / inputs.churn_rate)
    };

    Ok(net_revenue * net_margin * lifetime_months / inputs.conversion_rate)
}

/// Inputs for the online-retail model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EcommerceInputs {
    pub avg_order_value: f64,
    pub purchase_frequency: f64,
    pub customer_lifespan_years: f64,
    pub gross_margin: f64,
    pub return_rate: f64,
    pub reorder_rate: f64,
}

/// E-commerce lifetime value.
pub fn ltv_ecommerce(inputs: &EcommerceInputs) -> Result<f64, DomainError> {
    check_non_negative("average order value", inputs.avg_order_value)?;
    check_non_negative("purchase frequency", inputs.purchase_frequency)?;
    check_non_negative("customer lifespan", inputs.customer_lifespan_years)?;
    check_rate("gross margin", inputs.gross_margin)?;
    check_rate("return rate", inputs.return_rate)?;
    check_rate("reorder rate", inputs.reorder_rate)?;

    let net_order_value = inputs.avg_order_value * (1.0 - inputs.return_rate);
    let annual_revenue = net_order_value * inputs.purchase_frequency;
    let lifetime_revenue =
        annual_revenue * inputs.customer_lifespan_years * (1.0 + inputs.reorder_rate);
    Ok(lifetime_revenue * inputs.gross_margin)
}

/// Inputs for the contract-services model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct B2bInputs {
    pub annual_contract_value: f64,
    pub gross_margin: f64,
    pub avg_contract_length_years: f64,
    pub upsell_rate: f64,
    pub retention_rate: f64,
}

/// B2B lifetime value.
///
/// Upsell and retention contributions scale with `(length - 1)`, so a
/// contract of one year or less contributes nothing (or negatively) beyond
/// the base value. Kept exactly as specified.
pub fn ltv_b2b(inputs: &B2bInputs) -> Result<f64, DomainError> {
    check_non_negative("annual contract value", inputs.annual_contract_value)?;
    check_non_negative("contract length", inputs.avg_contract_length_years)?;
    check_rate("gross margin", inputs.gross_margin)?;
    check_rate("upsell rate", inputs.upsell_rate)?;
    check_rate("retention rate", inputs.retention_rate)?;

    let base_ltv =
        inputs.annual_contract_value * inputs.gross_margin * inputs.avg_contract_length_years;
    let upsell_value = base_ltv * inputs.upsell_rate * (inputs.avg_contract_length_years - 1.0);
    let retention_value =
        base_ltv * inputs.retention_rate * (inputs.avg_contract_length_years - 1.0);
    Ok(base_ltv + upsell_value + retention_value)
}

/// Inputs for the member-organization model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CooperativeInputs {
    pub annual_membership_fee: f64,
    pub avg_annual_services_value: f64,
    pub gross_margin: f64,
    pub avg_membership_duration_years: f64,
    pub service_utilization_rate: f64,
}

/// Cooperative lifetime value.
pub fn ltv_cooperative(inputs: &CooperativeInputs) -> Result<f64, DomainError> {
    check_non_negative("annual membership fee", inputs.annual_membership_fee)?;
    check_non_negative("annual services value", inputs.avg_annual_services_value)?;
    check_non_negative("membership duration", inputs.avg_membership_duration_years)?;
    check_rate("gross margin", inputs.gross_margin)?;
    check_rate("service utilization rate", inputs.service_utilization_rate)?;

    let annual_value = inputs.annual_membership_fee
        + inputs.avg_annual_services_value * inputs.service_utilization_rate;
    Ok(annual_value * inputs.gross_margin * inputs.avg_membership_duration_years)
}

/// Validated inputs for one scenario, dispatching to the matching formula.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScenarioInputs {
    Saas(SaasInputs),
    Ecommerce(EcommerceInputs),
    B2b(B2bInputs),
    Cooperative(CooperativeInputs),
}

impl ScenarioInputs {
    pub fn scenario(&self) -> Scenario {
        match self {
            ScenarioInputs::Saas(_) => Scenario::Saas,
            ScenarioInputs::Ecommerce(_) => Scenario::Ecommerce,
            ScenarioInputs::B2b(_) => Scenario::B2b,
            ScenarioInputs::Cooperative(_) => Scenario::Cooperative,
        }
    }

    pub fn ltv(&self) -> Result<f64, DomainError> {
        match self {
            ScenarioInputs::Saas(inputs) => ltv_saas(inputs),
            ScenarioInputs::Ecommerce(inputs) => ltv_ecommerce(inputs),
            ScenarioInputs::B2b(inputs) => ltv_b2b(inputs),
            ScenarioInputs::Cooperative(inputs) => ltv_cooperative(inputs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn saas_baseline() -> SaasInputs {
        SaasInputs {
            monthly_revenue: 50_000.0,
            gross_margin: 0.7,
            churn_rate: 0.05,
            expansion_rate: 0.02,
            service_cost: 1_000.0,
            conversion_rate: 0.2,
        }
    }

    #[test]
    fn cac_divides_cost_by_customers() {
        assert_close(cac(45_000_000.0, 200.0).unwrap(), 225_000.0);
        assert_close(cac(0.0, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn cac_rejects_non_positive_customer_count() {
        assert!(matches!(
            cac(1_000.0, 0.0),
            Err(DomainError::NonPositiveInput { .. })
        ));
        assert!(matches!(
            cac(1_000.0, -5.0),
            Err(DomainError::NonPositiveInput { .. })
        ));
    }

    #[test]
    fn saas_ltv_regression_value() {
        // growth = 0.02 - 0.05 < 0, so the simple-churn lifetime (20 months)
        // applies: 49_000 * 0.68 * 20 / 0.2
        assert_close(ltv_saas(&saas_baseline()).unwrap(), 3_332_000.0);
    }

    #[test]
    fn saas_lifetime_collapses_when_expansion_trails_churn() {
        let shrinking = ltv_saas(&saas_baseline()).unwrap();
        let flat = ltv_saas(&SaasInputs {
            expansion_rate: 0.05,
            ..saas_baseline()
        })
        .unwrap();
        // growth <= 0 is one branch: identical lifetime either way
        assert_close(shrinking, flat);
    }

    #[test]
    fn saas_lifetime_extends_under_net_expansion() {
        let baseline = ltv_saas(&saas_baseline()).unwrap();
        let expanding = ltv_saas(&SaasInputs {
            expansion_rate: 0.08,
            ..saas_baseline()
        })
        .unwrap();
        // growth = 0.03 -> lifetime 20 * (1 + 0.6) = 32 months
        assert!(expanding > baseline);
        assert_close(expanding, baseline / 20.0 * 32.0);
    }

    #[test]
    fn saas_rejects_zero_divisors() {
        assert!(matches!(
            ltv_saas(&SaasInputs {
                churn_rate: 0.0,
                ..saas_baseline()
            }),
            Err(DomainError::NonPositiveInput {
                name: "churn rate",
                ..
            })
        ));
        assert!(matches!(
            ltv_saas(&SaasInputs {
                monthly_revenue: 0.0,
                ..saas_baseline()
            }),
            Err(DomainError::NonPositiveInput {
                name: "monthly revenue",
                ..
            })
        ));
        assert!(matches!(
            ltv_saas(&SaasInputs {
                conversion_rate: 0.0,
                ..saas_baseline()
            }),
            Err(DomainError::NonPositiveInput {
                name: "conversion rate",
                ..
            })
        ));
    }

    #[test]
    fn saas_rejects_rate_outside_unit_interval() {
        assert!(matches!(
            ltv_saas(&SaasInputs {
                churn_rate: 1.5,
                ..saas_baseline()
            }),
            Err(DomainError::RateOutOfRange {
                name: "churn rate",
                ..
            })
        ));
        assert!(matches!(
            ltv_saas(&SaasInputs {
                gross_margin: -0.1,
                ..saas_baseline()
            }),
            Err(DomainError::RateOutOfRange {
                name: "gross margin",
                ..
            })
        ));
    }

    #[test]
    fn ecommerce_ltv_regression_value() {
        let inputs = EcommerceInputs {
            avg_order_value: 30_000.0,
            purchase_frequency: 4.0,
            customer_lifespan_years: 3.0,
            gross_margin: 0.3,
            return_rate: 0.05,
            reorder_rate: 0.3,
        };
        // 28_500 * 4 * 3 * 1.3 * 0.3
        assert_close(ltv_ecommerce(&inputs).unwrap(), 133_380.0);
    }

    #[test]
    fn b2b_ltv_at_one_year_is_exactly_base() {
        let inputs = B2bInputs {
            annual_contract_value: 10_000_000.0,
            gross_margin: 0.5,
            avg_contract_length_years: 1.0,
            upsell_rate: 0.1,
            retention_rate: 0.8,
        };
        let base = inputs.annual_contract_value * inputs.gross_margin;
        assert_eq!(ltv_b2b(&inputs).unwrap(), base);
    }

    #[test]
    fn b2b_ltv_below_one_year_discounts_the_base() {
        // The (length - 1) factor goes negative for sub-year contracts, so
        // upsell and retention subtract from the base. Possibly an
        // intentional simplification, possibly an unnoticed edge case;
        // either way the behavior is locked in here.
        let inputs = B2bInputs {
            annual_contract_value: 1_000_000.0,
            gross_margin: 0.5,
            avg_contract_length_years: 0.5,
            upsell_rate: 0.1,
            retention_rate: 0.8,
        };
        let base = 1_000_000.0 * 0.5 * 0.5;
        assert!(ltv_b2b(&inputs).unwrap() < base);
    }

    #[test]
    fn b2b_multi_year_adds_upsell_and_retention() {
        let inputs = B2bInputs {
            annual_contract_value: 10_000_000.0,
            gross_margin: 0.5,
            avg_contract_length_years: 2.0,
            upsell_rate: 0.1,
            retention_rate: 0.8,
        };
        // base 10_000_000; upsell 1_000_000; retention 8_000_000
        assert_close(ltv_b2b(&inputs).unwrap(), 19_000_000.0);
    }

    #[test]
    fn cooperative_ltv_regression_value() {
        let inputs = CooperativeInputs {
            annual_membership_fee: 100_000.0,
            avg_annual_services_value: 500_000.0,
            gross_margin: 0.4,
            avg_membership_duration_years: 5.0,
            service_utilization_rate: 0.7,
        };
        // (100_000 + 350_000) * 0.4 * 5
        assert_close(ltv_cooperative(&inputs).unwrap(), 900_000.0);
    }

    #[test]
    fn scenario_inputs_dispatch_matches_direct_calls() {
        let inputs = saas_baseline();
        let dispatched = ScenarioInputs::Saas(inputs);
        assert_eq!(dispatched.scenario(), Scenario::Saas);
        assert_eq!(dispatched.ltv().unwrap(), ltv_saas(&inputs).unwrap());
    }
}
