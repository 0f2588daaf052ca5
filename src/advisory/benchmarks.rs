//! Static per-scenario benchmark table. Lookup only, no computation.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::core::Scenario;

/// Reference line shown next to a scenario's assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Benchmark {
    pub label: &'static str,
}

static BENCHMARKS: Lazy<HashMap<Scenario, Benchmark>> = Lazy::new(|| {
    HashMap::from([
        (
            Scenario::Saas,
            Benchmark {
                label: "Typical SaaS benchmark: LTV/CAC above 3:1 with CAC recovered in under 12 months.",
            },
        ),
        (
            Scenario::Ecommerce,
            Benchmark {
                label: "Typical e-commerce benchmark: LTV/CAC above 3:1; repeat purchases drive the upside.",
            },
        ),
        (
            Scenario::B2b,
            Benchmark {
                label: "Typical B2B services benchmark: LTV/CAC above 3:1; multi-year contracts should trend higher.",
            },
        ),
        (
            Scenario::Cooperative,
            Benchmark {
                label: "Typical cooperative benchmark: LTV/CAC above 3:1; member retention dominates the ratio.",
            },
        ),
    ])
});

/// Benchmark line for a scenario. Total over the closed scenario set.
pub fn benchmark(scenario: Scenario) -> &'static Benchmark {
    &BENCHMARKS[&scenario]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_has_a_benchmark() {
        for scenario in Scenario::all() {
            assert!(benchmark(scenario).label.contains("3:1"));
        }
    }
}
