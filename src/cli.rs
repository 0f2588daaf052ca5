use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::formulas::{
    B2bInputs, CooperativeInputs, EcommerceInputs, SaasInputs, ScenarioInputs,
};
use crate::io;
use crate::session::AcquisitionInputs;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl From<OutputFormat> for io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => io::OutputFormat::Terminal,
            OutputFormat::Json => io::OutputFormat::Json,
            OutputFormat::Markdown => io::OutputFormat::Markdown,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ltvmap")]
#[command(about = "Customer acquisition cost and lifetime value analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute CAC, LTV and the LTV/CAC assessment for one business model
    Compute {
        #[command(flatten)]
        opts: ComputeOpts,

        #[command(subcommand)]
        scenario: ScenarioCommand,
    },

    /// Show the six-month trend of saved calculations for a user
    History {
        /// Username whose calculations to aggregate
        #[arg(long)]
        user: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Path to the record store (defaults to the platform data directory)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Reference month for the rolling window (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        month: Option<NaiveDate>,
    },
}

/// Options shared by every compute scenario.
#[derive(Args, Debug, Clone)]
pub struct ComputeOpts {
    /// Month the result belongs to (YYYY-MM-DD, normalized to the first of
    /// the month; defaults to today)
    #[arg(long)]
    pub analysis_date: Option<NaiveDate>,

    /// Persist the result for trend history
    #[arg(long)]
    pub save: bool,

    /// Username owning saved records and history
    #[arg(long, required_if_eq("save", "true"))]
    pub user: Option<String>,

    /// Free-text notes stored with the record
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Path to the record store (defaults to the platform data directory)
    #[arg(long)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ScenarioCommand {
    /// Subscription software: monthly revenue, churn and expansion
    Saas(SaasArgs),

    /// Online retail: order value, purchase frequency and returns
    Ecommerce(EcommerceArgs),

    /// Contract services: contract value, upsell and retention
    B2b(B2bArgs),

    /// Member organizations: fees, services and utilization
    Cooperative(CooperativeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SaasArgs {
    /// Average monthly revenue per customer
    #[arg(long, default_value_t = 50_000.0)]
    pub monthly_revenue: f64,

    /// Gross margin (%)
    #[arg(long, default_value_t = 70.0)]
    pub gross_margin: f64,

    /// Monthly churn rate (%)
    #[arg(long, default_value_t = 5.0)]
    pub churn_rate: f64,

    /// Monthly expansion rate (%)
    #[arg(long, default_value_t = 2.0)]
    pub expansion_rate: f64,

    /// Direct cost of serving one customer for a month
    #[arg(long, default_value_t = 10_000.0)]
    pub service_cost: f64,

    /// Free-trial to paid conversion rate (%)
    #[arg(long, default_value_t = 20.0)]
    pub conversion_rate: f64,

    /// Total marketing and sales spend for the period
    #[arg(long, default_value_t = 45_000_000.0)]
    pub total_acquisition_cost: f64,

    /// Customers acquired with that spend
    #[arg(long, default_value_t = 200.0)]
    pub customers_acquired: f64,
}

#[derive(Args, Debug, Clone)]
pub struct EcommerceArgs {
    /// Average order value
    #[arg(long, default_value_t = 30_000.0)]
    pub avg_order_value: f64,

    /// Purchases per customer per year
    #[arg(long, default_value_t = 4.0)]
    pub purchase_frequency: f64,

    /// Customer lifespan in years
    #[arg(long, default_value_t = 3.0)]
    pub customer_lifespan: f64,

    /// Gross margin (%)
    #[arg(long, default_value_t = 30.0)]
    pub gross_margin: f64,

    /// Order return rate (%)
    #[arg(long, default_value_t = 5.0)]
    pub return_rate: f64,

    /// Reorder rate (%)
    #[arg(long, default_value_t = 30.0)]
    pub reorder_rate: f64,

    /// Total marketing and advertising spend for the period
    #[arg(long, default_value_t = 15_000_000.0)]
    pub total_acquisition_cost: f64,

    /// Customers acquired with that spend
    #[arg(long, default_value_t = 1_000.0)]
    pub customers_acquired: f64,
}

#[derive(Args, Debug, Clone)]
pub struct B2bArgs {
    /// Average annual contract value
    #[arg(long, default_value_t = 10_000_000.0)]
    pub annual_contract_value: f64,

    /// Gross margin (%)
    #[arg(long, default_value_t = 50.0)]
    pub gross_margin: f64,

    /// Average contract length in years
    #[arg(long, default_value_t = 2.0)]
    pub contract_length: f64,

    /// Annual upsell rate (%)
    #[arg(long, default_value_t = 10.0)]
    pub upsell_rate: f64,

    /// Annual retention rate (%)
    #[arg(long, default_value_t = 80.0)]
    pub retention_rate: f64,

    /// Total sales and marketing spend for the period
    #[arg(long, default_value_t = 50_000_000.0)]
    pub total_acquisition_cost: f64,

    /// Customers acquired with that spend
    #[arg(long, default_value_t = 50.0)]
    pub customers_acquired: f64,
}

#[derive(Args, Debug, Clone)]
pub struct CooperativeArgs {
    /// Annual membership fee per member
    #[arg(long, default_value_t = 100_000.0)]
    pub membership_fee: f64,

    /// Average value of services used per member per year
    #[arg(long, default_value_t = 500_000.0)]
    pub avg_annual_services: f64,

    /// Gross margin (%)
    #[arg(long, default_value_t = 40.0)]
    pub gross_margin: f64,

    /// Average membership duration in years
    #[arg(long, default_value_t = 5.0)]
    pub membership_duration: f64,

    /// Service utilization rate (%)
    #[arg(long, default_value_t = 70.0)]
    pub service_utilization: f64,

    /// Total marketing and promotion spend for the period
    #[arg(long, default_value_t = 10_000_000.0)]
    pub total_acquisition_cost: f64,

    /// New members acquired with that spend
    #[arg(long, default_value_t = 100.0)]
    pub customers_acquired: f64,
}

fn pct(value: f64) -> f64 {
    value / 100.0
}

impl ScenarioCommand {
    /// Convert CLI arguments (percentages) into formula inputs (fractions).
    pub fn to_inputs(&self) -> (ScenarioInputs, AcquisitionInputs) {
        match self {
            ScenarioCommand::Saas(args) => (
                ScenarioInputs::Saas(SaasInputs {
                    monthly_revenue: args.monthly_revenue,
                    gross_margin: pct(args.gross_margin),
                    churn_rate: pct(args.churn_rate),
                    expansion_rate: pct(args.expansion_rate),
                    service_cost: args.service_cost,
                    conversion_rate: pct(args.conversion_rate),
                }),
                AcquisitionInputs {
                    total_acquisition_cost: args.total_acquisition_cost,
                    total_customers_acquired: args.customers_acquired,
                },
            ),
            ScenarioCommand::Ecommerce(args) => (
                ScenarioInputs::Ecommerce(EcommerceInputs {
                    avg_order_value: args.avg_order_value,
                    purchase_frequency: args.purchase_frequency,
                    customer_lifespan_years: args.customer_lifespan,
                    gross_margin: pct(args.gross_margin),
                    return_rate: pct(args.return_rate),
                    reorder_rate: pct(args.reorder_rate),
                }),
                AcquisitionInputs {
                    total_acquisition_cost: args.total_acquisition_cost,
                    total_customers_acquired: args.customers_acquired,
                },
            ),
            ScenarioCommand::B2b(args) => (
                ScenarioInputs::B2b(B2bInputs {
                    annual_contract_value: args.annual_contract_value,
                    gross_margin: pct(args.gross_margin),
                    avg_contract_length_years: args.contract_length,
                    upsell_rate: pct(args.upsell_rate),
                    retention_rate: pct(args.retention_rate),
                }),
                AcquisitionInputs {
                    total_acquisition_cost: args.total_acquisition_cost,
                    total_customers_acquired: args.customers_acquired,
                },
            ),
            ScenarioCommand::Cooperative(args) => (
                ScenarioInputs::Cooperative(CooperativeInputs {
                    annual_membership_fee: args.membership_fee,
                    avg_annual_services_value: args.avg_annual_services,
                    gross_margin: pct(args.gross_margin),
                    avg_membership_duration_years: args.membership_duration,
                    service_utilization_rate: pct(args.service_utilization),
                }),
                AcquisitionInputs {
                    total_acquisition_cost: args.total_acquisition_cost,
                    total_customers_acquired: args.customers_acquired,
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scenario;

    #[test]
    fn percentages_normalize_to_fractions() {
        let (inputs, acquisition) = ScenarioCommand::Saas(SaasArgs {
            monthly_revenue: 50_000.0,
            gross_margin: 70.0,
            churn_rate: 5.0,
            expansion_rate: 2.0,
            service_cost: 1_000.0,
            conversion_rate: 20.0,
            total_acquisition_cost: 45_000_000.0,
            customers_acquired: 200.0,
        })
        .to_inputs();

        assert_eq!(inputs.scenario(), Scenario::Saas);
        match inputs {
            ScenarioInputs::Saas(saas) => {
                assert!((saas.gross_margin - 0.7).abs() < 1e-12);
                assert!((saas.churn_rate - 0.05).abs() < 1e-12);
            }
            other => panic!("unexpected inputs: {other:?}"),
        }
        assert_eq!(acquisition.total_customers_acquired, 200.0);
    }
}
