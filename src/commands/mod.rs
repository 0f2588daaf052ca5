//! CLI command implementations for ltvmap operations.
//!
//! Available commands:
//! - **compute**: Run one scenario calculation and print the assessment
//! - **history**: Aggregate a user's saved records into the 6-month trend

pub mod compute;
pub mod history;

pub use compute::handle_compute;
pub use history::{handle_history, HistoryConfig};
