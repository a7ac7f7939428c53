//! Famscore Core Library
//!
//! Shared functionality for the famscore financial health service:
//! - The `FinancialMetrics` input record and its JSON parsing rules
//! - The weighted scoring formula with named weight constants
//! - Rule-based insight generation

pub mod error;
pub mod metrics;
pub mod score;

pub use error::{Error, Result};
pub use metrics::FinancialMetrics;
pub use score::{compute, Ratios, ScoreResult};
