//! Input record for the scoring engine

use serde::Deserialize;

use crate::error::{Error, Result};

fn default_income() -> f64 {
    1.0
}

/// Per-family financial metrics, as submitted by the caller.
///
/// Every field is optional on the wire. Missing fields default to 0, except
/// income which defaults to 1 so that the ratio denominators stay finite.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct FinancialMetrics {
    /// Gross income, the denominator for all ratios
    #[serde(rename = "Income", default = "default_income")]
    pub income: f64,

    /// Accumulated savings
    #[serde(rename = "Savings", default)]
    pub savings: f64,

    /// Periodic expenses
    #[serde(rename = "Expenses", default)]
    pub expenses: f64,

    /// Periodic loan obligations
    #[serde(rename = "Loan_Payments", default)]
    pub loan_payments: f64,

    /// Signed trend indicator; its magnitude is used as a penalty
    #[serde(rename = "Credit_Card_Spending_Trend", default)]
    pub credit_card_spending_trend: f64,

    /// Discretionary travel/entertainment spend
    #[serde(rename = "Travel_Entertainment_Spending", default)]
    pub travel_entertainment_spending: f64,

    /// Count of financial goals achieved, contributes positively
    #[serde(rename = "Financial_Goals_Met", default)]
    pub financial_goals_met: f64,
}

impl Default for FinancialMetrics {
    fn default() -> Self {
        Self {
            income: default_income(),
            savings: 0.0,
            expenses: 0.0,
            loan_payments: 0.0,
            credit_card_spending_trend: 0.0,
            travel_entertainment_spending: 0.0,
            financial_goals_met: 0.0,
        }
    }
}

impl FinancialMetrics {
    /// Parse a metrics record from an arbitrary JSON value.
    ///
    /// Non-numeric field values are the one way the scoring pipeline can
    /// fail; the serde message is preserved for diagnostics.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::InvalidMetrics(e.to_string()))
    }

    /// Income with the zero-income guard applied.
    ///
    /// An explicit 0 is substituted with 1 before any division, so ratios
    /// are always finite.
    pub(crate) fn effective_income(&self) -> f64 {
        if self.income == 0.0 {
            default_income()
        } else {
            self.income
        }
    }
}
