//! Financial health scoring
//!
//! The score is a weighted aggregate over per-metric ratios, each expressed
//! as a percentage of income. Savings contribute directly; the spending-side
//! terms are framed as headroom from a bad outcome (100 minus the ratio,
//! floored at 0) so that a single runaway metric cannot drag the sum
//! arbitrarily negative before the final clamp.

use crate::metrics::FinancialMetrics;

/// Weight of the savings ratio term.
pub const SAVINGS_WEIGHT: f64 = 0.30;
/// Weight of the expenses headroom term.
pub const EXPENSES_WEIGHT: f64 = 0.25;
/// Weight of the loan payments headroom term.
pub const LOAN_WEIGHT: f64 = 0.20;
/// Weight of the credit card trend headroom term.
pub const CREDIT_CARD_WEIGHT: f64 = 0.10;
/// Weight of the travel/entertainment headroom term.
pub const TRAVEL_WEIGHT: f64 = 0.10;
/// Weight of the financial-goals-met bonus.
pub const GOALS_WEIGHT: f64 = 0.05;

/// Travel/entertainment spending up to this percentage of income carries
/// no penalty.
pub const TRAVEL_ALLOWANCE_PCT: f64 = 20.0;

/// Savings below this percentage of income trigger the low-savings insight.
pub const LOW_SAVINGS_THRESHOLD_PCT: f64 = 20.0;
/// Expenses above this percentage of income trigger the high-expenses insight.
pub const HIGH_EXPENSES_THRESHOLD_PCT: f64 = 50.0;
/// Loan payments above this percentage of income trigger the loan insight.
pub const HIGH_LOAN_THRESHOLD_PCT: f64 = 30.0;

/// Fallback insight when no warning rule fires.
pub const AFFIRMATION: &str = "Your financial health looks good!";

/// Derived per-metric quantities, each expressed as a percentage of income.
///
/// Kept as a named intermediate so the derivation can be tested apart from
/// the aggregate formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Ratios {
    pub savings: f64,
    pub expenses: f64,
    pub loan: f64,
    pub credit_card_penalty: f64,
    pub travel_penalty: f64,
}

impl Ratios {
    pub fn from_metrics(metrics: &FinancialMetrics) -> Self {
        let income = metrics.effective_income();
        Self {
            savings: metrics.savings / income * 100.0,
            expenses: metrics.expenses / income * 100.0,
            loan: metrics.loan_payments / income * 100.0,
            credit_card_penalty: metrics.credit_card_spending_trend.abs(),
            travel_penalty: (metrics.travel_entertainment_spending / income * 100.0
                - TRAVEL_ALLOWANCE_PCT)
                .max(0.0),
        }
    }
}

/// Result of a single scoring pass. Created per call, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Aggregate score, clamped to [0, 100]. Full precision; rounding for
    /// display is the caller's concern.
    pub score: f64,
    /// Human-readable findings in rule order. Never empty.
    pub insights: Vec<String>,
}

/// Compute the financial health score and insights for one metrics record.
///
/// Pure and deterministic; never fails for any numeric input. The only
/// failure mode in the pipeline is upstream, when the payload cannot be
/// read as numbers ([`FinancialMetrics::from_json`]).
pub fn compute(metrics: &FinancialMetrics) -> ScoreResult {
    let ratios = Ratios::from_metrics(metrics);
    let score = weighted_score(&ratios, metrics.financial_goals_met);
    let insights = generate_insights(&ratios);

    tracing::debug!(
        score,
        savings_ratio = ratios.savings,
        expenses_ratio = ratios.expenses,
        loan_ratio = ratios.loan,
        insight_count = insights.len(),
        "Score computed"
    );

    ScoreResult { score, insights }
}

/// Remaining headroom below 100%, floored at 0.
fn headroom(ratio: f64) -> f64 {
    (100.0 - ratio).max(0.0)
}

/// The weighted aggregate over the derived ratios, clamped to [0, 100].
///
/// The clamp is load-bearing: the savings term is unbounded upward and the
/// goals bonus has no stated upper bound on the input side.
pub fn weighted_score(ratios: &Ratios, goals_met: f64) -> f64 {
    let score = SAVINGS_WEIGHT * ratios.savings
        + EXPENSES_WEIGHT * headroom(ratios.expenses)
        + LOAN_WEIGHT * headroom(ratios.loan)
        + CREDIT_CARD_WEIGHT * headroom(ratios.credit_card_penalty)
        + TRAVEL_WEIGHT * headroom(ratios.travel_penalty)
        + GOALS_WEIGHT * goals_met;
    score.clamp(0.0, 100.0)
}

/// Evaluate the insight rules in their fixed order.
///
/// Each rule produces at most one string. The point figures in the
/// low-savings and high-expenses messages are fixed copy kept for parity
/// with the published messaging; they are not derived from the weighted
/// contributions.
pub fn generate_insights(ratios: &Ratios) -> Vec<String> {
    let mut insights = Vec::new();

    if ratios.savings < LOW_SAVINGS_THRESHOLD_PCT {
        insights.push(format!(
            "Savings are low ({:.1}% of income), affecting your score by 10 points.",
            ratios.savings
        ));
    }
    if ratios.expenses > HIGH_EXPENSES_THRESHOLD_PCT {
        insights.push(format!(
            "Expenses are high ({:.1}% of income), reducing your score by 15 points.",
            ratios.expenses
        ));
    }
    if ratios.loan > HIGH_LOAN_THRESHOLD_PCT {
        insights.push(format!(
            "Loan payments are significant ({:.1}% of income), impacting your score.",
            ratios.loan
        ));
    }
    if ratios.travel_penalty > 0.0 {
        insights.push(format!(
            "Excessive travel/entertainment spending penalizes your score by {:.1} points.",
            ratios.travel_penalty
        ));
    }

    if insights.is_empty() {
        insights.push(AFFIRMATION.to_string());
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metrics(value: serde_json::Value) -> FinancialMetrics {
        FinancialMetrics::from_json(value).unwrap()
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum = SAVINGS_WEIGHT
            + EXPENSES_WEIGHT
            + LOAN_WEIGHT
            + CREDIT_CARD_WEIGHT
            + TRAVEL_WEIGHT
            + GOALS_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_healthy_family_scenario() {
        let m = metrics(json!({
            "Income": 1000,
            "Savings": 300,
            "Expenses": 400,
            "Loan_Payments": 100,
            "Credit_Card_Spending_Trend": 5,
            "Travel_Entertainment_Spending": 150,
            "Financial_Goals_Met": 2
        }));
        let result = compute(&m);

        // 0.30*30 + 0.25*60 + 0.20*90 + 0.10*95 + 0.10*100 + 0.05*2
        assert!((result.score - 61.6).abs() < 1e-9, "{}", result.score);
        assert_eq!(result.insights, vec![AFFIRMATION.to_string()]);
    }

    #[test]
    fn test_struggling_family_fires_all_warnings_in_order() {
        let m = metrics(json!({
            "Income": 1000,
            "Savings": 50,
            "Expenses": 600,
            "Loan_Payments": 400,
            "Travel_Entertainment_Spending": 300
        }));
        let result = compute(&m);

        assert_eq!(result.insights.len(), 4);
        assert!(result.insights[0].starts_with("Savings are low (5.0%"));
        assert!(result.insights[1].starts_with("Expenses are high (60.0%"));
        assert!(result.insights[2].starts_with("Loan payments are significant (40.0%"));
        assert!(result.insights[3]
            .starts_with("Excessive travel/entertainment spending penalizes your score by 10.0"));
    }

    #[test]
    fn test_empty_input_scores_sixty_five() {
        let m = metrics(json!({}));
        let result = compute(&m);

        // Income defaults to 1, everything else 0: all headroom terms are
        // full, savings and goals contribute nothing.
        assert!((result.score - 65.0).abs() < 1e-9, "{}", result.score);
        assert_eq!(result.insights.len(), 1);
        assert!(result.insights[0].starts_with("Savings are low (0.0%"));
    }

    #[test]
    fn test_determinism() {
        let m = metrics(json!({
            "Income": 1234.56,
            "Savings": 78.9,
            "Expenses": 1000,
            "Loan_Payments": 333,
            "Credit_Card_Spending_Trend": -12.5,
            "Travel_Entertainment_Spending": 400,
            "Financial_Goals_Met": 3
        }));
        let first = compute(&m);
        let second = compute(&m);
        assert_eq!(first, second);
    }

    #[test]
    fn test_score_bounds_under_adversarial_inputs() {
        let cases = vec![
            json!({ "Income": -1000, "Savings": 500 }),
            json!({ "Income": 1, "Savings": 1_000_000 }),
            json!({ "Income": 1000, "Expenses": 1_000_000, "Loan_Payments": 1_000_000 }),
            json!({ "Financial_Goals_Met": 1e12 }),
            json!({ "Financial_Goals_Met": -1e12 }),
            json!({ "Income": 0.0001, "Travel_Entertainment_Spending": 1e9 }),
            json!({ "Credit_Card_Spending_Trend": -1e9 }),
        ];
        for case in cases {
            let result = compute(&metrics(case.clone()));
            assert!(
                (0.0..=100.0).contains(&result.score),
                "score {} out of bounds for {}",
                result.score,
                case
            );
            assert!(!result.insights.is_empty());
        }
    }

    #[test]
    fn test_high_savings_clamped_at_hundred() {
        let m = metrics(json!({ "Income": 1000, "Savings": 900_000 }));
        let result = compute(&m);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_travel_allowance_boundary() {
        // Exactly 20% of income: no penalty, no travel insight.
        let at_allowance = Ratios::from_metrics(&metrics(json!({
            "Income": 1000,
            "Travel_Entertainment_Spending": 200
        })));
        assert_eq!(at_allowance.travel_penalty, 0.0);

        // Just over: penalty kicks in.
        let over = Ratios::from_metrics(&metrics(json!({
            "Income": 1000,
            "Travel_Entertainment_Spending": 250
        })));
        assert!((over.travel_penalty - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_credit_card_penalty_uses_magnitude() {
        let falling = Ratios::from_metrics(&metrics(json!({
            "Credit_Card_Spending_Trend": -8
        })));
        let rising = Ratios::from_metrics(&metrics(json!({
            "Credit_Card_Spending_Trend": 8
        })));
        assert_eq!(falling.credit_card_penalty, 8.0);
        assert_eq!(rising.credit_card_penalty, 8.0);
    }

    #[test]
    fn test_threshold_boundaries_do_not_fire() {
        // Savings exactly at 20%, expenses exactly at 50%, loans exactly
        // at 30%: none of the warning rules fire.
        let m = metrics(json!({
            "Income": 1000,
            "Savings": 200,
            "Expenses": 500,
            "Loan_Payments": 300
        }));
        let result = compute(&m);
        assert_eq!(result.insights, vec![AFFIRMATION.to_string()]);
    }

    #[test]
    fn test_headroom_floors_at_zero() {
        let ratios = Ratios {
            savings: 0.0,
            expenses: 250.0,
            loan: 180.0,
            credit_card_penalty: 0.0,
            travel_penalty: 0.0,
        };
        // Over-100% spending ratios contribute zero rather than negative.
        let score = weighted_score(&ratios, 0.0);
        assert!((score - 20.0).abs() < 1e-9, "{}", score);
    }
}
