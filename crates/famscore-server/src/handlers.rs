//! Scoring API handlers

use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::AppError;
use famscore_core::FinancialMetrics;

/// Response body for a successful scoring call.
///
/// The wire keys match the published API: the score is rounded to two
/// decimals and the insight strings are joined with single spaces. Both are
/// presentation concerns; the engine keeps full precision and the ordered
/// insight list.
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    #[serde(rename = "Financial Score")]
    pub financial_score: f64,
    #[serde(rename = "Insights")]
    pub insights: String,
}

/// POST /calculate_score - Score one family's financial metrics
///
/// The body is arbitrary JSON. An absent, empty, or non-object payload is
/// rejected before the engine runs; a payload with non-numeric field values
/// surfaces as a server-side failure carrying the underlying message.
pub async fn calculate_score(
    body: Option<Json<Value>>,
) -> Result<Json<ScoreResponse>, AppError> {
    let payload = match body {
        Some(Json(value)) if !is_empty_payload(&value) => value,
        _ => {
            warn!("Rejected scoring request with missing or empty payload");
            return Err(AppError::bad_request(
                "Invalid input. Please provide proper family financial data.",
            ));
        }
    };

    let metrics = FinancialMetrics::from_json(payload)
        .map_err(|e| AppError::internal(&format!("An error occurred: {}", e)))?;

    let result = famscore_core::compute(&metrics);

    Ok(Json(ScoreResponse {
        financial_score: round_to_two_decimals(result.score),
        insights: result.insights.join(" "),
    }))
}

/// GET /health - Liveness probe
pub async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// A payload the engine should never see: absent, null, or an empty object.
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn round_to_two_decimals(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
