//! Offline scoring command implementation

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use famscore_core::{compute, FinancialMetrics};

pub fn cmd_score(file: Option<&Path>, json_output: bool) -> Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read metrics from stdin")?;
            buf
        }
    };

    let value: serde_json::Value =
        serde_json::from_str(&input).context("Input is not valid JSON")?;
    let metrics = FinancialMetrics::from_json(value)?;
    let result = compute(&metrics);
    tracing::debug!(score = result.score, "Scored metrics input");

    // Same presentation rounding as the API response
    let score = (result.score * 100.0).round() / 100.0;

    if json_output {
        let out = serde_json::json!({
            "Financial Score": score,
            "Insights": result.insights.join(" ")
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Financial score: {:.2}", score);
        for insight in &result.insights {
            println!("  - {}", insight);
        }
    }

    Ok(())
}
