use anyhow::{Context, Result};
use serde_json::json;

use hypertrophy_engine::intelligence::PeriodizationEngine;
use hypertrophy_engine::logging;
use hypertrophy_engine::models::DataSnapshot;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env()?;

    let path = std::env::args()
        .nth(1)
        .context("Usage: preview-cycle <snapshot.json>")?;
    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read snapshot file: {}", path))?;
    let snapshot: DataSnapshot =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse snapshot: {}", path))?;

    let engine = PeriodizationEngine::new();
    let insights = engine.program_insights(&snapshot);
    let preset = engine.smart_cycle_preset(&snapshot);

    let report = json!({
        "insights": insights,
        "preset": preset,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
