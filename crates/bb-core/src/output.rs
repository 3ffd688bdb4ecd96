//! Output format specifications and renderers.

use crate::error::Result;
use crate::payload::DensityPayload;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Supported output formats for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Structured JSON (default for machine consumption).
    #[default]
    Json,
    /// Aligned plain-text table for quick terminal reading.
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// Render the payload in the requested format.
pub fn render(payload: &DensityPayload, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(payload)?),
        OutputFormat::Table => Ok(render_table(payload)),
    }
}

fn render_table(payload: &DensityPayload) -> String {
    let params = &payload.params;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "BetaBinomial(n={}, alpha={}, beta={})",
        params.n, params.alpha, params.beta
    );
    let _ = writeln!(out, "{:>5}  {:>12}  {:>12}", "k", "P(X = k)", "F(k)");
    for ((k, p), c) in payload
        .support
        .iter()
        .zip(payload.pmf.iter())
        .zip(payload.cdf.iter())
    {
        let _ = writeln!(out, "{:>5}  {:>12.8}  {:>12.8}", k, p, c);
    }
    out
}
