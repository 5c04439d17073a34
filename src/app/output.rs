// ABOUTME: Renders a computed estimate to a writer
// Either the bare total on one line or the full breakdown as one line of JSON

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::calc::CostEstimate;
use crate::utils::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only the total cost
    #[default]
    Total,
    /// Scenario, per-tier costs and total
    Json,
}

/// Shortest round-trip decimal, always with a fractional part.
pub fn format_total(total: f64) -> String {
    if total.is_finite() && total.fract() == 0.0 && total.abs() < 1e16 {
        format!("{:.1}", total)
    } else {
        format!("{}", total)
    }
}

pub fn write_estimate<W, E>(out: &mut W, estimate: &E, format: OutputFormat) -> Result<()>
where
    W: Write,
    E: CostEstimate,
{
    match format {
        OutputFormat::Total => {
            writeln!(out, "{}", format_total(estimate.total_cost()))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &estimate.breakdown())?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
