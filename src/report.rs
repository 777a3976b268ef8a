//! On-demand trend reports.
//!
//! [`aggregate`] reduces a trend sample to min/max/average.  It is a
//! pure function: no stored state, no side effects beyond reading the
//! clock for the `generated_at` stamp.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Summary statistics over one trend sample.  Ephemeral: computed on
/// demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Caller-supplied range label, passed through verbatim.
    pub range: String,
    pub zone: String,
    pub avg_water_level: u8,
    pub max: u8,
    pub min: u8,
    /// RFC 3339 generation time.
    pub generated_at: String,
}

/// Reduce `trend` to a [`Report`].
///
/// An empty sample is a typed error, never a NaN average.  The mean is
/// rounded half away from zero (`f64::round`).
pub fn aggregate(trend: &[u8], range: &str, zone: &str) -> Result<Report> {
    if trend.is_empty() {
        return Err(Error::DegenerateSeries { needed: 1, got: 0 });
    }

    let sum: u32 = trend.iter().map(|&v| u32::from(v)).sum();
    let avg = (f64::from(sum) / trend.len() as f64).round() as u8;
    let max = trend.iter().copied().fold(0, u8::max);
    let min = trend.iter().copied().fold(u8::MAX, u8::min);

    Ok(Report {
        range: range.to_owned(),
        zone: zone.to_owned(),
        avg_water_level: avg,
        max,
        min,
        generated_at: Utc::now().to_rfc3339(),
    })
}
