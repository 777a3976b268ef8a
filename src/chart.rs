//! Series normalization for the dashboard's sparkline.
//!
//! Maps an arbitrary-range numeric sequence into screen space so the
//! rendering collaborator can draw it as a connected polyline.  Pure,
//! no side effects.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One point in rendering space.  y is inverted: 0 = top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Map `values` onto a `width` × `height` viewport.
///
/// x spreads indices linearly across the full width; y scales each
/// value between the sequence's own extrema, inverted for screen
/// coordinates.  A flat series (max == min) keeps the denominator at 1
/// instead of dividing by zero, pinning every point to y = height
/// (bottom-aligned).
///
/// Fewer than two values cannot be spaced along x and fail with a
/// typed error rather than producing NaN coordinates.
pub fn normalize(values: &[f64], width: f64, height: f64) -> Result<Vec<PlotPoint>> {
    if values.len() < 2 {
        return Err(Error::DegenerateSeries {
            needed: 2,
            got: values.len(),
        });
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if max > min { max - min } else { 1.0 };
    let last = (values.len() - 1) as f64;

    Ok(values
        .iter()
        .enumerate()
        .map(|(i, &v)| PlotPoint {
            x: i as f64 / last * width,
            y: height - (v - min) / span * height,
        })
        .collect())
}
