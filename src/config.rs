//! Engine configuration parameters
//!
//! All tunable parameters for the AquaGrid telemetry engine.
//! The defaults reproduce the demo dashboard's reference behavior;
//! a collaborator may override them before constructing the service.

use serde::{Deserialize, Serialize};

/// Core engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    // --- Zones ---
    /// Zone catalog offered to the dashboard.  The engine accepts any
    /// non-empty zone string; this list only seeds the UI selector and
    /// the starting zone (first entry).
    pub zones: Vec<String>,

    // --- Telemetry ---
    /// Number of samples in each reading's trend history
    pub trend_len: usize,
    /// Probability of a leak flag per reading (Bernoulli parameter)
    pub leak_probability: f64,

    // --- Alert thresholds ---
    /// Water level (%) below which a Low Water Level warning fires
    pub low_water_pct: u8,
    /// Turbidity above which a High Turbidity critical fires
    pub turbidity_critical: f64,
    /// pH above which an Abnormal pH warning fires
    pub ph_warning: f64,

    // --- Alert log ---
    /// Maximum retained alerts (newest first, oldest evicted)
    pub alert_log_cap: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Zones
            zones: vec![
                "North Zone".to_owned(),
                "East Zone".to_owned(),
                "Central Zone".to_owned(),
            ],

            // Telemetry
            trend_len: 10,
            leak_probability: 0.1,

            // Alert thresholds
            low_water_pct: 30,
            turbidity_critical: 3.0,
            ph_warning: 7.6,

            // Alert log
            alert_log_cap: 50,
        }
    }
}

impl EngineConfig {
    /// Validate before use.  Rejects values that would make the engine
    /// divide by zero or log nothing, rather than silently clamping.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.zones.is_empty() {
            return Err("zone catalog must not be empty");
        }
        if self.zones.iter().any(|z| z.trim().is_empty()) {
            return Err("zone names must not be empty");
        }
        if self.trend_len == 0 {
            return Err("trend_len must be at least 1");
        }
        if self.alert_log_cap == 0 {
            return Err("alert_log_cap must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.leak_probability) {
            return Err("leak_probability must be within [0, 1]");
        }
        if self.low_water_pct > 100 {
            return Err("low_water_pct must be within [0, 100]");
        }
        Ok(())
    }
}
