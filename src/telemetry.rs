//! Synthetic zone telemetry generator.
//!
//! Produces one [`Reading`] per call for a named zone.  Every numeric
//! field is drawn independently from a uniform distribution over its
//! documented bound.  No cross-field correlation exists or is promised,
//! and consumers must not assume any.
//!
//! ## Randomness
//!
//! The generator owns an injected [`Rng`] rather than reaching for a
//! global source.  [`TelemetryGenerator::from_entropy`] seeds from the
//! OS (production: fresh, independent samples per call);
//! [`TelemetryGenerator::seeded`] takes an explicit seed so tests get
//! reproducible sequences.

use chrono::Utc;
use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{Error, Result};

// ── Field bounds (half-open) ──────────────────────────────────

const TURBIDITY_MAX: f64 = 5.0;
const PH_MIN: f64 = 6.0;
const PH_MAX: f64 = 8.0;
const PERCENT_BOUND: u8 = 100;
const WIND_BOUND: u8 = 50;
const HYDRO_BOUND: u8 = 30;
const FLOW_MIN: u8 = 5;
const FLOW_BOUND: u8 = 25;
const TREND_VALUE_BOUND: u8 = 100;

/// One synthesized snapshot of sensor values for a zone.
///
/// Serializes to the camelCase JSON shape the dashboard layer renders
/// (`waterPct`, `flowRate`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Zone identifier, accepted verbatim from the caller.
    pub zone: String,
    /// Water turbidity, [0, 5), two decimals.
    pub turbidity: f64,
    /// Water pH, [6, 8), two decimals.
    pub ph: f64,
    /// Leak flag (Bernoulli, p = `leak_probability`).
    pub leak: bool,
    /// Solar output (%), [0, 100).
    pub solar: u8,
    /// Wind output, [0, 50).
    pub wind: u8,
    /// Hydro output, [0, 30).
    pub hydro: u8,
    /// Battery charge (%), [0, 100).
    pub battery: u8,
    /// Tank water level (%), [0, 100).
    pub water_pct: u8,
    /// Flow rate, [5, 25).
    pub flow_rate: u8,
    /// Recent water-level history, one value per slot, each [0, 100).
    pub trend: Vec<u8>,
    /// RFC 3339 generation time.
    pub timestamp: String,
}

/// Synthesizes readings from an injected pseudo-random source.
pub struct TelemetryGenerator<R: Rng> {
    rng: R,
    trend_len: usize,
    leak_probability: f64,
}

impl TelemetryGenerator<SmallRng> {
    /// Production constructor: seed from OS entropy.
    pub fn from_entropy(config: &EngineConfig) -> Self {
        Self::new(config, SmallRng::from_os_rng())
    }

    /// Deterministic constructor: same seed, same call sequence, same
    /// readings.
    pub fn seeded(config: &EngineConfig, seed: u64) -> Self {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TelemetryGenerator<R> {
    /// Build a generator around any [`Rng`] implementation.
    pub fn new(config: &EngineConfig, rng: R) -> Self {
        Self {
            rng,
            trend_len: config.trend_len,
            leak_probability: config.leak_probability.clamp(0.0, 1.0),
        }
    }

    /// Synthesize one reading for `zone`.
    ///
    /// Any non-empty zone string is accepted verbatim; membership in the
    /// configured catalog is not checked here.  Turbidity and pH are cut
    /// to two decimals at construction time, not at display time —
    /// downstream alert thresholds compare against the stored value.
    pub fn generate(&mut self, zone: &str) -> Result<Reading> {
        if zone.trim().is_empty() {
            return Err(Error::InvalidInput("zone name must not be empty"));
        }

        let turbidity = two_decimals(self.rng.random_range(0.0..TURBIDITY_MAX));
        let ph = two_decimals(self.rng.random_range(PH_MIN..PH_MAX));
        let leak = self.rng.random_bool(self.leak_probability);
        let trend = (0..self.trend_len)
            .map(|_| self.rng.random_range(0..TREND_VALUE_BOUND))
            .collect();

        let reading = Reading {
            zone: zone.to_owned(),
            turbidity,
            ph,
            leak,
            solar: self.rng.random_range(0..PERCENT_BOUND),
            wind: self.rng.random_range(0..WIND_BOUND),
            hydro: self.rng.random_range(0..HYDRO_BOUND),
            battery: self.rng.random_range(0..PERCENT_BOUND),
            water_pct: self.rng.random_range(0..PERCENT_BOUND),
            flow_rate: self.rng.random_range(FLOW_MIN..FLOW_BOUND),
            trend,
            timestamp: Utc::now().to_rfc3339(),
        };
        debug!(
            "generated reading for {zone}: turbidity={turbidity} ph={ph} leak={leak}"
        );
        Ok(reading)
    }
}

/// Cut to two decimals, toward zero, so a draw just under a half-open
/// bound cannot round up onto the bound itself.
fn two_decimals(v: f64) -> f64 {
    (v * 100.0).trunc() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_reading() {
        let config = EngineConfig::default();
        let mut a = TelemetryGenerator::seeded(&config, 7);
        let mut b = TelemetryGenerator::seeded(&config, 7);
        let ra = a.generate("North Zone").unwrap();
        let rb = b.generate("North Zone").unwrap();
        // Timestamps differ between the two calls; everything drawn from
        // the RNG must not.
        assert_eq!(ra.turbidity, rb.turbidity);
        assert_eq!(ra.ph, rb.ph);
        assert_eq!(ra.leak, rb.leak);
        assert_eq!(ra.water_pct, rb.water_pct);
        assert_eq!(ra.trend, rb.trend);
    }

    #[test]
    fn empty_zone_is_rejected() {
        let config = EngineConfig::default();
        let mut g = TelemetryGenerator::seeded(&config, 0);
        assert!(g.generate("").is_err());
        assert!(g.generate("   ").is_err());
    }

    #[test]
    fn fields_stay_in_bounds() {
        let config = EngineConfig::default();
        let mut g = TelemetryGenerator::seeded(&config, 99);
        for _ in 0..200 {
            let r = g.generate("East Zone").unwrap();
            assert!(r.turbidity >= 0.0 && r.turbidity < 5.0);
            assert!(r.ph >= 6.0 && r.ph < 8.0);
            assert!(r.solar < 100 && r.battery < 100 && r.water_pct < 100);
            assert!(r.wind < 50);
            assert!(r.hydro < 30);
            assert!((5..25).contains(&r.flow_rate));
            assert_eq!(r.trend.len(), 10);
            assert!(r.trend.iter().all(|&v| v < 100));
        }
    }

    #[test]
    fn turbidity_and_ph_carry_two_decimals() {
        let config = EngineConfig::default();
        let mut g = TelemetryGenerator::seeded(&config, 3);
        for _ in 0..100 {
            let r = g.generate("Central Zone").unwrap();
            let t_scaled = r.turbidity * 100.0;
            let p_scaled = r.ph * 100.0;
            assert!((t_scaled - t_scaled.round()).abs() < 1e-6);
            assert!((p_scaled - p_scaled.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let config = EngineConfig::default();
        let mut g = TelemetryGenerator::seeded(&config, 1);
        let r = g.generate("North Zone").unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&r.timestamp).is_ok());
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let config = EngineConfig::default();
        let mut g = TelemetryGenerator::seeded(&config, 5);
        let r = g.generate("North Zone").unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("waterPct").is_some());
        assert!(json.get("flowRate").is_some());
        assert!(json.get("water_pct").is_none());
    }

    #[test]
    fn trend_len_follows_config() {
        let config = EngineConfig {
            trend_len: 24,
            ..Default::default()
        };
        let mut g = TelemetryGenerator::seeded(&config, 11);
        let r = g.generate("North Zone").unwrap();
        assert_eq!(r.trend.len(), 24);
    }
}
