//! Alert rules and the bounded alert log.
//!
//! The [`AlertEvaluator`] walks a fixed rule set over each reading, in
//! rule order.  Rules are independent, so a single reading can satisfy
//! all four: one evaluation yields 0 to 4 alerts, bounded by
//! construction through [`AlertBatch`].
//!
//! The [`AlertLog`] is an explicit value type owned by the service:
//! new batches are prepended, then the log is truncated to its cap, so
//! iteration order is always newest first.  There is no other mutation
//! path.

use std::collections::VecDeque;

use chrono::Utc;
use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::telemetry::Reading;

/// Upper bound on alerts from a single reading (one per rule).
pub const MAX_ALERTS_PER_READING: usize = 4;

/// The alerts produced by one evaluation pass.
pub type AlertBatch = heapless::Vec<Alert, MAX_ALERTS_PER_READING>;

/// The fixed rule enumeration, serialized as the dashboard's display
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    #[serde(rename = "Low Water Level")]
    LowWaterLevel,
    #[serde(rename = "High Turbidity")]
    HighTurbidity,
    #[serde(rename = "Abnormal pH")]
    AbnormalPh,
    #[serde(rename = "Leak Detected")]
    LeakDetected,
}

impl AlertKind {
    /// Display string, matching the serialized form.
    pub const fn label(self) -> &'static str {
        match self {
            Self::LowWaterLevel => "Low Water Level",
            Self::HighTurbidity => "High Turbidity",
            Self::AbnormalPh => "Abnormal pH",
            Self::LeakDetected => "Leak Detected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

/// A rule-triggered notification derived from a single reading.
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Monotonic id, unique across the evaluator's lifetime.
    pub id: u64,
    pub zone: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
    /// RFC 3339 evaluation time.
    pub time: String,
}

/// Walks the fixed rule set over readings.
///
/// Owns the id counter: ids are handed out monotonically, so two alerts
/// can never collide, even within one evaluation pass.
pub struct AlertEvaluator {
    next_id: u64,
    low_water_pct: u8,
    turbidity_critical: f64,
    ph_warning: f64,
}

impl AlertEvaluator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            next_id: 1,
            low_water_pct: config.low_water_pct,
            turbidity_critical: config.turbidity_critical,
            ph_warning: config.ph_warning,
        }
    }

    /// Evaluate every rule against `reading`, in rule order.
    ///
    /// Thresholds are strict (`<` / `>`): a water level exactly at the
    /// low-water mark does not fire, nor does turbidity or pH exactly
    /// at its threshold.
    pub fn evaluate(&mut self, reading: &Reading) -> AlertBatch {
        let mut batch = AlertBatch::new();

        // ── Rule 1: low water level ───────────────────────────
        if reading.water_pct < self.low_water_pct {
            self.push(
                &mut batch,
                reading,
                AlertKind::LowWaterLevel,
                Severity::Warning,
                format!("{} tank low ({}%)", reading.zone, reading.water_pct),
            );
        }

        // ── Rule 2: high turbidity ────────────────────────────
        if reading.turbidity > self.turbidity_critical {
            self.push(
                &mut batch,
                reading,
                AlertKind::HighTurbidity,
                Severity::Critical,
                format!("{} turbidity {}", reading.zone, reading.turbidity),
            );
        }

        // ── Rule 3: abnormal pH ───────────────────────────────
        if reading.ph > self.ph_warning {
            self.push(
                &mut batch,
                reading,
                AlertKind::AbnormalPh,
                Severity::Warning,
                format!("{} pH {}", reading.zone, reading.ph),
            );
        }

        // ── Rule 4: leak flag ─────────────────────────────────
        if reading.leak {
            self.push(
                &mut batch,
                reading,
                AlertKind::LeakDetected,
                Severity::Critical,
                format!("{} leak detected", reading.zone),
            );
        }

        batch
    }

    fn push(
        &mut self,
        batch: &mut AlertBatch,
        reading: &Reading,
        kind: AlertKind,
        severity: Severity,
        message: String,
    ) {
        match severity {
            Severity::Warning => warn!("ALERT {}: {}", kind.label(), message),
            Severity::Critical => error!("ALERT {}: {}", kind.label(), message),
        }
        let alert = Alert {
            id: self.take_id(),
            zone: reading.zone.clone(),
            kind,
            severity,
            message,
            time: Utc::now().to_rfc3339(),
        };
        // Capacity equals the rule count; each rule pushes at most once.
        let _ = batch.push(alert);
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Bounded, newest-first alert history.
#[derive(Debug, Clone)]
pub struct AlertLog {
    entries: VecDeque<Alert>,
    cap: usize,
}

impl AlertLog {
    /// A log retaining at most `cap` entries (at least 1).
    pub fn with_cap(cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cap: cap.max(1),
        }
    }

    /// Prepend a batch, preserving the batch's own order at the head,
    /// then evict the oldest entries past the cap.
    pub fn record(&mut self, mut batch: AlertBatch) {
        // Popping from the tail keeps the batch's order at the head.
        while let Some(alert) = batch.pop() {
            self.entries.push_front(alert);
        }
        self.entries.truncate(self.cap);
    }

    /// Newest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.entries.iter()
    }

    /// Most recent alert, if any.
    pub fn newest(&self) -> Option<&Alert> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(water_pct: u8, turbidity: f64, ph: f64, leak: bool) -> Reading {
        Reading {
            zone: "North Zone".to_owned(),
            turbidity,
            ph,
            leak,
            solar: 50,
            wind: 10,
            hydro: 5,
            battery: 80,
            water_pct,
            flow_rate: 12,
            trend: vec![40; 10],
            timestamp: "2026-01-01T00:00:00+00:00".to_owned(),
        }
    }

    fn evaluator() -> AlertEvaluator {
        AlertEvaluator::new(&EngineConfig::default())
    }

    #[test]
    fn quiet_reading_yields_no_alerts() {
        let batch = evaluator().evaluate(&reading(60, 1.0, 7.0, false));
        assert!(batch.is_empty());
    }

    #[test]
    fn all_four_rules_fire_independently() {
        let batch = evaluator().evaluate(&reading(10, 4.5, 7.9, true));
        assert_eq!(batch.len(), 4);
        assert_eq!(batch[0].kind, AlertKind::LowWaterLevel);
        assert_eq!(batch[1].kind, AlertKind::HighTurbidity);
        assert_eq!(batch[2].kind, AlertKind::AbnormalPh);
        assert_eq!(batch[3].kind, AlertKind::LeakDetected);
    }

    #[test]
    fn low_water_boundary_is_strict() {
        let mut ev = evaluator();
        let fires = ev.evaluate(&reading(29, 1.0, 7.0, false));
        assert_eq!(fires.len(), 1);
        assert_eq!(fires[0].kind, AlertKind::LowWaterLevel);
        assert_eq!(fires[0].severity, Severity::Warning);
        assert!(fires[0].message.contains("29%"));

        let quiet = ev.evaluate(&reading(30, 1.0, 7.0, false));
        assert!(quiet.is_empty());
    }

    #[test]
    fn turbidity_and_ph_boundaries_are_strict() {
        let mut ev = evaluator();
        assert!(ev.evaluate(&reading(60, 3.0, 7.0, false)).is_empty());
        assert!(ev.evaluate(&reading(60, 1.0, 7.6, false)).is_empty());
        assert_eq!(ev.evaluate(&reading(60, 3.01, 7.0, false)).len(), 1);
        assert_eq!(ev.evaluate(&reading(60, 1.0, 7.61, false)).len(), 1);
    }

    #[test]
    fn leak_alert_coincides_with_leak_flag() {
        let mut ev = evaluator();
        let with_leak = ev.evaluate(&reading(60, 1.0, 7.0, true));
        assert!(with_leak.iter().any(|a| a.kind == AlertKind::LeakDetected));
        let without = ev.evaluate(&reading(60, 1.0, 7.0, false));
        assert!(!without.iter().any(|a| a.kind == AlertKind::LeakDetected));
    }

    #[test]
    fn ids_are_unique_within_and_across_batches() {
        let mut ev = evaluator();
        let a = ev.evaluate(&reading(10, 4.5, 7.9, true));
        let b = ev.evaluate(&reading(10, 4.5, 7.9, true));
        let mut ids: Vec<u64> = a.iter().chain(b.iter()).map(|x| x.id).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn log_keeps_newest_first_and_evicts_oldest() {
        let mut ev = evaluator();
        let mut log = AlertLog::with_cap(3);
        for _ in 0..4 {
            log.record(ev.evaluate(&reading(10, 1.0, 7.0, false)));
        }
        assert_eq!(log.len(), 3);
        let ids: Vec<u64> = log.iter().map(|a| a.id).collect();
        // Four single-alert batches with ids 1..=4; the cap drops id 1.
        assert_eq!(ids, vec![4, 3, 2]);
        assert_eq!(log.newest().unwrap().id, 4);
    }

    #[test]
    fn batch_order_is_preserved_at_the_head() {
        let mut ev = evaluator();
        let mut log = AlertLog::with_cap(50);
        log.record(ev.evaluate(&reading(60, 1.0, 7.0, false)));
        log.record(ev.evaluate(&reading(10, 4.5, 7.9, true)));
        let kinds: Vec<AlertKind> = log.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AlertKind::LowWaterLevel,
                AlertKind::HighTurbidity,
                AlertKind::AbnormalPh,
                AlertKind::LeakDetected,
            ]
        );
    }

    #[test]
    fn serialized_kind_uses_display_strings() {
        let mut ev = evaluator();
        let batch = ev.evaluate(&reading(10, 1.0, 7.0, false));
        let json = serde_json::to_value(&batch[0]).unwrap();
        assert_eq!(json["type"], "Low Water Level");
        assert_eq!(json["severity"], "warning");
    }
}
