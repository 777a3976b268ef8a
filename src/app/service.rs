//! Zone service — the engine core.
//!
//! [`ZoneService`] owns the generator, evaluator, alert log, and device
//! bank, and exposes a clean API to the rendering collaborator.  All
//! output flows through the [`EventSink`] port injected at call sites,
//! making the entire service testable with a recording mock.
//!
//! ```text
//!  Command ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!              │         ZoneService          │
//!              │ Generator · Evaluator · Log  │
//!              └──────────────────────────────┘
//! ```
//!
//! The service is the alert log's single writer: prepend-then-truncate
//! is the only mutation path, so the newest-first ordering can never be
//! violated by a second call site.

use log::info;
use rand::Rng;
use rand::rngs::SmallRng;

use crate::alerts::{AlertEvaluator, AlertLog};
use crate::chart::{self, PlotPoint};
use crate::config::EngineConfig;
use crate::devices::DeviceBank;
use crate::error::{Error, Result};
use crate::report::{self, Report};
use crate::telemetry::{Reading, TelemetryGenerator};

use super::commands::Command;
use super::events::EngineEvent;
use super::ports::EventSink;

// ───────────────────────────────────────────────────────────────
// ZoneService
// ───────────────────────────────────────────────────────────────

/// The zone service orchestrates all engine logic.
pub struct ZoneService<R: Rng> {
    config: EngineConfig,
    generator: TelemetryGenerator<R>,
    evaluator: AlertEvaluator,
    log: AlertLog,
    devices: DeviceBank,
    zone: String,
    current: Option<Reading>,
}

impl ZoneService<SmallRng> {
    /// Construct the service with an OS-entropy random source
    /// (production behavior: every reading is a fresh sample).
    ///
    /// Does **not** generate anything — call [`start`](Self::start) next.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let generator = TelemetryGenerator::from_entropy(&config);
        Self::assemble(config, generator)
    }

    /// Construct the service with an explicit seed, for reproducible
    /// sequences.
    pub fn seeded(config: EngineConfig, seed: u64) -> Result<Self> {
        let generator = TelemetryGenerator::seeded(&config, seed);
        Self::assemble(config, generator)
    }
}

impl<R: Rng> ZoneService<R> {
    /// Construct the service around any [`Rng`] implementation.
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self> {
        let generator = TelemetryGenerator::new(&config, rng);
        Self::assemble(config, generator)
    }

    fn assemble(config: EngineConfig, generator: TelemetryGenerator<R>) -> Result<Self> {
        config.validate().map_err(Error::InvalidInput)?;
        let evaluator = AlertEvaluator::new(&config);
        let log = AlertLog::with_cap(config.alert_log_cap);
        let zone = config.zones[0].clone();
        Ok(Self {
            config,
            generator,
            evaluator,
            log,
            devices: DeviceBank::new(),
            zone,
            current: None,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Generate the initial reading for the starting zone (first
    /// catalog entry) and evaluate it into the log.
    pub fn start(&mut self, sink: &mut impl EventSink) -> Result<()> {
        sink.emit(&EngineEvent::Started {
            zone: self.zone.clone(),
        });
        info!("ZoneService started on {}", self.zone);
        let zone = self.zone.clone();
        self.sample_zone(&zone, sink)
    }

    // ── Command handling ──────────────────────────────────────

    /// Process one command from the collaborator.
    pub fn handle_command(&mut self, cmd: Command, sink: &mut impl EventSink) -> Result<()> {
        match cmd {
            Command::SelectZone(zone) => {
                info!("zone selected: {zone}");
                self.sample_zone(&zone, sink)
            }
            Command::Refresh => {
                let zone = self.zone.clone();
                self.sample_zone(&zone, sink)
            }
            Command::GenerateReport { range } => {
                let report = self.generate_report(&range)?;
                sink.emit(&EngineEvent::ReportReady(report));
                Ok(())
            }
            Command::ToggleDevice(kind) => {
                let on = self.devices.toggle(kind);
                sink.emit(&EngineEvent::DeviceChanged { device: kind, on });
                Ok(())
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// The reading currently on display, if one was generated.
    pub fn current_reading(&self) -> Option<&Reading> {
        self.current.as_ref()
    }

    /// The zone the service is currently on.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Newest-first alert history.
    pub fn alert_log(&self) -> &AlertLog {
        &self.log
    }

    /// Demo device switch states.
    pub fn devices(&self) -> DeviceBank {
        self.devices
    }

    /// The live configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Aggregate the current reading's trend into a report.
    pub fn generate_report(&self, range: &str) -> Result<Report> {
        let reading = self.require_reading()?;
        report::aggregate(&reading.trend, range, &reading.zone)
    }

    /// Normalize the current reading's trend onto a viewport for the
    /// sparkline.
    pub fn chart_points(&self, width: f64, height: f64) -> Result<Vec<PlotPoint>> {
        let reading = self.require_reading()?;
        let values: Vec<f64> = reading.trend.iter().map(|&v| f64::from(v)).collect();
        chart::normalize(&values, width, height)
    }

    // ── Internal ──────────────────────────────────────────────

    /// Generate → evaluate → log → emit, the whole zone-change path.
    fn sample_zone(&mut self, zone: &str, sink: &mut impl EventSink) -> Result<()> {
        let reading = self.generator.generate(zone)?;
        let batch = self.evaluator.evaluate(&reading);
        let fired = batch.len();
        self.log.record(batch);

        sink.emit(&EngineEvent::ReadingUpdated(reading.clone()));
        if fired > 0 {
            sink.emit(&EngineEvent::AlertsRaised {
                zone: reading.zone.clone(),
                count: fired,
            });
        }

        self.zone = reading.zone.clone();
        self.current = Some(reading);
        Ok(())
    }

    fn require_reading(&self) -> Result<&Reading> {
        self.current
            .as_ref()
            .ok_or(Error::InvalidInput("no reading generated yet"))
    }
}
