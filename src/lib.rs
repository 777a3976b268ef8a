//! AquaGrid zone telemetry simulation & alerting engine.
//!
//! The pure core behind the AquaGrid demo dashboard: synthesizes
//! per-zone sensor readings, evaluates threshold rules into alerts,
//! and reduces trend samples into reports and plot coordinates.  The
//! rendering layer is an external collaborator that sends
//! [`Command`](app::commands::Command)s in and receives
//! [`EngineEvent`](app::events::EngineEvent)s out.
//!
//! Deterministic given a seed: construct the service through
//! [`ZoneService::seeded`](app::service::ZoneService::seeded) and the
//! whole reading sequence is reproducible.

#![deny(unused_must_use)]

pub mod alerts;
pub mod app;
pub mod chart;
pub mod config;
pub mod devices;
pub mod error;
pub mod report;
pub mod telemetry;
