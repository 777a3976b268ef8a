//! Outbound engine events.
//!
//! The [`ZoneService`](super::service::ZoneService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  The collaborator
//! on the other side decides what to do with them: re-render a panel,
//! flash an alert badge, etc.

use crate::devices::DeviceKind;
use crate::report::Report;
use crate::telemetry::Reading;

/// Structured events emitted by the engine core.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// The service has started on its initial zone.
    Started { zone: String },

    /// A fresh reading replaced the current one.
    ReadingUpdated(Reading),

    /// The latest evaluation appended alerts to the log.
    AlertsRaised { zone: String, count: usize },

    /// An on-demand report finished.
    ReportReady(Report),

    /// A demo device switch changed state.
    DeviceChanged { device: DeviceKind, on: bool },
}
