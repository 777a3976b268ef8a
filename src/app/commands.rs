//! Inbound commands to the zone service.
//!
//! These represent actions requested by the outside world (zone
//! selector, report button, device switches) that the
//! [`ZoneService`](super::service::ZoneService) interprets and acts
//! upon.

use crate::devices::DeviceKind;

/// Commands the rendering collaborator can send into the engine core.
#[derive(Debug, Clone)]
pub enum Command {
    /// Switch to a zone and synthesize a fresh reading for it.
    SelectZone(String),

    /// Re-sample the current zone without switching.
    Refresh,

    /// Aggregate the current trend into a report.
    GenerateReport {
        /// Range label carried through to the report verbatim.
        range: String,
    },

    /// Flip one demo device switch.
    ToggleDevice(DeviceKind),
}
