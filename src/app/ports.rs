//! Port traits — the boundary between the engine core and the
//! rendering layer.
//!
//! ```text
//!   Collaborator ──▶ Command ──▶ ZoneService ──▶ EventSink
//! ```
//!
//! The engine has no network or file surface; its whole boundary is
//! in-process calls.  The collaborator implements [`EventSink`] and the
//! service consumes it via generics, so the core never touches a UI
//! directly.

use super::events::EngineEvent;

/// The engine emits structured [`EngineEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &EngineEvent);
}
