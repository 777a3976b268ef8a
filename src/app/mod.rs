//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the AquaGrid engine:
//! reading generation, alert evaluation, report aggregation, and device
//! state.  All interaction with the rendering layer happens through the
//! **port trait** defined in [`ports`], keeping this layer fully
//! testable without a UI.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
