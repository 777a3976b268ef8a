//! Demo device-control state.
//!
//! The dashboard's device page toggles three independent switches.
//! This is pure state; no actuator exists behind it.

use log::info;
use serde::{Deserialize, Serialize};

/// The controllable demo devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Valve,
    Pump,
    Irrigation,
}

impl DeviceKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Valve => "valve",
            Self::Pump => "pump",
            Self::Irrigation => "irrigation",
        }
    }
}

/// Toggle state for every demo device, all initially off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceBank {
    pub valve: bool,
    pub pump: bool,
    pub irrigation: bool,
}

impl DeviceBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one device and return its new state.
    pub fn toggle(&mut self, kind: DeviceKind) -> bool {
        let slot = self.slot_mut(kind);
        *slot = !*slot;
        let on = *slot;
        info!("device {} switched {}", kind.label(), if on { "on" } else { "off" });
        on
    }

    pub fn is_on(&self, kind: DeviceKind) -> bool {
        match kind {
            DeviceKind::Valve => self.valve,
            DeviceKind::Pump => self.pump,
            DeviceKind::Irrigation => self.irrigation,
        }
    }

    fn slot_mut(&mut self, kind: DeviceKind) -> &mut bool {
        match kind {
            DeviceKind::Valve => &mut self.valve,
            DeviceKind::Pump => &mut self.pump,
            DeviceKind::Irrigation => &mut self.irrigation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_starts_off() {
        let bank = DeviceBank::new();
        assert!(!bank.is_on(DeviceKind::Valve));
        assert!(!bank.is_on(DeviceKind::Pump));
        assert!(!bank.is_on(DeviceKind::Irrigation));
    }

    #[test]
    fn toggle_flips_only_its_own_slot() {
        let mut bank = DeviceBank::new();
        assert!(bank.toggle(DeviceKind::Pump));
        assert!(bank.is_on(DeviceKind::Pump));
        assert!(!bank.is_on(DeviceKind::Valve));
        assert!(!bank.is_on(DeviceKind::Irrigation));
        assert!(!bank.toggle(DeviceKind::Pump));
        assert!(!bank.is_on(DeviceKind::Pump));
    }
}
