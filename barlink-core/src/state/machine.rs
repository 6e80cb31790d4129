//! Link phase definition
//!
//! ```text
//! Unprovisioned ──Begin──► Provisioning ──Complete──► Provisioned ──EnterOperational──► Operational
//!       ▲                       │                         │
//!       └────────Failed─────────┘                         └──Begin (re-apply same record)
//! ```

use super::events::LinkEvent;

/// Phases of the shared bridge UART
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkPhase {
    /// Power-on: nothing written to the module yet
    #[default]
    Unprovisioned,
    /// CFG held low; only command frames may be sent
    Provisioning,
    /// Module configured, UART still at the configuration rate
    Provisioned,
    /// UART at the operational rate; barcode lines may be sent
    Operational,
}

/// A transition the link refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseError {
    /// Phase the link was in
    pub phase: LinkPhase,
    /// Event that is not valid in that phase
    pub event: LinkEvent,
}

impl LinkPhase {
    /// Check if barcode data may be written to the UART
    pub fn allows_data(&self) -> bool {
        matches!(self, LinkPhase::Operational)
    }

    /// Check if the module holds a committed configuration
    pub fn is_provisioned(&self) -> bool {
        matches!(self, LinkPhase::Provisioned | LinkPhase::Operational)
    }

    /// Process an event and return the next phase
    ///
    /// Invalid events leave the phase unchanged.
    pub fn transition(self, event: LinkEvent) -> Self {
        self.try_transition(event).unwrap_or(self)
    }

    /// Process an event, reporting events that are invalid in this phase
    pub fn try_transition(self, event: LinkEvent) -> Result<Self, PhaseError> {
        use LinkEvent::*;
        use LinkPhase::*;

        match (self, event) {
            (Unprovisioned, BeginProvisioning) => Ok(Provisioning),
            // Re-applying the same record before going live is harmless
            (Provisioned, BeginProvisioning) => Ok(Provisioning),

            (Provisioning, ProvisioningComplete) => Ok(Provisioned),
            (Provisioning, ProvisioningFailed) => Ok(Unprovisioned),

            (Provisioned, EnterOperational) => Ok(Operational),

            _ => Err(PhaseError { phase: self, event }),
        }
    }
}
