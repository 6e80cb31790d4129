//! Events that trigger link phase transitions

/// Events that can trigger link phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// CFG line about to be driven low, UART switched to the config rate
    BeginProvisioning,
    /// Field frames and commit handshake written, CFG released
    ProvisioningComplete,
    /// A transport error aborted the sequence
    ProvisioningFailed,
    /// UART switched to the operational baud rate
    EnterOperational,
}
