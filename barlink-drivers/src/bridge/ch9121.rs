//! CH9121 UART-to-Ethernet bridge
//!
//! The module has two UART personalities selected by its CFG line: low
//! means configuration frames at 9600 baud, high means transparent data at
//! the configured rate. This driver owns the UART and both control lines,
//! and tracks a [`LinkPhase`] so data can only go out once the module has
//! been provisioned and the UART switched to the operational rate.
//!
//! Provisioning is fire-and-forget. Frames are paced with fixed delays and
//! nothing is read back from the module.

use barlink_core::state::{LinkEvent, LinkPhase, PhaseError};
use barlink_core::traits::LineSender;
use barlink_hal::{OutputPin, UartTx};
use barlink_protocol::{
    commit_frames, field_frames, BridgeConfig, Frame, FrameError, CONFIG_BAUDRATE,
};
use embedded_hal::delay::DelayNs;

/// Settle time after entering configuration mode
const ENTER_CONFIG_MS: u32 = 500;

/// Gap before each field frame and around the commit handshake
const FIELD_GAP_MS: u32 = 100;

/// Wait after each field frame
const FRAME_SETTLE_MS: u32 = 10;

/// Wait after each commit step
const COMMIT_STEP_MS: u32 = 200;

/// Bridge errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError<E> {
    /// UART failure
    Uart(E),
    /// Operation not valid in the current link phase
    Phase(PhaseError),
    /// Data offered before the link is operational
    NotOperational(LinkPhase),
    /// Configuration record could not be encoded
    Frame(FrameError),
}

/// Summary of one provisioning run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProvisionReport {
    /// Frames written, field frames and commit steps
    pub frames: usize,
    /// Bytes written
    pub bytes: usize,
}

/// CH9121 on a dedicated UART with CFG and RST control lines
pub struct Ch9121<U, CFG, RST, D> {
    uart: U,
    cfg: CFG,
    rst: RST,
    delay: D,
    phase: LinkPhase,
    /// Baud rate written in the last committed record
    data_baudrate: u32,
}

impl<U, CFG, RST, D> Ch9121<U, CFG, RST, D>
where
    U: UartTx,
    CFG: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the bridge resources
    ///
    /// The control lines are left untouched until [`provision`](Self::provision).
    pub fn new(uart: U, cfg: CFG, rst: RST, delay: D) -> Self {
        Self {
            uart,
            cfg,
            rst,
            delay,
            phase: LinkPhase::Unprovisioned,
            data_baudrate: 0,
        }
    }

    pub fn phase(&self) -> LinkPhase {
        self.phase
    }

    /// Release the UART, control lines and delay provider
    pub fn release(self) -> (U, CFG, RST, D) {
        (self.uart, self.cfg, self.rst, self.delay)
    }

    /// Write `config` to the module and commit it to EEPROM
    pub fn provision(
        &mut self,
        config: &BridgeConfig,
    ) -> Result<ProvisionReport, BridgeError<U::Error>> {
        self.provision_with(config, |_| {})
    }

    /// Like [`provision`](Self::provision), calling `on_field` after each
    /// field frame has been written
    pub fn provision_with<F>(
        &mut self,
        config: &BridgeConfig,
        mut on_field: F,
    ) -> Result<ProvisionReport, BridgeError<U::Error>>
    where
        F: FnMut(&Frame),
    {
        self.phase = self
            .phase
            .try_transition(LinkEvent::BeginProvisioning)
            .map_err(BridgeError::Phase)?;

        match self.write_configuration(config, &mut on_field) {
            Ok(report) => {
                self.data_baudrate = config.baud_rate;
                self.phase = self.phase.transition(LinkEvent::ProvisioningComplete);
                Ok(report)
            }
            Err(err) => {
                // Leave configuration mode; the module keeps whatever it got
                self.cfg.set_high();
                self.phase = self.phase.transition(LinkEvent::ProvisioningFailed);
                Err(err)
            }
        }
    }

    /// Switch the UART to the provisioned baud rate and accept data
    pub fn enter_operational(&mut self) -> Result<(), BridgeError<U::Error>> {
        let next = self
            .phase
            .try_transition(LinkEvent::EnterOperational)
            .map_err(BridgeError::Phase)?;
        self.uart
            .set_baudrate(self.data_baudrate)
            .map_err(BridgeError::Uart)?;
        self.phase = next;
        Ok(())
    }

    /// Forward one line to the remote host
    pub fn send_line(&mut self, line: &str) -> Result<(), BridgeError<U::Error>> {
        if !self.phase.allows_data() {
            return Err(BridgeError::NotOperational(self.phase));
        }
        self.uart
            .write_blocking(line.as_bytes())
            .map_err(BridgeError::Uart)
    }

    fn write_configuration<F>(
        &mut self,
        config: &BridgeConfig,
        on_field: &mut F,
    ) -> Result<ProvisionReport, BridgeError<U::Error>>
    where
        F: FnMut(&Frame),
    {
        // Encode everything before touching the control lines
        let fields = field_frames(config).map_err(BridgeError::Frame)?;
        let commit = commit_frames().map_err(BridgeError::Frame)?;
        let mut report = ProvisionReport::default();

        self.uart
            .set_baudrate(CONFIG_BAUDRATE)
            .map_err(BridgeError::Uart)?;
        self.rst.set_high();
        self.cfg.set_low();
        self.delay.delay_ms(ENTER_CONFIG_MS);

        for frame in fields.iter() {
            self.delay.delay_ms(FIELD_GAP_MS);
            self.write_frame(frame, &mut report)?;
            self.delay.delay_ms(FRAME_SETTLE_MS);
            on_field(frame);
        }

        self.delay.delay_ms(FIELD_GAP_MS);
        for frame in commit.iter() {
            self.write_frame(frame, &mut report)?;
            self.delay.delay_ms(COMMIT_STEP_MS);
        }

        self.delay.delay_ms(FIELD_GAP_MS);
        self.cfg.set_high();
        Ok(report)
    }

    fn write_frame(
        &mut self,
        frame: &Frame,
        report: &mut ProvisionReport,
    ) -> Result<(), BridgeError<U::Error>> {
        let bytes = frame.encode_to_vec();
        self.uart
            .write_blocking(&bytes)
            .and_then(|()| self.uart.flush())
            .map_err(BridgeError::Uart)?;
        report.frames += 1;
        report.bytes += bytes.len();
        Ok(())
    }
}

impl<U, CFG, RST, D> LineSender for Ch9121<U, CFG, RST, D>
where
    U: UartTx,
    CFG: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    type Error = BridgeError<U::Error>;

    fn send_line(&mut self, line: &str) -> Result<(), Self::Error> {
        Ch9121::send_line(self, line)
    }
}
