//! Frame encoding and decoding for the CH9121 configuration protocol.
//!
//! Frame format:
//! - PREAMBLE (2 bytes): 0x57 0xAB
//! - COMMAND (1 byte): configuration command
//! - PAYLOAD (0, 1, 2 or 4 bytes): length fixed by the command
//!
//! Multi-byte integers (ports, baud rate) are little-endian. Addresses are
//! sent in octet order.

use heapless::Vec;

use crate::command::Command;
use crate::config::{BridgeMode, Ipv4};

/// Frame preamble
pub const PREAMBLE: [u8; 2] = [0x57, 0xAB];

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 4;

/// Maximum complete frame size (PREAMBLE + COMMAND + MAX_PAYLOAD)
pub const MAX_FRAME_SIZE: usize = 2 + 1 + MAX_PAYLOAD_SIZE;

/// Errors that can occur during frame parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload length does not match what the command requires
    PayloadLengthMismatch,
    /// Command byte is not a known configuration command
    UnknownCommand(u8),
    /// Second preamble byte missing
    InvalidPreamble,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A parsed or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Configuration command
    pub command: Command,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Create a frame, checking the payload length against the command
    pub fn new(command: Command, payload: &[u8]) -> Result<Self, FrameError> {
        if payload.len() != command.payload_len() {
            return Err(FrameError::PayloadLengthMismatch);
        }

        let mut payload_vec = Vec::new();
        payload_vec
            .extend_from_slice(payload)
            .map_err(|_| FrameError::PayloadLengthMismatch)?;

        Ok(Self {
            command,
            payload: payload_vec,
        })
    }

    /// Create a frame with no payload (commit commands)
    pub fn empty(command: Command) -> Result<Self, FrameError> {
        Self::new(command, &[])
    }

    /// Mode command
    pub fn mode(mode: BridgeMode) -> Result<Self, FrameError> {
        Self::new(Command::Mode, &[mode.to_byte()])
    }

    /// Address command (local IP, subnet mask, gateway or target IP)
    pub fn address(command: Command, address: Ipv4) -> Result<Self, FrameError> {
        Self::new(command, &address)
    }

    /// Port command (local or target port), little-endian
    pub fn port(command: Command, port: u16) -> Result<Self, FrameError> {
        Self::new(command, &port.to_le_bytes())
    }

    /// Baud rate command, little-endian
    pub fn baud_rate(baud: u32) -> Result<Self, FrameError> {
        Self::new(Command::BaudRate, &baud.to_le_bytes())
    }

    /// Encoded size in bytes
    pub fn len(&self) -> usize {
        PREAMBLE.len() + 1 + self.payload.len()
    }

    /// Frames always carry at least the preamble and command
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = self.len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        buffer[..2].copy_from_slice(&PREAMBLE);
        buffer[2] = self.command.to_byte();
        buffer[3..frame_len].copy_from_slice(&self.payload);

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Vec<u8, MAX_FRAME_SIZE> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        // MAX_FRAME_SIZE always holds a frame
        let len = self.encode(&mut buffer).unwrap_or(0);
        let mut vec = Vec::new();
        let _ = vec.extend_from_slice(&buffer[..len]);
        vec
    }
}

/// State machine for decoding a captured command stream
///
/// The CH9121 never answers configuration commands, so this is used to
/// inspect what was put on the wire (tests, bus sniffing) rather than in
/// the provisioning path itself.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    buffer: Vec<u8, MAX_PAYLOAD_SIZE>,
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Waiting for the first preamble byte
    WaitingForPreamble,
    /// Got 0x57, waiting for 0xAB
    WaitingForPreambleTail,
    /// Waiting for the command byte
    WaitingForCommand,
    /// Reading payload bytes
    ReadingPayload,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    /// Create a new frame parser
    pub fn new() -> Self {
        Self {
            state: ParseState::WaitingForPreamble,
            buffer: Vec::new(),
            command: None,
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForPreamble;
        self.buffer.clear();
        self.command = None;
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(frame))` when a complete frame is decoded,
    /// `Ok(None)` when more bytes are needed, or `Err` on a framing error.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            ParseState::WaitingForPreamble => {
                if byte == PREAMBLE[0] {
                    self.state = ParseState::WaitingForPreambleTail;
                }
                // Silently skip bytes between frames
                Ok(None)
            }
            ParseState::WaitingForPreambleTail => {
                if byte == PREAMBLE[1] {
                    self.state = ParseState::WaitingForCommand;
                    Ok(None)
                } else if byte == PREAMBLE[0] {
                    // 0x57 0x57 0xAB: stay aligned on the latest start byte
                    Ok(None)
                } else {
                    self.reset();
                    Err(FrameError::InvalidPreamble)
                }
            }
            ParseState::WaitingForCommand => {
                let Some(command) = Command::from_byte(byte) else {
                    self.reset();
                    return Err(FrameError::UnknownCommand(byte));
                };

                if command.payload_len() == 0 {
                    self.reset();
                    return Ok(Some(Frame {
                        command,
                        payload: Vec::new(),
                    }));
                }

                self.command = Some(command);
                self.buffer.clear();
                self.state = ParseState::ReadingPayload;
                Ok(None)
            }
            ParseState::ReadingPayload => {
                let Some(command) = self.command else {
                    self.reset();
                    return Err(FrameError::InvalidPreamble);
                };

                // Cannot overflow: payload_len() <= MAX_PAYLOAD_SIZE
                let _ = self.buffer.push(byte);
                if self.buffer.len() < command.payload_len() {
                    return Ok(None);
                }

                let frame = Frame {
                    command,
                    payload: self.buffer.clone(),
                };
                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete frame found, if any.
    /// Remaining bytes after a complete frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}
