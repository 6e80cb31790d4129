//! Line-oriented network output

/// Trait for the remote host link
///
/// The wire format is newline-delimited ASCII: callers pass one complete
/// line including its trailing `\n`.
pub trait LineSender {
    /// Error type for send operations
    type Error;

    /// Send one newline-terminated line
    fn send_line(&mut self, line: &str) -> Result<(), Self::Error>;
}
