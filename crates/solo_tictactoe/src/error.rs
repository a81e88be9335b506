//! Errors raised by session setup.

/// Error starting a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SetupError {
    /// The player name was empty after trimming whitespace.
    #[display("Please enter your name first!")]
    InvalidName,
}
