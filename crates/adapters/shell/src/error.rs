//! Shell adapter error types.

/// Errors that abort the command loop.
///
/// Bad input never ends up here: unknown commands and unknown ids are
/// reported to the user and the loop carries on.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Reading a line or writing a reply failed.
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
}
