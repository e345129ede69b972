//! # smarthub-adapter-shell
//!
//! Interactive line-based front end for the [`Hub`].
//!
//! ## Protocol
//!
//! | Input | Effect |
//! |-------|--------|
//! | `toggle` | Prompts for a device id, then runs that device's action |
//! | `status` | Prints the status block of every device |
//! | `exit` | Leaves the loop |
//! | anything else | Prints a usage hint |
//!
//! End of input behaves like `exit`.
//!
//! ## Dependency rule
//!
//! Depends on `smarthub-app` only. The shell is generic over its reader and
//! writer so it runs the same on a terminal and on in-memory buffers.

mod command;
mod error;

use std::io::{BufRead, Write};

use smarthub_app::hub::Hub;

pub use command::Command;
pub use error::ShellError;

pub const WELCOME: &str =
    "Welcome to the Smart Home System!\nYou can control your devices by entering commands.";
pub const COMMAND_PROMPT: &str = "Enter command (type 'exit' to quit): ";
pub const DEVICE_PROMPT: &str = "Enter device ID to toggle: ";
pub const INVALID_DEVICE: &str = "Invalid device ID!";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Please use 'toggle', 'status', or 'exit'.";
pub const GOODBYE: &str = "Exiting Smart Home System...";

/// Command loop bound to a hub, an input and an output.
pub struct Shell<R, W> {
    hub: Hub,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(hub: Hub, input: R, output: W) -> Self {
        Self { hub, input, output }
    }

    /// Give back the hub and the output once the loop is over.
    pub fn into_parts(self) -> (Hub, W) {
        (self.hub, self.output)
    }

    /// Print the banner and process commands until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Io`] if reading or writing fails.
    pub fn run(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "{WELCOME}")?;
        loop {
            write!(self.output, "\n{COMMAND_PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed");
                writeln!(self.output)?;
                break;
            };

            match line.parse::<Command>() {
                Ok(Command::Exit) => break,
                Ok(Command::Toggle) => {
                    if !self.toggle()? {
                        writeln!(self.output)?;
                        break;
                    }
                }
                Ok(Command::Status) => {
                    writeln!(self.output, "\n{}", self.hub.display_all_devices())?;
                }
                Ok(Command::Unknown(other)) => {
                    tracing::debug!(command = %other, "unknown command");
                    writeln!(self.output, "{UNKNOWN_COMMAND}")?;
                }
                Err(never) => match never {},
            }
        }
        tracing::info!(total_power = self.hub.total_power(), "shell stopped");
        writeln!(self.output, "{GOODBYE}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Handle the `toggle` command. Returns `false` when input ran out at the
    /// device id prompt.
    fn toggle(&mut self) -> Result<bool, ShellError> {
        write!(self.output, "{DEVICE_PROMPT}")?;
        self.output.flush()?;

        let Some(id) = self.read_line()? else {
            return Ok(false);
        };

        if !self.hub.is_valid_device_id(&id) {
            tracing::debug!(device_id = %id, "rejected unknown device id");
            writeln!(self.output, "{INVALID_DEVICE}")?;
            return Ok(true);
        }

        match self.hub.toggle_device(&id) {
            Ok(outcome) => writeln!(self.output, "{outcome}")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(true)
    }

    /// Read one line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
