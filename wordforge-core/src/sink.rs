//! Output destinations.
//!
//! A [`SinkDescriptor`] only names a destination. It is opened by the
//! controller after the caller confirms the run, so declined runs and
//! pre-flight failures never create files or connect sockets.

use crate::{Result, WordforgeError};
use std::fs::File;
use std::io::Write;
use std::net::TcpStream;
use std::path::PathBuf;

/// Writable destination for generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkDescriptor {
    /// Create or truncate a file
    File(PathBuf),
    /// Connect to a TCP listener, e.g. `127.0.0.1:9000`
    Tcp(String),
    /// Process standard output
    Stdout,
}

impl SinkDescriptor {
    /// Opens the destination for writing.
    ///
    /// # Errors
    /// Returns [`WordforgeError::Sink`] if the file cannot be created or the
    /// connection is refused.
    pub fn open(&self) -> Result<Box<dyn Write + Send>> {
        match self {
            Self::File(path) => {
                let file = File::create(path).map_err(|e| {
                    WordforgeError::sink_failed(format!("Failed to create {}", path.display()), e)
                })?;
                Ok(Box::new(file))
            }
            Self::Tcp(address) => {
                let stream = TcpStream::connect(address.as_str()).map_err(|e| {
                    WordforgeError::sink_failed(format!("Failed to connect to {}", address), e)
                })?;
                Ok(Box::new(stream))
            }
            Self::Stdout => Ok(Box::new(std::io::stdout())),
        }
    }
}

impl std::fmt::Display for SinkDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Tcp(address) => write!(f, "tcp://{}", address),
            Self::Stdout => write!(f, "<stdout>"),
        }
    }
}
