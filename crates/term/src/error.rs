//! Terminal driver errors.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TermError {
    /// The terminal could not be configured at startup.
    #[error("failed to initialize terminal: {0}")]
    Init(#[source] io::Error),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl TermError {
    /// Whether this error happened while entering the terminal.
    pub fn is_startup(&self) -> bool {
        matches!(self, TermError::Init(_))
    }
}

pub type Result<T> = std::result::Result<T, TermError>;
