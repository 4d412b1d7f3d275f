//! Frame loop errors.

use thiserror::Error;

use crate::term::TermError;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The terminal could not be set up; no hook ran.
    #[error("startup failed: {0}")]
    Startup(#[source] TermError),
    /// The terminal failed mid-run; teardown still ran.
    #[error("terminal failed during run: {0}")]
    Terminal(#[from] TermError),
}

impl EngineError {
    pub fn is_startup(&self) -> bool {
        matches!(self, EngineError::Startup(_))
    }
}
