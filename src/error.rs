use std::error::Error;
use std::fmt;

/// Failures surfaced by the body store and the simulator.
///
/// Every variant is a caller input defect detected before (or instead of)
/// stepping: nothing here is transient, so nothing is worth retrying.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Non-positive time step or step count, empty store, bad mass, duplicate name...
    InvalidConfiguration(String),
    /// Operation not allowed in the current lifecycle stage (e.g. adding bodies after a run started).
    InvalidState(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::InvalidConfiguration(reason) => write!(f, "Invalid configuration: {}", reason),
            SimulationError::InvalidState(reason) => write!(f, "Invalid state: {}", reason),
        }
    }
}

impl Error for SimulationError {}
