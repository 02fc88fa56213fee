mod recorder;
mod exporter;

pub use self::recorder::{TrajectoryRecorder, RecordedBody};
pub use self::exporter::TrajectoryExporter;

use std::error::Error;
use std::fmt;
use std::io;
use bincode;
use csv;
use serde_json;
use super::bodies::Axes;

/// Consumer of the simulation results (chart, window, file...).
///
/// The simulator calls `receive_trajectory` and then `receive_label_position`
/// once per body, in body order, after the last step. `finalize` is left to
/// the caller, the destination string is never interpreted by the simulator.
pub trait TrajectorySink {
    fn receive_trajectory(&mut self, body_name: &str, points: Vec<Axes>);
    fn receive_label_position(&mut self, body_name: &str, position: Axes);
    fn finalize(&mut self, destination: &str) -> Result<(), SinkError>;
}

#[derive(Debug)]
pub enum SinkError {
    Io(io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    Binary(bincode::Error),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SinkError::Io(e) => write!(f, "I/O error: {}", e),
            SinkError::Json(e) => write!(f, "JSON error: {}", e),
            SinkError::Csv(e) => write!(f, "CSV error: {}", e),
            SinkError::Binary(e) => write!(f, "Binary serialization error: {}", e),
        }
    }
}

impl Error for SinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SinkError::Io(e) => Some(e),
            SinkError::Json(e) => Some(e),
            SinkError::Csv(e) => Some(e),
            SinkError::Binary(e) => Some(e),
        }
    }
}

impl From<io::Error> for SinkError {
    fn from(e: io::Error) -> SinkError {
        SinkError::Io(e)
    }
}

impl From<serde_json::Error> for SinkError {
    fn from(e: serde_json::Error) -> SinkError {
        SinkError::Json(e)
    }
}

impl From<csv::Error> for SinkError {
    fn from(e: csv::Error) -> SinkError {
        SinkError::Csv(e)
    }
}

impl From<bincode::Error> for SinkError {
    fn from(e: bincode::Error) -> SinkError {
        SinkError::Binary(e)
    }
}
