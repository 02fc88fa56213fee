extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate bincode;
extern crate csv;
extern crate time;

pub mod constants;

mod error;
pub use self::error::SimulationError;

mod bodies;
pub use self::bodies::Axes;
pub use self::bodies::Body;
pub use self::bodies::BodyStore;

pub mod simulator;
pub use self::simulator::{Simulator, SimulatorStatus};

pub mod output;
pub use self::output::{TrajectorySink, SinkError, TrajectoryRecorder, TrajectoryExporter};

pub mod cases;
pub use self::cases::{Case, CaseError};

pub mod tools;
