mod engine;
pub mod gravity;

pub use self::engine::{Simulator, SimulatorStatus};
pub use self::gravity::{calculate_forces, calculate_pair_force};
