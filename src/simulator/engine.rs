use super::gravity::calculate_forces;
use super::super::bodies::{Axes, Body, BodyStore};
use super::super::error::SimulationError;
use super::super::output::TrajectorySink;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SimulatorStatus {
    Idle,
    Running,
    Complete,
}

/// Fixed step N-body simulator.
///
/// Each step computes every force from the positions left by the previous
/// step, then moves bodies in store order with a semi-implicit Euler update:
/// the velocity is kicked first and the position drifts with the new
/// velocity. The force pass only borrows the store immutably and returns an
/// owned buffer, so no body can move before all forces of the step are known.
///
/// The simulator performs no I/O: results are pushed to a `TrajectorySink`
/// once the last step is done.
#[derive(Debug, Clone)]
pub struct Simulator {
    gravitational_constant: f64,
    store: BodyStore,
    status: SimulatorStatus,
}

impl Simulator {
    pub fn new(gravitational_constant: f64) -> Simulator {
        Simulator {
            gravitational_constant: gravitational_constant,
            store: BodyStore::new(),
            status: SimulatorStatus::Idle,
        }
    }

    pub fn with_bodies(gravitational_constant: f64, bodies: Vec<Body>) -> Result<Simulator, SimulationError> {
        let mut simulator = Simulator::new(gravitational_constant);
        for body in bodies {
            simulator.add_body(body)?;
        }
        Ok(simulator)
    }

    pub fn add_body(&mut self, body: Body) -> Result<(), SimulationError> {
        self.store.add(body)
    }

    pub fn bodies(&self) -> &[Body] {
        self.store.all()
    }

    pub fn store(&self) -> &BodyStore {
        &self.store
    }

    pub fn status(&self) -> SimulatorStatus {
        self.status
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    /// Back to `Idle` with an empty store.
    pub fn reset(&mut self) {
        self.store.clear();
        self.status = SimulatorStatus::Idle;
    }

    pub fn simulate<S>(&mut self, delta_time: f64, steps: u32, sink: &mut S) -> Result<(), SimulationError>
        where S: TrajectorySink + ?Sized {
        self.validate(delta_time, steps)?;
        self.store.seal();
        self.status = SimulatorStatus::Running;

        let n_bodies = self.store.len();
        let mut trajectories: Vec<Vec<Axes>> = (0..n_bodies).map(|_| Vec::with_capacity(steps as usize)).collect();

        for _ in 0..steps {
            let forces = calculate_forces(self.gravitational_constant, self.store.all());
            for ((body, force), trajectory) in self.store.all_mut().iter_mut().zip(forces.iter()).zip(trajectories.iter_mut()) {
                let mass = body.mass();
                body.velocity.x = body.velocity.x + force.x / mass * delta_time;
                body.velocity.y = body.velocity.y + force.y / mass * delta_time;
                body.position.x = body.position.x + body.velocity.x * delta_time;
                body.position.y = body.position.y + body.velocity.y * delta_time;
                trajectory.push(body.position);
            }
        }

        for (body, trajectory) in self.store.all().iter().zip(trajectories.into_iter()) {
            // steps > 0 so every trajectory has a last point
            let final_position = trajectory.last().copied().unwrap_or(body.position);
            sink.receive_trajectory(&body.name, trajectory);
            sink.receive_label_position(&body.name, final_position);
        }

        self.status = SimulatorStatus::Complete;
        Ok(())
    }

    fn validate(&self, delta_time: f64, steps: u32) -> Result<(), SimulationError> {
        if self.status != SimulatorStatus::Idle {
            return Err(SimulationError::InvalidState("the simulator must be reset before running again".to_string()));
        }
        if !(self.gravitational_constant > 0.) || !self.gravitational_constant.is_finite() {
            return Err(SimulationError::InvalidConfiguration(format!("gravitational constant must be positive ({})", self.gravitational_constant)));
        }
        if !(delta_time > 0.) || !delta_time.is_finite() {
            return Err(SimulationError::InvalidConfiguration(format!("time step must be positive ({})", delta_time)));
        }
        if steps == 0 {
            return Err(SimulationError::InvalidConfiguration("number of steps must be positive".to_string()));
        }
        if self.store.is_empty() {
            return Err(SimulationError::InvalidConfiguration("there are no bodies to simulate".to_string()));
        }
        if let Some(body) = self.store.all().iter().find(|body| !body.has_valid_mass()) {
            return Err(SimulationError::InvalidConfiguration(format!("body '{}' has a non-positive mass ({})", body.name, body.mass())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Simulator, SimulatorStatus};
    use super::super::super::bodies::{Axes, Body};
    use super::super::super::error::SimulationError;
    use super::super::super::output::TrajectoryRecorder;

    #[test]
    fn moves_through_idle_complete_and_back() {
        let mut simulator = Simulator::new(1.);
        simulator.add_body(Body::new("A", 1., Axes::zero(), Axes::new(1., 0.))).unwrap();
        assert_eq!(simulator.status(), SimulatorStatus::Idle);

        let mut recorder = TrajectoryRecorder::new();
        simulator.simulate(0.1, 3, &mut recorder).unwrap();
        assert_eq!(simulator.status(), SimulatorStatus::Complete);
        assert!(simulator.store().is_sealed());

        let again = simulator.simulate(0.1, 3, &mut recorder);
        assert!(matches!(again, Err(SimulationError::InvalidState(_))));
        assert!(matches!(simulator.add_body(Body::new("B", 1., Axes::zero(), Axes::zero())), Err(SimulationError::InvalidState(_))));

        simulator.reset();
        assert_eq!(simulator.status(), SimulatorStatus::Idle);
        assert!(simulator.bodies().is_empty());
        simulator.add_body(Body::new("B", 1., Axes::zero(), Axes::zero())).unwrap();
    }

    #[test]
    fn zero_gravitational_constant_is_rejected() {
        let mut simulator = Simulator::with_bodies(0., vec![Body::new("A", 1., Axes::zero(), Axes::zero())]).unwrap();
        let mut recorder = TrajectoryRecorder::new();
        assert!(matches!(simulator.simulate(1., 1, &mut recorder), Err(SimulationError::InvalidConfiguration(_))));
        assert_eq!(simulator.status(), SimulatorStatus::Idle);
    }
}
