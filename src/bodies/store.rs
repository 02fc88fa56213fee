use super::Body;
use super::super::error::SimulationError;

/// Fixed ordered list of bodies for one run.
///
/// Force and trajectory buffers are indexed positionally, so the order in
/// which bodies were added is the order used everywhere else. Once sealed
/// (i.e. integration started) no body can be added until the store is cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyStore {
    bodies: Vec<Body>,
    sealed: bool,
}

impl BodyStore {
    pub fn new() -> BodyStore {
        BodyStore { bodies: Vec::new(), sealed: false }
    }

    pub fn add(&mut self, body: Body) -> Result<(), SimulationError> {
        if self.sealed {
            return Err(SimulationError::InvalidState(format!("cannot add '{}' once integration has started", body.name)));
        }
        if !body.has_valid_mass() {
            return Err(SimulationError::InvalidConfiguration(format!("body '{}' has a non-positive mass ({})", body.name, body.mass())));
        }
        if self.find(&body.name).is_some() {
            return Err(SimulationError::InvalidConfiguration(format!("duplicated body name '{}'", body.name)));
        }
        self.bodies.push(body);
        Ok(())
    }

    pub fn all(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn all_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|body| body.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.bodies.iter().map(|body| body.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Empties the store and makes it writable again.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.sealed = false;
    }
}
