use super::Axes;

/// Point mass evolving under gravity.
///
/// The mass never changes once the body is created, position and velocity are
/// updated in place by the simulator (velocity first, then position).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Body {
    pub name: String, // Unique within a run, used as trajectory key
    mass: f64, // kg
    pub position: Axes, // m
    pub velocity: Axes, // m/s
}

impl Body {
    pub fn new<S: Into<String>>(name: S, mass: f64, position: Axes, velocity: Axes) -> Body {
        Body {
            name: name.into(),
            mass: mass,
            position: position,
            velocity: velocity,
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// A mass is usable only if it is strictly positive (NaN is rejected too).
    pub fn has_valid_mass(&self) -> bool {
        self.mass > 0. && self.mass.is_finite()
    }

    pub fn momentum(&self) -> Axes {
        Axes {
            x: self.mass * self.velocity.x,
            y: self.mass * self.velocity.y,
        }
    }
}
