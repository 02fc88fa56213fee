//! Run descriptions and the default solar system.
//!
//! A `Case` is what the `orbitsim` binary reads from (and writes to) a JSON
//! file: the gravitational constant, the step size, the number of steps and
//! the initial bodies. The simulator itself never touches files.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io;
use std::io::{Write, BufReader, BufWriter};
use std::path::Path;
use serde_json;
use super::constants::*;
use super::bodies::{Axes, Body};
use super::error::SimulationError;
use super::simulator::Simulator;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64, // m^3.kg^-1.s^-2
    #[serde(default = "default_time_step")]
    pub delta_time: f64, // s
    #[serde(default = "default_steps")]
    pub steps: u32,
    pub bodies: Vec<Body>,
}

fn default_gravitational_constant() -> f64 { G_SI }
fn default_time_step() -> f64 { DEFAULT_TIME_STEP }
fn default_steps() -> u32 { DEFAULT_STEPS }

#[derive(Debug)]
pub enum CaseError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for CaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CaseError::Io(e) => write!(f, "Couldn't access case file: {}", e),
            CaseError::Json(e) => write!(f, "Couldn't parse case file: {}", e),
        }
    }
}

impl Error for CaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CaseError::Io(e) => Some(e),
            CaseError::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for CaseError {
    fn from(e: io::Error) -> CaseError {
        CaseError::Io(e)
    }
}

impl From<serde_json::Error> for CaseError {
    fn from(e: serde_json::Error) -> CaseError {
        CaseError::Json(e)
    }
}

impl Case {
    pub fn new(gravitational_constant: f64, delta_time: f64, steps: u32, bodies: Vec<Body>) -> Case {
        Case {
            gravitational_constant: gravitational_constant,
            delta_time: delta_time,
            steps: steps,
            bodies: bodies,
        }
    }

    /// Sun and planets, one year with daily steps.
    pub fn solar_system(with_moons: bool) -> Case {
        let bodies = if with_moons { solar_system_with_moons() } else { solar_system() };
        Case::new(G_SI, DEFAULT_TIME_STEP, DEFAULT_STEPS, bodies)
    }

    pub fn from_path(case_path: &Path) -> Result<Case, CaseError> {
        let reader = BufReader::new(File::open(case_path)?);
        let case = serde_json::from_reader(reader)?;
        Ok(case)
    }

    pub fn from_json(json: &str) -> Result<Case, CaseError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CaseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write(&self, case_path: &Path) -> Result<(), CaseError> {
        let mut writer = BufWriter::new(File::create(case_path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    pub fn build_simulator(&self) -> Result<Simulator, SimulationError> {
        Simulator::with_bodies(self.gravitational_constant, self.bodies.clone())
    }
}

fn planet(name: &str, mass: f64, distance: f64, speed: f64) -> Body {
    Body::new(name, mass, Axes::new(distance, 0.), Axes::new(0., speed))
}

/// Moon placed further along the x axis than its host and orbiting in the same direction.
fn moon(name: &str, mass: f64, host: &Body, distance: f64, speed: f64) -> Body {
    Body::new(name, mass,
              Axes::new(host.position.x + distance, host.position.y),
              Axes::new(host.velocity.x, host.velocity.y + speed))
}

/// Sun at rest in the origin and the eight planets aligned on the +x axis with
/// their mean orbital speed along +y.
pub fn solar_system() -> Vec<Body> {
    vec![
        Body::new("Sun", M_SUN, Axes::zero(), Axes::zero()),
        planet("Mercury", M_MERCURY, D_MERCURY, V_MERCURY),
        planet("Venus", M_VENUS, D_VENUS, V_VENUS),
        planet("Earth", M_EARTH, D_EARTH, V_EARTH),
        planet("Mars", M_MARS, D_MARS, V_MARS),
        planet("Jupiter", M_JUPITER, D_JUPITER, V_JUPITER),
        planet("Saturn", M_SATURN, D_SATURN, V_SATURN),
        planet("Uranus", M_URANUS, D_URANUS, V_URANUS),
        planet("Neptune", M_NEPTUNE, D_NEPTUNE, V_NEPTUNE),
    ]
}

/// `solar_system` plus the Moon and the Galilean moons.
pub fn solar_system_with_moons() -> Vec<Body> {
    let mut bodies = solar_system();
    let earth = planet("Earth", M_EARTH, D_EARTH, V_EARTH);
    let jupiter = planet("Jupiter", M_JUPITER, D_JUPITER, V_JUPITER);
    bodies.push(moon("Moon", M_MOON, &earth, D_MOON, V_MOON));
    bodies.push(moon("Io", M_IO, &jupiter, D_IO, V_IO));
    bodies.push(moon("Europa", M_EUROPA, &jupiter, D_EUROPA, V_EUROPA));
    bodies.push(moon("Ganymede", M_GANYMEDE, &jupiter, D_GANYMEDE, V_GANYMEDE));
    bodies.push(moon("Callisto", M_CALLISTO, &jupiter, D_CALLISTO, V_CALLISTO));
    bodies
}
