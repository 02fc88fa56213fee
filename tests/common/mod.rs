use std::env;
use std::path::PathBuf;
use std::process;
use orbitsim::{Axes, Body, Simulator};

pub fn two_body_simulator(gravitational_constant: f64) -> Simulator {
    let a = Body::new("A", 1.0, Axes::new(0., 0.), Axes::new(0., 0.));
    let b = Body::new("B", 1.0, Axes::new(1., 0.), Axes::new(0., 0.));
    Simulator::with_bodies(gravitational_constant, vec![a, b]).unwrap()
}

/// Unequal masses one unit apart on a circular orbit around their barycenter (G = 1).
pub fn binary_bodies() -> Vec<Body> {
    vec![
        Body::new("Heavy", 2.0, Axes::new(-1./3., 0.), Axes::new(0., -0.5773502691896258)),
        Body::new("Light", 1.0, Axes::new(2./3., 0.), Axes::new(0., 1.1547005383792515)),
    ]
}

pub fn three_bodies() -> Vec<Body> {
    vec![
        Body::new("A", 3.0, Axes::new(0., 0.), Axes::new(0., 0.1)),
        Body::new("B", 1.0, Axes::new(1., 0.5), Axes::new(-0.2, 0.3)),
        Body::new("C", 0.5, Axes::new(-2., 1.), Axes::new(0.05, -0.4)),
    ]
}

pub fn temporary_path(test_name: &str, extension: &str) -> PathBuf {
    env::temp_dir()
        .join(format!("orbitsim-{}-{}", test_name, process::id()))
        .join(format!("trajectories.{}", extension))
}
