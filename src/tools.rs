use time::{OffsetDateTime, format_description};
use super::bodies::{Axes, Body};

/// Current UTC time as used in log lines (e.g. `2026.10.16 12:00:00`).
pub fn now_utc() -> String {
    format_utc("[year].[month].[day] [hour]:[minute]:[second]")
}

/// Current UTC time compacted for file names (e.g. `20261016_120000`).
pub fn now_utc_compact() -> String {
    format_utc("[year][month][day]_[hour][minute][second]")
}

fn format_utc(description: &str) -> String {
    let now = OffsetDateTime::now_utc();
    match format_description::parse(description) {
        Ok(format) => now.format(&format).unwrap_or_else(|_| now.unix_timestamp().to_string()),
        Err(_) => now.unix_timestamp().to_string(),
    }
}

pub fn calculate_center_of_mass(bodies: &[Body]) -> (Axes, Axes) {
    let mut center_of_mass_position = Axes::zero();
    let mut center_of_mass_velocity = Axes::zero();
    let mut center_of_mass_mass = 0.;

    for body in bodies.iter() {
        let mass = body.mass();
        center_of_mass_position.x = center_of_mass_position.x*center_of_mass_mass + body.position.x*mass;
        center_of_mass_position.y = center_of_mass_position.y*center_of_mass_mass + body.position.y*mass;
        center_of_mass_velocity.x = center_of_mass_velocity.x*center_of_mass_mass + body.velocity.x*mass;
        center_of_mass_velocity.y = center_of_mass_velocity.y*center_of_mass_mass + body.velocity.y*mass;

        center_of_mass_mass += mass;
        if center_of_mass_mass > 0. {
            center_of_mass_position.x /= center_of_mass_mass;
            center_of_mass_position.y /= center_of_mass_mass;
            center_of_mass_velocity.x /= center_of_mass_mass;
            center_of_mass_velocity.y /= center_of_mass_mass;
        }
    }

    (center_of_mass_position, center_of_mass_velocity)
}

pub fn calculate_total_momentum(bodies: &[Body]) -> Axes {
    bodies.iter().fold(Axes::zero(), |total, body| {
        let momentum = body.momentum();
        Axes::new(total.x + momentum.x, total.y + momentum.y)
    })
}

pub fn calculate_kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter()
        .map(|body| 0.5 * body.mass() * (body.velocity.x.powi(2) + body.velocity.y.powi(2)))
        .sum()
}

/// Coincident bodies are ignored, the same way the force pass ignores them.
pub fn calculate_potential_energy(gravitational_constant: f64, bodies: &[Body]) -> f64 {
    let mut potential_energy = 0.;
    for (i, body_a) in bodies.iter().enumerate() {
        for body_b in bodies[i+1..].iter() {
            let dx = body_b.position.x - body_a.position.x;
            let dy = body_b.position.y - body_a.position.y;
            let distance = (dx*dx + dy*dy).sqrt();
            if distance == 0. {
                continue;
            }
            potential_energy -= gravitational_constant * body_a.mass() * body_b.mass() / distance;
        }
    }
    potential_energy
}

pub fn calculate_total_energy(gravitational_constant: f64, bodies: &[Body]) -> f64 {
    calculate_kinetic_energy(bodies) + calculate_potential_energy(gravitational_constant, bodies)
}
