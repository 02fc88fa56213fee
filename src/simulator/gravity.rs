use super::super::bodies::{Axes, Body};

/// Net Newtonian force on every body (all-pairs, O(n^2)).
///
/// The returned buffer is indexed like `bodies`. Contributions to body `i` are
/// summed over `j` in ascending order, so the result only depends on the body
/// order. Coincident bodies do not attract each other: the pair is skipped
/// instead of producing an infinite or NaN force.
pub fn calculate_forces(gravitational_constant: f64, bodies: &[Body]) -> Vec<Axes> {
    let mut forces = vec![Axes::zero(); bodies.len()];

    for (i, (force, body_a)) in forces.iter_mut().zip(bodies.iter()).enumerate() {
        for (j, body_b) in bodies.iter().enumerate() {
            if i == j {
                continue;
            }
            let pair_force = calculate_pair_force(gravitational_constant, body_a, body_b);
            force.x += pair_force.x;
            force.y += pair_force.y;
        }
    }
    forces
}

/// Force exerted by `body_b` on `body_a`, pointing from `body_a` towards `body_b`.
pub fn calculate_pair_force(gravitational_constant: f64, body_a: &Body, body_b: &Body) -> Axes {
    let dx = body_b.position.x - body_a.position.x;
    let dy = body_b.position.y - body_a.position.y;
    let distance_2 = dx*dx + dy*dy;
    let distance = distance_2.sqrt();
    if distance == 0. {
        return Axes::zero();
    }

    let force = gravitational_constant * body_a.mass() * body_b.mass() / distance_2;
    Axes {
        x: force * dx / distance,
        y: force * dy / distance,
    }
}
