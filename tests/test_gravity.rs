extern crate orbitsim;
extern crate assert_approx_eq;

mod common;
use assert_approx_eq::assert_approx_eq;
use orbitsim::{Axes, Body};
use orbitsim::simulator::{calculate_forces, calculate_pair_force};
use orbitsim::constants::G_SI;

#[test]
fn unit_masses_one_meter_apart_attract_with_g() {
    let simulator = common::two_body_simulator(1.0);
    let forces = calculate_forces(1.0, simulator.bodies());
    assert_eq!(forces.len(), 2);
    assert_approx_eq!(forces[0].x, 1.0, 1e-15);
    assert_approx_eq!(forces[0].y, 0.0, 1e-15);
    assert_approx_eq!(forces[1].x, -1.0, 1e-15);
    assert_approx_eq!(forces[1].y, 0.0, 1e-15);
}

#[test]
fn pair_forces_are_equal_and_opposite() {
    let bodies = common::three_bodies();
    for (i, body_a) in bodies.iter().enumerate() {
        for body_b in bodies[i+1..].iter() {
            let on_a = calculate_pair_force(1.0, body_a, body_b);
            let on_b = calculate_pair_force(1.0, body_b, body_a);
            assert_approx_eq!(on_a.norm(), on_b.norm(), 1e-14);
            assert_approx_eq!(on_a.x, -on_b.x, 1e-14);
            assert_approx_eq!(on_a.y, -on_b.y, 1e-14);
        }
    }
}

#[test]
fn net_force_of_closed_system_vanishes() {
    let forces = calculate_forces(1.0, &common::three_bodies());
    let total = forces.iter().fold(Axes::zero(), |t, f| Axes::new(t.x + f.x, t.y + f.y));
    assert_approx_eq!(total.x, 0.0, 1e-14);
    assert_approx_eq!(total.y, 0.0, 1e-14);
}

#[test]
fn force_points_towards_the_other_body() {
    let a = Body::new("A", 1.0, Axes::new(1., 1.), Axes::zero());
    let b = Body::new("B", 1.0, Axes::new(4., 5.), Axes::zero());
    let force = calculate_pair_force(1.0, &a, &b);
    // Distance 5, direction (3/5, 4/5)
    assert_approx_eq!(force.x, 0.04 * 0.6, 1e-15);
    assert_approx_eq!(force.y, 0.04 * 0.8, 1e-15);
}

#[test]
fn force_follows_the_inverse_square_law() {
    let a = Body::new("A", 5.972e24, Axes::zero(), Axes::zero());
    let near = Body::new("Near", 7.348e22, Axes::new(1.0e8, 0.), Axes::zero());
    let far = Body::new("Far", 7.348e22, Axes::new(2.0e8, 0.), Axes::zero());
    let ratio = calculate_pair_force(G_SI, &a, &near).norm() / calculate_pair_force(G_SI, &a, &far).norm();
    assert_approx_eq!(ratio, 4.0, 1e-12);
}

#[test]
fn coincident_bodies_exert_no_force() {
    let bodies = vec![
        Body::new("A", 1.0, Axes::new(2., 3.), Axes::zero()),
        Body::new("B", 4.0, Axes::new(2., 3.), Axes::zero()),
        Body::new("C", 1.0, Axes::new(3., 3.), Axes::zero()),
    ];
    let forces = calculate_forces(1.0, &bodies);
    assert!(forces.iter().all(|force| force.is_finite()));
    // A and B only feel C
    assert_eq!(forces[0], Axes::new(1.0, 0.0));
    assert_eq!(forces[1], Axes::new(4.0, 0.0));
    assert_eq!(calculate_pair_force(1.0, &bodies[0], &bodies[1]), Axes::zero());
}

#[test]
fn a_lonely_body_feels_nothing() {
    let bodies = vec![Body::new("Alone", 1.0e30, Axes::new(1., 2.), Axes::new(3., 4.))];
    assert_eq!(calculate_forces(G_SI, &bodies), vec![Axes::zero()]);
    assert!(calculate_forces(G_SI, &[]).is_empty());
}
