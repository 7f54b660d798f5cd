extern crate pretty_env_logger as pel;

use std::sync::Arc;

use tethys::cosmic::{Body, Earth, Sun};
use tethys::dynamics::{AccelModel, Harmonics, OrbitalDynamics, PointMasses, SolarPressure};
use tethys::linalg::Vector3;
use tethys::time::Epoch;
use tethys::GcrfState;

fn leo_state() -> GcrfState {
    GcrfState::new(
        Epoch::from_gregorian_utc_at_noon(2017, 1, 15),
        Vector3::new(7_000.0, 0.0, 0.0),
        Vector3::new(0.0, 7.546, 0.0),
    )
}

#[test]
fn two_body_eom_is_the_point_mass_acceleration() {
    let _ = pel::try_init();
    let state = leo_state();
    let dynamics = OrbitalDynamics::two_body();
    let deriv = dynamics.eom(&state).unwrap();
    let expected_accel = -Earth::MU * state.position / state.rmag().powi(3);
    for i in 0..3 {
        assert!((deriv[i] - state.velocity[i]).abs() < 1e-15);
        assert!((deriv[i + 3] - expected_accel[i]).abs() < 1e-15);
    }
}

#[test]
fn harmonics_magnitude_at_leo() {
    let state = leo_state();
    let accel = state.acceleration_from_gravity().unwrap();
    // J2 dominates: about 1e-5 km/s^2 at 7000 km
    assert!(
        (1e-6..1e-4).contains(&accel.norm()),
        "harmonics acceleration out of range: {:.3e} km/s^2",
        accel.norm()
    );
    // The oblateness pull at low declination is toward the Earth
    assert!(accel.dot(&state.r_hat()) < 0.0);
}

#[test]
fn j2_only_field_is_close_to_the_full_field() {
    let state = leo_state();
    let full = Harmonics::full_field().eom(&state).unwrap();
    let j2 = Harmonics::new(2, 0).eom(&state).unwrap();
    // Higher degrees and orders contribute a percent-level correction
    assert!((full - j2).norm() < 0.05 * full.norm());
}

#[test]
fn third_body_magnitudes_at_leo() {
    let state = leo_state();
    for (accel, body) in [
        (state.acceleration_from_moon().unwrap(), "moon"),
        (state.acceleration_from_sun().unwrap(), "sun"),
    ] {
        assert!(
            (1e-11..1e-7).contains(&accel.norm()),
            "{body} acceleration out of range: {:.3e} km/s^2",
            accel.norm()
        );
    }
}

#[test]
fn third_body_vanishes_at_the_geocenter() {
    // The direct and indirect terms cancel for a spacecraft at the origin
    let mut state = leo_state();
    state.position = Vector3::new(1e-3, 0.0, 0.0);
    let accel = PointMasses::new(&[Body::Sun, Body::Moon])
        .eom(&state)
        .unwrap();
    assert!(accel.norm() < 1e-13);
}

#[test]
fn srp_pushes_away_from_the_sun() {
    let state = leo_state();
    let accel = state.acceleration_from_srp().unwrap();
    assert!(((accel.norm() - Sun::P) / Sun::P).abs() < 1e-12);
    let sun_to_sc = state.position - Sun::position(state.epoch);
    assert!(accel.dot(&sun_to_sc) > 0.0);
}

#[test]
fn model_list_composes_additively() {
    let state = leo_state();
    let mut dynamics = OrbitalDynamics::point_masses(&[Body::Sun, Body::Moon]);
    dynamics.add_model(Arc::new(Harmonics::full_field()));
    dynamics.add_model(Arc::new(SolarPressure {}));
    let full = dynamics.eom(&state).unwrap();
    let two_body = OrbitalDynamics::two_body().eom(&state).unwrap();
    let perturbation = (full - two_body).norm();
    // Perturbations exist but stay far below the central term
    assert!(perturbation > 1e-6);
    assert!(perturbation < 0.01 * state.acceleration_from_earth().norm());
}

#[test]
fn derivative_sums_every_on_board_model() {
    let state = leo_state().with_thrust(Vector3::new(0.0, 1e-6, 0.0));
    let deriv = state.derivative().unwrap();
    let accel = state.acceleration_from_thrust()
        + state.acceleration_from_moon().unwrap()
        + state.acceleration_from_sun().unwrap()
        + state.acceleration_from_srp().unwrap()
        + state.acceleration_from_gravity().unwrap()
        + state.acceleration_from_earth();
    for i in 0..3 {
        assert!((deriv[i] - state.velocity[i]).abs() < 1e-15);
        assert!((deriv[i + 3] - accel[i]).abs() < 1e-15);
    }
}

#[test]
fn thrust_enters_the_dynamics_eom() {
    let thrust = Vector3::new(1e-5, -2e-5, 3e-6);
    let state = leo_state().with_thrust(thrust);
    let dynamics = OrbitalDynamics::two_body();
    let with = dynamics.eom(&state).unwrap();
    let without = dynamics.eom(&leo_state()).unwrap();
    for i in 0..3 {
        assert!((with[i + 3] - without[i + 3] - thrust[i]).abs() < 1e-15);
    }
}
