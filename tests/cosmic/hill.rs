extern crate pretty_env_logger as pel;

use tethys::cosmic::Earth;
use tethys::linalg::Vector3;
use tethys::time::Epoch;
use tethys::{GcrfState, HillState};

#[test]
fn zero_hill_state_is_the_origin() {
    let epoch = Epoch::from_gregorian_tai_at_noon(2020, 3, 4);
    let origin = GcrfState::new(
        epoch,
        Vector3::new(-2_436.45, -2_436.45, 6_891.037),
        Vector3::new(5.088_611, -5.088_611, 0.0),
    );
    let hill = HillState::new(epoch, Vector3::zeros(), Vector3::zeros());
    let back = hill.to_gcrf(&origin);
    assert!((back.position - origin.position).norm() < 1e-10);
    assert!((back.velocity - origin.velocity).norm() < 1e-12);
    // And the origin maps to the zero Hill state
    let fwd = origin.hill_state(&origin);
    assert!(fwd.position.norm() < 1e-9);
    assert!(fwd.velocity.norm() < 1e-12);
}

#[test]
fn hill_round_trip() {
    let _ = pel::try_init();
    let epoch = Epoch::from_gregorian_tai_at_noon(2020, 3, 4);
    let origin = GcrfState::new(
        epoch,
        Vector3::new(6_678.0, 1_492.0, 2_100.0),
        Vector3::new(-1.8, 6.9, 1.2),
    );
    let vehicle = GcrfState::new(
        epoch,
        origin.position + Vector3::new(12.5, -40.0, 3.1),
        origin.velocity + Vector3::new(0.01, 0.003, -0.02),
    );
    let hill = HillState::from_gcrf(&vehicle, &origin);
    let back = hill.to_gcrf(&origin);
    assert!(
        (back.position - vehicle.position).norm() < 1e-6,
        "position round trip off: {:.2e} km",
        (back.position - vehicle.position).norm()
    );
    assert!(
        (back.velocity - vehicle.velocity).norm() < 1e-9,
        "velocity round trip off"
    );
}

#[test]
fn trailing_vehicle_on_circular_orbit_is_pure_in_track() {
    // Two vehicles on the same circular equatorial orbit, 2 degrees apart:
    // in the curvilinear frame the separation is an arc along the track and
    // the relative velocity vanishes.
    let epoch = Epoch::from_gregorian_tai_at_noon(2020, 3, 4);
    let radius = 7_000.0;
    let speed = (Earth::MU / radius).sqrt();
    let theta = 2.0_f64.to_radians();
    let origin = GcrfState::new(
        epoch,
        Vector3::new(radius, 0.0, 0.0),
        Vector3::new(0.0, speed, 0.0),
    );
    let vehicle = GcrfState::new(
        epoch,
        radius * Vector3::new(theta.cos(), theta.sin(), 0.0),
        speed * Vector3::new(-theta.sin(), theta.cos(), 0.0),
    );
    let hill = vehicle.hill_state(&origin);
    assert!(hill.position[0].abs() < 1e-9, "radial offset not zero");
    assert!(
        (hill.position[1] - radius * theta).abs() < 1e-9,
        "in-track arc is not r*theta"
    );
    assert!(hill.position[2].abs() < 1e-9, "cross-track not zero");
    assert!(hill.velocity.norm() < 1e-12, "relative rate not zero");
}
