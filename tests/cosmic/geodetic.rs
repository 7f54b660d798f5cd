extern crate pretty_env_logger as pel;

use rstest::rstest;
use tethys::cosmic::Earth;
use tethys::time::Epoch;
use tethys::{ItrfState, LlaState};

#[rstest]
#[case(45.0, 10.0, 0.0)]
#[case(45.0, 10.0, 500.0)]
#[case(-30.0, 250.0, 1_000.0)]
#[case(10.0, -75.0, 35.786)]
#[case(63.4, 185.0, 0.8)]
fn lla_round_trip(#[case] lat_deg: f64, #[case] long_deg: f64, #[case] alt_km: f64) {
    let _ = pel::try_init();
    let epoch = Epoch::from_gregorian_utc_at_noon(2019, 6, 6);
    let lla = LlaState::new(lat_deg.to_radians(), long_deg.to_radians(), alt_km).unwrap();
    let back = ItrfState::from_position(epoch, lla.itrf_position()).lla_state();
    assert!(
        (back.latitude - lla.latitude).abs() < 1e-9,
        "latitude off: {:.2e} rad",
        (back.latitude - lla.latitude).abs()
    );
    assert!(
        (back.longitude - lla.longitude).abs() < 1e-9,
        "longitude off: {:.2e} rad",
        (back.longitude - lla.longitude).abs()
    );
    assert!(
        (back.altitude - lla.altitude).abs() < 1e-6,
        "altitude off: {:.2e} km",
        (back.altitude - lla.altitude).abs()
    );
}

#[test]
fn surface_point_altitude_is_zero() {
    let epoch = Epoch::from_gregorian_utc_at_noon(2019, 6, 6);
    // A point on the equator at the reference radius sits on the ellipsoid
    let itrf = ItrfState::from_position(
        epoch,
        tethys::linalg::Vector3::new(Earth::RADIUS, 0.0, 0.0),
    );
    let lla = itrf.lla_state();
    assert!(lla.latitude.abs() < 1e-12);
    assert!(lla.longitude.abs() < 1e-12);
    assert!(lla.altitude.abs() < 1e-9);
}

#[test]
fn geodetic_latitude_exceeds_geocentric() {
    // On an oblate ellipsoid the geodetic latitude of a mid-latitude surface
    // point is larger than its geocentric declination.
    let epoch = Epoch::from_gregorian_utc_at_noon(2019, 6, 6);
    let lla = LlaState::new(0.7, 0.3, 0.0).unwrap();
    let p = lla.itrf_position();
    let geocentric = (p[2] / p.norm()).asin();
    assert!(lla.latitude > geocentric);
    assert!(lla.latitude - geocentric < 0.01);
}
