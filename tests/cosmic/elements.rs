extern crate pretty_env_logger as pel;

use rstest::rstest;
use tethys::cosmic::rotations::{nutation_dcm, precession_dcm};
use tethys::cosmic::Earth;
use tethys::time::Epoch;
use tethys::ClassicalElements;

macro_rules! f64_eq {
    ($x:expr, $val:expr, $msg:expr) => {
        assert!(
            ($x - $val).abs() < 1e-9,
            "{}: {:.2e}",
            $msg,
            ($x - $val).abs()
        )
    };
}

#[rstest]
#[case(0.0)]
#[case(0.1)]
#[case(0.3)]
#[case(0.7)]
#[case(0.9)]
#[case(0.99)]
fn kepler_resubstitution(#[case] ecc: f64) {
    let _ = pel::try_init();
    for ma_deg in [0.0, 10.0, 45.0, 90.0, 179.0, 181.0, 270.0, 359.0] {
        let ma = (ma_deg as f64).to_radians();
        let ea = ClassicalElements::mean_to_eccentric_anomaly(ma, ecc).unwrap();
        let resub = ea - ecc * ea.sin();
        // Compare as angles: a converged solution may sit a hair across 0/2π
        let mut err = (resub - ma).abs();
        if err > std::f64::consts::PI {
            err = (err - 2.0 * std::f64::consts::PI).abs();
        }
        assert!(
            err < 1e-10,
            "Kepler residual for e={ecc} M={ma_deg} deg: {err:.2e}"
        );
    }
}

#[test]
fn vis_viva_energy() {
    let epoch = Epoch::from_gregorian_tai_at_noon(2020, 3, 4);
    let oe = ClassicalElements::new(epoch, 8_191.93, 0.024_5, 0.224, 1.0, 2.0, 3.0).unwrap();
    let state = oe.to_gcrf_state().unwrap();
    let energy = state.vmag().powi(2) / 2.0 - Earth::MU / state.rmag();
    let expected = -Earth::MU / (2.0 * oe.sma);
    assert!(
        ((energy - expected) / expected).abs() < 1e-6,
        "orbital energy off: {energy} vs {expected}"
    );
}

#[test]
fn element_recovery_round_trip() {
    let epoch = Epoch::from_gregorian_tai_at_noon(2020, 3, 4);
    let oe = ClassicalElements::new(
        epoch,
        7_712.186,
        0.091,
        (63.434_f64).to_radians(),
        (135.0_f64).to_radians(),
        (90.0_f64).to_radians(),
        (17.0_f64).to_radians(),
    )
    .unwrap();
    let back = ClassicalElements::from_gcrf_state(&oe.to_gcrf_state().unwrap()).unwrap();
    f64_eq!(back.sma, oe.sma, "sma");
    f64_eq!(back.ecc, oe.ecc, "ecc");
    f64_eq!(back.inc, oe.inc, "inc");
    f64_eq!(back.raan, oe.raan, "raan");
    f64_eq!(back.aop, oe.aop, "aop");
    f64_eq!(back.mean_anomaly, oe.mean_anomaly, "mean anomaly");
}

#[test]
fn angular_momentum_matches_elements() {
    let epoch = Epoch::from_gregorian_tai_at_noon(2020, 3, 4);
    let oe = ClassicalElements::new(epoch, 7_500.0, 0.12, 1.1, 0.5, 4.0, 2.2).unwrap();
    let state = oe.to_gcrf_state().unwrap();
    let h = ClassicalElements::areal_velocity_from_r_and_v(&state.position, &state.velocity);
    assert!((h - state.position.cross(&state.velocity)).norm() < 1e-12);
    f64_eq!(
        ClassicalElements::inclination_from_w(&h),
        oe.inc,
        "inclination of the momentum vector"
    );
    f64_eq!(
        ClassicalElements::raan_from_w(&h),
        oe.raan,
        "node of the momentum vector"
    );
    let p = oe.sma * (1.0 - oe.ecc.powi(2));
    assert!(((h.norm() - (Earth::MU * p).sqrt()) / h.norm()).abs() < 1e-12);
}

#[test]
fn near_circular_leo_scenario() {
    let epoch = Epoch::from_gregorian_tai_at_noon(2020, 3, 4);
    let oe = ClassicalElements::new(epoch, 7_000.0, 0.001, 0.900_6, 0.3, 0.0, 0.0).unwrap();
    let state = oe.to_gcrf_state().unwrap();
    // At perigee of this near-circular orbit
    f64_eq!(state.rmag(), 7_000.0 * (1.0 - 0.001), "perigee radius");
    let v_circ = (Earth::MU / 7_000.0_f64).sqrt();
    assert!(
        ((state.vmag() - v_circ) / v_circ).abs() < 1.5e-3,
        "speed far from circular: {} vs {}",
        state.vmag(),
        v_circ
    );
    let v_exact = (Earth::MU * (2.0 / state.rmag() - 1.0 / oe.sma)).sqrt();
    f64_eq!(state.vmag(), v_exact, "vis-viva speed at perigee");
}

#[test]
fn greenwich_convention_is_a_precession_nutation_tilt() {
    // The Greenwich-referenced projection differs from the equinox-referenced
    // one by exactly the transposed precession-nutation composition: the
    // sidereal rotation cancels against the Earth-fixed route.
    let epoch = Epoch::from_gregorian_utc_at_noon(2017, 12, 2);
    let oe = ClassicalElements::new(epoch, 7_306.0, 0.018, 0.61, 2.2, 1.4, 0.9).unwrap();
    let direct = oe.to_gcrf_state().unwrap();
    let via = oe.to_gcrf_state_via_greenwich().unwrap();
    f64_eq!(via.rmag(), direct.rmag(), "radius norm across conventions");
    f64_eq!(via.vmag(), direct.vmag(), "velocity norm across conventions");
    let tilt = precession_dcm(epoch).transpose() * nutation_dcm(epoch).transpose();
    assert!((via.position - tilt * direct.position).norm() < 1e-9);
    assert!((via.velocity - tilt * direct.velocity).norm() < 1e-9);
}

#[test]
fn out_of_range_inclination_folds_to_the_same_orbit() {
    let epoch = Epoch::from_gregorian_tai_at_noon(2020, 3, 4);
    let oe = ClassicalElements::new(epoch, 7_500.0, 0.1, 4.0, 0.5, 1.0, 2.0).unwrap();
    // The stored inclination stays within [0, pi], with the node and perigee
    // on the opposite side of the plane
    assert!(oe.inc >= 0.0 && oe.inc <= std::f64::consts::PI);
    f64_eq!(oe.inc, 2.0 * std::f64::consts::PI - 4.0, "folded inclination");
    f64_eq!(oe.raan, 0.5 + std::f64::consts::PI, "shifted node");
    f64_eq!(oe.aop, 1.0 + std::f64::consts::PI, "shifted perigee");
    // And that representation agrees with the orbit it projects to
    let back = ClassicalElements::from_gcrf_state(&oe.to_gcrf_state().unwrap()).unwrap();
    f64_eq!(back.inc, oe.inc, "recovered inclination");
    f64_eq!(back.raan, oe.raan, "recovered raan");
    f64_eq!(back.aop, oe.aop, "recovered aop");
    f64_eq!(back.mean_anomaly, oe.mean_anomaly, "recovered mean anomaly");
    // The same plane described directly yields the same momentum direction
    let direct = ClassicalElements::new(
        epoch,
        7_500.0,
        0.1,
        2.0 * std::f64::consts::PI - 4.0,
        0.5 + std::f64::consts::PI,
        1.0 + std::f64::consts::PI,
        2.0,
    )
    .unwrap();
    let s1 = oe.to_gcrf_state().unwrap();
    let s2 = direct.to_gcrf_state().unwrap();
    assert!((s1.position - s2.position).norm() < 1e-9);
    assert!((s1.velocity - s2.velocity).norm() < 1e-12);
}

#[test]
fn period_and_mean_motion() {
    // GEO semi-major axis: the period is a sidereal day
    let sma = 42_164.0;
    let period = ClassicalElements::period_from_sma(sma);
    assert!((period - 86_164.0).abs() < 60.0);
    let n = ClassicalElements::mean_motion_from_sma(sma);
    assert!((n * period - 2.0 * std::f64::consts::PI).abs() < 1e-12);
}
