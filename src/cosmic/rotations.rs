/*
    Tethys, orbital states and reference frames
    Copyright (C) 2025 The tethys authors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

//! Rotations of the ITRF ↔ TOD ↔ MOD ↔ GCRF frame chain.
//!
//! Each rotation is a pure function of the epoch and of Earth's physical
//! constants, so they are exposed as free functions returning direction
//! cosine matrices. A vector is moved down the chain (GCRF to ITRF) by
//! applying `precession_dcm`, `nutation_dcm` then `sidereal_dcm`, and back up
//! by applying the transposes in reverse order. Both composites are provided.
//!
//! Degenerate epochs are not guarded: a NaN epoch propagates NaN through
//! every matrix.

use super::bodies::{centuries_past_j2000, days_past_j2000, Earth};
use super::JD_J2000;
use crate::na::Matrix3;
use crate::time::Epoch;
use crate::utils::{arcsec_to_rad, between_0_2pi, r1, r2, r3};

/// Returns the Greenwich Mean Sidereal Time at the provided epoch, in radians in [0, 2π).
///
/// IAU-82 polynomial (Vallado Eq. 3-47), evaluated on the UTC Julian date as
/// an approximation of UT1.
pub fn gmst(epoch: Epoch) -> f64 {
    let d = epoch.to_jde_utc_days() - JD_J2000;
    let t = d / super::DAYS_PER_CENTURY;
    let gmst_deg = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t.powi(2)
        - t.powi(3) / 38_710_000.0;
    between_0_2pi(gmst_deg.to_radians())
}

/// Returns the nutation in longitude and in obliquity `(Δψ, Δε)` at the provided epoch, in radians.
///
/// Two-term approximation over the lunar ascending node and the mean
/// longitude of the Sun (USNO low-precision form), good to about 0.5
/// arcseconds.
pub fn nutation_angles(epoch: Epoch) -> (f64, f64) {
    let d = days_past_j2000(epoch);
    // Longitude of the lunar ascending node and twice the solar mean longitude, in radians
    let omega = (125.0 - 0.052_95 * d).to_radians();
    let l2 = (200.9 + 1.971_29 * d).to_radians();
    let dpsi = (-0.004_8 * omega.sin() - 0.000_4 * l2.sin()).to_radians();
    let deps = (0.002_6 * omega.cos() + 0.000_2 * l2.cos()).to_radians();
    (dpsi, deps)
}

/// Returns the mean obliquity of the ecliptic at the provided epoch, in radians.
pub fn mean_obliquity(epoch: Epoch) -> f64 {
    Earth::obliquity_of_ecliptic_at_epoch(epoch)
}

/// Returns the Greenwich Apparent Sidereal Time at the provided epoch, in radians in [0, 2π).
///
/// GMST corrected by the equation of the equinoxes, `Δψ·cos(ε̄)`.
pub fn gast(epoch: Epoch) -> f64 {
    let (dpsi, _) = nutation_angles(epoch);
    between_0_2pi(gmst(epoch) + dpsi * mean_obliquity(epoch).cos())
}

/// Returns the TOD → ITRF direction cosine matrix at the provided epoch.
///
/// A single rotation about the Z axis by the Greenwich Apparent Sidereal
/// Time: polar motion is not modeled.
pub fn sidereal_dcm(epoch: Epoch) -> Matrix3<f64> {
    r3(gast(epoch))
}

/// Returns the GCRF → MOD direction cosine matrix at the provided epoch.
///
/// IAU-76 precession: the equatorial angles ζ, θ, z are cubic polynomials in
/// Julian centuries (TT) with arcsecond coefficients (Vallado Eq. 3-57),
/// composed as `R3(-z)·R2(θ)·R3(-ζ)`.
pub fn precession_dcm(epoch: Epoch) -> Matrix3<f64> {
    let t = centuries_past_j2000(epoch);
    let zeta = arcsec_to_rad(2_306.218_1 * t + 0.301_88 * t.powi(2) + 0.017_998 * t.powi(3));
    let theta = arcsec_to_rad(2_004.310_9 * t - 0.426_65 * t.powi(2) - 0.041_833 * t.powi(3));
    let z = arcsec_to_rad(2_306.218_1 * t + 1.094_68 * t.powi(2) + 0.018_203 * t.powi(3));
    r3(-z) * r2(theta) * r3(-zeta)
}

/// Returns the MOD → TOD direction cosine matrix at the provided epoch.
///
/// Small-angle nutation matrix `R1(-(ε̄+Δε))·R3(-Δψ)·R1(ε̄)` over the
/// two-term nutation angles and the mean obliquity.
pub fn nutation_dcm(epoch: Epoch) -> Matrix3<f64> {
    let (dpsi, deps) = nutation_angles(epoch);
    let eps_mean = mean_obliquity(epoch);
    r1(-(eps_mean + deps)) * r3(-dpsi) * r1(eps_mean)
}

/// Returns the GCRF → ITRF direction cosine matrix at the provided epoch.
pub fn dcm_gcrf_to_itrf(epoch: Epoch) -> Matrix3<f64> {
    sidereal_dcm(epoch) * nutation_dcm(epoch) * precession_dcm(epoch)
}

/// Returns the ITRF → GCRF direction cosine matrix at the provided epoch.
///
/// Exact transpose composition of [dcm_gcrf_to_itrf]: the round trip of any
/// vector through both is an identity modulo floating point.
pub fn dcm_itrf_to_gcrf(epoch: Epoch) -> Matrix3<f64> {
    precession_dcm(epoch).transpose() * nutation_dcm(epoch).transpose()
        * sidereal_dcm(epoch).transpose()
}
