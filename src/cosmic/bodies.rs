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

use super::{AU, DAYS_PER_CENTURY, JD_J2000};
use crate::na::Vector3;
use crate::time::Epoch;
use crate::utils::between_0_2pi;

/// Earth physical constants and gravity field.
///
/// The gravity coefficient tables are the unnormalized JGM-3 coefficients up
/// to degree and order four. They are process-wide read-only data and may be
/// shared across threads without locking.
pub struct Earth;

#[allow(clippy::excessive_precision)]
impl Earth {
    /// Gravitational parameter, in km^3/s^2 (JGM-3).
    pub const MU: f64 = 398_600.441_8;
    /// Equatorial radius, in km (WGS-84).
    pub const RADIUS: f64 = 6_378.137;
    /// Flattening of the reference ellipsoid (WGS-84).
    pub const FLATTENING: f64 = 1.0 / 298.257_223_563;
    /// Rotation rate, in rad/s.
    pub const ROTATION_RATE: f64 = 7.292_115_146_706_4e-5;
    /// Maximum degree and order of the gravity field carried in `C` and `S`.
    pub const DEGREE_AND_ORDER: usize = 4;

    /// Unnormalized cosine gravity coefficients `C[n][m]`, JGM-3.
    ///
    /// `C[2][0]` is the negative of the familiar J2 zonal term.
    pub const C: [[f64; 5]; 5] = [
        [1.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0],
        [-1.082_626_683_55e-3, 0.0, 1.574_460_374_56e-6, 0.0, 0.0],
        [
            2.532_656_485_33e-6,
            2.192_638_529_17e-6,
            3.090_160_452_77e-7,
            1.005_583_974_00e-7,
            0.0,
        ],
        [
            1.619_897_599_92e-6,
            -5.087_993_604_04e-7,
            7.841_758_598_44e-8,
            5.920_994_026_29e-8,
            -3.984_074_117_66e-9,
        ],
    ];

    /// Unnormalized sine gravity coefficients `S[n][m]`, JGM-3.
    pub const S: [[f64; 5]; 5] = [
        [0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, -9.038_038_066_39e-7, 0.0, 0.0],
        [0.0, 2.684_248_902_97e-7, -2.114_376_124_37e-7, 1.972_225_590_06e-7, 0.0],
        [
            0.0,
            -4.491_446_528_39e-7,
            1.481_778_682_96e-7,
            -1.201_296_674_47e-8,
            6.525_714_253_70e-9,
        ],
    ];

    /// Returns the mean obliquity of the ecliptic at the provided epoch, in radians.
    ///
    /// IAU-76 cubic polynomial in Julian centuries (TT) past J2000, coefficients
    /// in arcseconds (84381.448" at J2000).
    pub fn obliquity_of_ecliptic_at_epoch(epoch: Epoch) -> f64 {
        let t = centuries_past_j2000(epoch);
        crate::utils::arcsec_to_rad(
            84_381.448 - 46.815_0 * t - 0.000_59 * t.powi(2) + 0.001_813 * t.powi(3),
        )
    }
}

/// Sun constants and a low-precision analytic ephemeris.
pub struct Sun;

impl Sun {
    /// Gravitational parameter, in km^3/s^2.
    pub const MU: f64 = 1.327_124_400_18e11;

    /// Effective solar radiation pressure acceleration at 1 AU, in km/s^2.
    ///
    /// The spacecraft area-to-mass ratio and reflectivity are baked into this
    /// constant (A/m = 0.01 m^2/kg, Cr = 1.3 over the 4.56e-6 N/m^2 flux).
    pub const P: f64 = 5.936_385e-11;

    /// Returns the GCRF position of the Sun at the provided epoch, in km.
    ///
    /// Low-precision analytic ephemeris, Vallado 4th Ed. Algorithm 29: accurate
    /// to about 0.01 degrees, plenty for third-body and SRP perturbations.
    pub fn position(epoch: Epoch) -> Vector3<f64> {
        let t = centuries_past_j2000(epoch);
        // Mean longitude and mean anomaly of the Sun, in degrees
        let lambda_m = 280.460 + 36_000.771 * t;
        let m = (357.529_109_2 + 35_999.050_34 * t).to_radians();
        // Ecliptic longitude, in radians
        let lambda_ecl = (lambda_m + 1.914_666_471 * m.sin() + 0.019_994_643 * (2.0 * m).sin())
            .to_radians();
        // Distance in AU
        let r = 1.000_140_612 - 0.016_708_617 * m.cos() - 0.000_139_589 * (2.0 * m).cos();
        let eps = Earth::obliquity_of_ecliptic_at_epoch(epoch);
        let (sin_lambda, cos_lambda) = lambda_ecl.sin_cos();
        let (sin_eps, cos_eps) = eps.sin_cos();
        r * AU * Vector3::new(cos_lambda, cos_eps * sin_lambda, sin_eps * sin_lambda)
    }
}

/// Moon constants and a low-precision analytic ephemeris.
pub struct Moon;

impl Moon {
    /// Gravitational parameter, in km^3/s^2.
    pub const MU: f64 = 4_902.800_066;

    /// Returns the GCRF position of the Moon at the provided epoch, in km.
    ///
    /// Low-precision analytic ephemeris, Vallado 4th Ed. Algorithm 31: the
    /// ecliptic series is truncated, good to roughly 0.3 degrees.
    pub fn position(epoch: Epoch) -> Vector3<f64> {
        let t = centuries_past_j2000(epoch);
        let sin_d = |deg: f64| deg.to_radians().sin();
        let cos_d = |deg: f64| deg.to_radians().cos();
        // Ecliptic longitude, latitude (degrees) and horizontal parallax
        let lambda_ecl = 218.32 + 481_267.881_3 * t
            + 6.29 * sin_d(134.9 + 477_198.85 * t)
            - 1.27 * sin_d(259.2 - 413_335.38 * t)
            + 0.66 * sin_d(235.7 + 890_534.23 * t)
            + 0.21 * sin_d(269.9 + 954_397.70 * t)
            - 0.19 * sin_d(357.5 + 35_999.05 * t)
            - 0.11 * sin_d(186.6 + 966_404.05 * t);
        let phi_ecl = 5.13 * sin_d(93.3 + 483_202.03 * t)
            + 0.28 * sin_d(228.2 + 960_400.87 * t)
            - 0.28 * sin_d(318.3 + 6_003.18 * t)
            - 0.17 * sin_d(217.6 - 407_332.20 * t);
        let parallax = 0.950_8
            + 0.051_8 * cos_d(134.9 + 477_198.85 * t)
            + 0.009_5 * cos_d(259.2 - 413_335.38 * t)
            + 0.007_8 * cos_d(235.7 + 890_534.23 * t)
            + 0.002_8 * cos_d(269.9 + 954_397.70 * t);

        let r = Earth::RADIUS / parallax.to_radians().sin();
        let eps = Earth::obliquity_of_ecliptic_at_epoch(epoch);
        let lambda = between_0_2pi(lambda_ecl.to_radians());
        let phi = phi_ecl.to_radians();
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_eps, cos_eps) = eps.sin_cos();
        r * Vector3::new(
            cos_phi * cos_lambda,
            cos_eps * cos_phi * sin_lambda - sin_eps * sin_phi,
            sin_eps * cos_phi * sin_lambda + cos_eps * sin_phi,
        )
    }
}

/// The bodies whose gravity may perturb an Earth-centered state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// Returns the gravitational parameter of this body, in km^3/s^2.
    pub fn gm(&self) -> f64 {
        match *self {
            Self::Sun => Sun::MU,
            Self::Moon => Moon::MU,
        }
    }

    /// Returns the GCRF position of this body at the provided epoch, in km.
    pub fn position(&self, epoch: Epoch) -> Vector3<f64> {
        match *self {
            Self::Sun => Sun::position(epoch),
            Self::Moon => Moon::position(epoch),
        }
    }

    /// Returns the human name
    pub fn name(&self) -> &'static str {
        match *self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// Returns the number of Julian centuries (TT) elapsed since J2000 at the provided epoch.
pub fn centuries_past_j2000(epoch: Epoch) -> f64 {
    (epoch.to_jde_tt_days() - JD_J2000) / DAYS_PER_CENTURY
}

/// Returns the number of days elapsed since J2000 at the provided epoch (UTC scale).
pub fn days_past_j2000(epoch: Epoch) -> f64 {
    epoch.to_jde_utc_days() - JD_J2000
}
