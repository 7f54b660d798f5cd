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

use super::AccelModel;
use crate::cosmic::{Earth, GcrfState, ItrfState, SphericalPosition};
use crate::errors::AstroError;
use crate::na::Vector3;

/// The non-spherical Earth gravity perturbation, evaluated over the on-board
/// JGM-3 unnormalized coefficient tables.
///
/// Associated Legendre recursion and spherical-potential partials after
/// Vallado, "Fundamentals of Astrodynamics and Applications", 4th ed.,
/// Eq. 8-56/8-57. The two-body term is excluded (sums start at degree 2).
#[derive(Copy, Clone, Debug)]
pub struct Harmonics {
    pub degree: usize,
    pub order: usize,
}

impl Harmonics {
    /// Creates a gravity field truncated at the provided degree and order.
    ///
    /// Both are clamped to what the coefficient tables carry, and the order
    /// to the degree.
    pub fn new(degree: usize, order: usize) -> Self {
        let mut degree = degree;
        if degree > Earth::DEGREE_AND_ORDER {
            warn!(
                "gravity field truncated to degree {}",
                Earth::DEGREE_AND_ORDER
            );
            degree = Earth::DEGREE_AND_ORDER;
        }
        Self {
            degree,
            order: order.min(degree),
        }
    }

    /// Creates the full field carried by the coefficient tables.
    pub fn full_field() -> Self {
        Self::new(Earth::DEGREE_AND_ORDER, Earth::DEGREE_AND_ORDER)
    }

    /// Unnormalized associated Legendre values `P[n][m](sin φ)`, by recursion
    /// up to `self.degree`, with one extra order so that the φ-partial can
    /// read `P[n][m+1]`.
    fn legendre(&self, sin_phi: f64, cos_phi: f64) -> Vec<Vec<f64>> {
        let nmax = self.degree;
        let mut p = vec![vec![0.0; nmax + 2]; nmax + 1];
        p[0][0] = 1.0;
        if nmax >= 1 {
            p[1][0] = sin_phi;
            p[1][1] = cos_phi;
        }
        for n in 2..=nmax {
            let nf = n as f64;
            p[n][0] = ((2.0 * nf - 1.0) * sin_phi * p[n - 1][0] - (nf - 1.0) * p[n - 2][0]) / nf;
            for m in 1..n {
                p[n][m] = p[n - 2][m] + (2.0 * nf - 1.0) * cos_phi * p[n - 1][m - 1];
            }
            p[n][n] = (2.0 * nf - 1.0) * cos_phi * p[n - 1][n - 1];
        }
        p
    }
}

impl AccelModel for Harmonics {
    fn eom(&self, state: &GcrfState) -> Result<Vector3<f64>, AstroError> {
        // The potential is fixed to the rotating Earth, so evaluate in ITRF
        // and rotate the acceleration back.
        let pos_ecef = state.itrf_position();
        let sph = SphericalPosition::from_cartesian(&pos_ecef);
        let (sin_phi, cos_phi) = sph.declination.sin_cos();
        let tan_phi = sin_phi / cos_phi;
        let p = self.legendre(sin_phi, cos_phi);

        let mu_over_r = Earth::MU / sph.radius;
        let ratio = Earth::RADIUS / sph.radius;

        // Partials of the disturbing potential with respect to radius,
        // geocentric latitude and longitude (Vallado Eq. 8-56).
        let mut du_dr = 0.0;
        let mut du_dphi = 0.0;
        let mut du_dlambda = 0.0;
        let mut ratio_n = ratio;
        for n in 2..=self.degree {
            let nf = n as f64;
            ratio_n *= ratio;
            for m in 0..=n.min(self.order) {
                let mf = m as f64;
                let (sin_ml, cos_ml) = (mf * sph.right_ascension).sin_cos();
                let c_nm = Earth::C[n][m];
                let s_nm = Earth::S[n][m];
                let trig = c_nm * cos_ml + s_nm * sin_ml;
                du_dr += ratio_n * (nf + 1.0) * p[n][m] * trig;
                du_dphi += ratio_n * (p[n][m + 1] - mf * tan_phi * p[n][m]) * trig;
                du_dlambda += ratio_n * mf * p[n][m] * (s_nm * cos_ml - c_nm * sin_ml);
            }
        }
        du_dr *= -mu_over_r / sph.radius;
        du_dphi *= mu_over_r;
        du_dlambda *= mu_over_r;

        // Map the spherical partials to a Cartesian Earth-fixed acceleration
        // (Vallado Eq. 8-57).
        let (x, y, z) = (pos_ecef[0], pos_ecef[1], pos_ecef[2]);
        let r2 = sph.radius.powi(2);
        let rxy2 = x.powi(2) + y.powi(2);
        let rxy = rxy2.sqrt();
        let radial_term = du_dr / sph.radius - z * du_dphi / (r2 * rxy);
        let lambda_term = du_dlambda / rxy2;
        let accel_ecef = Vector3::new(
            radial_term * x - lambda_term * y,
            radial_term * y + lambda_term * x,
            z * du_dr / sph.radius + rxy * du_dphi / r2,
        );

        Ok(ItrfState::from_position(state.epoch, accel_ecef).gcrf_position())
    }
}
