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

use crate::na::Vector3;
use crate::utils::between_0_2pi;
use serde_derive::{Deserialize, Serialize};

/// A position in spherical coordinates: radius, right ascension and declination.
///
/// Always recomputed from a Cartesian vector, never stored by the state
/// types. The declination is geocentric (measured from the equatorial plane),
/// which is what the gravity-harmonics evaluation needs.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphericalPosition {
    /// in km
    pub radius: f64,
    /// in radians, [0, 2π)
    pub right_ascension: f64,
    /// in radians, [-π/2, π/2]
    pub declination: f64,
}

impl SphericalPosition {
    /// Builds the spherical coordinates of the provided Cartesian position.
    pub fn from_cartesian(position: &Vector3<f64>) -> Self {
        let radius = position.norm();
        Self {
            radius,
            right_ascension: between_0_2pi(position[1].atan2(position[0])),
            declination: (position[2] / radius).asin(),
        }
    }

    /// Returns the Cartesian position of these spherical coordinates, in km.
    pub fn to_cartesian(&self) -> Vector3<f64> {
        let (sin_ra, cos_ra) = self.right_ascension.sin_cos();
        let (sin_decl, cos_decl) = self.declination.sin_cos();
        self.radius * Vector3::new(cos_decl * cos_ra, cos_decl * sin_ra, sin_decl)
    }
}
