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

use super::bodies::Earth;
use crate::errors::AstroError;
use crate::na::Vector3;
use crate::utils::between_0_2pi;
use serde_derive::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::fmt;

/// A geodetic position: latitude, longitude and altitude over the WGS-84 ellipsoid.
///
/// Latitude is geodetic (normal to the ellipsoid, not to the geocenter) in
/// [-π/2, π/2]; longitude is normalized into [0, 2π).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LlaState {
    /// in radians
    pub latitude: f64,
    /// in radians
    pub longitude: f64,
    /// in km above the ellipsoid
    pub altitude: f64,
}

impl LlaState {
    /// Creates a new geodetic position, normalizing the longitude into [0, 2π).
    ///
    /// **Units:** radians, radians, km
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self, AstroError> {
        if !(-FRAC_PI_2..=FRAC_PI_2).contains(&latitude) {
            return Err(AstroError::LatitudeOutOfBounds {
                latitude_rad: latitude,
            });
        }
        Ok(Self {
            latitude,
            longitude: between_0_2pi(longitude),
            altitude,
        })
    }

    /// Returns the Earth-fixed Cartesian position of this geodetic point, in km.
    ///
    /// Forward computation over the prime vertical radius of curvature.
    /// Reference: G. Xu and Y. Xu, "GPS", DOI 10.1007/978-3-662-50367-6_2, 2016.
    pub fn itrf_position(&self) -> Vector3<f64> {
        let f = Earth::FLATTENING;
        let e2 = 2.0 * f - f.powi(2);
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let (sin_long, cos_long) = self.longitude.sin_cos();
        let c_body = Earth::RADIUS / (1.0 - e2 * sin_lat.powi(2)).sqrt();
        let s_body = (Earth::RADIUS * (1.0 - f).powi(2)) / (1.0 - e2 * sin_lat.powi(2)).sqrt();
        Vector3::new(
            (c_body + self.altitude) * cos_lat * cos_long,
            (c_body + self.altitude) * cos_lat * sin_long,
            (s_body + self.altitude) * sin_lat,
        )
    }
}

impl fmt::Display for LlaState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "latitude = {:.6} deg\tlongitude = {:.6} deg\taltitude = {:.6} km",
            self.latitude.to_degrees(),
            self.longitude.to_degrees(),
            self.altitude
        )
    }
}
