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
use super::rotations::dcm_itrf_to_gcrf;
use super::{GcrfState, LlaState, TimeTagged};
use crate::na::{Vector3, Vector6};
use crate::time::Epoch;
use crate::utils::between_0_2pi;
use std::fmt;

/// An Earth-fixed spacecraft state in the International Terrestrial Reference Frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItrfState {
    pub epoch: Epoch,
    /// in km
    pub position: Vector3<f64>,
    /// in km/s
    pub velocity: Vector3<f64>,
}

impl ItrfState {
    /// Creates a new ITRF state at the provided epoch.
    ///
    /// **Units:** km, km/s
    pub fn new(epoch: Epoch, position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            epoch,
            position,
            velocity,
        }
    }

    /// Creates a new ITRF state at the provided epoch with zero velocity.
    pub fn from_position(epoch: Epoch, position: Vector3<f64>) -> Self {
        Self::new(epoch, position, Vector3::zeros())
    }

    /// Returns the magnitude of the radius vector in km
    pub fn rmag(&self) -> f64 {
        self.position.norm()
    }

    /// Returns this state as a Cartesian Vector6 in [km, km, km, km/s, km/s, km/s]
    pub fn to_vector(&self) -> Vector6<f64> {
        Vector6::new(
            self.position[0],
            self.position[1],
            self.position[2],
            self.velocity[0],
            self.velocity[1],
            self.velocity[2],
        )
    }

    /// Returns the inertial position of this state, in km.
    ///
    /// Applies the transposed sidereal, nutation and precession rotations
    /// successively (ITRF → TOD → MOD → GCRF), the algebraic inverse of
    /// [GcrfState::itrf_position]: the round trip reproduces the input within
    /// floating point.
    pub fn gcrf_position(&self) -> Vector3<f64> {
        dcm_itrf_to_gcrf(self.epoch) * self.position
    }

    /// Converts this state to the inertial frame.
    pub fn gcrf_state(&self) -> GcrfState {
        let dcm = dcm_itrf_to_gcrf(self.epoch);
        GcrfState::new(self.epoch, dcm * self.position, dcm * self.velocity)
    }

    /// Converts this position to geodetic latitude, longitude and altitude.
    ///
    /// Closed-form (non-iterative) solution on the WGS-84 ellipsoid,
    /// Heikkinen's exact quartic-root method. A position at the center of the
    /// Earth yields NaN coordinates, which propagate.
    pub fn lla_state(&self) -> LlaState {
        let a = Earth::RADIUS;
        let f = Earth::FLATTENING;
        let b = a * (1.0 - f);
        let e2 = f * (2.0 - f);
        // Second eccentricity squared
        let eps2 = e2 / (1.0 - e2);

        let (x, y, z) = (self.position[0], self.position[1], self.position[2]);
        let r = x.hypot(y);

        let big_f = 54.0 * b.powi(2) * z.powi(2);
        let g = r.powi(2) + (1.0 - e2) * z.powi(2) - e2 * (a.powi(2) - b.powi(2));
        let c = e2.powi(2) * big_f * r.powi(2) / g.powi(3);
        let s = (1.0 + c + (c.powi(2) + 2.0 * c).sqrt()).cbrt();
        let cap_p = big_f / (3.0 * (s + 1.0 / s + 1.0).powi(2) * g.powi(2));
        let cap_q = (1.0 + 2.0 * e2.powi(2) * cap_p).sqrt();
        // The radicand underflows to a small negative value near the poles
        // and the equator: clamp it to zero.
        let base = (0.5 * a.powi(2) * (1.0 + 1.0 / cap_q)
            - cap_p * (1.0 - e2) * z.powi(2) / (cap_q * (1.0 + cap_q))
            - 0.5 * cap_p * r.powi(2))
        .max(0.0);
        let r0 = -cap_p * e2 * r / (1.0 + cap_q) + base.sqrt();

        let u = ((r - e2 * r0).powi(2) + z.powi(2)).sqrt();
        let w = ((r - e2 * r0).powi(2) + (1.0 - e2) * z.powi(2)).sqrt();
        let d = b.powi(2) * z / (a * w);

        let altitude = u * (1.0 - b.powi(2) / (a * w));
        let latitude = ((z + eps2 * d) / r).atan();
        let longitude = between_0_2pi(y.atan2(x));

        LlaState {
            latitude,
            longitude,
            altitude,
        }
    }
}

impl TimeTagged for ItrfState {
    fn epoch(&self) -> Epoch {
        self.epoch
    }

    fn set_epoch(&mut self, epoch: Epoch) {
        self.epoch = epoch;
    }
}

impl fmt::Display for ItrfState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[ITRF {}] position = [{:.6}, {:.6}, {:.6}] km\tvelocity = [{:.6}, {:.6}, {:.6}] km/s",
            self.epoch,
            self.position[0],
            self.position[1],
            self.position[2],
            self.velocity[0],
            self.velocity[1],
            self.velocity[2]
        )
    }
}
