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

use super::rotations::dcm_gcrf_to_itrf;
use super::{HillState, ItrfState, TimeTagged};
use crate::na::{Vector3, Vector6};
use crate::time::Epoch;
use std::fmt;

/// An inertial spacecraft state in the Geocentric Celestial Reference Frame.
///
/// Position and velocity are expressed on equatorial mean-J2000 axes at
/// `epoch`. The only mutable field is `thrust`, set by an external controller
/// between derivative evaluations; every conversion returns a new value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GcrfState {
    pub epoch: Epoch,
    /// in km
    pub position: Vector3<f64>,
    /// in km/s
    pub velocity: Vector3<f64>,
    /// in km/s^2, defaults to zero
    pub thrust: Vector3<f64>,
}

impl GcrfState {
    /// Creates a new GCRF state at the provided epoch, with no thrust.
    ///
    /// **Units:** km, km/s
    pub fn new(epoch: Epoch, position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            epoch,
            position,
            velocity,
            thrust: Vector3::zeros(),
        }
    }

    /// Creates a new GCRF state from a `[x, y, z, vx, vy, vz]` vector.
    pub fn from_vec(epoch: Epoch, state: &Vector6<f64>) -> Self {
        Self::new(
            epoch,
            Vector3::new(state[0], state[1], state[2]),
            Vector3::new(state[3], state[4], state[5]),
        )
    }

    /// Reconstructs the absolute inertial state of a vehicle described by
    /// `hill` relative to the provided origin state.
    pub fn from_hill(origin: &GcrfState, hill: &HillState) -> Self {
        hill.to_gcrf(origin)
    }

    /// Returns the magnitude of the radius vector in km
    pub fn rmag(&self) -> f64 {
        self.position.norm()
    }

    /// Returns the magnitude of the velocity vector in km/s
    pub fn vmag(&self) -> f64 {
        self.velocity.norm()
    }

    /// Returns the unit vector in the direction of the state radius
    pub fn r_hat(&self) -> Vector3<f64> {
        self.position / self.rmag()
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

    /// Sets the thrust acceleration, in km/s^2.
    pub fn set_thrust(&mut self, thrust: Vector3<f64>) {
        self.thrust = thrust;
    }

    /// Returns a copy of this state with the provided thrust acceleration, in km/s^2.
    pub fn with_thrust(self, thrust: Vector3<f64>) -> Self {
        let mut me = self;
        me.set_thrust(thrust);
        me
    }

    /// Returns the Earth-fixed position of this state, in km.
    ///
    /// Applies the precession, nutation and sidereal rotations successively
    /// (GCRF → MOD → TOD → ITRF).
    pub fn itrf_position(&self) -> Vector3<f64> {
        dcm_gcrf_to_itrf(self.epoch) * self.position
    }

    /// Converts this state to the Earth-fixed frame.
    ///
    /// The velocity is moved through the same rotation chain as the position:
    /// the round trip with [ItrfState::gcrf_state] is exact, but this is not
    /// the velocity seen by an observer rotating with the Earth (no ω×r
    /// transport term).
    pub fn itrf_state(&self) -> ItrfState {
        let dcm = dcm_gcrf_to_itrf(self.epoch);
        ItrfState::new(self.epoch, dcm * self.position, dcm * self.velocity)
    }

    /// Converts this state to a Hill state relative to the provided origin.
    pub fn hill_state(&self, origin: &GcrfState) -> HillState {
        HillState::from_gcrf(self, origin)
    }
}

impl TimeTagged for GcrfState {
    fn epoch(&self) -> Epoch {
        self.epoch
    }

    fn set_epoch(&mut self, epoch: Epoch) {
        self.epoch = epoch;
    }
}

impl fmt::Display for GcrfState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[GCRF {}] position = [{:.6}, {:.6}, {:.6}] km\tvelocity = [{:.6}, {:.6}, {:.6}] km/s",
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
