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

use super::{GcrfState, TimeTagged};
use crate::na::{Matrix3, Vector3, Vector6};
use crate::time::Epoch;
use crate::utils::{r2, r3};
use std::fmt;

/// A relative state in the curvilinear Hill frame of an origin vehicle.
///
/// Axes are radial, in-track and cross-track (RIC). The in-track and
/// cross-track positions are arc lengths along the origin's orbital sphere,
/// not rectilinear offsets, so a vehicle trailing on the same circular orbit
/// keeps a constant in-track coordinate regardless of separation.
/// Reference: Vallado, "Fundamentals of Astrodynamics and Applications",
/// 4th ed., §6.8 (EQCM).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HillState {
    pub epoch: Epoch,
    /// in km: radial offset, in-track arc, cross-track arc
    pub position: Vector3<f64>,
    /// in km/s, rates of the above
    pub velocity: Vector3<f64>,
}

impl HillState {
    /// Creates a new Hill state at the provided epoch.
    ///
    /// **Units:** km, km/s
    pub fn new(epoch: Epoch, position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            epoch,
            position,
            velocity,
        }
    }

    /// Returns the GCRF → RIC rotation matrix of the provided origin state.
    ///
    /// Rows are the radial unit vector, the in-track unit vector completing
    /// the triad, and the orbit-normal unit vector. NaN if the origin has a
    /// zero radius or zero angular momentum.
    pub fn frame_matrix(origin: &GcrfState) -> Matrix3<f64> {
        let r_hat = origin.position / origin.position.norm();
        let h = origin.position.cross(&origin.velocity);
        let c_hat = h / h.norm();
        let i_hat = c_hat.cross(&r_hat);
        Matrix3::from_rows(&[r_hat.transpose(), i_hat.transpose(), c_hat.transpose()])
    }

    /// Expresses `vehicle` in the curvilinear Hill frame of `origin`.
    ///
    /// Both states are rotated into the origin's RIC triad, then the vehicle
    /// is reduced to spherical coordinates about the geocenter so that the
    /// in-track and cross-track components become arc lengths at the origin's
    /// radius. Epochs are taken from `vehicle` and are not checked for
    /// consistency against `origin`.
    pub fn from_gcrf(vehicle: &GcrfState, origin: &GcrfState) -> Self {
        let m = Self::frame_matrix(origin);
        let magr_tgt = origin.rmag();
        let v_tgt_rsw = m * origin.velocity;
        let r_int_rsw = m * vehicle.position;
        let v_int_rsw = m * vehicle.velocity;
        let magr_int = r_int_rsw.norm();

        // Spherical angles of the vehicle in the origin's RIC triad. The
        // origin itself sits at (magr_tgt, 0, 0) with zero angles.
        let phi = (r_int_rsw[2] / magr_int).asin();
        let lambda = r_int_rsw[1].atan2(r_int_rsw[0]);
        let position = Vector3::new(
            magr_int - magr_tgt,
            lambda * magr_tgt,
            phi * magr_tgt,
        );

        // Rotate the vehicle velocity to its own local-level axes to read off
        // the radial rate and the angle rates.
        let v_int_loc = r2(-phi) * r3(lambda) * v_int_rsw;
        let lambda_dot_int = v_int_loc[1] / (magr_int * phi.cos());
        let phi_dot_int = v_int_loc[2] / magr_int;
        // The origin's angle rates in its own triad: no cross-track rate
        // since the velocity lies in the orbit plane.
        let lambda_dot_tgt = v_tgt_rsw[1] / magr_tgt;
        let velocity = Vector3::new(
            v_int_loc[0] - v_tgt_rsw[0],
            magr_tgt * (lambda_dot_int - lambda_dot_tgt),
            magr_tgt * phi_dot_int,
        );

        Self::new(vehicle.epoch, position, velocity)
    }

    /// Reconstructs the absolute inertial state of the vehicle described by
    /// this Hill state relative to the provided origin.
    ///
    /// Exact inverse of [HillState::from_gcrf]: the round trip reproduces the
    /// vehicle state within floating point.
    pub fn to_gcrf(&self, origin: &GcrfState) -> GcrfState {
        let m = Self::frame_matrix(origin);
        let magr_tgt = origin.rmag();
        let v_tgt_rsw = m * origin.velocity;

        let lambda = self.position[1] / magr_tgt;
        let phi = self.position[2] / magr_tgt;
        let magr_int = magr_tgt + self.position[0];
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let r_int_rsw = magr_int * Vector3::new(cos_phi * cos_lambda, cos_phi * sin_lambda, sin_phi);

        let lambda_dot_int = (self.velocity[1] + v_tgt_rsw[1]) / magr_tgt;
        let phi_dot_int = self.velocity[2] / magr_tgt;
        let v_int_loc = Vector3::new(
            self.velocity[0] + v_tgt_rsw[0],
            magr_int * lambda_dot_int * cos_phi,
            magr_int * phi_dot_int,
        );
        let v_int_rsw = r3(-lambda) * r2(phi) * v_int_loc;

        GcrfState::new(
            self.epoch,
            m.transpose() * r_int_rsw,
            m.transpose() * v_int_rsw,
        )
    }

    /// Returns this state as a Vector6 in [km, km, km, km/s, km/s, km/s]
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
}

impl TimeTagged for HillState {
    fn epoch(&self) -> Epoch {
        self.epoch
    }

    fn set_epoch(&mut self, epoch: Epoch) {
        self.epoch = epoch;
    }
}

impl fmt::Display for HillState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[Hill {}] position = [{:.6}, {:.6}, {:.6}] km\tvelocity = [{:.6}, {:.6}, {:.6}] km/s",
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
