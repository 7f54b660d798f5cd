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

use super::sph_harmonics::Harmonics;
use super::solarpressure::SolarPressure;
use super::AccelModel;
use crate::cosmic::{Body, Earth, GcrfState};
use crate::errors::AstroError;
use crate::na::{Vector3, Vector6};
use std::fmt;
use std::sync::Arc;

/// The orbital dynamics: two-body gravity plus a list of perturbation models.
///
/// The point-mass Earth term is always applied; everything else comes from
/// `accel_models`. Models are behind `Arc`s so a dynamics value can be cloned
/// cheaply and shared across threads.
#[derive(Clone)]
pub struct OrbitalDynamics {
    pub accel_models: Vec<Arc<dyn AccelModel>>,
}

impl OrbitalDynamics {
    /// Initializes the orbital dynamics with the provided list of models.
    pub fn new(accel_models: Vec<Arc<dyn AccelModel>>) -> Self {
        Self { accel_models }
    }

    /// Initializes a purely two-body dynamics.
    pub fn two_body() -> Self {
        Self::new(Vec::new())
    }

    /// Initializes two-body dynamics perturbed by the provided third bodies.
    pub fn point_masses(bodies: &[Body]) -> Self {
        Self::new(vec![Arc::new(PointMasses::new(bodies))])
    }

    /// Adds a model to this dynamics.
    pub fn add_model(&mut self, model: Arc<dyn AccelModel>) {
        self.accel_models.push(model);
    }

    /// Returns the time derivative of the provided state: velocity and the
    /// total acceleration, in [km/s, km/s²].
    pub fn eom(&self, state: &GcrfState) -> Result<Vector6<f64>, AstroError> {
        let mut accel = state.acceleration_from_earth() + state.thrust;
        for model in &self.accel_models {
            accel += model.eom(state)?;
        }
        Ok(Vector6::new(
            state.velocity[0],
            state.velocity[1],
            state.velocity[2],
            accel[0],
            accel[1],
            accel[2],
        ))
    }
}

impl fmt::Display for OrbitalDynamics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "two-body dynamics with {} perturbation model(s)",
            self.accel_models.len()
        )
    }
}

/// The third-body gravity of a list of point-mass bodies.
///
/// Direct attraction on the spacecraft minus the indirect attraction on the
/// Earth, so the acceleration vanishes as the spacecraft approaches the
/// geocenter.
pub struct PointMasses {
    pub bodies: Vec<Body>,
}

impl PointMasses {
    pub fn new(bodies: &[Body]) -> Self {
        Self {
            bodies: bodies.to_vec(),
        }
    }
}

impl AccelModel for PointMasses {
    fn eom(&self, state: &GcrfState) -> Result<Vector3<f64>, AstroError> {
        let mut accel = Vector3::zeros();
        for body in &self.bodies {
            let r_body = body.position(state.epoch);
            let r_rel = r_body - state.position;
            accel += body.gm()
                * (r_rel / r_rel.norm().powi(3) - r_body / r_body.norm().powi(3));
        }
        Ok(accel)
    }
}

impl GcrfState {
    /// Returns the two-body gravitational acceleration on this state, in km/s².
    pub fn acceleration_from_earth(&self) -> Vector3<f64> {
        -Earth::MU * self.position / self.rmag().powi(3)
    }

    /// Returns the non-spherical gravity acceleration on this state, in
    /// km/s², over the full on-board field.
    pub fn acceleration_from_gravity(&self) -> Result<Vector3<f64>, AstroError> {
        Harmonics::full_field().eom(self)
    }

    /// Returns the lunar third-body acceleration on this state, in km/s².
    pub fn acceleration_from_moon(&self) -> Result<Vector3<f64>, AstroError> {
        PointMasses::new(&[Body::Moon]).eom(self)
    }

    /// Returns the solar third-body acceleration on this state, in km/s².
    pub fn acceleration_from_sun(&self) -> Result<Vector3<f64>, AstroError> {
        PointMasses::new(&[Body::Sun]).eom(self)
    }

    /// Returns the solar radiation pressure acceleration on this state, in km/s².
    pub fn acceleration_from_srp(&self) -> Result<Vector3<f64>, AstroError> {
        SolarPressure {}.eom(self)
    }

    /// Returns the thrust acceleration currently set on this state, in km/s².
    pub fn acceleration_from_thrust(&self) -> Vector3<f64> {
        self.thrust
    }

    /// Returns the full time derivative of this state under all on-board
    /// perturbations, in [km/s, km/s²].
    ///
    /// Sums thrust, lunar and solar third-body, radiation pressure, gravity
    /// harmonics and the two-body term.
    pub fn derivative(&self) -> Result<Vector6<f64>, AstroError> {
        let accel = self.acceleration_from_thrust()
            + self.acceleration_from_moon()?
            + self.acceleration_from_sun()?
            + self.acceleration_from_srp()?
            + self.acceleration_from_gravity()?
            + self.acceleration_from_earth();
        Ok(Vector6::new(
            self.velocity[0],
            self.velocity[1],
            self.velocity[2],
            accel[0],
            accel[1],
            accel[2],
        ))
    }
}
