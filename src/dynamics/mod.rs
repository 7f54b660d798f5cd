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

//! Perturbing accelerations on a geocentric spacecraft.
//!
//! Every model evaluates an instantaneous acceleration from a [GcrfState]
//! alone: no model holds mutable state, so a model list can be shared across
//! threads behind `Arc`s.

use crate::cosmic::GcrfState;
use crate::errors::AstroError;
use crate::na::Vector3;

/// The orbital dynamics: two-body plus a list of acceleration models.
pub mod orbital;
pub use self::orbital::{OrbitalDynamics, PointMasses};

/// The spherical harmonics gravity field model.
pub mod sph_harmonics;
pub use self::sph_harmonics::Harmonics;

/// The solar radiation pressure model.
pub mod solarpressure;
pub use self::solarpressure::SolarPressure;

/// A model which computes a perturbing acceleration on top of the two-body
/// acceleration.
pub trait AccelModel: Send + Sync {
    /// Returns the acceleration on the provided state, in km/s², on GCRF axes.
    fn eom(&self, state: &GcrfState) -> Result<Vector3<f64>, AstroError>;
}
