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

/*! # tethys

Orbital state representations and Earth reference-frame transformations.

Tethys provides the algebraic conversions between the inertial (GCRF),
Earth-fixed (ITRF), relative-motion (Hill/RIC), geodetic (LLA), spherical,
and classical-element representations of a spacecraft state, along with the
perturbing accelerations (point mass, oblateness harmonics, third body, solar
radiation pressure, thrust) that a numerical integrator would consume.

All states are plain `Copy` value types over `nalgebra` vectors and a
`hifitime` epoch: nothing is aliased, so every operation is thread safe by
construction.
*/

/// Provides the celestial bodies, frame-chain rotations, and all of the state representations.
pub mod cosmic;

/// Provides the perturbing acceleration models and their composition into an equation of motion.
pub mod dynamics;

/// Utility functions shared by different modules, and which may be useful to engineers.
pub mod utils;

mod errors;
/// Tethys will (almost) never panic and functions which may fail will return an error.
pub use self::errors::AstroError;

#[macro_use]
extern crate log;
extern crate hifitime;
extern crate nalgebra as na;

/// Re-export of hifitime
pub mod time {
    pub use hifitime::*;
}

/// Re-export nalgebra
pub mod linalg {
    pub use na::base::*;
}

/// Re-export some useful things
pub use self::cosmic::{
    ClassicalElements, GcrfState, HillState, ItrfState, LlaState, SphericalPosition, TimeTagged,
};
