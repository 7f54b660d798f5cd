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
use crate::cosmic::{GcrfState, Sun};
use crate::errors::AstroError;
use crate::na::Vector3;

/// Solar radiation pressure with the spacecraft parameters baked into
/// [Sun::P]: a constant push directly away from the Sun.
///
/// No eclipse model and no inverse-square falloff over the Sun distance.
#[derive(Copy, Clone, Debug, Default)]
pub struct SolarPressure {}

impl AccelModel for SolarPressure {
    fn eom(&self, state: &GcrfState) -> Result<Vector3<f64>, AstroError> {
        let sun_to_sc = state.position - Sun::position(state.epoch);
        Ok(Sun::P * sun_to_sc / sun_to_sc.norm())
    }
}
