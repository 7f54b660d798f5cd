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

use snafu::Snafu;

/// Errors of the astrodynamics computations.
///
/// These are deterministic math functions: no error is ever retried, every
/// failure is surfaced synchronously to the caller. Degenerate geometry (a
/// state at the center of the Earth, co-located origin and chase vehicles)
/// is _not_ guarded and propagates NaN instead, matching the behavior callers
/// of this library rely upon.
#[derive(Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AstroError {
    /// Kepler's equation did not converge within the iteration bound. For
    /// well-posed elliptical orbits (e in [0, 1)) this cannot happen.
    #[snafu(display(
        "Kepler solver did not converge after {iters} iterations (ma = {ma} rad, ecc = {ecc})"
    ))]
    KeplerNotConverged { iters: usize, ma: f64, ecc: f64 },
    /// The closed-form element conversions assume an ellipse.
    #[snafu(display("eccentricity {ecc} is not elliptical: hyperbolic and parabolic orbits are not supported"))]
    HyperbolicOrbit { ecc: f64 },
    /// Geodetic latitude is bounded by the poles.
    #[snafu(display("latitude {latitude_rad} rad is outside of [-pi/2, pi/2]"))]
    LatitudeOutOfBounds { latitude_rad: f64 },
}
