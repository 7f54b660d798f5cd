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

use crate::na::{Matrix3, Vector3};
use std::f64::consts::PI;

/// Returns the direction cosine matrix of a frame rotation about the X axis, angle in radians.
pub fn r1(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
}

/// Returns the direction cosine matrix of a frame rotation about the Y axis, angle in radians.
pub fn r2(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
}

/// Returns the direction cosine matrix of a frame rotation about the Z axis, angle in radians.
pub fn r3(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
}

/// Normalizes an angle in radians into [0, 2π).
pub fn between_0_2pi(angle: f64) -> f64 {
    let mut theta = angle % (2.0 * PI);
    if theta < 0.0 {
        theta += 2.0 * PI;
    }
    theta
}

/// Normalizes an angle in degrees into [0, 360).
pub fn between_0_360(angle: f64) -> f64 {
    let mut theta = angle % 360.0;
    if theta < 0.0 {
        theta += 360.0;
    }
    theta
}

/// Normalizes an angle in degrees into [-180, 180).
pub fn between_pm_180(angle: f64) -> f64 {
    between_0_360(angle + 180.0) - 180.0
}

/// Converts an angle expressed in arcseconds to radians.
pub fn arcsec_to_rad(arcsec: f64) -> f64 {
    (arcsec / 3600.0).to_radians()
}

/// Converts an angle expressed in degrees, arcminutes and arcseconds to radians.
pub fn dms_to_rad(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    (degrees + minutes / 60.0 + seconds / 3600.0).to_radians()
}

/// Returns the components of vector `a` orthogonal to `b`.
pub fn perpv(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    let big_a = a[0].abs().max(a[1].abs().max(a[2].abs()));
    let big_b = b[0].abs().max(b[1].abs().max(b[2].abs()));
    if big_a < f64::EPSILON {
        Vector3::zeros()
    } else if big_b < f64::EPSILON {
        *a
    } else {
        let a_scl = a / big_a;
        let b_scl = b / big_b;
        let v = projv(&a_scl, &b_scl);
        big_a * (a_scl - v)
    }
}

/// Returns the projection of vector `a` onto vector `b`.
pub fn projv(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    b * a.dot(b) / b.dot(b)
}
