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

use crate::time::{Duration, Epoch};

/// A trait allowing for something to have an epoch
pub trait TimeTagged {
    /// Retrieve the Epoch
    fn epoch(&self) -> Epoch;
    /// Set the Epoch
    fn set_epoch(&mut self, epoch: Epoch);

    /// Shift this epoch by a duration (can be negative)
    fn shift_by(&mut self, duration: Duration) {
        self.set_epoch(self.epoch() + duration);
    }
}

/// The celestial bodies: physical constants and analytic ephemerides.
pub mod bodies;
pub use self::bodies::*;

/// The ITRF ↔ TOD ↔ MOD ↔ GCRF frame-chain rotations.
pub mod rotations;
pub use self::rotations::*;

mod gcrf;
pub use self::gcrf::*;

mod itrf;
pub use self::itrf::*;

mod hill;
pub use self::hill::*;

mod geodetic;
pub use self::geodetic::*;

mod spherical;
pub use self::spherical::*;

mod elements;
pub use self::elements::*;

/// Speed of light in meters per second
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// Speed of light in kilometers per second
pub const SPEED_OF_LIGHT_KMS: f64 = SPEED_OF_LIGHT / 1000.0;

/// Astronomical unit, in kilometers, according to the [IAU](https://www.iau.org/public/themes/measuring/).
pub const AU: f64 = 149_597_870.700;

/// Julian date of the J2000 reference epoch, in days.
pub const JD_J2000: f64 = 2_451_545.0;

/// Number of days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
