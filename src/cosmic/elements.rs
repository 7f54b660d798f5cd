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
use super::rotations::gast;
use super::{GcrfState, ItrfState, TimeTagged};
use crate::errors::AstroError;
use crate::na::Vector3;
use crate::time::Epoch;
use crate::utils::{between_0_2pi, r3};
use std::f64::consts::PI;
use std::fmt;

/// Convergence criterion of the Kepler solver, in radians.
const KEPLER_TOL: f64 = 1e-12;
/// Iteration bound of the Kepler solver.
const KEPLER_MAX_ITER: usize = 100;

/// A closed orbit about the Earth in classical (Keplerian) elements.
///
/// All angles are in radians, the semi-major axis in km. Only elliptical
/// orbits are representable: the constructor rejects `ecc ∉ [0, 1)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClassicalElements {
    pub epoch: Epoch,
    /// Semi-major axis, in km
    pub sma: f64,
    /// Eccentricity, in [0, 1)
    pub ecc: f64,
    /// Inclination, in radians
    pub inc: f64,
    /// Right ascension of the ascending node, in radians
    pub raan: f64,
    /// Argument of perigee, in radians
    pub aop: f64,
    /// Mean anomaly, in radians
    pub mean_anomaly: f64,
}

impl ClassicalElements {
    /// Creates a new set of elements at the provided epoch, normalizing all
    /// angles into their conventional ranges.
    ///
    /// The inclination is folded into [0, π]: an out-of-range inclination
    /// describes the same plane with the node and perigee shifted by π, and
    /// the stored set is that equivalent representation.
    ///
    /// **Units:** km, none, radians (×4)
    pub fn new(
        epoch: Epoch,
        sma: f64,
        ecc: f64,
        inc: f64,
        raan: f64,
        aop: f64,
        mean_anomaly: f64,
    ) -> Result<Self, AstroError> {
        if !(0.0..1.0).contains(&ecc) {
            return Err(AstroError::HyperbolicOrbit { ecc });
        }
        if ecc < 1e-6 {
            warn!("near-circular orbit: the argument of perigee is ill defined");
        }
        let mut inc = between_0_2pi(inc);
        let mut raan = raan;
        let mut aop = aop;
        if inc > PI {
            inc = 2.0 * PI - inc;
            raan += PI;
            aop += PI;
        }
        Ok(Self {
            epoch,
            sma,
            ecc,
            inc,
            raan: between_0_2pi(raan),
            aop: between_0_2pi(aop),
            mean_anomaly: between_0_2pi(mean_anomaly),
        })
    }

    /// Computes the elements of the provided inertial state.
    ///
    /// NaN angles propagate for rectilinear trajectories (zero angular
    /// momentum); near-circular and near-equatorial states get a warning
    /// since their node and perigee angles are numerically ill conditioned.
    pub fn from_gcrf_state(state: &GcrfState) -> Result<Self, AstroError> {
        let r = &state.position;
        let v = &state.velocity;
        let w = Self::areal_velocity_from_r_and_v(r, v);
        let hmag = w.norm();

        let sma = Self::sma_from_state(r, v);
        let p = hmag.powi(2) / Earth::MU;
        let ecc = Self::eccentricity_from_p_and_a(p, sma);
        if !(0.0..1.0).contains(&ecc) || sma <= 0.0 {
            return Err(AstroError::HyperbolicOrbit { ecc });
        }
        let inc = Self::inclination_from_w(&w);
        if ecc < 1e-6 || inc < 1e-6 {
            warn!("near-circular or near-equatorial orbit: node and perigee angles are ill conditioned");
        }

        let n = Self::mean_motion_from_sma(sma);
        let ea = Self::eccentric_anomaly_from_rdv_r_a_n(r.dot(v), r.norm(), sma, n);
        let mean_anomaly = Self::mean_anomaly_from_ea_and_e(ea, ecc);
        let ta = Self::true_anomaly_from_e_and_ea(ecc, ea);
        let raan = Self::raan_from_w(&w);
        let u = Self::argument_of_latitude_from_r_and_w(r, &w);
        let aop = Self::argument_of_perigee_from_u_and_ta(u, ta);

        Ok(Self {
            epoch: state.epoch,
            sma,
            ecc,
            inc,
            raan,
            aop,
            mean_anomaly,
        })
    }

    /// Solves Kepler's equation `M = E - e sin E` for the eccentric anomaly.
    ///
    /// Newton-Raphson seeded at `M` (or at π for high eccentricities, where
    /// the `M` seed can diverge), converged at |ΔE| < 1e-12 and bounded at
    /// 100 iterations.
    pub fn mean_to_eccentric_anomaly(ma: f64, ecc: f64) -> Result<f64, AstroError> {
        let ma = between_0_2pi(ma);
        let mut ea = if ecc > 0.8 { PI } else { ma };
        for _ in 0..KEPLER_MAX_ITER {
            let delta = (ea - ecc * ea.sin() - ma) / (1.0 - ecc * ea.cos());
            ea -= delta;
            if delta.abs() < KEPLER_TOL {
                return Ok(between_0_2pi(ea));
            }
        }
        Err(AstroError::KeplerNotConverged {
            iters: KEPLER_MAX_ITER,
            ma,
            ecc,
        })
    }

    /// Returns the semi-major axis of the provided state, in km, from the
    /// vis-viva relation. Negative for hyperbolic states.
    pub fn sma_from_state(r: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
        1.0 / (2.0 / r.norm() - v.norm_squared() / Earth::MU)
    }

    /// Returns the mean motion of an orbit of the provided semi-major axis, in rad/s.
    pub fn mean_motion_from_sma(sma: f64) -> f64 {
        (Earth::MU / sma.powi(3)).sqrt()
    }

    /// Returns the orbital period of an orbit of the provided semi-major axis, in seconds.
    pub fn period_from_sma(sma: f64) -> f64 {
        2.0 * PI / Self::mean_motion_from_sma(sma)
    }

    /// Returns the momentum vector `r × v` of the provided state, in km²/s.
    ///
    /// Its direction is the orbit normal.
    pub fn areal_velocity_from_r_and_v(r: &Vector3<f64>, v: &Vector3<f64>) -> Vector3<f64> {
        r.cross(v)
    }

    /// Returns the inclination of an orbit of the provided orbit-normal
    /// vector, in radians in [0, π].
    pub fn inclination_from_w(w: &Vector3<f64>) -> f64 {
        w[0].hypot(w[1]).atan2(w[2])
    }

    /// Returns the right ascension of the ascending node of an orbit of the
    /// provided orbit-normal vector, in radians in [0, 2π).
    pub fn raan_from_w(w: &Vector3<f64>) -> f64 {
        between_0_2pi(w[0].atan2(-w[1]))
    }

    /// Returns the eccentricity of an orbit of semilatus rectum `p` and
    /// semi-major axis `a`.
    pub fn eccentricity_from_p_and_a(p: f64, a: f64) -> f64 {
        (1.0 - p / a).sqrt()
    }

    /// Returns the eccentric anomaly, in radians in [0, 2π), from the
    /// position-velocity dot product `rdv`, the radius `r`, the semi-major
    /// axis `a` and the mean motion `n`.
    pub fn eccentric_anomaly_from_rdv_r_a_n(rdv: f64, r: f64, a: f64, n: f64) -> f64 {
        between_0_2pi((rdv / (n * a.powi(2))).atan2(1.0 - r / a))
    }

    /// Returns the mean anomaly from Kepler's equation, in radians in [0, 2π).
    pub fn mean_anomaly_from_ea_and_e(ea: f64, e: f64) -> f64 {
        between_0_2pi(ea - e * ea.sin())
    }

    /// Returns the true anomaly of the provided eccentric anomaly, in radians in [0, 2π).
    pub fn true_anomaly_from_e_and_ea(e: f64, ea: f64) -> f64 {
        between_0_2pi(((1.0 - e.powi(2)).sqrt() * ea.sin()).atan2(ea.cos() - e))
    }

    /// Returns the argument of latitude (node to radius angle, in the orbit
    /// plane) of the provided radius and orbit-normal vectors, in radians in
    /// [0, 2π).
    pub fn argument_of_latitude_from_r_and_w(r: &Vector3<f64>, w: &Vector3<f64>) -> f64 {
        let w_hat = w / w.norm();
        let node = Vector3::z_axis().cross(&w_hat);
        let n_hat = node / node.norm();
        let r_hat = r / r.norm();
        between_0_2pi(r_hat.dot(&w_hat.cross(&n_hat)).atan2(r_hat.dot(&n_hat)))
    }

    /// Returns the argument of perigee from the argument of latitude and the
    /// true anomaly, in radians in [0, 2π).
    pub fn argument_of_perigee_from_u_and_ta(u: f64, ta: f64) -> f64 {
        between_0_2pi(u - ta)
    }

    /// Returns the inertial unit vector toward perigee.
    ///
    /// First column of the 3-1-3 perifocal-to-inertial composition
    /// `R3(-Ω)·R1(-i)·R3(-ω)`, expanded in closed form.
    pub fn perigee_vector(&self) -> Vector3<f64> {
        let (sin_raan, cos_raan) = self.raan.sin_cos();
        let (sin_aop, cos_aop) = self.aop.sin_cos();
        let (sin_inc, cos_inc) = self.inc.sin_cos();
        Vector3::new(
            cos_raan * cos_aop - sin_raan * sin_aop * cos_inc,
            sin_raan * cos_aop + cos_raan * sin_aop * cos_inc,
            sin_aop * sin_inc,
        )
    }

    /// Returns the inertial unit vector along the semilatus rectum (in-plane,
    /// 90° ahead of perigee).
    pub fn semilatus_rectum_vector(&self) -> Vector3<f64> {
        let (sin_raan, cos_raan) = self.raan.sin_cos();
        let (sin_aop, cos_aop) = self.aop.sin_cos();
        let (sin_inc, cos_inc) = self.inc.sin_cos();
        Vector3::new(
            -cos_raan * sin_aop - sin_raan * cos_aop * cos_inc,
            -sin_raan * sin_aop + cos_raan * cos_aop * cos_inc,
            cos_aop * sin_inc,
        )
    }

    /// Returns the position and velocity in the perifocal plane, as
    /// `(x̄, ȳ, ẋ̄, ẏ̄)` along the perigee and semilatus rectum axes.
    fn perifocal_plane(&self) -> Result<(f64, f64, f64, f64), AstroError> {
        let ea = Self::mean_to_eccentric_anomaly(self.mean_anomaly, self.ecc)?;
        let (sin_ea, cos_ea) = ea.sin_cos();
        let beta = (1.0 - self.ecc.powi(2)).sqrt();
        let n = Self::mean_motion_from_sma(self.sma);
        let radius = self.sma * (1.0 - self.ecc * cos_ea);
        Ok((
            self.sma * (cos_ea - self.ecc),
            self.sma * beta * sin_ea,
            -(n * self.sma.powi(2) / radius) * sin_ea,
            (n * self.sma.powi(2) / radius) * beta * cos_ea,
        ))
    }

    /// Converts these elements to an inertial Cartesian state.
    ///
    /// Kepler solve, then projection of the perifocal-plane position and
    /// velocity through the perigee and semilatus rectum vectors. The RAAN is
    /// measured from the equinox, so angular momentum, energy and inclination
    /// of the returned state match the elements exactly.
    pub fn to_gcrf_state(&self) -> Result<GcrfState, AstroError> {
        let (xbar, ybar, xbar_dot, ybar_dot) = self.perifocal_plane()?;
        let p_vec = self.perigee_vector();
        let q_vec = self.semilatus_rectum_vector();
        Ok(GcrfState::new(
            self.epoch,
            xbar * p_vec + ybar * q_vec,
            xbar_dot * p_vec + ybar_dot * q_vec,
        ))
    }

    /// Converts these elements to an inertial Cartesian state, reading the
    /// RAAN from the Greenwich meridian instead of the equinox.
    ///
    /// The perifocal projection is rotated by the apparent Greenwich hour
    /// angle into the Earth-fixed frame, then brought back to GCRF through
    /// the full rotation chain. Norms are preserved but the orbit plane is
    /// tilted by the precession-nutation composition relative to
    /// [ClassicalElements::to_gcrf_state].
    pub fn to_gcrf_state_via_greenwich(&self) -> Result<GcrfState, AstroError> {
        let (xbar, ybar, xbar_dot, ybar_dot) = self.perifocal_plane()?;
        let p_vec = self.perigee_vector();
        let q_vec = self.semilatus_rectum_vector();
        let rot = r3(gast(self.epoch));
        Ok(ItrfState::new(
            self.epoch,
            rot * (xbar * p_vec + ybar * q_vec),
            rot * (xbar_dot * p_vec + ybar_dot * q_vec),
        )
        .gcrf_state())
    }
}

impl TimeTagged for ClassicalElements {
    fn epoch(&self) -> Epoch {
        self.epoch
    }

    fn set_epoch(&mut self, epoch: Epoch) {
        self.epoch = epoch;
    }
}

impl fmt::Display for ClassicalElements {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}] sma = {:.6} km\tecc = {:.6}\tinc = {:.6} deg\traan = {:.6} deg\taop = {:.6} deg\tma = {:.6} deg",
            self.epoch,
            self.sma,
            self.ecc,
            self.inc.to_degrees(),
            self.raan.to_degrees(),
            self.aop.to_degrees(),
            self.mean_anomaly.to_degrees()
        )
    }
}
