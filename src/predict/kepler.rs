//! Two-body propagation of a Cartesian state in universal variables.
//!
//! The generalized anomaly `psi` covers elliptic, parabolic and hyperbolic
//! motion with a single set of series, so no orbit-type branching is needed.
//! Kepler's equation in `psi` is solved with Newton steps safeguarded by a
//! bracket on `psi`.

use crate::telemetry::StateVector;

/// Earth gravitational parameter, km³/s².
pub const MU: f64 = 398_600.8;

/// Refinements after the initial evaluation.
const MAX_REFINEMENTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Search {
    Iterating,
    Converged,
    Exhausted,
}

/// Interval known to contain the solution, with the time residual at each end.
#[derive(Debug, Clone, Copy)]
struct Bracket {
    psi_neg: f64,
    psi_pos: f64,
    dtau_neg: f64,
    dtau_pos: f64,
}

impl Bracket {
    fn for_delta(delta: f64) -> Self {
        if delta < 0.0 {
            Bracket {
                psi_neg: -1.0,
                psi_pos: 0.0,
                dtau_neg: -1.0,
                dtau_pos: -delta,
            }
        } else {
            Bracket {
                psi_neg: 0.0,
                psi_pos: 1.0,
                dtau_neg: -delta,
                dtau_pos: 1.0,
            }
        }
    }

    fn excludes(&self, psi: f64) -> bool {
        psi <= self.psi_neg || psi >= self.psi_pos
    }

    fn narrow(&mut self, psi: f64, dtau: f64) {
        if dtau < 0.0 {
            self.psi_neg = psi;
            self.dtau_neg = dtau;
        } else {
            self.psi_pos = psi;
            self.dtau_pos = dtau;
        }
    }

    /// Replacement for a Newton step that left the bracket. `None` when every
    /// fallback lands outside as well.
    fn fallback(&self, newton: f64, delta: f64) -> Option<f64> {
        let mut psi = newton;

        if self.dtau_neg.abs() < self.dtau_pos.abs() {
            psi = self.psi_neg * (1.0 - (4.0 * self.dtau_neg) / delta);
        }
        if self.dtau_pos.abs() < self.dtau_neg.abs() {
            psi = self.psi_pos * (1.0 - (4.0 * self.dtau_pos) / delta);
        }
        if !self.excludes(psi) {
            return Some(psi);
        }

        if delta > 0.0 {
            psi = self.psi_neg + self.psi_neg;
        }
        if delta < 0.0 {
            psi = self.psi_pos + self.psi_pos;
        }
        if !self.excludes(psi) {
            return Some(psi);
        }

        let width = self.psi_pos - self.psi_neg;
        let interpolated = self.psi_neg + width * (-self.dtau_neg / (self.dtau_pos - self.dtau_neg));
        if !self.excludes(interpolated) {
            return Some(interpolated);
        }

        let bisected = self.psi_neg + width * 0.5;
        (!self.excludes(bisected)).then_some(bisected)
    }
}

/// Stumpff-like coefficients of `a = alpha * psi^2`. Only `c0..c3` feed the
/// propagation; `c4` and `3 * c5` are series intermediates.
#[derive(Debug, Clone, Copy)]
struct Coefficients {
    c0: f64,
    c1: f64,
    c2: f64,
    c3: f64,
}

impl Coefficients {
    fn new(alpha: f64, psi: f64) -> Self {
        let original = alpha * psi * psi;
        let mut a = original;
        // halve psi until the series converges quickly
        let mut halvings = 0u32;
        while a.abs() > 1.0 && a.is_finite() {
            a *= 0.25;
            halvings += 1;
        }

        let c5x3 = continued_fraction(a, &[42.0, 72.0, 110.0, 156.0, 210.0, 272.0, 342.0]) / 40.0;
        let c4 = continued_fraction(a, &[30.0, 56.0, 90.0, 132.0, 182.0, 240.0, 306.0]) / 24.0;
        let mut c3 = (0.5 + a * c5x3) / 3.0;
        let mut c2 = 0.5 + a * c4;
        let mut c1 = 1.0 + a * c3;
        let mut c0 = 1.0 + a * c2;

        if halvings > 0 {
            for _ in 0..halvings {
                c1 *= c0;
                c0 = 2.0 * c0 * c0 - 1.0;
            }
            c2 = (c0 - 1.0) / original;
            c3 = (c1 - 1.0) / original;
        }

        Coefficients { c0, c1, c2, c3 }
    }
}

/// `1 + a/d0 (1 + a/d1 (1 + ... (1 + a/dn)))`, evaluated from the inside out.
fn continued_fraction(a: f64, denominators: &[f64]) -> f64 {
    denominators
        .iter()
        .rev()
        .fold(1.0, |acc, d| 1.0 + (acc * a) / d)
}

/// Quantities of one evaluation of Kepler's equation at a given `psi`.
#[derive(Debug, Clone, Copy)]
struct Evaluation {
    s1: f64,
    s2: f64,
    g: f64,
    r: f64,
    dtau: f64,
}

struct Kepler {
    r0: f64,
    sig0: f64,
    alpha: f64,
    delta: f64,
}

impl Kepler {
    fn evaluate(&self, psi: f64) -> Evaluation {
        let c = Coefficients::new(self.alpha, psi);
        let s1 = c.c1 * psi;
        let s2 = c.c2 * psi * psi;
        let s3 = c.c3 * psi * psi * psi;
        let g = self.r0 * s1 + self.sig0 * s2;

        Evaluation {
            s1,
            s2,
            g,
            r: (self.r0 * c.c0 + (self.sig0 * s1 + MU * s2)).abs(),
            dtau: (g + MU * s3) - self.delta,
        }
    }

    fn initial_psi(&self, bracket: &Bracket) -> f64 {
        if self.delta == 0.0 {
            return 0.0;
        }
        let psi = self.delta / self.r0;
        if bracket.excludes(psi) {
            self.delta
        } else {
            psi
        }
    }

    fn solve(&self) -> Evaluation {
        let mut bracket = Bracket::for_delta(self.delta);
        let mut psi = self.initial_psi(&bracket);
        let mut search = Search::Iterating;
        let mut refinements = 0;

        let mut eval = self.evaluate(psi);
        loop {
            if eval.dtau == 0.0 {
                search = Search::Converged;
            } else {
                bracket.narrow(psi, eval.dtau);
                let newton = psi - eval.dtau / eval.r;
                if !bracket.excludes(newton) {
                    psi = newton;
                } else if let Some(next) = bracket.fallback(newton, self.delta) {
                    psi = next;
                } else {
                    search = Search::Exhausted;
                }
            }

            if search != Search::Iterating {
                break;
            }
            if refinements == MAX_REFINEMENTS {
                search = Search::Exhausted;
                break;
            }
            refinements += 1;
            eval = self.evaluate(psi);
        }

        log::trace!(
            "universal anomaly search {:?} after {} refinements, residual {} s",
            search,
            refinements,
            eval.dtau
        );
        eval
    }
}

/// Advances `state` by `delta` seconds of two-body motion.
///
/// The returned vector keeps the input's `time`, `gmt` and labels; callers
/// stamp it.
/// Pathological inputs are not rejected: after the iteration bound the last
/// evaluated anomaly is used, and the result is still a point on the same
/// conic.
pub fn correct_position(state: &StateVector, delta: f64) -> StateVector {
    let r = state.position();
    let v = state.velocity();

    let r0 = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
    let kepler = Kepler {
        r0,
        sig0: r[0] * v[0] + r[1] * v[1] + r[2] * v[2],
        alpha: (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]) - 2.0 * MU / r0,
        delta,
    };
    let eval = kepler.solve();

    // Lagrange coefficients, with f and g-dot offset by one
    let fm1 = (-MU * eval.s2) / kepler.r0;
    let fd = (-MU * eval.s1) / (kepler.r0 * eval.r);
    let gdm1 = (-MU * eval.s2) / eval.r;
    let g = eval.g;

    StateVector {
        x: r[0] + (fm1 * r[0] + g * v[0]),
        y: r[1] + (fm1 * r[1] + g * v[1]),
        z: r[2] + (fm1 * r[2] + g * v[2]),
        velocity_x: fd * r[0] + gdm1 * v[0] + v[0],
        velocity_y: fd * r[1] + gdm1 * v[1] + v[1],
        velocity_z: fd * r[2] + gdm1 * v[2] + v[2],
        ..*state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const RADIUS: f64 = 6778.0;

    fn circular() -> StateVector {
        StateVector {
            x: RADIUS,
            y: 0.0,
            z: 0.0,
            velocity_x: 0.0,
            velocity_y: (MU / RADIUS).sqrt(),
            velocity_z: 0.0,
            time: 24.0,
            gmt: 25.0,
            ..StateVector::default()
        }
    }

    /// Inclined, slightly eccentric low orbit.
    fn inclined() -> StateVector {
        StateVector {
            x: -4_378.2,
            y: 3_511.9,
            z: 3_850.4,
            velocity_x: -0.3654,
            velocity_y: -5.8428,
            velocity_z: 5.002,
            time: 0.0,
            gmt: 0.0,
            ..StateVector::default()
        }
    }

    fn energy(s: &StateVector) -> f64 {
        let v = s.velocity();
        let r = s.position();
        let v2 = v[0] * v[0] + v[1] * v[1] + v[2] * v[2];
        v2 / 2.0 - MU / (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt()
    }

    fn angular_momentum(s: &StateVector) -> [f64; 3] {
        let r = s.position();
        let v = s.velocity();
        [
            r[1] * v[2] - r[2] * v[1],
            r[2] * v[0] - r[0] * v[2],
            r[0] * v[1] - r[1] * v[0],
        ]
    }

    #[test]
    fn zero_delta_is_identity() {
        for state in [circular(), inclined()] {
            let propagated = correct_position(&state, 0.0);
            assert_eq!(propagated, state);
        }
    }

    #[test]
    fn quarter_orbit_of_circular_motion() {
        let period = 2.0 * PI * (RADIUS.powi(3) / MU).sqrt();
        let propagated = correct_position(&circular(), period / 4.0);

        assert_relative_eq!(propagated.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(propagated.y, RADIUS, max_relative = 1e-9);
        assert_relative_eq!(propagated.velocity_x, -(MU / RADIUS).sqrt(), max_relative = 1e-9);
        assert_relative_eq!(propagated.velocity_y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn backwards_propagation_of_circular_motion() {
        let period = 2.0 * PI * (RADIUS.powi(3) / MU).sqrt();
        let propagated = correct_position(&circular(), -period / 4.0);

        assert_relative_eq!(propagated.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(propagated.y, -RADIUS, max_relative = 1e-9);
    }

    #[test]
    fn conserves_energy_and_angular_momentum() {
        for state in [circular(), inclined()] {
            let e0 = energy(&state);
            let h0 = angular_momentum(&state);
            let h0_norm = (h0[0] * h0[0] + h0[1] * h0[1] + h0[2] * h0[2]).sqrt();

            for delta in [-3000.0, -600.0, 1.0, 6.0, 90.0, 1500.0, 2700.0, 5400.0] {
                let propagated = correct_position(&state, delta);
                assert_relative_eq!(energy(&propagated), e0, max_relative = 1e-6);

                let h = angular_momentum(&propagated);
                for axis in 0..3 {
                    assert_relative_eq!(h[axis], h0[axis], epsilon = 1e-9 * h0_norm);
                }
            }
        }
    }

    #[test]
    fn forward_then_back_returns_home() {
        let state = inclined();
        let there = correct_position(&state, 1200.0);
        let back = correct_position(&there, -1200.0);

        assert_relative_eq!(back.x, state.x, max_relative = 1e-8);
        assert_relative_eq!(back.y, state.y, max_relative = 1e-8);
        assert_relative_eq!(back.z, state.z, max_relative = 1e-8);
        assert_relative_eq!(back.velocity_z, state.velocity_z, max_relative = 1e-8);
    }

    #[test]
    fn keeps_time_stamps() {
        let propagated = correct_position(&circular(), 60.0);
        assert_eq!(propagated.time, 24.0);
        assert_eq!(propagated.gmt, 25.0);
    }

    fn bracket(psi_neg: f64, psi_pos: f64, dtau_neg: f64, dtau_pos: f64) -> Bracket {
        Bracket {
            psi_neg,
            psi_pos,
            dtau_neg,
            dtau_pos,
        }
    }

    #[test]
    fn fallback_extrapolates_from_smaller_residual() {
        let from_neg = bracket(1.0, 3.0, -0.1, 5.0).fallback(10.0, 10.0);
        assert_relative_eq!(from_neg.unwrap(), 1.04, max_relative = 1e-12);

        let from_pos = bracket(1.0, 3.0, -5.0, 0.5).fallback(10.0, 10.0);
        assert_relative_eq!(from_pos.unwrap(), 2.4, max_relative = 1e-12);
    }

    #[test]
    fn fallback_keeps_newton_step_on_equal_residuals() {
        assert_eq!(bracket(1.0, 3.0, -1.0, 1.0).fallback(2.0, 10.0), Some(2.0));
    }

    #[test]
    fn fallback_doubles_toward_delta() {
        // extrapolation lands at 5.0
        assert_eq!(bracket(1.0, 3.0, -0.1, 5.0).fallback(10.0, 0.1), Some(2.0));
        // backwards: extrapolation lands at -5.0
        assert_eq!(bracket(-3.0, -1.0, -5.0, 0.1).fallback(-10.0, -0.1), Some(-2.0));
    }

    #[test]
    fn fallback_interpolates_between_residuals() {
        // extrapolation at 10.0, doubling at 4.0
        let psi = bracket(2.0, 3.0, -0.1, 0.3).fallback(10.0, 0.1).unwrap();
        assert_relative_eq!(psi, 2.25, max_relative = 1e-12);
    }

    #[test]
    fn fallback_bisects_when_interpolation_leaves() {
        // same-sign residuals put the interpolation at 1.5
        assert_eq!(bracket(2.0, 3.0, 0.1, 0.3).fallback(10.0, 0.1), Some(2.5));
    }

    #[test]
    fn fallback_gives_up_on_empty_bracket() {
        assert_eq!(bracket(2.0, 2.0, -0.1, 0.3).fallback(10.0, 0.1), None);
    }
}
