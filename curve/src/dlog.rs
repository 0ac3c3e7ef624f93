//! Discrete logarithms by Pollard's rho.
//!
//! Points are split into three classes by `x mod 3` (infinity joins class
//! zero). Each class advances a walk `R = a*G + b*P` differently:
//!
//! - class 0: `R + G`, `a + 1`
//! - class 1: `R + P`, `b + 1`
//! - class 2: `2R`, `2a`, `2b`
//!
//! A tortoise and a hare walk until they land on the same point, which gives
//! `a1*G + b1*P = a2*G + b2*P` and hence `(b1 - b2) * k = a2 - a1 (mod N)`.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::{debug, trace};

use crate::{CurvePoint, Error, Group, GroupLaw, Scalar};

/// Position of a rho walk with its coefficients: `point = a*G + b*P`.
#[derive(Clone, Debug)]
struct Walk {
    point: CurvePoint,
    a: Scalar,
    b: Scalar,
}

impl Group {
    /// Scalar `k` with `k * generator == target`.
    ///
    /// Restarts with a longer tortoise head start whenever a collision gives
    /// no usable equation, at most `order` times. Each walk is capped at
    /// `order` steps. Fails with [`Error::ArithmeticFailure`] once all
    /// restarts are spent; for a cyclic group of the configured order that
    /// points at a wrong order or a target outside the generated subgroup.
    pub fn discrete_log(&self, target: &CurvePoint) -> Result<Scalar, Error> {
        if !self.curve().is_on_curve(target) {
            return Err(Error::NotOnCurve);
        }
        if target.is_zero() {
            return Ok(Scalar::zero(self.order()));
        }

        let mut attempt = BigUint::zero();
        while &attempt < self.order() {
            let head_start = self.scalar(attempt.clone());
            let tortoise = Walk {
                point: self.mul_generator(&head_start),
                a: head_start,
                b: Scalar::zero(self.order()),
            };
            let hare = Walk {
                point: self.generator().clone(),
                a: Scalar::one(self.order()),
                b: Scalar::zero(self.order()),
            };

            if let Some(k) = self.rho(target, tortoise, hare) {
                return Ok(k);
            }
            debug!(attempt = %attempt, "rho attempt gave no solution, restarting");
            attempt += 1u32;
        }

        Err(Error::ArithmeticFailure {
            attempts: self.order().clone(),
        })
    }

    fn rho(&self, target: &CurvePoint, mut tortoise: Walk, mut hare: Walk) -> Option<Scalar> {
        let mut steps = BigUint::zero();
        loop {
            tortoise = self.rho_step(target, tortoise);
            hare = self.rho_step(target, self.rho_step(target, hare));
            if tortoise.point == hare.point {
                break;
            }

            steps += 1u32;
            if &steps > self.order() {
                trace!(steps = %steps, "walks did not meet");
                return None;
            }
        }

        // (b1 - b2) * k = a2 - a1
        let coefficient = &tortoise.b - &hare.b;
        let rhs = &hare.a - &tortoise.a;
        self.solve(target, &coefficient, &rhs)
    }

    fn rho_step(&self, target: &CurvePoint, walk: Walk) -> Walk {
        let Walk { point, a, b } = walk;
        let one = Scalar::one(self.order());

        match partition(&point) {
            0 => Walk {
                point: self.curve().add(&point, self.generator()),
                a: &a + &one,
                b,
            },
            1 => Walk {
                point: self.curve().add(&point, target),
                a,
                b: &b + &one,
            },
            _ => Walk {
                point: self.curve().double(&point),
                a: &a + &a,
                b: &b + &b,
            },
        }
    }

    // Solutions of `coefficient * k = rhs (mod N)` are `k0 + j * N/g` for
    // `g = gcd(coefficient, N)` and `0 <= j < g`. Returns the one that maps
    // to `target`, if any.
    fn solve(&self, target: &CurvePoint, coefficient: &Scalar, rhs: &Scalar) -> Option<Scalar> {
        if coefficient.is_zero() {
            return None;
        }

        let order = self.order();
        let g = coefficient.value().gcd(order);
        if !(rhs.value() % &g).is_zero() {
            return None;
        }

        let reduced = order / &g;
        let k0 = if reduced.is_one() {
            BigUint::zero()
        } else {
            let inverse = (coefficient.value() / &g).modinv(&reduced)?;
            (rhs.value() / &g * inverse) % &reduced
        };

        let mut candidate = k0;
        let mut j = BigUint::zero();
        while j < g {
            let k = self.scalar(candidate.clone());
            if &self.mul_generator(&k) == target {
                return Some(k);
            }
            candidate += &reduced;
            j += 1u32;
        }

        None
    }
}

fn partition(point: &CurvePoint) -> u8 {
    let Some(x) = point.x() else {
        return 0;
    };
    let class = x.value() % 3u32;
    if class.is_zero() {
        0
    } else if class.is_one() {
        1
    } else {
        2
    }
}
