//! Short-Weierstrass curve groups over prime fields
//!
//! A curve is the solution set of y² = x³ + ax + b over 𝔽ₚ together with the
//! point at infinity, which acts as the identity of the chord-and-tangent
//! group law. Unlike a fixed named curve, every parameter here is supplied at
//! runtime so that arbitrarily small teaching curves can be explored; all
//! coordinate arithmetic is arbitrary precision.
//!
//! Nothing in this module is constant time. The point representation, the
//! branchy group law, and the variable-time scalar ladder all leak through
//! timing, which is acceptable only because the curves this crate works with
//! are insecure by construction.

pub mod arith;


use core::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::error::{Error, Result};

pub use self::arith::mod_inverse;

use self::arith::{mod_mul, mod_sub};

/// A point on a curve: either a finite affine pair or the point at infinity
///
/// The identity is a dedicated variant, never an in-band coordinate value,
/// so equality is plain structural equality and the infinity point equals
/// only itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    /// The group identity O
    Infinity,
    /// A finite point (x, y) with 0 ≤ x, y < p
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Build a finite point from its coordinates
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Is this the point at infinity?
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// x-coordinate, or `None` for the point at infinity
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, or `None` for the point at infinity
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "O (point at infinity)"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

/// Parameters of a short-Weierstrass curve y² = x³ + ax + b (mod p) with a
/// distinguished generator G of order q
///
/// Construction validates the non-singularity condition 4a³ + 27b² ≢ 0; the
/// parameter set is immutable afterwards and is shared by reference across
/// every operation that uses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    p: BigUint,
    a: BigUint,
    b: BigUint,
    g: Point,
    q: BigUint,
}

impl Curve {
    /// Create a curve from its raw parameters
    ///
    /// Fails with [`Error::SingularCurve`] when the discriminant vanishes and
    /// with [`Error::InvalidParameter`] when `p` or `q` cannot support a
    /// group (below 2). The generator is *not* checked against the curve
    /// equation, matching the permissive construction this crate teaches
    /// with; [`Curve::is_on_curve`] is available to callers that want it.
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: (BigUint, BigUint),
        q: BigUint,
    ) -> Result<Self> {
        let two = BigUint::from(2u32);
        if p < two {
            return Err(Error::InvalidParameter("field modulus p must be at least 2"));
        }
        if q < two {
            return Err(Error::InvalidParameter("generator order q must be at least 2"));
        }

        // 4a³ + 27b² mod p
        let a_cubed = &a * &a * &a;
        let b_squared = &b * &b;
        let discriminant =
            (BigUint::from(4u32) * a_cubed + BigUint::from(27u32) * b_squared) % &p;
        if discriminant.is_zero() {
            return Err(Error::SingularCurve { p });
        }

        let (gx, gy) = generator;
        Ok(Curve {
            p,
            a,
            b,
            g: Point::Affine { x: gx, y: gy },
            q,
        })
    }

    /// Prime modulus p of the underlying field
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient a of the curve equation
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient b of the curve equation
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// The distinguished generator point G
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// Order q of the generator
    pub fn order(&self) -> &BigUint {
        &self.q
    }

    /// Does the point satisfy y² ≡ x³ + ax + b (mod p)?
    ///
    /// The point at infinity is on every curve.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let lhs = (y * y) % &self.p;
                let rhs = (x * x * x + &self.a * x + &self.b) % &self.p;
                lhs == rhs
            }
        }
    }

    /// Add two points under the chord-and-tangent rule
    ///
    /// Identity and inverse pairs are handled before any slope is computed:
    /// O + Q = Q, P + O = P, and P + (-P) = O. For the remaining cases the
    /// slope is (3x² + a)/(2y) when doubling and (y₂-y₁)/(x₂-x₁) otherwise,
    /// with division performed as multiplication by the modular inverse.
    ///
    /// The inverse can fail to exist when p is not actually prime; the error
    /// is propagated rather than papered over.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        let (x1, y1) = match lhs {
            Point::Infinity => return Ok(rhs.clone()),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match rhs {
            Point::Infinity => return Ok(lhs.clone()),
            Point::Affine { x, y } => (x, y),
        };

        // Mirror-image points sum to the identity
        if x1 == x2 && ((y1 + y2) % &self.p).is_zero() {
            return Ok(Point::Infinity);
        }

        let (numerator, denominator) = if lhs == rhs {
            // Tangent slope: λ = (3x² + a) / (2y)
            let numerator = (BigUint::from(3u32) * (x1 * x1) + &self.a) % &self.p;
            let denominator = (y1 + y1) % &self.p;
            (numerator, denominator)
        } else {
            // Chord slope: λ = (y₂ - y₁) / (x₂ - x₁)
            (mod_sub(y2, y1, &self.p), mod_sub(x2, x1, &self.p))
        };

        let lambda = mod_mul(&numerator, &mod_inverse(&denominator, &self.p)?, &self.p);

        // x_r = λ² - x₁ - x₂,  y_r = λ(x₁ - x_r) - y₁
        let x_r = mod_sub(
            &mod_sub(&mod_mul(&lambda, &lambda, &self.p), x1, &self.p),
            x2,
            &self.p,
        );
        let y_r = mod_sub(
            &mod_mul(&lambda, &mod_sub(x1, &x_r, &self.p), &self.p),
            y1,
            &self.p,
        );

        Ok(Point::Affine { x: x_r, y: y_r })
    }

    /// The additive inverse of a point: (x, -y mod p); negate(O) = O
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => {
                let y = y % &self.p;
                let neg_y = if y.is_zero() { y } else { &self.p - &y };
                Point::Affine {
                    x: x.clone(),
                    y: neg_y,
                }
            }
        }
    }

    /// Scalar multiplication k·P by double-and-add
    ///
    /// Walks the binary representation of `k` least-significant bit first,
    /// accumulating into a running sum that starts at O while the addend is
    /// doubled each round; O(log k) group operations. `0·P = O`.
    pub fn scalar_mul(&self, k: &BigUint, point: &Point) -> Result<Point> {
        let mut accumulator = Point::Infinity;
        let mut addend = point.clone();
        let mut k = k.clone();

        while !k.is_zero() {
            if k.bit(0) {
                accumulator = self.add(&accumulator, &addend)?;
            }
            addend = self.add(&addend, &addend)?;
            k >>= 1u32;
        }

        Ok(accumulator)
    }

    /// Scalar multiplication for signed scalars: (-k)·P = k·(-P)
    pub fn scalar_mul_signed(&self, k: &BigInt, point: &Point) -> Result<Point> {
        if k.sign() == Sign::Minus {
            self.scalar_mul(k.magnitude(), &self.negate(point))
        } else {
            self.scalar_mul(k.magnitude(), point)
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y² = x³ + {}x + {} (mod {}), G = {}, q = {}",
            self.a, self.b, self.p, self.g, self.q
        )
    }
}
