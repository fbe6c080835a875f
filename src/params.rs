//! Named example curves
//!
//! Both parameter sets are small enough to follow with pencil and paper and
//! are, for exactly that reason, completely insecure.

use num_bigint::BigUint;

use crate::curve::Curve;

/// The default demonstration curve: y² = x³ + 2x + 3 (mod 97) with
/// G = (3, 6) of order q = 5
///
/// p = 97 keeps hand calculations tractable while leaving enough points to
/// make signatures look non-trivial. q is prime, so every nonce in [1, q-1]
/// is invertible.
pub fn demo_p97() -> Curve {
    Curve::new(
        BigUint::from(97u32),
        BigUint::from(2u32),
        BigUint::from(3u32),
        (BigUint::from(3u32), BigUint::from(6u32)),
        BigUint::from(5u32),
    )
    .expect("demo curve parameters are non-singular")
}

/// The classic blackboard curve: y² = x³ + x + 10 (mod 11) with G = (6, 1)
/// of order q = 10
///
/// q is composite, so 60% of all scalars have no inverse mod q — signing on
/// this curve exercises every retry and rejection path the protocol has.
/// Kept for reference alongside the worked examples that use it.
pub fn demo_p11() -> Curve {
    Curve::new(
        BigUint::from(11u32),
        BigUint::from(1u32),
        BigUint::from(10u32),
        (BigUint::from(6u32), BigUint::from(1u32)),
        BigUint::from(10u32),
    )
    .expect("demo curve parameters are non-singular")
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;

    use super::*;
    use crate::curve::Point;

    #[test]
    fn generators_lie_on_their_curves() {
        for curve in [demo_p97(), demo_p11()] {
            assert!(curve.is_on_curve(curve.generator()), "{curve}");
        }
    }

    #[test]
    fn generator_order_annihilates_the_generator() {
        for curve in [demo_p97(), demo_p11()] {
            let multiple = curve
                .scalar_mul(curve.order(), curve.generator())
                .unwrap();
            assert_eq!(multiple, Point::Infinity, "{curve}");
        }
    }

    #[test]
    fn orders_are_positive() {
        for curve in [demo_p97(), demo_p11()] {
            assert!(!curve.order().is_zero());
        }
    }
}
