// rational_properties_test.rs
//
// Property tests for SimplifiedRational<i64>. Inputs are bounded so that the
// cross-multiplications stay far from i64 overflow.

use exact_ratio::{gcd, simplify, ErrorKind, RatioError, Rational, SimplifiedRational};
use proptest::prelude::*;

type Q = SimplifiedRational<i64>;

const BOUND: i64 = 100_000;

fn nonzero() -> impl Strategy<Value = i64> {
    prop_oneof![-BOUND..0i64, 1..=BOUND]
}

fn any_numerator() -> impl Strategy<Value = i64> {
    -BOUND..=BOUND
}

fn rational() -> impl Strategy<Value = Q> {
    (any_numerator(), nonzero()).prop_map(|(n, d)| Q::new(n, d).unwrap())
}

fn nonzero_rational() -> impl Strategy<Value = Q> {
    (nonzero(), nonzero()).prop_map(|(n, d)| Q::new(n, d).unwrap())
}

proptest! {
    #[test]
    fn construction_is_reduced(n in nonzero(), d in nonzero()) {
        let x = Q::new(n, d).unwrap();
        prop_assert_eq!(gcd(x.numerator().abs(), x.denominator().abs()), Ok(1));
        // Reduction never moves a sign between the parts.
        prop_assert_eq!(x.numerator().signum(), n.signum());
        prop_assert_eq!(x.denominator().signum(), d.signum());
    }

    #[test]
    fn construction_rejects_zero_denominator(n in any::<i64>()) {
        let err = Q::new(n, 0).unwrap_err();
        prop_assert_eq!(err, RatioError::ZeroDenominator);
        prop_assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn simplify_is_idempotent(n in any_numerator(), d in nonzero()) {
        let once = simplify(n, d).unwrap();
        prop_assert_eq!(simplify(once.0, once.1).unwrap(), once);
    }

    #[test]
    fn gcd_with_zero_is_identity(a in 1..i64::MAX) {
        prop_assert_eq!(gcd(a, 0), Ok(a));
    }

    #[test]
    fn gcd_rejects_out_of_range(a in i64::MIN..=0, b in any::<i64>()) {
        prop_assert_eq!(gcd(a, b), Err(RatioError::GcdDomain));
    }

    #[test]
    fn gcd_divides_both(a in 1..=BOUND, b in 0..=BOUND) {
        let g = gcd(a, b).unwrap();
        prop_assert_eq!(a % g, 0);
        prop_assert_eq!(b % g, 0);
    }

    #[test]
    fn negate_is_an_involution(x in rational()) {
        prop_assert_eq!(x.negate().unwrap().negate().unwrap(), x);
    }

    #[test]
    fn adding_the_negation_gives_zero(x in rational()) {
        let sum = x.add(Some(&x.negate().unwrap())).unwrap();
        prop_assert!(sum.is_zero());
    }

    #[test]
    fn invert_is_an_involution(x in nonzero_rational()) {
        prop_assert_eq!(x.invert().unwrap().invert().unwrap(), x);
    }

    #[test]
    fn invert_of_zero_is_a_state_error(d in nonzero()) {
        let err = Q::new(0, d).unwrap().invert().unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::State);
    }

    #[test]
    fn mul_by_inverse_is_one(n in 1..=BOUND, d in 1..=BOUND) {
        let x = Q::new(n, d).unwrap();
        prop_assert_eq!(x.mul(Some(&x.invert().unwrap())).unwrap(), Q::one());
    }

    #[test]
    fn sub_is_add_of_negation(x in rational(), y in rational()) {
        let lhs = x.sub(Some(&y)).unwrap();
        let rhs = x.add(Some(&y.negate().unwrap())).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn display_has_positive_denominator(x in rational()) {
        let shown = x.to_string();
        let (_, denom) = shown.split_once('/').unwrap();
        prop_assert!(denom.parse::<i64>().unwrap() > 0);
    }
}
