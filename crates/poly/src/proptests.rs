//! Property-based tests for polynomial arithmetic.

use proptest::prelude::*;

use crate::Polynomial;

// Strategy for small polynomials (degree 0-5) built through set_coeff,
// so the buffer follows the same growth path as ordinary use.
fn small_poly() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec(-100i64..100, 1..=6).prop_map(|coeffs| {
        let mut p = Polynomial::new();
        for (power, c) in coeffs.into_iter().enumerate() {
            p.set_coeff(c, power as i64);
        }
        p
    })
}

// Strategy for polynomials with a non-zero leading coefficient.
fn nonzero_leading_poly() -> impl Strategy<Value = Polynomial> {
    small_poly().prop_filter("leading coefficient must be non-zero", |p| {
        p.leading_coeff() != 0
    })
}

proptest! {
    // Ring axioms

    #[test]
    fn add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn mul_distributes_over_add(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn add_negation_cancels(a in small_poly()) {
        let sum = &a + &(-&a);
        for power in 0..=a.degree() as i64 {
            prop_assert_eq!(sum.coeff(power), 0);
        }
    }

    #[test]
    fn sub_is_add_of_negation(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a - &b, &a + &(-&b));
    }

    // Degree and accessor contracts

    #[test]
    fn mul_degree_adds(a in nonzero_leading_poly(), b in nonzero_leading_poly()) {
        prop_assert_eq!((&a * &b).degree(), a.degree() + b.degree());
    }

    #[test]
    fn set_then_get(c in any::<i64>(), power in 0i64..64) {
        let mut p = Polynomial::new();
        p.set_coeff(c, power);
        prop_assert_eq!(p.coeff(power), c);
    }

    #[test]
    fn reads_beyond_degree_are_zero(a in small_poly(), power in 0i64..256) {
        if power as usize > a.degree() {
            prop_assert_eq!(a.coeff(power), 0);
        }
    }

    #[test]
    fn negative_powers_coerce(c in any::<i64>(), power in -64i64..0) {
        let mut p = Polynomial::new();
        p.set_coeff(c, power);
        prop_assert_eq!(p.coeff(1), 0);
        prop_assert_eq!(p.degree(), 1);
    }

    // Equality

    #[test]
    fn equality_reflexive(a in small_poly()) {
        prop_assert_eq!(&a, &a);
    }

    #[test]
    fn equality_ignores_growth_path(coeffs in proptest::collection::vec(-50i64..50, 1..=6)) {
        // Ascending insertion grows step by step; descending insertion
        // allocates the full buffer up front. Same value either way.
        let mut ascending = Polynomial::new();
        for (power, &c) in coeffs.iter().enumerate() {
            ascending.set_coeff(c, power as i64);
        }

        let mut descending = Polynomial::new();
        for (power, &c) in coeffs.iter().enumerate().rev() {
            descending.set_coeff(c, power as i64);
        }

        prop_assert_eq!(&ascending, &descending);
    }

    #[test]
    fn clone_preserves_value_and_capacity(a in small_poly()) {
        let b = a.clone();
        prop_assert_eq!(&b, &a);
        prop_assert_eq!(b.capacity(), a.capacity());
    }

    // Evaluation is a ring homomorphism

    #[test]
    fn eval_commutes_with_add(a in small_poly(), b in small_poly(), x in -10i64..10) {
        prop_assert_eq!((&a + &b).eval(x), a.eval(x) + b.eval(x));
    }

    #[test]
    fn eval_commutes_with_mul(a in small_poly(), b in small_poly(), x in -5i64..5) {
        prop_assert_eq!((&a * &b).eval(x), a.eval(x) * b.eval(x));
    }
}
