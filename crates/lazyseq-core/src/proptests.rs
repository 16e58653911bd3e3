//! Property-based tests for lazy sequence arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Sequence, SequenceExpression};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn sequence() -> impl Strategy<Value = Sequence<i64>> {
        proptest::collection::vec(small_int(), 0..32).prop_map(Sequence::from)
    }

    // Two sequences of the same length
    fn pair() -> impl Strategy<Value = (Sequence<i64>, Sequence<i64>)> {
        (0usize..32).prop_flat_map(|len| {
            (
                proptest::collection::vec(small_int(), len).prop_map(Sequence::from),
                proptest::collection::vec(small_int(), len).prop_map(Sequence::from),
            )
        })
    }

    // Same, but the right side has no zeros
    fn divisible_pair() -> impl Strategy<Value = (Sequence<i64>, Sequence<i64>)> {
        (0usize..32).prop_flat_map(|len| {
            (
                proptest::collection::vec(small_int(), len).prop_map(Sequence::from),
                proptest::collection::vec(non_zero_int(), len).prop_map(Sequence::from),
            )
        })
    }

    proptest! {
        #[test]
        fn elementwise_matches_operator((a, b) in pair()) {
            let sum = &a + &b;
            let diff = &a - &b;
            let prod = &a * &b;
            prop_assert_eq!(sum.len(), a.len());
            for i in 0..a.len() {
                prop_assert_eq!(sum.element_at(i), a[i] + b[i]);
                prop_assert_eq!(diff.element_at(i), a[i] - b[i]);
                prop_assert_eq!(prod.element_at(i), a[i] * b[i]);
            }
        }

        #[test]
        fn elementwise_division((a, b) in divisible_pair()) {
            let quot = &a / &b;
            for i in 0..a.len() {
                prop_assert_eq!(quot.element_at(i), a[i] / b[i]);
            }
        }

        #[test]
        fn scalar_on_either_side(a in sequence(), s in small_int()) {
            let right = &a + s;
            let left_sum = s + &a;
            let left_diff = s - &a;
            let left_prod = s * &a;
            for i in 0..a.len() {
                prop_assert_eq!(right.element_at(i), a[i] + s);
                prop_assert_eq!(left_sum.element_at(i), s + a[i]);
                prop_assert_eq!(left_diff.element_at(i), s - a[i]);
                prop_assert_eq!(left_prod.element_at(i), s * a[i]);
            }
        }

        #[test]
        fn materialized_copy_is_detached((mut a, b) in pair()) {
            let expected: Vec<i64> = a.iter().zip(b.iter()).map(|(x, y)| x * 2 + y).collect();
            let c = (&a * 2_i64 + &b).materialize();
            prop_assert_eq!(c.len(), expected.len());

            a += 1_i64;
            prop_assert_eq!(c.into_vec(), expected);
        }

        #[test]
        fn compound_equals_plain((mut d, s) in pair()) {
            let expected = (&d + &s).materialize();
            let ptr = d.as_slice().as_ptr();
            let capacity = d.capacity();

            d += &s;

            prop_assert_eq!(&d, &expected);
            prop_assert_eq!(d.as_slice().as_ptr(), ptr);
            prop_assert_eq!(d.capacity(), capacity);
        }

        #[test]
        fn broadcast_assign_keeps_len(mut d in sequence(), s in small_int()) {
            let len = d.len();
            d.assign(s);
            prop_assert_eq!(d.len(), len);
            prop_assert!(d.iter().all(|&x| x == s));
        }

        #[test]
        fn take_moves_everything(mut d in sequence()) {
            let before = d.clone();
            let moved = d.take();
            prop_assert_eq!(moved, before);
            prop_assert!(d.is_empty());
        }

        #[test]
        fn nested_expression_matches_eager((a, b) in pair(), s in small_int()) {
            let lazy = (-(&a - &b) * s + &a).materialize();
            let eager: Vec<i64> = a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| -(x - y) * s + x)
                .collect();
            prop_assert_eq!(lazy.into_vec(), eager);
        }
    }
}
