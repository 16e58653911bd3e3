//! Plain and compound assignment into a [`Sequence`].
//!
//! A right-hand side is either an expression (elementwise) or a scalar
//! (broadcast). The split is made by the type system: expressions implement
//! [`SequenceExpression`], scalars are the built-in numeric types or values
//! wrapped in [`Scalar`]. One generic path serves every expression type,
//! including sequences with a different element type.
//!
//! Compound assignment never reallocates. Plain assignment from an expression
//! resizes the destination to the source length first, then fills it in a
//! single pass. Reading and writing the same sequence in one assignment is
//! rejected by the borrow checker, so no aliasing case exists.

use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use crate::error::Result;
use crate::expr::{assert_same_len, same_len, Scalar, SequenceExpression};
use crate::ops::{AddOp, CompoundOp, DivOp, MulOp, SubOp};
use crate::sequence::Sequence;

/// Anything that can be assigned into a `Sequence<T>` with
/// [`Sequence::assign`].
pub trait AssignSource<T> {
    /// Writes `self` into `target`.
    fn assign_to(self, target: &mut Sequence<T>);
}

impl<T, E> AssignSource<T> for E
where
    E: SequenceExpression,
    T: From<E::Item>,
{
    fn assign_to(self, target: &mut Sequence<T>) {
        let len = self.len();
        target.refill(len, (0..len).map(|index| T::from(self.element_at(index))));
    }
}

impl<T, S> AssignSource<T> for Scalar<S>
where
    T: From<S> + Clone,
{
    fn assign_to(self, target: &mut Sequence<T>) {
        target.fill(T::from(self.0));
    }
}

impl<T> Sequence<T> {
    /// Assigns an expression or a scalar.
    ///
    /// - From an expression: the length becomes `rhs.len()` and element `i`
    ///   becomes `T::from(rhs.element_at(i))`.
    /// - From a scalar: every element becomes the scalar, length unchanged.
    ///
    /// ```
    /// use lazyseq_core::{seq, Sequence};
    ///
    /// let mut s: Sequence<i32> = Sequence::from_elem(4, 7);
    /// s.assign(0_i32);
    /// assert_eq!(s, seq![0, 0, 0, 0]);
    ///
    /// let small: Sequence<i32> = seq![1, 2];
    /// let mut wide: Sequence<f64> = Sequence::new();
    /// wide.assign(&small * 3_i32);
    /// assert_eq!(wide, seq![3.0, 6.0]);
    /// ```
    pub fn assign<R: AssignSource<T>>(&mut self, rhs: R) -> &mut Self {
        rhs.assign_to(self);
        self
    }

    /// Folds `rhs` into every element with `Op`.
    #[track_caller]
    fn fold_expr<Op, E>(&mut self, rhs: E)
    where
        E: SequenceExpression,
        Op: CompoundOp<T, E::Item>,
    {
        assert_same_len(self.len(), rhs.len());
        for (index, element) in self.iter_mut().enumerate() {
            Op::apply_in_place(element, rhs.element_at(index));
        }
    }

    /// Folds a broadcast scalar into every element with `Op`.
    fn fold_scalar<Op, S>(&mut self, scalar: &S)
    where
        S: Clone,
        Op: CompoundOp<T, S>,
    {
        for element in self.iter_mut() {
            Op::apply_in_place(element, scalar.clone());
        }
    }

    fn try_fold_expr<Op, E>(&mut self, rhs: E) -> Result<()>
    where
        E: SequenceExpression,
        Op: CompoundOp<T, E::Item>,
    {
        if let Err(err) = same_len(self.len(), rhs.len()) {
            tracing::debug!(%err, "rejected compound assignment");
            return Err(err);
        }
        self.fold_expr::<Op, E>(rhs);
        Ok(())
    }

    /// `self[i] += rhs[i]`, checking lengths first.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatch`](crate::SequenceError::SizeMismatch) and
    /// leaves `self` untouched if the lengths differ.
    pub fn try_add_assign<E>(&mut self, rhs: E) -> Result<()>
    where
        E: SequenceExpression,
        T: AddAssign<E::Item>,
    {
        self.try_fold_expr::<AddOp, E>(rhs)
    }

    /// `self[i] -= rhs[i]`, checking lengths first.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatch`](crate::SequenceError::SizeMismatch) and
    /// leaves `self` untouched if the lengths differ.
    pub fn try_sub_assign<E>(&mut self, rhs: E) -> Result<()>
    where
        E: SequenceExpression,
        T: SubAssign<E::Item>,
    {
        self.try_fold_expr::<SubOp, E>(rhs)
    }

    /// `self[i] *= rhs[i]`, checking lengths first.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatch`](crate::SequenceError::SizeMismatch) and
    /// leaves `self` untouched if the lengths differ.
    pub fn try_mul_assign<E>(&mut self, rhs: E) -> Result<()>
    where
        E: SequenceExpression,
        T: MulAssign<E::Item>,
    {
        self.try_fold_expr::<MulOp, E>(rhs)
    }

    /// `self[i] /= rhs[i]`, checking lengths first.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatch`](crate::SequenceError::SizeMismatch) and
    /// leaves `self` untouched if the lengths differ.
    pub fn try_div_assign<E>(&mut self, rhs: E) -> Result<()>
    where
        E: SequenceExpression,
        T: DivAssign<E::Item>,
    {
        self.try_fold_expr::<DivOp, E>(rhs)
    }
}

macro_rules! compound_assign {
    ($($trait:ident $method:ident $op:ident),*) => {$(
        impl<T, E> $trait<E> for Sequence<T>
        where
            E: SequenceExpression,
            T: $trait<E::Item>,
        {
            #[track_caller]
            fn $method(&mut self, rhs: E) {
                self.fold_expr::<$op, E>(rhs);
            }
        }

        impl<T, S> $trait<Scalar<S>> for Sequence<T>
        where
            S: Clone,
            T: $trait<S>,
        {
            fn $method(&mut self, rhs: Scalar<S>) {
                self.fold_scalar::<$op, S>(&rhs.0);
            }
        }
    )*};
}

compound_assign!(
    AddAssign add_assign AddOp,
    SubAssign sub_assign SubOp,
    MulAssign mul_assign MulOp,
    DivAssign div_assign DivOp
);

macro_rules! primitive_scalars {
    ($($scalar:ident)*) => {$(
        impl<T> AssignSource<T> for $scalar
        where
            T: From<$scalar> + Clone,
        {
            fn assign_to(self, target: &mut Sequence<T>) {
                target.fill(T::from(self));
            }
        }

        impl<T: AddAssign<$scalar>> AddAssign<$scalar> for Sequence<T> {
            fn add_assign(&mut self, rhs: $scalar) {
                self.fold_scalar::<AddOp, $scalar>(&rhs);
            }
        }

        impl<T: SubAssign<$scalar>> SubAssign<$scalar> for Sequence<T> {
            fn sub_assign(&mut self, rhs: $scalar) {
                self.fold_scalar::<SubOp, $scalar>(&rhs);
            }
        }

        impl<T: MulAssign<$scalar>> MulAssign<$scalar> for Sequence<T> {
            fn mul_assign(&mut self, rhs: $scalar) {
                self.fold_scalar::<MulOp, $scalar>(&rhs);
            }
        }

        impl<T: DivAssign<$scalar>> DivAssign<$scalar> for Sequence<T> {
            fn div_assign(&mut self, rhs: $scalar) {
                self.fold_scalar::<DivOp, $scalar>(&rhs);
            }
        }
    )*};
}

primitive_scalars!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SequenceError;

    #[test]
    fn test_scalar_compound() {
        let mut a: Sequence<i32> = seq![1, 2, 3];
        a *= 10_i32;
        assert_eq!(a, seq![10, 20, 30]);
        a += 1_i32;
        a -= 2_i32;
        a /= 3_i32;
        assert_eq!(a, seq![3, 6, 9]);
    }

    #[test]
    fn test_expression_compound() {
        let mut d: Sequence<f64> = seq![1.0, 2.0, 3.0];
        let s: Sequence<f64> = seq![0.5, 0.5, 0.5];
        d += &s * 2.0_f64;
        assert_eq!(d, seq![2.0, 3.0, 4.0]);
        d *= &s;
        assert_eq!(d, seq![1.0, 1.5, 2.0]);
        d -= s.clone();
        d /= &s;
        assert_eq!(d, seq![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_compound_keeps_storage() {
        let mut d: Sequence<i64> = seq![1, 2, 3];
        let s: Sequence<i64> = seq![4, 5, 6];
        let ptr = d.as_slice().as_ptr();
        let capacity = d.capacity();
        d += &s;
        assert_eq!(d.as_slice().as_ptr(), ptr);
        assert_eq!(d.capacity(), capacity);
    }

    #[test]
    fn test_assign_resizes() {
        let mut d: Sequence<i32> = seq![9; 5];
        let s: Sequence<i32> = seq![1, 2];
        d.assign(&s);
        assert_eq!(d, seq![1, 2]);

        d.assign(&s + &s + &s);
        assert_eq!(d, seq![3, 6]);

        let longer: Sequence<i32> = seq![1, 2, 3, 4];
        d.assign(longer);
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn test_assign_scalar_keeps_len() {
        let mut d: Sequence<f64> = seq![1.0, 2.0, 3.0];
        d.assign(0.25_f64);
        assert_eq!(d, seq![0.25; 3]);
    }

    #[test]
    fn test_assign_converts() {
        let ints: Sequence<u8> = seq![1, 2, 250];
        let mut wide: Sequence<i64> = Sequence::new();
        wide.assign(&ints);
        assert_eq!(wide, seq![1, 2, 250]);
    }

    #[test]
    fn test_scalar_wrapper() {
        use std::num::Wrapping;

        let mut a: Sequence<Wrapping<u8>> = seq![Wrapping(200), Wrapping(10)];
        a += Scalar(Wrapping(100));
        assert_eq!(a, seq![Wrapping(44), Wrapping(110)]);
        a.assign(Scalar(Wrapping(1)));
        assert_eq!(a, seq![Wrapping(1); 2]);
    }

    #[test]
    fn test_try_assign() {
        let mut d: Sequence<i32> = seq![1, 2, 3];
        let short: Sequence<i32> = seq![1, 1];
        assert_eq!(
            d.try_add_assign(&short),
            Err(SequenceError::SizeMismatch { lhs: 3, rhs: 2 })
        );
        assert_eq!(d, seq![1, 2, 3]);

        let ok: Sequence<i32> = seq![2, 2, 2];
        d.try_mul_assign(&ok).unwrap();
        d.try_sub_assign(&ok).unwrap();
        d.try_div_assign(&ok).unwrap();
        assert_eq!(d, seq![0, 1, 2]);
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "strict-sizes"))]
    #[should_panic(expected = "operand lengths differ")]
    fn test_mismatched_compound_panics() {
        let mut d: Sequence<i32> = seq![1, 2, 3];
        let short: Sequence<i32> = seq![1, 1];
        d += &short;
    }
}
