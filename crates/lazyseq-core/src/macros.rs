//! Operator wiring shared by every expression type.

/// Implements `+ - * /` and unary `-` for an expression type.
///
/// The right-hand side may be another expression, a primitive scalar or a
/// [`Scalar`](crate::expr::Scalar) wrapper. Primitive scalars are also wired
/// on the left (`2.0 * expr`). Generic parameters of the type go in brackets:
///
/// ```ignore
/// impl_expression_ops!([L, R, Op] Binary<L, R, Op>);
/// ```
macro_rules! impl_expression_ops {
    (@binary [$($gen:tt)*] $ty:ty, $trait:ident, $method:ident, $op:ident) => {
        impl<$($gen)*, RhsExpr> ::std::ops::$trait<RhsExpr> for $ty
        where
            Self: $crate::expr::SequenceExpression,
            RhsExpr: $crate::expr::SequenceExpression,
        {
            type Output = $crate::expr::Binary<Self, RhsExpr, $crate::ops::$op>;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: RhsExpr) -> Self::Output {
                $crate::expr::Binary::new(self, rhs)
            }
        }

        impl<$($gen)*, RhsScalar> ::std::ops::$trait<$crate::expr::Scalar<RhsScalar>> for $ty
        where
            Self: $crate::expr::SequenceExpression,
        {
            type Output = $crate::expr::ScalarRhs<Self, RhsScalar, $crate::ops::$op>;

            #[inline]
            fn $method(self, rhs: $crate::expr::Scalar<RhsScalar>) -> Self::Output {
                $crate::expr::ScalarRhs::new(self, rhs.0)
            }
        }
    };

    (@scalar [$($gen:tt)*] $ty:ty, $scalar:ident, $trait:ident, $method:ident, $op:ident) => {
        impl<$($gen)*> ::std::ops::$trait<$scalar> for $ty
        where
            Self: $crate::expr::SequenceExpression,
        {
            type Output = $crate::expr::ScalarRhs<Self, $scalar, $crate::ops::$op>;

            #[inline]
            fn $method(self, rhs: $scalar) -> Self::Output {
                $crate::expr::ScalarRhs::new(self, rhs)
            }
        }

        impl<$($gen)*> ::std::ops::$trait<$ty> for $scalar
        where
            $ty: $crate::expr::SequenceExpression,
        {
            type Output = $crate::expr::ScalarLhs<$scalar, $ty, $crate::ops::$op>;

            #[inline]
            fn $method(self, rhs: $ty) -> Self::Output {
                $crate::expr::ScalarLhs::new(self, rhs)
            }
        }
    };

    (@primitive $gens:tt $ty:ty, $scalar:ident) => {
        impl_expression_ops!(@scalar $gens $ty, $scalar, Add, add, AddOp);
        impl_expression_ops!(@scalar $gens $ty, $scalar, Sub, sub, SubOp);
        impl_expression_ops!(@scalar $gens $ty, $scalar, Mul, mul, MulOp);
        impl_expression_ops!(@scalar $gens $ty, $scalar, Div, div, DivOp);
    };

    (@primitives $gens:tt $ty:ty; $($scalar:ident)*) => {
        $( impl_expression_ops!(@primitive $gens $ty, $scalar); )*
    };

    ([$($gen:tt)*] $ty:ty) => {
        impl_expression_ops!(@binary [$($gen)*] $ty, Add, add, AddOp);
        impl_expression_ops!(@binary [$($gen)*] $ty, Sub, sub, SubOp);
        impl_expression_ops!(@binary [$($gen)*] $ty, Mul, mul, MulOp);
        impl_expression_ops!(@binary [$($gen)*] $ty, Div, div, DivOp);
        impl_expression_ops!(@primitives [$($gen)*] $ty;
            i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);

        impl<$($gen)*> ::std::ops::Neg for $ty
        where
            Self: $crate::expr::SequenceExpression,
        {
            type Output = $crate::expr::Negate<Self>;

            #[inline]
            fn neg(self) -> Self::Output {
                $crate::expr::Negate::new(self)
            }
        }
    };
}

/// Builds a [`Sequence`](crate::Sequence) from a literal list, like `vec!`.
///
/// ```
/// use lazyseq_core::{seq, Sequence};
///
/// let a: Sequence<i32> = seq![1, 2, 3];
/// let b = seq![7; 4];
/// assert_eq!(a.len(), 3);
/// assert_eq!(b.as_slice(), &[7, 7, 7, 7]);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($value:expr; $len:expr) => {
        $crate::Sequence::from_elem($len, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Sequence::from(::std::vec![$($value),+])
    };
}
