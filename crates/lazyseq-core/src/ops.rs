//! Arithmetic operation tags.
//!
//! Each tag is a zero-sized type naming one of the four arithmetic operators.
//! Expression nodes carry the tag as a type parameter, so the operator is
//! fixed at compile time and a node never stores a function pointer.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// A binary operator combining an `L` and an `R` into `Self::Output`.
pub trait BinaryOp<L, R> {
    /// Result type of the operation.
    type Output;

    /// Applies the operator.
    fn apply(lhs: L, rhs: R) -> Self::Output;
}

/// The in-place form of a binary operator (`+=` and friends).
pub trait CompoundOp<T, R> {
    /// Folds `rhs` into `target`.
    fn apply_in_place(target: &mut T, rhs: R);
}

/// Printable operator symbol, used by the `Debug` output of expression trees.
pub trait OpSymbol {
    /// The infix symbol, e.g. `"+"`.
    const SYMBOL: &'static str;
}

macro_rules! binary_op {
    (
        $(#[$doc:meta])*
        $name:ident, $trait:ident :: $method:ident, $assign:ident :: $assign_method:ident, $symbol:literal
    ) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<L: $trait<R>, R> BinaryOp<L, R> for $name {
            type Output = <L as $trait<R>>::Output;

            #[inline]
            fn apply(lhs: L, rhs: R) -> Self::Output {
                lhs.$method(rhs)
            }
        }

        impl<T: $assign<R>, R> CompoundOp<T, R> for $name {
            #[inline]
            fn apply_in_place(target: &mut T, rhs: R) {
                target.$assign_method(rhs);
            }
        }

        impl OpSymbol for $name {
            const SYMBOL: &'static str = $symbol;
        }
    };
}

binary_op!(
    /// Addition.
    AddOp, Add::add, AddAssign::add_assign, "+"
);
binary_op!(
    /// Subtraction.
    SubOp, Sub::sub, SubAssign::sub_assign, "-"
);
binary_op!(
    /// Multiplication.
    MulOp, Mul::mul, MulAssign::mul_assign, "*"
);
binary_op!(
    /// Division.
    DivOp, Div::div, DivAssign::div_assign, "/"
);
