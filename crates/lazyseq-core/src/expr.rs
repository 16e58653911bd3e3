//! Lazily evaluated sequence expressions.
//!
//! An expression is anything that knows its length and can compute the value
//! at a given index on demand. Applying an arithmetic operator to expressions
//! does not compute anything: it returns a new node that remembers its
//! operands. Values are produced only when a consumer (usually
//! [`Sequence::from_expr`], [`Sequence::assign`] or a compound assignment)
//! walks the index range.
//!
//! Every node is its own concrete generic type, so an expression such as
//! `&a + &b * 2.0_f64` is a single value of type
//! `Binary<&Sequence<f64>, ScalarRhs<&Sequence<f64>, f64, MulOp>, AddOp>`
//! whose evaluation the compiler can inline completely.
//!
//! ## Scalar literals
//!
//! Every node accepts each built-in numeric type as a scalar operand, next to
//! any other expression. An unsuffixed literal such as `2` or `2.0` therefore
//! matches several impls, and the node type stays unknown until the literal's
//! type is. Write scalar literals with a suffix (`&b * 2_i32`, `8.0_f64 / &a`)
//! or bind them to a typed variable before combining them with an expression.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Neg;

use crate::error::{Result, SequenceError};
use crate::ops::{AddOp, BinaryOp, DivOp, MulOp, OpSymbol, SubOp};
use crate::sequence::Sequence;

/// A value that behaves like a read-only sequence of `Self::Item`.
///
/// Implementors must be side-effect free: calling [`element_at`] never
/// changes what any later call returns.
///
/// [`element_at`]: SequenceExpression::element_at
pub trait SequenceExpression {
    /// The element type produced by this expression.
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Computes the element at `index`.
    ///
    /// # Panics
    ///
    /// May panic if `index >= self.len()`. Use [`get`](Self::get) for a
    /// checked lookup.
    fn element_at(&self, index: usize) -> Self::Item;

    /// Returns true if the expression has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Computes the element at `index`, or `None` if it is out of range.
    fn get(&self, index: usize) -> Option<Self::Item> {
        (index < self.len()).then(|| self.element_at(index))
    }

    /// Computes the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if `index >= self.len()`.
    fn try_get(&self, index: usize) -> Result<Self::Item> {
        self.get(index).ok_or(SequenceError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Iterates over the computed elements in index order.
    fn iter(&self) -> ExprIter<'_, Self>
    where
        Self: Sized,
    {
        ExprIter::new(self)
    }

    /// Applies `f` to every element, lazily.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// `self[i] + scalar` for any scalar type.
    fn add_scalar<S>(self, scalar: S) -> ScalarRhs<Self, S, AddOp>
    where
        Self: Sized,
    {
        ScalarRhs::new(self, scalar)
    }

    /// `self[i] - scalar` for any scalar type.
    fn sub_scalar<S>(self, scalar: S) -> ScalarRhs<Self, S, SubOp>
    where
        Self: Sized,
    {
        ScalarRhs::new(self, scalar)
    }

    /// `self[i] * scalar` for any scalar type.
    fn mul_scalar<S>(self, scalar: S) -> ScalarRhs<Self, S, MulOp>
    where
        Self: Sized,
    {
        ScalarRhs::new(self, scalar)
    }

    /// `self[i] / scalar` for any scalar type.
    fn div_scalar<S>(self, scalar: S) -> ScalarRhs<Self, S, DivOp>
    where
        Self: Sized,
    {
        ScalarRhs::new(self, scalar)
    }

    /// Evaluates every element into a new, detached [`Sequence`].
    #[must_use]
    fn materialize(&self) -> Sequence<Self::Item>
    where
        Self: Sized,
    {
        Sequence::from_expr(self)
    }
}

impl<E: SequenceExpression + ?Sized> SequenceExpression for &E {
    type Item = E::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Self::Item {
        (**self).element_at(index)
    }
}

/// Checks that two expressions have the same length.
///
/// Combining or compound-assigning expressions of different lengths is a
/// precondition violation; call this first when the lengths come from
/// untrusted input.
///
/// # Errors
///
/// Returns [`SequenceError::SizeMismatch`] if the lengths differ.
pub fn ensure_same_len<L, R>(lhs: &L, rhs: &R) -> Result<()>
where
    L: SequenceExpression + ?Sized,
    R: SequenceExpression + ?Sized,
{
    same_len(lhs.len(), rhs.len())
}

pub(crate) fn same_len(lhs: usize, rhs: usize) -> Result<()> {
    if lhs == rhs {
        Ok(())
    } else {
        Err(SequenceError::SizeMismatch { lhs, rhs })
    }
}

/// Panics on a length mismatch in debug builds or with `strict-sizes`.
/// Compiles to nothing otherwise.
#[inline]
#[track_caller]
pub(crate) fn assert_same_len(lhs: usize, rhs: usize) {
    if cfg!(any(debug_assertions, feature = "strict-sizes")) {
        if let Err(err) = same_len(lhs, rhs) {
            panic!("{err}");
        }
    }
}

/// Wraps a value so operators treat it as a scalar.
///
/// Built-in numeric types work as scalars directly. Other element types
/// (rationals, wrapping integers, user types) go through this wrapper:
///
/// ```
/// use std::num::Wrapping;
/// use lazyseq_core::{seq, Scalar, SequenceExpression};
///
/// let a = seq![Wrapping(250u8), Wrapping(3)];
/// let b = (&a + Scalar(Wrapping(10u8))).materialize();
/// assert_eq!(b.as_slice(), &[Wrapping(4), Wrapping(13)]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scalar<S>(pub S);

macro_rules! scalar_lhs_ops {
    ($($trait:ident $method:ident $op:ident),*) => {$(
        impl<S, E> ::std::ops::$trait<E> for Scalar<S>
        where
            E: SequenceExpression,
        {
            type Output = ScalarLhs<S, E, $op>;

            #[inline]
            fn $method(self, rhs: E) -> Self::Output {
                ScalarLhs::new(self.0, rhs)
            }
        }
    )*};
}

scalar_lhs_ops!(Add add AddOp, Sub sub SubOp, Mul mul MulOp, Div div DivOp);

/// Elementwise `lhs[i] OP rhs[i]`.
#[derive(Clone, Copy)]
pub struct Binary<L, R, Op> {
    lhs: L,
    rhs: R,
    op: PhantomData<Op>,
}

impl<L, R, Op> Binary<L, R, Op>
where
    L: SequenceExpression,
    R: SequenceExpression,
{
    /// Combines two expressions of equal length.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ and debug assertions or the
    /// `strict-sizes` feature are enabled.
    #[inline]
    #[track_caller]
    pub fn new(lhs: L, rhs: R) -> Self {
        assert_same_len(lhs.len(), rhs.len());
        Self {
            lhs,
            rhs,
            op: PhantomData,
        }
    }

    /// The left operand.
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    /// The right operand.
    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}

impl<L, R, Op> SequenceExpression for Binary<L, R, Op>
where
    L: SequenceExpression,
    R: SequenceExpression,
    Op: BinaryOp<L::Item, R::Item>,
{
    type Item = Op::Output;

    #[inline]
    fn len(&self) -> usize {
        self.lhs.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Self::Item {
        Op::apply(self.lhs.element_at(index), self.rhs.element_at(index))
    }
}

impl<L: fmt::Debug, R: fmt::Debug, Op: OpSymbol> fmt::Debug for Binary<L, R, Op> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} {} {:?})", self.lhs, Op::SYMBOL, self.rhs)
    }
}

/// Broadcast `expr[i] OP scalar`.
#[derive(Clone, Copy)]
pub struct ScalarRhs<E, S, Op> {
    expr: E,
    scalar: S,
    op: PhantomData<Op>,
}

impl<E, S, Op> ScalarRhs<E, S, Op> {
    /// Pairs an expression with a scalar right operand.
    #[inline]
    pub fn new(expr: E, scalar: S) -> Self {
        Self {
            expr,
            scalar,
            op: PhantomData,
        }
    }

    /// The scalar operand.
    pub fn scalar(&self) -> &S {
        &self.scalar
    }
}

impl<E, S, Op> SequenceExpression for ScalarRhs<E, S, Op>
where
    E: SequenceExpression,
    S: Clone,
    Op: BinaryOp<E::Item, S>,
{
    type Item = Op::Output;

    #[inline]
    fn len(&self) -> usize {
        self.expr.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Self::Item {
        Op::apply(self.expr.element_at(index), self.scalar.clone())
    }
}

impl<E: fmt::Debug, S: fmt::Debug, Op: OpSymbol> fmt::Debug for ScalarRhs<E, S, Op> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} {} {:?})", self.expr, Op::SYMBOL, self.scalar)
    }
}

/// Broadcast `scalar OP expr[i]`.
#[derive(Clone, Copy)]
pub struct ScalarLhs<S, E, Op> {
    scalar: S,
    expr: E,
    op: PhantomData<Op>,
}

impl<S, E, Op> ScalarLhs<S, E, Op> {
    /// Pairs a scalar left operand with an expression.
    #[inline]
    pub fn new(scalar: S, expr: E) -> Self {
        Self {
            scalar,
            expr,
            op: PhantomData,
        }
    }

    /// The scalar operand.
    pub fn scalar(&self) -> &S {
        &self.scalar
    }
}

impl<S, E, Op> SequenceExpression for ScalarLhs<S, E, Op>
where
    E: SequenceExpression,
    S: Clone,
    Op: BinaryOp<S, E::Item>,
{
    type Item = Op::Output;

    #[inline]
    fn len(&self) -> usize {
        self.expr.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Self::Item {
        Op::apply(self.scalar.clone(), self.expr.element_at(index))
    }
}

impl<S: fmt::Debug, E: fmt::Debug, Op: OpSymbol> fmt::Debug for ScalarLhs<S, E, Op> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} {} {:?})", self.scalar, Op::SYMBOL, self.expr)
    }
}

/// Elementwise `-expr[i]`.
#[derive(Clone, Copy)]
pub struct Negate<E> {
    expr: E,
}

impl<E> Negate<E> {
    /// Negates an expression.
    #[inline]
    pub fn new(expr: E) -> Self {
        Self { expr }
    }
}

impl<E> SequenceExpression for Negate<E>
where
    E: SequenceExpression,
    E::Item: Neg,
{
    type Item = <E::Item as Neg>::Output;

    #[inline]
    fn len(&self) -> usize {
        self.expr.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Self::Item {
        -self.expr.element_at(index)
    }
}

impl<E: fmt::Debug> fmt::Debug for Negate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(-{:?})", self.expr)
    }
}

/// Elementwise `f(expr[i])`.
#[derive(Clone, Copy)]
pub struct Map<E, F> {
    expr: E,
    f: F,
}

impl<E, F> Map<E, F> {
    /// Applies `f` lazily to every element of `expr`.
    #[inline]
    pub fn new(expr: E, f: F) -> Self {
        Self { expr, f }
    }
}

impl<E, F, U> SequenceExpression for Map<E, F>
where
    E: SequenceExpression,
    F: Fn(E::Item) -> U,
{
    type Item = U;

    #[inline]
    fn len(&self) -> usize {
        self.expr.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> U {
        (self.f)(self.expr.element_at(index))
    }
}

impl<E: fmt::Debug, F> fmt::Debug for Map<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("expr", &self.expr)
            .finish_non_exhaustive()
    }
}

impl_expression_ops!([L, R, Op] Binary<L, R, Op>);
impl_expression_ops!([E, S, Op] ScalarRhs<E, S, Op>);
impl_expression_ops!([S, E, Op] ScalarLhs<S, E, Op>);
impl_expression_ops!([E] Negate<E>);
impl_expression_ops!([E, F] Map<E, F>);

/// Iterator over the values of an expression.
///
/// Created by [`SequenceExpression::iter`].
#[derive(Debug)]
pub struct ExprIter<'a, E: ?Sized> {
    expr: &'a E,
    front: usize,
    back: usize,
}

impl<'a, E: SequenceExpression + ?Sized> ExprIter<'a, E> {
    /// Creates an iterator over all indices of `expr`.
    pub fn new(expr: &'a E) -> Self {
        Self {
            expr,
            front: 0,
            back: expr.len(),
        }
    }
}

impl<E: SequenceExpression + ?Sized> Iterator for ExprIter<'_, E> {
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let value = self.expr.element_at(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<E: SequenceExpression + ?Sized> DoubleEndedIterator for ExprIter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.expr.element_at(self.back))
    }
}

impl<E: SequenceExpression + ?Sized> ExactSizeIterator for ExprIter<'_, E> {}

impl<E: SequenceExpression + ?Sized> FusedIterator for ExprIter<'_, E> {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Counts how many elements were computed.
    struct Counting<'a> {
        values: &'a [i64],
        calls: &'a Cell<usize>,
    }

    impl SequenceExpression for Counting<'_> {
        type Item = i64;

        fn len(&self) -> usize {
            self.values.len()
        }

        fn element_at(&self, index: usize) -> i64 {
            self.calls.set(self.calls.get() + 1);
            self.values[index]
        }
    }

    #[test]
    fn test_binary_is_elementwise() {
        let a: Sequence<i32> = seq![1, 2, 3];
        let b: Sequence<i32> = seq![4, 5, 6];
        let sum = &a + &b;
        assert_eq!(sum.len(), 3);
        assert_eq!(sum.element_at(0), 5);
        assert_eq!(sum.element_at(2), 9);
    }

    #[test]
    fn test_building_computes_nothing() {
        let calls = Cell::new(0);
        let values = [1, 2, 3];
        let leaf = Counting {
            values: &values,
            calls: &calls,
        };

        let expr = leaf.mul_scalar(10_i64) + 1_i64;
        assert_eq!(calls.get(), 0);

        assert_eq!(expr.element_at(1), 21);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_nested_expression() {
        let a: Sequence<i32> = seq![1, 2, 3];
        let b: Sequence<i32> = seq![4, 5, 6];
        let c: Sequence<i32> = seq![1, 1, 1];
        let expr = &a + &b * 2_i32 - &c;
        let values: Vec<i32> = expr.iter().collect();
        assert_eq!(values, vec![8, 11, 14]);
    }

    #[test]
    fn test_suffixed_literal_materializes() {
        let a: Sequence<i32> = seq![1, 2, 3];
        let b: Sequence<i32> = seq![4, 5, 6];
        assert_eq!((&a + &b * 2_i32).materialize(), seq![9, 12, 15]);
        assert_eq!((10_i32 + &a).materialize(), seq![11, 12, 13]);
        assert_eq!((2_i32 * &a).materialize(), seq![2, 4, 6]);
    }

    #[test]
    fn test_scalar_on_both_sides() {
        let a: Sequence<f64> = seq![1.0, 2.0, 4.0];
        let right = &a / 2.0_f64;
        let left = 8.0_f64 / &a;
        assert_eq!(right.iter().collect::<Vec<_>>(), vec![0.5, 1.0, 2.0]);
        assert_eq!(left.iter().collect::<Vec<_>>(), vec![8.0, 4.0, 2.0]);
    }

    #[test]
    fn test_negate_and_map() {
        let a: Sequence<i32> = seq![1, -2, 3];
        let expr = (-&a).map(|x: i32| x * x + 1);
        assert_eq!(expr.iter().collect::<Vec<_>>(), vec![2, 5, 10]);
    }

    #[test]
    fn test_get_and_try_get() {
        let a: Sequence<i32> = seq![1, 2];
        let expr = &a * 3_i32;
        assert_eq!(expr.get(1), Some(6));
        assert_eq!(expr.get(2), None);
        assert_eq!(
            expr.try_get(5),
            Err(SequenceError::OutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_iter_from_both_ends() {
        let a: Sequence<i32> = seq![1, 2, 3, 4];
        let expr = &a + 1_i32;
        let mut iter = expr.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next_back(), Some(5));
        assert_eq!(iter.collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn test_ensure_same_len() {
        let a: Sequence<i32> = seq![1, 2, 3];
        let b: Sequence<i32> = seq![1, 2];
        assert!(ensure_same_len(&a, &a).is_ok());
        assert_eq!(
            ensure_same_len(&a, &b),
            Err(SequenceError::SizeMismatch { lhs: 3, rhs: 2 })
        );
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "strict-sizes"))]
    #[should_panic(expected = "operand lengths differ")]
    fn test_mismatched_lengths_panic() {
        let a: Sequence<i32> = seq![1, 2, 3];
        let b: Sequence<i32> = seq![1, 2];
        let _ = &a + &b;
    }

    #[test]
    fn test_debug_shows_tree() {
        let a: Sequence<i32> = seq![1, 2];
        let expr = &a * 2_i32 + 1_i32;
        assert_eq!(format!("{expr:?}"), "(([1, 2] * 2) + 1)");
    }

    #[test]
    fn test_nodes_hold_no_storage() {
        let a: Sequence<f64> = seq![1.0; 1000];
        let expr = &a + &a;
        assert_eq!(
            std::mem::size_of_val(&expr),
            2 * std::mem::size_of::<&Sequence<f64>>()
        );
    }
}
