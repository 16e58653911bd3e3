//! The owned, resizable sequence container.
//!
//! [`Sequence`] wraps a `Vec<T>` and plays three roles at once: it is a leaf
//! expression (by value or by reference), it materializes arbitrary
//! expressions into its storage, and it is the target of the compound
//! assignment operators (see the `assign` module).

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::error::{Result, SequenceError};
use crate::expr::SequenceExpression;

/// An ordered, resizable, owned sequence of `T`.
///
/// Arithmetic on sequences is lazy:
///
/// ```
/// use lazyseq_core::{seq, Sequence, SequenceExpression};
///
/// let a: Sequence<i32> = seq![1, 2, 3];
/// let b: Sequence<i32> = seq![4, 5, 6];
/// let c = (&a + &b * 2_i32).materialize();
/// assert_eq!(c, seq![9, 12, 15]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    /// Element storage.
    data: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty sequence with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Creates a sequence of `len` default values.
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut data = Vec::with_capacity(len);
        data.resize_with(len, T::default);
        Self { data }
    }

    /// Creates a sequence of `len` copies of `value`.
    #[must_use]
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; len],
        }
    }

    /// Creates a sequence of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self::from_elem(len, T::zero())
    }

    /// Creates a sequence of `len` ones.
    #[must_use]
    pub fn ones(len: usize) -> Self
    where
        T: One + Clone,
    {
        Self::from_elem(len, T::one())
    }

    /// Evaluates `expr` into a new sequence.
    ///
    /// Allocates exactly `expr.len()` slots and writes element `i` from
    /// `expr.element_at(i)`, converting with `From`. The result keeps no link
    /// to the operands of `expr`.
    #[must_use]
    pub fn from_expr<E>(expr: E) -> Self
    where
        E: SequenceExpression,
        T: From<E::Item>,
    {
        let len = expr.len();
        tracing::trace!(len, "materializing expression");
        let mut data = Vec::with_capacity(len);
        data.extend((0..len).map(|index| T::from(expr.element_at(index))));
        Self { data }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the storage can hold without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns an iterator over the stored elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns an iterator over mutable references to the stored elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns a reference to the element at `index`, or `None`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.data.len();
        self.data
            .get(index)
            .ok_or(SequenceError::OutOfRange { index, len })
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if `index >= self.len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(SequenceError::OutOfRange { index, len })
    }

    /// Resizes to `len` elements, filling new slots with `T::default()`.
    pub fn resize(&mut self, len: usize)
    where
        T: Default,
    {
        tracing::trace!(from = self.data.len(), to = len, "resizing sequence");
        self.data.resize_with(len, T::default);
    }

    /// Resizes to `len` elements, filling new slots with copies of `value`.
    pub fn resize_with_value(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        tracing::trace!(from = self.data.len(), to = len, "resizing sequence");
        self.data.resize(len, value);
    }

    /// Appends an element.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Removes all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Overwrites every element with `value`. The length is unchanged.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Moves the contents out, leaving `self` empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Consumes the sequence, returning its storage.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Replaces the contents with the first `len` values of `values`,
    /// reusing the existing allocation.
    pub(crate) fn refill(&mut self, len: usize, values: impl Iterator<Item = T>) {
        tracing::trace!(from = self.data.len(), to = len, "refilling sequence");
        self.data.clear();
        self.data.reserve(len);
        self.data.extend(values.take(len));
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.data).finish()
    }
}

impl<T: Clone> SequenceExpression for Sequence<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> T {
        self.data[index].clone()
    }
}

impl_expression_ops!([T] Sequence<T>);
impl_expression_ops!(['a, T] &'a Sequence<T>);

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        Self {
            data: Vec::from(values),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.data
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsMut<[T]> for Sequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}
