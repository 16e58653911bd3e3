//! # lazyseq-core
//!
//! Lazily evaluated arithmetic over owned numeric sequences.
//!
//! This crate provides:
//! - [`Sequence`]: a resizable, owned sequence that doubles as an expression leaf
//! - [`SequenceExpression`]: the capability shared by sequences and expression nodes
//! - Expression nodes built by `+ - * /` and unary `-`, evaluated on demand
//! - Plain and compound assignment that materialize an expression in one pass
//!
//! ## Design Principles
//!
//! - **No temporaries**: `&a + &b * 2.0_f64 - &c` allocates nothing until it is
//!   materialized, and then writes each destination slot exactly once
//! - **Static dispatch**: every node is a concrete generic type; there are no
//!   trait objects or boxed nodes
//! - **Borrowed operands**: nodes built from `&Sequence` borrow it, so an
//!   expression cannot outlive its operands
//!
//! ## Size preconditions
//!
//! Combining or compound-assigning sequences of different lengths is a caller
//! error. It is asserted in debug builds (and in release with the
//! `strict-sizes` feature); [`ensure_same_len`] and the `try_*_assign` methods
//! check it explicitly.
//!
//! ## Scalar literals
//!
//! Scalar operands are accepted as any built-in numeric type, so an
//! unsuffixed literal leaves the expression type open. Suffix scalar literals
//! (`&a * 2.0_f64`, `1_i32 + &b`) or pass a typed binding.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod macros;

pub mod assign;
pub mod error;
pub mod expr;
pub mod ops;
pub mod sequence;

#[cfg(test)]
mod proptests;

pub use assign::AssignSource;
pub use error::{Result, SequenceError};
pub use expr::{
    ensure_same_len, Binary, ExprIter, Map, Negate, Scalar, ScalarLhs, ScalarRhs,
    SequenceExpression,
};
pub use ops::{AddOp, BinaryOp, CompoundOp, DivOp, MulOp, OpSymbol, SubOp};
pub use sequence::Sequence;
