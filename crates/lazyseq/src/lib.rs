//! # lazyseq
//!
//! Numeric sequences with allocation-free arithmetic expressions.
//!
//! Arithmetic on [`Sequence`] values builds an expression tree instead of
//! eagerly computing a temporary for every operator. The tree is evaluated
//! once, element by element, when it is materialized or assigned.
//!
//! ## Features
//!
//! - **Lazy Expressions**: `+ - * /` and unary `-`, elementwise or with a scalar
//! - **Single-Pass Materialization**: `materialize`, `from_expr`, `assign`
//! - **In-Place Updates**: `+= -= *= /=` without reallocating
//! - **Checked Variants**: bounds-checked access and `try_*_assign`
//!
//! Scalar literals combined with an expression carry a type suffix
//! (`2.0_f64`, `3_i32`), since every built-in numeric type is a valid scalar.
//!
//! ## Quick Start
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let a: Sequence<f64> = seq![1.0, 2.0, 3.0];
//! let b: Sequence<f64> = seq![4.0, 5.0, 6.0];
//!
//! let mut c = (&a + &b * 2.0_f64).materialize();
//! assert_eq!(c, seq![9.0, 12.0, 15.0]);
//!
//! c -= &a;
//! c *= 0.5_f64;
//! assert_eq!(c, seq![4.0, 5.0, 6.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use lazyseq_core as core;
pub use lazyseq_core::{
    ensure_same_len, seq, AssignSource, Result, Scalar, Sequence, SequenceError,
    SequenceExpression,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use lazyseq_core::{seq, Scalar, Sequence, SequenceError, SequenceExpression};
}
