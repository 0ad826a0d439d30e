//! seqflow core: sequence primitives, pair utilities and erased values
//!
//! The statically typed leaf layer shared by `seqflow-stages` (pipeline
//! composer) and `seqflow-chain` (fluent chain wrapper).
//!
//! # Example
//!
//! ```
//! use seqflow_core::slice;
//!
//! let evens = slice::filter(vec![1, 2, 3, 4], |i| i % 2 == 0);
//! assert_eq!(slice::fold(evens, 0, |acc, i| acc + i), 6);
//! ```

pub mod erased;
pub mod error;
pub mod pairs;
pub mod slice;

pub use erased::{Erased, ErasedSeq};
pub use error::{BoxError, Result, SeqError};
pub use pairs::{entries, keys, values, Pair};
