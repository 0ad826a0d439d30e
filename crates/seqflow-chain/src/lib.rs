//! seqflow chain: fluent transformations with deferred errors
//!
//! Intermediate calls never need checking; the first failure sticks and is
//! reported by the terminal call.
//!
//! # Example
//!
//! ```
//! use seqflow_chain::Chain;
//!
//! let halves = Chain::<f64>::from_vec(vec!["4", "", "10"])
//!     .filter(|s: &&'static str| !s.is_empty())
//!     .try_map(|s: &'static str| s.parse::<i64>())
//!     .map(|i: i64| i as f64 / 2.0)
//!     .to_vec()
//!     .unwrap();
//!
//! assert_eq!(halves, vec![2.0, 5.0]);
//! ```

pub mod chain;

pub use chain::Chain;
pub use seqflow_core::{Result, SeqError};
