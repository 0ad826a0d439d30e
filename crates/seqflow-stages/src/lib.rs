//! seqflow stages: type-erased stages and the pipeline composer
//!
//! Each stage wraps a strongly typed closure behind the `Stage` trait so a
//! single `Vec<Box<dyn Stage>>` can hold steps whose element types differ.
//!
//! # Pipeline Flow
//!
//! ```text
//! Vec<In> → ErasedSeq → stage 0 → stage 1 → ... → ErasedSeq → Vec<Out>
//!                          ↓          ↓                 ↓
//!                       recover    recover        final type check
//! ```

pub mod context;
pub mod report;
pub mod runner;
pub mod stage;

pub use context::RunContext;
pub use report::StageReport;
pub use runner::{pipe, Pipeline};
pub use stage::{FilterStage, InsertAt, InsertStage, MapStage, Stage, TryMapStage};
