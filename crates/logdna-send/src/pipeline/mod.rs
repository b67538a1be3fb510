//! The core pipeline: Reader → Merger → Bounder → Record Builder.
//!
//! Data flows strictly forward; no stage reads back from a downstream one.
//! The whole input is read into memory before any decision is made.

pub mod bounder;
pub mod constants;
pub mod merger;
pub mod reader;
pub mod record;
