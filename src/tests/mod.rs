//! Crate-internal test suites
//!
//! Cross-module pipeline tests and property-based tests; single-module unit
//! tests live next to their modules.

mod pipeline;
mod property;
