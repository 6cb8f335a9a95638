//! Property-based tests
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases. Run with `cargo test property`.

mod paginate_props;
mod tokenize_props;
