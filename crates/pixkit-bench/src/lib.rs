//! Benchmarks for pixkit.
//!
//! The benchmarks live in `benches/`; run them with `cargo bench -p pixkit-bench`.
