//! Criterion microbenchmarks for the poly crate; see `benches/micro.rs`.
