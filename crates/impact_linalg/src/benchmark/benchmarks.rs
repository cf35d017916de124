//! Benchmark functions, one module per benchmarked type.

pub mod matrix;
pub mod vector;
