//! Fixed-size vectors and matrices whose arithmetic is dispatched at compile
//! time to SIMD registers or to a scalar fallback.

#[macro_use]
mod macros;

pub mod angle;
pub mod arithmetic;
pub mod capability;
pub mod dispatch;
pub mod geometry;
pub mod int_vector;
pub mod matrix;
pub mod num;
pub mod point;
pub mod register;
pub mod storage;
pub mod tuple;
pub mod vector;

#[cfg(feature = "benchmark")]
pub mod benchmark;

#[cfg(feature = "glam")]
mod glam_interop;

#[cfg(feature = "serde")]
mod serialization;

pub use angle::{Angle, AngleLiteral, Degrees, Gradians, Radians};
pub use int_vector::TIntVector;
pub use matrix::{SquareMatrix, TMatrix};
pub use num::{Integral, Real, Scalar};
pub use point::TPoint;
pub use storage::{Aligned, Unaligned};
pub use tuple::ScalarTuple;
pub use vector::TVector;
