use crate::{
    benchmark::Benchmarker,
    int_vector::{LongVector4, LongVector4U},
    vector::{DVector4, DVector4U, Vector3, Vector3U, Vector4, Vector4U},
};
use std::hint::black_box;

pub fn align_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3u();
    benchmarker.benchmark(&mut || a.aligned());
}

pub fn unalign_vector3(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    benchmarker.benchmark(&mut || a.unaligned());
}

pub fn add_vector3_aligned(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_vector3();
    benchmarker.benchmark(&mut || a + b);
}

pub fn add_vector3_unaligned(benchmarker: impl Benchmarker) {
    let a = create_vector3u();
    let b = create_vector3u();
    benchmarker.benchmark(&mut || a + b);
}

pub fn dot_vector3_aligned(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_vector3();
    benchmarker.benchmark(&mut || a.dot(&b));
}

pub fn dot_vector3_unaligned(benchmarker: impl Benchmarker) {
    let a = create_vector3u();
    let b = create_vector3u();
    benchmarker.benchmark(&mut || a.dot(&b));
}

pub fn cross_vector3_aligned(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_vector3();
    benchmarker.benchmark(&mut || a.cross(&b));
}

pub fn cross_vector3_unaligned(benchmarker: impl Benchmarker) {
    let a = create_vector3u();
    let b = create_vector3u();
    benchmarker.benchmark(&mut || a.cross(&b));
}

pub fn normalize_vector3_aligned(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    benchmarker.benchmark(&mut || a.normalized());
}

pub fn normalize_vector3_unaligned(benchmarker: impl Benchmarker) {
    let a = create_vector3u();
    benchmarker.benchmark(&mut || a.normalized());
}

pub fn add_vector4_aligned(benchmarker: impl Benchmarker) {
    let a = create_vector4();
    let b = create_vector4();
    benchmarker.benchmark(&mut || a + b);
}

pub fn add_vector4_unaligned(benchmarker: impl Benchmarker) {
    let a: Vector4U = create_vector4().unaligned();
    let b: Vector4U = create_vector4().unaligned();
    benchmarker.benchmark(&mut || a + b);
}

pub fn dot_dvector4_aligned(benchmarker: impl Benchmarker) {
    let a = create_dvector4();
    let b = create_dvector4();
    benchmarker.benchmark(&mut || a.dot(&b));
}

pub fn dot_dvector4_unaligned(benchmarker: impl Benchmarker) {
    let a: DVector4U = create_dvector4().unaligned();
    let b: DVector4U = create_dvector4().unaligned();
    benchmarker.benchmark(&mut || a.dot(&b));
}

pub fn add_long_vector4_aligned(benchmarker: impl Benchmarker) {
    let a = create_long_vector4();
    let b = create_long_vector4();
    benchmarker.benchmark(&mut || a + b);
}

pub fn add_long_vector4_unaligned(benchmarker: impl Benchmarker) {
    let a: LongVector4U = create_long_vector4().unaligned();
    let b: LongVector4U = create_long_vector4().unaligned();
    benchmarker.benchmark(&mut || a + b);
}

fn create_vector3() -> Vector3 {
    black_box(Vector3::new(1.0, 2.0, 3.0))
}

fn create_vector3u() -> Vector3U {
    black_box(Vector3U::new(1.0, 2.0, 3.0))
}

fn create_vector4() -> Vector4 {
    black_box(Vector4::new(1.0, 2.0, 3.0, 4.0))
}

fn create_dvector4() -> DVector4 {
    black_box(DVector4::new(1.0, 2.0, 3.0, 4.0))
}

fn create_long_vector4() -> LongVector4 {
    black_box(LongVector4::new(1, 2, 3, 4))
}
