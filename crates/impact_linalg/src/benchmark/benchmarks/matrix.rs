use crate::{
    benchmark::Benchmarker,
    matrix::{DMatrix4, DMatrix4U, Matrix3, Matrix3U, Matrix4, Matrix4U},
    vector::Vector4,
};
use std::hint::black_box;

pub fn align_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4u();
    benchmarker.benchmark(&mut || a.aligned());
}

pub fn unalign_matrix4(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a.unaligned());
}

pub fn mul_matrix4_aligned(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    let b = create_matrix4();
    benchmarker.benchmark(&mut || a * b);
}

pub fn mul_matrix4_unaligned(benchmarker: impl Benchmarker) {
    let a = create_matrix4u();
    let b = create_matrix4u();
    benchmarker.benchmark(&mut || a * b);
}

pub fn transform_vector4_aligned(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    let v = black_box(Vector4::new(1.0, -1.0, 2.0, 1.0));
    benchmarker.benchmark(&mut || a * v);
}

pub fn transform_vector4_unaligned(benchmarker: impl Benchmarker) {
    let a = create_matrix4u();
    let v = black_box(Vector4::new(1.0, -1.0, 2.0, 1.0).unaligned());
    benchmarker.benchmark(&mut || a * v);
}

pub fn determinant_matrix4_aligned(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a.determinant());
}

pub fn determinant_matrix4_unaligned(benchmarker: impl Benchmarker) {
    let a = create_matrix4u();
    benchmarker.benchmark(&mut || a.determinant());
}

pub fn inverse_matrix3_aligned(benchmarker: impl Benchmarker) {
    let a = create_matrix3();
    benchmarker.benchmark(&mut || a.inverse());
}

pub fn inverse_matrix3_unaligned(benchmarker: impl Benchmarker) {
    let a: Matrix3U = create_matrix3().unaligned();
    benchmarker.benchmark(&mut || a.inverse());
}

pub fn inverse_matrix4_aligned(benchmarker: impl Benchmarker) {
    let a = create_matrix4();
    benchmarker.benchmark(&mut || a.inverse());
}

pub fn inverse_matrix4_unaligned(benchmarker: impl Benchmarker) {
    let a = create_matrix4u();
    benchmarker.benchmark(&mut || a.inverse());
}

pub fn inverse_dmatrix4_aligned(benchmarker: impl Benchmarker) {
    let a = create_dmatrix4();
    benchmarker.benchmark(&mut || a.inverse());
}

pub fn inverse_dmatrix4_unaligned(benchmarker: impl Benchmarker) {
    let a: DMatrix4U = create_dmatrix4().unaligned();
    benchmarker.benchmark(&mut || a.inverse());
}

#[rustfmt::skip]
fn create_matrix3() -> Matrix3 {
    black_box(Matrix3::new(
        2.0, 0.0, 1.0,
        1.0, 3.0, 2.0,
        1.0, 1.0, 2.0,
    ))
}

#[rustfmt::skip]
fn create_matrix4() -> Matrix4 {
    black_box(Matrix4::new(
        4.0, 7.0, 2.0, 3.0,
        0.0, 5.0, 0.0, 1.0,
        1.0, 0.0, 3.0, 0.0,
        2.0, 1.0, 0.0, 6.0,
    ))
}

fn create_matrix4u() -> Matrix4U {
    create_matrix4().unaligned()
}

fn create_dmatrix4() -> DMatrix4 {
    black_box(DMatrix4::from_fn(|row, col| {
        if row == col {
            4.0
        } else {
            (row + 2 * col) as f64 * 0.1
        }
    }))
}
