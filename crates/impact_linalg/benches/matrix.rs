use impact_linalg::{
    benchmark::{benchmarks::matrix, criterion},
    define_criterion_target,
};

define_criterion_target!(matrix, align_matrix4);
define_criterion_target!(matrix, unalign_matrix4);
define_criterion_target!(matrix, mul_matrix4_aligned);
define_criterion_target!(matrix, mul_matrix4_unaligned);
define_criterion_target!(matrix, transform_vector4_aligned);
define_criterion_target!(matrix, transform_vector4_unaligned);
define_criterion_target!(matrix, determinant_matrix4_aligned);
define_criterion_target!(matrix, determinant_matrix4_unaligned);
define_criterion_target!(matrix, inverse_matrix3_aligned);
define_criterion_target!(matrix, inverse_matrix3_unaligned);
define_criterion_target!(matrix, inverse_matrix4_aligned);
define_criterion_target!(matrix, inverse_matrix4_unaligned);
define_criterion_target!(matrix, inverse_dmatrix4_aligned);
define_criterion_target!(matrix, inverse_dmatrix4_unaligned);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        align_matrix4,
        unalign_matrix4,
        mul_matrix4_aligned,
        mul_matrix4_unaligned,
        transform_vector4_aligned,
        transform_vector4_unaligned,
        determinant_matrix4_aligned,
        determinant_matrix4_unaligned,
        inverse_matrix3_aligned,
        inverse_matrix3_unaligned,
        inverse_matrix4_aligned,
        inverse_matrix4_unaligned,
        inverse_dmatrix4_aligned,
        inverse_dmatrix4_unaligned,
);
criterion::criterion_main!(benches);
