use impact_linalg::{
    benchmark::{benchmarks::vector, criterion},
    define_criterion_target,
};

define_criterion_target!(vector, align_vector3);
define_criterion_target!(vector, unalign_vector3);
define_criterion_target!(vector, add_vector3_aligned);
define_criterion_target!(vector, add_vector3_unaligned);
define_criterion_target!(vector, dot_vector3_aligned);
define_criterion_target!(vector, dot_vector3_unaligned);
define_criterion_target!(vector, cross_vector3_aligned);
define_criterion_target!(vector, cross_vector3_unaligned);
define_criterion_target!(vector, normalize_vector3_aligned);
define_criterion_target!(vector, normalize_vector3_unaligned);
define_criterion_target!(vector, add_vector4_aligned);
define_criterion_target!(vector, add_vector4_unaligned);
define_criterion_target!(vector, dot_dvector4_aligned);
define_criterion_target!(vector, dot_dvector4_unaligned);
define_criterion_target!(vector, add_long_vector4_aligned);
define_criterion_target!(vector, add_long_vector4_unaligned);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        align_vector3,
        unalign_vector3,
        add_vector3_aligned,
        add_vector3_unaligned,
        dot_vector3_aligned,
        dot_vector3_unaligned,
        cross_vector3_aligned,
        cross_vector3_unaligned,
        normalize_vector3_aligned,
        normalize_vector3_unaligned,
        add_vector4_aligned,
        add_vector4_unaligned,
        dot_dvector4_aligned,
        dot_dvector4_unaligned,
        add_long_vector4_aligned,
        add_long_vector4_unaligned,
);
criterion::criterion_main!(benches);
