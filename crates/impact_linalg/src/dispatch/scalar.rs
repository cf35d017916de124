//! Per-lane kernels behind the array fallbacks. Register tests compare
//! against them.

use crate::num::{Real, Scalar};

/// Sums the lanes as `(l0 + l1) + (l2 + l3)`, matching the order of the
/// register shuffles.
#[inline]
pub(crate) fn pairwise_sum<T: Scalar>(lanes: &[T]) -> T {
    match *lanes {
        [a, b] => a.lane_add(b),
        [a, b, c, d] => a.lane_add(b).lane_add(c.lane_add(d)),
        _ => lanes.iter().fold(T::ZERO, |sum, &lane| sum.lane_add(lane)),
    }
}

#[inline]
pub(crate) fn dot<T: Scalar>(a: &[T], b: &[T]) -> T {
    match (a, b) {
        (&[a0, a1], &[b0, b1]) => pairwise_sum(&[a0.lane_mul(b0), a1.lane_mul(b1)]),
        (&[a0, a1, a2, a3], &[b0, b1, b2, b3]) => pairwise_sum(&[
            a0.lane_mul(b0),
            a1.lane_mul(b1),
            a2.lane_mul(b2),
            a3.lane_mul(b3),
        ]),
        _ => a
            .iter()
            .zip(b)
            .fold(T::ZERO, |sum, (&a, &b)| sum.lane_add(a.lane_mul(b))),
    }
}

/// Cross product of the first three lanes. The fourth lane is
/// `a3 * b3 - a3 * b3`, which is zero for zeroed padding.
#[inline]
pub(crate) fn cross<T: Scalar>(a: &[T], b: &[T]) -> [T; 4] {
    [
        a[1].lane_mul(b[2]).lane_sub(a[2].lane_mul(b[1])),
        a[2].lane_mul(b[0]).lane_sub(a[0].lane_mul(b[2])),
        a[0].lane_mul(b[1]).lane_sub(a[1].lane_mul(b[0])),
        a[3].lane_mul(b[3]).lane_sub(a[3].lane_mul(b[3])),
    ]
}

/// Computes the signed cofactor columns of a column-major 4x4 matrix together
/// with its determinant, using the classical cofactor expansion.
///
/// The 2x2 sub-determinants are grouped the same way as in the SSE kernel so
/// that both produce identical cofactors.
pub(crate) fn adjugate4<T: Real>(m: &[[T; 4]; 4]) -> ([[T; 4]; 4], T) {
    let [x, y, z, w] = m;

    let factors = |p: usize, q: usize| {
        let zw = z[q] * w[p] - w[q] * z[p];
        [
            zw,
            zw,
            y[q] * w[p] - w[q] * y[p],
            y[q] * z[p] - z[q] * y[p],
        ]
    };
    let fac0 = factors(3, 2);
    let fac1 = factors(3, 1);
    let fac2 = factors(2, 1);
    let fac3 = factors(3, 0);
    let fac4 = factors(2, 0);
    let fac5 = factors(1, 0);

    let broadcast = |k: usize| [y[k], x[k], x[k], x[k]];
    let vec0 = broadcast(0);
    let vec1 = broadcast(1);
    let vec2 = broadcast(2);
    let vec3 = broadcast(3);

    let combine = |a: [T; 4], fa: [T; 4], b: [T; 4], fb: [T; 4], c: [T; 4], fc: [T; 4], sign: T| {
        let mut column = [T::ZERO; 4];
        let mut lane_sign = sign;
        for (i, value) in column.iter_mut().enumerate() {
            *value = (a[i] * fa[i] - b[i] * fb[i] + c[i] * fc[i]) * lane_sign;
            lane_sign = -lane_sign;
        }
        column
    };

    let inv0 = combine(vec1, fac0, vec2, fac1, vec3, fac2, T::ONE);
    let inv1 = combine(vec0, fac0, vec2, fac3, vec3, fac4, T::NEG_ONE);
    let inv2 = combine(vec0, fac1, vec1, fac3, vec3, fac5, T::ONE);
    let inv3 = combine(vec0, fac2, vec1, fac4, vec2, fac5, T::NEG_ONE);

    let determinant = (x[0] * inv0[0] + x[1] * inv1[0]) + (x[2] * inv2[0] + x[3] * inv3[0]);

    ([inv0, inv1, inv2, inv3], determinant)
}

pub(crate) fn determinant4<T: Real>(m: &[[T; 4]; 4]) -> T {
    adjugate4(m).1
}

pub(crate) fn inverse4<T: Real>(m: &[[T; 4]; 4], threshold: T) -> Option<[[T; 4]; 4]> {
    let (adjugate, determinant) = adjugate4(m);
    // Negated comparison so that a NaN determinant is rejected too
    if !(determinant.abs() > threshold) {
        return None;
    }
    let inverse_determinant = T::ONE / determinant;
    Some(adjugate.map(|column| column.map(|value| value * inverse_determinant)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn matrix_product(a: &[[f64; 4]; 4], b: &[[f64; 4]; 4]) -> [[f64; 4]; 4] {
        let mut product = [[0.0; 4]; 4];
        for (j, column) in product.iter_mut().enumerate() {
            for (i, value) in column.iter_mut().enumerate() {
                *value = (0..4).map(|k| a[k][i] * b[j][k]).sum();
            }
        }
        product
    }

    #[test]
    fn pairwise_sum_groups_lanes_in_pairs() {
        assert_eq!(pairwise_sum(&[1, 2, 3, 4]), 10);
        assert_eq!(pairwise_sum(&[1.5_f32, 2.5]), 4.0);
        assert_eq!(pairwise_sum(&[0.5_f32, 1.0, 2.0, 4.0]), 7.5);
    }

    #[test]
    fn cross_of_axes_follows_right_hand_rule() {
        assert_eq!(cross(&[1, 0, 0, 0], &[0, 1, 0, 0]), [0, 0, 1, 0]);
        assert_eq!(cross(&[0, 1, 0, 0], &[0, 0, 1, 0]), [1, 0, 0, 0]);
        assert_eq!(cross(&[0, 0, 1, 0], &[1, 0, 0, 0]), [0, 1, 0, 0]);
    }

    #[test]
    fn determinant_of_identity_is_one() {
        let identity = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        assert_eq!(determinant4(&identity), 1.0);
    }

    #[test]
    fn determinant_of_triangular_matrix_is_product_of_diagonal() {
        let m = [
            [2.0, 0.0, 0.0, 0.0],
            [5.0, 3.0, 0.0, 0.0],
            [-1.0, 4.0, 0.5, 0.0],
            [7.0, 2.0, 9.0, -4.0],
        ];
        assert_abs_diff_eq!(determinant4(&m), -12.0, epsilon = 1e-12);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = [
            [4.0, 1.0, -2.0, 0.5],
            [0.0, 3.0, 1.0, 2.0],
            [1.0, -1.0, 5.0, 0.0],
            [2.0, 0.0, 1.0, 6.0],
        ];
        let inverse = inverse4(&m, 1e-9).unwrap();
        let product = matrix_product(&m, &inverse);
        for (j, column) in product.iter().enumerate() {
            for (i, &value) in column.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(value, expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn inverting_singular_matrix_fails() {
        let m = [
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0],
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 0.0, 1.0, 0.0],
        ];
        assert!(inverse4(&m, 1e-9).is_none());
    }
}
