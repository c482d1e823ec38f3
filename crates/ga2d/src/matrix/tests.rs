use approx::assert_relative_eq;
use proptest::prelude::*;

use super::*;

fn mat3(rows: [[f64; 3]; 3]) -> FixedMatrix<f64> {
    FixedMatrix::from_rows(&[&rows[0], &rows[1], &rows[2]]).unwrap()
}

#[test]
fn identity_determinant_is_one_for_all_sizes() {
    for n in 1..=6 {
        let id = DynMatrix::<f64>::identity(n).unwrap();
        assert_relative_eq!(id.det().unwrap(), 1.0);
    }
}

#[test]
fn base_case_determinants() {
    let one = FixedMatrix::from_rows(&[&[7.0]]).unwrap();
    assert_eq!(one.det().unwrap(), 7.0);

    let two = FixedMatrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    assert_eq!(two.det().unwrap(), 4.0 - 6.0);
}

#[test]
fn laplace_expansion_matches_known_determinant() {
    let m = mat3([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 1.0]]);
    // 2*(3-2) - 0 + 1*(1-3) = 0
    assert_relative_eq!(m.det().unwrap(), 0.0);
    assert!(!m.is_invertible());

    let m = mat3([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
    assert_relative_eq!(m.det().unwrap(), -3.0, max_relative = 1e-12);
}

#[test]
fn zero_row_kills_invertibility() {
    let m = mat3([[1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [7.0, 8.0, 9.0]]);
    assert_eq!(m.det().unwrap(), 0.0);
    assert!(!m.is_invertible());
    assert_eq!(m.inverse(), Err(MatrixError::NotInvertible));
}

#[test]
fn inverse_times_matrix_is_identity() {
    let m = mat3([[3.0, 0.0, 2.0], [2.0, 0.0, -2.0], [0.0, 1.0, 1.0]]);
    let inv = m.inverse().unwrap();
    let prod = m.try_mul(&inv).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(prod.get(i, j).unwrap(), expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn non_square_operations_fail() {
    let m = DynMatrix::<f64>::new(2, 3).unwrap();
    assert!(matches!(m.det(), Err(MatrixError::NotSquare { .. })));
    assert!(matches!(
        m.cofactor_matrix(),
        Err(MatrixError::NotSquare { .. })
    ));
    assert!(matches!(
        m.primary_diagonal(),
        Err(MatrixError::NotSquare { .. })
    ));
    assert!(!m.is_invertible());
    assert_eq!(m.inverse(), Err(MatrixError::NotInvertible));
}

#[test]
fn index_validation() {
    let mut m = FixedMatrix::<f64>::new(2, 2).unwrap();
    assert!(m.set(0, 0, 1.0).is_ok());
    assert!(matches!(m.get(2, 0), Err(MatrixError::InvalidIndex { .. })));
    assert!(matches!(
        m.set(0, 5, 1.0),
        Err(MatrixError::InvalidIndex { .. })
    ));
}

#[test]
fn overflow_on_dims_past_capacity() {
    assert!(matches!(
        FixedMatrix::<f64>::new(INLINE_DIM + 1, 2),
        Err(MatrixError::Overflow { .. })
    ));
    assert!(matches!(
        FixedMatrix::<f64>::new(0, 2),
        Err(MatrixError::Overflow { .. })
    ));
    // the heap grid has no such bound
    assert!(DynMatrix::<f64>::new(INLINE_DIM + 1, 2).is_ok());
}

#[test]
fn remove_row_and_col_shift_remaining_cells() {
    let mut m = mat3([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    m.remove_row(0).unwrap();
    assert_eq!(m.rows(), 2);
    assert_eq!(m.get(0, 0).unwrap(), 4.0);
    m.remove_col(1).unwrap();
    assert_eq!(m.cols(), 2);
    assert_eq!(m.get(0, 1).unwrap(), 6.0);
    assert_eq!(m.get(1, 1).unwrap(), 9.0);
}

#[test]
fn cannot_remove_last_dimension() {
    let mut m = DynMatrix::<f64>::new(1, 3).unwrap();
    assert_eq!(m.remove_row(0), Err(MatrixError::CantRemoveDimension));
    assert!(matches!(
        m.remove_row(1),
        Err(MatrixError::InvalidIndex { .. })
    ));
    m.remove_col(0).unwrap();
    m.remove_col(0).unwrap();
    assert_eq!(m.remove_col(0), Err(MatrixError::CantRemoveDimension));
}

#[test]
fn transpose_swaps_dims_and_entries() {
    let m = DynMatrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
    let t = m.transposed().unwrap();
    assert_eq!((t.rows(), t.cols()), (3, 2));
    assert_eq!(t.get(2, 0).unwrap(), 3.0);
    assert_eq!(t.get(0, 1).unwrap(), 4.0);
}

#[test]
fn elementwise_ops_require_equal_dims() {
    let a = FixedMatrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    let b = FixedMatrix::from_rows(&[&[10.0, 20.0], &[30.0, 40.0]]).unwrap();
    let sum = a.try_add(&b).unwrap();
    assert_eq!(sum.get(1, 1).unwrap(), 44.0);
    let diff = b.try_sub(&a).unwrap();
    assert_eq!(diff.get(0, 0).unwrap(), 9.0);

    let c = FixedMatrix::<f64>::new(2, 3).unwrap();
    assert!(matches!(
        a.try_add(&c),
        Err(MatrixError::IncompatibleDimensions { .. })
    ));
    assert!(matches!(
        a.try_sub(&c),
        Err(MatrixError::IncompatibleDimensions { .. })
    ));
}

#[test]
fn multiplication_contracts_inner_dimension() {
    let a = FixedMatrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
    let b = FixedMatrix::from_rows(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]).unwrap();
    let p = a.try_mul(&b).unwrap();
    assert_eq!((p.rows(), p.cols()), (2, 2));
    assert_eq!(p.get(0, 0).unwrap(), 58.0);
    assert_eq!(p.get(1, 1).unwrap(), 154.0);

    assert!(matches!(
        b.try_mul(&b),
        Err(MatrixError::IncompatibleDimensions { .. })
    ));
}

#[test]
fn division_multiplies_by_the_inverse() {
    let a = mat3([[3.0, 0.0, 2.0], [2.0, 0.0, -2.0], [0.0, 1.0, 1.0]]);
    let quotient = a.try_div(&a).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(quotient.get(i, j).unwrap(), expected, epsilon = 1e-12);
        }
    }

    let singular = mat3([[1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [7.0, 8.0, 9.0]]);
    assert_eq!(a.try_div(&singular), Err(MatrixError::NotInvertible));
}

#[test]
fn scalar_ops_apply_elementwise() {
    let a = FixedMatrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    assert_eq!(a.add_scalar(1.0).get(0, 0).unwrap(), 2.0);
    assert_eq!(a.sub_scalar(1.0).get(1, 1).unwrap(), 3.0);
    assert_eq!(a.mul_scalar(2.0).get(1, 0).unwrap(), 6.0);
    assert_eq!(a.div_scalar(2.0).get(0, 1).unwrap(), 1.0);
}

#[test]
fn diagonals() {
    let m = mat3([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let d = m.primary_diagonal().unwrap();
    assert_eq!((d.rows(), d.cols()), (1, 3));
    assert_eq!(d.get(0, 0).unwrap(), 1.0);
    assert_eq!(d.get(0, 2).unwrap(), 9.0);

    let s = m.secondary_diagonal().unwrap();
    assert_eq!(s.get(0, 0).unwrap(), 3.0);
    assert_eq!(s.get(0, 1).unwrap(), 5.0);
    assert_eq!(s.get(0, 2).unwrap(), 7.0);
}

#[test]
fn integer_matrices_work_too() {
    let m = DynMatrix::from_rows(&[&[2i64, 1], &[1, 1]]).unwrap();
    assert_eq!(m.det().unwrap(), 1);
    assert!(m.is_invertible());
}

#[test]
fn one_by_one_inverse() {
    let m = FixedMatrix::from_rows(&[&[4.0]]).unwrap();
    let inv = m.inverse().unwrap();
    assert_relative_eq!(inv.get(0, 0).unwrap(), 0.25);
}

proptest! {
    #[test]
    fn inverse_round_trip_for_random_3x3(
        entries in proptest::array::uniform9(-10.0f64..10.0),
    ) {
        let m = mat3([
            [entries[0], entries[1], entries[2]],
            [entries[3], entries[4], entries[5]],
            [entries[6], entries[7], entries[8]],
        ]);
        let det = m.det().unwrap();
        prop_assume!(det.abs() > 1e-3);
        let prod = m.try_mul(&m.inverse().unwrap()).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                prop_assert!((prod.get(i, j).unwrap() - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn transpose_is_involutive(
        rows in 1usize..6,
        cols in 1usize..6,
        seed in 0u64..1000,
    ) {
        let mut m = DynMatrix::<f64>::new(rows, cols).unwrap();
        for i in 0..rows {
            for j in 0..cols {
                let v = ((seed + (i * cols + j) as u64) as f64).sin();
                m.set(i, j, v).unwrap();
            }
        }
        let round = m.transposed().unwrap().transposed().unwrap();
        prop_assert_eq!(round, m);
    }
}
