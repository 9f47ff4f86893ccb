/*
  Copyright 2020 Takashi Ogura

  Licensed under the Apache License, Version 2.0 (the "License");
  you may not use this file except in compliance with the License.
  You may obtain a copy of the License at

      http://www.apache.org/licenses/LICENSE-2.0

  Unless required by applicable law or agreed to in writing, software
  distributed under the License is distributed on an "AS IS" BASIS,
  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
  See the License for the specific language governing permissions and
  limitations under the License.
*/
use crate::errors::*;
use nalgebra::storage::RawStorage;
use nalgebra::{Dim, Matrix};

/// Returns true if the matrix is 4x4
///
/// # Examples
///
/// ```
/// use gravibot::math::is_transform;
/// use nalgebra::{DMatrix, Matrix4};
///
/// assert!(is_transform(&Matrix4::<f64>::identity()));
/// assert!(!is_transform(&DMatrix::<f64>::zeros(5, 5)));
/// ```
pub fn is_transform<T, R, C, S>(matrix: &Matrix<T, R, C, S>) -> bool
where
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    matrix.shape() == (4, 4)
}

/// Returns true if the matrix is 3x3
pub fn is_rotation<T, R, C, S>(matrix: &Matrix<T, R, C, S>) -> bool
where
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    matrix.shape() == (3, 3)
}

/// Returns true if the vector is a 3 element column vector
///
/// # Examples
///
/// ```
/// use gravibot::math::is_position;
/// use nalgebra::{RowVector3, Vector3, Vector4};
///
/// assert!(is_position(&Vector3::new(1.0, 2.0, 3.0)));
/// assert!(!is_position(&Vector4::new(1.0, 2.0, 3.0, 4.0)));
/// assert!(!is_position(&RowVector3::new(1.0, 2.0, 3.0)));
/// ```
pub fn is_position<T, R, C, S>(vector: &Matrix<T, R, C, S>) -> bool
where
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    vector.shape() == (3, 1)
}

pub(crate) fn shape_error<T, R, C, S>(expected: &'static str, matrix: &Matrix<T, R, C, S>) -> Error
where
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    let (rows, cols) = matrix.shape();
    Error::ShapeError {
        expected,
        rows,
        cols,
    }
}

pub(crate) fn check_transform<T, R, C, S>(matrix: &Matrix<T, R, C, S>) -> Result<(), Error>
where
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    if is_transform(matrix) {
        Ok(())
    } else {
        Err(shape_error("4x4", matrix))
    }
}

pub(crate) fn check_rotation<T, R, C, S>(matrix: &Matrix<T, R, C, S>) -> Result<(), Error>
where
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    if is_rotation(matrix) {
        Ok(())
    } else {
        Err(shape_error("3x3", matrix))
    }
}

/// Accepts the position given as a column (3x1) or a row (1x3)
pub(crate) fn check_position_or_row<T, R, C, S>(vector: &Matrix<T, R, C, S>) -> Result<(), Error>
where
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    if is_position(vector) || vector.shape() == (1, 3) {
        Ok(())
    } else {
        Err(shape_error("3x1 or 1x3", vector))
    }
}

#[test]
fn test_shape_predicates() {
    use nalgebra::{DMatrix, DVector, Matrix2, Matrix3, Matrix4, Vector3, Vector4};

    assert!(is_transform(&Matrix4::<f64>::zeros()));
    assert!(is_transform(&DMatrix::<f64>::zeros(4, 4)));
    assert!(!is_transform(&Matrix3::<f64>::zeros()));
    assert!(!is_transform(&DMatrix::<f64>::zeros(4, 3)));
    assert!(!is_transform(&DMatrix::<f64>::zeros(5, 5)));

    assert!(is_rotation(&Matrix3::<f64>::zeros()));
    assert!(!is_rotation(&Matrix2::<f64>::zeros()));
    assert!(!is_rotation(&Matrix4::<f64>::zeros()));
    assert!(!is_rotation(&DMatrix::<f64>::zeros(3, 4)));

    assert!(is_position(&Vector3::<f64>::zeros()));
    assert!(is_position(&DVector::<f64>::zeros(3)));
    assert!(!is_position(&Vector4::<f64>::zeros()));
    assert!(!is_position(&DVector::<f64>::zeros(2)));
    assert!(!is_position(&Matrix3::<f64>::zeros()));
}

#[test]
fn test_check_position_or_row() {
    use nalgebra::{DMatrix, RowVector3, Vector3, Vector4};

    assert!(check_position_or_row(&Vector3::<f64>::zeros()).is_ok());
    assert!(check_position_or_row(&RowVector3::<f64>::zeros()).is_ok());
    assert!(check_position_or_row(&DMatrix::<f64>::zeros(1, 3)).is_ok());
    assert!(matches!(
        check_position_or_row(&Vector4::<f64>::zeros()),
        Err(Error::ShapeError {
            expected: "3x1 or 1x3",
            rows: 4,
            cols: 1
        })
    ));
    assert!(check_position_or_row(&DMatrix::<f64>::zeros(3, 3)).is_err());
}
