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
use super::shape::*;
use super::{Axis, PositionVector, RotationMatrix, Transform};
use crate::errors::*;
use nalgebra as na;
use na::storage::{RawStorage, RawStorageMut};
use na::{Dim, Matrix, RealField, Vector3};

/// Entries whose absolute value is equal or less than this are snapped to zero
pub const SNAP_EPSILON: f64 = 1e-10;

/// Create the homogeneous rotation around the named axis
///
/// The name is one of `x`, `y`, `z`. It is case insensitive and
/// whitespaces are ignored.
///
/// # Examples
///
/// ```
/// use gravibot::math::make_elementary_rotation;
/// use nalgebra::Matrix4;
///
/// let rot = make_elementary_rotation("X", 0.0f64).unwrap();
/// assert_eq!(rot, Matrix4::identity());
/// assert!(make_elementary_rotation("v", 0.0f64).is_err());
/// ```
pub fn make_elementary_rotation<T: RealField>(axis: &str, theta: T) -> Result<Transform<T>, Error> {
    Ok(axis.parse::<Axis>()?.rotation(theta))
}

/// Create the 3x3 rotation around the named axis
pub fn make_elementary_rotation3<T: RealField>(
    axis: &str,
    theta: T,
) -> Result<RotationMatrix<T>, Error> {
    Ok(axis.parse::<Axis>()?.rotation3(theta))
}

/// Create the homogeneous translation
///
/// # Examples
///
/// ```
/// use gravibot::math::make_translation;
/// use nalgebra::Matrix4;
///
/// let trans = make_translation(2.0, 3.0, 4.0);
/// assert_eq!(
///     trans,
///     Matrix4::new(
///         1.0, 0.0, 0.0, 2.0,
///         0.0, 1.0, 0.0, 3.0,
///         0.0, 0.0, 1.0, 4.0,
///         0.0, 0.0, 0.0, 1.0,
///     )
/// );
/// ```
pub fn make_translation<T: RealField>(x: T, y: T, z: T) -> Transform<T> {
    Transform::new_translation(&Vector3::new(x, y, z))
}

/// Returns the translation part of the 4x4 transform
pub fn extract_position<T, R, C, S>(trans: &Matrix<T, R, C, S>) -> Result<PositionVector<T>, Error>
where
    T: RealField,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    check_transform(trans)?;
    Ok(PositionVector::new(
        trans[(0, 3)].clone(),
        trans[(1, 3)].clone(),
        trans[(2, 3)].clone(),
    ))
}

/// Returns a copy of the upper left 3x3 block of the 4x4 transform
pub fn extract_rotation<T, R, C, S>(trans: &Matrix<T, R, C, S>) -> Result<RotationMatrix<T>, Error>
where
    T: RealField,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    check_transform(trans)?;
    Ok(RotationMatrix::from_fn(|r, c| trans[(r, c)].clone()))
}

/// Build the 4x4 transform from the rotation and the translation
///
/// The translation can be either a column (3x1) or a row (1x3) vector.
///
/// # Examples
///
/// ```
/// use gravibot::math::*;
/// use nalgebra::{RowVector3, Vector3};
///
/// let rot = Axis::Y.rotation3(0.3);
/// let trans = compose_pose(&rot, &RowVector3::new(1.0, 2.0, 3.0)).unwrap();
/// assert_eq!(extract_rotation(&trans).unwrap(), rot);
/// assert_eq!(extract_position(&trans).unwrap(), Vector3::new(1.0, 2.0, 3.0));
/// ```
pub fn compose_pose<T, R1, C1, S1, R2, C2, S2>(
    rotation: &Matrix<T, R1, C1, S1>,
    position: &Matrix<T, R2, C2, S2>,
) -> Result<Transform<T>, Error>
where
    T: RealField,
    R1: Dim,
    C1: Dim,
    S1: RawStorage<T, R1, C1>,
    R2: Dim,
    C2: Dim,
    S2: RawStorage<T, R2, C2>,
{
    check_rotation(rotation)?;
    check_position_or_row(position)?;
    let mut trans = Transform::identity();
    for r in 0..3 {
        for c in 0..3 {
            trans[(r, c)] = rotation[(r, c)].clone();
        }
        trans[(r, 3)] = position[r].clone();
    }
    Ok(trans)
}

/// Replace the tiny entries with exactly zero, using `SNAP_EPSILON`
///
/// The matrix must be 4x4 or 3x3. It is taken by value and returned, so the
/// matrix of the caller is never modified.
///
/// # Examples
///
/// ```
/// use gravibot::math::{snap_near_zero, Axis};
///
/// let rot = Axis::X.rotation(std::f64::consts::FRAC_PI_2);
/// assert!(rot[(1, 1)] != 0.0);
/// let snapped = snap_near_zero(rot).unwrap();
/// assert_eq!(snapped[(1, 1)], 0.0);
/// assert_eq!(snapped[(2, 1)], 1.0);
/// ```
pub fn snap_near_zero<T, R, C, S>(matrix: Matrix<T, R, C, S>) -> Result<Matrix<T, R, C, S>, Error>
where
    T: RealField,
    R: Dim,
    C: Dim,
    S: RawStorageMut<T, R, C>,
{
    snap_near_zero_with(matrix, na::convert(SNAP_EPSILON))
}

/// `snap_near_zero` with the custom epsilon
pub fn snap_near_zero_with<T, R, C, S>(
    mut matrix: Matrix<T, R, C, S>,
    eps: T,
) -> Result<Matrix<T, R, C, S>, Error>
where
    T: RealField,
    R: Dim,
    C: Dim,
    S: RawStorageMut<T, R, C>,
{
    if !is_transform(&matrix) && !is_rotation(&matrix) {
        return Err(shape_error("4x4 or 3x3", &matrix));
    }
    snap_in_place(&mut matrix, eps);
    Ok(matrix)
}

pub(crate) fn snap_in_place<T, R, C, S>(matrix: &mut Matrix<T, R, C, S>, eps: T)
where
    T: RealField,
    R: Dim,
    C: Dim,
    S: RawStorageMut<T, R, C>,
{
    for v in matrix.iter_mut() {
        if v.clone().abs() <= eps {
            *v = T::zero();
        }
    }
}
