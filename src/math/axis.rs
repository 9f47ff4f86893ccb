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
use super::{RotationMatrix, Transform};
use crate::errors::*;
use nalgebra::RealField;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Principal axis of an elementary rotation
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Right-handed 3x3 rotation around this axis
    ///
    /// # Examples
    ///
    /// ```
    /// use gravibot::math::Axis;
    ///
    /// let rot = Axis::Z.rotation3(0.0f64);
    /// assert_eq!(rot, nalgebra::Matrix3::identity());
    /// ```
    pub fn rotation3<T: RealField>(self, theta: T) -> RotationMatrix<T> {
        let (s, c) = theta.sin_cos();
        let _0 = T::zero();
        let _1 = T::one();
        match self {
            Axis::X => RotationMatrix::new(
                _1,
                _0.clone(),
                _0.clone(),
                _0.clone(),
                c.clone(),
                -s.clone(),
                _0,
                s,
                c,
            ),
            Axis::Y => RotationMatrix::new(
                c.clone(),
                _0.clone(),
                s.clone(),
                _0.clone(),
                _1,
                _0.clone(),
                -s,
                _0,
                c,
            ),
            Axis::Z => RotationMatrix::new(
                c.clone(),
                -s.clone(),
                _0.clone(),
                s,
                c,
                _0.clone(),
                _0.clone(),
                _0,
                _1,
            ),
        }
    }

    /// Right-handed rotation around this axis as a homogeneous transform
    #[inline]
    pub fn rotation<T: RealField>(self, theta: T) -> Transform<T> {
        self.rotation3(theta).to_homogeneous()
    }
}

impl FromStr for Axis {
    type Err = Error;

    /// Parse the axis name
    ///
    /// Case is ignored and whitespaces are removed before matching.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravibot::math::Axis;
    ///
    /// assert_eq!(" X ".parse::<Axis>().unwrap(), Axis::X);
    /// assert!("w".parse::<Axis>().is_err());
    /// ```
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(Error::InvalidArgument(format!(
                "axis must be x, y or z, but got {name:?}"
            ))),
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

#[test]
fn test_axis_name_is_normalized() {
    assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
    assert_eq!("Y".parse::<Axis>().unwrap(), Axis::Y);
    assert_eq!(" z\t".parse::<Axis>().unwrap(), Axis::Z);
    assert_eq!(" Z ".parse::<Axis>().unwrap(), Axis::Z);
    for name in ["", "xy", "w", "1"] {
        assert!(matches!(
            name.parse::<Axis>(),
            Err(Error::InvalidArgument(_))
        ));
    }
}

#[test]
fn test_rotation3_is_orthonormal() {
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let rot = axis.rotation3(0.7f64);
        let should_be_identity = rot * rot.transpose();
        assert!((should_be_identity - RotationMatrix::identity()).norm() < 1e-12);
        assert!((rot.determinant() - 1.0).abs() < 1e-12);
    }
}
