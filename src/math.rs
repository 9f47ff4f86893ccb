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
//! Homogeneous transform primitives
//!
//! The value types are plain nalgebra matrices. The functions which take an
//! arbitrary matrix (for example a `DMatrix` built from external data) check
//! its runtime shape first and return `Error::ShapeError` on mismatch.
mod axis;
mod shape;
mod transform;

pub use axis::*;
pub use shape::*;
pub use transform::*;

use nalgebra::{Matrix3, Matrix4, Vector3};

/// 4x4 homogeneous transform
pub type Transform<T> = Matrix4<T>;
/// 3x3 rotation matrix
pub type RotationMatrix<T> = Matrix3<T>;
/// Position in 3D space
pub type PositionVector<T> = Vector3<T>;
