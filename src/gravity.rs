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
//! Static gravity load at the end effector
//!
//! The force returned by `sensor_force` has its components in the order
//! `(z, y, x)` of the local frame, and `sensor_moment` reorders the center
//! of mass offset in the same way before taking the cross product. This
//! pairing is kept for compatibility with the existing force sensor readings,
//! although it is probably not what a plain frame change would give.
use crate::errors::*;
use crate::math::*;
use na::storage::RawStorage;
use na::{Dim, Matrix, RealField, Vector3};
use nalgebra as na;

/// Standard gravity used by default [m/s^2]
pub const DEFAULT_GRAVITY: f64 = 9.8;
/// Default mass of the gripper [kg]
pub const DEFAULT_GRIPPER_MASS: f64 = 2.0;

/// `(x, y, z)` -> `(z, y, x)`
fn swap_xz<T: RealField>(v: &Vector3<T>) -> Vector3<T> {
    Vector3::new(v.z.clone(), v.y.clone(), v.x.clone())
}

fn local_gravity_force<T: RealField>(rotation: &RotationMatrix<T>, mass: T, g: T) -> Vector3<T> {
    let gravity = Vector3::new(T::zero(), T::zero(), -g);
    swap_xz(&((rotation.transpose() * gravity) * mass))
}

/// Gravity force on the mass, expressed in the local frame
///
/// `rotation` maps the local frame to the world frame, and must be 3x3.
/// The gravity is `(0, 0, -g)` in the world frame. The result is reordered
/// to `(z, y, x)`.
///
/// # Examples
///
/// ```
/// use gravibot::gravity::sensor_force;
/// use nalgebra::{Matrix3, Vector3};
///
/// let force = sensor_force(&Matrix3::identity(), 2.0, 9.8).unwrap();
/// assert_eq!(force, Vector3::new(-19.6, 0.0, 0.0));
/// ```
pub fn sensor_force<T, R, C, S>(rotation: &Matrix<T, R, C, S>, mass: T, g: T) -> Result<Vector3<T>, Error>
where
    T: RealField,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    check_rotation(rotation)?;
    let rotation = RotationMatrix::from_fn(|r, c| rotation[(r, c)].clone());
    Ok(local_gravity_force(&rotation, mass, g))
}

/// Moment at the sensor caused by `force` applied at `com_offset`
///
/// `com_offset` is reordered to `(z, y, x)` like the force.
///
/// # Examples
///
/// ```
/// use gravibot::gravity::sensor_moment;
/// use nalgebra::Vector3;
///
/// let moment: Vector3<f64> = sensor_moment(&Vector3::new(-19.6, 0.0, 0.0), &Vector3::new(3.0, 0.0, 0.0));
/// assert!((moment.y + 58.8).abs() < 1e-9);
/// ```
pub fn sensor_moment<T: RealField>(force: &Vector3<T>, com_offset: &Vector3<T>) -> Vector3<T> {
    swap_xz(com_offset).cross(force)
}

/// Force and moment measured at the sensor
#[derive(Debug, Clone, PartialEq)]
pub struct GravityLoad<T: RealField> {
    pub force: Vector3<T>,
    pub moment: Vector3<T>,
}

/// Gripper attached to the flange of the last joint
#[derive(Debug, Clone, PartialEq)]
pub struct EndEffector<T: RealField> {
    /// Offset from the flange to the center of mass, in the flange frame
    pub com_offset: Vector3<T>,
    /// [kg]
    pub mass: T,
    /// [m/s^2]
    pub gravity: T,
}

impl<T: RealField> EndEffector<T> {
    /// Create the gripper with the default mass and gravity
    pub fn new(com_offset: Vector3<T>) -> Self {
        EndEffector {
            com_offset,
            mass: na::convert(DEFAULT_GRIPPER_MASS),
            gravity: na::convert(DEFAULT_GRAVITY),
        }
    }
    pub fn with_mass(mut self, mass: T) -> Self {
        self.mass = mass;
        self
    }
    pub fn with_gravity(mut self, gravity: T) -> Self {
        self.gravity = gravity;
        self
    }
    /// The center of mass offset in the same `(z, y, x)` order as the force
    pub fn sensor_com_offset(&self) -> Vector3<T> {
        swap_xz(&self.com_offset)
    }
    /// Gravity force at the sensor when the flange has `rotation`
    pub fn force(&self, rotation: &RotationMatrix<T>) -> Vector3<T> {
        local_gravity_force(rotation, self.mass.clone(), self.gravity.clone())
    }
    /// Gravity moment at the sensor when the flange has `rotation`
    pub fn moment(&self, rotation: &RotationMatrix<T>) -> Vector3<T> {
        sensor_moment(&self.force(rotation), &self.com_offset)
    }
    /// Force and moment at the sensor
    ///
    /// # Examples
    ///
    /// ```
    /// use gravibot::gravity::EndEffector;
    /// use nalgebra::{Matrix3, Vector3};
    ///
    /// let gripper = EndEffector::new(Vector3::new(3.0, 0.0, 0.0));
    /// let load = gripper.load(&Matrix3::identity());
    /// assert_eq!(load.force, Vector3::new(-19.6, 0.0, 0.0));
    /// assert!((load.moment - Vector3::new(0.0, -58.8, 0.0)).norm() < 1e-9);
    /// ```
    pub fn load(&self, rotation: &RotationMatrix<T>) -> GravityLoad<T> {
        let force = self.force(rotation);
        let moment = sensor_moment(&force, &self.com_offset);
        GravityLoad { force, moment }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use na::{DMatrix, Matrix4};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_force_rejects_non_rotation() {
        assert!(matches!(
            sensor_force(&Matrix4::<f64>::identity(), 1.0, 9.8),
            Err(Error::ShapeError { expected: "3x3", .. })
        ));
        assert!(sensor_force(&DMatrix::<f64>::identity(3, 3), 1.0, 9.8).is_ok());
    }

    #[test]
    fn test_force_in_tilted_frame() {
        // local x points down
        let rot = Axis::Y.rotation3(FRAC_PI_2);
        let force = sensor_force(&rot, 1.0, 10.0).unwrap();
        // (x, y, z) = (10, 0, 0) before reordering
        assert_relative_eq!(force, Vector3::new(0.0, 0.0, 10.0), epsilon = 1e-12);
    }

    #[test]
    fn test_force_scales_with_mass() {
        let rot = Axis::X.rotation3(0.4);
        let f1 = sensor_force(&rot, 1.0, DEFAULT_GRAVITY).unwrap();
        let f3 = sensor_force(&rot, 3.0, DEFAULT_GRAVITY).unwrap();
        assert_relative_eq!(f1 * 3.0, f3, epsilon = 1e-12);
        assert_relative_eq!(f1.norm(), DEFAULT_GRAVITY, epsilon = 1e-12);
    }

    #[test]
    fn test_moment_uses_reordered_offset() {
        let force = Vector3::new(1.0, 2.0, 3.0);
        let offset = Vector3::new(4.0, 5.0, 6.0);
        let expected = Vector3::new(6.0, 5.0, 4.0).cross(&force);
        assert_eq!(sensor_moment(&force, &offset), expected);
    }

    #[test]
    fn test_end_effector_defaults() {
        let gripper = EndEffector::new(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(gripper.mass, 2.0);
        assert_eq!(gripper.gravity, 9.8);
        assert_eq!(gripper.sensor_com_offset(), Vector3::new(3.0, 2.0, 1.0));
        let gripper = gripper.with_mass(1.0).with_gravity(1.0);
        let load = gripper.load(&RotationMatrix::identity());
        assert_eq!(load.force, Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(load.moment, gripper.moment(&RotationMatrix::identity()));
    }
}
