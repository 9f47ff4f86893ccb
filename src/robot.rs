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
use crate::math::*;
use crate::robot_param::*;
use na::RealField;
use nalgebra as na;
use simba::scalar::SubsetOf;
use tracing::trace;

/// Forward kinematics solver of the serial chain
///
/// It borrows `RobotParam` and never changes it. Nothing is cached, so every
/// query composes the link transforms again from the base.
///
/// # Examples
///
/// ```
/// use gravibot::*;
/// use std::f64::consts::FRAC_PI_2;
///
/// let mut param = RobotParam::new();
/// param.add_link(LinkParam::new(0.0, FRAC_PI_2, 10.0, 0.0).unwrap());
/// param.add_link(LinkParam::new(10.0, -FRAC_PI_2, 0.0, 0.0).unwrap());
/// param.add_link(LinkParam::new(10.0, 0.0, 0.0, 0.0).unwrap());
///
/// let robot = Robot::new(&param);
/// let pos = robot.joint_position(2).unwrap();
/// assert_eq!(pos, nalgebra::Vector3::new(20.0, 0.0, 10.0));
/// assert!(robot.joint_transform(3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Robot<'a, T: RealField> {
    param: &'a RobotParam<T>,
    origin: PositionVector<T>,
}

impl<'a, T> Robot<'a, T>
where
    T: RealField + SubsetOf<f64>,
{
    pub fn new(param: &'a RobotParam<T>) -> Self {
        Robot {
            param,
            origin: PositionVector::zeros(),
        }
    }
    #[inline]
    pub fn param(&self) -> &'a RobotParam<T> {
        self.param
    }
    /// Position of the base
    #[inline]
    pub fn origin(&self) -> &PositionVector<T> {
        &self.origin
    }
    /// Number of the joints
    #[inline]
    pub fn count(&self) -> usize {
        self.param.count()
    }
    /// Calculate the pose of the `index`-th joint in the base frame
    ///
    /// `A_0 * A_1 * ... * A_index` starting from the identity. The order is
    /// from the base to the tip.
    pub fn joint_transform(&self, index: usize) -> Result<Transform<T>, Error> {
        self.param.check_index(index)?;
        let trans = self
            .param
            .iter()
            .take(index + 1)
            .fold(Transform::identity(), |trans, link| {
                trans * link.local_transform()
            });
        trace!(index, "joint transform");
        Ok(trans)
    }
    /// Position of the `index`-th joint in the base frame
    pub fn joint_position(&self, index: usize) -> Result<PositionVector<T>, Error> {
        extract_position(&self.joint_transform(index)?)
    }
    /// Orientation of the `index`-th joint in the base frame
    pub fn joint_rotation(&self, index: usize) -> Result<RotationMatrix<T>, Error> {
        extract_rotation(&self.joint_transform(index)?)
    }
    /// Calculate the poses of all joints at once
    ///
    /// The `i`-th element is the same as `joint_transform(i)`.
    pub fn joint_transforms(&self) -> Vec<Transform<T>> {
        self.param
            .iter()
            .scan(Transform::identity(), |trans, link| {
                *trans = trans.clone() * link.local_transform();
                Some(trans.clone())
            })
            .collect()
    }
    /// Pose of the last joint (the flange of the end effector)
    pub fn end_transform(&self) -> Result<Transform<T>, Error> {
        let last = self
            .count()
            .checked_sub(1)
            .ok_or(Error::IndexOutOfRange { index: 0, count: 0 })?;
        self.joint_transform(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::*;
    use approx::assert_relative_eq;
    use na::Vector3;

    fn planar_arm() -> RobotParam<f64> {
        (0..3).map(|_| LinkParam::new(1.0, 0.0, 0.0, 0.0).unwrap()).collect()
    }

    #[test]
    fn test_planar_arm() {
        let mut param = planar_arm();
        param.set_joint_values(&[0.3, -0.2, 0.5]).unwrap();
        let robot = Robot::new(&param);
        let pos = robot.joint_position(2).unwrap();
        let x = 0.3f64.cos() + 0.1f64.cos() + 0.6f64.cos();
        let y = 0.3f64.sin() + 0.1f64.sin() + 0.6f64.sin();
        assert_relative_eq!(pos, Vector3::new(x, y, 0.0), epsilon = 1e-12);
        assert_eq!(robot.origin(), &Vector3::zeros());
    }

    #[test]
    fn test_joint_transforms_match_each_query() {
        let mut param = planar_arm();
        param.set_joint_values(&[0.1, 0.2, 0.3]).unwrap();
        let robot = Robot::new(&param);
        let all = robot.joint_transforms();
        assert_eq!(all.len(), 3);
        for (i, trans) in all.iter().enumerate() {
            assert_relative_eq!(*trans, robot.joint_transform(i).unwrap(), epsilon = 1e-12);
        }
        assert_relative_eq!(all[2], robot.end_transform().unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_empty_chain() {
        let param = RobotParam::<f64>::new();
        let robot = Robot::new(&param);
        assert!(robot.joint_transforms().is_empty());
        assert!(matches!(
            robot.end_transform(),
            Err(Error::IndexOutOfRange { index: 0, count: 0 })
        ));
        assert!(robot.joint_position(0).is_err());
    }
}
