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
//! Cylinder primitives for the renderer
//!
//! Only the placement is calculated here. Generating and drawing meshes is
//! left to the renderer.
use crate::gravity::EndEffector;
use crate::math::*;
use crate::robot::Robot;
use na::{RealField, Vector3};
use nalgebra as na;
use simba::scalar::SubsetOf;

/// Segments shorter than this have no cylinder
pub const MIN_SEGMENT_LENGTH: f64 = 1e-10;

/// What the cylinder represents, the renderer picks the color from it
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Base,
    Joint,
    Link,
    Gripper,
    GripperPin,
}

/// Cylinder whose axis is the local z axis
///
/// The center of the cylinder is at the origin of `pose`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder<T: RealField> {
    pub part: Part,
    pub radius: T,
    pub height: T,
    pub pose: Transform<T>,
}

impl<T: RealField> Cylinder<T> {
    pub fn new(part: Part, radius: T, height: T, pose: Transform<T>) -> Self {
        Cylinder {
            part,
            radius,
            height,
            pose,
        }
    }
    /// Cylinder connecting two points, `None` if they are the same point
    pub fn from_segment(
        part: Part,
        radius: T,
        start: &Vector3<T>,
        end: &Vector3<T>,
    ) -> Option<Self> {
        let height = (end - start).norm();
        segment_pose(start, end).map(|pose| Cylinder::new(part, radius, height, pose))
    }
}

/// Pose which puts the z axis on the segment from `start` to `end`
///
/// The origin is the midpoint. Returns `None` if the segment is shorter than
/// `MIN_SEGMENT_LENGTH`.
///
/// # Examples
///
/// ```
/// use gravibot::scene::segment_pose;
/// use nalgebra::{Matrix3, Vector3};
///
/// let pose = segment_pose(&Vector3::new(1.0, 0.0, 0.0), &Vector3::new(1.0, 0.0, 4.0)).unwrap();
/// assert_eq!(pose.fixed_view::<3, 3>(0, 0), Matrix3::identity());
/// assert_eq!(pose[(2, 3)], 2.0);
/// assert!(segment_pose(&Vector3::new(1.0, 0.0, 0.0), &Vector3::new(1.0, 0.0, 0.0)).is_none());
/// ```
pub fn segment_pose<T: RealField>(start: &Vector3<T>, end: &Vector3<T>) -> Option<Transform<T>> {
    let diff = end - start;
    let length = diff.norm();
    if length < na::convert(MIN_SEGMENT_LENGTH) {
        return None;
    }
    let direction = diff / length;
    let center = start + (end - start) / na::convert::<f64, T>(2.0);
    let z_axis = Vector3::z();
    let rotation = if is_close(&direction, &z_axis) {
        RotationMatrix::identity()
    } else if is_close(&direction, &-z_axis.clone()) {
        // half turn around x
        RotationMatrix::from_diagonal(&Vector3::new(T::one(), -T::one(), -T::one()))
    } else {
        let x_axis = z_axis.cross(&direction).normalize();
        let y_axis = direction.cross(&x_axis);
        RotationMatrix::from_columns(&[x_axis, y_axis, direction])
    };
    let mut pose = rotation.to_homogeneous();
    pose.fixed_view_mut::<3, 1>(0, 3).copy_from(&center);
    Some(pose)
}

fn is_close<T: RealField>(a: &Vector3<T>, b: &Vector3<T>) -> bool {
    let atol: T = na::convert(1e-8);
    let rtol: T = na::convert(1e-5);
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (x.clone() - y.clone()).abs() <= atol.clone() + rtol.clone() * y.clone().abs())
}

impl<'a, T> Robot<'a, T>
where
    T: RealField + SubsetOf<f64>,
{
    /// Cylinders of the base, the joints and the links
    ///
    /// The last joint has no cylinder, the end effector is attached there.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravibot::*;
    /// use gravibot::scene::Part;
    ///
    /// let param: RobotParam<f64> = (0..3).map(|_| LinkParam::new(1.0, 0.0, 0.0, 0.0).unwrap()).collect();
    /// let cylinders = Robot::new(&param).cylinders();
    /// assert_eq!(cylinders.iter().filter(|c| c.part == Part::Joint).count(), 2);
    /// assert_eq!(cylinders.iter().filter(|c| c.part == Part::Link).count(), 3);
    /// assert_eq!(cylinders.iter().filter(|c| c.part == Part::Base).count(), 1);
    /// ```
    pub fn cylinders(&self) -> Vec<Cylinder<T>> {
        let transforms = self.joint_transforms();
        let positions = transforms
            .iter()
            .map(|trans| Vector3::new(trans[(0, 3)].clone(), trans[(1, 3)].clone(), trans[(2, 3)].clone()))
            .collect::<Vec<_>>();
        let mut cylinders = Vec::new();
        for (i, trans) in transforms.iter().enumerate().take(transforms.len().saturating_sub(1)) {
            cylinders.push(Cylinder::new(
                Part::Joint,
                na::convert(1.5),
                na::convert(3.0),
                trans.clone(),
            ));
            cylinders.extend(Cylinder::from_segment(
                Part::Link,
                na::convert(1.0),
                &positions[i],
                &positions[i + 1],
            ));
        }
        if let Some(first) = positions.first() {
            cylinders.extend(Cylinder::from_segment(
                Part::Link,
                na::convert(1.0),
                self.origin(),
                first,
            ));
        }
        cylinders.push(Cylinder::new(
            Part::Base,
            na::convert(3.0),
            na::convert(2.0),
            Transform::identity(),
        ));
        cylinders
    }
}

impl<T: RealField> EndEffector<T> {
    /// Cylinders of the gripper body and its two pins
    ///
    /// The body spans from the flange to twice the center of mass offset.
    /// It is empty if the offset is zero.
    pub fn cylinders(&self, flange: &Transform<T>) -> Vec<Cylinder<T>> {
        let rotation = flange.fixed_view::<3, 3>(0, 0).clone_owned();
        let start = flange.fixed_view::<3, 1>(0, 3).clone_owned();
        let end = rotation * (self.com_offset.clone() * na::convert::<f64, T>(2.0)) + &start;
        let body = match Cylinder::from_segment(Part::Gripper, na::convert(0.9), &start, &end) {
            Some(body) => body,
            None => return Vec::new(),
        };
        let pin_length = body.height.clone() / na::convert::<f64, T>(5.0);
        let lift = (body.height.clone() + pin_length.clone()) / na::convert::<f64, T>(2.0);
        let pin = |x: f64| {
            let pose = body.pose.clone()
                * make_translation(na::convert(x), T::zero(), lift.clone())
                * Axis::Z.rotation(T::frac_pi_4());
            Cylinder::new(Part::GripperPin, na::convert(0.3), pin_length.clone(), pose)
        };
        let pins = [pin(0.45), pin(-0.45)];
        let mut cylinders = vec![body];
        cylinders.extend(pins);
        cylinders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::LinkParam;
    use crate::robot_param::RobotParam;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_segment_pose_aligns_z() {
        let start = Vector3::new(1.0, 2.0, 3.0);
        let end = Vector3::new(4.0, -2.0, 3.0);
        let pose = segment_pose(&start, &end).unwrap();
        let z = pose.fixed_view::<3, 1>(0, 2).clone_owned();
        assert_relative_eq!(z, Vector3::new(0.6, -0.8, 0.0), epsilon = 1e-12);
        assert_relative_eq!(
            pose.fixed_view::<3, 1>(0, 3).clone_owned(),
            Vector3::new(2.5, 0.0, 3.0),
            epsilon = 1e-12
        );
        let rot = pose.fixed_view::<3, 3>(0, 0).clone_owned();
        assert_relative_eq!(rot.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_segment_pose_downward() {
        let pose = segment_pose(&Vector3::new(0.0, 0.0, 2.0), &Vector3::zeros()).unwrap();
        assert_eq!(pose[(2, 2)], -1.0);
        assert_eq!(pose[(2, 3)], 1.0);
        assert!(pose.iter().all(|v: &f64| v.is_finite()));
    }

    #[test]
    fn test_robot_cylinders_skip_zero_length_links() {
        // the first joint sits on the base origin
        let param: RobotParam<f64> = vec![
            LinkParam::new(0.0, FRAC_PI_2, 0.0, 0.0).unwrap(),
            LinkParam::new(5.0, 0.0, 0.0, 0.0).unwrap(),
        ]
        .into_iter()
        .collect();
        let cylinders = Robot::new(&param).cylinders();
        let links = cylinders
            .iter()
            .filter(|c| c.part == Part::Link)
            .collect::<Vec<_>>();
        assert_eq!(links.len(), 1);
        assert_relative_eq!(links[0].height, 5.0);
        assert_eq!(cylinders.last().unwrap().part, Part::Base);
    }

    #[test]
    fn test_gripper_cylinders() {
        let gripper = EndEffector::new(Vector3::new(0.0, 0.0, 3.0));
        let flange = make_translation(1.0, 2.0, 3.0);
        let cylinders = gripper.cylinders(&flange);
        assert_eq!(cylinders.len(), 3);
        let body = &cylinders[0];
        assert_eq!(body.part, Part::Gripper);
        assert_relative_eq!(body.height, 6.0);
        assert_relative_eq!(body.pose[(2, 3)], 6.0);
        let pin = &cylinders[1];
        assert_eq!(pin.part, Part::GripperPin);
        assert_relative_eq!(pin.height, 1.2);
        assert_relative_eq!(pin.pose[(0, 3)], 1.45, epsilon = 1e-12);
        assert_relative_eq!(pin.pose[(2, 3)], 6.0 + 3.6, epsilon = 1e-12);
        assert_relative_eq!(cylinders[2].pose[(0, 3)], 0.55, epsilon = 1e-12);

        assert!(EndEffector::new(Vector3::<f64>::zeros())
            .cylinders(&flange)
            .is_empty());
    }
}
