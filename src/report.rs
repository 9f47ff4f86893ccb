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
//! Text output of the kinematics and load values, rounded to 3 decimals
use crate::errors::*;
use crate::gravity::EndEffector;
use crate::math::*;
use crate::robot::Robot;
use na::RealField;
use nalgebra as na;
use simba::scalar::SubsetOf;
use std::fmt::{self, Display};

// avoid printing "-0.000" for the negative zero
fn fixed<T: RealField>(v: &T) -> String {
    format!("{:.3}", v.clone() + T::zero())
}

/// `x:1.000, y:2.000, z:3.000`
pub fn format_position<T: RealField>(position: &PositionVector<T>) -> String {
    format!(
        "x:{}, y:{}, z:{}",
        fixed(&position.x),
        fixed(&position.y),
        fixed(&position.z)
    )
}

fn format_rows<T, const D: usize>(matrix: &na::SMatrix<T, D, D>) -> String
where
    T: RealField,
{
    matrix
        .row_iter()
        .map(|row| row.iter().map(fixed).collect::<Vec<_>>().join(", "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per row, the values are separated by `, `
///
/// # Examples
///
/// ```
/// use gravibot::report::format_rotation;
/// use nalgebra::Matrix3;
///
/// assert_eq!(
///     format_rotation(&Matrix3::<f64>::identity()),
///     "1.000, 0.000, 0.000\n0.000, 1.000, 0.000\n0.000, 0.000, 1.000"
/// );
/// ```
pub fn format_rotation<T: RealField>(rotation: &RotationMatrix<T>) -> String {
    format_rows(rotation)
}

pub fn format_transform<T: RealField>(trans: &Transform<T>) -> String {
    format_rows(trans)
}

/// Values shown together to explain the gravity load on the sensor
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport<T: RealField> {
    /// Position of the flange
    pub position: PositionVector<T>,
    /// Center of mass offset, in the order of the force
    pub com_offset: PositionVector<T>,
    pub mass: T,
    /// Orientation of the flange
    pub rotation: RotationMatrix<T>,
    pub force: PositionVector<T>,
    pub moment: PositionVector<T>,
}

impl<T> LoadReport<T>
where
    T: RealField + SubsetOf<f64>,
{
    /// Evaluate the load of the gripper attached to the last joint
    pub fn new(robot: &Robot<T>, gripper: &EndEffector<T>) -> Result<Self, Error> {
        let flange = robot.end_transform()?;
        let rotation = extract_rotation(&flange)?;
        let load = gripper.load(&rotation);
        Ok(LoadReport {
            position: extract_position(&flange)?,
            com_offset: gripper.sensor_com_offset(),
            mass: gripper.mass.clone(),
            rotation,
            force: load.force,
            moment: load.moment,
        })
    }
}

impl<T: RealField> Display for LoadReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "tip position [m]: {}", format_position(&self.position))?;
        writeln!(
            f,
            "tip to gripper center of mass [m]: {}",
            format_position(&self.com_offset)
        )?;
        writeln!(f, "gripper mass [kg]: {}", fixed(&self.mass))?;
        writeln!(f, "tip orientation:")?;
        for line in format_rotation(&self.rotation).lines() {
            writeln!(f, "  {line}")?;
        }
        writeln!(f, "sensor force [N]: {}", format_position(&self.force))?;
        write!(f, "sensor moment [Nm]: {}", format_position(&self.moment))
    }
}

#[test]
fn test_negative_zero_is_not_signed() {
    let position = PositionVector::new(-0.0, 1.23456, -2.0006);
    assert_eq!(format_position(&position), "x:0.000, y:1.235, z:-2.001");
}

#[test]
fn test_format_transform() {
    let trans = make_translation(1.0f64, -2.0, 0.5);
    assert_eq!(
        format_transform(&trans),
        "1.000, 0.000, 0.000, 1.000\n\
         0.000, 1.000, 0.000, -2.000\n\
         0.000, 0.000, 1.000, 0.500\n\
         0.000, 0.000, 0.000, 1.000"
    );
}
