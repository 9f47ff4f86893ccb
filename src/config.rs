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
//! Load `RobotParam` from the DH table written in TOML
//!
//! ```toml
//! [[links]]
//! a = 0.0
//! alpha = 1.5707963267948966
//! d = 10.0
//!
//! [[links]]
//! a = 10.0
//! prismatic = true
//! min = 0.0
//! max = 5.0
//! ```
//!
//! `d`, `theta` and `alpha` are 0.0 if omitted. `min` and `max` are the
//! limits of the driven variable and they are `-pi` and `pi` if omitted.
use crate::errors::*;
use crate::link::*;
use crate::robot_param::*;
use na::RealField;
use nalgebra as na;
use serde::{Deserialize, Serialize};
use simba::scalar::SubsetOf;
use std::path::Path;
use tracing::debug;

fn default_min() -> f64 {
    -std::f64::consts::PI
}

fn default_max() -> f64 {
    std::f64::consts::PI
}

/// One row of the DH table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkDescription {
    pub a: f64,
    #[serde(default)]
    pub alpha: f64,
    #[serde(default)]
    pub d: f64,
    #[serde(default)]
    pub theta: f64,
    /// `d` is driven instead of `theta`
    #[serde(default)]
    pub prismatic: bool,
    #[serde(default = "default_min")]
    pub min: f64,
    #[serde(default = "default_max")]
    pub max: f64,
}

/// DH table of the whole chain, ordered from the base
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RobotDescription {
    pub links: Vec<LinkDescription>,
}

impl<T> TryFrom<&LinkDescription> for LinkParam<T>
where
    T: RealField + SubsetOf<f64>,
{
    type Error = Error;

    fn try_from(desc: &LinkDescription) -> Result<Self, Self::Error> {
        if !(desc.min <= desc.max) {
            return Err(Error::InvalidArgument(format!(
                "min ({}) must be less than or equal to max ({})",
                desc.min, desc.max
            )));
        }
        let joint_kind = if desc.prismatic {
            JointKind::Prismatic
        } else {
            JointKind::Revolute
        };
        LinkParamBuilder::<T>::new()
            .a(na::convert(desc.a))
            .alpha(na::convert(desc.alpha))
            .d(na::convert(desc.d))
            .theta(na::convert(desc.theta))
            .joint_kind(joint_kind)
            .limits(Range::new(na::convert(desc.min), na::convert(desc.max)))
            .finalize()
    }
}

impl<T> TryFrom<&RobotDescription> for RobotParam<T>
where
    T: RealField + SubsetOf<f64>,
{
    type Error = Error;

    fn try_from(desc: &RobotDescription) -> Result<Self, Self::Error> {
        desc.links.iter().map(LinkParam::<T>::try_from).collect()
    }
}

impl<T> RobotParam<T>
where
    T: RealField + SubsetOf<f64>,
{
    /// Create the chain from the TOML string
    ///
    /// # Examples
    ///
    /// ```
    /// let param = gravibot::RobotParam::<f64>::from_toml_str(r#"
    /// [[links]]
    /// a = 0.0
    /// alpha = 1.5707963267948966
    /// d = 10.0
    ///
    /// [[links]]
    /// a = 10.0
    /// "#).unwrap();
    /// assert_eq!(param.count(), 2);
    /// assert_eq!(param.get_link(0).unwrap().d(), 10.0);
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Error> {
        let desc: RobotDescription = toml::from_str(toml_str)?;
        let param = Self::try_from(&desc)?;
        debug!(links = param.count(), "loaded robot description");
        Ok(param)
    }
    /// Create the chain from the TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!(path = %path.display(), "read robot description");
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let desc: RobotDescription = toml::from_str("[[links]]\na = 1.5\n").unwrap();
        let link = &desc.links[0];
        assert_eq!(link.alpha, 0.0);
        assert!(!link.prismatic);
        assert_eq!(link.min, -std::f64::consts::PI);
        assert_eq!(link.max, std::f64::consts::PI);
    }

    #[test]
    fn test_prismatic_link() {
        let param = RobotParam::<f64>::from_toml_str(
            r#"
            [[links]]
            a = 1.0
            d = 0.5
            prismatic = true
            min = 0.0
            max = 2.0
            "#,
        )
        .unwrap();
        let link = param.get_link(0).unwrap();
        assert_eq!(link.joint_kind(), JointKind::Prismatic);
        assert_eq!(link.driven_value(), 0.5);
        assert_eq!(link.limits(), &Range::new(0.0, 2.0));
    }

    #[test]
    fn test_invalid_descriptions() {
        let inverted = "[[links]]\na = 1.0\nmin = 1.0\nmax = -1.0\n";
        assert!(matches!(
            RobotParam::<f64>::from_toml_str(inverted),
            Err(Error::InvalidArgument(_))
        ));
        let outside = "[[links]]\na = 1.0\ntheta = 4.0\n";
        assert!(matches!(
            RobotParam::<f64>::from_toml_str(outside),
            Err(Error::OutOfRange { value, .. }) if value == 4.0
        ));
        assert!(matches!(
            RobotParam::<f64>::from_toml_str("[[links]]\nalpha = 1.0\n"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            RobotParam::<f64>::from_toml_file("no/such/robot.toml"),
            Err(Error::Io(_))
        ));
    }
}
