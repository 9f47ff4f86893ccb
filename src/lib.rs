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
//! # Denavit-Hartenberg kinematics and gravity load library using [nalgebra](http://nalgebra.org).
//!
//! `gravibot` has below functionalities
//!
//! 1. Elementary rotations, translations and pose helpers
//! 1. Serial chain described by the DH parameters with joint limits
//! 1. Forward kinematics of every joint frame
//! 1. Gravity force and moment seen by the wrist force sensor
//! 1. Cylinder scene of the robot for visualization
//! 1. TOML loader of the DH table
//!
//! See `RobotParam` and `Robot` as the top level interface.
//!
//! # Examples
//!
//! ```
//! use gravibot::*;
//! use gravibot::gravity::EndEffector;
//! use gravibot::report::LoadReport;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let mut param = RobotParam::new();
//! param.add_link(LinkParam::new(0.0, FRAC_PI_2, 10.0, 0.0).unwrap());
//! param.add_link(LinkParam::new(10.0, -FRAC_PI_2, 0.0, 0.0).unwrap());
//! param.add_link(LinkParam::new(10.0, 0.0, 0.0, 0.0).unwrap());
//!
//! let robot = Robot::new(&param);
//! assert_eq!(robot.joint_position(2).unwrap(), Vector3::new(20.0, 0.0, 10.0));
//!
//! let gripper = EndEffector::new(Vector3::new(3.0, 0.0, 0.0));
//! let report = LoadReport::new(&robot, &gripper).unwrap();
//! println!("{report}");
//! ```
mod errors;
pub mod config;
pub mod gravity;
pub mod link;
pub mod math;
pub mod report;
mod robot;
mod robot_param;
pub mod scene;

pub use self::errors::*;
pub use self::link::{DhParam, JointKind, LinkParam, LinkParamBuilder, Range};
pub use self::robot::*;
pub use self::robot_param::*;

// re-export from nalgebra
pub use nalgebra::{Matrix3, Matrix4, RealField, Vector3};
pub use simba::scalar::{SubsetOf, SupersetOf};
