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
use gravibot::gravity::EndEffector;
use gravibot::report::LoadReport;
use gravibot::*;
use std::f64::consts::FRAC_PI_2;
use tracing_subscriber::EnvFilter;

// Print the gravity load of the gripper while the wrist joint turns
//
// RUST_LOG=gravibot=debug cargo run --example gravity_table
fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut param = RobotParam::new();
    param.add_link(LinkParam::new(0.0, FRAC_PI_2, 10.0, 0.0)?);
    param.add_link(LinkParam::new(10.0, -FRAC_PI_2, 0.0, 0.0)?);
    param.add_link(LinkParam::new(10.0, 0.0, 0.0, 0.0)?);
    println!("{param}");

    let gripper = EndEffector::new(Vector3::new(3.0, 0.0, 0.0));
    for step in 0..5 {
        let angle = -FRAC_PI_2 + FRAC_PI_2 * 0.5 * step as f64;
        param.set_joint_value(2, angle)?;
        let robot = Robot::new(&param);
        let report = LoadReport::new(&robot, &gripper)?;
        let flange = robot.end_transform()?;
        let cylinders = robot.cylinders().len() + gripper.cylinders(&flange).len();
        println!("--- joint 2 = {angle:.3} rad ({cylinders} cylinders)");
        println!("{report}");
    }
    Ok(())
}
