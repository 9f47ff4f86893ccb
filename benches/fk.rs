/*
  Copyright 2017 Takashi Ogura

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
// cargo bench --bench fk
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gravibot::gravity::EndEffector;
use gravibot::link::Range;
use gravibot::*;
use std::f64::consts::FRAC_PI_2;

fn generate_random_joint_values_from_limits<T>(limits: &[Range<T>]) -> Vec<T>
where
    T: RealField,
{
    limits
        .iter()
        .map(|range| {
            (range.max.clone() - range.min.clone()) * nalgebra::convert(rand::random::<f64>())
                + range.min.clone()
        })
        .collect()
}

fn six_links() -> RobotParam<f64> {
    [
        (0.0, FRAC_PI_2, 0.4),
        (0.3, 0.0, 0.0),
        (0.05, FRAC_PI_2, 0.0),
        (0.0, -FRAC_PI_2, 0.35),
        (0.0, FRAC_PI_2, 0.0),
        (0.0, 0.0, 0.08),
    ]
    .iter()
    .map(|&(a, alpha, d)| LinkParam::new(a, alpha, d, 0.0).unwrap())
    .collect()
}

fn bench_fk(c: &mut Criterion) {
    let mut param = six_links();
    let limits = param.iter().map(|l| l.limits().clone()).collect::<Vec<_>>();
    let values = generate_random_joint_values_from_limits(&limits);

    c.bench_function("set_joint_values", |b| {
        b.iter(|| param.set_joint_values(black_box(&values)).unwrap())
    });

    let robot = Robot::new(&param);
    c.bench_function("joint_transforms", |b| {
        b.iter(|| {
            let transforms = robot.joint_transforms();
            assert_eq!(transforms.len(), 6);
        })
    });
    c.bench_function("end_transform", |b| {
        b.iter(|| black_box(&robot).end_transform().unwrap())
    });

    let gripper = EndEffector::new(Vector3::new(0.0, 0.0, 0.1));
    let rotation = robot.joint_rotation(5).unwrap();
    c.bench_function("gravity_load", |b| {
        b.iter(|| gripper.load(black_box(&rotation)))
    });
}

criterion_group!(benches, bench_fk);
criterion_main!(benches);
