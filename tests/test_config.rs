use gravibot::config::{LinkDescription, RobotDescription};
use gravibot::link::Range;
use gravibot::*;

#[test]
fn test_load_file() {
    let param = RobotParam::<f64>::from_toml_file("tests/data/three_links.toml").unwrap();
    assert_eq!(param.count(), 3);
    assert_eq!(param.get_link(1).unwrap().limits(), &Range::new(-1.0, 1.0));
    assert_eq!(
        param.get_link(2).unwrap().limits(),
        &Range::new(-std::f64::consts::PI, std::f64::consts::PI)
    );
    let robot = Robot::new(&param);
    assert_eq!(robot.joint_position(2).unwrap(), Vector3::new(20.0, 0.0, 10.0));
}

#[test]
fn test_limits_from_file_are_enforced() {
    let mut param = RobotParam::<f32>::from_toml_file("tests/data/three_links.toml").unwrap();
    assert!(param.set_joint_value(1, 0.5).is_ok());
    assert!(matches!(
        param.set_joint_value(1, 1.5),
        Err(Error::OutOfRange { .. })
    ));
}

#[test]
fn test_from_description() {
    let desc = RobotDescription {
        links: vec![LinkDescription {
            a: 1.0,
            alpha: 0.0,
            d: 0.2,
            theta: 0.0,
            prismatic: true,
            min: 0.0,
            max: 1.0,
        }],
    };
    let param = RobotParam::<f64>::try_from(&desc).unwrap();
    assert_eq!(param.get_link(0).unwrap().joint_kind(), JointKind::Prismatic);
    assert_eq!(param.joint_values(), vec![0.2]);

    let text = toml::to_string(&desc).unwrap();
    let parsed: RobotDescription = toml::from_str(&text).unwrap();
    assert_eq!(parsed, desc);
}

#[test]
fn test_empty_description() {
    let param = RobotParam::<f64>::from_toml_str("links = []").unwrap();
    assert!(param.is_empty());
}
