use sensa_core::{
    dispatch::{self, Slot},
    sequence, FloatSensor, IntSensor, Kind, Sensor, StringSensor,
};

// All sensors of a kind share one sequence per process. This file
// contains a single test to keep the process-wide state deterministic.
#[test]
fn sensors_of_a_kind_share_one_sequence() {
    sequence::reset_shared();

    let mut first = IntSensor::new("fa");
    let mut second = IntSensor::new("fa2");
    first.sample();
    second.sample();
    assert_eq!(77_777, first.get_value(false));
    assert_eq!(79_011, second.get_value(false));

    let mut float_sensor = FloatSensor::new("fc");
    float_sensor.sample();
    assert!((float_sensor.get_value(false) - 9.563).abs() < 1e-9);
    float_sensor.sample();
    assert!((float_sensor.get_value(false) - 10.797).abs() < 1e-9);

    let mut string_sensor = StringSensor::new("fb");
    string_sensor.sample();
    assert_eq!("A1", string_sensor.get_value(true));
    assert_eq!("<no value>", string_sensor.get_value(false));

    let mut slots = vec![
        Slot::from(Sensor::new(Kind::Int, "fa3")),
        Slot::from(Sensor::new(Kind::String, "fb2")),
        Slot::from(Sensor::new(Kind::Float, "fc2")),
        Slot::Unknown,
        Slot::Empty,
    ];
    assert_eq!(
        "80245:A2:12.031000:<unknown>:<empty>:",
        dispatch::collect(&mut slots, true)
    );
    // Strings are consumed by default, numbers are kept
    assert_eq!(
        "80245:<no value>:12.031000:<unknown>:<empty>:",
        dispatch::collect(&mut slots, false)
    );

    sequence::reset_shared();
    first.sample();
    assert_eq!(77_777, first.get_value(false));
}
