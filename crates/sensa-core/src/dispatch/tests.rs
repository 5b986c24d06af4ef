use crate::{Kind, Value};

use super::*;

fn mixed_slots() -> Vec<Slot> {
    vec![
        Sensor::with_value("fa", 123).into(),
        Sensor::with_value("fb", "Jadda").into(),
        Sensor::with_value("fc", 3.579).into(),
        Slot::Unknown,
        Slot::Empty,
    ]
}

#[test]
fn resample_yields_one_entry_per_slot_in_order() {
    let mut sequences = Sequences::new();
    let mut slots = mixed_slots();
    let entries = Dispatch::default().collect_entries_from(&mut slots, &mut sequences);
    assert_eq!(
        vec!["77777", "A1", "9.563000", UNKNOWN_ENTRY, EMPTY_ENTRY],
        entries
    );
}

#[test]
fn without_resample_reads_current_values() {
    let mut sequences = Sequences::new();
    let mut slots = mixed_slots();
    let dispatch = Dispatch::default().with_resample(false);

    let entries = dispatch.collect_entries_from(&mut slots, &mut sequences);
    assert_eq!(
        vec!["123", "Jadda", "3.579000", UNKNOWN_ENTRY, EMPTY_ENTRY],
        entries
    );

    // The string value has been consumed by the default read mode
    let entries = dispatch.collect_entries_from(&mut slots, &mut sequences);
    assert_eq!(
        vec!["123", "<no value>", "3.579000", UNKNOWN_ENTRY, EMPTY_ENTRY],
        entries
    );

    // Nothing has been drawn from the sequences
    assert_eq!(Value::Int(77_777), sequences.next_value(Kind::Int));
}

#[test]
fn read_mode_override() {
    let mut sequences = Sequences::new();
    let mut slots = mixed_slots();

    let keep = Dispatch::default()
        .with_resample(false)
        .with_read_mode(ReadMode::Keep);
    keep.collect_entries_from(&mut slots, &mut sequences);
    assert!(slots.iter().filter_map(Slot::as_sensor).all(Sensor::has_value));

    let reset = keep.with_read_mode(ReadMode::Reset);
    reset.collect_entries_from(&mut slots, &mut sequences);
    assert!(!slots.iter().filter_map(Slot::as_sensor).any(Sensor::has_value));
}

#[test]
fn join_appends_separator_to_each_entry() {
    let dispatch = Dispatch::default();
    assert_eq!("", dispatch.join(Vec::new()));
    assert_eq!(
        "1:A1:",
        dispatch.join(vec!["1".to_owned(), "A1".to_owned()])
    );
    assert_eq!(
        "1, A1, ",
        dispatch
            .with_separator(", ")
            .join(vec!["1".to_owned(), "A1".to_owned()])
    );
}

#[test]
fn collect_without_resample_does_not_sample() {
    let mut slots = vec![
        Slot::from(Some(Sensor::new(Kind::Int, "fa"))),
        Slot::from(None),
        Slot::Unknown,
    ];
    assert_eq!("4294967295:<empty>:<unknown>:", collect(&mut slots, false));
}

#[test]
fn collect_sensors_without_resample() {
    let mut sensors = [
        Sensor::with_value("fa", 123),
        Sensor::new(Kind::String, "fb"),
        Sensor::new(Kind::Float, "fc"),
    ];
    assert_eq!(
        "123:<no value>:4294967295.000000:",
        collect_sensors(&mut sensors, false)
    );
    assert_eq!(
        vec!["123", "<no value>", "4294967295.000000"],
        Dispatch::default()
            .with_resample(false)
            .collect_sensor_entries(&mut sensors)
    );
}
