use anyhow::Result;
use sensa::{
    core::dispatch::{self, Dispatch},
    Kind, ReadMode, Sensor, Slot,
};

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();
    log::info!("Starting sensor demo");

    let mut slots = [
        Slot::from(Sensor::with_value("fa", 123)),
        Slot::from(Sensor::with_value("fb", "Jadda")),
        Slot::from(Sensor::with_value("fc", 3.579)),
        Slot::Unknown,
        Slot::Empty,
    ];

    let result = dispatch::collect(&mut slots, true);
    log::info!("RESULT: {result}");

    let result = dispatch::collect(&mut slots, false);
    log::info!("RESULT: {result}");

    let mut sensors = [
        Sensor::with_value("fa", 123),
        Sensor::with_value("fb", "Jadda"),
        Sensor::with_value("fc", 3.579),
    ];
    for read_mode in [Some(ReadMode::Keep), Some(ReadMode::Reset), None] {
        let dispatch = read_mode.map_or_else(Dispatch::default, |read_mode| {
            Dispatch::default().with_read_mode(read_mode)
        });
        for entry in dispatch.collect_sensor_entries(&mut sensors) {
            log::info!("RESULT: {entry}");
        }
    }

    let mut sensor = Sensor::new(Kind::Int, "fd");
    if let Err(err) = sensor.set_value("not a number") {
        log::warn!("{err}");
    }
    sensor.set_value(42)?;
    let label = sensor.label().to_owned();
    log::info!("Disposed {label} with {:?}", sensor.dispose());

    log::info!("Terminating sensor demo");
    Ok(())
}
