// FIXME: Enable `deny(missing_docs)` before release
//#![deny(missing_docs)]
#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

pub use sensa_core as core;

pub use sensa_core::{dispatch::Slot, Kind, ReadMode, Sensor, Value};
