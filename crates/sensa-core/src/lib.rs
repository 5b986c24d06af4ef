//! Sensors of a closed set of kinds holding optional values

mod error;
mod sensor;
mod value;

pub use self::{
    error::{Error, Result},
    sensor::*,
    value::*,
};

pub mod dispatch;
pub mod sequence;
