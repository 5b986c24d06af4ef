//! Sensors holding an optional value of a single kind

use crate::{
    sequence::{self, Sequences},
    Error, Kind, Result, Value, ABSENT_FLOAT, ABSENT_INT, ABSENT_STRING,
};

/// What happens to the current value when reading it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReadMode {
    /// Leave the value in place
    #[default]
    Keep,
    /// Clear the value after it has been read
    Reset,
}

impl ReadMode {
    pub const fn from_reset_after_read(reset_after_read: bool) -> Self {
        if reset_after_read {
            Self::Reset
        } else {
            Self::Keep
        }
    }
}

impl From<bool> for ReadMode {
    fn from(reset_after_read: bool) -> Self {
        Self::from_reset_after_read(reset_after_read)
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
}

/// A type that can be carried by a sensor
///
/// Implemented for exactly one type per [`Kind`].
pub trait Payload: Clone + Into<Value> + private::Sealed {
    const KIND: Kind;

    /// Read mode of [`TypedSensor::read()`]
    const DEFAULT_READ_MODE: ReadMode;

    /// Sentinel returned when reading an absent value
    fn absent() -> Self;

    fn next_from(sequences: &mut Sequences) -> Self;

    fn try_from_value(value: Value) -> Result<Self>;
}

fn kind_mismatch(expected: Kind, value: &Value) -> Error {
    Error::KindMismatch {
        expected,
        actual: value.kind(),
    }
}

impl Payload for i64 {
    const KIND: Kind = Kind::Int;
    const DEFAULT_READ_MODE: ReadMode = ReadMode::Keep;

    fn absent() -> Self {
        ABSENT_INT
    }

    fn next_from(sequences: &mut Sequences) -> Self {
        sequences.int.next_value()
    }

    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Int(val) => Ok(val),
            value => Err(kind_mismatch(Self::KIND, &value)),
        }
    }
}

impl Payload for f64 {
    const KIND: Kind = Kind::Float;
    const DEFAULT_READ_MODE: ReadMode = ReadMode::Keep;

    fn absent() -> Self {
        ABSENT_FLOAT
    }

    fn next_from(sequences: &mut Sequences) -> Self {
        sequences.float.next_value()
    }

    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float(val) => Ok(val),
            value => Err(kind_mismatch(Self::KIND, &value)),
        }
    }
}

impl Payload for String {
    const KIND: Kind = Kind::String;
    // Differs from the numeric kinds. Strings are consumed on read
    // unless requested otherwise.
    const DEFAULT_READ_MODE: ReadMode = ReadMode::Reset;

    fn absent() -> Self {
        ABSENT_STRING.to_owned()
    }

    fn next_from(sequences: &mut Sequences) -> Self {
        sequences.string.next_value()
    }

    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(val) => Ok(val),
            value => Err(kind_mismatch(Self::KIND, &value)),
        }
    }
}

/// A labeled sensor with an optional value of type `T`
///
/// An absent value means that either no sample has been taken
/// yet or that the last sample has already been consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedSensor<T> {
    label: String,
    value: Option<T>,
}

pub type IntSensor = TypedSensor<i64>;
pub type FloatSensor = TypedSensor<f64>;
pub type StringSensor = TypedSensor<String>;

impl<T: Payload> TypedSensor<T> {
    /// Create a sensor without a value
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }

    /// Create a sensor with an initial value
    pub fn with_value(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn kind(&self) -> Kind {
        T::KIND
    }

    pub const fn default_read_mode(&self) -> ReadMode {
        T::DEFAULT_READ_MODE
    }

    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Inspect the current value without consuming it
    pub const fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Replace the current value
    ///
    /// Returns the previous value.
    pub fn set(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Take the current value, leaving it absent
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Sample the next value from the process-wide sequence of this kind
    pub fn sample(&mut self) {
        let value = sequence::with_shared(T::next_from);
        self.store_sample(value);
    }

    /// Sample the next value from the given sequences
    pub fn sample_from(&mut self, sequences: &mut Sequences) {
        let value = T::next_from(sequences);
        self.store_sample(value);
    }

    fn store_sample(&mut self, value: T) {
        if log::log_enabled!(log::Level::Debug) {
            let logged: Value = value.clone().into();
            log::debug!("{}: value = {}", self.label, logged);
        }
        self.value = Some(value);
    }

    /// Read the current value
    ///
    /// The value is cloned before it is optionally reset, i.e. a
    /// reset never affects the returned value. Absent values are
    /// substituted by the sentinel of this kind.
    pub fn get_value(&mut self, read_mode: impl Into<ReadMode>) -> T {
        let snapshot = match read_mode.into() {
            ReadMode::Keep => self.value.clone(),
            ReadMode::Reset => self.value.take(),
        };
        if snapshot.is_none() {
            log::trace!("{}: no value", self.label);
        }
        snapshot.unwrap_or_else(T::absent)
    }

    /// Read the current value with the default read mode of this kind
    pub fn read(&mut self) -> T {
        self.get_value(T::DEFAULT_READ_MODE)
    }

    /// Dispose the sensor and return its last value
    pub fn dispose(self) -> Option<T> {
        log::debug!("{}: disposed", self.label);
        self.value
    }
}

/// A sensor of any kind
///
/// All operations dispatch by exhaustive matching on the kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Sensor {
    Int(IntSensor),
    Float(FloatSensor),
    String(StringSensor),
}

fn replace_value<T: Payload>(
    sensor: &mut TypedSensor<T>,
    value: Value,
) -> Result<Option<Value>> {
    let value = T::try_from_value(value)?;
    Ok(sensor.set(value).map(Into::into))
}

impl Sensor {
    /// Create a sensor of the given kind without a value
    pub fn new(kind: Kind, label: impl Into<String>) -> Self {
        match kind {
            Kind::Int => Self::Int(IntSensor::new(label)),
            Kind::Float => Self::Float(FloatSensor::new(label)),
            Kind::String => Self::String(StringSensor::new(label)),
        }
    }

    /// Create a sensor with an initial value
    ///
    /// The kind of the sensor is determined by the value.
    pub fn with_value(label: impl Into<String>, value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Int(val) => Self::Int(IntSensor::with_value(label, val)),
            Value::Float(val) => Self::Float(FloatSensor::with_value(label, val)),
            Value::String(val) => Self::String(StringSensor::with_value(label, val)),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Int(sensor) => sensor.label(),
            Self::Float(sensor) => sensor.label(),
            Self::String(sensor) => sensor.label(),
        }
    }

    pub const fn kind(&self) -> Kind {
        match self {
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::String(_) => Kind::String,
        }
    }

    pub const fn default_read_mode(&self) -> ReadMode {
        match self {
            Self::Int(sensor) => sensor.default_read_mode(),
            Self::Float(sensor) => sensor.default_read_mode(),
            Self::String(sensor) => sensor.default_read_mode(),
        }
    }

    pub const fn has_value(&self) -> bool {
        match self {
            Self::Int(sensor) => sensor.has_value(),
            Self::Float(sensor) => sensor.has_value(),
            Self::String(sensor) => sensor.has_value(),
        }
    }

    pub fn sample(&mut self) {
        match self {
            Self::Int(sensor) => sensor.sample(),
            Self::Float(sensor) => sensor.sample(),
            Self::String(sensor) => sensor.sample(),
        }
    }

    pub fn sample_from(&mut self, sequences: &mut Sequences) {
        match self {
            Self::Int(sensor) => sensor.sample_from(sequences),
            Self::Float(sensor) => sensor.sample_from(sequences),
            Self::String(sensor) => sensor.sample_from(sequences),
        }
    }

    /// Read the current value, see [`TypedSensor::get_value()`]
    pub fn get_value(&mut self, read_mode: impl Into<ReadMode>) -> Value {
        let read_mode = read_mode.into();
        match self {
            Self::Int(sensor) => sensor.get_value(read_mode).into(),
            Self::Float(sensor) => sensor.get_value(read_mode).into(),
            Self::String(sensor) => sensor.get_value(read_mode).into(),
        }
    }

    /// Read the current value with the default read mode of its kind
    pub fn read(&mut self) -> Value {
        match self {
            Self::Int(sensor) => sensor.read().into(),
            Self::Float(sensor) => sensor.read().into(),
            Self::String(sensor) => sensor.read().into(),
        }
    }

    /// Replace the current value
    ///
    /// Returns the previous value. Fails without modifying the
    /// sensor if the kind of the value does not match.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Result<Option<Value>> {
        let value = value.into();
        match self {
            Self::Int(sensor) => replace_value(sensor, value),
            Self::Float(sensor) => replace_value(sensor, value),
            Self::String(sensor) => replace_value(sensor, value),
        }
    }

    /// Dispose the sensor and return its last value
    pub fn dispose(self) -> Option<Value> {
        match self {
            Self::Int(sensor) => sensor.dispose().map(Into::into),
            Self::Float(sensor) => sensor.dispose().map(Into::into),
            Self::String(sensor) => sensor.dispose().map(Into::into),
        }
    }
}

impl From<IntSensor> for Sensor {
    fn from(from: IntSensor) -> Self {
        Self::Int(from)
    }
}

impl From<FloatSensor> for Sensor {
    fn from(from: FloatSensor) -> Self {
        Self::Float(from)
    }
}

impl From<StringSensor> for Sensor {
    fn from(from: StringSensor) -> Self {
        Self::String(from)
    }
}
