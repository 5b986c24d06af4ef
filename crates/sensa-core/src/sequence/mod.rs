//! Deterministic value sequences for sampling sensors
//!
//! Each kind has its own sequence. The sequences used by
//! [`Sensor::sample()`](crate::Sensor::sample) are shared
//! process-wide: all sensors of the same kind draw from one
//! sequence. Use [`Sequences`] directly for isolated sampling.

use parking_lot::{const_mutex, Mutex};

use crate::{Kind, Value};

pub const INT_START: i64 = 77_777;
pub const INT_STEP: i64 = 1_234;

pub const FLOAT_START: f64 = 9.563;
pub const FLOAT_STEP: f64 = 1.234;

pub const STRING_PREFIX: &str = "A";
pub const STRING_FIRST_SUFFIX: u64 = 1;

/// Arithmetic sequence of integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntSequence {
    next: i64,
}

impl IntSequence {
    pub const fn new() -> Self {
        Self { next: INT_START }
    }

    pub fn next_value(&mut self) -> i64 {
        let value = self.next;
        self.next = self.next.wrapping_add(INT_STEP);
        value
    }
}

impl Default for IntSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for IntSequence {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_value())
    }
}

/// Arithmetic sequence of floating-point numbers
///
/// Accumulates the step, i.e. rounding errors add up.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatSequence {
    next: f64,
}

impl FloatSequence {
    pub const fn new() -> Self {
        Self { next: FLOAT_START }
    }

    pub fn next_value(&mut self) -> f64 {
        let value = self.next;
        self.next += FLOAT_STEP;
        value
    }
}

impl Default for FloatSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FloatSequence {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_value())
    }
}

/// Strings with a fixed prefix and an increasing numeric suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSequence {
    suffix: u64,
}

impl StringSequence {
    pub const fn new() -> Self {
        Self {
            suffix: STRING_FIRST_SUFFIX,
        }
    }

    pub fn next_value(&mut self) -> String {
        let value = format!("{STRING_PREFIX}{}", self.suffix);
        self.suffix = self.suffix.wrapping_add(1);
        value
    }
}

impl Default for StringSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for StringSequence {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_value())
    }
}

/// One sequence per kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequences {
    pub int: IntSequence,
    pub float: FloatSequence,
    pub string: StringSequence,
}

impl Sequences {
    pub const fn new() -> Self {
        Self {
            int: IntSequence::new(),
            float: FloatSequence::new(),
            string: StringSequence::new(),
        }
    }

    /// Advance the sequence of the given kind
    pub fn next_value(&mut self, kind: Kind) -> Value {
        match kind {
            Kind::Int => Value::Int(self.int.next_value()),
            Kind::Float => Value::Float(self.float.next_value()),
            Kind::String => Value::String(self.string.next_value()),
        }
    }
}

static SHARED: Mutex<Sequences> = const_mutex(Sequences::new());

/// Run a closure with exclusive access to the process-wide sequences
///
/// The lock is held while the closure runs. Do not sample sensors
/// from within the closure, this would deadlock.
pub fn with_shared<R>(f: impl FnOnce(&mut Sequences) -> R) -> R {
    let mut guard = SHARED.lock();
    f(&mut *guard)
}

/// Rewind the process-wide sequences to their start values
pub fn reset_shared() {
    log::debug!("Resetting shared sequences");
    *SHARED.lock() = Sequences::new();
}

#[cfg(test)]
mod tests;
