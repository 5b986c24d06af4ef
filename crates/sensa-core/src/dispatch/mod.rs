//! Sampling and reading collections of sensors

use crate::{sequence::Sequences, ReadMode, Sensor};

/// Appended after each entry of a collected pass
pub const DEFAULT_SEPARATOR: &str = ":";

/// Entry of a slot that holds something other than a sensor
pub const UNKNOWN_ENTRY: &str = "<unknown>";

/// Entry of a slot that holds nothing
pub const EMPTY_ENTRY: &str = "<empty>";

/// A loosely typed collection element
///
/// Only needed for collections that might contain elements
/// which are not sensors. Prefer collections of [`Sensor`].
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Sensor(Sensor),
    /// Occupied by something that is not a sensor
    Unknown,
    Empty,
}

impl Slot {
    pub const fn as_sensor(&self) -> Option<&Sensor> {
        match self {
            Self::Sensor(sensor) => Some(sensor),
            Self::Unknown | Self::Empty => None,
        }
    }
}

impl From<Sensor> for Slot {
    fn from(from: Sensor) -> Self {
        Self::Sensor(from)
    }
}

impl From<Option<Sensor>> for Slot {
    fn from(from: Option<Sensor>) -> Self {
        from.map_or(Self::Empty, Self::Sensor)
    }
}

/// Options for a single pass over a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    /// Sample each sensor before reading it
    pub resample: bool,

    /// Overrides the default read mode of each sensor's kind
    pub read_mode: Option<ReadMode>,

    pub separator: &'static str,
}

impl Default for Dispatch {
    fn default() -> Self {
        Self {
            resample: true,
            read_mode: None,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl Dispatch {
    #[must_use]
    pub const fn with_resample(mut self, resample: bool) -> Self {
        self.resample = resample;
        self
    }

    #[must_use]
    pub const fn with_read_mode(mut self, read_mode: ReadMode) -> Self {
        self.read_mode = Some(read_mode);
        self
    }

    #[must_use]
    pub const fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    fn sensor_entry(
        &self,
        sensor: &mut Sensor,
        sample: &mut impl FnMut(&mut Sensor),
    ) -> String {
        if self.resample {
            sample(sensor);
        }
        let read_mode = self.read_mode.unwrap_or_else(|| sensor.default_read_mode());
        let entry = sensor.get_value(read_mode).to_string();
        log::trace!("{} ({}): {}", sensor.label(), sensor.kind(), entry);
        entry
    }

    fn slot_entry(&self, slot: &mut Slot, sample: &mut impl FnMut(&mut Sensor)) -> String {
        match slot {
            Slot::Sensor(sensor) => self.sensor_entry(sensor, sample),
            Slot::Unknown => {
                log::warn!("Unknown sensor");
                UNKNOWN_ENTRY.to_owned()
            }
            Slot::Empty => {
                log::warn!("Empty slot");
                EMPTY_ENTRY.to_owned()
            }
        }
    }

    /// Formatted entries of all slots in iteration order
    ///
    /// Samples from the process-wide sequences.
    pub fn collect_entries<'a>(
        &self,
        slots: impl IntoIterator<Item = &'a mut Slot>,
    ) -> Vec<String> {
        let mut sample = Sensor::sample;
        slots
            .into_iter()
            .map(|slot| self.slot_entry(slot, &mut sample))
            .collect()
    }

    /// Formatted entries of all slots in iteration order
    ///
    /// Samples from the given sequences.
    pub fn collect_entries_from<'a>(
        &self,
        slots: impl IntoIterator<Item = &'a mut Slot>,
        sequences: &mut Sequences,
    ) -> Vec<String> {
        let mut sample = |sensor: &mut Sensor| sensor.sample_from(sequences);
        slots
            .into_iter()
            .map(|slot| self.slot_entry(slot, &mut sample))
            .collect()
    }

    /// Formatted entries of all sensors in iteration order
    ///
    /// Samples from the process-wide sequences.
    pub fn collect_sensor_entries<'a>(
        &self,
        sensors: impl IntoIterator<Item = &'a mut Sensor>,
    ) -> Vec<String> {
        let mut sample = Sensor::sample;
        sensors
            .into_iter()
            .map(|sensor| self.sensor_entry(sensor, &mut sample))
            .collect()
    }

    /// Concatenate entries, each followed by the separator
    pub fn join(&self, entries: impl IntoIterator<Item = String>) -> String {
        entries.into_iter().fold(String::new(), |mut joined, entry| {
            joined.push_str(&entry);
            joined.push_str(self.separator);
            joined
        })
    }

    /// Run a pass over all slots and join the entries
    pub fn collect<'a>(&self, slots: impl IntoIterator<Item = &'a mut Slot>) -> String {
        let joined = self.join(self.collect_entries(slots));
        log::debug!("Collected: {joined}");
        joined
    }

    /// Run a pass over all sensors and join the entries
    pub fn collect_sensors<'a>(
        &self,
        sensors: impl IntoIterator<Item = &'a mut Sensor>,
    ) -> String {
        let joined = self.join(self.collect_sensor_entries(sensors));
        log::debug!("Collected: {joined}");
        joined
    }
}

/// Run a pass with default options
///
/// Each sensor is optionally sampled and then read with the
/// default read mode of its kind.
pub fn collect<'a>(slots: impl IntoIterator<Item = &'a mut Slot>, resample: bool) -> String {
    Dispatch::default().with_resample(resample).collect(slots)
}

/// Run a pass over sensors with default options
pub fn collect_sensors<'a>(
    sensors: impl IntoIterator<Item = &'a mut Sensor>,
    resample: bool,
) -> String {
    Dispatch::default()
        .with_resample(resample)
        .collect_sensors(sensors)
}

#[cfg(test)]
mod tests;
