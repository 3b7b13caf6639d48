//! Tuning values for `FrequencyTable`.

use crate::error::TableError;
use crate::hash::DEFAULT_MAGIC;

/// Slot count used by `FrequencyTable::new`.
pub const DEFAULT_CAPACITY: usize = 11;
/// Largest `live / capacity` ratio allowed after an insert.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;
/// Multiplier applied to the capacity on each growth step.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Creation-time configuration of a frequency table.
///
/// The defaults (11 slots, load factor 0.75, growth factor 2, multiplier 37)
/// are what `FrequencyTable::new` uses. Tests use small capacities and low
/// thresholds to force growth deterministically.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TableConfig {
    pub initial_capacity: usize,
    pub load_factor: f64,
    pub growth_factor: usize,
    pub hash_magic: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            hash_magic: DEFAULT_MAGIC,
        }
    }
}

impl TableConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            ..Self::default()
        }
    }

    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    pub fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    pub fn with_hash_magic(mut self, magic: u64) -> Self {
        self.hash_magic = magic;
        self
    }

    /// Checks every field. Capacity is checked first so `create(0)` reports
    /// `InvalidCapacity` regardless of the other values.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.initial_capacity == 0 {
            return Err(TableError::InvalidCapacity);
        }
        // NaN fails both comparisons.
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(TableError::InvalidConfig("load factor must be in (0, 1]"));
        }
        if self.growth_factor < 2 {
            return Err(TableError::InvalidConfig("growth factor must be at least 2"));
        }
        if self.hash_magic == 0 {
            return Err(TableError::InvalidConfig("hash multiplier must be non-zero"));
        }
        Ok(())
    }
}
