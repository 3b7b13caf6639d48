//! FrequencyTable: open-addressing string -> count map with linear probing.

use crate::config::TableConfig;
use crate::error::TableError;
use crate::hash::polynomial_hash;
use log::debug;

#[derive(Debug)]
struct Entry {
    key: String,
    count: u64,
}

/// Outcome of a successful `upsert`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Upsert {
    /// The key was absent; it now has count 1.
    Inserted,
    /// The key was present; its count went up by one.
    Incremented,
}

/// Where a probe for a key stopped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Slot {
    Match(usize),
    Vacant(usize),
    Exhausted,
}

/// Walks the probe sequence for `key`: home slot first, then `+1 mod len`,
/// stopping at the first match or vacancy. Visits at most `slots.len()`
/// slots. Returns the stop reason and how many slots were examined.
fn probe(slots: &[Option<Entry>], key: &str, magic: u64) -> (Slot, usize) {
    let cap = slots.len();
    let start = polynomial_hash(key.as_bytes(), magic, cap);
    let mut index = start;
    let mut examined = 0;
    loop {
        examined += 1;
        match &slots[index] {
            None => return (Slot::Vacant(index), examined),
            Some(e) if e.key == key => return (Slot::Match(index), examined),
            Some(_) => {}
        }
        index = (index + 1) % cap;
        if index == start {
            return (Slot::Exhausted, examined);
        }
    }
}

fn alloc_slots(capacity: usize) -> Result<Vec<Option<Entry>>, TableError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| TableError::OutOfMemory)?;
    slots.resize_with(capacity, || None);
    Ok(slots)
}

fn copy_key(key: &str) -> Result<String, TableError> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(key.len())
        .map_err(|_| TableError::OutOfMemory)?;
    owned.push_str(key);
    Ok(owned)
}

/// Counts occurrences of string keys.
///
/// Keys live directly in a slot vector; collisions resolve by linear probing.
/// Before every `upsert` the table grows (capacity times the growth factor,
/// full rehash) while `(live + 1) / capacity` would exceed the load factor,
/// so a vacancy always exists when probing starts.
///
/// There is no removal. The table owns one copy of every key; callers only
/// lend `&str` views.
#[derive(Debug)]
pub struct FrequencyTable {
    slots: Vec<Option<Entry>>,
    live: usize,
    config: TableConfig,
}

impl FrequencyTable {
    /// Table with the default configuration (11 slots).
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
            .expect("default configuration is valid and small")
    }

    /// Table with `capacity` slots and default tuning.
    pub fn create(capacity: usize) -> Result<Self, TableError> {
        Self::with_config(TableConfig::with_capacity(capacity))
    }

    pub fn with_config(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self {
            slots: alloc_slots(config.initial_capacity)?,
            live: 0,
            config,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn live_count(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.live as f64 / self.slots.len() as f64
    }

    fn needs_growth(&self) -> bool {
        (self.live + 1) as f64 / self.slots.len() as f64 > self.config.load_factor
    }

    /// Records one occurrence of `key`.
    ///
    /// Grows first if one more entry would break the load factor, then probes
    /// from the key's home slot. A key is copied only on its first insertion.
    /// On error the table keeps its last valid state; a completed growth step
    /// is not undone.
    pub fn upsert(&mut self, key: &str) -> Result<Upsert, TableError> {
        while self.needs_growth() {
            self.grow()?;
        }
        match probe(&self.slots, key, self.config.hash_magic).0 {
            Slot::Match(i) => {
                if let Some(e) = self.slots[i].as_mut() {
                    e.count = e.count.saturating_add(1);
                }
                Ok(Upsert::Incremented)
            }
            Slot::Vacant(i) => {
                let key = copy_key(key)?;
                self.slots[i] = Some(Entry { key, count: 1 });
                self.live += 1;
                Ok(Upsert::Inserted)
            }
            Slot::Exhausted => Err(TableError::TableFull),
        }
    }

    /// Upserts every key from `keys`, stopping at the first error.
    pub fn upsert_all<I, S>(&mut self, keys: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for k in keys {
            self.upsert(k.as_ref())?;
        }
        Ok(())
    }

    /// Count recorded for `key`, or `None` if it was never inserted.
    pub fn count_of(&self, key: &str) -> Option<u64> {
        match probe(&self.slots, key, self.config.hash_magic).0 {
            Slot::Match(i) => self.slots[i].as_ref().map(|e| e.count),
            Slot::Vacant(_) | Slot::Exhausted => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.count_of(key).is_some()
    }

    /// Multiplies the capacity by the growth factor and re-probes every
    /// entry against the new capacity. Keys are moved, not copied.
    ///
    /// The new slot vector is fully allocated before the old one is touched,
    /// so an allocation failure leaves the table unchanged. Returns
    /// `TableFull` without touching the table if the new capacity could not
    /// hold every live entry.
    pub fn grow(&mut self) -> Result<(), TableError> {
        let old_cap = self.slots.len();
        let new_cap = old_cap
            .checked_mul(self.config.growth_factor)
            .ok_or(TableError::OutOfMemory)?;
        if new_cap <= self.live {
            return Err(TableError::TableFull);
        }
        let mut fresh = alloc_slots(new_cap)?;
        debug!(
            "growing frequency table: {} -> {} slots, {} live",
            old_cap, new_cap, self.live
        );
        let magic = self.config.hash_magic;
        for entry in core::mem::take(&mut self.slots).into_iter().flatten() {
            // Keys are unique and new_cap > live, so every probe ends at a vacancy.
            match probe(&fresh, &entry.key, magic).0 {
                Slot::Vacant(i) => fresh[i] = Some(entry),
                Slot::Match(_) | Slot::Exhausted => {
                    debug_assert!(false, "rehash found no vacancy for a unique key")
                }
            }
        }
        self.slots = fresh;
        Ok(())
    }

    /// Borrowing iterator over `(key, count)`; order is slot order and
    /// changes after growth. Each call starts a fresh pass.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            it: self.slots.iter(),
            remaining: self.live,
        }
    }

    /// Consumes the table, yielding owned keys with their counts.
    pub fn into_entries(self) -> IntoEntries {
        IntoEntries {
            remaining: self.live,
            it: self.slots.into_iter(),
        }
    }

    /// Releases the table and every key it owns.
    pub fn destroy(self) {
        drop(self);
    }

    #[cfg(test)]
    pub(crate) fn probe_len(&self, key: &str) -> usize {
        probe(&self.slots, key, self.config.hash_magic).1
    }

    #[cfg(test)]
    pub(crate) fn slot_of(&self, key: &str) -> Option<usize> {
        match probe(&self.slots, key, self.config.hash_magic).0 {
            Slot::Match(i) => Some(i),
            _ => None,
        }
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `(key, count)` pairs of a `FrequencyTable`.
pub struct Entries<'a> {
    it: core::slice::Iter<'a, Option<Entry>>,
    remaining: usize,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, u64);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.it.by_ref().flatten().next()?;
        self.remaining -= 1;
        Some((e.key.as_str(), e.count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a str, u64);
    type IntoIter = Entries<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Owning iterator returned by `FrequencyTable::into_entries`.
pub struct IntoEntries {
    it: std::vec::IntoIter<Option<Entry>>,
    remaining: usize,
}

impl Iterator for IntoEntries {
    type Item = (String, u64);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.it.by_ref().flatten().next()?;
        self.remaining -= 1;
        Some((e.key, e.count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for IntoEntries {}
