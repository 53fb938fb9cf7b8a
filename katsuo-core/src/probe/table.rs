//! Fixed-capacity open-addressing table with linear probing.

use std::num::NonZeroUsize;

use crate::error::ProbeTableError;

use super::hash::home_slot;

/// State of a single table slot.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Slot {
    /// Never held a key. Probe sequences stop here.
    #[default]
    Empty,
    /// Held a key that was deleted. Probe sequences continue past it.
    Tombstone,
    /// Holds a live key.
    Occupied(String),
}

impl Slot {
    /// Returns `true` when an insert may claim this slot.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        matches!(self, Self::Empty | Self::Tombstone)
    }

    /// Returns the stored key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Occupied(key) => Some(key),
            Self::Empty | Self::Tombstone => None,
        }
    }
}

/// Where a probe sequence ended and how far it travelled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Probe {
    slot: usize,
    probes: usize,
}

impl Probe {
    /// Returns the slot index the sequence ended on.
    #[must_use]
    #[rustfmt::skip]
    pub fn slot(&self) -> usize { self.slot }

    /// Returns the number of forward steps taken from the home slot.
    ///
    /// A key found (or placed) at its home slot reports `0`.
    #[must_use]
    #[rustfmt::skip]
    pub fn probes(&self) -> usize { self.probes }
}

/// Open-addressing hash table over string keys.
///
/// The table never grows. Inserting into a full table is reported as
/// [`ProbeTableError::Full`] and leaves the table untouched. Deleted keys leave
/// a [`Slot::Tombstone`] behind so that keys which probed past them stay
/// reachable.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use katsuo_core::ProbeTable;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut table = ProbeTable::new(NonZeroUsize::new(8).ok_or("zero")?);
/// table.insert("tuna")?;
/// assert!(table.contains("tuna"));
/// table.delete("tuna")?;
/// assert!(!table.contains("tuna"));
/// assert_eq!(table.tombstones(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ProbeTable {
    slots: Vec<Slot>,
    len: usize,
    tombstones: usize,
}

impl ProbeTable {
    /// Creates an empty table with `capacity` slots.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            slots: vec![Slot::Empty; capacity.get()],
            len: 0,
            tombstones: 0,
        }
    }

    /// Returns the fixed number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live keys.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.len }

    /// Returns `true` when no live keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of tombstoned slots.
    #[must_use]
    #[rustfmt::skip]
    pub fn tombstones(&self) -> usize { self.tombstones }

    /// Returns the fraction of slots holding live keys.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "load factor is a diagnostic ratio; exactness is not required"
    )]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Returns the slot at `index`, or `None` when `index >= capacity`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Iterates over the live keys in slot order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(Slot::key)
    }

    /// Stores `key` in the first free slot at or after its home slot.
    ///
    /// Duplicate keys are not detected; inserting a key twice stores it twice.
    ///
    /// # Errors
    /// Returns [`ProbeTableError::Full`] when every slot holds a live key. The
    /// table is not modified in that case.
    pub fn insert(&mut self, key: impl Into<String>) -> Result<Probe, ProbeTableError> {
        let capacity = self.capacity();
        if self.len == capacity {
            return Err(ProbeTableError::Full { capacity });
        }

        let key = key.into();
        let mut index = home_slot(&key, capacity);
        // With `len < capacity` a free slot exists, so one full lap suffices.
        for probes in 0..capacity {
            let slot = &mut self.slots[index];
            if slot.is_free() {
                if matches!(slot, Slot::Tombstone) {
                    self.tombstones -= 1;
                }
                *slot = Slot::Occupied(key);
                self.len += 1;
                record_insert(probes);
                return Ok(Probe {
                    slot: index,
                    probes,
                });
            }
            index = next_slot(index, capacity);
        }

        Err(ProbeTableError::Full { capacity })
    }

    /// Removes `key`, leaving a tombstone in its slot.
    ///
    /// # Errors
    /// Returns [`ProbeTableError::NotFound`] when the probe sequence reaches an
    /// empty slot, or visits every slot, without meeting `key`. The table is
    /// not modified in that case.
    pub fn delete(&mut self, key: &str) -> Result<Probe, ProbeTableError> {
        let probe = self
            .locate(key)
            .map_err(|probes| ProbeTableError::NotFound {
                key: key.to_owned(),
                probes,
            })?;
        self.slots[probe.slot] = Slot::Tombstone;
        self.len -= 1;
        self.tombstones += 1;
        record_delete(probe.probes);
        Ok(probe)
    }

    /// Looks up `key` without modifying the table.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<Probe> {
        self.locate(key).ok()
    }

    /// Returns `true` when `key` is stored in the table.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Walks the probe sequence for `key`, returning the step count on a miss.
    fn locate(&self, key: &str) -> Result<Probe, usize> {
        let capacity = self.capacity();
        let mut index = home_slot(key, capacity);
        for probes in 0..capacity {
            match &self.slots[index] {
                Slot::Empty => return Err(probes),
                Slot::Occupied(stored) if stored == key => {
                    return Ok(Probe {
                        slot: index,
                        probes,
                    });
                }
                Slot::Occupied(_) | Slot::Tombstone => index = next_slot(index, capacity),
            }
        }
        Err(capacity)
    }
}

const fn next_slot(index: usize, capacity: usize) -> usize {
    let next = index + 1;
    if next == capacity { 0 } else { next }
}

#[cfg(feature = "metrics")]
#[expect(
    clippy::cast_precision_loss,
    reason = "probe lengths are far below f64's exact integer range"
)]
fn record_insert(probes: usize) {
    metrics::counter!("probe_table_inserts").increment(1);
    metrics::histogram!("probe_table_probe_length", "op" => "insert").record(probes as f64);
}

#[cfg(not(feature = "metrics"))]
const fn record_insert(_probes: usize) {}

#[cfg(feature = "metrics")]
#[expect(
    clippy::cast_precision_loss,
    reason = "probe lengths are far below f64's exact integer range"
)]
fn record_delete(probes: usize) {
    metrics::counter!("probe_table_deletes").increment(1);
    metrics::histogram!("probe_table_probe_length", "op" => "delete").record(probes as f64);
}

#[cfg(not(feature = "metrics"))]
const fn record_delete(_probes: usize) {}
