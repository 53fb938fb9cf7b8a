//! Open-addressing hash table with linear probing.
//!
//! Keys are strings. A key's home slot is its positional [`signature`] reduced
//! modulo the table capacity; collisions are resolved by stepping forward one
//! slot at a time, wrapping at the end of the table.
//!
//! The table relies on one invariant: an insert always claims the *first* free
//! slot (empty or tombstoned) on its probe sequence. A lookup that reaches an
//! [`Slot::Empty`] slot can therefore stop, because no insert of the key could
//! have passed it. Deletion writes a [`Slot::Tombstone`] instead of
//! [`Slot::Empty`] so the probe sequences of other keys stay unbroken.

mod hash;
mod table;

pub use self::hash::{SIGNATURE_WEIGHTS, signature};
pub use self::table::{Probe, ProbeTable, Slot};

#[cfg(test)]
mod property;
