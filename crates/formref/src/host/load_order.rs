//! In-memory package table.
//!
//! Assigns slots in insertion order, the way the engine numbers plugins as it
//! loads them. Name lookups ignore ASCII case since plugin file names are
//! compared case-insensitively by the engine.

use std::collections::HashMap;

use super::PackageTable;
use crate::ids::SlotIndex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadOrderError {
    #[error("load order is full: at most {} packages can be loaded", LoadOrder::CAPACITY)]
    Full,
    #[error("package '{0}' is already loaded")]
    Duplicate(String),
    #[error("package name is empty")]
    EmptyName,
}

/// Ordered list of loaded packages.
#[derive(Debug, Clone, Default)]
pub struct LoadOrder {
    /// Lowercased name to slot.
    slots: HashMap<String, SlotIndex>,
    /// Names as given, indexed by slot.
    names: Vec<String>,
}

impl LoadOrder {
    /// Slots `0..=0xFE`; `0xFF` is reserved for runtime forms.
    pub const CAPACITY: usize = SlotIndex::MAX_LOADED.0 as usize + 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Result<Self, LoadOrderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut order = Self::new();
        for name in names {
            order.push(name)?;
        }
        Ok(order)
    }

    /// Load `name` into the next free slot.
    pub fn push(&mut self, name: impl Into<String>) -> Result<SlotIndex, LoadOrderError> {
        let name = name.into();
        if name.is_empty() {
            return Err(LoadOrderError::EmptyName);
        }
        let key = name.to_ascii_lowercase();
        if self.slots.contains_key(&key) {
            return Err(LoadOrderError::Duplicate(name));
        }
        if self.names.len() >= Self::CAPACITY {
            return Err(LoadOrderError::Full);
        }

        let slot = SlotIndex(self.names.len() as u8);
        self.names.push(name);
        self.slots.insert(key, slot);
        Ok(slot)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (SlotIndex(i as u8), name.as_str()))
    }
}

impl PackageTable for LoadOrder {
    fn slot_of(&self, name: &str) -> Option<SlotIndex> {
        self.slots.get(&name.to_ascii_lowercase()).copied()
    }

    fn name_of(&self, slot: SlotIndex) -> Option<&str> {
        self.names.get(slot.as_usize()).map(String::as_str)
    }
}
