//! Interfaces to the host engine's package table and form registry.
//!
//! The codec never owns or caches host state: every conversion borrows the
//! collaborators it needs for the duration of the call. A host that has no
//! table available passes `None`, which answers every lookup with "not found".

mod form_set;
mod load_order;


pub use form_set::FormSet;
pub use load_order::{LoadOrder, LoadOrderError};

use crate::ids::{FormId, SlotIndex};

/// Mapping between loaded package names and their current slots.
pub trait PackageTable {
    fn slot_of(&self, name: &str) -> Option<SlotIndex>;

    fn name_of(&self, slot: SlotIndex) -> Option<&str>;
}

/// Registry of live forms for the current session.
pub trait FormRegistry {
    /// Handle returned for a live form.
    type Form;

    fn lookup(&self, id: FormId) -> Option<Self::Form>;
}

/// Anything that carries its session form identifier.
pub trait HasFormId {
    fn form_id(&self) -> FormId;
}

impl HasFormId for FormId {
    fn form_id(&self) -> FormId {
        *self
    }
}

impl<T: PackageTable + ?Sized> PackageTable for &T {
    fn slot_of(&self, name: &str) -> Option<SlotIndex> {
        (**self).slot_of(name)
    }

    fn name_of(&self, slot: SlotIndex) -> Option<&str> {
        (**self).name_of(slot)
    }
}

impl<T: PackageTable> PackageTable for Option<T> {
    fn slot_of(&self, name: &str) -> Option<SlotIndex> {
        self.as_ref()?.slot_of(name)
    }

    fn name_of(&self, slot: SlotIndex) -> Option<&str> {
        self.as_ref()?.name_of(slot)
    }
}

impl<T: FormRegistry + ?Sized> FormRegistry for &T {
    type Form = T::Form;

    fn lookup(&self, id: FormId) -> Option<Self::Form> {
        (**self).lookup(id)
    }
}

impl<T: FormRegistry> FormRegistry for Option<T> {
    type Form = T::Form;

    fn lookup(&self, id: FormId) -> Option<Self::Form> {
        self.as_ref()?.lookup(id)
    }
}
