#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Load-order independent references to game forms.
//!
//! A form identifier's high byte is the load-order slot of the package that
//! defined it, so identifiers saved in one session can point at the wrong
//! form after the load order changes. [`FormReference`] stores the package
//! name and the 24-bit local index instead, and resolves the name back to the
//! current slot when loading.
//!
//! This crate contains:
//! - Identifier newtypes ([`FormId`], [`SlotIndex`], [`LocalIndex`])
//! - The [`FormReference`] codec and its fixed 264-byte save layout
//! - Host collaborator traits ([`PackageTable`], [`FormRegistry`]) with
//!   in-memory implementations
//! - Result codes and diagnostics for failed resolution

pub mod diagnostics;
pub mod host;
pub mod ids;
pub mod name;
pub mod record;
pub mod reference;

#[cfg(test)]
mod record_tests;

pub use diagnostics::{ResolveError, ResultCode, report};
pub use host::{FormRegistry, FormSet, HasFormId, LoadOrder, LoadOrderError, PackageTable};
pub use ids::{FormId, LOCAL_INDEX_MASK, LocalIndex, SlotIndex};
pub use name::{NameError, PackageName, RUNTIME_FORM};
pub use record::{NAME_CAPACITY, RECORD_SIZE, RawRecord, RecordError};
pub use reference::FormReference;
