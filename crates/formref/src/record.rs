//! Persisted form reference record (264 bytes).
//!
//! Layout, identical to the records written by existing save data:
//! - 0-259: package name, NUL-terminated (bytes after the terminator are not
//!   guaranteed to be zero)
//! - 260-263: local index as `u32` in native byte order
//!
//! The host writes names in its ANSI code page. A name that is not valid UTF-8
//! decodes to the empty name, so the record resolves to `ModNotLoaded` instead
//! of failing to decode.

use tracing::warn;

use crate::ids::LocalIndex;
use crate::name::PackageName;
use crate::reference::FormReference;

/// Size of the name buffer, terminator included.
pub const NAME_CAPACITY: usize = 0x104;

/// Total size of one encoded record.
pub const RECORD_SIZE: usize = NAME_CAPACITY + 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("record too small: {0} bytes (expected {RECORD_SIZE})")]
    TooShort(usize),
    #[error("package name is not NUL-terminated within {NAME_CAPACITY} bytes")]
    UnterminatedName,
    #[error("local index {0:#010x} does not fit in 24 bits")]
    LocalIndexOutOfRange(u32),
}

/// Raw record exactly as it sits in a save file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct RawRecord {
    pub mod_name: [u8; NAME_CAPACITY],
    pub form_id: u32,
}

const _: () = assert!(std::mem::size_of::<RawRecord>() == RECORD_SIZE);

impl Default for RawRecord {
    fn default() -> Self {
        Self {
            mod_name: [0; NAME_CAPACITY],
            form_id: 0,
        }
    }
}

impl RawRecord {
    /// Decode from at least [`RECORD_SIZE`] bytes; extra bytes are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        if bytes.len() < RECORD_SIZE {
            return Err(RecordError::TooShort(bytes.len()));
        }

        let mut mod_name = [0u8; NAME_CAPACITY];
        mod_name.copy_from_slice(&bytes[..NAME_CAPACITY]);

        Ok(Self {
            mod_name,
            form_id: u32::from_ne_bytes([
                bytes[NAME_CAPACITY],
                bytes[NAME_CAPACITY + 1],
                bytes[NAME_CAPACITY + 2],
                bytes[NAME_CAPACITY + 3],
            ]),
        })
    }

    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[..NAME_CAPACITY].copy_from_slice(&self.mod_name);
        bytes[NAME_CAPACITY..].copy_from_slice(&self.form_id.to_ne_bytes());
        bytes
    }

    /// Name bytes up to (not including) the first NUL.
    pub fn name_bytes(&self) -> Result<&[u8], RecordError> {
        let end = self
            .mod_name
            .iter()
            .position(|&b| b == 0)
            .ok_or(RecordError::UnterminatedName)?;
        Ok(&self.mod_name[..end])
    }
}

impl From<&FormReference> for RawRecord {
    fn from(reference: &FormReference) -> Self {
        let mut raw = Self::default();
        let name = reference.package_name().as_bytes();
        // PackageName guarantees room for the terminator.
        raw.mod_name[..name.len()].copy_from_slice(name);
        raw.form_id = reference.local_index().as_u32();
        raw
    }
}

impl TryFrom<RawRecord> for FormReference {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let name = match std::str::from_utf8(raw.name_bytes()?) {
            Ok(name) => name,
            Err(err) => {
                warn!(%err, "package name is not UTF-8, treating it as not loaded");
                ""
            }
        };
        // The name ends at the first NUL inside the buffer, so it always fits.
        let package_name =
            PackageName::new(name).map_err(|_| RecordError::UnterminatedName)?;
        let local_index = LocalIndex::new(raw.form_id)
            .ok_or(RecordError::LocalIndexOutOfRange(raw.form_id))?;
        Ok(FormReference::new(package_name, local_index))
    }
}

impl FormReference {
    /// Encode to the fixed 264-byte save layout.
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        RawRecord::from(self).to_bytes()
    }

    /// Decode from the fixed 264-byte save layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        RawRecord::from_bytes(bytes)?.try_into()
    }
}
