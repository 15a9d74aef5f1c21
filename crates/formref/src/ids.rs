//! Form identifier newtypes.
//!
//! A [`FormId`] is only meaningful within one session: its high byte is the
//! load-order slot of the defining package, its low 24 bits the index of the
//! form inside that package.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Bits of a form identifier that belong to the local index.
pub const LOCAL_INDEX_MASK: u32 = 0x00FF_FFFF;

const SLOT_SHIFT: u32 = 24;

/// Volatile 32-bit form identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(transparent)]
pub struct FormId(pub u32);

impl FormId {
    pub const NULL: Self = Self(0);

    #[inline]
    pub fn compose(slot: SlotIndex, local: LocalIndex) -> Self {
        Self((u32::from(slot.0) << SLOT_SHIFT) | local.0)
    }

    #[inline]
    pub fn slot(self) -> SlotIndex {
        SlotIndex((self.0 >> SLOT_SHIFT) as u8)
    }

    #[inline]
    pub fn local_index(self) -> LocalIndex {
        LocalIndex(self.0 & LOCAL_INDEX_MASK)
    }

    /// Form created during the session rather than by a loaded package.
    #[inline]
    pub fn is_runtime(self) -> bool {
        self.slot().is_runtime()
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for FormId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<FormId> for u32 {
    fn from(id: FormId) -> Self {
        id.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// Accepts decimal (`305419896`) or hex with a `0x` prefix (`0x12345678`).
impl FromStr for FormId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16).map(Self),
            None => s.parse().map(Self),
        }
    }
}

/// Load-order slot of a package (high byte of a [`FormId`]).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(transparent)]
pub struct SlotIndex(pub u8);

impl SlotIndex {
    /// Reserved for forms created at runtime.
    pub const RUNTIME: Self = Self(0xFF);
    /// Highest slot a loaded package can occupy.
    pub const MAX_LOADED: Self = Self(0xFE);

    #[inline]
    pub fn is_runtime(self) -> bool {
        self == Self::RUNTIME
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Index of a form within its defining package. Always fits in 24 bits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(transparent)]
pub struct LocalIndex(u32);

impl LocalIndex {
    /// Reserved for "no form".
    pub const NULL: Self = Self(0);
    pub const MAX: Self = Self(LOCAL_INDEX_MASK);

    /// Returns `None` if `raw` has bits above the low 24 set.
    #[inline]
    pub fn new(raw: u32) -> Option<Self> {
        ((raw & !LOCAL_INDEX_MASK) == 0).then_some(Self(raw))
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_id_splits_into_slot_and_local() {
        let id = FormId(0x0200_0010);
        assert_eq!(id.slot(), SlotIndex(2));
        assert_eq!(id.local_index().as_u32(), 0x10);
        assert!(!id.is_runtime());
    }

    #[test]
    fn compose_inverts_split() {
        let id = FormId(0xAB12_3456);
        assert_eq!(FormId::compose(id.slot(), id.local_index()), id);
    }

    #[test]
    fn runtime_slot() {
        assert!(FormId(0xFF00_0801).is_runtime());
        assert!(SlotIndex::RUNTIME.is_runtime());
        assert!(!SlotIndex::MAX_LOADED.is_runtime());
    }

    #[test]
    fn local_index_rejects_high_bits() {
        assert_eq!(LocalIndex::new(0x00FF_FFFF), Some(LocalIndex::MAX));
        assert_eq!(LocalIndex::new(0x0100_0000), None);
        assert!(LocalIndex::new(0).unwrap().is_null());
    }

    #[test]
    fn parse_hex_and_decimal() {
        assert_eq!("0x02000010".parse::<FormId>().unwrap(), FormId(0x0200_0010));
        assert_eq!("0XFF000001".parse::<FormId>().unwrap(), FormId(0xFF00_0001));
        assert_eq!("16".parse::<FormId>().unwrap(), FormId(16));
        assert!("0xZZ".parse::<FormId>().is_err());
        assert!("0x1FFFFFFFF".parse::<FormId>().is_err());
    }

    #[test]
    fn display_is_padded_hex() {
        assert_eq!(FormId(0x10).to_string(), "0x00000010");
        assert_eq!(FormId(0xFF00_0801).to_string(), "0xFF000801");
    }
}
