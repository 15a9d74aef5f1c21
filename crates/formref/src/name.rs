//! Capacity-bounded package names.

use std::fmt;

use crate::record::NAME_CAPACITY;

/// Package name stored for forms created at runtime.
pub const RUNTIME_FORM: &str = "RUNTIME_FORM";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("package name is {0} bytes (maximum {max})", max = PackageName::MAX_LEN)]
    TooLong(usize),
    #[error("package name contains a NUL byte at offset {0}")]
    InteriorNul(usize),
}

/// Name of a content package, short enough to fit the persisted record.
///
/// The empty name is valid and marks a reference whose package could not be
/// determined at save time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PackageName(String);

impl PackageName {
    /// Longest name that still leaves room for the NUL terminator.
    pub const MAX_LEN: usize = NAME_CAPACITY - 1;

    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        if name.len() > Self::MAX_LEN {
            return Err(NameError::TooLong(name.len()));
        }
        if let Some(pos) = name.bytes().position(|b| b == 0) {
            return Err(NameError::InteriorNul(pos));
        }
        Ok(Self(name))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn runtime() -> Self {
        Self(RUNTIME_FORM.to_owned())
    }

    /// Exact, case-sensitive match against [`RUNTIME_FORM`].
    #[inline]
    pub fn is_runtime(&self) -> bool {
        self.0 == RUNTIME_FORM
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PackageName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PackageName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<&str> for PackageName {
    type Error = NameError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
