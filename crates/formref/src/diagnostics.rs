//! Resolution outcomes and their human-readable diagnostics.

use tracing::{debug, warn};

use crate::ids::FormId;
use crate::name::PackageName;

/// Numeric outcome of resolving a [`FormReference`](crate::FormReference).
///
/// Values match the codes existing plugins log and exchange with the host.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u32)]
pub enum ResultCode {
    Succeeded = 0,
    /// The record refers to no form. A valid empty state, not a failure.
    NullForm = 1,
    /// Well-formed record, but no live form matches it.
    InvalidForm = 2,
    /// The record's package is not loaded this session.
    ModNotLoaded = 3,
}

impl ResultCode {
    pub const ALL: [Self; 4] = [
        Self::Succeeded,
        Self::NullForm,
        Self::InvalidForm,
        Self::ModNotLoaded,
    ];

    pub fn from_u32(raw: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_u32() == raw)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    pub fn is_success(self) -> bool {
        self == Self::Succeeded
    }

    /// Description for logging; `None` for [`ResultCode::Succeeded`].
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Succeeded => None,
            Self::NullForm => Some("Null Form"),
            Self::InvalidForm => Some("Invalid/Corrupt Form Data"),
            Self::ModNotLoaded => Some("Missing Source Plugin, Form Cannot Be Loaded."),
        }
    }

    pub fn of<T>(result: &Result<T, ResolveError>) -> Self {
        match result {
            Ok(_) => Self::Succeeded,
            Err(err) => err.code(),
        }
    }
}

/// Why a [`FormReference`](crate::FormReference) did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("null form")]
    NullForm,
    #[error("invalid/corrupt form data: no live form {0}")]
    InvalidForm(FormId),
    #[error("missing source plugin '{0}', form cannot be loaded")]
    ModNotLoaded(PackageName),
}

impl ResolveError {
    pub fn code(&self) -> ResultCode {
        match self {
            Self::NullForm => ResultCode::NullForm,
            Self::InvalidForm(_) => ResultCode::InvalidForm,
            Self::ModNotLoaded(_) => ResultCode::ModNotLoaded,
        }
    }

    /// Identifier reported alongside the failure: the composed id for
    /// [`ResolveError::InvalidForm`], [`FormId::NULL`] otherwise.
    pub fn form_id(&self) -> FormId {
        match self {
            Self::InvalidForm(id) => *id,
            Self::NullForm | Self::ModNotLoaded(_) => FormId::NULL,
        }
    }
}

/// Log the diagnostic for `code`.
///
/// A null form is an expected state and only shows up at debug level.
pub fn report(code: ResultCode) {
    let Some(message) = code.message() else {
        return;
    };
    match code {
        ResultCode::NullForm => debug!(code = code.as_u32(), "Deserialization Error: {message}"),
        _ => warn!(code = code.as_u32(), "Deserialization Error: {message}"),
    }
}
