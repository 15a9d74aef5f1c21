//! Session snapshot loading.
//!
//! A session file stands in for the host engine: it lists the load order and
//! the identifiers of the forms that are live this session.
//!
//! ```json
//! { "load_order": ["Skyrim.esm", "Update.esm", "A.esp"],
//!   "forms": ["0x00000012", 305419896] }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use formref::{FormId, FormSet, LoadOrder, LoadOrderError};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid session file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid form id '{0}' in session file")]
    FormId(String),
    #[error("invalid load order: {0}")]
    LoadOrder(#[from] LoadOrderError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SessionFile {
    load_order: Vec<String>,
    #[serde(default)]
    forms: Vec<FormIdValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FormIdValue {
    Number(u32),
    Text(String),
}

impl FormIdValue {
    fn into_form_id(self) -> Result<FormId, SessionError> {
        match self {
            Self::Number(raw) => Ok(FormId(raw)),
            Self::Text(text) => text.parse().map_err(|_| SessionError::FormId(text)),
        }
    }
}

/// Package table and form registry for one session.
#[derive(Debug)]
pub struct Session {
    pub load_order: LoadOrder,
    pub forms: FormSet,
}

impl Session {
    pub fn parse(json: &str) -> Result<Self, SessionError> {
        let file: SessionFile = serde_json::from_str(json)?;
        let load_order = LoadOrder::from_names(file.load_order)?;
        let forms = file
            .forms
            .into_iter()
            .map(FormIdValue::into_form_id)
            .collect::<Result<FormSet, _>>()?;
        Ok(Self { load_order, forms })
    }

    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let content = fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_owned(),
            source,
        })?;
        let session = Self::parse(&content)?;
        debug!(
            path = %path.display(),
            packages = session.load_order.len(),
            forms = session.forms.len(),
            "session loaded"
        );
        Ok(session)
    }
}

/// Load the session if a path was given; no path means no host tables.
pub fn load_session(path: Option<&Path>) -> Result<Option<Session>, SessionError> {
    path.map(Session::load).transpose()
}
