use std::collections::HashSet;

use super::FormRegistry;
use crate::ids::FormId;

/// Registry backed by a set of live identifiers. The handle is the id itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSet(HashSet<FormId>);

impl FormSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: FormId) -> bool {
        self.0.insert(id)
    }

    pub fn remove(&mut self, id: FormId) -> bool {
        self.0.remove(&id)
    }

    pub fn contains(&self, id: FormId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<FormId> for FormSet {
    fn from_iter<I: IntoIterator<Item = FormId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FormRegistry for FormSet {
    type Form = FormId;

    fn lookup(&self, id: FormId) -> Option<FormId> {
        self.contains(id).then_some(id)
    }
}
