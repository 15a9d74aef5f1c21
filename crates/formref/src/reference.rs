//! Conversion between session form identifiers and stable references.
//!
//! A [`FormReference`] names the package that defined a form instead of the
//! slot it happened to occupy, so it stays valid when the load order changes
//! between saving and loading.

use tracing::{trace, warn};

use crate::diagnostics::{ResolveError, ResultCode};
use crate::host::{FormRegistry, HasFormId, PackageTable};
use crate::ids::{FormId, LocalIndex, SlotIndex};
use crate::name::PackageName;

/// Load-order independent reference to a form.
///
/// `local_index == 0` is the null reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FormReference {
    package_name: PackageName,
    local_index: LocalIndex,
}

impl FormReference {
    pub fn new(package_name: PackageName, local_index: LocalIndex) -> Self {
        Self {
            package_name,
            local_index,
        }
    }

    pub fn null() -> Self {
        Self::default()
    }

    #[inline]
    pub fn package_name(&self) -> &PackageName {
        &self.package_name
    }

    #[inline]
    pub fn local_index(&self) -> LocalIndex {
        self.local_index
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.local_index.is_null()
    }

    /// Build the reference for a session identifier.
    ///
    /// Never fails. When the slot has no package (or the host has no table)
    /// the package name is left empty, which later resolves to
    /// [`ResolveError::ModNotLoaded`].
    pub fn from_form_id<P>(id: FormId, packages: &P) -> Self
    where
        P: PackageTable + ?Sized,
    {
        let local_index = id.local_index();
        if local_index.is_null() {
            return Self::null();
        }

        let slot = id.slot();
        let package_name = if slot.is_runtime() {
            PackageName::runtime()
        } else {
            package_name_at(packages, slot)
        };

        Self {
            package_name,
            local_index,
        }
    }

    pub fn from_form<T, P>(form: &T, packages: &P) -> Self
    where
        T: HasFormId + ?Sized,
        P: PackageTable + ?Sized,
    {
        Self::from_form_id(form.form_id(), packages)
    }

    /// Resolve to this session's identifier and confirm a live form has it.
    pub fn resolve_id<P, F>(&self, packages: &P, forms: &F) -> Result<FormId, ResolveError>
    where
        P: PackageTable + ?Sized,
        F: FormRegistry + ?Sized,
    {
        self.resolve_form(packages, forms).map(|(id, _)| id)
    }

    /// Resolve to this session's identifier, returning `(code, id)`.
    ///
    /// `id` is 0 for [`ResultCode::NullForm`] and [`ResultCode::ModNotLoaded`];
    /// for [`ResultCode::InvalidForm`] it holds the composed identifier that
    /// failed to match a live form.
    pub fn to_identifier<P, F>(&self, packages: &P, forms: &F) -> (ResultCode, u32)
    where
        P: PackageTable + ?Sized,
        F: FormRegistry + ?Sized,
    {
        let result = self.resolve_id(packages, forms);
        let id = match &result {
            Ok(id) => *id,
            Err(err) => err.form_id(),
        };
        (ResultCode::of(&result), id.as_u32())
    }

    /// Resolve to this session's identifier and the live form handle.
    pub fn resolve_form<P, F>(
        &self,
        packages: &P,
        forms: &F,
    ) -> Result<(FormId, F::Form), ResolveError>
    where
        P: PackageTable + ?Sized,
        F: FormRegistry + ?Sized,
    {
        let id = self.compose_id(packages)?;
        match forms.lookup(id) {
            Some(form) => Ok((id, form)),
            None => Err(ResolveError::InvalidForm(id)),
        }
    }

    /// Resolve to the live form handle, returning `(code, handle)`.
    pub fn to_form<P, F>(&self, packages: &P, forms: &F) -> (ResultCode, Option<F::Form>)
    where
        P: PackageTable + ?Sized,
        F: FormRegistry + ?Sized,
    {
        let result = self.resolve_form(packages, forms);
        (ResultCode::of(&result), result.ok().map(|(_, form)| form))
    }

    /// Identifier this reference maps to under the current load order,
    /// without consulting the form registry.
    pub fn compose_id<P>(&self, packages: &P) -> Result<FormId, ResolveError>
    where
        P: PackageTable + ?Sized,
    {
        if self.local_index.is_null() {
            return Err(ResolveError::NullForm);
        }

        let slot = if self.package_name.is_runtime() {
            SlotIndex::RUNTIME
        } else {
            match loaded_slot(packages, &self.package_name) {
                Some(slot) => slot,
                None => {
                    trace!(package = %self.package_name, "package not in load order");
                    return Err(ResolveError::ModNotLoaded(self.package_name.clone()));
                }
            }
        };

        Ok(FormId::compose(slot, self.local_index))
    }
}

/// Current slot of a loaded package. The empty name marks a package that was
/// unknown at save time and never matches, whatever the table contains.
fn loaded_slot<P>(packages: &P, name: &PackageName) -> Option<SlotIndex>
where
    P: PackageTable + ?Sized,
{
    if name.is_empty() {
        return None;
    }
    packages
        .slot_of(name.as_str())
        .filter(|slot| !slot.is_runtime())
}

fn package_name_at<P>(packages: &P, slot: SlotIndex) -> PackageName
where
    P: PackageTable + ?Sized,
{
    let Some(name) = packages.name_of(slot) else {
        trace!(slot = slot.0, "no package loaded at slot");
        return PackageName::empty();
    };
    PackageName::new(name).unwrap_or_else(|err| {
        warn!(slot = slot.0, %err, "package name cannot be persisted");
        PackageName::empty()
    })
}
