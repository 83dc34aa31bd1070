//! UKO resources
//!
//! Models, typed list options and the [`ListResource`] adapters that bind
//! each list endpoint to its envelope field.

mod models;
mod options;

pub use models::{
    AssociatedResource, KeyState, KeyTemplate, Keystore, ManagedKey, ResourceReference,
    TemplateReference, Vault, VaultReference,
};
pub use options::{
    ListAssociatedResourcesOptions, ListKeyTemplatesOptions, ListKeyVersionsOptions,
    ListKeystoresOptions, ListManagedKeysOptions, ListVaultsOptions,
};

use crate::pagination::ListResource;

/// `GET /managed_keys`
#[derive(Debug, Clone, Copy)]
pub struct ManagedKeys;

impl ListResource for ManagedKeys {
    type Item = ManagedKey;
    const NAME: &'static str = "managed_keys";
    const ITEMS_FIELD: &'static str = "managed_keys";
}

/// `GET /managed_keys/{id}/versions`
///
/// Versions come back in the same envelope field as managed keys.
#[derive(Debug, Clone, Copy)]
pub struct KeyVersions;

impl ListResource for KeyVersions {
    type Item = ManagedKey;
    const NAME: &'static str = "key_versions";
    const ITEMS_FIELD: &'static str = "managed_keys";
}

/// `GET /templates`
#[derive(Debug, Clone, Copy)]
pub struct KeyTemplates;

impl ListResource for KeyTemplates {
    type Item = KeyTemplate;
    const NAME: &'static str = "key_templates";
    const ITEMS_FIELD: &'static str = "templates";
}

/// `GET /keystores`
#[derive(Debug, Clone, Copy)]
pub struct Keystores;

impl ListResource for Keystores {
    type Item = Keystore;
    const NAME: &'static str = "keystores";
    const ITEMS_FIELD: &'static str = "keystores";
}

/// `GET /vaults`
#[derive(Debug, Clone, Copy)]
pub struct Vaults;

impl ListResource for Vaults {
    type Item = Vault;
    const NAME: &'static str = "vaults";
    const ITEMS_FIELD: &'static str = "vaults";
}

/// `GET /associated_resources` and its per-key and per-keystore variants
#[derive(Debug, Clone, Copy)]
pub struct AssociatedResources;

impl ListResource for AssociatedResources {
    type Item = AssociatedResource;
    const NAME: &'static str = "associated_resources";
    const ITEMS_FIELD: &'static str = "associated_resources";
}

#[cfg(test)]
mod tests;
