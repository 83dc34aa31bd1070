//! Typed list option builders
//!
//! Each builder only exposes the filters its endpoint understands and
//! converts into the generic [`ListOptions`] a pager works with.

use crate::pagination::ListOptions;

/// Filters on `GET /managed_keys`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListManagedKeysOptions {
    options: ListOptions,
}

impl ListManagedKeysOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keys in these vaults
    #[must_use]
    pub fn vault_ids<I: IntoIterator<Item = S>, S: Into<String>>(self, ids: I) -> Self {
        Self {
            options: self.options.param_set("vault.id", ids),
        }
    }

    #[must_use]
    pub fn algorithms<I: IntoIterator<Item = S>, S: Into<String>>(self, algorithms: I) -> Self {
        Self {
            options: self.options.param_set("algorithm", algorithms),
        }
    }

    #[must_use]
    pub fn states<I: IntoIterator<Item = S>, S: Into<String>>(self, states: I) -> Self {
        Self {
            options: self.options.param_set("state", states),
        }
    }

    #[must_use]
    pub fn label(self, label: impl Into<String>) -> Self {
        Self {
            options: self.options.param("label", label.into()),
        }
    }

    #[must_use]
    pub fn template_ids<I: IntoIterator<Item = S>, S: Into<String>>(self, ids: I) -> Self {
        Self {
            options: self.options.param_set("template.id", ids),
        }
    }

    #[must_use]
    pub fn template_name(self, template_name: impl Into<String>) -> Self {
        Self {
            options: self.options.param("template.name", template_name.into()),
        }
    }

    /// Sort fields, `-` prefixed for descending (e.g. `-updated_at`)
    #[must_use]
    pub fn sort<I: IntoIterator<Item = S>, S: Into<String>>(self, fields: I) -> Self {
        Self {
            options: self.options.param_set("sort", fields),
        }
    }

    /// Set the page size
    #[must_use]
    pub fn limit(self, limit: u64) -> Self {
        Self {
            options: self.options.limit(limit),
        }
    }

    /// Set the starting position
    #[must_use]
    pub fn offset(self, offset: u64) -> Self {
        Self {
            options: self.options.offset(offset),
        }
    }
}

impl From<ListManagedKeysOptions> for ListOptions {
    fn from(options: ListManagedKeysOptions) -> Self {
        options.options
    }
}

/// Filters on `GET /managed_keys/{id}/versions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListKeyVersionsOptions {
    options: ListOptions,
}

impl ListKeyVersionsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn states<I: IntoIterator<Item = S>, S: Into<String>>(self, states: I) -> Self {
        Self {
            options: self.options.param_set("state", states),
        }
    }

    #[must_use]
    pub fn sort(self, sort: impl Into<String>) -> Self {
        Self {
            options: self.options.param("sort", sort.into()),
        }
    }

    /// Set the page size
    #[must_use]
    pub fn limit(self, limit: u64) -> Self {
        Self {
            options: self.options.limit(limit),
        }
    }

    /// Set the starting position
    #[must_use]
    pub fn offset(self, offset: u64) -> Self {
        Self {
            options: self.options.offset(offset),
        }
    }
}

impl From<ListKeyVersionsOptions> for ListOptions {
    fn from(options: ListKeyVersionsOptions) -> Self {
        options.options
    }
}

/// Filters on `GET /templates`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListKeyTemplatesOptions {
    options: ListOptions,
}

impl ListKeyTemplatesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(self, name: impl Into<String>) -> Self {
        Self {
            options: self.options.param("name", name.into()),
        }
    }

    #[must_use]
    pub fn vault_ids<I: IntoIterator<Item = S>, S: Into<String>>(self, ids: I) -> Self {
        Self {
            options: self.options.param_set("vault.id", ids),
        }
    }

    #[must_use]
    pub fn key_algorithms<I: IntoIterator<Item = S>, S: Into<String>>(
        self,
        algorithms: I,
    ) -> Self {
        Self {
            options: self.options.param_set("key.algorithm", algorithms),
        }
    }

    #[must_use]
    pub fn sort(self, sort: impl Into<String>) -> Self {
        Self {
            options: self.options.param("sort", sort.into()),
        }
    }

    /// Set the page size
    #[must_use]
    pub fn limit(self, limit: u64) -> Self {
        Self {
            options: self.options.limit(limit),
        }
    }

    /// Set the starting position
    #[must_use]
    pub fn offset(self, offset: u64) -> Self {
        Self {
            options: self.options.offset(offset),
        }
    }
}

impl From<ListKeyTemplatesOptions> for ListOptions {
    fn from(options: ListKeyTemplatesOptions) -> Self {
        options.options
    }
}

/// Filters on `GET /keystores`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListKeystoresOptions {
    options: ListOptions,
}

impl ListKeystoresOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keystore types, e.g. `aws_kms`, `azure_key_vault`
    #[must_use]
    pub fn types<I: IntoIterator<Item = S>, S: Into<String>>(self, types: I) -> Self {
        Self {
            options: self.options.param_set("type", types),
        }
    }

    #[must_use]
    pub fn name(self, name: impl Into<String>) -> Self {
        Self {
            options: self.options.param("name", name.into()),
        }
    }

    #[must_use]
    pub fn groups<I: IntoIterator<Item = S>, S: Into<String>>(self, groups: I) -> Self {
        Self {
            options: self.options.param_set("groups", groups),
        }
    }

    #[must_use]
    pub fn vault_ids<I: IntoIterator<Item = S>, S: Into<String>>(self, ids: I) -> Self {
        Self {
            options: self.options.param_set("vault.id", ids),
        }
    }

    #[must_use]
    pub fn location(self, location: impl Into<String>) -> Self {
        Self {
            options: self.options.param("location", location.into()),
        }
    }

    /// Set the page size
    #[must_use]
    pub fn limit(self, limit: u64) -> Self {
        Self {
            options: self.options.limit(limit),
        }
    }

    /// Set the starting position
    #[must_use]
    pub fn offset(self, offset: u64) -> Self {
        Self {
            options: self.options.offset(offset),
        }
    }
}

impl From<ListKeystoresOptions> for ListOptions {
    fn from(options: ListKeystoresOptions) -> Self {
        options.options
    }
}

/// Filters on `GET /vaults`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListVaultsOptions {
    options: ListOptions,
}

impl ListVaultsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(self, name: impl Into<String>) -> Self {
        Self {
            options: self.options.param("name", name.into()),
        }
    }

    #[must_use]
    pub fn description(self, description: impl Into<String>) -> Self {
        Self {
            options: self.options.param("description", description.into()),
        }
    }

    #[must_use]
    pub fn sort(self, sort: impl Into<String>) -> Self {
        Self {
            options: self.options.param("sort", sort.into()),
        }
    }

    /// Set the page size
    #[must_use]
    pub fn limit(self, limit: u64) -> Self {
        Self {
            options: self.options.limit(limit),
        }
    }

    /// Set the starting position
    #[must_use]
    pub fn offset(self, offset: u64) -> Self {
        Self {
            options: self.options.offset(offset),
        }
    }
}

impl From<ListVaultsOptions> for ListOptions {
    fn from(options: ListVaultsOptions) -> Self {
        options.options
    }
}

/// Filters on the associated resource endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAssociatedResourcesOptions {
    options: ListOptions,
}

impl ListAssociatedResourcesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sort(self, sort: impl Into<String>) -> Self {
        Self {
            options: self.options.param("sort", sort.into()),
        }
    }

    /// Set the page size
    #[must_use]
    pub fn limit(self, limit: u64) -> Self {
        Self {
            options: self.options.limit(limit),
        }
    }

    /// Set the starting position
    #[must_use]
    pub fn offset(self, offset: u64) -> Self {
        Self {
            options: self.options.offset(offset),
        }
    }
}

impl From<ListAssociatedResourcesOptions> for ListOptions {
    fn from(options: ListAssociatedResourcesOptions) -> Self {
        options.options
    }
}
