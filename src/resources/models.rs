//! Resource models
//!
//! Only the commonly used fields are typed; everything else the service
//! returns is kept in `extra`.

use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Reference to a vault embedded in other resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Reference to the template a key was created from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Reference to a managed key or keystore embedded in other resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

// ============================================================================
// Managed Keys
// ============================================================================

/// Lifecycle state of a managed key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyState {
    PreActivation,
    Active,
    Deactivated,
    Destroyed,
    #[serde(other)]
    Unknown,
}

/// A key managed by the orchestrator (also the shape of a key version)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedKey {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<KeyState>,
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub vault: Option<VaultReference>,
    #[serde(default)]
    pub template: Option<TemplateReference>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// Key Templates
// ============================================================================

/// Template keys are created from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyTemplate {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub vault: Option<VaultReference>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// Keystores
// ============================================================================

/// Target keystore keys are distributed to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keystore {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub keystore_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub vault: Option<VaultReference>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// Vaults
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vault {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// Associated Resources
// ============================================================================

/// Cloud resource protected by a managed key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociatedResource {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub managed_key: Option<ResourceReference>,
    #[serde(default)]
    pub keystore: Option<ResourceReference>,
    #[serde(flatten)]
    pub extra: JsonObject,
}
