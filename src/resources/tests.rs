use super::*;
use crate::pagination::{ListOptions, ListResource, Page};
use pretty_assertions::assert_eq;
use serde_json::json;

fn pairs(options: impl Into<ListOptions>) -> Vec<(String, String)> {
    options.into().to_query()
}

fn pair(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

// ============================================================================
// Models
// ============================================================================

#[test]
fn test_managed_key_decode() {
    let key: ManagedKey = serde_json::from_value(json!({
        "id": "k-1",
        "label": "payments",
        "state": "active",
        "algorithm": "aes",
        "size": "256",
        "version": 3,
        "vault": {"id": "v-1", "name": "default"},
        "template": {"id": "t-1", "name": "aes-template"},
        "created_at": "2024-01-02T03:04:05Z",
        "href": "/api/v4/managed_keys/k-1",
        "tags": [{"name": "team", "value": "core"}]
    }))
    .unwrap();

    assert_eq!(key.id, "k-1");
    assert_eq!(key.label.as_deref(), Some("payments"));
    assert_eq!(key.state, Some(KeyState::Active));
    assert_eq!(key.version, Some(3));
    assert_eq!(key.vault.as_ref().map(|v| v.id.as_str()), Some("v-1"));
    assert_eq!(
        key.template.and_then(|t| t.name).as_deref(),
        Some("aes-template")
    );
    assert!(key.created_at.is_some());
    assert!(key.updated_at.is_none());
    assert!(key.extra.contains_key("tags"));
}

#[test]
fn test_key_state_unknown_value() {
    let state: KeyState = serde_json::from_value(json!("compromised")).unwrap();
    assert_eq!(state, KeyState::Unknown);

    let state: KeyState = serde_json::from_value(json!("pre_activation")).unwrap();
    assert_eq!(state, KeyState::PreActivation);
}

#[test]
fn test_keystore_type_field() {
    let keystore: Keystore = serde_json::from_value(json!({
        "id": "ks-1",
        "name": "aws-eu",
        "type": "aws_kms",
        "groups": ["prod"]
    }))
    .unwrap();

    assert_eq!(keystore.keystore_type.as_deref(), Some("aws_kms"));
    assert_eq!(keystore.groups, vec!["prod".to_string()]);
    assert!(keystore.extra.is_empty());
}

#[test]
fn test_associated_resource_decode() {
    let resource: AssociatedResource = serde_json::from_value(json!({
        "id": "r-1",
        "name": "bucket",
        "type": "cos_bucket",
        "managed_key": {"id": "k-1"},
        "keystore": {"id": "ks-1", "name": "ibm"}
    }))
    .unwrap();

    assert_eq!(resource.resource_type.as_deref(), Some("cos_bucket"));
    assert_eq!(resource.managed_key.map(|r| r.id).as_deref(), Some("k-1"));
    assert_eq!(
        resource.keystore.and_then(|r| r.name).as_deref(),
        Some("ibm")
    );
}

#[test]
fn test_page_decode_uses_resource_items_field() {
    let body = json!({
        "total_count": 2,
        "managed_keys": [{"id": "k-1"}, {"id": "k-2"}],
        "next": {"href": "/api/v4/managed_keys/k/versions?offset=2"}
    })
    .to_string();

    let page: Page<ManagedKey> =
        Page::decode(body.as_bytes(), <KeyVersions as ListResource>::ITEMS_FIELD).unwrap();
    let ids: Vec<_> = page.items.iter().map(|k| k.id.as_str()).collect();
    assert_eq!(ids, vec!["k-1", "k-2"]);
    assert_eq!(page.total_count, Some(2));
}

#[test]
fn test_list_resource_fields() {
    assert_eq!(ManagedKeys::ITEMS_FIELD, "managed_keys");
    assert_eq!(KeyVersions::ITEMS_FIELD, "managed_keys");
    assert_eq!(KeyTemplates::ITEMS_FIELD, "templates");
    assert_eq!(Keystores::ITEMS_FIELD, "keystores");
    assert_eq!(Vaults::ITEMS_FIELD, "vaults");
    assert_eq!(AssociatedResources::ITEMS_FIELD, "associated_resources");
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_managed_keys_options() {
    let options = ListManagedKeysOptions::new()
        .vault_ids(["v-1", "v-2"])
        .states(["active"])
        .label("pay*")
        .sort(["-updated_at"])
        .limit(50)
        .offset(100);

    assert_eq!(
        pairs(options),
        vec![
            pair("label", "pay*"),
            pair("sort", "-updated_at"),
            pair("state", "active"),
            pair("vault.id", "v-1,v-2"),
            pair("limit", "50"),
            pair("offset", "100"),
        ]
    );
}

#[test]
fn test_empty_filter_set_is_omitted() {
    let options = ListManagedKeysOptions::new().algorithms(Vec::<String>::new());
    assert!(pairs(options).is_empty());
}

#[test]
fn test_later_value_replaces_earlier() {
    let options = ListVaultsOptions::new().name("a").name("b");
    assert_eq!(pairs(options), vec![pair("name", "b")]);
}

#[test]
fn test_key_templates_options() {
    let options = ListKeyTemplatesOptions::new()
        .key_algorithms(["aes", "rsa"])
        .name("t");

    assert_eq!(
        pairs(options),
        vec![pair("key.algorithm", "aes,rsa"), pair("name", "t")]
    );
}

#[test]
fn test_keystores_options() {
    let options = ListKeystoresOptions::new()
        .types(["aws_kms"])
        .groups(["prod", "eu"])
        .location("eu-de")
        .limit(10);

    assert_eq!(
        pairs(options),
        vec![
            pair("groups", "prod,eu"),
            pair("location", "eu-de"),
            pair("type", "aws_kms"),
            pair("limit", "10"),
        ]
    );
}

#[test]
fn test_small_option_builders() {
    assert_eq!(
        pairs(ListKeyVersionsOptions::new().states(["active", "destroyed"])),
        vec![pair("state", "active,destroyed")]
    );
    assert_eq!(
        pairs(ListAssociatedResourcesOptions::new().sort("name").offset(5)),
        vec![pair("sort", "name"), pair("offset", "5")]
    );
}

#[test]
fn test_builders_match_generic_options() {
    let typed: ListOptions = ListKeystoresOptions::new()
        .vault_ids(["v-1", "v-2"])
        .name("eu")
        .limit(2)
        .into();
    let generic = ListOptions::new()
        .param_set("vault.id", ["v-1", "v-2"])
        .param("name", "eu")
        .limit(2);
    assert_eq!(typed, generic);

    let typed: ListOptions = ListKeyVersionsOptions::new().states(["active"]).offset(4).into();
    let generic = ListOptions::new().param_set("state", ["active"]).offset(4);
    assert_eq!(typed, generic);
}
