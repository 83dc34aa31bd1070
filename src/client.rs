//! UKO client
//!
//! Entry point tying configuration, the request invoker and the pagers
//! together. Every list endpoint gets a pager constructor; the handful of
//! single-resource calls needed around listing are plain async methods.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, Request};
use crate::pagination::{ListOptions, ListResource, PageFetcher, Pager};
use crate::resources::{
    AssociatedResources, KeyTemplate, KeyTemplates, KeyVersions, Keystore, Keystores,
    ListAssociatedResourcesOptions, ListKeyTemplatesOptions, ListKeyVersionsOptions,
    ListKeystoresOptions, ListManagedKeysOptions, ListVaultsOptions, ManagedKey, ManagedKeys,
    Vault, Vaults,
};
use crate::types::{ApiResponse, Deadline, JsonValue};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub type ManagedKeyPager = Pager<PageFetcher<ManagedKeys>>;
pub type KeyVersionPager = Pager<PageFetcher<KeyVersions>>;
pub type KeyTemplatePager = Pager<PageFetcher<KeyTemplates>>;
pub type KeystorePager = Pager<PageFetcher<Keystores>>;
pub type VaultPager = Pager<PageFetcher<Vaults>>;
pub type AssociatedResourcePager = Pager<PageFetcher<AssociatedResources>>;

/// Client for the UKO API (`/api/v4`)
///
/// Cloning is cheap; clones share the HTTP connection pool and the retry
/// policy.
#[derive(Debug, Clone)]
pub struct UkoClient {
    http: Arc<HttpClient>,
    config: Arc<ClientConfig>,
}

impl UkoClient {
    /// Create a client; fails with `Config` when the base URL is unusable
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = Arc::new(config);
        let http = Arc::new(HttpClient::new(Arc::clone(&config))?);
        debug!("UKO client for {}", http.base_url());
        Ok(Self { http, config })
    }

    /// Configuration shared with every request this client sends
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Underlying request invoker
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    /// Turn retries on for subsequent calls of this client and its clones
    pub fn enable_retries(&self, max_retries: u32, backoff_interval: Duration) {
        self.config.enable_retries(max_retries, backoff_interval);
    }

    /// Turn retries off for subsequent calls
    pub fn disable_retries(&self) {
        self.config.disable_retries();
    }

    fn pager<R: ListResource>(
        &self,
        request: Request,
        options: impl Into<ListOptions>,
    ) -> Result<Pager<PageFetcher<R>>> {
        let fetcher = PageFetcher::new(Arc::clone(&self.http), request)?;
        Ok(Pager::new(fetcher, options))
    }

    // ------------------------------------------------------------------------
    // Managed keys
    // ------------------------------------------------------------------------

    pub fn managed_keys_pager(&self, options: ListManagedKeysOptions) -> Result<ManagedKeyPager> {
        self.pager(Request::get("/managed_keys"), options)
    }

    /// Versions of one managed key
    pub fn key_versions_pager(
        &self,
        id: &str,
        options: ListKeyVersionsOptions,
    ) -> Result<KeyVersionPager> {
        let request = Request::get("/managed_keys/{id}/versions").path_param("id", id);
        self.pager(request, options)
    }

    pub async fn get_managed_key(
        &self,
        id: &str,
        deadline: Deadline,
    ) -> Result<ApiResponse<ManagedKey>> {
        let request = Request::get("/managed_keys/{id}").path_param("id", id);
        self.http.invoke_json(&request, deadline).await
    }

    /// Delete a managed key. The service answers 204, so `result` is
    /// normally `None`.
    pub async fn delete_managed_key(
        &self,
        id: &str,
        deadline: Deadline,
    ) -> Result<ApiResponse<JsonValue>> {
        let request = Request::delete("/managed_keys/{id}").path_param("id", id);
        self.http.invoke_json(&request, deadline).await
    }

    // ------------------------------------------------------------------------
    // Key templates
    // ------------------------------------------------------------------------

    pub fn key_templates_pager(
        &self,
        options: ListKeyTemplatesOptions,
    ) -> Result<KeyTemplatePager> {
        self.pager(Request::get("/templates"), options)
    }

    pub async fn get_key_template(
        &self,
        id: &str,
        deadline: Deadline,
    ) -> Result<ApiResponse<KeyTemplate>> {
        let request = Request::get("/templates/{id}").path_param("id", id);
        self.http.invoke_json(&request, deadline).await
    }

    // ------------------------------------------------------------------------
    // Keystores
    // ------------------------------------------------------------------------

    pub fn keystores_pager(&self, options: ListKeystoresOptions) -> Result<KeystorePager> {
        self.pager(Request::get("/keystores"), options)
    }

    pub async fn get_keystore(&self, id: &str, deadline: Deadline) -> Result<ApiResponse<Keystore>> {
        let request = Request::get("/keystores/{id}").path_param("id", id);
        self.http.invoke_json(&request, deadline).await
    }

    // ------------------------------------------------------------------------
    // Vaults
    // ------------------------------------------------------------------------

    pub fn vaults_pager(&self, options: ListVaultsOptions) -> Result<VaultPager> {
        self.pager(Request::get("/vaults"), options)
    }

    pub async fn get_vault(&self, id: &str, deadline: Deadline) -> Result<ApiResponse<Vault>> {
        let request = Request::get("/vaults/{id}").path_param("id", id);
        self.http.invoke_json(&request, deadline).await
    }

    pub async fn delete_vault(&self, id: &str, deadline: Deadline) -> Result<ApiResponse<JsonValue>> {
        let request = Request::delete("/vaults/{id}").path_param("id", id);
        self.http.invoke_json(&request, deadline).await
    }

    // ------------------------------------------------------------------------
    // Associated resources
    // ------------------------------------------------------------------------

    pub fn associated_resources_pager(
        &self,
        options: ListAssociatedResourcesOptions,
    ) -> Result<AssociatedResourcePager> {
        self.pager(Request::get("/associated_resources"), options)
    }

    /// Resources protected by one managed key
    pub fn associated_resources_for_managed_key_pager(
        &self,
        id: &str,
        options: ListAssociatedResourcesOptions,
    ) -> Result<AssociatedResourcePager> {
        let request =
            Request::get("/managed_keys/{id}/associated_resources").path_param("id", id);
        self.pager(request, options)
    }

    /// Resources whose keys live in one keystore
    pub fn associated_resources_for_keystore_pager(
        &self,
        id: &str,
        options: ListAssociatedResourcesOptions,
    ) -> Result<AssociatedResourcePager> {
        let request = Request::get("/keystores/{id}/associated_resources").path_param("id", id);
        self.pager(request, options)
    }
}
