//! Page fetching
//!
//! [`PageSource`] is the seam between a [`Pager`](super::Pager) and whatever
//! produces pages. [`PageFetcher`] is the HTTP implementation shared by every
//! list endpoint; a [`ListResource`] adapter supplies the per-resource parts.

use super::types::{ListOptions, Page};
use crate::error::{Error, Result};
use crate::http::{HttpClient, Request};
use crate::types::Deadline;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Per-resource adapter for a list endpoint
pub trait ListResource: Send + Sync + 'static {
    /// Decoded item type
    type Item: DeserializeOwned + Send + 'static;

    /// Resource name used in logs
    const NAME: &'static str;

    /// Envelope field holding the items array
    const ITEMS_FIELD: &'static str;
}

/// Fetches one page for a set of list options
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Send;

    async fn fetch_page(&self, options: &ListOptions, deadline: Deadline)
        -> Result<Page<Self::Item>>;
}

/// HTTP page source for one list endpoint.
///
/// Retries are left to the [`HttpClient`]; a failed invocation is returned
/// as-is.
pub struct PageFetcher<R: ListResource> {
    client: Arc<HttpClient>,
    request: Request,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ListResource> PageFetcher<R> {
    /// Create a fetcher for `request` (a GET on the list path).
    ///
    /// Path parameters are validated here, before any page is requested.
    pub fn new(client: Arc<HttpClient>, request: Request) -> Result<Self> {
        request.path_segments()?;
        Ok(Self {
            client,
            request,
            _resource: PhantomData,
        })
    }

    /// The list request template, without paging parameters
    pub fn request(&self) -> &Request {
        &self.request
    }
}

#[async_trait]
impl<R: ListResource> PageSource for PageFetcher<R> {
    type Item = R::Item;

    async fn fetch_page(
        &self,
        options: &ListOptions,
        deadline: Deadline,
    ) -> Result<Page<R::Item>> {
        let request = self.request.clone().queries(options.to_query());
        let response = self.client.invoke(&request, deadline).await?;

        if response.is_empty() {
            debug!("{}: empty page body at offset {:?}", R::NAME, options.offset);
            return Ok(Page::empty());
        }

        match Page::decode(response.body(), R::ITEMS_FIELD) {
            Ok(page) => {
                debug!(
                    "{}: fetched {} item(s) at offset {:?}, total {:?}, next {:?}",
                    R::NAME,
                    page.items.len(),
                    options.offset,
                    page.total_count,
                    page.next
                );
                Ok(page)
            }
            Err(e) => Err(Error::response_processing(
                format!("invalid {} page: {e}", R::NAME),
                response,
            )),
        }
    }
}

impl<R: ListResource> std::fmt::Debug for PageFetcher<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher")
            .field("resource", &R::NAME)
            .field("path", &self.request.path)
            .finish_non_exhaustive()
    }
}
