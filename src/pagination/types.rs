//! Pagination types
//!
//! List options, decoded pages and the pager state machine.

use crate::types::JsonObject;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// List Options
// ============================================================================

/// A typed query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    String(String),
    /// Sent comma-separated
    StringSet(Vec<String>),
    Integer(i64),
    Boolean(bool),
}

impl QueryValue {
    /// Encode as a single query string value; `None` for an empty set
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::StringSet(values) if values.is_empty() => None,
            Self::StringSet(values) => Some(values.join(",")),
            Self::Integer(n) => Some(n.to_string()),
            Self::Boolean(b) => Some(b.to_string()),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::StringSet(values)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Filters and sort parameters for a list endpoint, plus `limit`/`offset`.
///
/// A pager keeps its own copy and only ever rewrites `offset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    params: BTreeMap<String, QueryValue>,
    /// Page size
    pub limit: Option<u64>,
    /// Starting position
    pub offset: Option<u64>,
}

impl ListOptions {
    /// Create empty list options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named parameter, replacing any previous value
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a named string-set parameter
    #[must_use]
    pub fn param_set<I, S>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.param(name, QueryValue::StringSet(values))
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the starting position
    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set a named parameter in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        self.params.insert(name.into(), value.into());
    }

    /// Get a named parameter
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.params.get(name)
    }

    /// Remove a named parameter, returning its value
    pub fn remove(&mut self, name: &str) -> Option<QueryValue> {
        self.params.remove(name)
    }

    /// Query pairs: named parameters in name order, then `limit` and `offset`
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query: Vec<(String, String)> = self
            .params
            .iter()
            .filter_map(|(name, value)| value.to_query_value().map(|v| (name.clone(), v)))
            .collect();

        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        query
    }
}

// ============================================================================
// Page
// ============================================================================

/// Link object in a list envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub href: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    total_count: Option<u64>,
    #[serde(default)]
    limit: Option<u64>,
    #[serde(default)]
    offset: Option<u64>,
    #[serde(default)]
    first: Option<PageLink>,
    #[serde(default)]
    last: Option<PageLink>,
    #[serde(default)]
    previous: Option<PageLink>,
    #[serde(default)]
    next: Option<PageLink>,
    #[serde(flatten)]
    rest: JsonObject,
}

/// One fetched page of a list endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Raw `next.href`, the only carrier of the continuation offset
    pub next: Option<String>,
    pub total_count: Option<u64>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub previous: Option<String>,
}

impl<T> Page<T> {
    /// A page with no items and no continuation
    pub fn empty() -> Self {
        Self::with_items(Vec::new(), None)
    }

    /// A page with items and an optional `next` href
    pub fn with_items(items: Vec<T>, next: Option<String>) -> Self {
        Self {
            items,
            next,
            total_count: None,
            limit: None,
            offset: None,
            first: None,
            last: None,
            previous: None,
        }
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Decode a list envelope whose items live under `items_field`.
    ///
    /// A missing or `null` items field decodes as an empty page.
    pub fn decode(body: &[u8], items_field: &str) -> serde_json::Result<Self> {
        let mut envelope: Envelope = serde_json::from_slice(body)?;

        let items = match envelope.rest.remove(items_field) {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value)?,
        };

        Ok(Self {
            items,
            next: envelope.next.map(|link| link.href),
            total_count: envelope.total_count,
            limit: envelope.limit,
            offset: envelope.offset,
            first: envelope.first.map(|link| link.href),
            last: envelope.last.map(|link| link.href),
            previous: envelope.previous.map(|link| link.href),
        })
    }
}

// ============================================================================
// Pager State
// ============================================================================

/// Where a pager stands in its iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagerState {
    /// Nothing fetched yet
    #[default]
    Fresh,
    /// The next page starts at this offset
    HasMore(u64),
    /// Terminal, no further fetch will occur
    Exhausted,
}

impl PagerState {
    /// Check if another fetch is allowed
    pub fn has_next(&self) -> bool {
        !matches!(self, Self::Exhausted)
    }

    /// Check if pagination is complete
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
