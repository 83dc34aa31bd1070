//! Stateful pager over a list endpoint

use super::cursor::extract_offset;
use super::fetcher::PageSource;
use super::types::{ListOptions, PagerState};
use crate::error::{Error, Result};
use crate::types::Deadline;
use futures::stream::{self, Stream};
use tracing::debug;

/// Iterates a paginated list endpoint page by page.
///
/// Starts [`Fresh`](PagerState::Fresh), moves to
/// [`HasMore`](PagerState::HasMore) while `next` links carry an offset and
/// ends [`Exhausted`](PagerState::Exhausted) after the last page or the first
/// error. Methods that fetch take `&mut self`, so a pager has at most one
/// fetch in flight.
pub struct Pager<S: PageSource> {
    source: S,
    options: ListOptions,
    state: PagerState,
    total_count: Option<u64>,
}

impl<S: PageSource> Pager<S> {
    /// Create a pager; `options` is copied and later changes by the caller
    /// have no effect.
    pub fn new(source: S, options: impl Into<ListOptions>) -> Self {
        Self {
            source,
            options: options.into(),
            state: PagerState::Fresh,
            total_count: None,
        }
    }

    /// True until the pager is exhausted. Performs no I/O.
    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Options the next fetch will start from
    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// `total_count` reported by the most recent page that carried one
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Fetch the next page.
    ///
    /// Fails with `PagerExhausted`, without any fetch, once iteration is
    /// complete. Any other error exhausts the pager.
    pub async fn get_next(&mut self, deadline: Deadline) -> Result<Vec<S::Item>> {
        match self.state {
            PagerState::Exhausted => return Err(Error::PagerExhausted),
            PagerState::HasMore(offset) => self.options.offset = Some(offset),
            PagerState::Fresh => {}
        }

        match self.advance(deadline).await {
            Ok(items) => Ok(items),
            Err(e) => {
                self.state = PagerState::Exhausted;
                Err(e)
            }
        }
    }

    /// Fetch every remaining page and concatenate the items in order.
    ///
    /// The first error aborts the whole call; items gathered before it are
    /// dropped.
    pub async fn get_all(&mut self, deadline: Deadline) -> Result<Vec<S::Item>> {
        let mut all = Vec::new();
        while self.has_next() {
            let items = self.get_next(deadline).await?;
            all.extend(items);
        }
        Ok(all)
    }

    /// Turn the pager into a stream of pages ending after the last page or
    /// the first error.
    pub fn into_stream(self, deadline: Deadline) -> impl Stream<Item = Result<Vec<S::Item>>> {
        stream::unfold(self, move |mut pager| async move {
            if !pager.has_next() {
                return None;
            }
            let page = pager.get_next(deadline).await;
            Some((page, pager))
        })
    }

    async fn advance(&mut self, deadline: Deadline) -> Result<Vec<S::Item>> {
        let page = self.source.fetch_page(&self.options, deadline).await?;
        let next_offset = extract_offset(page.next.as_deref())?;

        if let Some(next) = next_offset {
            let current = self.options.offset.unwrap_or(0);
            if next <= current {
                // a cursor that does not move forward would loop forever
                return Err(Error::malformed_cursor(
                    page.next.unwrap_or_default(),
                    next.to_string(),
                ));
            }
        }

        if page.total_count.is_some() {
            self.total_count = page.total_count;
        }

        self.state = match next_offset {
            Some(offset) => PagerState::HasMore(offset),
            None => PagerState::Exhausted,
        };

        debug!(
            "page of {} item(s) at offset {:?}, now {:?}",
            page.items.len(),
            self.options.offset,
            self.state
        );
        Ok(page.items)
    }
}

impl<S: PageSource + std::fmt::Debug> std::fmt::Debug for Pager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("source", &self.source)
            .field("options", &self.options)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
