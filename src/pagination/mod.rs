//! Pagination module
//!
//! Turns offset-paginated list endpoints into a resumable iteration.
//!
//! # Overview
//!
//! Every UKO list endpoint answers with an envelope holding one page of items
//! and, while more remain, a `next` link whose `offset` query parameter marks
//! where the following page starts. [`extract_offset`] reads that parameter,
//! a [`PageSource`] fetches one page for a set of [`ListOptions`], and a
//! [`Pager`] chains the two into `has_next` / `get_next` / `get_all`.

mod cursor;
mod fetcher;
mod pager;
mod types;

pub use cursor::{extract_offset, OFFSET_PARAM};
pub use fetcher::{ListResource, PageFetcher, PageSource};
pub use pager::Pager;
pub use types::{ListOptions, Page, PageLink, PagerState, QueryValue};
