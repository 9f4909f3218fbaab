//! Page Module
//!
//! Turns a raw client offset into a page of questions plus navigation.
//!
//! ## Algorithm
//! 1. Clamp the requested offset into `[0, total]` (same rule as
//!    `QuestionStore::page`)
//! 2. Slice `page_size` questions from the store
//! 3. Derive first/prev/next/last from the *requested* offset, so links stay
//!    symmetric even when the request itself was out of range
//!
//! Resolution never fails: every `i64` offset, including `i64::MIN` and
//! `i64::MAX`, yields a well-formed (possibly empty) page.

mod links;

pub use links::{Link, Rel, QUESTIONS_PATH};

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::question::Question;
use crate::store::{clamp_offset, QuestionStore};

/// Navigation offsets for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub first: i64,
    pub prev: i64,
    pub next: i64,
    pub last: i64,
}

impl Navigation {
    /// Compute navigation for a requested offset
    ///
    /// - `last` is the greatest multiple of `page_size` not above `total`
    /// - `next` falls back to `last` once it would reach `total`
    /// - `prev` bottoms out at 0
    pub fn compute(requested: i64, page_size: NonZeroUsize, total: usize) -> Self {
        let step = to_i64(page_size.get());
        let last = to_i64(page_size.get() * (total / page_size.get()));

        let next = match requested.checked_add(step) {
            Some(next) if next < to_i64(total) => next,
            _ => last,
        };

        let prev = requested.saturating_sub(step).max(0);

        Self {
            first: 0,
            prev,
            next,
            last,
        }
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// One resolved page of questions
#[derive(Debug, Clone)]
pub struct Page {
    /// Offset as the client sent it
    pub requested_offset: i64,

    /// Offset after clamping into `[0, total_size]`
    pub offset: usize,

    /// Questions on this page (at most the page size)
    pub items: Vec<Question>,

    /// Questions in the whole set
    pub total_size: usize,

    pub navigation: Navigation,
}

impl Page {
    /// Number of questions actually returned
    pub fn returned_size(&self) -> usize {
        self.items.len()
    }

    /// Hypermedia links for this page, addressed under `base_url`
    ///
    /// Order: self, next, prev, first, last, count, random.
    pub fn links(&self, base_url: &str) -> Vec<Link> {
        let nav = &self.navigation;
        vec![
            Link::offset(Rel::SelfLink, base_url, self.requested_offset),
            Link::offset(Rel::Next, base_url, nav.next),
            Link::offset(Rel::Prev, base_url, nav.prev),
            Link::offset(Rel::First, base_url, nav.first),
            Link::offset(Rel::Last, base_url, nav.last),
            Link::count(base_url),
            Link::random(base_url),
        ]
    }
}

/// Resolves client offsets against a store with a fixed page size
#[derive(Clone)]
pub struct PageResolver {
    store: Arc<dyn QuestionStore>,
    page_size: NonZeroUsize,
}

impl PageResolver {
    pub fn new(store: Arc<dyn QuestionStore>, page_size: NonZeroUsize) -> Self {
        Self { store, page_size }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Resolve the page for a requested offset
    pub fn resolve(&self, requested: i64) -> Page {
        let total_size = self.store.size();
        let offset = clamp_offset(requested, total_size);
        let items = self.store.page(to_i64(offset), self.page_size.get());
        let navigation = Navigation::compute(requested, self.page_size, total_size);

        tracing::debug!(
            requested,
            offset,
            returned = items.len(),
            total = total_size,
            "Resolved page"
        );

        Page {
            requested_offset: requested,
            offset,
            items,
            total_size,
            navigation,
        }
    }
}
