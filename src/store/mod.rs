//! Store Module
//!
//! Read-only access to the question set.
//!
//! ## Responsibilities
//! - Own the question set for the lifetime of the process
//! - Lookup by ordinal index and by id (not interchangeable: ids may have gaps)
//! - Uniform random selection
//! - Clamped page slices and multi-id filtering
//!
//! ## Backing
//! `QuestionStore` is the seam for alternative backings; the page resolver
//! and HTTP layer only ever see `Arc<dyn QuestionStore>`. `InMemoryStore` is
//! the one shipped implementation.

mod loader;
mod memory;
mod seed;

pub use loader::{load_questions, parse_questions};
pub use memory::InMemoryStore;
pub use seed::seed_questions;

use chrono::{DateTime, Utc};

use crate::question::Question;

/// Read-only question repository
///
/// Every lookup that can miss returns `Option`; a miss is never papered
/// over with a default question.
pub trait QuestionStore: Send + Sync {
    /// Question at ordinal position `index` in load order
    fn by_index(&self, index: usize) -> Option<Question>;

    /// Question whose id equals `id`
    fn by_id(&self, id: u64) -> Option<Question>;

    /// Uniformly chosen question, `None` only when the store is empty
    fn random(&self) -> Option<Question>;

    /// Up to `page_size` questions starting at the clamped `offset`
    fn page(&self, offset: i64, page_size: usize) -> Vec<Question>;

    /// Questions whose id appears in `ids`, in store order.
    /// Unknown and repeated ids are ignored.
    fn by_ids(&self, ids: &[u64]) -> Vec<Question>;

    /// Number of questions
    fn size(&self) -> usize;

    /// When the question set was loaded
    fn last_modified(&self) -> DateTime<Utc>;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Clamp a client offset into `[0, size]`
pub fn clamp_offset(offset: i64, size: usize) -> usize {
    if offset <= 0 {
        return 0;
    }
    usize::try_from(offset).map_or(size, |offset| offset.min(size))
}
