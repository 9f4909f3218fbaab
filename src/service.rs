//! Service Module
//!
//! The three calls the HTTP layer makes: list a page, count, get one.
//!
//! ## Responsibilities
//! - Parse question identifiers (`random` or a non-negative integer)
//! - Route lookups to the store and pages to the resolver
//! - Report misses as `NotFound`, bad identifiers as `MalformedRequest`

use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::error::{Result, TriviaError};
use crate::page::{Page, PageResolver};
use crate::question::Question;
use crate::store::{InMemoryStore, QuestionStore};

/// Token selecting a random question
pub const RANDOM_TOKEN: &str = "random";

/// Parsed question identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKey {
    /// Any question, chosen uniformly
    Random,

    /// The question with this id
    Id(u64),
}

impl FromStr for QuestionKey {
    type Err = TriviaError;

    /// Surrounding whitespace is ignored; `random` matches case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if token.eq_ignore_ascii_case(RANDOM_TOKEN) {
            return Ok(QuestionKey::Random);
        }
        token
            .parse::<u64>()
            .map(QuestionKey::Id)
            .map_err(|_| TriviaError::MalformedRequest(s.to_string()))
    }
}

/// Read-only trivia service shared by all request handlers
#[derive(Clone)]
pub struct TriviaService {
    store: Arc<dyn QuestionStore>,
    resolver: PageResolver,
}

impl TriviaService {
    pub fn new(store: Arc<dyn QuestionStore>, page_size: NonZeroUsize) -> Self {
        let resolver = PageResolver::new(Arc::clone(&store), page_size);
        Self { store, resolver }
    }

    /// Open the configured store and wrap it in a service
    pub fn open(config: &Config) -> Result<Self> {
        let store = InMemoryStore::open(config)?;
        Ok(Self::new(Arc::new(store), config.page_size))
    }

    /// Page of questions for a client offset; never fails
    pub fn list_questions(&self, offset: i64) -> Page {
        self.resolver.resolve(offset)
    }

    /// Total number of questions
    pub fn count(&self) -> usize {
        self.store.size()
    }

    /// Look up a question by identifier string
    ///
    /// Ids at or beyond the current count are `NotFound` without a scan.
    pub fn get_question(&self, identifier: &str) -> Result<Question> {
        match identifier.parse::<QuestionKey>()? {
            QuestionKey::Random => self.store.random().ok_or(TriviaError::EmptyStore),
            QuestionKey::Id(id) => {
                let size = u64::try_from(self.store.size()).unwrap_or(u64::MAX);
                if id >= size {
                    tracing::debug!(id, size, "Question id beyond collection size");
                    return Err(TriviaError::NotFound(id));
                }
                self.store.by_id(id).ok_or(TriviaError::NotFound(id))
            }
        }
    }

    /// Questions with any of the given ids, in collection order
    pub fn questions_by_ids(&self, ids: &[u64]) -> Vec<Question> {
        self.store.by_ids(ids)
    }

    /// When the question set was loaded
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.store.last_modified()
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.resolver.page_size()
    }

    pub fn store(&self) -> &Arc<dyn QuestionStore> {
        &self.store
    }
}
