//! In-memory question store
//!
//! Vec-backed store loaded once at startup.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{clamp_offset, load_questions, seed_questions, QuestionStore};
use crate::config::Config;
use crate::error::{Result, TriviaError};
use crate::question::Question;

/// Vec-backed question store
///
/// ## Concurrency
/// The question vector is never mutated after construction, so reads need
/// no lock. The only shared mutable state is the random source, which sits
/// behind a `parking_lot::Mutex` held just long enough to draw one index.
pub struct InMemoryStore {
    /// Questions in load order
    questions: Vec<Question>,

    /// When this set was loaded (surfaced as Last-Modified)
    loaded_at: DateTime<Utc>,

    /// Source for `random()`
    rng: Mutex<StdRng>,
}

impl InMemoryStore {
    /// Create a store seeded from OS entropy
    ///
    /// Fails if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        Self::with_rng(questions, StdRng::from_entropy())
    }

    /// Create a store whose random selections are reproducible
    pub fn with_seed(questions: Vec<Question>, seed: u64) -> Result<Self> {
        Self::with_rng(questions, StdRng::seed_from_u64(seed))
    }

    fn with_rng(questions: Vec<Question>, rng: StdRng) -> Result<Self> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(TriviaError::DuplicateId(question.id()));
            }
        }

        Ok(Self {
            questions,
            loaded_at: Utc::now(),
            rng: Mutex::new(rng),
        })
    }

    /// Open the store described by a config
    ///
    /// On startup:
    /// 1. Read the configured JSON file, or fall back to the built-in deck
    /// 2. Validate every question and reject duplicate ids
    /// 3. Apply the configured random seed, if any
    pub fn open(config: &Config) -> Result<Self> {
        let questions = match &config.questions_file {
            Some(path) => {
                let questions = load_questions(path)?;
                tracing::info!("Loaded {} questions from {}", questions.len(), path.display());
                questions
            }
            None => {
                let questions = seed_questions(Utc::now())?;
                tracing::info!("Loaded {} built-in questions", questions.len());
                questions
            }
        };

        match config.random_seed {
            Some(seed) => Self::with_seed(questions, seed),
            None => Self::new(questions),
        }
    }

    /// All questions in load order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl QuestionStore for InMemoryStore {
    fn by_index(&self, index: usize) -> Option<Question> {
        self.questions.get(index).cloned()
    }

    fn by_id(&self, id: u64) -> Option<Question> {
        // Linear scan; the deck is small
        self.questions.iter().find(|q| q.id() == id).cloned()
    }

    fn random(&self) -> Option<Question> {
        if self.questions.is_empty() {
            return None;
        }
        let index = self.rng.lock().gen_range(0..self.questions.len());
        self.questions.get(index).cloned()
    }

    fn page(&self, offset: i64, page_size: usize) -> Vec<Question> {
        let start = clamp_offset(offset, self.questions.len());
        let end = start.saturating_add(page_size).min(self.questions.len());
        self.questions[start..end].to_vec()
    }

    fn by_ids(&self, ids: &[u64]) -> Vec<Question> {
        let wanted: HashSet<u64> = ids.iter().copied().collect();
        self.questions
            .iter()
            .filter(|q| wanted.contains(&q.id()))
            .cloned()
            .collect()
    }

    fn size(&self) -> usize {
        self.questions.len()
    }

    fn last_modified(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
