//! JSON question loader
//!
//! Reads a question set from a JSON array. Each record has the same shape
//! the HTTP layer emits; `lastUpdated` may be omitted and then defaults to
//! the load time. Every record goes through `QuestionBuilder`, so the first
//! invalid record aborts the whole load.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::Result;
use crate::question::Question;

/// Raw record as it appears on disk
///
/// Text fields are optional here so that a missing field is reported by the
/// builder as `MissingField` rather than as a generic JSON error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRecord {
    id: Option<i64>,
    question: Option<String>,
    answer_a: Option<String>,
    answer_b: Option<String>,
    answer_c: Option<String>,
    answer_d: Option<String>,
    correct_answer: Option<String>,
    hint: Option<String>,
    last_updated: Option<DateTime<Utc>>,
}

impl QuestionRecord {
    fn into_question(self, now: DateTime<Utc>) -> Result<Question> {
        let mut builder = Question::builder().last_updated(self.last_updated.unwrap_or(now));

        if let Some(id) = self.id {
            builder = builder.id(id);
        }
        if let Some(question) = self.question {
            builder = builder.question(question);
        }
        if let Some(a) = self.answer_a {
            builder = builder.answer_a(a);
        }
        if let Some(b) = self.answer_b {
            builder = builder.answer_b(b);
        }
        if let Some(c) = self.answer_c {
            builder = builder.answer_c(c);
        }
        if let Some(d) = self.answer_d {
            builder = builder.answer_d(d);
        }
        if let Some(correct) = self.correct_answer {
            builder = builder.correct_answer(correct);
        }
        if let Some(hint) = self.hint {
            builder = builder.hint(hint);
        }

        builder.build()
    }
}

/// Load and validate questions from a JSON file
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let json = fs::read_to_string(path)?;
    parse_questions(&json, Utc::now())
}

/// Parse and validate questions from JSON text
///
/// Records without `lastUpdated` are stamped with `now`.
pub fn parse_questions(json: &str, now: DateTime<Utc>) -> Result<Vec<Question>> {
    let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
    tracing::debug!("Parsed {} question records", records.len());

    records
        .into_iter()
        .map(|record| record.into_question(now))
        .collect()
}
