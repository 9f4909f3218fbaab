//! Question Module
//!
//! The immutable trivia question value and its validating builder.
//!
//! ## Invariants
//! - A `Question` is only obtainable through `QuestionBuilder::build`,
//!   which checks every field first
//! - Exactly four answers, labelled A through D
//! - `last_updated` is a `Copy` value: readers always get their own instant

mod builder;

pub use builder::QuestionBuilder;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TriviaError;

/// Answer label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    /// All labels in display order
    pub const ALL: [Choice; 4] = [Choice::A, Choice::B, Choice::C, Choice::D];

    /// Position of this label in the answer array
    pub fn index(self) -> usize {
        match self {
            Choice::A => 0,
            Choice::B => 1,
            Choice::C => 2,
            Choice::D => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
            Choice::C => "C",
            Choice::D => "D",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = TriviaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Choice::A),
            "B" => Ok(Choice::B),
            "C" => Ok(Choice::C),
            "D" => Ok(Choice::D),
            other => Err(TriviaError::InvalidChoice(other.to_string())),
        }
    }
}

/// A validated, immutable trivia question
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    id: u64,
    prompt: String,
    answers: [String; 4],
    correct_choice: Choice,
    hint: String,
    last_updated: DateTime<Utc>,
}

impl Question {
    /// Start building a question
    pub fn builder() -> QuestionBuilder {
        QuestionBuilder::new()
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Answer text for a label
    pub fn answer(&self, choice: Choice) -> &str {
        &self.answers[choice.index()]
    }

    /// All four answers, A through D
    pub fn answers(&self) -> &[String; 4] {
        &self.answers
    }

    pub fn correct_choice(&self) -> Choice {
        self.correct_choice
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}
