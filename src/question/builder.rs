//! Question builder
//!
//! Collects raw field values and validates them once in `build`.

use chrono::{DateTime, Utc};

use super::{Choice, Question};
use crate::error::{Result, TriviaError};

/// Builder for Question
///
/// Setters never fail; `build` reports the first invalid field in
/// declaration order (id, question, answers A-D, correct answer, hint,
/// last updated).
#[derive(Debug, Clone, Default)]
pub struct QuestionBuilder {
    id: Option<i64>,
    question: Option<String>,
    answers: [Option<String>; 4],
    correct_answer: Option<String>,
    hint: Option<String>,
    last_updated: Option<DateTime<Utc>>,
}

impl QuestionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the question id (must not be negative)
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the question text
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Set the answer text for a label
    pub fn answer(mut self, choice: Choice, text: impl Into<String>) -> Self {
        self.answers[choice.index()] = Some(text.into());
        self
    }

    pub fn answer_a(self, text: impl Into<String>) -> Self {
        self.answer(Choice::A, text)
    }

    pub fn answer_b(self, text: impl Into<String>) -> Self {
        self.answer(Choice::B, text)
    }

    pub fn answer_c(self, text: impl Into<String>) -> Self {
        self.answer(Choice::C, text)
    }

    pub fn answer_d(self, text: impl Into<String>) -> Self {
        self.answer(Choice::D, text)
    }

    /// Set the correct answer label ("A", "B", "C" or "D")
    pub fn correct_answer(mut self, label: impl Into<String>) -> Self {
        self.correct_answer = Some(label.into());
        self
    }

    /// Set the hint text
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Set when the question was last updated
    pub fn last_updated(mut self, when: DateTime<Utc>) -> Self {
        self.last_updated = Some(when);
        self
    }

    /// Validate every field and produce the question
    pub fn build(self) -> Result<Question> {
        let id = self.id.ok_or(TriviaError::MissingField("id"))?;
        let id = u64::try_from(id).map_err(|_| TriviaError::NegativeId(id))?;

        let prompt = required_text("question", self.question)?;

        let [a, b, c, d] = self.answers;
        let answers = [
            required_text("answerA", a)?,
            required_text("answerB", b)?,
            required_text("answerC", c)?,
            required_text("answerD", d)?,
        ];

        let correct_choice = required_text("correctAnswer", self.correct_answer)?.parse::<Choice>()?;
        let hint = required_text("hint", self.hint)?;
        let last_updated = self.last_updated.ok_or(TriviaError::MissingField("lastUpdated"))?;

        Ok(Question {
            id,
            prompt,
            answers,
            correct_choice,
            hint,
            last_updated,
        })
    }
}

/// Present and not blank
fn required_text(field: &'static str, value: Option<String>) -> Result<String> {
    let value = value.ok_or(TriviaError::MissingField(field))?;
    if value.trim().is_empty() {
        return Err(TriviaError::EmptyField(field));
    }
    Ok(value)
}
