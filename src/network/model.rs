//! JSON representation of a question

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::question::{Choice, Question};

/// Question as sent to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBody<'a> {
    pub id: u64,
    pub question: &'a str,
    pub answer_a: &'a str,
    pub answer_b: &'a str,
    pub answer_c: &'a str,
    pub answer_d: &'a str,
    pub correct_answer: Choice,
    pub hint: &'a str,
    pub last_updated: DateTime<Utc>,
}

impl<'a> From<&'a Question> for QuestionBody<'a> {
    fn from(q: &'a Question) -> Self {
        Self {
            id: q.id(),
            question: q.prompt(),
            answer_a: q.answer(Choice::A),
            answer_b: q.answer(Choice::B),
            answer_c: q.answer(Choice::C),
            answer_d: q.answer(Choice::D),
            correct_answer: q.correct_choice(),
            hint: q.hint(),
            last_updated: q.last_updated(),
        }
    }
}
