//! Tests for Question and QuestionBuilder
//!
//! Tests verify:
//! - A fully specified builder produces the expected question
//! - Every field is validated (missing, blank, negative id, bad label)
//! - Timestamps read back unchanged

use chrono::{TimeZone, Utc};
use trivia::question::{Choice, Question, QuestionBuilder};
use trivia::TriviaError;

// =============================================================================
// Helper Functions
// =============================================================================

fn full_builder() -> QuestionBuilder {
    Question::builder()
        .id(0)
        .question("How many feet are in a mile?")
        .answer_a("5260")
        .answer_b("5270")
        .answer_c("5280")
        .answer_d("5290")
        .correct_answer("C")
        .hint("The altitude of Denver, Colorado")
        .last_updated(Utc.with_ymd_and_hms(2016, 3, 1, 12, 0, 0).unwrap())
}

// =============================================================================
// Successful Build Tests
// =============================================================================

#[test]
fn test_build_complete_question() {
    let question = full_builder().build().unwrap();

    assert_eq!(question.id(), 0);
    assert_eq!(question.prompt(), "How many feet are in a mile?");
    assert_eq!(question.answer(Choice::A), "5260");
    assert_eq!(question.answer(Choice::B), "5270");
    assert_eq!(question.answer(Choice::C), "5280");
    assert_eq!(question.answer(Choice::D), "5290");
    assert_eq!(question.correct_choice(), Choice::C);
    assert_eq!(question.hint(), "The altitude of Denver, Colorado");
}

#[test]
fn test_answer_by_label_matches_answer_array() {
    let question = full_builder().build().unwrap();

    for choice in Choice::ALL {
        assert_eq!(question.answer(choice), question.answers()[choice.index()]);
    }
}

#[test]
fn test_last_updated_is_independent_copy() {
    let stamp = Utc.with_ymd_and_hms(2016, 3, 1, 12, 0, 0).unwrap();
    let question = full_builder().last_updated(stamp).build().unwrap();

    let mut read = question.last_updated();
    read += chrono::Duration::days(1);

    assert_ne!(read, stamp);
    assert_eq!(question.last_updated(), stamp);
}

#[test]
fn test_identical_fields_compare_equal() {
    assert_eq!(full_builder().build().unwrap(), full_builder().build().unwrap());
    assert_ne!(
        full_builder().build().unwrap(),
        full_builder().hint("Another hint").build().unwrap()
    );
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_negative_id_rejected() {
    let err = full_builder().id(-1).build().unwrap_err();
    assert!(matches!(err, TriviaError::NegativeId(-1)));
}

#[test]
fn test_empty_question_rejected() {
    let err = full_builder().question("").build().unwrap_err();
    assert!(matches!(err, TriviaError::EmptyField("question")));
}

#[test]
fn test_blank_hint_rejected() {
    let err = full_builder().hint(" \t ").build().unwrap_err();
    assert!(matches!(err, TriviaError::EmptyField("hint")));
}

#[test]
fn test_each_empty_answer_rejected() {
    let cases = [
        (Choice::A, "answerA"),
        (Choice::B, "answerB"),
        (Choice::C, "answerC"),
        (Choice::D, "answerD"),
    ];

    for (choice, field) in cases {
        let err = full_builder().answer(choice, "").build().unwrap_err();
        assert!(
            matches!(err, TriviaError::EmptyField(f) if f == field),
            "expected empty {field}, got {err:?}"
        );
    }
}

#[test]
fn test_invalid_correct_answer_rejected() {
    for label in ["E", "AB", "1"] {
        let err = full_builder().correct_answer(label).build().unwrap_err();
        assert!(matches!(err, TriviaError::InvalidChoice(ref s) if s == label));
    }
}

#[test]
fn test_blank_correct_answer_reported_as_empty() {
    let err = full_builder().correct_answer("  ").build().unwrap_err();
    assert!(matches!(err, TriviaError::EmptyField("correctAnswer")));
}

#[test]
fn test_missing_timestamp_rejected() {
    let builder = QuestionBuilder::new()
        .id(1)
        .question("What was the first toy advertised on television?")
        .answer_a("The Rubix Cube")
        .answer_b("Mr. Potato Head")
        .answer_c("Barbie")
        .answer_d("A hula hoop")
        .correct_answer("B")
        .hint("Use your head on this one");

    let err = builder.build().unwrap_err();
    assert!(matches!(err, TriviaError::MissingField("lastUpdated")));
}

#[test]
fn test_missing_answer_rejected() {
    let builder = QuestionBuilder::new()
        .id(1)
        .question("q")
        .answer_a("a")
        .answer_b("b")
        .answer_d("d")
        .correct_answer("A")
        .hint("h")
        .last_updated(Utc::now());

    let err = builder.build().unwrap_err();
    assert!(matches!(err, TriviaError::MissingField("answerC")));
}

// =============================================================================
// Choice Tests
// =============================================================================

#[test]
fn test_choice_parse_and_display() {
    for choice in Choice::ALL {
        assert_eq!(choice.as_str().parse::<Choice>().unwrap(), choice);
        assert_eq!(choice.to_string(), choice.as_str());
    }
    assert!("a".parse::<Choice>().is_err());
}
