//! Tests for TriviaService
//!
//! Tests verify:
//! - Identifier parsing (`random`, integers, garbage)
//! - NotFound vs MalformedRequest outcomes
//! - Opening from a Config

use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::Utc;
use trivia::question::Question;
use trivia::service::{QuestionKey, TriviaService};
use trivia::store::{seed_questions, InMemoryStore};
use trivia::{Config, TriviaError};

// =============================================================================
// Helper Functions
// =============================================================================

fn deck_service() -> TriviaService {
    let store = InMemoryStore::with_seed(seed_questions(Utc::now()).unwrap(), 7).unwrap();
    TriviaService::new(Arc::new(store), NonZeroUsize::new(4).unwrap())
}

fn question(id: i64) -> Question {
    Question::builder()
        .id(id)
        .question("q")
        .answer_a("a")
        .answer_b("b")
        .answer_c("c")
        .answer_d("d")
        .correct_answer("D")
        .hint("h")
        .last_updated(Utc::now())
        .build()
        .unwrap()
}

// =============================================================================
// Identifier Parsing Tests
// =============================================================================

#[test]
fn test_parse_random_any_case() {
    for token in ["random", "RANDOM", "  RaNdOm ", "\trandom\n"] {
        assert_eq!(token.parse::<QuestionKey>().unwrap(), QuestionKey::Random);
    }
}

#[test]
fn test_parse_numeric_id() {
    assert_eq!("0".parse::<QuestionKey>().unwrap(), QuestionKey::Id(0));
    assert_eq!(" 10 ".parse::<QuestionKey>().unwrap(), QuestionKey::Id(10));
}

#[test]
fn test_parse_malformed() {
    for token in ["abc", "-1", "1.5", "", "random1", "0x10"] {
        let err = token.parse::<QuestionKey>().unwrap_err();
        assert!(matches!(err, TriviaError::MalformedRequest(_)), "{token:?} gave {err:?}");
    }
}

// =============================================================================
// Get Question Tests
// =============================================================================

#[test]
fn test_get_question_by_id() {
    let service = deck_service();

    for id in 0..11u64 {
        assert_eq!(service.get_question(&id.to_string()).unwrap().id(), id);
    }
}

#[test]
fn test_get_random_padded_mixed_case() {
    let service = deck_service();

    for _ in 0..50 {
        let q = service.get_question("  RANDOM  ").unwrap();
        assert!(q.id() <= 10);
    }
}

#[test]
fn test_get_question_past_end_not_found() {
    let service = deck_service();

    assert!(matches!(service.get_question("11"), Err(TriviaError::NotFound(11))));
    assert!(matches!(
        service.get_question("18446744073709551615"),
        Err(TriviaError::NotFound(u64::MAX))
    ));
}

#[test]
fn test_get_question_malformed() {
    let service = deck_service();

    let err = service.get_question("abc").unwrap_err();
    assert!(matches!(err, TriviaError::MalformedRequest(ref s) if s == "abc"));
    assert!(err.is_client_error());
}

#[test]
fn test_get_question_gap_in_ids_not_found() {
    // Ids 0, 1, 5: id 2 is below the size but has no question
    let store = InMemoryStore::new(vec![question(0), question(1), question(5)]).unwrap();
    let service = TriviaService::new(Arc::new(store), NonZeroUsize::new(4).unwrap());

    assert!(matches!(service.get_question("2"), Err(TriviaError::NotFound(2))));
    assert_eq!(service.get_question("1").unwrap().id(), 1);
}

#[test]
fn test_random_on_empty_service() {
    let store = InMemoryStore::new(Vec::new()).unwrap();
    let service = TriviaService::new(Arc::new(store), NonZeroUsize::new(4).unwrap());

    assert!(matches!(service.get_question("random"), Err(TriviaError::EmptyStore)));
    assert!(matches!(service.get_question("0"), Err(TriviaError::NotFound(0))));
}

// =============================================================================
// List / Count Tests
// =============================================================================

#[test]
fn test_count_and_list() {
    let service = deck_service();

    assert_eq!(service.count(), 11);
    assert_eq!(service.page_size().get(), 4);

    let page = service.list_questions(4);
    assert_eq!(page.returned_size(), 4);
    assert_eq!(page.navigation.next, 8);
}

#[test]
fn test_questions_by_ids() {
    let service = deck_service();
    let ids: Vec<u64> = service.questions_by_ids(&[10, 3, 3]).iter().map(Question::id).collect();
    assert_eq!(ids, vec![3, 10]);
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_default_config_serves_builtin_deck() {
    let config = Config::builder().page_size(NonZeroUsize::new(5).unwrap()).random_seed(1).build();
    let service = TriviaService::open(&config).unwrap();

    assert_eq!(service.count(), 11);
    assert_eq!(service.page_size().get(), 5);
    assert_eq!(service.list_questions(10).returned_size(), 1);
    assert_eq!(service.store().by_index(0).unwrap().prompt(), "How many feet are in a mile?");
}

#[test]
fn test_open_missing_file_fails() {
    let config = Config::builder().questions_file("/definitely/not/here.json").build();
    assert!(matches!(TriviaService::open(&config), Err(TriviaError::Io(_))));
}
