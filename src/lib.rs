//! # Trivia
//!
//! A read-only trivia question service with:
//! - An immutable, validated question set loaded once at startup
//! - Lookup by id, by index, at random, and by id set
//! - Clamped pagination with hypermedia navigation links
//! - An HTTP front end (axum)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │           /questions  /questions/count  /questions/{id}      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  TriviaService                               │
//! │          (identifier parsing, not-found mapping)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         │
//!   ┌─────────────┐                  │
//!   │PageResolver │                  │
//!   │(clamp, nav) │                  │
//!   └──────┬──────┘                  │
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────────────────────────────┐
//!   │     QuestionStore (read-only)       │
//!   └─────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod question;
pub mod store;
pub mod page;
pub mod service;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{TriviaError, Result};
pub use config::Config;
pub use question::{Choice, Question, QuestionBuilder};
pub use store::{InMemoryStore, QuestionStore};
pub use page::{Page, PageResolver};
pub use service::{QuestionKey, TriviaService};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the trivia service
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
