//! Network Module
//!
//! HTTP server and request handling.
//!
//! ## Architecture
//! - axum router on a multi-threaded tokio runtime
//! - Handlers share one `TriviaService` (read-only, no locking)
//! - Errors become status codes in `error.rs`
//!
//! ## Routes
//! - `GET /questions?offset=N`: page of questions with navigation headers
//! - `GET /questions/count`:    number of questions
//! - `GET /questions/{id}`:     one question, `{id}` may be `random`

mod error;
mod model;
mod routes;
mod server;

pub use model::QuestionBody;
pub use routes::{create_router, CURRENT_LIST_SIZE, OFFSET, QUESTION_COUNT};
pub use server::Server;
