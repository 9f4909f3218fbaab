//! Route handlers
//!
//! Every response carries a `Location` header echoing the request URI.

use std::sync::Arc;

use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::model::QuestionBody;
use crate::error::Result;
use crate::page::{Link, QUESTIONS_PATH};
use crate::service::TriviaService;

/// Total number of questions
pub const QUESTION_COUNT: HeaderName = HeaderName::from_static("question-count");

/// Number of questions in this response
pub const CURRENT_LIST_SIZE: HeaderName = HeaderName::from_static("current-question-list-size");

/// Effective (clamped) offset of this page
pub const OFFSET: HeaderName = HeaderName::from_static("offset");

#[derive(Clone)]
struct AppState {
    service: TriviaService,
    base_url: Arc<str>,
}

#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(default)]
    offset: i64,
}

/// Build the question routes
///
/// Links are addressed under `base_url` (empty for root-relative links).
pub fn create_router(service: TriviaService, base_url: &str) -> Router {
    let state = AppState {
        service,
        base_url: Arc::from(base_url),
    };

    Router::new()
        .route(QUESTIONS_PATH, get(list_questions))
        .route(&format!("{QUESTIONS_PATH}/count"), get(get_count))
        .route(&format!("{QUESTIONS_PATH}/{{id}}"), get(get_question))
        .with_state(state)
}

async fn list_questions(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ListParams>,
) -> Result<Response> {
    let page = state.service.list_questions(params.offset);
    let links = page.links(&state.base_url);

    let mut headers = base_headers(&uri, state.service.last_modified())?;
    headers.insert(QUESTION_COUNT, HeaderValue::from(page.total_size));
    headers.insert(CURRENT_LIST_SIZE, HeaderValue::from(page.returned_size()));
    headers.insert(OFFSET, HeaderValue::from(page.offset));
    headers.insert(header::LINK, HeaderValue::from_str(&Link::header_value(&links))?);

    let body: Vec<QuestionBody<'_>> = page.items.iter().map(QuestionBody::from).collect();
    Ok((headers, Json(body)).into_response())
}

async fn get_count(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Result<Response> {
    let count = state.service.count();

    let mut headers = base_headers(&uri, state.service.last_modified())?;
    headers.insert(QUESTION_COUNT, HeaderValue::from(count));

    Ok((headers, Json(count)).into_response())
}

async fn get_question(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<Response> {
    let question = state.service.get_question(&id)?;
    tracing::debug!(requested = %id, id = question.id(), "Serving question");

    let headers = base_headers(&uri, question.last_updated())?;
    Ok((headers, Json(QuestionBody::from(&question))).into_response())
}

/// Location and Last-Modified, shared by every route
fn base_headers(uri: &Uri, last_modified: DateTime<Utc>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(header::LOCATION, HeaderValue::from_str(&uri.to_string())?);
    headers.insert(header::LAST_MODIFIED, HeaderValue::from_str(&http_date(last_modified))?);
    Ok(headers)
}

/// IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
fn http_date(when: DateTime<Utc>) -> String {
    when.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
