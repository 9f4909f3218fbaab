//! Hypermedia links
//!
//! Rendered in RFC 8288 form for the `Link` response header:
//! `<href>; rel="next"; type="application/json"`.

use std::fmt;

/// Path of the question collection, relative to the public base URL
pub const QUESTIONS_PATH: &str = "/questions";

/// Link relation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rel {
    SelfLink,
    Next,
    Prev,
    First,
    Last,
    Count,
    Random,
}

impl Rel {
    pub fn as_str(self) -> &'static str {
        match self {
            Rel::SelfLink => "self",
            Rel::Next => "next",
            Rel::Prev => "prev",
            Rel::First => "first",
            Rel::Last => "last",
            Rel::Count => "count",
            Rel::Random => "random",
        }
    }
}

/// A typed hypermedia link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub rel: Rel,
    pub href: String,
}

impl Link {
    /// Link to the collection at a given offset
    pub fn offset(rel: Rel, base_url: &str, offset: i64) -> Self {
        Self {
            rel,
            href: format!("{base_url}{QUESTIONS_PATH}?offset={offset}"),
        }
    }

    /// Link to the count resource
    pub fn count(base_url: &str) -> Self {
        Self {
            rel: Rel::Count,
            href: format!("{base_url}{QUESTIONS_PATH}/count"),
        }
    }

    /// Link to the random question resource
    pub fn random(base_url: &str) -> Self {
        Self {
            rel: Rel::Random,
            href: format!("{base_url}{QUESTIONS_PATH}/random"),
        }
    }

    /// Join links into a single `Link` header value
    pub fn header_value(links: &[Link]) -> String {
        links
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}>; rel=\"{}\"; type=\"application/json\"",
            self.href,
            self.rel.as_str()
        )
    }
}
