pub mod explore;
pub mod mine;
pub mod vote;

use crate::backend::VoteBackend;
use crate::render;
use chrono::Utc;
use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;
use std::sync::Arc;

pub use explore::ExplorePage;
pub use mine::MinePage;
pub use vote::{CastOutcome, VotePage};

lazy_static! {
    static ref VOTE_PATH: Regex = Regex::new(r"^/vote/([^/?#]+)/?$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
    Info,
}

/// Transient notice shown over a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tip {
    pub message: String,
    pub severity: Severity,
}

impl Tip {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Explore,
    Mine,
    Vote { hash: String },
}

impl Route {
    /// Maps a page path (query string allowed) to a route; unknown paths
    /// land on the error page.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path {
            "" | "/" => Some(Route::Explore),
            "/mine" | "/mine/" => Some(Route::Mine),
            _ => VOTE_PATH
                .captures(path)
                .and_then(|caps| caps.get(1))
                .map(|hash| Route::Vote {
                    hash: hash.as_str().to_string(),
                }),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Explore => "/".to_string(),
            Route::Mine => "/mine".to_string(),
            Route::Vote { hash } => format!("/vote/{}", hash),
        }
    }

    /// Link to this route carrying the current query string along.
    pub fn link(&self, query: Option<&str>) -> String {
        match query.map(|q| q.trim_start_matches('?')).filter(|q| !q.is_empty()) {
            Some(query) => format!("{}?{}", self.path(), query),
            None => self.path(),
        }
    }
}

// Query part of a page path, without any fragment
fn query_string(path: &str) -> Option<&str> {
    let path = path.split('#').next().unwrap_or_default();
    path.split_once('?')
        .map(|(_, query)| query)
        .filter(|query| !query.is_empty())
}

// Load and render the page behind a path
pub async fn handle_path(backend: Arc<dyn VoteBackend>, logged_in: bool, path: &str) -> String {
    info!("Opening page: {}", path);
    let query = query_string(path);
    let now = Utc::now();

    match Route::parse(path) {
        Some(Route::Explore) => {
            let page = ExplorePage::load(backend.as_ref()).await;
            render::explore(&page, query, now)
        }
        Some(Route::Mine) => {
            let page = MinePage::load(backend.as_ref()).await;
            render::mine(&page, query)
        }
        Some(Route::Vote { hash }) => {
            let page = VotePage::new(backend, hash, logged_in);
            page.load().await;
            let (view, tip) = page.snapshot();
            render::vote(view.as_ref(), tip.as_ref(), now)
        }
        None => {
            warn!("No page for path {}", path);
            render::error_page(&format!("No route matches {}", path))
        }
    }
}
