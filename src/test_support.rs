//! Network-free test doubles.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::utils::http::Fetcher;

enum Reply {
    Body(String),
    Fail(String),
    Hang,
}

/// [`Fetcher`] answering from a URL table. Unknown URLs fail.
#[derive(Default)]
pub struct ScriptedFetcher {
    replies: HashMap<String, Reply>,
    calls: AtomicUsize,
    log: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: impl Into<String>) -> Self {
        self.replies.insert(url.to_string(), Reply::Body(body.into()));
        self
    }

    pub fn with_failure(mut self, url: &str, message: &str) -> Self {
        self.replies.insert(url.to_string(), Reply::Fail(message.to_string()));
        self
    }

    /// `url` never answers within any reasonable timeout.
    pub fn with_hang(mut self, url: &str) -> Self {
        self.replies.insert(url.to_string(), Reply::Hang);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.log.lock().unwrap().push(url.to_string());
        match self.replies.get(url) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::Fail(message)) => Err(AppError::fetch(url, message)),
            Some(Reply::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(AppError::fetch(url, "hung"))
            }
            None => Err(AppError::fetch(url, "no scripted reply")),
        }
    }
}

/// RSS document wrapping `items`.
pub fn rss(items: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel><title>Upcoming</title>{items}</channel></rss>"#
    )
}

/// Listing page with the given `<li>` rows.
pub fn listing(rows: &str) -> String {
    format!("<html><body><ul>{rows}</ul></body></html>")
}
