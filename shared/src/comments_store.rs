//! Append-only comment store keyed by post slug.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{normalize_optional_text, IntakeError};

const SEED_COMMENTS_JSON: &str = include_str!("../data/comments.json");

pub const MIN_AUTHOR_CHARS: usize = 2;
pub const MIN_CONTENT_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub id: String,
    pub post_slug: String,
    pub author: String,
    pub email: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub avatar: String,
}

/// Comment form as submitted; every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommentInput {
    #[serde(default)]
    pub post_slug: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Default)]
pub struct CommentStore {
    comments: RwLock<Vec<CommentRecord>>,
    id_counter: AtomicU64,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<CommentRecord>) -> Self {
        Self {
            comments: RwLock::new(records),
            id_counter: AtomicU64::new(1),
        }
    }

    /// Store pre-filled with the bundled sample comments.
    pub fn with_seed() -> Result<Self> {
        let records: Vec<CommentRecord> =
            serde_json::from_str(SEED_COMMENTS_JSON).context("invalid bundled comments JSON")?;
        Ok(Self::from_records(records))
    }

    /// Comments of one post, newest first.
    ///
    /// Comments with the same timestamp list the later insertion first.
    pub fn list_for_post(&self, post_slug: &str) -> Vec<CommentRecord> {
        let mut comments: Vec<CommentRecord> = self
            .comments
            .read()
            .iter()
            .rev()
            .filter(|comment| comment.post_slug == post_slug)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.date.cmp(&a.date));
        comments
    }

    pub fn count_for_post(&self, post_slug: &str) -> usize {
        self.comments
            .read()
            .iter()
            .filter(|comment| comment.post_slug == post_slug)
            .count()
    }

    /// Validate and append a comment, returning the stored record.
    pub fn add(&self, input: NewCommentInput) -> Result<CommentRecord, IntakeError> {
        let post_slug = normalize_optional_text(input.post_slug);
        let author = normalize_optional_text(input.author);
        let content = normalize_optional_text(input.content);

        let (Some(post_slug), Some(author), Some(content)) = (post_slug, author, content) else {
            return Err(IntakeError::Invalid(vec![
                "Required fields: name and comment.".to_string()
            ]));
        };
        if author.chars().count() < MIN_AUTHOR_CHARS {
            return Err(IntakeError::Invalid(vec![format!(
                "Name must have at least {MIN_AUTHOR_CHARS} characters."
            )]));
        }
        if content.chars().count() < MIN_CONTENT_CHARS {
            return Err(IntakeError::Invalid(vec!["Comment is too short.".to_string()]));
        }

        let now = Utc::now();
        let record = CommentRecord {
            id: self.generate_id(now),
            post_slug,
            author,
            email: normalize_optional_text(input.email).unwrap_or_default(),
            content,
            date: now,
            avatar: String::new(),
        };
        self.comments.write().push(record.clone());
        tracing::debug!(comment_id = %record.id, post_slug = %record.post_slug, "comment stored");
        Ok(record)
    }

    fn generate_id(&self, now: DateTime<Utc>) -> String {
        let counter = self.id_counter.fetch_add(1, Ordering::Relaxed);
        format!("cmt-{:x}-{counter:04x}", now.timestamp_millis())
    }
}
