use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, Id};

/// Post entity - a blog post written by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Id,
    pub user_id: Id,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Human-friendly rendering of `created_at`, e.g. `Mon Oct 19 2026, 3:07 PM`.
    pub fn friendly_date(&self) -> String {
        self.created_at.format("%a %b %-d %Y, %-I:%M %p").to_string()
    }

    /// Overwrite the editable fields with the values from `draft`.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
    }
}

impl Entity for Post {
    const NAME: &'static str = "post";
}

/// Fields of a post that has not been inserted yet. The owning user and the
/// creation time are supplied at insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
