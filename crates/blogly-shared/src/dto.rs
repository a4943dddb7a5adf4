//! Form bodies submitted by the browser.
//!
//! Post and tag forms carry checklists (`tags`, `posts`) that arrive as the
//! same key repeated once per checked box, so they are parsed from the raw
//! list of key/value pairs rather than through a flat struct.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use blogly_core::domain::{Id, PostDraft, TagDraft, UserDraft};

/// A decoded `application/x-www-form-urlencoded` body, in submission order.
pub type FormPairs = Vec<(String, String)>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing form field `{0}`")]
    Missing(&'static str),

    #[error("form field `{field}` holds {value:?}, which is not an id")]
    InvalidId { field: &'static str, value: String },
}

/// Submitted by the new-user and edit-user forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl From<UserForm> for UserDraft {
    fn from(form: UserForm) -> Self {
        UserDraft::new(form.first_name, form.last_name, form.image_url)
    }
}

/// Submitted by the new-post and edit-post forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub tags: Vec<Id>,
}

impl PostForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, FormError> {
        Ok(Self {
            title: scalar(pairs, "title")?,
            content: scalar(pairs, "content")?,
            tags: ids(pairs, "tags")?,
        })
    }

    pub fn draft(&self) -> PostDraft {
        PostDraft::new(self.title.clone(), self.content.clone())
    }
}

/// Submitted by the new-tag and edit-tag forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagForm {
    pub name: String,
    pub posts: Vec<Id>,
}

impl TagForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, FormError> {
        Ok(Self {
            name: scalar(pairs, "name")?,
            posts: ids(pairs, "posts")?,
        })
    }

    pub fn draft(&self) -> TagDraft {
        TagDraft::new(self.name.clone())
    }
}

fn scalar(pairs: &[(String, String)], field: &'static str) -> Result<String, FormError> {
    pairs
        .iter()
        .find(|(key, _)| key == field)
        .map(|(_, value)| value.clone())
        .ok_or(FormError::Missing(field))
}

/// Every value submitted under `field`, parsed as an id. An absent field is
/// an empty checklist.
fn ids(pairs: &[(String, String)], field: &'static str) -> Result<Vec<Id>, FormError> {
    pairs
        .iter()
        .filter(|(key, _)| key == field)
        .map(|(_, value)| {
            value.trim().parse().map_err(|_| FormError::InvalidId {
                field,
                value: value.clone(),
            })
        })
        .collect()
}
