use serde::{Deserialize, Serialize};

use super::{Entity, Id};

/// Tag entity - a uniquely named label attached to posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Id,
    pub name: String,
}

impl Entity for Tag {
    const NAME: &'static str = "tag";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDraft {
    pub name: String,
}

impl TagDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
