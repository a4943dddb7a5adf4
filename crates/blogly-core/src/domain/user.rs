use serde::{Deserialize, Serialize};

use super::{Entity, Id};

/// User entity - an author of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrite the editable fields with the values from `draft`.
    pub fn apply(&mut self, draft: UserDraft) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.image_url = draft.image_url;
    }
}

impl Entity for User {
    const NAME: &'static str = "user";
}

/// Fields of a user that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl UserDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            image_url: image_url.into(),
        }
    }
}
