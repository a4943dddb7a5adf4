//! View models: the read results handed to the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blogly_core::domain::{Id, Post, Tag, User};
use blogly_core::services::{PostDetail, PostEditor, TagDetail, TagEditor, UserDetail};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub image_url: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            full_name: user.full_name(),
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            image_url: user.image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: Id,
    pub user_id: Id,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// e.g. `Mon Oct 19 2026, 3:07 PM`
    pub friendly_date: String,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            friendly_date: post.friendly_date(),
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagView {
    pub id: Id,
    pub name: String,
}

impl From<Tag> for TagView {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

/// Backs the new-user and edit-user forms; `user` is empty for a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFormView {
    pub user: Option<UserView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetailView {
    pub user: UserView,
    pub posts: Vec<PostView>,
}

impl From<UserDetail> for UserDetailView {
    fn from(detail: UserDetail) -> Self {
        Self {
            user: detail.user.into(),
            posts: views(detail.posts),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailView {
    pub post: PostView,
    pub author: UserView,
    pub tags: Vec<TagView>,
}

impl From<PostDetail> for PostDetailView {
    fn from(detail: PostDetail) -> Self {
        Self {
            post: detail.post.into(),
            author: detail.author.into(),
            tags: views(detail.tags),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostFormView {
    pub author: UserView,
    pub post: Option<PostView>,
    pub selected_tag_ids: Vec<Id>,
    pub tags: Vec<TagView>,
}

impl From<PostEditor> for PostFormView {
    fn from(editor: PostEditor) -> Self {
        Self {
            author: editor.author.into(),
            post: editor.post.map(Into::into),
            selected_tag_ids: editor.selected.iter().map(|t| t.id).collect(),
            tags: views(editor.choices),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDetailView {
    pub tag: TagView,
    pub posts: Vec<PostView>,
}

impl From<TagDetail> for TagDetailView {
    fn from(detail: TagDetail) -> Self {
        Self {
            tag: detail.tag.into(),
            posts: views(detail.posts),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagFormView {
    pub tag: Option<TagView>,
    pub selected_post_ids: Vec<Id>,
    pub posts: Vec<PostView>,
}

impl From<TagEditor> for TagFormView {
    fn from(editor: TagEditor) -> Self {
        Self {
            tag: editor.tag.map(Into::into),
            selected_post_ids: editor.selected.iter().map(|p| p.id).collect(),
            posts: views(editor.choices),
        }
    }
}

/// Convert a list of entities into their views.
pub fn views<T, V>(items: Vec<T>) -> Vec<V>
where
    V: From<T>,
{
    items.into_iter().map(V::from).collect()
}
