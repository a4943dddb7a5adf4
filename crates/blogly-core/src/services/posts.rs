use std::sync::Arc;

use crate::domain::{Id, Post, PostDraft, Tag, User};
use crate::error::DomainError;
use crate::ports::{PostRepository, TagRepository, UserRepository};

/// A post with its author and tags.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub author: User,
    pub tags: Vec<Tag>,
}

/// Everything a post form needs: the author, the post being edited (if any),
/// the tags currently attached and every tag that can be chosen.
#[derive(Debug, Clone)]
pub struct PostEditor {
    pub author: User,
    pub post: Option<Post>,
    pub selected: Vec<Tag>,
    pub choices: Vec<Tag>,
}

#[derive(Clone)]
pub struct PostService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    tags: Arc<dyn TagRepository>,
}

impl PostService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        tags: Arc<dyn TagRepository>,
    ) -> Self {
        Self { users, posts, tags }
    }

    /// Newest posts for the homepage.
    pub async fn recent_posts(&self, limit: u64) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.list_recent(limit).await?)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.list_all().await?)
    }

    pub async fn show_post(&self, id: Id) -> Result<PostDetail, DomainError> {
        let post = self.posts.get(id).await?;
        let author = self.users.get_user_for_post(id).await?;
        let tags = self.tags.list_for_post(id).await?;
        Ok(PostDetail { post, author, tags })
    }

    pub async fn new_post_form(&self, user_id: Id) -> Result<PostEditor, DomainError> {
        let author = self.users.get(user_id).await?;
        let choices = self.tags.list_all().await?;
        Ok(PostEditor {
            author,
            post: None,
            selected: Vec::new(),
            choices,
        })
    }

    pub async fn edit_post_form(&self, id: Id) -> Result<PostEditor, DomainError> {
        let post = self.posts.get(id).await?;
        let author = self.users.get_user_for_post(id).await?;
        let selected = self.tags.list_for_post(id).await?;
        let choices = self.tags.list_all().await?;
        Ok(PostEditor {
            author,
            post: Some(post),
            selected,
            choices,
        })
    }

    pub async fn create_post(
        &self,
        user_id: Id,
        draft: PostDraft,
        tag_ids: &[Id],
    ) -> Result<Post, DomainError> {
        self.users.get(user_id).await?;
        let post = self.posts.create_with_tags(user_id, draft, tag_ids).await?;
        tracing::info!(post_id = post.id, user_id, "Post created");
        Ok(post)
    }

    /// Apply new title and content and replace the post's tag set.
    pub async fn edit_post(
        &self,
        id: Id,
        draft: PostDraft,
        tag_ids: &[Id],
    ) -> Result<Post, DomainError> {
        let mut post = self.posts.get(id).await?;
        post.apply(draft);
        Ok(self.posts.update_with_tags(post, tag_ids).await?)
    }

    /// Delete a post, returning the id of the user who wrote it.
    pub async fn delete_post(&self, id: Id) -> Result<Id, DomainError> {
        let post = self.posts.get(id).await?;
        self.posts.delete(id).await?;
        tracing::info!(post_id = id, user_id = post.user_id, "Post deleted");
        Ok(post.user_id)
    }
}
