use std::sync::Arc;

use crate::domain::{Id, Post, Tag, TagDraft};
use crate::error::DomainError;
use crate::ports::{PostRepository, TagRepository};

/// A tag with the posts it is attached to.
#[derive(Debug, Clone)]
pub struct TagDetail {
    pub tag: Tag,
    pub posts: Vec<Post>,
}

/// Everything a tag form needs: the tag being edited (if any), the posts
/// currently attached and every post that can be chosen.
#[derive(Debug, Clone)]
pub struct TagEditor {
    pub tag: Option<Tag>,
    pub selected: Vec<Post>,
    pub choices: Vec<Post>,
}

#[derive(Clone)]
pub struct TagService {
    tags: Arc<dyn TagRepository>,
    posts: Arc<dyn PostRepository>,
}

impl TagService {
    pub fn new(tags: Arc<dyn TagRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { tags, posts }
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, DomainError> {
        Ok(self.tags.list_all().await?)
    }

    pub async fn show_tag(&self, id: Id) -> Result<TagDetail, DomainError> {
        let tag = self.tags.get(id).await?;
        let posts = self.posts.list_for_tag(id).await?;
        Ok(TagDetail { tag, posts })
    }

    pub async fn new_tag_form(&self) -> Result<TagEditor, DomainError> {
        Ok(TagEditor {
            tag: None,
            selected: Vec::new(),
            choices: self.posts.list_all().await?,
        })
    }

    pub async fn edit_tag_form(&self, id: Id) -> Result<TagEditor, DomainError> {
        let tag = self.tags.get(id).await?;
        let selected = self.posts.list_for_tag(id).await?;
        let choices = self.posts.list_all().await?;
        Ok(TagEditor {
            tag: Some(tag),
            selected,
            choices,
        })
    }

    pub async fn create_tag(&self, draft: TagDraft, post_ids: &[Id]) -> Result<Tag, DomainError> {
        let tag = self.tags.create_with_posts(draft, post_ids).await?;
        tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");
        Ok(tag)
    }

    /// Rename a tag and replace the set of posts it is attached to.
    pub async fn edit_tag(
        &self,
        id: Id,
        draft: TagDraft,
        post_ids: &[Id],
    ) -> Result<Tag, DomainError> {
        let mut tag = self.tags.get(id).await?;
        tag.name = draft.name;
        Ok(self.tags.update_with_posts(tag, post_ids).await?)
    }

    pub async fn delete_tag(&self, id: Id) -> Result<(), DomainError> {
        self.tags.delete(id).await?;
        tracing::info!(tag_id = id, "Tag deleted");
        Ok(())
    }
}
