use async_trait::async_trait;

use crate::domain::{Id, Post, PostDraft, Tag, TagDraft, User, UserDraft};
use crate::error::RepoError;

/// Lookups shared by every entity repository.
#[async_trait]
pub trait BaseRepository<T>: Send + Sync {
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> Result<Option<T>, RepoError>;

    /// Fetch an entity by its primary key, failing with `RepoError::NotFound`.
    async fn get(&self, id: Id) -> Result<T, RepoError>;
}

/// User repository.
///
/// Deleting a user removes its posts and their tag associations in the same
/// transaction.
#[async_trait]
pub trait UserRepository: BaseRepository<User> {
    async fn create(&self, draft: UserDraft) -> Result<User, RepoError>;

    async fn update(&self, user: User) -> Result<User, RepoError>;

    async fn delete(&self, id: Id) -> Result<(), RepoError>;

    /// All users ordered by last name, then first name.
    async fn list_all(&self) -> Result<Vec<User>, RepoError>;

    /// The author of a post.
    async fn get_user_for_post(&self, post_id: Id) -> Result<User, RepoError>;
}

/// Post repository.
///
/// Tag id lists replace the post's whole association set. Ids with no
/// matching tag are dropped.
#[async_trait]
pub trait PostRepository: BaseRepository<Post> {
    async fn create_with_tags(
        &self,
        user_id: Id,
        draft: PostDraft,
        tag_ids: &[Id],
    ) -> Result<Post, RepoError>;

    async fn create(&self, user_id: Id, draft: PostDraft) -> Result<Post, RepoError> {
        self.create_with_tags(user_id, draft, &[]).await
    }

    /// Persist title and content changes, leaving tags untouched.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    async fn update_with_tags(&self, post: Post, tag_ids: &[Id]) -> Result<Post, RepoError>;

    async fn delete(&self, id: Id) -> Result<(), RepoError>;

    /// All posts, newest first.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// At most `limit` posts, newest first.
    async fn list_recent(&self, limit: u64) -> Result<Vec<Post>, RepoError>;

    async fn list_for_user(&self, user_id: Id) -> Result<Vec<Post>, RepoError>;

    async fn list_for_tag(&self, tag_id: Id) -> Result<Vec<Post>, RepoError>;

    /// Replace the tags of a post, returning the resulting set ordered by name.
    async fn set_tags(&self, post_id: Id, tag_ids: &[Id]) -> Result<Vec<Tag>, RepoError>;
}

/// Tag repository.
///
/// Post id lists replace the tag's whole association set. Ids with no
/// matching post are dropped.
#[async_trait]
pub trait TagRepository: BaseRepository<Tag> {
    async fn create_with_posts(&self, draft: TagDraft, post_ids: &[Id]) -> Result<Tag, RepoError>;

    async fn create(&self, draft: TagDraft) -> Result<Tag, RepoError> {
        self.create_with_posts(draft, &[]).await
    }

    async fn update(&self, tag: Tag) -> Result<Tag, RepoError>;

    async fn update_with_posts(&self, tag: Tag, post_ids: &[Id]) -> Result<Tag, RepoError>;

    async fn delete(&self, id: Id) -> Result<(), RepoError>;

    /// All tags ordered by name.
    async fn list_all(&self) -> Result<Vec<Tag>, RepoError>;

    /// Tags attached to a post, ordered by name.
    async fn list_for_post(&self, post_id: Id) -> Result<Vec<Tag>, RepoError>;

    /// Replace the posts of a tag, returning the resulting set newest first.
    async fn set_posts(&self, tag_id: Id, post_ids: &[Id]) -> Result<Vec<Post>, RepoError>;
}
