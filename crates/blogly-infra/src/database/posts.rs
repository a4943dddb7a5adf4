//! Post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

use blogly_core::domain::{Entity as _, Id, Post, PostDraft, Tag};
use blogly_core::error::RepoError;
use blogly_core::ports::PostRepository;

use super::associations::{posts_of_tag, replace_tags_of_post, tags_of_post};
use super::base::SeaOrmBaseRepository;
use super::entity::{post, post_tag};
use super::errors::{db_error, require, require_text, update_error};

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<post::Entity>;

fn validate(title: &mut String, content: &str) -> Result<(), RepoError> {
    require("title", title)?;
    require_text("content", content)
}

fn not_found(id: Id) -> RepoError {
    RepoError::NotFound {
        entity_type: Post::NAME,
        id,
    }
}

fn newest_first() -> sea_orm::Select<post::Entity> {
    post::Entity::find()
        .order_by_desc(post::Column::CreatedAt)
        .order_by_desc(post::Column::Id)
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn create_with_tags(
        &self,
        user_id: Id,
        mut draft: PostDraft,
        tag_ids: &[Id],
    ) -> Result<Post, RepoError> {
        validate(&mut draft.title, &draft.content)?;

        let txn = self.db.begin().await.map_err(db_error)?;

        let model = post::ActiveModel {
            title: Set(draft.title),
            content: Set(draft.content),
            created_at: Set(Utc::now().into()),
            user_id: Set(user_id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_error)?;
        replace_tags_of_post(&txn, model.id, tag_ids)
            .await
            .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;
        tracing::debug!(post_id = model.id, user_id, "Inserted post");

        Ok(model.into())
    }

    async fn update(&self, mut post: Post) -> Result<Post, RepoError> {
        validate(&mut post.title, &post.content)?;

        let id = post.id;
        let model = post::ActiveModel::from(post)
            .update(&*self.db)
            .await
            .map_err(update_error(Post::NAME, id))?;

        Ok(model.into())
    }

    async fn update_with_tags(&self, mut post: Post, tag_ids: &[Id]) -> Result<Post, RepoError> {
        validate(&mut post.title, &post.content)?;

        let id = post.id;
        let txn = self.db.begin().await.map_err(db_error)?;

        let model = post::ActiveModel::from(post)
            .update(&txn)
            .await
            .map_err(update_error(Post::NAME, id))?;
        replace_tags_of_post(&txn, id, tag_ids)
            .await
            .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;

        Ok(model.into())
    }

    async fn delete(&self, id: Id) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        post_tag::Entity::delete_many()
            .filter(post_tag::Column::PostId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_error)?;
        let result = post::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error)?;
        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        txn.commit().await.map_err(db_error)?;
        tracing::debug!(post_id = id, "Deleted post");

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let posts = newest_first().all(&*self.db).await.map_err(db_error)?;

        Ok(posts.into_iter().map(Into::into).collect())
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<Post>, RepoError> {
        let posts = newest_first()
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(posts.into_iter().map(Into::into).collect())
    }

    async fn list_for_user(&self, user_id: Id) -> Result<Vec<Post>, RepoError> {
        let posts = newest_first()
            .filter(post::Column::UserId.eq(user_id))
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(posts.into_iter().map(Into::into).collect())
    }

    async fn list_for_tag(&self, tag_id: Id) -> Result<Vec<Post>, RepoError> {
        posts_of_tag(&*self.db, tag_id).await.map_err(db_error)
    }

    async fn set_tags(&self, post_id: Id, tag_ids: &[Id]) -> Result<Vec<Tag>, RepoError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        post::Entity::find_by_id(post_id)
            .one(&txn)
            .await
            .map_err(db_error)?
            .ok_or_else(|| not_found(post_id))?;
        replace_tags_of_post(&txn, post_id, tag_ids)
            .await
            .map_err(db_error)?;
        let tags = tags_of_post(&txn, post_id).await.map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;

        Ok(tags)
    }
}
