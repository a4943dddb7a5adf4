//! Tag repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use blogly_core::domain::{Entity as _, Id, Post, Tag, TagDraft};
use blogly_core::error::RepoError;
use blogly_core::ports::TagRepository;

use super::associations::{posts_of_tag, replace_posts_of_tag, tags_of_post};
use super::base::SeaOrmBaseRepository;
use super::entity::{post_tag, tag};
use super::errors::{db_error, require, update_error};

/// SeaORM tag repository.
pub type SeaOrmTagRepository = SeaOrmBaseRepository<tag::Entity>;

fn not_found(id: Id) -> RepoError {
    RepoError::NotFound {
        entity_type: Tag::NAME,
        id,
    }
}

#[async_trait]
impl TagRepository for SeaOrmTagRepository {
    async fn create_with_posts(
        &self,
        mut draft: TagDraft,
        post_ids: &[Id],
    ) -> Result<Tag, RepoError> {
        require("name", &mut draft.name)?;

        let txn = self.db.begin().await.map_err(db_error)?;

        let model = tag::ActiveModel::from(draft)
            .insert(&txn)
            .await
            .map_err(db_error)?;
        replace_posts_of_tag(&txn, model.id, post_ids)
            .await
            .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;
        tracing::debug!(tag_id = model.id, "Inserted tag");

        Ok(model.into())
    }

    async fn update(&self, mut tag: Tag) -> Result<Tag, RepoError> {
        require("name", &mut tag.name)?;

        let id = tag.id;
        let model = tag::ActiveModel::from(tag)
            .update(&*self.db)
            .await
            .map_err(update_error(Tag::NAME, id))?;

        Ok(model.into())
    }

    async fn update_with_posts(&self, mut tag: Tag, post_ids: &[Id]) -> Result<Tag, RepoError> {
        require("name", &mut tag.name)?;

        let id = tag.id;
        let txn = self.db.begin().await.map_err(db_error)?;

        let model = tag::ActiveModel::from(tag)
            .update(&txn)
            .await
            .map_err(update_error(Tag::NAME, id))?;
        replace_posts_of_tag(&txn, id, post_ids)
            .await
            .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;

        Ok(model.into())
    }

    async fn delete(&self, id: Id) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        post_tag::Entity::delete_many()
            .filter(post_tag::Column::TagId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_error)?;
        let result = tag::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error)?;
        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        txn.commit().await.map_err(db_error)?;
        tracing::debug!(tag_id = id, "Deleted tag");

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Tag>, RepoError> {
        let tags = tag::Entity::find()
            .order_by_asc(tag::Column::Name)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(tags.into_iter().map(Into::into).collect())
    }

    async fn list_for_post(&self, post_id: Id) -> Result<Vec<Tag>, RepoError> {
        tags_of_post(&*self.db, post_id).await.map_err(db_error)
    }

    async fn set_posts(&self, tag_id: Id, post_ids: &[Id]) -> Result<Vec<Post>, RepoError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        tag::Entity::find_by_id(tag_id)
            .one(&txn)
            .await
            .map_err(db_error)?
            .ok_or_else(|| not_found(tag_id))?;
        replace_posts_of_tag(&txn, tag_id, post_ids)
            .await
            .map_err(db_error)?;
        let posts = posts_of_tag(&txn, tag_id).await.map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;

        Ok(posts)
    }
}
