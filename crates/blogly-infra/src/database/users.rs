//! User repository.

use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use blogly_core::domain::{Entity as _, Id, Post, User, UserDraft};
use blogly_core::error::RepoError;
use blogly_core::ports::UserRepository;

use super::base::SeaOrmBaseRepository;
use super::entity::{post, post_tag, user};
use super::errors::{db_error, require, update_error};

/// SeaORM user repository.
pub type SeaOrmUserRepository = SeaOrmBaseRepository<user::Entity>;

fn validate(
    first_name: &mut String,
    last_name: &mut String,
    image_url: &mut String,
) -> Result<(), RepoError> {
    require("first_name", first_name)?;
    require("last_name", last_name)?;
    require("image_url", image_url)
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, mut draft: UserDraft) -> Result<User, RepoError> {
        validate(&mut draft.first_name, &mut draft.last_name, &mut draft.image_url)?;

        let model = user::ActiveModel::from(draft)
            .insert(&*self.db)
            .await
            .map_err(db_error)?;
        tracing::debug!(user_id = model.id, "Inserted user");

        Ok(model.into())
    }

    async fn update(&self, mut user: User) -> Result<User, RepoError> {
        validate(&mut user.first_name, &mut user.last_name, &mut user.image_url)?;

        let id = user.id;
        let model = user::ActiveModel::from(user)
            .update(&*self.db)
            .await
            .map_err(update_error(User::NAME, id))?;

        Ok(model.into())
    }

    async fn delete(&self, id: Id) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let authored = Query::select()
            .column(post::Column::Id)
            .from(post::Entity)
            .and_where(post::Column::UserId.eq(id))
            .to_owned();
        post_tag::Entity::delete_many()
            .filter(post_tag::Column::PostId.in_subquery(authored))
            .exec(&txn)
            .await
            .map_err(db_error)?;
        let posts = post::Entity::delete_many()
            .filter(post::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_error)?
            .rows_affected;

        let result = user::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound {
                entity_type: User::NAME,
                id,
            });
        }

        txn.commit().await.map_err(db_error)?;
        tracing::debug!(user_id = id, posts, "Deleted user and posts");

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>, RepoError> {
        let users = user::Entity::find()
            .order_by_asc(user::Column::LastName)
            .order_by_asc(user::Column::FirstName)
            .order_by_asc(user::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(users.into_iter().map(Into::into).collect())
    }

    async fn get_user_for_post(&self, post_id: Id) -> Result<User, RepoError> {
        let author = user::Entity::find()
            .inner_join(post::Entity)
            .filter(post::Column::Id.eq(post_id))
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        author.map(Into::into).ok_or(RepoError::NotFound {
            entity_type: Post::NAME,
            id: post_id,
        })
    }
}
