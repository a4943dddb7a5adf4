use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DbConn, EntityTrait, PrimaryKeyTrait};

use blogly_core::domain::{Entity, Id};
use blogly_core::error::RepoError;
use blogly_core::ports::BaseRepository;

use super::errors::db_error;

/// Generic SeaORM repository. Entity-specific behavior is added by
/// implementing the per-entity ports on its type aliases. Repositories over
/// the same pool share one connection handle.
pub struct SeaOrmBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> SeaOrmBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: impl Into<Arc<DbConn>>) -> Self {
        Self {
            db: db.into(),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T> BaseRepository<T> for SeaOrmBaseRepository<E>
where
    E: EntityTrait,
    E::Model: Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Id>,
    T: From<E::Model> + Entity + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Id) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(&*self.db).await.map_err(db_error)?;

        Ok(result.map(Into::into))
    }

    async fn get(&self, id: Id) -> Result<T, RepoError> {
        <Self as BaseRepository<T>>::find_by_id(self, id)
            .await?
            .ok_or(RepoError::NotFound {
                entity_type: T::NAME,
                id,
            })
    }
}
