//! Queries and full-replace updates on the `posts_tags` association.
//!
//! Every function is generic over the connection so it can run either
//! directly on the pool or inside a caller's transaction. Id lists are sent
//! in chunks so no statement exceeds the backend's bind-parameter limit.

use std::collections::BTreeSet;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use blogly_core::domain::{Id, Post, Tag};

use super::entity::{post, post_tag, tag};

/// Ids per `IN (...)` lookup or multi-row insert. Each link row binds two
/// parameters, which stays well below SQLite's 32766 and Postgres' 65535.
const CHUNK: usize = 500;

fn dedup(ids: &[Id]) -> Vec<Id> {
    ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Replace every tag of `post_id` with the tags among `tag_ids` that exist.
pub(crate) async fn replace_tags_of_post<C>(
    conn: &C,
    post_id: Id,
    tag_ids: &[Id],
) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let mut existing = Vec::new();
    for chunk in dedup(tag_ids).chunks(CHUNK) {
        let found = tag::Entity::find()
            .filter(tag::Column::Id.is_in(chunk.iter().copied()))
            .all(conn)
            .await?;
        existing.extend(found.into_iter().map(|t| t.id));
    }

    post_tag::Entity::delete_many()
        .filter(post_tag::Column::PostId.eq(post_id))
        .exec(conn)
        .await?;

    for chunk in existing.chunks(CHUNK) {
        post_tag::Entity::insert_many(
            chunk
                .iter()
                .map(|&tag_id| post_tag::ActiveModel::link(post_id, tag_id)),
        )
        .exec_without_returning(conn)
        .await?;
    }

    tracing::debug!(post_id, "Replaced tags of post");
    Ok(())
}

/// Replace every post of `tag_id` with the posts among `post_ids` that exist.
pub(crate) async fn replace_posts_of_tag<C>(
    conn: &C,
    tag_id: Id,
    post_ids: &[Id],
) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let mut existing = Vec::new();
    for chunk in dedup(post_ids).chunks(CHUNK) {
        let found = post::Entity::find()
            .filter(post::Column::Id.is_in(chunk.iter().copied()))
            .all(conn)
            .await?;
        existing.extend(found.into_iter().map(|p| p.id));
    }

    post_tag::Entity::delete_many()
        .filter(post_tag::Column::TagId.eq(tag_id))
        .exec(conn)
        .await?;

    for chunk in existing.chunks(CHUNK) {
        post_tag::Entity::insert_many(
            chunk
                .iter()
                .map(|&post_id| post_tag::ActiveModel::link(post_id, tag_id)),
        )
        .exec_without_returning(conn)
        .await?;
    }

    tracing::debug!(tag_id, "Replaced posts of tag");
    Ok(())
}

/// Tags attached to a post, ordered by name.
pub(crate) async fn tags_of_post<C>(conn: &C, post_id: Id) -> Result<Vec<Tag>, DbErr>
where
    C: ConnectionTrait,
{
    let tags = tag::Entity::find()
        .inner_join(post_tag::Entity)
        .filter(post_tag::Column::PostId.eq(post_id))
        .order_by_asc(tag::Column::Name)
        .all(conn)
        .await?;

    Ok(tags.into_iter().map(Into::into).collect())
}

/// Posts carrying a tag, newest first.
pub(crate) async fn posts_of_tag<C>(conn: &C, tag_id: Id) -> Result<Vec<Post>, DbErr>
where
    C: ConnectionTrait,
{
    let posts = post::Entity::find()
        .inner_join(post_tag::Entity)
        .filter(post_tag::Column::TagId.eq(tag_id))
        .order_by_desc(post::Column::CreatedAt)
        .order_by_desc(post::Column::Id)
        .all(conn)
        .await?;

    Ok(posts.into_iter().map(Into::into).collect())
}
