use std::sync::Arc;

use sea_orm::{DatabaseBackend, DbConn, EntityTrait, MockDatabase, PaginatorTrait};

use blogly_core::domain::{Post, PostDraft, Tag, TagDraft, UserDraft};
use blogly_core::error::RepoError;
use blogly_core::ports::{BaseRepository, PostRepository, TagRepository, UserRepository};

use super::entity::{post, post_tag, tag};
use super::{
    DatabaseConfig, SeaOrmPostRepository, SeaOrmTagRepository, SeaOrmUserRepository, connect,
    schema,
};

struct Repos {
    db: Arc<DbConn>,
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    tags: Arc<dyn TagRepository>,
}

async fn repos() -> Repos {
    let db = connect(&DatabaseConfig::in_memory()).await.unwrap();
    schema::create_all(&db).await.unwrap();
    let db = Arc::new(db);
    Repos {
        users: Arc::new(SeaOrmUserRepository::new(db.clone())),
        posts: Arc::new(SeaOrmPostRepository::new(db.clone())),
        tags: Arc::new(SeaOrmTagRepository::new(db.clone())),
        db,
    }
}

fn ada() -> UserDraft {
    UserDraft::new("Ada", "Lovelace", "https://example.com/ada.png")
}

async fn association_count(db: &DbConn) -> u64 {
    post_tag::Entity::find().count(db).await.unwrap()
}

#[tokio::test]
async fn test_find_post_by_id() {
    let now = chrono::Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: 3,
            title: "Test Post".to_owned(),
            content: "Content".to_owned(),
            created_at: now.into(),
            user_id: 1,
        }]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let result = BaseRepository::<Post>::find_by_id(&repo, 3).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, 3);
    assert_eq!(post.user_id, 1);
}

#[tokio::test]
async fn test_get_missing_tag_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<tag::Model>::new()])
        .into_connection();

    let repo = SeaOrmTagRepository::new(db);

    let err = BaseRepository::<Tag>::get(&repo, 42).await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity_type: "tag",
            id: 42
        }
    ));
}

#[tokio::test]
async fn test_create_user_requires_first_name() {
    let r = repos().await;

    let err = r
        .users
        .create(UserDraft::new("", "Lovelace", "https://example.com/ada.png"))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
    assert!(r.users.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_user_rejects_blank_image_url() {
    let r = repos().await;
    let mut user = r.users.create(ada()).await.unwrap();

    user.image_url = "  ".into();
    let err = r.users.update(user).await.unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let r = repos().await;
    let mut user = r.users.create(ada()).await.unwrap();
    user.id += 100;

    let err = r.users.update(user).await.unwrap_err();

    assert!(matches!(err, RepoError::NotFound { entity_type: "user", .. }));
}

#[tokio::test]
async fn test_duplicate_tag_name_is_a_constraint_violation() {
    let r = repos().await;
    r.tags.create(TagDraft::new("intro")).await.unwrap();

    let err = r.tags.create(TagDraft::new("intro")).await.unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
    assert_eq!(r.tags.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_padded_tag_name_collides_with_existing_name() {
    let r = repos().await;
    r.tags.create(TagDraft::new("intro")).await.unwrap();

    let err = r.tags.create(TagDraft::new(" intro ")).await.unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)));

    let mut rust = r.tags.create(TagDraft::new("rust")).await.unwrap();
    rust.name = "intro\n".into();
    let err = r.tags.update(rust).await.unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)));

    let names: Vec<String> = r
        .tags
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["intro", "rust"]);
}

#[tokio::test]
async fn test_names_and_titles_are_stored_trimmed() {
    let r = repos().await;

    let user = r
        .users
        .create(UserDraft::new("  Ada", "Lovelace ", " https://example.com/ada.png"))
        .await
        .unwrap();
    assert_eq!(user.full_name(), "Ada Lovelace");
    assert_eq!(user.image_url, "https://example.com/ada.png");
    assert_eq!(r.users.get(user.id).await.unwrap(), user);

    let post = r
        .posts
        .create(user.id, PostDraft::new("\tHello ", "  indented body\n"))
        .await
        .unwrap();
    assert_eq!(post.title, "Hello");
    assert_eq!(post.content, "  indented body\n");
}

#[tokio::test]
async fn test_renaming_tag_onto_existing_name_fails() {
    let r = repos().await;
    r.tags.create(TagDraft::new("intro")).await.unwrap();
    let mut other = r.tags.create(TagDraft::new("rust")).await.unwrap();

    other.name = "intro".into();
    let err = r.tags.update(other).await.unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
}

#[tokio::test]
async fn test_users_are_listed_by_last_then_first_name() {
    let r = repos().await;
    for (first, last) in [("Grace", "Hopper"), ("Ada", "Lovelace"), ("Alan", "Hopper")] {
        r.users
            .create(UserDraft::new(first, last, "https://example.com/a.png"))
            .await
            .unwrap();
    }

    let names: Vec<String> = r
        .users
        .list_all()
        .await
        .unwrap()
        .iter()
        .map(|u| u.full_name())
        .collect();

    assert_eq!(names, ["Alan Hopper", "Grace Hopper", "Ada Lovelace"]);
}

#[tokio::test]
async fn test_tags_are_listed_by_name() {
    let r = repos().await;
    for name in ["web", "intro", "rust"] {
        r.tags.create(TagDraft::new(name)).await.unwrap();
    }

    let names: Vec<String> = r
        .tags
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(names, ["intro", "rust", "web"]);
}

#[tokio::test]
async fn test_post_for_missing_user_is_rejected() {
    let r = repos().await;

    let err = r
        .posts
        .create(99, PostDraft::new("Hello", "World"))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
}

#[tokio::test]
async fn test_deleting_user_cascades_to_posts_and_associations() {
    let r = repos().await;
    let user = r.users.create(ada()).await.unwrap();
    let other = r
        .users
        .create(UserDraft::new("Grace", "Hopper", "https://example.com/g.png"))
        .await
        .unwrap();
    let intro = r.tags.create(TagDraft::new("intro")).await.unwrap();
    let rust = r.tags.create(TagDraft::new("rust")).await.unwrap();

    let mut doomed = Vec::new();
    for n in 0..3 {
        let post = r
            .posts
            .create_with_tags(
                user.id,
                PostDraft::new(format!("Post {n}"), "body"),
                &[intro.id, rust.id],
            )
            .await
            .unwrap();
        doomed.push(post.id);
    }
    let survivor = r
        .posts
        .create_with_tags(other.id, PostDraft::new("Kept", "body"), &[intro.id])
        .await
        .unwrap();
    assert_eq!(association_count(&r.db).await, 7);

    r.users.delete(user.id).await.unwrap();

    for id in doomed {
        assert!(r.posts.find_by_id(id).await.unwrap().is_none());
    }
    assert!(r.users.find_by_id(user.id).await.unwrap().is_none());
    assert_eq!(association_count(&r.db).await, 1);
    assert_eq!(r.tags.list_all().await.unwrap().len(), 2);
    assert_eq!(r.posts.list_for_tag(intro.id).await.unwrap(), vec![survivor]);
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let r = repos().await;

    let err = r.users.delete(5).await.unwrap_err();

    assert!(matches!(err, RepoError::NotFound { entity_type: "user", id: 5 }));
}

#[tokio::test]
async fn test_deleting_post_keeps_tags_and_author() {
    let r = repos().await;
    let user = r.users.create(ada()).await.unwrap();
    let tag = r.tags.create(TagDraft::new("intro")).await.unwrap();
    let post = r
        .posts
        .create_with_tags(user.id, PostDraft::new("Hello", "World"), &[tag.id])
        .await
        .unwrap();

    r.posts.delete(post.id).await.unwrap();

    assert_eq!(association_count(&r.db).await, 0);
    assert_eq!(r.tags.get(tag.id).await.unwrap(), tag);
    assert_eq!(r.users.get(user.id).await.unwrap(), user);
    assert!(matches!(
        r.posts.delete(post.id).await.unwrap_err(),
        RepoError::NotFound { entity_type: "post", .. }
    ));
}

#[tokio::test]
async fn test_deleting_tag_keeps_posts() {
    let r = repos().await;
    let user = r.users.create(ada()).await.unwrap();
    let tag = r.tags.create(TagDraft::new("intro")).await.unwrap();
    let post = r
        .posts
        .create_with_tags(user.id, PostDraft::new("Hello", "World"), &[tag.id])
        .await
        .unwrap();

    r.tags.delete(tag.id).await.unwrap();

    assert_eq!(association_count(&r.db).await, 0);
    assert_eq!(r.posts.get(post.id).await.unwrap(), post);
    assert!(r.tags.list_for_post(post.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_set_tags_is_a_full_replace() {
    let r = repos().await;
    let user = r.users.create(ada()).await.unwrap();
    let intro = r.tags.create(TagDraft::new("intro")).await.unwrap();
    let rust = r.tags.create(TagDraft::new("rust")).await.unwrap();
    let post = r
        .posts
        .create_with_tags(user.id, PostDraft::new("Hello", "World"), &[intro.id])
        .await
        .unwrap();

    let cleared = r.posts.set_tags(post.id, &[]).await.unwrap();
    assert!(cleared.is_empty());
    assert_eq!(association_count(&r.db).await, 0);

    let tags = r
        .posts
        .set_tags(post.id, &[rust.id, intro.id, rust.id])
        .await
        .unwrap();
    assert_eq!(tags, vec![intro.clone(), rust.clone()]);
    assert_eq!(association_count(&r.db).await, 2);

    let again = r.posts.set_tags(post.id, &[rust.id, intro.id]).await.unwrap();
    assert_eq!(again, tags);
    assert_eq!(association_count(&r.db).await, 2);
}

#[tokio::test]
async fn test_unknown_ids_are_dropped_from_associations() {
    let r = repos().await;
    let user = r.users.create(ada()).await.unwrap();
    let intro = r.tags.create(TagDraft::new("intro")).await.unwrap();

    let post = r
        .posts
        .create_with_tags(user.id, PostDraft::new("Hello", "World"), &[intro.id, 404])
        .await
        .unwrap();
    assert_eq!(r.tags.list_for_post(post.id).await.unwrap(), vec![intro.clone()]);

    let posts = r.tags.set_posts(intro.id, &[post.id, 505]).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, post.id);
}

#[tokio::test]
async fn test_set_tags_accepts_id_lists_beyond_bind_limits() {
    let r = repos().await;
    let user = r.users.create(ada()).await.unwrap();
    let intro = r.tags.create(TagDraft::new("intro")).await.unwrap();
    let rust = r.tags.create(TagDraft::new("rust")).await.unwrap();
    let post = r
        .posts
        .create(user.id, PostDraft::new("Hello", "World"))
        .await
        .unwrap();

    let mut ids: Vec<i32> = (1_000..41_000).collect();
    ids.extend([rust.id, intro.id]);

    let tags = r.posts.set_tags(post.id, &ids).await.unwrap();

    assert_eq!(tags, vec![intro, rust]);
    assert_eq!(association_count(&r.db).await, 2);
}

#[tokio::test]
async fn test_set_posts_accepts_id_lists_beyond_bind_limits() {
    let r = repos().await;
    let user = r.users.create(ada()).await.unwrap();
    let tag = r.tags.create(TagDraft::new("intro")).await.unwrap();
    let mut ids: Vec<i32> = (1_000..41_000).collect();
    for title in ["First", "Second"] {
        let post = r
            .posts
            .create(user.id, PostDraft::new(title, "Body"))
            .await
            .unwrap();
        ids.push(post.id);
    }

    let posts = r.tags.set_posts(tag.id, &ids).await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(association_count(&r.db).await, 2);
}

#[tokio::test]
async fn test_set_tags_on_missing_post_is_not_found() {
    let r = repos().await;
    let tag = r.tags.create(TagDraft::new("intro")).await.unwrap();

    let err = r.posts.set_tags(12, &[tag.id]).await.unwrap_err();

    assert!(matches!(err, RepoError::NotFound { entity_type: "post", id: 12 }));
    assert_eq!(association_count(&r.db).await, 0);
}

#[tokio::test]
async fn test_failed_update_with_tags_leaves_associations_untouched() {
    let r = repos().await;
    let user = r.users.create(ada()).await.unwrap();
    let intro = r.tags.create(TagDraft::new("intro")).await.unwrap();
    let mut post = r
        .posts
        .create_with_tags(user.id, PostDraft::new("Hello", "World"), &[intro.id])
        .await
        .unwrap();

    post.id += 1;
    let err = r.posts.update_with_tags(post, &[]).await.unwrap_err();

    assert!(matches!(err, RepoError::NotFound { .. }));
    assert_eq!(association_count(&r.db).await, 1);
}

#[tokio::test]
async fn test_recent_posts_are_newest_first_and_limited() {
    let r = repos().await;
    let user = r.users.create(ada()).await.unwrap();
    let mut ids = Vec::new();
    for n in 0..7 {
        let post = r
            .posts
            .create(user.id, PostDraft::new(format!("Post {n}"), "body"))
            .await
            .unwrap();
        ids.push(post.id);
    }

    let recent: Vec<i32> = r
        .posts
        .list_recent(5)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();

    ids.reverse();
    assert_eq!(recent, &ids[..5]);
}

#[tokio::test]
async fn test_update_post_keeps_tags() {
    let r = repos().await;
    let user = r.users.create(ada()).await.unwrap();
    let intro = r.tags.create(TagDraft::new("intro")).await.unwrap();
    let mut post = r
        .posts
        .create_with_tags(user.id, PostDraft::new("Hello", "World"), &[intro.id])
        .await
        .unwrap();

    post.title = "Hello again".into();
    let updated = r.posts.update(post.clone()).await.unwrap();

    assert_eq!(updated, post);
    assert_eq!(r.tags.list_for_post(post.id).await.unwrap(), vec![intro]);
    assert_eq!(r.users.get_user_for_post(post.id).await.unwrap(), user);
}
