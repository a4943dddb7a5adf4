use blogly_infra::database::entity::{post, post_tag, tag, user};
use blogly_infra::database::schema::create_table_statements;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for stmt in create_table_statements(manager.get_database_backend()) {
            manager.create_table(stmt).await?;
        }
        tracing::info!("Created users, posts, tags and posts_tags");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Association rows first, then posts before their users.
        manager
            .drop_table(Table::drop().table(post_tag::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(tag::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(post::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(user::Entity).to_owned())
            .await
    }
}
