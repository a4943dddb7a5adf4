//! Table definitions derived from the SeaORM entities.

use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{ConnectionTrait, DbBackend, DbConn, DbErr, Schema};

use super::entity::{post, post_tag, tag, user};

/// `CREATE TABLE IF NOT EXISTS` statements in dependency order.
pub fn create_table_statements(backend: DbBackend) -> Vec<TableCreateStatement> {
    let schema = Schema::new(backend);

    vec![
        schema.create_table_from_entity(user::Entity).if_not_exists().to_owned(),
        schema.create_table_from_entity(post::Entity).if_not_exists().to_owned(),
        schema.create_table_from_entity(tag::Entity).if_not_exists().to_owned(),
        schema
            .create_table_from_entity(post_tag::Entity)
            .if_not_exists()
            .to_owned(),
    ]
}

/// Create every missing table on `db`.
pub async fn create_all(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    for stmt in create_table_statements(backend) {
        db.execute(backend.build(&stmt)).await?;
    }
    tracing::info!("Schema ready");
    Ok(())
}
