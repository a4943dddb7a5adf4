use sea_orm::{DbErr, SqlErr};

use blogly_core::domain::Id;
use blogly_core::error::RepoError;

/// Classify a SeaORM error. Unique and foreign-key violations are constraint
/// failures, everything else is a query or connection failure.
pub(crate) fn db_error(err: DbErr) -> RepoError {
    match (err.sql_err(), err) {
        (Some(SqlErr::UniqueConstraintViolation(detail)), _) => {
            RepoError::Constraint(format!("duplicate value: {detail}"))
        }
        (Some(SqlErr::ForeignKeyConstraintViolation(detail)), _) => {
            RepoError::Constraint(format!("dangling reference: {detail}"))
        }
        (_, DbErr::Conn(e)) => RepoError::Connection(e.to_string()),
        (_, DbErr::ConnectionAcquire(e)) => RepoError::Connection(e.to_string()),
        (_, other) => RepoError::Query(other.to_string()),
    }
}

/// Like [`db_error`], but an update that touched no row means the entity is
/// gone.
pub(crate) fn update_error(entity_type: &'static str, id: Id) -> impl FnOnce(DbErr) -> RepoError {
    move |err| match err {
        DbErr::RecordNotUpdated => RepoError::NotFound { entity_type, id },
        other => db_error(other),
    }
}

/// Required string columns are stored trimmed and must not end up empty.
pub(crate) fn require(field: &'static str, value: &mut String) -> Result<(), RepoError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RepoError::Constraint(format!("{field} is required")));
    }
    if trimmed.len() != value.len() {
        *value = trimmed.to_owned();
    }
    Ok(())
}

/// Like [`require`], for free text whose whitespace is kept as written.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), RepoError> {
    if value.trim().is_empty() {
        return Err(RepoError::Constraint(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_trims_surrounding_whitespace() {
        let mut name = String::from("  intro \t");
        require("name", &mut name).unwrap();
        assert_eq!(name, "intro");
    }

    #[test]
    fn require_rejects_whitespace_only() {
        let mut name = String::from("   ");
        let err = require("name", &mut name).unwrap_err();
        assert!(matches!(err, RepoError::Constraint(msg) if msg == "name is required"));
    }

    #[test]
    fn record_not_updated_is_not_found() {
        let err = update_error("Tag", 7)(DbErr::RecordNotUpdated);
        assert!(matches!(err, RepoError::NotFound { entity_type: "Tag", id: 7 }));
    }
}
