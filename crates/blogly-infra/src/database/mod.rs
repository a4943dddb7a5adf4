//! Database connection management and repositories.

mod associations;
mod base;
mod connections;
mod errors;
mod posts;
mod tags;
mod users;

pub mod entity;
pub mod schema;

pub use base::SeaOrmBaseRepository;
pub use connections::{DatabaseConfig, connect};
pub use posts::SeaOrmPostRepository;
pub use tags::SeaOrmTagRepository;
pub use users::SeaOrmUserRepository;

#[cfg(test)]
mod tests;
