//! Favorite source domain module.
//!
//! Contains the favorite source entity, repository trait, and the creation
//! command with its validation errors.

mod command;
mod entity;
mod repository;

pub use command::{CreateFavoriteSourceCommand, CreateFavoriteSourceError};
pub use entity::FavoriteSource;
pub use repository::FavoriteSourceRepository;
