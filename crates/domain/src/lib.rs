//! Domain layer for the CatchUp news service.
//!
//! This crate contains the domain model for favorite news sources. It is
//! independent of external concerns like databases or web frameworks.
//!
//! # Module Structure
//!
//! - **Entity**: core business object with identity
//! - **Repository**: abstract interface for data persistence (trait only)
//! - **Command**: creation input with its own validation errors

pub mod error;
pub mod favorite_source;

pub use error::{DomainError, DomainResult};
pub use favorite_source::{
    CreateFavoriteSourceCommand, CreateFavoriteSourceError, FavoriteSource,
    FavoriteSourceRepository,
};
