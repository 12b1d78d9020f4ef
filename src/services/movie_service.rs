//! Domain service for movie records.
//!
//! Sits between the HTTP handlers and the storage gateway. It is the one
//! place where a missing record turns into an error, and where an update
//! payload is merged onto the stored record.

use crate::domain::MovieId;
use crate::models::{Movie, MovieInput, Page, PageRequest};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("Movie not found exception for id:{0}")]
    NotFound(MovieId),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for MovieError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for MovieError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait MovieService: Send + Sync {
    /// Stores a new record. No validation beyond what deserialization did.
    async fn create(&self, input: MovieInput) -> Result<Movie, MovieError>;

    async fn list_all(&self) -> Result<Vec<Movie>, MovieError>;

    async fn list_page(&self, request: PageRequest) -> Result<Page<Movie>, MovieError>;

    /// Fails with [`MovieError::NotFound`] when no record has this id.
    async fn get_by_id(&self, id: MovieId) -> Result<Movie, MovieError>;

    /// Replaces title, genre, release year and rating of an existing record
    /// and returns the stored result.
    async fn update_by_id(&self, id: MovieId, patch: MovieInput) -> Result<Movie, MovieError>;

    /// Exact title and release year match. An empty result is not an error.
    async fn search(&self, title: &str, year: i32) -> Result<Vec<Movie>, MovieError>;

    async fn search_title(&self, fragment: &str) -> Result<Vec<Movie>, MovieError>;

    async fn list_by_year(&self, year: i32) -> Result<Vec<Movie>, MovieError>;

    /// Returns `false` when the record did not exist.
    async fn delete_by_id(&self, id: MovieId) -> Result<bool, MovieError>;

    async fn count(&self) -> Result<u64, MovieError>;
}
