//! Default implementation of the `MovieService` trait.

use crate::db::MovieGateway;
use crate::domain::MovieId;
use crate::models::{Movie, MovieInput, Page, PageRequest};
use crate::services::movie_service::{MovieError, MovieService};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub struct DefaultMovieService {
    gateway: Arc<dyn MovieGateway>,
}

impl DefaultMovieService {
    #[must_use]
    pub const fn new(gateway: Arc<dyn MovieGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl MovieService for DefaultMovieService {
    async fn create(&self, input: MovieInput) -> Result<Movie, MovieError> {
        let movie = self.gateway.insert(input).await?;
        metrics::counter!("movies_created_total").increment(1);
        info!(id = %movie.id, title = %movie.title, "Created movie");
        Ok(movie)
    }

    async fn list_all(&self) -> Result<Vec<Movie>, MovieError> {
        Ok(self.gateway.get_all().await?)
    }

    async fn list_page(&self, request: PageRequest) -> Result<Page<Movie>, MovieError> {
        Ok(self.gateway.get_page(&request).await?)
    }

    async fn get_by_id(&self, id: MovieId) -> Result<Movie, MovieError> {
        self.gateway
            .get_by_id(id)
            .await?
            .ok_or(MovieError::NotFound(id))
    }

    async fn update_by_id(&self, id: MovieId, patch: MovieInput) -> Result<Movie, MovieError> {
        let mut current = self.get_by_id(id).await?;
        current.apply(patch);

        if !self.gateway.update(&current).await? {
            // Deleted between the read and the write
            warn!(%id, "Movie disappeared during update");
            return Err(MovieError::NotFound(id));
        }

        metrics::counter!("movies_updated_total").increment(1);
        info!(%id, "Updated movie");
        Ok(current)
    }

    async fn search(&self, title: &str, year: i32) -> Result<Vec<Movie>, MovieError> {
        Ok(self
            .gateway
            .find_by_title_and_release_year(title, year)
            .await?)
    }

    async fn search_title(&self, fragment: &str) -> Result<Vec<Movie>, MovieError> {
        Ok(self.gateway.find_by_title_containing(fragment).await?)
    }

    async fn list_by_year(&self, year: i32) -> Result<Vec<Movie>, MovieError> {
        Ok(self.gateway.find_by_release_year(year).await?)
    }

    async fn delete_by_id(&self, id: MovieId) -> Result<bool, MovieError> {
        if !self.gateway.exists_by_id(id).await? {
            return Ok(false);
        }

        self.gateway.delete_by_id(id).await?;
        metrics::counter!("movies_deleted_total").increment(1);
        info!(%id, "Deleted movie");
        Ok(true)
    }

    async fn count(&self) -> Result<u64, MovieError> {
        Ok(self.gateway.count().await?)
    }
}
