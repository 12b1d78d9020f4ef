use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{DefaultMovieService, MovieService};

/// Long-lived components, wired once at startup.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub movie_service: Arc<dyn MovieService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    /// Builds the service graph on top of an already connected store.
    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let gateway = Arc::new(store.movies());
        let movie_service = Arc::new(DefaultMovieService::new(gateway)) as Arc<dyn MovieService>;

        Self {
            config: Arc::new(config),
            store,
            movie_service,
        }
    }
}
