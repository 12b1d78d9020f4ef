mod add;
mod list;
mod remove;
mod search;
mod show;
mod update;

pub use add::cmd_add_movie;
pub use list::cmd_list_movies;
pub use remove::cmd_remove_movie;
pub use search::cmd_search_movies;
pub use show::cmd_show_movie;
pub use update::cmd_update_movie;

use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::models::{Movie, MovieInput};
use crate::services::DefaultMovieService;

use super::MovieFields;

async fn open_service(config: &Config) -> anyhow::Result<DefaultMovieService> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    Ok(DefaultMovieService::new(Arc::new(store.movies())))
}

fn build_input(title: String, fields: MovieFields) -> MovieInput {
    MovieInput {
        title,
        genre: fields.genre,
        release_year: fields.year,
        rating: fields.rating,
    }
}

fn print_movie(movie: &Movie) {
    let year = movie
        .release_year
        .map_or_else(|| "?".to_string(), |y| y.to_string());

    println!("[{}] {} ({year})", movie.id, movie.title);

    let genre = movie.genre.as_deref().unwrap_or("-");
    let rating = movie
        .rating
        .map_or_else(|| "-".to_string(), |r| format!("{r:.1}"));
    println!("  Genre: {genre} | Rating: {rating}");
}
