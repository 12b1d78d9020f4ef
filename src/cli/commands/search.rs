use super::{open_service, print_movie};
use crate::config::Config;
use crate::services::MovieService;

pub async fn cmd_search_movies(config: &Config, title: &str, year: i32) -> anyhow::Result<()> {
    let service = open_service(config).await?;
    let movies = service.search(title, year).await?;

    if movies.is_empty() {
        println!("No movies titled '{title}' from {year}.");
        return Ok(());
    }

    println!("Found {} movies:", movies.len());
    for movie in &movies {
        print_movie(movie);
    }

    Ok(())
}
