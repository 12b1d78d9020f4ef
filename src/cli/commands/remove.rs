use super::open_service;
use crate::config::Config;
use crate::domain::MovieId;
use crate::services::{MovieError, MovieService};

pub async fn cmd_remove_movie(config: &Config, id: i64) -> anyhow::Result<()> {
    let service = open_service(config).await?;
    let id = MovieId::new(id);

    let movie = match service.get_by_id(id).await {
        Ok(movie) => movie,
        Err(MovieError::NotFound(_)) => {
            println!("Movie with ID {id} not found.");
            println!("Use 'reelbox list' to see movie IDs.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("Remove '{}' (ID: {})?", movie.title, movie.id);
    println!("Enter 'y' to confirm, anything else to cancel:");

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if !input.trim().eq_ignore_ascii_case("y") {
        println!("Cancelled.");
        return Ok(());
    }

    if service.delete_by_id(id).await? {
        println!("✓ Removed: {}", movie.title);
    } else {
        println!("Movie was already removed.");
    }

    Ok(())
}
