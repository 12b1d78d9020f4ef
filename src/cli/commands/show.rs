use super::{open_service, print_movie};
use crate::config::Config;
use crate::domain::MovieId;
use crate::services::{MovieError, MovieService};

pub async fn cmd_show_movie(config: &Config, id: i64) -> anyhow::Result<()> {
    let service = open_service(config).await?;

    match service.get_by_id(MovieId::new(id)).await {
        Ok(movie) => print_movie(&movie),
        Err(MovieError::NotFound(_)) => {
            println!("Movie with ID {id} not found.");
            println!("Use 'reelbox list' to see movie IDs.");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
