use super::{build_input, open_service, print_movie};
use crate::cli::MovieFields;
use crate::config::Config;
use crate::domain::MovieId;
use crate::services::{MovieError, MovieService};

pub async fn cmd_update_movie(
    config: &Config,
    id: i64,
    title: String,
    fields: MovieFields,
) -> anyhow::Result<()> {
    let service = open_service(config).await?;

    match service
        .update_by_id(MovieId::new(id), build_input(title, fields))
        .await
    {
        Ok(movie) => {
            println!("✓ Updated:");
            print_movie(&movie);
        }
        Err(MovieError::NotFound(_)) => println!("Movie with ID {id} not found."),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
