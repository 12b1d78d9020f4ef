use super::{build_input, open_service, print_movie};
use crate::cli::MovieFields;
use crate::config::Config;
use crate::services::MovieService;

pub async fn cmd_add_movie(config: &Config, title: String, fields: MovieFields) -> anyhow::Result<()> {
    let service = open_service(config).await?;
    let movie = service.create(build_input(title, fields)).await?;

    println!("✓ Added:");
    print_movie(&movie);
    Ok(())
}
