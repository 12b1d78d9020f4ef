//! List movies command handler

use super::{open_service, print_movie};
use crate::config::Config;
use crate::models::{PageRequest, Sort};
use crate::services::MovieService;

pub async fn cmd_list_movies(
    config: &Config,
    page: Option<u64>,
    size: Option<u64>,
    sort: Option<&str>,
) -> anyhow::Result<()> {
    let service = open_service(config).await?;

    if page.is_none() && size.is_none() && sort.is_none() {
        let movies = service.list_all().await?;

        if movies.is_empty() {
            println!("No movies stored.");
            println!();
            println!("Add one with: reelbox add \"Title\" --year 2010");
            return Ok(());
        }

        println!("Movies ({} total)", movies.len());
        println!("{:-<70}", "");
        for movie in &movies {
            print_movie(movie);
        }
        return Ok(());
    }

    let size = size.unwrap_or(config.pagination.default_page_size);
    if !(1..=config.pagination.max_page_size).contains(&size) {
        anyhow::bail!(
            "Page size must be between 1 and {}",
            config.pagination.max_page_size
        );
    }

    let mut request = PageRequest::new(page.unwrap_or(0), size);
    if let Some(sort) = sort {
        request = request.sorted(sort.parse::<Sort>()?);
    }

    let result = service.list_page(request).await?;

    println!(
        "Page {} of {} ({} movies total)",
        result.number + 1,
        result.total_pages.max(1),
        result.total_elements
    );
    println!("{:-<70}", "");
    for movie in &result.content {
        print_movie(movie);
    }

    Ok(())
}
