//! Handlers for `/api/movies`.
//!
//! Each handler parses its inputs, makes one service call, and picks the
//! status code. Errors flow through [`ApiError`]'s `IntoResponse`.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::validation::{validate_page_request, validate_search_fragment};
use super::{ApiError, AppState, ListParams, SearchParams, TitleSearchParams};
use crate::domain::MovieId;
use crate::models::{Movie, MovieInput};

/// `POST /api/movies`
pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let Json(input) = payload?;
    let movie = state.movies().create(input).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// `GET /api/movies`
///
/// A bare array without paging parameters, a page envelope with any of
/// `page`, `size` or `sort`.
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;

    if !params.is_paged() {
        let movies = state.movies().list_all().await?;
        return Ok(Json(movies).into_response());
    }

    let request = validate_page_request(&params, &state.config().pagination)?;
    let page = state.movies().list_page(request).await?;
    Ok(Json(page).into_response())
}

/// `GET /api/movies/{movie_id}`
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    movie_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Movie>, ApiError> {
    let Path(id) = movie_id?;
    let movie = state.movies().get_by_id(MovieId::new(id)).await?;
    Ok(Json(movie))
}

/// `PUT /api/movies/{movie_id}`
///
/// Responds with the record as stored after the merge.
pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    movie_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> Result<Json<Movie>, ApiError> {
    let Path(id) = movie_id?;
    let Json(patch) = payload?;
    let movie = state
        .movies()
        .update_by_id(MovieId::new(id), patch)
        .await?;
    Ok(Json(movie))
}

/// `DELETE /api/movies/{movie_id}`
///
/// 204 when removed, 404 with an empty body when there was nothing to remove.
pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    movie_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = movie_id?;

    if state.movies().delete_by_id(MovieId::new(id)).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// `GET /api/movies/search?title=..&year=..`
pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let Query(params) = params?;
    let movies = state.movies().search(&params.title, params.year).await?;
    Ok(Json(movies))
}

/// `GET /api/movies/search/title?q=..`
pub async fn search_by_title(
    State(state): State<Arc<AppState>>,
    params: Result<Query<TitleSearchParams>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let Query(params) = params?;
    let fragment = validate_search_fragment(&params.q)?;
    let movies = state.movies().search_title(fragment).await?;
    Ok(Json(movies))
}

/// `GET /api/movies/year/{year}`
pub async fn list_by_year(
    State(state): State<Arc<AppState>>,
    year: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let Path(year) = year?;
    let movies = state.movies().list_by_year(year).await?;
    Ok(Json(movies))
}
