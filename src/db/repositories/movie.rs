//! Storage gateway for movie records.

use crate::domain::MovieId;
use crate::entities::{movies, prelude::*};
use crate::models::{Movie, MovieInput, Page, PageRequest, SortDirection, SortField};
use anyhow::{Result, ensure};
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Select, Set,
};
use tracing::debug;

/// CRUD and lookup operations over the movie table.
///
/// Absence is never an error at this layer: lookups return `Option` or an
/// empty `Vec`, and writes report whether a row was touched.
#[async_trait]
pub trait MovieGateway: Send + Sync {
    /// Persists a new record and returns it with its assigned id.
    async fn insert(&self, input: MovieInput) -> Result<Movie>;

    async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>>;

    /// Every record, ordered by id.
    async fn get_all(&self) -> Result<Vec<Movie>>;

    async fn get_page(&self, request: &PageRequest) -> Result<Page<Movie>>;

    async fn exists_by_id(&self, id: MovieId) -> Result<bool>;

    /// Overwrites the stored row matching `movie.id`.
    ///
    /// Returns `false` when no such row exists; the record is never
    /// re-created.
    async fn update(&self, movie: &Movie) -> Result<bool>;

    async fn delete_by_id(&self, id: MovieId) -> Result<bool>;

    /// Case-sensitive equality on both title and release year.
    async fn find_by_title_and_release_year(&self, title: &str, year: i32)
    -> Result<Vec<Movie>>;

    /// Case-insensitive substring match on title.
    async fn find_by_title_containing(&self, fragment: &str) -> Result<Vec<Movie>>;

    async fn find_by_release_year(&self, year: i32) -> Result<Vec<Movie>>;

    async fn count(&self) -> Result<u64>;
}

pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: movies::Model) -> Movie {
        Movie {
            id: MovieId::new(m.id),
            title: m.title,
            genre: m.genre,
            release_year: m.release_year,
            rating: m.rating,
        }
    }

    const fn sort_column(field: SortField) -> movies::Column {
        match field {
            SortField::Id => movies::Column::Id,
            SortField::Title => movies::Column::Title,
            SortField::Genre => movies::Column::Genre,
            SortField::ReleaseYear => movies::Column::ReleaseYear,
            SortField::Rating => movies::Column::Rating,
        }
    }

    fn ordered(request: &PageRequest) -> Select<Movies> {
        let mut query = Movies::find();

        if let Some(sort) = request.sort {
            let order = match sort.direction {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            };
            query = query.order_by(Self::sort_column(sort.field), order);
        }

        // Tie-breaker so equal sort keys don't shuffle between pages
        query.order_by_asc(movies::Column::Id)
    }

    /// Row offset of the first record on the page, if it fits a SQL offset.
    fn page_offset(request: &PageRequest) -> Option<u64> {
        request
            .page
            .checked_mul(request.size)
            .filter(|offset| i64::try_from(*offset).is_ok())
    }

    fn fold_title(title: &str) -> String {
        title.to_lowercase()
    }

    fn escape_like(fragment: &str) -> String {
        let mut escaped = String::with_capacity(fragment.len());
        for c in fragment.chars() {
            if matches!(c, '%' | '_' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }
}

#[async_trait]
impl MovieGateway for MovieRepository {
    async fn insert(&self, input: MovieInput) -> Result<Movie> {
        let active_model = movies::ActiveModel {
            title_search: Set(Self::fold_title(&input.title)),
            title: Set(input.title),
            genre: Set(input.genre),
            release_year: Set(input.release_year),
            rating: Set(input.rating),
            ..Default::default()
        };

        let model = active_model.insert(&self.conn).await?;
        debug!(id = model.id, "Inserted movie");
        Ok(Self::map_model(model))
    }

    async fn get_by_id(&self, id: MovieId) -> Result<Option<Movie>> {
        let row = Movies::find_by_id(id.value()).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    async fn get_all(&self) -> Result<Vec<Movie>> {
        let rows = Movies::find()
            .order_by_asc(movies::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    async fn get_page(&self, request: &PageRequest) -> Result<Page<Movie>> {
        ensure!(request.size > 0, "page size must be greater than zero");
        ensure!(
            Self::page_offset(request).is_some(),
            "page {} with size {} is out of range",
            request.page,
            request.size
        );

        let paginator = Self::ordered(request).paginate(&self.conn, request.size);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(request.page).await?;

        let content = rows.into_iter().map(Self::map_model).collect();
        Ok(Page::new(content, request, total))
    }

    async fn exists_by_id(&self, id: MovieId) -> Result<bool> {
        let count = Movies::find_by_id(id.value()).count(&self.conn).await?;
        Ok(count > 0)
    }

    async fn update(&self, movie: &Movie) -> Result<bool> {
        let changes = movies::ActiveModel {
            title: Set(movie.title.clone()),
            title_search: Set(Self::fold_title(&movie.title)),
            genre: Set(movie.genre.clone()),
            release_year: Set(movie.release_year),
            rating: Set(movie.rating),
            ..Default::default()
        };

        let result = Movies::update_many()
            .set(changes)
            .filter(movies::Column::Id.eq(movie.id.value()))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_id(&self, id: MovieId) -> Result<bool> {
        let result = Movies::delete_by_id(id.value()).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    async fn find_by_title_and_release_year(
        &self,
        title: &str,
        year: i32,
    ) -> Result<Vec<Movie>> {
        let rows = Movies::find()
            .filter(movies::Column::Title.eq(title))
            .filter(movies::Column::ReleaseYear.eq(year))
            .order_by_asc(movies::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    async fn find_by_title_containing(&self, fragment: &str) -> Result<Vec<Movie>> {
        let pattern = format!("%{}%", Self::escape_like(&Self::fold_title(fragment)));

        // SQLite's lower() only folds ASCII, so match the column folded on write
        let rows = Movies::find()
            .filter(
                Expr::col(movies::Column::TitleSearch).like(LikeExpr::new(pattern).escape('\\')),
            )
            .order_by_asc(movies::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    async fn find_by_release_year(&self, year: i32) -> Result<Vec<Movie>> {
        let rows = Movies::find()
            .filter(movies::Column::ReleaseYear.eq(year))
            .order_by_asc(movies::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(Movies::find().count(&self.conn).await?)
    }
}
