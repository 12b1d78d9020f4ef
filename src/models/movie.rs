use serde::{Deserialize, Serialize};

use crate::domain::MovieId;

/// A persisted movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub rating: Option<f64>,
}

/// The mutable fields of a movie, as supplied on create and update.
///
/// Any `id` in an incoming payload is ignored: ids are owned by storage.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    pub title: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl MovieInput {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub const fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = Some(year);
        self
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }
}

impl Movie {
    /// Overwrites every mutable field from `input`. The id is left untouched.
    pub fn apply(&mut self, input: MovieInput) {
        self.title = input.title;
        self.genre = input.genre;
        self.release_year = input.release_year;
        self.rating = input.rating;
    }
}
