use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope for the operational endpoints under `/api/system`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Body written for every [`super::ApiError`].
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub sort: Option<String>,
}

impl ListParams {
    /// Any paging parameter switches the response to a page envelope.
    #[must_use]
    pub const fn is_paged(&self) -> bool {
        self.page.is_some() || self.size.is_some() || self.sort.is_some()
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: String,
    pub year: i32,
}

#[derive(Debug, Deserialize)]
pub struct TitleSearchParams {
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadinessDto {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize)]
pub struct ReadinessChecks {
    pub database: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusDto {
    pub version: String,
    pub uptime: u64,
    pub movie_count: u64,
}
