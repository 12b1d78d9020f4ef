use super::{ApiError, ListParams};
use crate::config::PaginationConfig;
use crate::models::{PageRequest, Sort};

/// Turns listing query parameters into a page request, filling defaults.
pub fn validate_page_request(
    params: &ListParams,
    limits: &PaginationConfig,
) -> Result<PageRequest, ApiError> {
    let page = params.page.unwrap_or(0);
    let size = params.size.unwrap_or(limits.default_page_size);

    if !(1..=limits.max_page_size).contains(&size) {
        return Err(ApiError::bad_request(format!(
            "Invalid page size: {size}. Size must be between 1 and {}",
            limits.max_page_size
        )));
    }

    // Keep offset arithmetic in range for the query builder
    if page.checked_mul(size).is_none_or(|offset| offset > i64::MAX as u64) {
        return Err(ApiError::bad_request(format!("Invalid page index: {page}")));
    }

    let mut request = PageRequest::new(page, size);

    if let Some(sort) = params.sort.as_deref().filter(|s| !s.trim().is_empty()) {
        let sort: Sort = sort
            .parse()
            .map_err(|e| ApiError::bad_request(format!("Invalid sort: {e}")))?;
        request = request.sorted(sort);
    }

    Ok(request)
}

pub fn validate_search_fragment(query: &str) -> Result<&str, ApiError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request("Search query cannot be empty"));
    }
    Ok(trimmed)
}
