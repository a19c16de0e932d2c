//! Central configuration constants for the backend address and list paging.

/// Environment variable that overrides the backend base address.
pub const API_BASE_URL_ENV: &str = "STAFFING_API_BASE_URL";

/// Base address used when nothing else is configured (local development backend).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Default page size for the paginated employee listing.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Minimum allowed page size.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Maximum allowed page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Convenience function to clamp a page size into the allowed range.
pub fn clamp_page_size(v: u32) -> u32 {
    v.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

/// Pick the configured base address, falling back to [`DEFAULT_API_BASE_URL`]
/// when the value is missing or blank.
pub fn resolve_base_url(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
}

/// Base address from the process environment.
pub fn api_base_url() -> String {
    resolve_base_url(std::env::var(API_BASE_URL_ENV).ok().as_deref())
}
