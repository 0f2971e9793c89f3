//! Central configuration constants for endpoints and input limits.

/// Endpoint handling post generation requests.
pub const DEFAULT_POST_ENDPOINT: &str =
    "https://functions.poehali.dev/c3a4f7d2-9b1e-4e83-a2d5-7f4f2a60c911";

/// Endpoint handling image generation requests.
pub const DEFAULT_IMAGE_ENDPOINT: &str =
    "https://functions.poehali.dev/845a219c-f5be-4bfa-b613-1242db9bc98f";

/// Dual-purpose endpoint handling topics and document generation,
/// distinguished by the `mode` field of the request body.
pub const DEFAULT_DOCUMENT_ENDPOINT: &str =
    "https://functions.poehali.dev/338a4621-b5c0-4b9c-be04-0ed58cd55020";

/// Environment variables overriding the endpoints above.
pub const POST_ENDPOINT_ENV: &str = "ATELIER_POST_URL";
pub const IMAGE_ENDPOINT_ENV: &str = "ATELIER_IMAGE_URL";
pub const DOCUMENT_ENDPOINT_ENV: &str = "ATELIER_DOCUMENT_URL";

/// Minimum allowed document page count.
pub const MIN_PAGES: u32 = 1;

/// Maximum allowed document page count.
pub const MAX_PAGES: u32 = 100;

/// Default document page count offered by the form.
pub const DEFAULT_PAGES: u32 = 10;

/// Total request timeout for generation calls (the remote model can be slow).
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Maximum number of subject characters carried into an exported file name.
pub const EXPORT_SLUG_CHARS: usize = 30;

/// Convenience function to clamp a page count into allowed range.
/// Values at or below zero become [`MIN_PAGES`].
pub fn clamp_pages(v: i64) -> u32 {
    if v <= 0 {
        return MIN_PAGES;
    }
    (v as u64).min(MAX_PAGES as u64).max(MIN_PAGES as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pages_enforces_closed_range() {
        assert_eq!(clamp_pages(0), 1);
        assert_eq!(clamp_pages(-5), 1);
        assert_eq!(clamp_pages(1), 1);
        assert_eq!(clamp_pages(42), 42);
        assert_eq!(clamp_pages(100), 100);
        assert_eq!(clamp_pages(500), 100);
    }
}
