//! URL joining for documentation page addresses
//!
//! Page addresses are joined by plain string concatenation of the site
//! address and a relative path. Callers supply site addresses without a
//! trailing slash for predictable joining; config validation strips one.
//! Cache keys downstream are exact URL strings, so no normalization of
//! case, query strings or trailing slashes happens here.

/// Joins a site address and a page path into one absolute URL
///
/// Absolute `http(s)` paths are returned unchanged; anything else is
/// appended to the site address with a single separating slash.
///
/// # Examples
///
/// ```
/// use doxscout::urljoin::join_page;
///
/// assert_eq!(
///     join_page("https://docs.example.com", "annotated.html"),
///     "https://docs.example.com/annotated.html"
/// );
/// assert_eq!(
///     join_page("https://docs.example.com", "https://other.org/x.html"),
///     "https://other.org/x.html"
/// );
/// ```
pub fn join_page(site: &str, page: &str) -> String {
    if is_absolute(page) {
        return page.to_string();
    }
    format!("{}/{}", site, page.trim_start_matches('/'))
}

/// True if the path is already an absolute http(s) URL
pub fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Removes a single trailing slash from a site address
///
/// Applied once when a site address enters the system (config load, CLI
/// override) so the naive join never produces a doubled slash.
pub fn strip_trailing_slash(site: &str) -> &str {
    site.strip_suffix('/').unwrap_or(site)
}
