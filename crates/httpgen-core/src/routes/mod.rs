//! Route ownership: which source directory declares which API paths.

pub mod extract;
pub mod index;
pub mod matcher;

pub use extract::RouteExtractor;
pub use index::{DirectoryEntry, DirectoryIndex};
pub use matcher::RouteMatcher;

/// Strip a leading API prefix such as `/api`, on segment boundaries only.
///
/// `/api/orgs` becomes `/orgs` and `/api` becomes the empty string, but
/// `/apikeys` is returned unchanged. An empty prefix strips nothing.
pub fn strip_api_prefix<'p>(path: &'p str, prefix: &str) -> &'p str {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return path;
    }
    match path.strip_prefix(prefix) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::strip_api_prefix;

    #[test]
    fn test_strip_api_prefix() {
        assert_eq!(strip_api_prefix("/api/orgs/{slug}", "/api"), "/orgs/{slug}");
        assert_eq!(strip_api_prefix("/api", "/api"), "");
        assert_eq!(strip_api_prefix("/apikeys", "/api"), "/apikeys");
        assert_eq!(strip_api_prefix("/orgs", "/api"), "/orgs");
        assert_eq!(strip_api_prefix("/api/orgs", "/api/"), "/orgs");
        assert_eq!(strip_api_prefix("/api/orgs", ""), "/api/orgs");
    }
}
