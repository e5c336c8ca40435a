use regex::Regex;

use crate::error::IndexError;

/// Best-effort literal scan for route patterns in a declaration file.
///
/// Finds every `<marker>("<route>")` occurrence in the raw text, e.g.
/// `@route("/orgs/{slug}/forms")`. This is not a parser: there is no comment
/// stripping and no nesting awareness, so a commented-out declaration is
/// still extracted and a route literal split across lines is missed.
#[derive(Debug, Clone)]
pub struct RouteExtractor {
    pattern: Regex,
}

impl RouteExtractor {
    pub fn new(marker: &str) -> Result<Self, IndexError> {
        let pattern = Regex::new(&format!(r#"{}\("([^"]+)"\)"#, regex::escape(marker)))?;
        Ok(Self { pattern })
    }

    /// Route literals in order of appearance, duplicates included.
    pub fn extract(&self, content: &str) -> Vec<String> {
        self.pattern
            .captures_iter(content)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
