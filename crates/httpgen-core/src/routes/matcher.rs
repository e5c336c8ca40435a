use log::debug;
use regex::Regex;

use super::index::DirectoryIndex;
use crate::error::IndexError;

/// A declared route compiled to an anchored prefix pattern.
#[derive(Debug, Clone)]
struct CompiledRoute {
    directory: String,
    route: String,
    pattern: Regex,
}

/// Picks the directory that owns a spec path.
///
/// Every `{param}` segment of a declared route matches exactly one non-empty
/// path segment; the route is anchored at the start of the path but need not
/// consume all of it. Among matching routes the longest declared route string
/// wins. Equal lengths resolve to the lexicographically smallest directory key.
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    routes: Vec<CompiledRoute>,
}

impl RouteMatcher {
    pub fn new(index: &DirectoryIndex) -> Result<Self, IndexError> {
        let mut routes = Vec::new();
        for (directory, entry) in index.iter() {
            for route in &entry.routes {
                routes.push(CompiledRoute {
                    directory: directory.to_string(),
                    route: route.clone(),
                    pattern: compile_route(route)?,
                });
            }
        }
        Ok(Self { routes })
    }

    /// Directory key owning `path`, or `None` when no declared route matches.
    pub fn find(&self, path: &str) -> Option<&str> {
        let mut best: Option<&CompiledRoute> = None;

        for candidate in &self.routes {
            if !candidate.pattern.is_match(path) {
                continue;
            }
            let better = match best {
                None => true,
                Some(current) => {
                    candidate.route.len() > current.route.len()
                        || (candidate.route.len() == current.route.len()
                            && candidate.directory < current.directory)
                }
            };
            if better {
                best = Some(candidate);
            }
        }

        if let Some(found) = best {
            debug!("{path} -> {} (via {})", found.directory, found.route);
        }
        best.map(|r| r.directory.as_str())
    }
}

/// `/orgs/{slug}/forms` becomes `^/orgs/[^/]+/forms`.
fn compile_route(route: &str) -> Result<Regex, regex::Error> {
    let mut pattern = String::from("^");
    let mut rest = route;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        pattern.push_str(&regex::escape(&rest[..open]));
        if close > open + 1 {
            pattern.push_str("[^/]+");
        } else {
            pattern.push_str(&regex::escape("{}"));
        }
        rest = &rest[close + 1..];
    }
    pattern.push_str(&regex::escape(rest));

    Regex::new(&pattern)
}
