use std::collections::BTreeSet;
use std::sync::LazyLock;

use heck::ToShoutySnakeCase;
use regex::Regex;

use crate::parse::operation::ApiOperation;

/// Matches `{name}` path parameters in a path template.
pub(crate) static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("path parameter pattern should be valid"));

/// Names of the `{param}` placeholders in `path`, in order of appearance.
pub fn path_params(path: &str) -> Vec<&str> {
    PATH_PARAM
        .captures_iter(path)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Placeholder name shown for a path parameter: `orgSlug` → `ORG_SLUG`.
pub fn display_name(param: &str) -> String {
    if param == "id" {
        return "ID".to_string();
    }
    param.to_shouty_snake_case()
}

/// One `@name = {{DISPLAY_NAME}}` line per distinct path parameter across
/// `operations`, sorted.
pub fn collect_variables(operations: &[ApiOperation<'_>]) -> Vec<String> {
    let lines: BTreeSet<String> = operations
        .iter()
        .flat_map(|op| path_params(op.url))
        .map(|param| format!("@{param} = {{{{{}}}}}", display_name(param)))
        .collect();
    lines.into_iter().collect()
}
