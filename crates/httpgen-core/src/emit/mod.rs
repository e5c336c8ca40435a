pub mod request;
pub mod variables;

use crate::parse::operation::ApiOperation;
use request::RequestRenderer;
use variables::collect_variables;

/// Emit the content of one directory's `.http` file: variable declarations,
/// a blank line, then every request block separated by blank lines.
///
/// The variable header and its separator are left out when no operation
/// has path parameters.
pub fn emit_http_file(operations: &[ApiOperation<'_>], renderer: &RequestRenderer<'_>) -> String {
    let variables = collect_variables(operations);
    let requests: Vec<String> = operations.iter().map(|op| renderer.render(op)).collect();
    let requests = requests.join("\n");

    if variables.is_empty() {
        requests
    } else {
        format!("{}\n\n{}", variables.join("\n"), requests)
    }
}
