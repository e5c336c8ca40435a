use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level project configuration loaded from `.httpgen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpGenConfig {
    /// OpenAPI document produced by the spec compiler.
    pub input: PathBuf,
    /// Root of the source tree holding declaration files.
    pub source_dir: PathBuf,
    pub declaration_file: String,
    pub output_file: String,
    /// Textual marker preceding each route literal, e.g. `@route("/orgs")`.
    pub route_marker: String,
    /// Leading path segment(s) present in the spec but absent from declarations.
    pub api_prefix: String,
    pub base_url_variable: String,
}

impl Default for HttpGenConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("tsp-output/schema/openapi.1.0.0.yaml"),
            source_dir: PathBuf::from("src"),
            declaration_file: "operations.tsp".to_string(),
            output_file: "operations.http".to_string(),
            route_marker: "@route".to_string(),
            api_prefix: "/api".to_string(),
            base_url_variable: "BASE_URL".to_string(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".httpgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<HttpGenConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: HttpGenConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# httpgen configuration
input: tsp-output/schema/openapi.1.0.0.yaml
source_dir: src

declaration_file: operations.tsp   # file scanned for route literals in each directory
output_file: operations.http       # written next to each matched declaration file
route_marker: "@route"             # routes are read from <marker>("...")

api_prefix: /api                   # stripped from spec paths before matching
base_url_variable: BASE_URL
"#
}
