//! Spec → per-directory `.http` files.
//!
//! Loads the spec, indexes the source tree for declaration files, routes each
//! operation to the directory owning the most specific matching route and
//! writes one request file per directory. Unmatched operations and vanished
//! directories are warned about and skipped; only a missing spec is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, info, warn};

use crate::GeneratedFile;
use crate::config::HttpGenConfig;
use crate::emit::emit_http_file;
use crate::emit::request::RequestRenderer;
use crate::error::GenerateError;
use crate::parse;
use crate::parse::operation::ApiOperation;
use crate::parse::spec::SpecDocument;
use crate::routes::{DirectoryIndex, RouteExtractor, RouteMatcher, strip_api_prefix};

/// Operations grouped by the directory key they were routed to.
#[derive(Debug, Clone, Default)]
pub struct OperationGroups<'a> {
    /// Insertion order follows the first operation routed to each directory.
    pub groups: IndexMap<String, Vec<ApiOperation<'a>>>,
    pub unmatched: Vec<ApiOperation<'a>>,
}

/// What a run produced and what it skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub files: Vec<GeneratedFile>,
    /// `METHOD /path` for every operation without an owning directory.
    pub unmatched: Vec<String>,
    pub missing_directories: Vec<PathBuf>,
}

/// Read and parse the spec at `path`.
pub fn load_spec(path: &Path) -> Result<SpecDocument, GenerateError> {
    if !path.is_file() {
        return Err(GenerateError::SpecNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let extension = path.extension().and_then(|e| e.to_str());
    Ok(parse::from_extension(&content, extension)?)
}

/// Index `config.source_dir` for declaration files.
pub fn scan_source_tree(config: &HttpGenConfig) -> Result<DirectoryIndex, GenerateError> {
    let extractor = RouteExtractor::new(&config.route_marker)?;
    let index = DirectoryIndex::scan(&config.source_dir, &config.declaration_file, &extractor)?;
    info!(
        "found {} directories with {}",
        index.len(),
        config.declaration_file
    );
    Ok(index)
}

/// Route every operation to its owning directory.
///
/// The API prefix is stripped only for matching.
pub fn group_operations<'a>(
    operations: Vec<ApiOperation<'a>>,
    matcher: &RouteMatcher,
    api_prefix: &str,
) -> OperationGroups<'a> {
    let mut grouped = OperationGroups::default();

    for op in operations {
        let path = strip_api_prefix(op.url, api_prefix);
        match matcher.find(path) {
            Some(directory) => grouped
                .groups
                .entry(directory.to_string())
                .or_default()
                .push(op),
            None => {
                warn!("no matching directory for path: {} {}", op.method, op.url);
                grouped.unmatched.push(op);
            }
        }
    }

    grouped
}

/// Build every file a run would write, without touching the filesystem.
pub fn plan(
    document: &SpecDocument,
    index: &DirectoryIndex,
    config: &HttpGenConfig,
) -> Result<GenerateReport, GenerateError> {
    let matcher = RouteMatcher::new(index)?;
    let grouped = group_operations(document.spec.operations(), &matcher, &config.api_prefix);
    let renderer = RequestRenderer::new(document, &config.api_prefix, &config.base_url_variable);

    let mut report = GenerateReport {
        unmatched: grouped
            .unmatched
            .iter()
            .map(|op| format!("{} {}", op.method, op.url))
            .collect(),
        ..GenerateReport::default()
    };

    for (directory, operations) in &grouped.groups {
        let target = match index.get(directory) {
            Some(entry) => entry.directory.clone(),
            None => config.source_dir.join(directory),
        };

        if !target.is_dir() {
            warn!("directory does not exist: {}", target.display());
            report.missing_directories.push(target);
            continue;
        }

        debug!("{directory}: {} operations", operations.len());
        report.files.push(GeneratedFile {
            directory: directory.clone(),
            path: target.join(&config.output_file),
            content: emit_http_file(operations, &renderer),
            operation_count: operations.len(),
        });
    }

    Ok(report)
}

/// Write planned files, overwriting previous output.
pub fn write_files(files: &[GeneratedFile]) -> Result<(), GenerateError> {
    for file in files {
        fs::write(&file.path, &file.content).map_err(|source| GenerateError::Write {
            path: file.path.clone(),
            source,
        })?;
        info!("generated {}", file.path.display());
    }
    Ok(())
}

/// Full run: load the spec, index the source tree, plan and write.
///
/// With `dry_run` the plan is returned without writing anything.
pub fn generate(config: &HttpGenConfig, dry_run: bool) -> Result<GenerateReport, GenerateError> {
    let document = load_spec(&config.input)?;
    let index = scan_source_tree(config)?;
    let report = plan(&document, &index, config)?;

    if !dry_run {
        write_files(&report.files)?;
    }

    Ok(report)
}
