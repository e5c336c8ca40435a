use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use log::debug;

use httpgen_core::config::{self, CONFIG_FILE_NAME, HttpGenConfig};
use httpgen_core::generate::{self, GenerateReport};

#[derive(Parser)]
#[command(
    name = "httpgen",
    about = "Generate .http request files from an OpenAPI spec",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one .http file per directory that declares routes
    Generate {
        /// Path to the OpenAPI spec file (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Source tree holding the declaration files
        #[arg(short, long)]
        source_dir: Option<PathBuf>,

        /// Show what would be written without writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// List directories with declaration files and the routes they declare
    Routes {
        /// Source tree holding the declaration files
        #[arg(short, long)]
        source_dir: Option<PathBuf>,
    },

    /// Initialize a new httpgen configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            source_dir,
            dry_run,
        } => cmd_generate(input, source_dir, dry_run),

        Commands::Routes { source_dir } => cmd_routes(source_dir),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "httpgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load the project config from the current directory, applying CLI overrides.
fn load_config(input: Option<PathBuf>, source_dir: Option<PathBuf>) -> Result<HttpGenConfig> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let mut cfg = config::load_config(&config_path)
        .map_err(|e| anyhow::anyhow!(e))?
        .unwrap_or_default();
    debug!("loaded config: {cfg:?}");

    if let Some(input) = input {
        cfg.input = input;
    }
    if let Some(source_dir) = source_dir {
        cfg.source_dir = source_dir;
    }
    Ok(cfg)
}

fn cmd_generate(input: Option<PathBuf>, source_dir: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let cfg = load_config(input, source_dir)?;

    eprintln!(
        "Generating .http files from {} into {}",
        cfg.input.display(),
        cfg.source_dir.display()
    );
    let report = generate::generate(&cfg, dry_run)
        .with_context(|| format!("failed to generate from {}", cfg.input.display()))?;

    print_report(&report, dry_run);
    Ok(())
}

fn print_report(report: &GenerateReport, dry_run: bool) {
    let verb = if dry_run { "would write" } else { "wrote" };
    for file in &report.files {
        eprintln!(
            "  {verb} {} ({} requests)",
            file.path.display(),
            file.operation_count
        );
    }

    if !report.unmatched.is_empty() {
        eprintln!(
            "Skipped {} operations with no matching directory",
            report.unmatched.len()
        );
    }
    if !report.missing_directories.is_empty() {
        eprintln!(
            "Skipped {} missing directories",
            report.missing_directories.len()
        );
    }

    eprintln!("Generated {} files", report.files.len());
}

fn cmd_routes(source_dir: Option<PathBuf>) -> Result<()> {
    let cfg = load_config(None, source_dir)?;
    let index = generate::scan_source_tree(&cfg)
        .with_context(|| format!("failed to scan {}", cfg.source_dir.display()))?;

    eprintln!(
        "Found {} directories with {}",
        index.len(),
        cfg.declaration_file
    );
    for (directory, entry) in index.iter() {
        println!("{directory}: {}", entry.routes.join(", "));
    }
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
