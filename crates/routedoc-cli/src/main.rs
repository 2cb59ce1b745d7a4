use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use routedoc_core::config::{self, CONFIG_FILE_NAME, DocsConfig};
use routedoc_core::reduce::reduce;
use routedoc_core::tree::RouteRecord;
use routedoc_core::{Format, RouteDump, run_pass};

#[derive(Parser)]
#[command(name = "routedoc", about = "OpenAPI document generator for route trees", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the OpenAPI document and merge it into the persisted one
    Generate {
        /// Route dump produced by the route extractor (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Config file (defaults to .routedoc.yaml in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Document format (json or yaml), overriding the config
        #[arg(long)]
        format: Option<Format>,

        /// Output directory, overriding the config
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the reduced route table of a route dump
    Inspect {
        /// Route dump produced by the route extractor
        #[arg(short, long)]
        input: PathBuf,

        /// Output format (json or yaml)
        #[arg(long, default_value = "yaml")]
        format: Format,
    },

    /// Initialize a new routedoc configuration
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
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            config,
            format,
            output,
        } => cmd_generate(input, config, format, output),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "routedoc", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Load the config file, falling back to defaults when it does not exist.
fn load_config(path: Option<PathBuf>) -> Result<DocsConfig> {
    let explicit = path.is_some();
    let path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    match config::load_config(&path)? {
        Some(cfg) => Ok(cfg),
        None if explicit => anyhow::bail!("config file {} not found", path.display()),
        None => Ok(DocsConfig::default()),
    }
}

fn load_dump(path: &Path) -> Result<RouteDump> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(|e| e.parse::<Format>().ok())
        .unwrap_or_default();

    RouteDump::from_text(&content, format)
        .with_context(|| format!("failed to parse route dump {}", path.display()))
}

fn cmd_generate(
    input: PathBuf,
    config: Option<PathBuf>,
    format: Option<Format>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut cfg = load_config(config)?;
    if let Some(format) = format {
        cfg.format = format;
    }
    if let Some(output) = output {
        cfg.output.file_path = Some(output);
    }

    let dump = load_dump(&input)?;
    eprintln!(
        "Generating from {} ({} entry point(s), {} schema(s))",
        input.display(),
        dump.entries.len(),
        dump.schemas.len()
    );

    match run_pass(&dump, &cfg)? {
        Some(path) => eprintln!("  wrote {}", path.display()),
        None => eprintln!("Generation is disabled in the config, nothing written."),
    }
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: Format) -> Result<()> {
    let dump = load_dump(&input)?;

    let mut routes: Vec<RouteRecord> = Vec::new();
    for entry in &dump.entries {
        routes.extend(reduce(entry)?);
    }

    match format {
        Format::Yaml => {
            let yaml = serde_yaml_ng::to_string(&routes)?;
            print!("{}", yaml);
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(&routes)?;
            println!("{}", json);
        }
    }

    log::debug!("inspected {} route(s)", routes.len());
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
