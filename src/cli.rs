//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands;
use stackver::config::Config;
use stackver::output::OutputMode;

/// stackver - Stack version parsing and compatibility checks
#[derive(Parser, Debug)]
#[command(
    name = "stackver",
    version,
    about = "Stack version parsing and compatibility checks",
    long_about = "Parse and compare stack versions, check them against supported ranges,\n\
                  and find the lowest version running across a set of workloads.\n\n\
                  Labels are ignored by every comparison."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.config/stackver/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a version string
    Parse {
        /// Version string, e.g. 7.10.0-SNAPSHOT
        version: String,
    },

    /// Compare two versions (labels are ignored)
    Compare {
        /// Left-hand version
        a: String,
        /// Right-hand version
        b: String,
    },

    /// Check a version against a component family's supported range
    Check {
        /// Family: apm-server, enterprise-search, kibana, beat, agent
        family: String,

        /// Version to check
        version: String,

        /// Global minimum stack version (overrides the config file)
        #[arg(long)]
        global_min: Option<String>,
    },

    /// Find the lowest version in the labels of a list of objects
    Min {
        /// JSON file with an array or List of objects ("-" for stdin)
        file: PathBuf,

        /// Kind of objects in the file
        #[arg(short, long, value_enum, default_value_t = ObjectKind::Pod)]
        kind: ObjectKind,

        /// Label to read (defaults to the configured version label)
        #[arg(short, long)]
        label: Option<String>,
    },

    /// List the effective supported range of every family
    Ranges,

    /// Show version
    Version,
}

/// Kind of objects read by `min`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Pods, read from their own labels
    Pod,
    /// StatefulSets, read from their Pod template labels
    #[value(name = "statefulset")]
    StatefulSet,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.unwrap_or_else(Config::default_path);

    match cli.command {
        Some(Command::Parse { version }) => commands::parse(&version, output_mode),
        Some(Command::Compare { a, b }) => commands::compare(&a, &b, output_mode),
        Some(Command::Check {
            family,
            version,
            global_min,
        }) => {
            let config = Config::load(&config_path)?;
            commands::check(&config, &family, &version, global_min.as_deref(), output_mode)
        },
        Some(Command::Min { file, kind, label }) => {
            let config = Config::load(&config_path)?;
            let label = label.unwrap_or(config.version_label);
            commands::min(&file, kind, &label, output_mode)
        },
        Some(Command::Ranges) => {
            let config = Config::load(&config_path)?;
            commands::ranges(&config, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("stackver v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("stackver v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'stackver --help' for usage");
            }
            Ok(())
        },
    }
}
