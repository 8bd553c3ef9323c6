mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tone_analyze::Analyzer;
use tone_core::ToneConfig;
use tone_core::config::DEFAULT_CONFIG_PATH;
use tracing_subscriber::EnvFilter;

/// Tone: short-text sentiment analysis with a lexicon fallback.
#[derive(Parser, Debug)]
#[command(name = "tone", version, about)]
pub struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress everything but errors on stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file (default: ./tone.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Model artifact, overriding the config
    #[arg(long, global = true, value_name = "PATH")]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single text
    Analyze {
        /// Text to analyze
        text: String,

        /// Print the numeric score instead of the label
        #[arg(long)]
        score: bool,

        /// Print label and score as JSON
        #[arg(long, conflicts_with = "score")]
        json: bool,
    },

    /// Analyze one text per line of a file ("-" reads stdin)
    Batch {
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = BatchFormat::Jsonl)]
        format: BatchFormat,
    },

    /// Report accuracy and macro-F1 on a labeled TSV file (text<TAB>label)
    Eval {
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
        format: ReportFormat,
    },

    /// Serve GET/POST /analyze over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BatchFormat {
    Jsonl,
    Human,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Human,
}

impl Cli {
    /// Resolve config: explicit `--config` must load, the default file may be
    /// absent but not malformed. `--model` wins over both.
    pub fn settings(&self) -> Result<ToneConfig> {
        let mut config = match &self.config {
            Some(path) => ToneConfig::load(path)?,
            None => ToneConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
        };
        if let Some(model) = &self.model {
            config.model.path = model.clone();
        }
        Ok(config)
    }
}

/// Build the analyzer once per process from resolved settings.
pub fn build_analyzer(config: &ToneConfig) -> Analyzer {
    Analyzer::from_model_path(&config.model.path).thresholds(config.thresholds)
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = cli.settings()?;

    match &cli.command {
        Some(Command::Analyze { text, score, json }) => {
            commands::analyze::run(&config, text, *score, *json)
        }
        Some(Command::Batch { file, format }) => commands::batch::run(&config, file, *format),
        Some(Command::Eval { file, format }) => commands::eval::run(&config, file, *format),
        Some(Command::Serve { host, port }) => {
            let host = host.clone().unwrap_or_else(|| config.http.host.clone());
            let port = port.unwrap_or(config.http.port);
            commands::serve::run(&config, &host, port)
        }
        None if config.http.enabled => {
            commands::serve::run(&config, &config.http.host, config.http.port)
        }
        None => {
            eprintln!("{}", Cli::command().render_help());
            std::process::exit(2);
        }
    }
}
