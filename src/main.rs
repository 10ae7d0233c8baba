// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;

use crate::app_config::{Config, SummarizerChoice, TranslatorChoice};
use app_controller::Controller;
use session::LangDirection;

mod app_config;
mod app_controller;
mod errors;
mod language_utils;
mod processing;
mod providers;
mod session;
mod summarization;

/// CLI Wrapper for TranslatorChoice to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslator {
    Google,
    Ollama,
    Mock,
}

impl From<CliTranslator> for TranslatorChoice {
    fn from(cli: CliTranslator) -> Self {
        match cli {
            CliTranslator::Google => TranslatorChoice::Google,
            CliTranslator::Ollama => TranslatorChoice::Ollama,
            CliTranslator::Mock => TranslatorChoice::Mock,
        }
    }
}

/// CLI Wrapper for SummarizerChoice to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSummarizer {
    Extractive,
    Abstractive,
}

impl From<CliSummarizer> for SummarizerChoice {
    fn from(cli: CliSummarizer) -> Self {
        match cli {
            CliSummarizer::Extractive => SummarizerChoice::Extractive,
            CliSummarizer::Abstractive => SummarizerChoice::Abstractive,
        }
    }
}

/// CLI Wrapper for LangDirection to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliDirection {
    EnKo,
    KoEn,
}

impl From<CliDirection> for LangDirection {
    fn from(cli: CliDirection) -> Self {
        match cli {
            CliDirection::EnKo => LangDirection::EnToKo,
            CliDirection::KoEn => LangDirection::KoToEn,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an interactive translate-and-summarize session (default command)
    #[command(alias = "run")]
    Session(SessionArgs),

    /// Generate shell completions for enkores
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SessionArgs {
    /// Translation backend to use
    #[arg(short, long, value_enum)]
    translator: Option<CliTranslator>,

    /// Summarization backend to use
    #[arg(short, long, value_enum)]
    summarizer: Option<CliSummarizer>,

    /// Initial translation direction
    #[arg(short, long, value_enum)]
    direction: Option<CliDirection>,

    /// Model name for the Ollama translation backend
    #[arg(short, long)]
    model: Option<String>,

    /// Maximum characters per translation request
    #[arg(long)]
    chunk_chars: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// EnKoreS - English/Korean translate and summarize
///
/// An interactive tool that translates pasted text between English and
/// Korean and summarizes the result, with selectable backends.
#[derive(Parser, Debug)]
#[command(name = "enkores")]
#[command(version = "1.0.0")]
#[command(about = "English/Korean translation and summarization tool")]
#[command(long_about = "EnKoreS translates pasted text between English and Korean and summarizes
the translation, in an interactive terminal session.

EXAMPLES:
    enkores                             # Interactive session with default config
    enkores -t ollama -m llama3.2:3b    # Translate through a local Ollama model
    enkores -s abstractive              # Use generative summarization
    enkores -d ko-en                    # Start in Korean-to-English direction
    enkores --log-level debug           # Verbose logging
    enkores completions bash            # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

SUPPORTED BACKENDS:
    google      - Free Google web translation endpoint (default)
    ollama      - Local Ollama model server
    extractive  - Local statistical summarizer (default)
    abstractive - Generative summarization via the Ollama server")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    session: SessionArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "enkores", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Session(args)) => run_session(args).await,
        None => run_session(cli.session).await,
    }
}

async fn run_session(options: SessionArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(translator) = options.translator {
        config.translator = translator.into();
    }
    if let Some(summarizer) = options.summarizer {
        config.summarizer = summarizer.into();
    }
    if let Some(direction) = options.direction {
        config.lang_direction = direction.into();
    }
    if let Some(model) = options.model {
        config.translation.model = model;
    }
    if let Some(chunk_chars) = options.chunk_chars {
        config.translation.chunk_chars = chunk_chars;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    } else {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    let controller = Controller::with_config(config)?;
    controller.run_session().await
}
