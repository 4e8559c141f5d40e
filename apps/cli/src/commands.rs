//! CLI command definitions, routing, and tracing setup.

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use titlescout_core::pipeline::ProgressReporter;
use titlescout_records::{FixtureRecordSource, HttpRecordSource, RecordSource};
use titlescout_shared::{AppConfig, Report, init_config, load_config};
use tracing::info;
use url::Url;

use crate::render;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// TitleScout — automated preliminary title search over public records.
#[derive(Parser)]
#[command(
    name = "titlescout",
    version,
    about = "Resolve a property's chain of title and classify its condition.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Markdown,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run a title search for a property address and print the report.
    Search {
        /// Property address to search.
        address: String,

        /// Record source base URL (overrides the configured endpoint).
        #[arg(long)]
        source_url: Option<String>,

        /// Use the built-in demo dataset instead of a live record source.
        #[arg(long)]
        demo: bool,

        /// Output format (defaults to the configured format).
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "titlescout=info",
        1 => "titlescout=debug",
        _ => "titlescout=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Search {
            address,
            source_url,
            demo,
            format,
        } => cmd_search(&address, source_url.as_deref(), demo, format).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

async fn cmd_search(
    address: &str,
    source_url: Option<&str>,
    demo: bool,
    format: Option<OutputFormat>,
) -> Result<()> {
    let config = load_config()?;
    let format = resolve_format(format, &config)?;
    let source = build_source(source_url, demo, &config)?;

    info!(address, demo, "starting title search");

    let reporter = CliProgress::new();
    let report = titlescout_core::generate_report(source, address, &reporter).await?;

    match format {
        OutputFormat::Text => print!("{}", render::render_text(&report)),
        OutputFormat::Markdown => print!("{}", render::render_markdown(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Flag wins over the configured default.
fn resolve_format(flag: Option<OutputFormat>, config: &AppConfig) -> Result<OutputFormat> {
    if let Some(f) = flag {
        return Ok(f);
    }
    match config.defaults.format.as_str() {
        "text" => Ok(OutputFormat::Text),
        "markdown" => Ok(OutputFormat::Markdown),
        "json" => Ok(OutputFormat::Json),
        other => Err(eyre!(
            "invalid configured format '{other}': expected 'text', 'markdown', or 'json'"
        )),
    }
}

fn build_source(
    source_url: Option<&str>,
    demo: bool,
    config: &AppConfig,
) -> Result<Arc<dyn RecordSource>> {
    if demo {
        return Ok(Arc::new(FixtureRecordSource::demo()));
    }

    let base = source_url.unwrap_or(&config.source.base_url);
    let base_url =
        Url::parse(base).map_err(|e| eyre!("invalid record source URL '{base}': {e}"))?;
    let timeout = Duration::from_secs(config.source.timeout_secs);

    Ok(Arc::new(HttpRecordSource::new(base_url, timeout)?))
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _report: &Report) {
        self.spinner.finish_and_clear();
    }
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
