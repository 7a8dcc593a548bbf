use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::ProgressBar;

use periscope::collect::{Collector, ResultBundle};
use periscope::config::{BackendKind, Config};
use periscope::identifier::{Identifier, IdentifierKind};
use periscope::report::{self, ReportFormat, ReportResults};
use periscope::scoring::exposure::score_bundle;
use periscope::scoring::summary::generate_summary;

/// Periscope: privacy exposure scoring.
///
/// Checks how visible an email address, username, or domain is across
/// public platforms and registration records, and condenses the findings
/// into a single exposure score.
#[derive(Parser)]
#[command(name = "periscope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Email,
    Username,
    Domain,
}

impl From<KindArg> for IdentifierKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Email => IdentifierKind::Email,
            KindArg::Username => IdentifierKind::Username,
            KindArg::Domain => IdentifierKind::Domain,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Html,
    /// Currently rendered as HTML
    Pdf,
}

impl From<FormatArg> for ReportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Html => ReportFormat::Html,
            FormatArg::Pdf => ReportFormat::Pdf,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run an exposure check and print the result
    Check {
        /// What kind of identifier the value is
        #[arg(long, value_enum)]
        kind: KindArg,

        /// The email address, username, or domain to check
        value: String,

        /// Use live lookups regardless of the configured backend
        #[arg(long)]
        live: bool,

        /// Seed the mock backend for reproducible results
        #[arg(long, conflicts_with = "live")]
        seed: Option<u64>,
    },

    /// Run an exposure check and write a report document
    Report {
        #[arg(long, value_enum)]
        kind: KindArg,

        value: String,

        /// Report format
        #[arg(long, value_enum, default_value = "html")]
        format: FormatArg,

        /// Where to write the report
        #[arg(long, default_value = "periscope-report.html")]
        output: PathBuf,

        /// Use live lookups regardless of the configured backend
        #[arg(long)]
        live: bool,

        /// Seed the mock backend for reproducible results
        #[arg(long, conflicts_with = "live")]
        seed: Option<u64>,
    },

    /// Start the HTTP server
    Serve {
        #[arg(long, default_value = "8080")]
        port: u16,

        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("periscope=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            kind,
            value,
            live,
            seed,
        } => {
            let identifier = Identifier::parse(kind.into(), &value)?;
            let collector = build_collector(live, seed)?;
            let bundle = run_checks(&collector, &identifier).await;
            let score = score_bundle(&bundle);

            periscope::output::terminal::display_check(identifier.value(), &bundle, score);
            println!("\n{}", generate_summary(&bundle, score));
        }

        Commands::Report {
            kind,
            value,
            format,
            output,
            live,
            seed,
        } => {
            let identifier = Identifier::parse(kind.into(), &value)?;
            let collector = build_collector(live, seed)?;
            let bundle = run_checks(&collector, &identifier).await;
            let score = score_bundle(&bundle);
            let summary = generate_summary(&bundle, score);

            let results = ReportResults {
                score,
                summary: Some(summary),
                bundle,
            };
            let html = report::render(
                format.into(),
                &results,
                identifier.value(),
                &Utc::now().to_rfc3339(),
            );
            std::fs::write(&output, html)?;
            println!("Report written to {}", output.display());
        }

        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let collector = Arc::new(Collector::from_config(&config)?);
            periscope::web::run_server(collector, port, &bind).await?;
        }
    }

    Ok(())
}

/// Build the collector the flags call for: an explicit seed forces the
/// mock backend, --live forces live lookups, otherwise the env config
/// decides.
fn build_collector(live: bool, seed: Option<u64>) -> Result<Collector> {
    if let Some(seed) = seed {
        return Ok(Collector::mock_with_seed(seed));
    }

    let mut config = Config::load()?;
    if live {
        config.backend = BackendKind::Live;
    }
    Ok(Collector::from_config(&config)?)
}

/// Run the collection phase behind a spinner — live tool invocations can
/// take tens of seconds.
async fn run_checks(collector: &Collector, identifier: &Identifier) -> ResultBundle {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Running exposure checks...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let bundle = collector.collect(identifier).await;

    spinner.finish_and_clear();
    bundle
}
