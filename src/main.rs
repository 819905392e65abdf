//! CLI entry point for the BART departures tool.
//!
//! Fetches the real-time estimated-departure feed for one origin station,
//! normalizes it, and prints a fixed-width report to stdout. Diagnostics go
//! to stderr, with a distinct exit code per failure class.

use std::ffi::OsStr;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use bart_departures::{
    config::{Config, DEFAULT_BASE_URL, DEFAULT_ORIGIN, DEFAULT_TRAIN_COUNT, DEMO_API_KEY},
    error::Error,
    fetch::{BasicClient, auth::UrlParam, fetch_bytes},
    parser::parse_document,
    schedule::station_report,
};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bart_departures")]
#[command(about = "Print upcoming BART departures for one station", long_about = None)]
struct Cli {
    /// Origin station code, e.g. "MONT"
    #[arg(short, long, default_value = DEFAULT_ORIGIN)]
    orig: String,

    /// Maximum number of departures kept from the feed, counted in feed order
    #[arg(short = 'n', long = "count", default_value_t = DEFAULT_TRAIN_COUNT)]
    count: usize,

    /// API key; falls back to $BART_API_KEY, then the public demo key
    #[arg(short, long)]
    key: Option<String>,

    /// Base URL of the ETD endpoint
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: stderr for humans + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bart_departures.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bart_departures.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // stderr defaults to warn; the report itself goes to stdout
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let api_key = cli
        .key
        .or_else(|| std::env::var("BART_API_KEY").ok())
        .unwrap_or_else(|| DEMO_API_KEY.to_string());

    let config = Config {
        origin: cli.orig,
        api_key,
        base_url: cli.base_url,
        max_trains: cli.count,
        timeout: Duration::from_secs(cli.timeout),
    };

    match run(&config).await {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// One fetch, one parse, one render.
#[tracing::instrument(skip(config), fields(origin = %config.origin))]
async fn run(config: &Config) -> Result<String, Error> {
    let url = config.schedule_url();

    let transport = BasicClient::new(config.timeout).map_err(|e| Error::Fetch {
        url: url.clone(),
        message: format!("{e:#}"),
    })?;
    let client = UrlParam::key(transport, config.api_key.as_str());

    debug!(url = %url, "Requesting departures");
    let bytes = fetch_bytes(&client, &url)
        .await
        .map_err(|e| Error::Fetch {
            url: url.clone(),
            message: format!("{e:#}"),
        })?;
    debug!(bytes = bytes.len(), "Response received, parsing");

    let doc = parse_document(&bytes)?;
    station_report(&doc, config.max_trains)
}
