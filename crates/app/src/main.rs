use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ClueSource, ClueSourceConfig, Clock, HttpClueSource};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

const WINDOW_TITLE: &str = "Trivia, YAY!";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimeout { raw: String },
    InvalidEndpoint { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimeout { raw } => {
                write!(f, "invalid --timeout-secs value: {raw}")
            }
            ArgsError::InvalidEndpoint { raw } => write!(f, "invalid --endpoint value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--endpoint <url>] [--timeout-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --endpoint {}", services::clue_source::DEFAULT_ENDPOINT);
    eprintln!(
        "  --timeout-secs {}",
        services::clue_source::DEFAULT_TIMEOUT_SECS
    );
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRIVIA_API_URL, TRIVIA_HTTP_TIMEOUT_SECS, RUST_LOG (default: info)");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(ClueSourceConfig),
    Help,
}

/// Flags override `base`, which already carries the environment overrides.
fn parse_args(
    base: ClueSourceConfig,
    args: &mut impl Iterator<Item = String>,
) -> Result<Parsed, ArgsError> {
    let mut config = base;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--endpoint" => {
                let value = require_value(args, "--endpoint")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidEndpoint { raw: value });
                }
                config.endpoint = value.trim().to_string();
            }
            "--timeout-secs" => {
                let value = require_value(args, "--timeout-secs")?;
                let secs: u64 = value
                    .trim()
                    .parse()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| ArgsError::InvalidTimeout { raw: value.clone() })?;
                config.timeout = Duration::from_secs(secs);
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(Parsed::Run(config))
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::registry()
        .with(env_filter)
        .with(log_fmt::layer().with_target(false).compact())
        .try_init()?;
    Ok(())
}

struct DesktopApp {
    clock: Clock,
    clue_source: Arc<HttpClueSource>,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn clue_source(&self) -> Arc<dyn ClueSource> {
        self.clue_source.clone()
    }

    fn clue_origin(&self) -> String {
        self.clue_source.endpoint().to_string()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let config = match parse_args(ClueSourceConfig::from_env(), &mut argv) {
        Ok(Parsed::Run(config)) => config,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            print_usage();
            return Err(err.into());
        }
    };

    init_logging()?;

    // Endpoint problems surface here rather than on the first Start.
    let clue_source = Arc::new(HttpClueSource::new(&config)?);
    info!(
        endpoint = %clue_source.endpoint(),
        timeout_secs = config.timeout.as_secs(),
        "launching trivia"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        clock: Clock::system(),
        clue_source,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
