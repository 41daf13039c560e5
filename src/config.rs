//! Command-line configuration.
//!
//! Every option can also be supplied through a `STOCKVIEW_*` environment
//! variable; flags win over the environment.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use url::Url;

use crate::model::Category;
use crate::provider::{FetchError, FixtureProvider, HttpProvider, ProductProvider};
use crate::table::DEFAULT_PAGE_SIZE;

/// Default backend location.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Warehouse inventory viewer.
#[derive(Parser, Debug)]
#[command(
    name = "stockview",
    about = "Warehouse inventory viewer (gloves, beanies, facemasks)",
    version
)]
pub struct CliArgs {
    /// Base URL of the inventory API. Category endpoints are resolved
    /// relative to it (`<base>/products/gloves/`, ...).
    #[arg(long, env = "STOCKVIEW_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Read `<DIR>/gloves.json`, `beanies.json` and `facemasks.json`
    /// instead of calling the API.
    #[arg(long, env = "STOCKVIEW_FIXTURES", value_name = "DIR")]
    pub fixtures: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[arg(long, env = "STOCKVIEW_TIMEOUT", default_value_t = 10)]
    pub timeout: u64,

    /// Rows per table page.
    #[arg(long, env = "STOCKVIEW_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Tab shown at start-up: gloves, beanies or facemasks.
    #[arg(long, default_value = "gloves")]
    pub tab: Category,

    /// Write logs to this file (the terminal is owned by the UI).
    #[arg(long, env = "STOCKVIEW_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode - only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Log level selected by `-q` / `-v` / `-vv`.
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::INFO,
                1 => Level::DEBUG,
                _ => Level::TRACE,
            }
        }
    }

    /// `RUST_LOG` directives with the crate's own level layered on top.
    pub fn log_filter(&self) -> Result<EnvFilter, ParseError> {
        Ok(EnvFilter::from_default_env()
            .add_directive(format!("stockview={}", self.log_level()).parse()?))
    }
}

/// Errors detected while validating the command line.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL '{input}': {source}")]
    InvalidBaseUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("timeout must be at least 1 second")]
    ZeroTimeout,
    #[error("fixtures directory '{0}' does not exist")]
    MissingFixtures(PathBuf),
    #[error("failed to initialize HTTP client: {0}")]
    Client(#[from] FetchError),
}

/// Where product lists come from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Http { base_url: Url, timeout: Duration },
    Fixtures(PathBuf),
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub page_size: usize,
    pub initial_tab: Category,
}

impl Config {
    pub fn from_args(args: &CliArgs) -> Result<Self, ConfigError> {
        if args.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if args.timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        let source = match &args.fixtures {
            Some(dir) => {
                if !dir.is_dir() {
                    return Err(ConfigError::MissingFixtures(dir.clone()));
                }
                Source::Fixtures(dir.clone())
            }
            None => Source::Http {
                base_url: normalize_base_url(&args.base_url)?,
                timeout: Duration::from_secs(args.timeout),
            },
        };
        Ok(Self {
            source,
            page_size: args.page_size,
            initial_tab: args.tab,
        })
    }

    /// Builds the provider for the configured source.
    pub fn provider(&self) -> Result<Arc<dyn ProductProvider>, ConfigError> {
        let provider: Arc<dyn ProductProvider> = match &self.source {
            Source::Http { base_url, timeout } => {
                Arc::new(HttpProvider::new(base_url.clone(), *timeout)?)
            }
            Source::Fixtures(dir) => Arc::new(FixtureProvider::new(dir)),
        };
        Ok(provider)
    }
}

/// Parses `raw` as an http(s) URL and makes sure its path ends with `/`,
/// so category paths resolve below it instead of replacing its last
/// segment.
pub fn normalize_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
        input: raw.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("stockview").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&[]);
        assert_eq!(args.page_size, 10);
        assert_eq!(args.tab, Category::Gloves);
        assert_eq!(args.verbose, 0);

        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.initial_tab, Category::Gloves);
        match config.source {
            Source::Http { base_url, timeout } => {
                assert_eq!(base_url.as_str(), "http://localhost:8080/");
                assert_eq!(timeout, Duration::from_secs(10));
            }
            other => panic!("unexpected source {:?}", other),
        }
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&[
            "--base-url",
            "https://inventory.example.com/api",
            "--page-size",
            "25",
            "--timeout",
            "3",
            "--tab",
            "Facemasks",
            "-vv",
        ]);
        assert_eq!(args.verbose, 2);
        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.initial_tab, Category::Facemasks);
        assert_eq!(
            config.source,
            Source::Http {
                base_url: Url::parse("https://inventory.example.com/api/").unwrap(),
                timeout: Duration::from_secs(3),
            }
        );
    }

    #[test]
    fn unknown_tab_is_rejected_by_parser() {
        let result = CliArgs::try_parse_from(["stockview", "--tab", "jackets"]);
        assert!(result.is_err());
    }

    #[test]
    fn base_url_normalization() {
        assert_eq!(
            normalize_base_url("http://host:9000").unwrap().as_str(),
            "http://host:9000/"
        );
        assert_eq!(
            normalize_base_url("http://host/prefix?x=1#frag").unwrap().as_str(),
            "http://host/prefix/"
        );
        assert!(matches!(
            normalize_base_url("ftp://host/"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn zero_values_are_rejected() {
        let args = parse(&["--page-size", "0"]);
        assert!(matches!(
            Config::from_args(&args),
            Err(ConfigError::ZeroPageSize)
        ));

        let args = parse(&["--timeout", "0"]);
        assert!(matches!(Config::from_args(&args), Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn zero_timeout_is_rejected_in_fixture_mode_too() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap().to_string();
        let args = parse(&["--fixtures", &path, "--timeout", "0"]);
        assert!(matches!(Config::from_args(&args), Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn verbosity_flags_select_log_level() {
        assert_eq!(parse(&[]).log_level(), Level::INFO);
        assert_eq!(parse(&["-v"]).log_level(), Level::DEBUG);
        assert_eq!(parse(&["-vv"]).log_level(), Level::TRACE);
        assert_eq!(parse(&["-q", "-vv"]).log_level(), Level::ERROR);
    }

    #[test]
    fn log_filter_carries_crate_directive() {
        let filter = parse(&["-v"]).log_filter().unwrap().to_string();
        assert!(filter.to_lowercase().contains("stockview=debug"), "{filter}");
    }

    #[test]
    fn fixtures_directory_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap().to_string();

        let config = Config::from_args(&parse(&["--fixtures", &path])).unwrap();
        assert_eq!(config.source, Source::Fixtures(dir.path().to_path_buf()));
        assert!(config.provider().unwrap().describe().starts_with("fixtures:"));

        let missing = format!("{}/nope", path);
        assert!(matches!(
            Config::from_args(&parse(&["--fixtures", &missing])),
            Err(ConfigError::MissingFixtures(_))
        ));
    }
}
