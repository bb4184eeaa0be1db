use clap::Parser;
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
use log::LevelFilter;
use std::env;
use time::{format_description::well_known::Iso8601, OffsetDateTime};
use weathercast_core::{
    find_config_file, load_config, ConfigSource, Thresholds, DEFAULT_API_PORT, DEFAULT_DATA_FILE,
};

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "Weathercast - read-only forecast API over CSV weather observations"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $WEATHERCAST_CONFIG, ./weathercast.toml,
    /// $XDG_CONFIG_HOME/weathercast/weathercast.toml, /etc/weathercast/weathercast.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "WEATHERCAST_LEVEL")]
    pub level: Option<String>,

    /// Host to listen on (use 0.0.0.0 for all interfaces)
    #[arg(short, long, env = "WEATHERCAST_HOST")]
    #[serde(alias = "host")]
    pub domain: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "WEATHERCAST_PORT")]
    pub port: Option<String>,

    /// CSV file holding the weather observations
    /// Columns: sensor_id, timestamp (RFC 3339), temperature, sun, wind
    #[arg(short = 'f', long, env = "WEATHERCAST_DATA_FILE")]
    pub data_file: Option<String>,

    /// Temperature (Celsius) at or above which tomorrow counts as warm
    #[arg(long, env = "WEATHERCAST_WARM_THRESHOLD")]
    pub warm_threshold: Option<f64>,

    /// Irradiance (W/m^2) at or above which tomorrow counts as sunny
    #[arg(long, env = "WEATHERCAST_SUNNY_THRESHOLD")]
    pub sunny_threshold: Option<f64>,

    /// Wind speed (m/s) at or above which tomorrow counts as windy
    #[arg(long, env = "WEATHERCAST_WINDY_THRESHOLD")]
    pub windy_threshold: Option<f64>,
}

impl Cli {
    /// Get the effective configuration value with defaults
    pub fn host(&self) -> String {
        self.domain
            .clone()
            .unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn port(&self) -> String {
        self.port
            .clone()
            .unwrap_or_else(|| DEFAULT_API_PORT.to_string())
    }

    pub fn data_file(&self) -> String {
        self.data_file
            .clone()
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string())
    }

    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        Thresholds {
            warm: self.warm_threshold.unwrap_or(defaults.warm),
            sunny: self.sunny_threshold.unwrap_or(defaults.sunny),
            windy: self.windy_threshold.unwrap_or(defaults.windy),
        }
    }
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> Cli {
    let cli_args = Cli::parse();

    // Determine config file path
    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file()
    };

    // Log where we're loading config from
    if let Some(path) = source.path() {
        log::info!("Loading config from: {}", path.display());
    }

    // Load from config file
    let file_config: Cli = load_config(&source).unwrap_or_default();

    // CLI args override file config (env vars are handled by clap)
    Cli {
        config: cli_args.config,
        level: cli_args.level.or(file_config.level),
        domain: cli_args.domain.or(file_config.domain),
        port: cli_args.port.or(file_config.port),
        data_file: cli_args.data_file.or(file_config.data_file),
        warm_threshold: cli_args.warm_threshold.or(file_config.warm_threshold),
        sunny_threshold: cli_args.sunny_threshold.or(file_config.sunny_threshold),
        windy_threshold: cli_args.windy_threshold.or(file_config.windy_threshold),
    }
}

pub fn get_log_level(cli: &Cli) -> LevelFilter {
    let level_str = cli
        .level
        .clone()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    match level_str.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

pub fn setup_logger() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::White)
        .debug(Color::Cyan)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}: {}",
                OffsetDateTime::now_utc().format(&Iso8601::DEFAULT).unwrap(),
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .chain(std::io::stdout())
}
