use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// JSON dataset to serve instead of the built-in fixtures
    #[arg(long, env = "PORTAL_FIXTURES")]
    pub fixtures: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub shell: ShellConfig,
    #[serde(default)]
    pub data: DataConfig,
    pub assets: AssetsConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShellConfig {
    /// Viewport width (px) at which the layout becomes desktop.
    pub breakpoint_px: u32,
    /// Cookie holding the persisted theme.
    pub theme_cookie: String,
    /// Cookie identifying the browser's shell state.
    pub session_cookie: String,
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    #[serde(default)]
    pub fixtures_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub json: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Layering, lowest to highest priority: defaults, config file,
    /// `PORTAL_` environment, CLI flags (and their env aliases).
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("shell.breakpoint_px", 1024)?
            .set_default("shell.theme_cookie", "theme")?
            .set_default("shell.session_cookie", "portal_shell")?
            .set_default("shell.idle_timeout_secs", 30 * 60)?
            .set_default("assets.static_dir", "static")?
            .set_default("log.json", false)?;

        // Explicit file must exist; ./config.{yaml,toml,json} is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // E.g. PORTAL_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("PORTAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(path) = cli.fixtures {
            builder = builder.set_override("data.fixtures_path", path)?;
        }
        if cli.log_json {
            builder = builder.set_override("log.json", true)?;
        }

        let cfg = builder.build()?;
        let mut app: Self = cfg.try_deserialize()?;
        if app.shell.breakpoint_px == 0 {
            return Err(config::ConfigError::Message(
                "shell.breakpoint_px must be positive".to_string(),
            ));
        }
        app.data.fixtures_path = app.data.fixtures_path.filter(|p| !p.trim().is_empty());
        Ok(app)
    }

    /// `host:port` to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
