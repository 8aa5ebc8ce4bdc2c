mod logging;

use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ApiConfig, AppServices};
use tracing::info;
use ui::{App, UiApp, build_app_context};

const DB_URL_VAR: &str = "DASHBOARD_DB_URL";
const DEFAULT_DB_URL: &str = "sqlite://dashboard.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    api_url: Option<String>,
    verbose: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--api-url <url>] [--verbose]");
    eprintln!("  cargo run -p app -- logout [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --api-url {}", services::config::DEFAULT_API_URL);
    eprintln!();
    eprintln!("Environment (also read from .env):");
    eprintln!("  {DB_URL_VAR}, DASHBOARD_API_URL, DASHBOARD_API_TIMEOUT_SECS,");
    eprintln!("  DASHBOARD_ENFORCE_CORRECT_OPTIONS, DASHBOARD_LEAVE_WORD_POLICY, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Logout,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "logout" => Some(Self::Logout),
            _ => None,
        }
    }
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_db_url: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env_db_url
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
        let mut api_url = None;
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--api-url" => api_url = Some(require_value(args, "--api-url")?),
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            api_url,
            verbose,
        })
    }

    fn api_config(&self) -> Result<ApiConfig, services::AppServicesError> {
        let from_env = ApiConfig::from_env()?;
        match &self.api_url {
            Some(url) => Ok(ApiConfig::new(url)?.with_timeout(from_env.timeout)),
            None => Ok(from_env),
        }
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with('-') {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, std::env::var(DB_URL_VAR).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    logging::init_logging(parsed.verbose)?;

    prepare_sqlite_file(&parsed.db_url)?;
    let config = parsed.api_config()?;
    info!(db = %parsed.db_url, api = %config.base_url, "starting");
    let services = AppServices::new_sqlite(&parsed.db_url, config).await?;

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(services);
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Teacher Dashboard")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Logout => {
            services.session().logout().await;
            eprintln!("Stored credentials cleared.");
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env_db_url: Option<&str>) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        Args::parse(&mut iter, env_db_url.map(ToString::to_string))
    }

    #[test]
    fn defaults_without_flags() {
        let args = parse(&[], None).unwrap();
        assert_eq!(args.db_url, DEFAULT_DB_URL);
        assert_eq!(args.api_url, None);
        assert!(!args.verbose);
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--db", "sqlite::memory:", "--api-url", "http://10.0.0.2/api", "-v"],
            Some("sqlite:///tmp/env.sqlite3"),
        )
        .unwrap();
        assert_eq!(args.db_url, "sqlite::memory:");
        assert_eq!(args.api_url.as_deref(), Some("http://10.0.0.2/api"));
        assert!(args.verbose);
    }

    #[test]
    fn rejects_unknown_and_incomplete_flags() {
        assert!(matches!(
            parse(&["--port"], None),
            Err(ArgsError::UnknownArg(arg)) if arg == "--port"
        ));
        assert!(matches!(
            parse(&["--api-url"], None),
            Err(ArgsError::MissingValue { flag: "--api-url" })
        ));
    }

    #[test]
    fn relative_sqlite_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/dash.sqlite3".to_string());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/dash.sqlite3"), "{url}");
    }

    #[test]
    fn memory_database_needs_no_file() {
        assert!(prepare_sqlite_file("sqlite::memory:").is_ok());
        assert!(prepare_sqlite_file("postgres://nope").is_err());
    }
}
