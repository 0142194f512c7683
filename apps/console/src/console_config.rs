use std::env;
use std::path::PathBuf;
use std::time::Duration;

use techtrackr_core::{AppError, AppResult};
use techtrackr_domain::LoginCredentials;
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3500";
const DEFAULT_SESSION_FILE: &str = ".techtrackr-session";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub api_base_url: Url,
    pub session_file: PathBuf,
    pub http_timeout: Duration,
    pub credentials: Option<LoginCredentials>,
}

impl ConsoleConfig {
    pub fn load() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let raw_base_url = non_empty(&lookup, "TECHTRACKR_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let api_base_url = Url::parse(raw_base_url.trim().trim_end_matches('/')).map_err(|error| {
            AppError::Validation(format!(
                "invalid TECHTRACKR_API_BASE_URL value '{raw_base_url}': {error}"
            ))
        })?;

        let session_file = non_empty(&lookup, "TECHTRACKR_SESSION_FILE")
            .map_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE), PathBuf::from);

        let http_timeout_secs = match non_empty(&lookup, "TECHTRACKR_HTTP_TIMEOUT_SECS") {
            Some(value) => value.trim().parse::<u64>().map_err(|error| {
                AppError::Validation(format!(
                    "invalid TECHTRACKR_HTTP_TIMEOUT_SECS value '{value}': {error}"
                ))
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };
        if http_timeout_secs == 0 {
            return Err(AppError::Validation(
                "TECHTRACKR_HTTP_TIMEOUT_SECS must be greater than zero".to_owned(),
            ));
        }

        let credentials = match (
            non_empty(&lookup, "TECHTRACKR_USER"),
            non_empty(&lookup, "TECHTRACKR_PASSWORD"),
        ) {
            (Some(user), Some(password)) => Some(LoginCredentials::new(user, password)?),
            (None, None) => None,
            _ => {
                return Err(AppError::Validation(
                    "TECHTRACKR_USER and TECHTRACKR_PASSWORD must be set together".to_owned(),
                ));
            }
        };

        Ok(Self {
            api_base_url,
            session_file,
            http_timeout: Duration::from_secs(http_timeout_secs),
            credentials,
        })
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|value| !value.trim().is_empty())
}
