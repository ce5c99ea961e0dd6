use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8081;
const DEFAULT_ANALYSIS_SERVICE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not a valid {expected}: {value}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("ANALYSIS_SERVICE_URL is not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub analysis_service_url: Url,
    pub max_image_bytes: usize,
    /// `None` leaves upstream requests without a timeout.
    pub analysis_timeout: Option<Duration>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let frontend_dir = match lookup("FRONTEND_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => match lookup("CARGO_MANIFEST_DIR") {
                Some(manifest_dir) => PathBuf::from(format!("{}/../frontend/dist", manifest_dir)),
                None => PathBuf::from("/usr/src/app/frontend/dist"),
            },
        };

        let analysis_service_url = Url::parse(
            &lookup("ANALYSIS_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_ANALYSIS_SERVICE_URL.to_string()),
        )?;

        let analysis_timeout = lookup("ANALYSIS_TIMEOUT_SECS")
            .map(|value| parse_number::<u64>("ANALYSIS_TIMEOUT_SECS", "number of seconds", value))
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("PORT")
                .map(|value| parse_number("PORT", "port", value))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),
            frontend_dir,
            analysis_service_url,
            max_image_bytes: lookup("MAX_IMAGE_BYTES")
                .map(|value| parse_number("MAX_IMAGE_BYTES", "byte count", value))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_IMAGE_BYTES),
            analysis_timeout,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    expected: &'static str,
    value: String,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        })
}
