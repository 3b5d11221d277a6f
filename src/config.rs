use std::env;
use std::num::NonZeroU32;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub rate_limit_requests: NonZeroU32,
    pub rate_limit_window_seconds: u64,
    pub trust_forwarded_for: bool,
    pub seed_holidays: bool,
    pub service_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://leavetrack.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let rate_limit_requests = env::var("RATE_LIMIT_REQUESTS")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(ConfigError::InvalidRateLimit)?;

        let rate_limit_window_seconds = env::var("RATE_LIMIT_WINDOW_SECONDS")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<u64>()
            .ok()
            .filter(|seconds| *seconds > 0)
            .ok_or(ConfigError::InvalidRateLimit)?;

        // Only enable behind a proxy that overwrites X-Forwarded-For
        let trust_forwarded_for = env::var("TRUST_FORWARDED_FOR")
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        let seed_holidays = env::var("SEED_HOLIDAYS")
            .map(|value| parse_flag(&value))
            .unwrap_or(true);

        let service_name = env::var("SERVICE_NAME").unwrap_or_else(|_| "leavetrack".to_string());

        Ok(Config {
            database_url,
            server_host,
            server_port,
            rate_limit_requests,
            rate_limit_window_seconds,
            trust_forwarded_for,
            seed_holidays,
            service_name,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("RATE_LIMIT_REQUESTS and RATE_LIMIT_WINDOW_SECONDS must be positive integers")]
    InvalidRateLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
        assert!(!parse_flag("0"));
    }

    #[test]
    fn test_server_address() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            rate_limit_requests: NonZeroU32::new(10).unwrap(),
            rate_limit_window_seconds: 60,
            trust_forwarded_for: false,
            seed_holidays: false,
            service_name: "leavetrack".to_string(),
        };
        assert_eq!(config.server_address(), "0.0.0.0:8080");
    }
}
