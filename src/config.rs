use std::net::IpAddr;

use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub admin_token: Option<String>,
    pub max_body_size: usize,
    pub trusted_proxies: Vec<IpNet>,
    pub submit_rate_limit: u32,
    pub submit_rate_window_secs: u64,
    pub profanity: ProfanityMode,
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfanityMode {
    /// Refuse the submission with a 400.
    Reject,
    /// Store it with offending words starred out.
    Mask,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("SOALBANK_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SOALBANK_HOST: {e}"))?;

        let port: u16 = env_or("SOALBANK_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid SOALBANK_PORT: {e}"))?;

        let admin_token = std::env::var("SOALBANK_ADMIN_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        let max_body_size: usize = env_or("SOALBANK_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid SOALBANK_MAX_BODY_SIZE: {e}"))?;

        let trusted_proxies: Vec<IpNet> = env_or("SOALBANK_TRUSTED_PROXIES", "")
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|e| format!("Invalid SOALBANK_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let submit_rate_limit: u32 = env_or("SOALBANK_SUBMIT_RATE_LIMIT", "10")
            .parse()
            .map_err(|e| format!("Invalid SOALBANK_SUBMIT_RATE_LIMIT: {e}"))?;

        let submit_rate_window_secs: u64 = env_or("SOALBANK_SUBMIT_RATE_WINDOW_SECS", "60")
            .parse()
            .map_err(|e| format!("Invalid SOALBANK_SUBMIT_RATE_WINDOW_SECS: {e}"))?;

        let profanity = match env_or("SOALBANK_PROFANITY", "reject").as_str() {
            "reject" => ProfanityMode::Reject,
            "mask" => ProfanityMode::Mask,
            other => return Err(format!("Invalid SOALBANK_PROFANITY: {other}")),
        };

        let log_level = env_or("SOALBANK_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            admin_token,
            max_body_size,
            trusted_proxies,
            submit_rate_limit,
            submit_rate_window_secs,
            profanity,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
