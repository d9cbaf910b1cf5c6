use std::net::SocketAddr;

use crate::utils::error::{AppError, AppResult};

pub const DEFAULT_PUBLIC_URL: &str = "https://nice-miniapp.vercel.app";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Absolute URL the app is reachable at; used as the frame button target.
    pub public_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            public_url: DEFAULT_PUBLIC_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::Internal(format!("Invalid PORT {}: {}", raw, e)))?,
            None => defaults.port,
        };

        let public_url = lookup("PUBLIC_URL")
            .or_else(|| lookup("NEXT_PUBLIC_URL"))
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.public_url);

        Ok(Self {
            host,
            port,
            public_url,
        })
    }

    pub fn bind_addr(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid bind address: {}", e)))
    }
}
