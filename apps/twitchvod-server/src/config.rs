use eyre::{Context as _, Result, eyre};
use twitchvod_gql::TWITCH_GQL_URL;

const DEFAULT_PORT: u16 = 8080;

/// Empty values count as missing.
macro_rules! env_var {
    ($lookup:expr, $name:expr) => {
        $lookup($name)
            .filter(|value: &String| !value.is_empty())
            .ok_or_else(|| eyre!("Failed to find environment variable {}", $name))?
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub secret: String,
    pub client_id: String,
    pub endpoint: String,
}
impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT").filter(|port| !port.is_empty()) {
            Some(port) => port
                .parse()
                .wrap_err_with(|| format!("PORT must be a port number, got {port:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            secret: env_var!(lookup, "SECRET"),
            client_id: env_var!(lookup, "TWITCH_CLIENT_ID"),
            endpoint: lookup("TWITCH_GQL_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| TWITCH_GQL_URL.to_string()),
        })
    }
}
