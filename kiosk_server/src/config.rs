use std::env;

use campay_tools::CampayConfig;
use log::*;

const DEFAULT_KSK_HOST: &str = "127.0.0.1";
const DEFAULT_KSK_PORT: u16 = 8460;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Campay payment provider configuration. The API key is read here, once, at startup;
    /// handlers never touch the environment.
    pub campay: CampayConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_KSK_HOST.to_string(),
            port: DEFAULT_KSK_PORT,
            database_url: String::default(),
            campay: CampayConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("KSK_HOST").ok().unwrap_or_else(|| DEFAULT_KSK_HOST.into());
        let port = env::var("KSK_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for KSK_PORT. {e} Using the default, {DEFAULT_KSK_PORT}, instead."
                    );
                    DEFAULT_KSK_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_KSK_PORT);
        let database_url = env::var("KSK_DATABASE_URL").ok().unwrap_or_else(|| {
            error!("🪛️ KSK_DATABASE_URL is not set. Please set it to the URL for the kiosk database.");
            String::default()
        });
        let campay = CampayConfig::new_from_env_or_default();
        Self { host, port, database_url, campay }
    }
}
