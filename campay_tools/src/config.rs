use ksk_common::Secret;
use log::*;

const DEFAULT_CAMPAY_URL: &str = "https://demo.campay.net/api";

#[derive(Debug, Clone, Default)]
pub struct CampayConfig {
    /// Base URL of the Campay API, without a trailing slash. e.g. "https://demo.campay.net/api"
    pub api_url: String,
    pub api_key: Secret<String>,
}

impl CampayConfig {
    pub fn new_from_env_or_default() -> Self {
        let api_url = std::env::var("CAMPAY_URL").unwrap_or_else(|_| {
            warn!("CAMPAY_URL not set, using the demo environment, {DEFAULT_CAMPAY_URL}");
            DEFAULT_CAMPAY_URL.to_string()
        });
        let api_key = Secret::new(std::env::var("CAMPAY_API_KEY").unwrap_or_else(|_| {
            warn!("CAMPAY_API_KEY not set. Collection requests will be rejected by the provider.");
            String::default()
        }));
        Self { api_url, api_key }
    }
}
