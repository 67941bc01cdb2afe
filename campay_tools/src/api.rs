use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};

use crate::{
    config::CampayConfig,
    data_objects::{CollectRequest, CollectResponse},
    CampayApiError,
};

/// Client for the Campay mobile-money API.
///
/// The client is constructed once at startup and shared between requests; the underlying
/// `reqwest::Client` pools its connections. Authentication uses a static token header,
/// formatted as `Token <key>`, taken from the [`CampayConfig`].
#[derive(Clone)]
pub struct CampayApi {
    config: CampayConfig,
    client: Arc<Client>,
}

impl CampayApi {
    pub fn new(config: CampayConfig) -> Result<Self, CampayApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let token = format!("Token {}", config.api_key.reveal());
        let val = HeaderValue::from_str(&token).map_err(|e| CampayApiError::Initialization(e.to_string()))?;
        headers.insert("Authorization", val);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client =
            Client::builder().default_headers(headers).build().map_err(|e| CampayApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url)
    }

    /// Asks the provider to collect `amount` XAF from the subscriber `from`.
    ///
    /// Returns the provider's transaction reference. Any non-success status is an error
    /// carrying the status code and the raw response text.
    pub async fn request_collection(
        &self,
        from: &str,
        amount: &str,
        description: &str,
    ) -> Result<String, CampayApiError> {
        let url = self.url("/collect/");
        let body = CollectRequest::new(from, amount, description);
        trace!("Sending collection request to {url}");
        let response =
            self.client.post(url).json(&body).send().await.map_err(|e| CampayApiError::RequestError(e.to_string()))?;
        if response.status().is_success() {
            trace!("Collection request accepted. {}", response.status());
            let collect =
                response.json::<CollectResponse>().await.map_err(|e| CampayApiError::JsonError(e.to_string()))?;
            debug!("Collection request registered under reference {}", collect.reference);
            Ok(collect.reference)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| CampayApiError::RequestError(e.to_string()))?;
            Err(CampayApiError::QueryError { status, message })
        }
    }
}
