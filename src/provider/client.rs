// client.rs
use crate::config::ProviderConfig;
use crate::domain::Purpose;
use crate::provider::ProviderError;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

const USER_AGENT: &str = concat!("dubai-listings/", env!("CARGO_PKG_VERSION"));

/// Parameters of one provider list request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderQuery {
    pub location_id: String,
    pub purpose: Purpose,
    /// Integer AED.
    pub max_price: Option<u64>,
    pub category_id: Option<String>,
    pub rooms_min: Option<u32>,
    pub baths_min: Option<u32>,
    pub hits_per_page: u32,
}

impl ProviderQuery {
    /// Same filters, different location.
    pub fn at_location(&self, location_id: &str) -> Self {
        Self {
            location_id: location_id.to_string(),
            ..self.clone()
        }
    }

    /// Query-string pairs in the order the provider documents them.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("locationExternalIDs", self.location_id.clone()),
            ("purpose", self.purpose.provider_tag()),
            ("hitsPerPage", self.hits_per_page.to_string()),
        ];

        if let Some(max_price) = self.max_price {
            params.push(("maxPrice", max_price.to_string()));
        }
        if let Some(category_id) = &self.category_id {
            params.push(("categoryExternalID", category_id.clone()));
        }
        if let Some(rooms) = self.rooms_min {
            params.push(("roomsMin", rooms.to_string()));
        }
        if let Some(baths) = self.baths_min {
            params.push(("bathsMin", baths.to_string()));
        }

        params
    }
}

/// Raw transport to the listings provider: one request in, one JSON body out.
pub trait ListingsTransport {
    fn list_properties(&self, query: &ProviderQuery) -> Result<Value, ProviderError>;
}

impl<T: ListingsTransport + ?Sized> ListingsTransport for &T {
    fn list_properties(&self, query: &ProviderQuery) -> Result<Value, ProviderError> {
        (**self).list_properties(query)
    }
}

/// RapidAPI-hosted Bayut endpoint.
pub struct BayutClient {
    client: Client,
    api_url: String,
    api_host: String,
    api_key: String,
}

impl BayutClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_host: config.api_host.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl ListingsTransport for BayutClient {
    fn list_properties(&self, query: &ProviderQuery) -> Result<Value, ProviderError> {
        let start = Instant::now();

        let resp = self
            .client
            .get(&self.api_url)
            .header("x-rapidapi-host", &self.api_host)
            .header("x-rapidapi-key", &self.api_key)
            .query(&query.to_params())
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Network(format!("request timed out: {e}"))
                } else {
                    ProviderError::Network(e.to_string())
                }
            })?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!(
            location_id = %query.location_id,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "provider responded"
        );

        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| ProviderError::Parse(e.to_string()))
    }
}
