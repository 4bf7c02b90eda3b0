use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::presentation::config::JusoSettings;

/// Client for the Juso road-address search API.
///
/// One result per query is enough: the refiner always takes the best
/// match and keeps the caller's own detail part.
pub struct JusoClient {
    client: Client,
    api_url: String,
    confm_key: String,
    first_sort: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JusoResponse {
    pub results: JusoResults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JusoResults {
    pub common: JusoCommon,
    /// Absent or null when the query failed upstream.
    #[serde(default)]
    pub juso: Option<Vec<JusoAddress>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JusoCommon {
    #[serde(rename = "errorCode", default)]
    pub error_code: String,
    #[serde(rename = "errorMessage", default)]
    pub error_message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JusoAddress {
    #[serde(rename = "roadAddr", default)]
    pub road_addr: String,
    #[serde(rename = "roadAddrPart1", default)]
    pub road_addr_part1: String,
    #[serde(rename = "roadAddrPart2", default)]
    pub road_addr_part2: String,
    #[serde(rename = "zipNo", default)]
    pub zip_no: String,
}

#[derive(Debug, thiserror::Error)]
pub enum JusoError {
    #[error("juso request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl JusoError {
    /// Short failure kind for the per-row status marker.
    pub fn kind(&self) -> &'static str {
        match self {
            JusoError::Request(e) if e.is_timeout() => "Timeout",
            JusoError::Request(e) if e.is_connect() => "Connect",
            JusoError::Request(_) => "Request",
        }
    }
}

impl JusoClient {
    pub fn new(settings: &JusoSettings) -> Result<Self, JusoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs_f64(settings.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            api_url: settings.api_url.clone(),
            confm_key: settings.confm_key.clone(),
            first_sort: settings.first_sort.clone(),
        })
    }

    pub async fn search(&self, keyword: &str) -> Result<JusoResponse, JusoError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("confmKey", self.confm_key.as_str()),
                ("currentPage", "1"),
                ("countPerPage", "1"),
                ("keyword", keyword),
                ("resultType", "json"),
                ("firstSort", self.first_sort.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
