//! HTTP client for the Ubidots "last value" endpoint

use anyhow::{anyhow, Context};
use serde::Deserialize;
use tracing::debug;

/// The most recent dot recorded for a variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Value of the dot
    pub value: f64,
    /// Elapsed seconds carried in the dot's context, when present
    pub context_seconds: Option<u64>,
    /// Epoch milliseconds at which the dot was recorded
    pub timestamp_ms: i64,
}

/// One page of the `/variables/{id}/values` response
#[derive(Debug, Deserialize)]
struct ValuesPage {
    results: Vec<Dot>,
}

#[derive(Debug, Deserialize)]
struct Dot {
    value: f64,
    timestamp: i64,
    #[serde(default)]
    context: DotContext,
}

#[derive(Debug, Default, Deserialize)]
struct DotContext {
    seconds: Option<f64>,
}

impl From<Dot> for Sample {
    fn from(dot: Dot) -> Self {
        Self {
            value: dot.value,
            context_seconds: dot.context.seconds.map(|s| s as u64),
            timestamp_ms: dot.timestamp,
        }
    }
}

/// Client for polling the most recent value of telemetry variables
#[derive(Debug, Clone)]
pub struct UbidotsClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl UbidotsClient {
    /// Create a new client against the given API base URL
    pub fn new(api_base: String, token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base,
            token,
        }
    }

    /// Fetch the single most recent dot of a variable.
    ///
    /// One GET with `token` and `page_size=1` query parameters. Any transport,
    /// status or payload-shape problem is an error for this poll cycle; the
    /// caller skips the cycle and the next poll overwrites whatever state the
    /// failed one left behind.
    pub async fn last_dot(&self, variable_id: &str) -> anyhow::Result<Sample> {
        let url = format!("{}/variables/{}/values", self.api_base, variable_id);
        debug!("Polling last dot of variable {}", variable_id);

        let page: ValuesPage = self
            .http
            .get(&url)
            .query(&[("token", self.token.as_str()), ("page_size", "1")])
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .with_context(|| format!("GET {} returned an error status", url))?
            .json()
            .await
            .with_context(|| format!("GET {} returned a malformed body", url))?;

        let dot = page
            .results
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("variable {} has no recorded values", variable_id))?;

        Ok(dot.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_last_value_page() {
        let body = r#"{
            "count": 4240,
            "results": [
                {
                    "timestamp": 1662577710000,
                    "value": 2.0,
                    "context": { "seconds": 65 },
                    "created_at": 1662577710123
                }
            ]
        }"#;

        let page: ValuesPage = serde_json::from_str(body).unwrap();
        let sample: Sample = page.results.into_iter().next().unwrap().into();

        assert_eq!(sample.value, 2.0);
        assert_eq!(sample.context_seconds, Some(65));
        assert_eq!(sample.timestamp_ms, 1_662_577_710_000);
    }

    #[test]
    fn context_is_optional() {
        let body = r#"{ "results": [ { "timestamp": 1662577710000, "value": 3 } ] }"#;

        let page: ValuesPage = serde_json::from_str(body).unwrap();
        let sample: Sample = page.results.into_iter().next().unwrap().into();

        assert_eq!(sample.context_seconds, None);
    }

    #[test]
    fn empty_results_is_not_a_sample() {
        let body = r#"{ "results": [] }"#;

        let page: ValuesPage = serde_json::from_str(body).unwrap();
        assert!(page.results.is_empty());
    }
}
