use crate::models::{AdviceItem, Acknowledgement, BudgetRequest, NewTransaction, Summary, Transaction};
use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} responded with {status}")]
    Status { endpoint: String, status: StatusCode },
    #[error("{endpoint} returned a malformed payload: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{endpoint} returned {found} where {expected} was expected")]
    Shape {
        endpoint: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Client for the upstream finance API.
#[derive(Clone)]
pub struct FinanceApi {
    client: Client,
    base: String,
}

impl FinanceApi {
    pub fn new(base: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: base.into(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn fetch_summary(&self) -> Result<Summary, ApiError> {
        let endpoint = "/summary";
        let bytes = self.get(endpoint).await?;
        expect_top_level(endpoint, &bytes, b'{', "an object")?;
        decode(endpoint, &bytes)
    }

    pub async fn fetch_transactions(&self, limit: usize) -> Result<Vec<Transaction>, ApiError> {
        let endpoint = format!("/transactions?limit={limit}");
        let bytes = self.get(&endpoint).await?;
        expect_top_level(&endpoint, &bytes, b'[', "an array")?;
        decode(&endpoint, &bytes)
    }

    pub async fn fetch_advice(&self) -> Result<Vec<AdviceItem>, ApiError> {
        let endpoint = "/ai-advice";
        let bytes = self.get(endpoint).await?;
        expect_top_level(endpoint, &bytes, b'[', "an array")?;
        decode(endpoint, &bytes)
    }

    pub async fn submit_transaction(
        &self,
        record: &NewTransaction,
    ) -> Result<Acknowledgement, ApiError> {
        let endpoint = "/transactions";
        let bytes = self.post(endpoint, record).await?;
        decode(endpoint, &bytes)
    }

    pub async fn submit_budget(&self, request: &BudgetRequest) -> Result<Acknowledgement, ApiError> {
        let endpoint = "/budgets";
        let bytes = self.post(endpoint, request).await?;
        decode(endpoint, &bytes)
    }

    async fn get(&self, endpoint: &str) -> Result<Vec<u8>, ApiError> {
        let request = self.client.get(self.url(endpoint));
        self.send(endpoint, request).await
    }

    async fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<Vec<u8>, ApiError> {
        let request = self.client.post(self.url(endpoint)).json(body);
        self.send(endpoint, request).await
    }

    async fn send(
        &self,
        endpoint: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Vec<u8>, ApiError> {
        let transport = |source| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }
        let bytes = response.bytes().await.map_err(transport)?;
        Ok(bytes.to_vec())
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base)
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

/// Checks the outermost JSON value without parsing it into a `Value`, which
/// would lose the key order of objects.
fn expect_top_level(
    endpoint: &str,
    bytes: &[u8],
    opener: u8,
    expected: &'static str,
) -> Result<(), ApiError> {
    let first = bytes.iter().copied().find(|byte| !byte.is_ascii_whitespace());
    if first == Some(opener) {
        return Ok(());
    }
    Err(ApiError::Shape {
        endpoint: endpoint.to_string(),
        expected,
        found: describe(first),
    })
}

fn describe(first: Option<u8>) -> &'static str {
    match first {
        None => "an empty body",
        Some(b'{') => "an object",
        Some(b'[') => "an array",
        Some(b'"') => "a string",
        Some(b'n') => "null",
        Some(b't' | b'f') => "a boolean",
        Some(_) => "a scalar",
    }
}
