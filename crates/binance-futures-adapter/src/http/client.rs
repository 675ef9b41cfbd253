/*
[INPUT]:  HTTP configuration (network, timeouts, recv window, credentials)
[OUTPUT]: Configured reqwest client ready for public and signed API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::signature::RequestSigner;
use crate::http::{FuturesError, Result};
use crate::types::{ApiErrorBody, OrderParams};

/// Base URLs for the USDⓈ-M futures API
const MAINNET_BASE_URL: &str = "https://fapi.binance.com";
const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

/// Header carrying the API key on signed requests
const API_KEY_HEADER: &str = "X-MBX-APIKEY";

pub const DEFAULT_RECV_WINDOW_MS: u64 = 5_000;

/// Exchange deployment target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
}

impl Network {
    pub fn base_url(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_BASE_URL,
            Network::Testnet => TESTNET_BASE_URL,
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Network::Testnet)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub network: Network,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub recv_window_ms: u64,
}

impl ClientConfig {
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
        }
    }
}

/// API key/secret pair for signed requests. Held in memory only.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into().trim().to_string();
        let api_secret = api_secret.into().trim().to_string();
        if api_key.is_empty() {
            return Err(FuturesError::Config("API key must not be empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(FuturesError::Config("API secret must not be empty".to_string()));
        }
        Ok(Self { api_key, api_secret })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Binance futures API.
///
/// Immutable once built: base URL, recv window and credentials are fixed at
/// construction.
#[derive(Debug)]
pub struct FuturesClient {
    http_client: Client,
    base_url: Url,
    recv_window_ms: u64,
    credentials: Option<Credentials>,
    signer: Option<RequestSigner>,
}

impl FuturesClient {
    /// Create a public (unsigned) client for the configured network
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.network.base_url();
        Self::with_base_url(config, base_url)
    }

    /// Create a client against an explicit base URL (mock servers, proxies)
    pub fn with_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http_client,
            base_url,
            recv_window_ms: config.recv_window_ms,
            credentials: None,
            signer: None,
        })
    }

    /// Attach credentials, enabling signed endpoints
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.signer = Some(RequestSigner::new(credentials.api_secret()));
        self.credentials = Some(credentials);
        self
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoints resolve under the base path, so `http://proxy/binance` keeps
    /// its `/binance` prefix.
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build request builder for public endpoints
    pub(crate) fn public_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build a signed request: `params`, `recvWindow` and `timestamp` go into
    /// the query string, followed by the HMAC signature over all of them.
    pub(crate) fn signed_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &OrderParams,
        timestamp_ms: i64,
    ) -> Result<RequestBuilder> {
        let (credentials, signer) = match (&self.credentials, &self.signer) {
            (Some(credentials), Some(signer)) => (credentials, signer),
            _ => return Err(FuturesError::MissingCredentials),
        };

        let mut signed = params.clone();
        signed.insert("recvWindow", self.recv_window_ms.to_string());
        signed.insert("timestamp", timestamp_ms.to_string());
        let query = signed.to_query_string();
        let signature = signer.sign(&query);

        let mut url = self.endpoint_url(endpoint)?;
        url.set_query(Some(&format!("{query}&signature={signature}")));

        Ok(self
            .http_client
            .request(method, url)
            .header(API_KEY_HEADER, credentials.api_key()))
    }

    /// Send a request and decode the JSON body, turning non-2xx responses
    /// into `Api` (structured body) or `InvalidResponse` (anything else).
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(err) = serde_json::from_str::<ApiErrorBody>(&body) {
                return Err(FuturesError::Api {
                    code: err.code,
                    message: err.msg,
                });
            }
            return Err(FuturesError::InvalidResponse(format!("HTTP {status}: {body}")));
        }

        debug!(status = status.as_u16(), bytes = body.len(), "response received");
        Ok(serde_json::from_str(&body)?)
    }
}
