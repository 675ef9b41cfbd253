/*
[INPUT]:  Operator credentials, network choice, optional base URL override
[OUTPUT]: Connected Session (client + synced clock offset) placing orders
[POS]:    Shared front-end plumbing between prompt and form modes
[UPDATE]: When session setup or outcome presentation changes
*/

use std::sync::Arc;

use binance_futures_adapter::{
    ClientConfig, Clock, ClockOffset, Credentials, ExchangeGateway, FuturesClient, Network,
    OrderOutcome, OrderRequest, OrderSubmitter, Result, SystemClock, TimeSynchronizer,
};
use tracing::info;

/// One configured connection to the exchange.
///
/// The clock offset is measured once in [`Session::connect`] and reused for
/// every order placed through this session.
pub struct Session {
    network: Network,
    credentials: Credentials,
    submitter: OrderSubmitter,
}

impl Session {
    pub async fn connect(
        credentials: Credentials,
        config: ClientConfig,
        base_url: Option<&str>,
    ) -> Result<Self> {
        Self::connect_with_clock(credentials, config, base_url, Arc::new(SystemClock)).await
    }

    pub async fn connect_with_clock(
        credentials: Credentials,
        config: ClientConfig,
        base_url: Option<&str>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let network = config.network;
        let client = match base_url {
            Some(url) => FuturesClient::with_base_url(config, url)?,
            None => FuturesClient::new(config)?,
        }
        .with_credentials(credentials.clone());
        let base = client.base_url().to_string();
        let gateway: Arc<dyn ExchangeGateway> = Arc::new(client);

        let offset = TimeSynchronizer::new(gateway.as_ref(), clock.as_ref())
            .sync()
            .await;
        info!(%network, base_url = %base, offset_ms = offset.as_millis(), "session initialized");

        Ok(Self {
            network,
            credentials,
            submitter: OrderSubmitter::new(gateway, clock, offset),
        })
    }

    pub async fn place(&self, request: &OrderRequest) -> OrderOutcome {
        self.submitter.place(request).await
    }

    pub fn offset(&self) -> ClockOffset {
        self.submitter.offset()
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Whether this session was built for exactly these inputs.
    pub fn matches(&self, credentials: &Credentials, network: Network) -> bool {
        self.network == network && &self.credentials == credentials
    }
}

/// One-line operator summary of an outcome.
pub fn summarize_outcome(outcome: &OrderOutcome) -> String {
    match outcome {
        OrderOutcome::Success(ack) => {
            format!("Order placed: id {} ({})", ack.order_id, ack.status)
        }
        OrderOutcome::Failure(failure) => match failure.code {
            Some(code) => format!("Order failed [{code}]: {}", failure.message),
            None => format!("Order failed ({}): {}", failure.kind, failure.message),
        },
    }
}
