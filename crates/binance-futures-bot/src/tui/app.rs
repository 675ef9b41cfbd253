/*
[INPUT]:  Operator edits, cached Session, log buffer
[OUTPUT]: Form state, focus handling and order submission results
[POS]:    TUI application state
[UPDATE]: When adding form fields or changing submit behaviour
*/

use binance_futures_adapter::{ClientConfig, Credentials, Network, OrderKind, OrderOutcome, Side};
use binance_futures_bot::{LogBufferHandle, OrderForm, Session, summarize_outcome};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum FieldId {
    ApiKey,
    ApiSecret,
    Network,
    Symbol,
    Side,
    Kind,
    Quantity,
    Price,
    StopPrice,
    PlaceOrder,
}

impl FieldId {
    pub(super) fn label(&self) -> &'static str {
        match self {
            FieldId::ApiKey => "API key",
            FieldId::ApiSecret => "API secret",
            FieldId::Network => "Testnet",
            FieldId::Symbol => "Symbol",
            FieldId::Side => "Side",
            FieldId::Kind => "Order type",
            FieldId::Quantity => "Quantity",
            FieldId::Price => "Price",
            FieldId::StopPrice => "Stop price",
            FieldId::PlaceOrder => "Place Order",
        }
    }

    pub(super) fn is_choice(&self) -> bool {
        matches!(self, FieldId::Network | FieldId::Side | FieldId::Kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ResultView {
    Success { summary: String, body: String },
    Error(String),
}

impl From<&OrderOutcome> for ResultView {
    fn from(outcome: &OrderOutcome) -> Self {
        match outcome {
            OrderOutcome::Success(ack) => ResultView::Success {
                summary: summarize_outcome(outcome),
                body: serde_json::to_string_pretty(&ack.raw)
                    .unwrap_or_else(|_| ack.raw.to_string()),
            },
            OrderOutcome::Failure(_) => ResultView::Error(summarize_outcome(outcome)),
        }
    }
}

pub(super) struct FormApp {
    pub(super) api_key: String,
    pub(super) api_secret: String,
    pub(super) network: Network,
    pub(super) order: OrderForm,
    pub(super) focus: usize,
    pub(super) result: Option<ResultView>,
    pub(super) status: String,
    pub(super) log_buffer: LogBufferHandle,
    config: ClientConfig,
    base_url: Option<String>,
    session: Option<Session>,
}

impl FormApp {
    pub(super) fn new(
        config: ClientConfig,
        base_url: Option<String>,
        log_buffer: LogBufferHandle,
    ) -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            network: config.network,
            order: OrderForm::default(),
            focus: 0,
            result: None,
            status: "Fill in the form and press Enter on Place Order".to_string(),
            log_buffer,
            config,
            base_url,
            session: None,
        }
    }

    /// Fields shown for the current order type, in focus order.
    pub(super) fn visible_fields(&self) -> Vec<FieldId> {
        let mut fields = vec![
            FieldId::ApiKey,
            FieldId::ApiSecret,
            FieldId::Network,
            FieldId::Symbol,
            FieldId::Side,
            FieldId::Kind,
            FieldId::Quantity,
        ];
        if self.order.kind.requires_price() {
            fields.push(FieldId::Price);
        }
        if self.order.kind.requires_stop_price() {
            fields.push(FieldId::StopPrice);
        }
        fields.push(FieldId::PlaceOrder);
        fields
    }

    pub(super) fn focused(&self) -> FieldId {
        let fields = self.visible_fields();
        fields
            .get(self.focus)
            .copied()
            .unwrap_or(FieldId::PlaceOrder)
    }

    pub(super) fn move_focus(&mut self, delta: isize) {
        let len = self.visible_fields().len() as isize;
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
    }

    pub(super) fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::ApiKey => Some(&mut self.api_key),
            FieldId::ApiSecret => Some(&mut self.api_secret),
            FieldId::Symbol => Some(&mut self.order.symbol),
            FieldId::Quantity => Some(&mut self.order.quantity),
            FieldId::Price => Some(&mut self.order.price),
            FieldId::StopPrice => Some(&mut self.order.stop_price),
            _ => None,
        }
    }

    pub(super) fn text(&self, field: FieldId) -> &str {
        match field {
            FieldId::ApiKey => &self.api_key,
            FieldId::ApiSecret => &self.api_secret,
            FieldId::Symbol => &self.order.symbol,
            FieldId::Quantity => &self.order.quantity,
            FieldId::Price => &self.order.price,
            FieldId::StopPrice => &self.order.stop_price,
            _ => "",
        }
    }

    /// Step a choice field forwards or backwards.
    pub(super) fn cycle(&mut self, field: FieldId, forward: bool) {
        match field {
            FieldId::Network => {
                self.network = match self.network {
                    Network::Testnet => Network::Mainnet,
                    Network::Mainnet => Network::Testnet,
                };
            }
            FieldId::Side => {
                self.order.side = match self.order.side {
                    Side::Buy => Side::Sell,
                    Side::Sell => Side::Buy,
                };
            }
            FieldId::Kind => {
                let kinds = OrderKind::SUPPORTED;
                let current = kinds
                    .iter()
                    .position(|kind| *kind == self.order.kind)
                    .unwrap_or(0);
                let next = if forward {
                    (current + 1) % kinds.len()
                } else {
                    (current + kinds.len() - 1) % kinds.len()
                };
                self.order.kind = kinds[next];
                let len = self.visible_fields().len();
                self.focus = self.focus.min(len - 1);
            }
            _ => {}
        }
    }

    /// Required fields still blank, credentials included.
    pub(super) fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key.trim().is_empty() {
            missing.push("API key");
        }
        if self.api_secret.trim().is_empty() {
            missing.push("API secret");
        }
        missing.extend(self.order.missing_fields());
        missing
    }

    pub(super) fn can_submit(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Place the order, connecting first when no session matches the
    /// current credentials and network.
    pub(super) async fn submit(&mut self) {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            self.status = format!("Cannot place order, missing: {}", missing.join(", "));
            return;
        }

        let request = match self.order.to_request() {
            Ok(request) => request,
            Err(message) => {
                self.status = message.clone();
                self.result = Some(ResultView::Error(message));
                return;
            }
        };
        let credentials = match Credentials::new(self.api_key.clone(), self.api_secret.clone()) {
            Ok(credentials) => credentials,
            Err(err) => {
                self.status = err.to_string();
                self.result = Some(ResultView::Error(err.to_string()));
                return;
            }
        };

        let reuse = self
            .session
            .as_ref()
            .is_some_and(|session| session.matches(&credentials, self.network));
        if !reuse {
            let config = ClientConfig {
                network: self.network,
                ..self.config.clone()
            };
            match Session::connect(credentials, config, self.base_url.as_deref()).await {
                Ok(session) => self.session = Some(session),
                Err(err) => {
                    warn!(error = %err, "session setup failed");
                    self.session = None;
                    let message = format!("Session setup failed: {err}");
                    self.status = message.clone();
                    self.result = Some(ResultView::Error(message));
                    return;
                }
            }
        }

        let Some(session) = self.session.as_ref() else {
            return;
        };
        let outcome = session.place(&request).await;
        self.status = summarize_outcome(&outcome);
        self.result = Some(ResultView::from(&outcome));
    }
}
