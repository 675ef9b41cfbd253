/*
[INPUT]:  OrderParams / OrderRequest, exchange gateway, clock and offset
[OUTPUT]: OrderOutcome (success payload or classified failure)
[POS]:    Core - single order submission and result normalization
[UPDATE]: When changing submission flow or outcome classification
*/

use std::sync::Arc;

use tracing::{error, info};

use crate::http::{ExchangeGateway, FuturesError};
use crate::order::builder::build_order_params;
use crate::order::outcome::{OrderAck, OrderOutcome};
use crate::sync::{Clock, ClockOffset};
use crate::types::{NewOrderResponse, OrderParams, OrderRequest};

/// Sends orders through a gateway using a fixed clock offset.
///
/// No retries and no client order ids: submitting the same parameters twice
/// places two orders.
pub struct OrderSubmitter {
    gateway: Arc<dyn ExchangeGateway>,
    clock: Arc<dyn Clock>,
    offset: ClockOffset,
}

impl OrderSubmitter {
    pub fn new(gateway: Arc<dyn ExchangeGateway>, clock: Arc<dyn Clock>, offset: ClockOffset) -> Self {
        Self {
            gateway,
            clock,
            offset,
        }
    }

    pub fn offset(&self) -> ClockOffset {
        self.offset
    }

    /// Build and submit. Validation failures return before any network call.
    pub async fn place(&self, request: &OrderRequest) -> OrderOutcome {
        match build_order_params(request) {
            Ok(params) => self.submit(&params).await,
            Err(err) => {
                error!(symbol = %request.symbol, kind = %request.kind, error = %err, "order rejected locally");
                err.into()
            }
        }
    }

    /// Submit prepared parameters and classify the result.
    pub async fn submit(&self, params: &OrderParams) -> OrderOutcome {
        let timestamp_ms = self.offset.apply(self.clock.now_ms());
        let symbol = params.get("symbol").unwrap_or_default();

        let outcome = match self.gateway.new_order(params, timestamp_ms).await {
            Ok(raw) => acknowledge(raw),
            Err(err) => err.into(),
        };

        match &outcome {
            OrderOutcome::Success(ack) => {
                info!(symbol, order_id = ack.order_id, status = %ack.status, "order placed");
            }
            OrderOutcome::Failure(failure) => {
                error!(
                    symbol,
                    kind = %failure.kind,
                    code = ?failure.code,
                    message = %failure.message,
                    "order failed"
                );
            }
        }

        outcome
    }
}

/// A 2xx body must still carry `orderId` and `status` to count as accepted.
fn acknowledge(raw: serde_json::Value) -> OrderOutcome {
    match serde_json::from_value::<NewOrderResponse>(raw.clone()) {
        Ok(response) => OrderOutcome::Success(OrderAck {
            order_id: response.order_id,
            status: response.status,
            raw,
        }),
        Err(err) => FuturesError::InvalidResponse(format!(
            "order response missing orderId/status: {err}"
        ))
        .into(),
    }
}
