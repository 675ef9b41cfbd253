/*
[INPUT]:  Exchange gateway (time endpoint) and a local clock
[OUTPUT]: ClockOffset applied to signed request timestamps
[POS]:    Core - one-shot server time synchronization
[UPDATE]: When changing sync policy or clock sources
*/

use std::fmt;

use tracing::{error, info};

use crate::http::{ExchangeGateway, Result};

/// Source of local wall-clock time.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
}

/// System clock implementation using real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// `server_time - local_time` in milliseconds, captured once per session.
///
/// Positive means the server clock is ahead. Never refreshed, so it drifts
/// over long sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockOffset(i64);

impl ClockOffset {
    pub fn from_millis(offset_ms: i64) -> Self {
        Self(offset_ms)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Correct a local timestamp to approximate server time.
    pub fn apply(&self, local_ms: i64) -> i64 {
        local_ms + self.0
    }
}

impl fmt::Display for ClockOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}

/// Computes the clock offset against the exchange.
pub struct TimeSynchronizer<'a> {
    gateway: &'a dyn ExchangeGateway,
    clock: &'a dyn Clock,
}

impl<'a> TimeSynchronizer<'a> {
    pub fn new(gateway: &'a dyn ExchangeGateway, clock: &'a dyn Clock) -> Self {
        Self { gateway, clock }
    }

    /// Query server time once and return the offset, or the error.
    pub async fn try_sync(&self) -> Result<ClockOffset> {
        let server_time = self.gateway.server_time().await?;
        let local_time = self.clock.now_ms();
        Ok(ClockOffset::from_millis(server_time - local_time))
    }

    /// Like [`try_sync`](Self::try_sync), but failures are logged and yield a
    /// zero offset so the session can continue unsynced.
    pub async fn sync(&self) -> ClockOffset {
        match self.try_sync().await {
            Ok(offset) => {
                info!(offset_ms = offset.as_millis(), "time synced");
                offset
            }
            Err(err) => {
                error!(error = %err, "failed to sync time; continuing with zero offset");
                ClockOffset::default()
            }
        }
    }
}
