/*
[INPUT]:  Client configuration, optional base URL override, log buffer
[OUTPUT]: Ratatui order form run loop
[POS]:    TUI module for the binance-futures-bot binary
[UPDATE]: When changing the run loop, tick rate, or input polling
*/

mod app;
mod events;
mod terminal;
mod ui;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use binance_futures_adapter::ClientConfig;
use binance_futures_bot::LogBufferHandle;

use app::FormApp;
use events::{FormAction, handle_key_event};
use terminal::TerminalGuard;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

pub async fn run_form(
    config: ClientConfig,
    base_url: Option<String>,
    log_buffer: LogBufferHandle,
) -> Result<()> {
    let mut terminal = TerminalGuard::enter()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut app = FormApp::new(config, base_url, log_buffer);
    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        let action = tokio::select! {
            _ = tick.tick() => FormAction::None,
            maybe_event = event_rx.recv() => match maybe_event {
                Some(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_key_event(&mut app, key)
                }
                Some(_) => FormAction::None,
                None => FormAction::Quit,
            },
        };

        match action {
            FormAction::None => {}
            FormAction::Quit => break,
            FormAction::Submit => {
                // Requests block the form until they finish.
                app.status = "Placing order...".to_string();
                terminal.draw(|frame| ui::draw(frame, &app))?;
                app.submit().await;
                discard_pending(&mut event_rx);
            }
        }
    }

    input_shutdown.cancel();
    info!("form closed");
    Ok(())
}

/// Drop input queued while a request was in flight so keys pressed during
/// the wait (a second Enter on Place Order) are not replayed afterwards.
fn discard_pending<T>(rx: &mut mpsc::UnboundedReceiver<T>) -> usize {
    let mut dropped = 0;
    while rx.try_recv().is_ok() {
        dropped += 1;
    }
    dropped
}
