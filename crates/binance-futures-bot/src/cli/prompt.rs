/*
[INPUT]:  Operator answers to sequential terminal prompts
[OUTPUT]: One order submitted and a colored result banner
[POS]:    CLI prompt flow (default front end)
[UPDATE]: When prompt order, validation, or result display changes
*/

use anyhow::{Context, Result, anyhow};
use console::style;
use dialoguer::{Confirm, Input, Password, Select, theme::ColorfulTheme};

use binance_futures_adapter::{ClientConfig, Credentials, OrderKind, OrderOutcome, Side};
use binance_futures_bot::form::parse_positive_decimal;
use binance_futures_bot::{OrderForm, Session};

const SIDES: [Side; 2] = [Side::Buy, Side::Sell];

pub async fn run_prompt(config: ClientConfig, base_url: Option<&str>) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Binance Futures Order Desk").bold().cyan());
    println!("{}", style(format!("network: {}", config.network)).dim());

    let api_key: String = Input::with_theme(&theme)
        .with_prompt("API key")
        .interact_text()?;
    let api_secret = Password::with_theme(&theme)
        .with_prompt("API secret")
        .interact()?;
    let credentials = Credentials::new(api_key, api_secret)?;
    let session = Session::connect(credentials, config, base_url)
        .await
        .context("set up exchange session")?;
    println!(
        "{}",
        style(format!("clock offset: {}", session.offset())).dim()
    );

    let form = collect_order(&theme)?;
    let request = form.to_request().map_err(|message| anyhow!(message))?;

    if !session.network().is_testnet() {
        let confirmed = Confirm::with_theme(&theme)
            .with_prompt(format!(
                "Send {} {} {} {} to MAINNET?",
                request.side, request.quantity, request.symbol, request.kind
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", style("Order cancelled.").yellow());
            return Ok(());
        }
    }

    let outcome = session.place(&request).await;
    print_outcome(&outcome);
    Ok(())
}

fn collect_order(theme: &ColorfulTheme) -> Result<OrderForm> {
    let symbol: String = Input::with_theme(theme)
        .with_prompt("Symbol")
        .default("BTCUSDT".to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err("symbol is required".to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let side_index = Select::with_theme(theme)
        .with_prompt("Side")
        .items(&SIDES.map(|side| side.as_str()))
        .default(0)
        .interact()?;

    let kind_index = Select::with_theme(theme)
        .with_prompt("Order type")
        .items(&OrderKind::SUPPORTED.map(|kind| kind.as_str()))
        .default(0)
        .interact()?;
    let kind = OrderKind::SUPPORTED[kind_index];

    let mut form = OrderForm {
        symbol: symbol.trim().to_ascii_uppercase(),
        side: SIDES[side_index],
        kind,
        quantity: prompt_decimal(theme, "Quantity", "quantity")?,
        ..OrderForm::default()
    };
    if kind.requires_price() {
        form.price = prompt_decimal(theme, "Price", "price")?;
    }
    if kind.requires_stop_price() {
        form.stop_price = prompt_decimal(theme, "Stop price", "stop price")?;
    }
    Ok(form)
}

fn prompt_decimal(theme: &ColorfulTheme, prompt: &str, field: &'static str) -> Result<String> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(move |input: &String| -> Result<(), String> {
            parse_positive_decimal(field, input).map(|_| ())
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn print_outcome(outcome: &OrderOutcome) {
    match outcome {
        OrderOutcome::Success(ack) => {
            println!("{}", style("ORDER PLACED").bold().black().on_green());
            println!("  order id: {}", style(ack.order_id).green());
            println!("  status:   {}", style(&ack.status).green());
            if let Ok(body) = serde_json::to_string_pretty(&ack.raw) {
                println!("{}", style(body).dim());
            }
        }
        OrderOutcome::Failure(failure) => {
            println!("{}", style("ORDER FAILED").bold().white().on_red());
            if let Some(code) = failure.code {
                println!("  code:    {}", style(code).red());
            }
            println!("  reason:  {}", style(&failure.message).red());
        }
    }
}
