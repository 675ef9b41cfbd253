/*
[INPUT]:  CLI arguments, operator input on the terminal
[OUTPUT]: One placed order (prompt mode) or an interactive order form
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, front-end selection, or startup flow
*/

mod cli;
mod tui;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;

use binance_futures_adapter::{ClientConfig, Network};
use binance_futures_bot::logging::{
    LOG_BUFFER_CAPACITY, LogBuffer, init_tracing, init_tracing_with_buffer,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum UiMode {
    /// Sequential prompts, one order per run
    Prompt,
    /// Full-screen order form
    Form,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum NetworkArg {
    Testnet,
    Mainnet,
}

impl From<NetworkArg> for Network {
    fn from(value: NetworkArg) -> Self {
        match value {
            NetworkArg::Testnet => Network::Testnet,
            NetworkArg::Mainnet => Network::Mainnet,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "binance-futures-bot",
    version,
    about = "Place single orders on Binance USD-M futures"
)]
struct Cli {
    #[arg(long = "ui", value_enum, default_value_t = UiMode::Prompt)]
    ui: UiMode,
    #[arg(long = "network", value_enum, default_value_t = NetworkArg::Testnet)]
    network: NetworkArg,
    /// Override the exchange base URL (mock exchanges, proxies)
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = ClientConfig::for_network(args.network.into());

    match args.ui {
        UiMode::Prompt => {
            init_tracing(&args.log_level)?;
            info!(network = %config.network, "starting prompt mode");
            cli::prompt::run_prompt(config, args.base_url.as_deref()).await
        }
        UiMode::Form => {
            let log_buffer = LogBuffer::handle(LOG_BUFFER_CAPACITY);
            init_tracing_with_buffer(&args.log_level, log_buffer.clone())?;
            info!(network = %config.network, "starting form mode");
            tui::run_form(config, args.base_url, log_buffer).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_prompt_on_testnet() {
        let cli = Cli::try_parse_from(["binance-futures-bot"]).unwrap();
        assert_eq!(cli.ui, UiMode::Prompt);
        assert_eq!(Network::from(cli.network), Network::Testnet);
        assert_eq!(cli.base_url, None);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn form_mode_on_mainnet_with_override() {
        let cli = Cli::try_parse_from([
            "binance-futures-bot",
            "--ui",
            "form",
            "--network",
            "mainnet",
            "--base-url",
            "http://127.0.0.1:9000",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.ui, UiMode::Form);
        assert_eq!(Network::from(cli.network), Network::Mainnet);
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn unknown_ui_mode_is_rejected() {
        assert!(Cli::try_parse_from(["binance-futures-bot", "--ui", "gui"]).is_err());
    }
}
