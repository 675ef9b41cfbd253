/*
[INPUT]:  Terminal prompts via dialoguer
[OUTPUT]: CLI prompt front end
[POS]:    CLI module for the binance-futures-bot binary
[UPDATE]: When adding CLI flows
*/

pub mod prompt;
