use bankbot::{
    account::BankAccount,
    app::BankBotApp,
    assistant::BankingAssistant,
    chat::OllamaClient,
    config::{BankingConfig, LlmConfig},
    dispatch::ActionDispatcher,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Keep the REPL quiet by default; RUST_LOG opts into more.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let llm_config = LlmConfig::from_env();
    let banking_config = BankingConfig::from_env();

    info!(
        model = %llm_config.model,
        base_url = %llm_config.base_url,
        "BankBot starting"
    );

    // Create components
    let account = BankAccount::new(banking_config.initial_balance, &banking_config.currency);
    let model = Box::new(OllamaClient::new(&llm_config));
    let assistant = BankingAssistant::new(model, banking_config.max_history_messages);
    let dispatcher = ActionDispatcher::new(banking_config.eur_to_usd_rate);

    let mut app = BankBotApp::new(account, assistant, dispatcher);
    app.run().await?;

    Ok(())
}
