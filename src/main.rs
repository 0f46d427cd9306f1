use std::net::TcpListener;

use env_logger::Env;
use finder::{
    configuration::get_configuration,
    services::{Finder, GeminiClient},
    startup::run,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?;
    if configuration.gemini.api_key.is_empty() {
        log::warn!("No Gemini API key configured, set APP_GEMINI__API_KEY");
    }

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    log::info!("Listening on {}", address);

    let gemini_client = GeminiClient::new(&configuration.gemini)?;
    let finder = Finder::new(gemini_client);

    run(listener, finder)?.await?;
    Ok(())
}
