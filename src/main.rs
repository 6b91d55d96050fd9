use std::sync::Arc;

use ambulance_api::api::{AppState, create_router};
use ambulance_api::config::CONFIG;
use ambulance_api::crawler::SearchCrawler;
use ambulance_api::faq::FaqBook;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ambulance-api", version, about = "Ambulance listings and FAQ chatbot API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Scrape the search page once and print the results as JSON
    Scrape,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(CONFIG.log_level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Bridge log crate -> tracing (so log::info! etc. work)
    tracing_log::LogTracer::init()?;

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => serve(host, port).await,
        Command::Scrape => scrape_once().await,
    }
}

async fn serve(host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let host = host.unwrap_or_else(|| CONFIG.host.clone());
    let port = port.unwrap_or(CONFIG.port);

    let state = Arc::new(AppState::new(
        SearchCrawler::from_config(),
        FaqBook::default(),
    ));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    tracing::warn!("CORS allows every origin, method and header");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn scrape_once() -> anyhow::Result<()> {
    let crawler = SearchCrawler::from_config();
    let items = crawler.scrape().await?;
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}
