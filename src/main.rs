use std::time::Instant;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordmark::client::{render, HttpWordmarkApi, Orchestrator, SystemClipboard};
use wordmark::{api, config};

#[derive(Parser)]
#[command(name = "wordmark")]
#[command(about = "A random word, its definitions, and what you saw before")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Wordmark server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Open the word page in the terminal
    Show {
        /// Server base URL (defaults to WORDMARK_URL or http://127.0.0.1:3000)
        #[arg(short, long)]
        url: Option<String>,
    },
}

/// Initialize tracing with output to stderr (for the terminal page) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "wordmark=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // The page owns stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let config = config::ServerConfig::from_env();
    tracing::info!(
        "Starting Wordmark server on {}:{} (production: {})",
        host,
        port,
        config.production
    );

    let app = api::create_router(config);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Wordmark server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn show(url: Option<String>) -> anyhow::Result<()> {
    let api = match url {
        Some(url) => HttpWordmarkApi::new(url)?,
        None => HttpWordmarkApi::from_env()?,
    };
    let mut page = Orchestrator::new(api, SystemClipboard::new());

    println!("{}", render(page.view(), Instant::now()));
    page.load().await;
    println!("{}", render(page.view(), Instant::now()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        // While "Copied!" is up, also wake when it expires so the label reverts.
        let line = match page.view().copy_feedback_remaining(Instant::now()) {
            Some(remaining) => tokio::select! {
                line = lines.next_line() => line?,
                _ = tokio::time::sleep(remaining) => {
                    println!("{}", render(page.view(), Instant::now()));
                    continue;
                }
            },
            None => lines.next_line().await?,
        };
        let Some(line) = line else {
            break;
        };

        match line.trim() {
            "n" => {
                println!("{}", render(&Default::default(), Instant::now()));
                page.new_word().await;
            }
            "s" => {
                if let Err(e) = page.save(Instant::now()) {
                    eprintln!("Could not copy: {}", e);
                }
            }
            "h" => page.toggle_history(),
            "q" => break,
            "" => {}
            other => {
                eprintln!("Unknown command {:?}", other);
                continue;
            }
        }
        println!("{}", render(page.view(), Instant::now()));
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = matches!(cli.command, Some(Commands::Show { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { port, host }) => serve(&host, port).await?,
        Some(Commands::Show { url }) => show(url).await?,
        None => serve("127.0.0.1", 3000).await?,
    }

    Ok(())
}
