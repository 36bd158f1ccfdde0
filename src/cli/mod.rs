use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod ask;
pub mod chat;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the web server for the site and chat API
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "3000")]
        port: String,
    },
    /// Start a chat session with the trainer in the terminal
    Chat {},
    /// Ask the trainer a single question
    Ask {
        #[arg(long)]
        message: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

// The server sets up its own subscriber with HTTP tracing. Terminal
// commands only want warnings and errors unless RUST_LOG says
// otherwise.
fn init_terminal_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=warn", env!("CARGO_CRATE_NAME")).into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Chat {}) => {
            init_terminal_logging();
            chat::run().await?;
        }
        Some(Command::Ask { message }) => {
            init_terminal_logging();
            ask::run(&message).await?;
        }
        None => {}
    }

    Ok(())
}
