use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use client_core::{load_settings, Dispatcher, Settings};
use shared::domain::Endpoint;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "remote-cli", about = "Send a start/stop command to a remote recorder")]
struct Args {
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,
    /// Print the status as JSON instead of plain text.
    #[arg(long)]
    json: bool,
    #[arg(value_enum)]
    command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Start,
    Stop,
}

impl From<Command> for Endpoint {
    fn from(command: Command) -> Self {
        match command {
            Command::Start => Endpoint::Start,
            Command::Stop => Endpoint::Stop,
        }
    }
}

impl Args {
    fn settings(&self, mut settings: Settings) -> Settings {
        if let Some(v) = &self.address {
            settings.default_address = v.clone();
        }
        if let Some(v) = self.port {
            settings.port = v;
        }
        if let Some(v) = self.timeout_ms {
            settings.timeout_ms = v;
        }
        settings
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let settings = args.settings(load_settings());

    let dispatcher = Dispatcher::new(&settings)?;
    let status = dispatcher
        .dispatch(&settings.default_address, args.command.into())
        .await;

    if args.json {
        println!("{}", serde_json::to_string(&status)?);
    } else {
        println!("{status}");
    }

    Ok(if status.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
