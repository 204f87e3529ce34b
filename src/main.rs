//! Learning path navigator
//!
//! Helps choose between the quickstart and comprehensive courses and opens
//! their materials with the system's default application

use anyhow::Result;
use clap::Parser;
use learning_hub::cli::Cli;
use learning_hub::menu::FAREWELL;
use learning_hub::menu::framework::{Console, PageContext};
use learning_hub::observability::init_logging;
use learning_hub::system::FileOpenerFactory;
use learning_hub::{HubConfig, MenuApplication};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    // Ctrl+C outside a raw-mode prompt arrives as a signal: leave right away
    ctrlc::set_handler(|| {
        println!("\n\n{}", FAREWELL);
        std::process::exit(0);
    })?;

    let config = HubConfig::from_cli(&cli);
    tracing::debug!(?config, "starting navigator");

    let context = PageContext::new(Console::stdio(), FileOpenerFactory::detect(), config);
    let mut app = MenuApplication::new(context);
    let reason = app.run()?;

    tracing::debug!(?reason, "navigator finished");
    Ok(())
}
