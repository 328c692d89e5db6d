mod auction;
mod bidding;
mod catalog;
mod console;
mod rules;
mod session;
mod settlement;
mod store;
mod table;

use anyhow::Result;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the auction transcript, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();

    ctrlc::set_handler(|| {
        eprintln!("Auction interrupted, exiting...");
        std::process::exit(130);
    })?;

    let mut console = console::Console::new(io::stdin().lock(), io::stdout());
    session::run(
        &mut console,
        &rules::AuctionRules::default(),
        &auction::BuyerRoster::default(),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests;
