#![deny(warnings)]

use clap::Parser;
use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use energydash::{
    core::state::AppState,
    infrastructure::{
        cli::Cli,
        config::Config,
        dataset_loader::{self, load_dataset},
        tui::real::RealTui,
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based); CLI flags win over it
    let mut config = Config::new()?;

    let dataset_path = args.dataset.clone().or_else(|| config.dataset.clone());
    let dataset = load_dataset(dataset_path.as_deref())?;

    if args.check {
        print!("{}", dataset_loader::summary(&dataset));
        return Ok(());
    }

    if args.no_reveal {
        config.reveal.enabled = false;
    }

    let state = AppState::new(dataset, config, args.route, args.tick_rate);
    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    AppRunner::new(state, tui).run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
