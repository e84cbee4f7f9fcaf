use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use wave_avg::{Cli, Config, Session};

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from(Cli::parse());
    log::info!("starting with {config:?}");

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), config);
    session.run().context("averaging session failed")?;
    Ok(())
}
