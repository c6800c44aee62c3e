use std::io;

use anyhow::Result;
use clap::Parser;
use lab_analytics::{DefaultSource, GameCli, GameOutcome, run_game_analysis};

fn main() -> Result<()> {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("lab_analytics"), my_code_level)
        .parse_default_env()
        .init();

    let args = GameCli::parse();
    log::info!("Analysing {}", args.source);

    let mut stdout = io::stdout().lock();
    match run_game_analysis(&args, DefaultSource, &mut stdout)? {
        GameOutcome::Completed => log::info!("Analysis complete"),
        GameOutcome::LoadFailed => log::warn!("Stopped after load failure"),
    }
    Ok(())
}
