use std::{io, panic};

use anyhow::Result;
use clap::Parser;
use lab_analytics::{TravelCli, TravelSession};

fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

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

    let _args = TravelCli::parse();

    let stdin = io::stdin();
    let outcome = TravelSession::new(stdin.lock(), io::stdout()).run()?;
    log::debug!("Travel session finished: {:?}", outcome);
    Ok(())
}
