//! Dual terminal/file logging init (spec §2 ambient stack), grounded in the
//! teacher's `rbp_core::log()`: DEBUG to a timestamped file under `logs/`,
//! INFO to the terminal, colored and mixed with the progress output.

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn init() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time moves forward")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        File::create(format!("logs/{stamp}.log")).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
