use std::fs::File;

use anyhow::Context;
use log::info;
use simplelog::{LevelFilter, WriteLogger};

use snake::app::SnakeApp;
use snake::config::{GameConfig, LOG_FILE, WINDOW_TITLE};
use snake::term::TermManager;

fn main() -> anyhow::Result<()> {
    // The terminal is in raw mode while playing, so logs go to a file
    WriteLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        File::create(LOG_FILE).context("creating log file")?,
    )
    .context("initializing logger")?;

    let config = GameConfig::default();
    config.validate()?;
    info!("{:?}", config);

    let mut term = TermManager::new().context("reading terminal size")?;
    term.setup(WINDOW_TITLE)?;

    let result = SnakeApp::new(&mut term, config).and_then(|mut app| app.run());

    // Restore the terminal even if the game failed
    term.restore()?;
    result?;

    Ok(())
}
