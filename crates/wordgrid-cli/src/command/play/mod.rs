use std::path::PathBuf;

use wordgrid_engine::GameSession;

use crate::{
    command::GameArg,
    logging::{self, LogTarget},
    store::HighScoreStore,
    tui::Tui,
};

use self::app::PlayApp;

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    pub(crate) game: GameArg,
    /// JSON file the high score is read from and saved to
    #[clap(long, default_value = "./data/high_score.json")]
    high_score_file: PathBuf,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        game,
        high_score_file,
    } = arg;

    // The terminal is being drawn on, so logs only go to an explicit file.
    logging::init(LogTarget::file_or(
        game.log_file.as_deref(),
        LogTarget::Disabled,
    ))?;

    let dictionary = game.load_dictionary();
    let config = game.load_config()?;
    let store = HighScoreStore::open(high_score_file)?;
    let high_score = store.high_score();
    let session = match game.seed {
        Some(seed) => GameSession::with_seed(dictionary, config, high_score, seed),
        None => GameSession::new(dictionary, config, high_score),
    };

    let mut app = PlayApp::new(session, store);
    Tui::new().run(&mut app)
}
