use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use wordgrid_engine::{Dictionary, GameConfig, TileSeed};

use crate::util;

use self::{auto_play::AutoPlayArg, play::PlayArg};

mod auto_play;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
    /// Options for `play` when no subcommand is given
    #[command(flatten)]
    play: PlayArg,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play interactively in the terminal
    #[command(name = "play")]
    Play(#[clap(flatten)] PlayArg),
    /// Let a greedy bot play headless games and report them as JSON
    #[command(name = "auto-play")]
    AutoPlay(#[clap(flatten)] AutoPlayArg),
}

/// Options shared by every game mode.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GameArg {
    /// Newline-delimited word list (falls back to a built-in list if unreadable)
    #[clap(long, default_value = "wordlist.txt")]
    dictionary: PathBuf,
    /// Game rules as JSON; missing fields use the defaults
    #[clap(long)]
    config: Option<PathBuf>,
    /// Tile seed as 32 hex digits, for reproducible games
    #[clap(long)]
    seed: Option<TileSeed>,
    /// Write logs to this file (filtered by `WORDGRID_LOG`)
    #[clap(long)]
    log_file: Option<PathBuf>,
}

impl GameArg {
    fn load_dictionary(&self) -> Arc<Dictionary> {
        Arc::new(Dictionary::load_or_builtin(&self.dictionary))
    }

    fn load_config(&self) -> anyhow::Result<GameConfig> {
        let Some(path) = &self.config else {
            return Ok(GameConfig::default());
        };
        let config: GameConfig = util::read_json_file("game config", path)?;
        config
            .validate()
            .with_context(|| format!("Invalid game config: {}", path.display()))?;
        Ok(config)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(args.play)) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::AutoPlay(arg) => auto_play::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_args() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_play_is_default() {
        let args =
            CommandArgs::try_parse_from(["wordgrid", "--seed", "00000000000000000000000000000000"])
                .unwrap();
        assert!(args.mode.is_none());
        assert_eq!(args.play.game.dictionary, PathBuf::from("wordlist.txt"));
        assert_eq!(args.play.game.seed, Some(TileSeed::from_bytes([0; 16])));
    }

    #[test]
    fn test_auto_play_args() {
        let args = CommandArgs::try_parse_from([
            "wordgrid",
            "auto-play",
            "--games",
            "3",
            "--dictionary",
            "words.txt",
        ])
        .unwrap();
        let Some(Mode::AutoPlay(arg)) = args.mode else {
            panic!("expected auto-play");
        };
        assert_eq!(arg.games, 3);
        assert_eq!(arg.game.dictionary, PathBuf::from("words.txt"));
    }

    #[test]
    fn test_invalid_seed_rejected() {
        assert!(CommandArgs::try_parse_from(["wordgrid", "play", "--seed", "xyz"]).is_err());
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let args = CommandArgs::try_parse_from(["wordgrid"]).unwrap();
        assert_eq!(args.play.game.load_config().unwrap(), GameConfig::default());
    }
}
