use std::{cmp::Reverse, path::PathBuf, sync::Arc, time::Instant};

use chrono::{DateTime, Utc};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::Serialize;
use wordgrid_engine::{
    ActionError, Board, Dictionary, GameConfig, GameOver, GameSession, Placement, TileSeed,
    legal_placements, scan, score_matches,
};

use crate::{
    command::GameArg,
    logging::{self, LogTarget},
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    #[clap(flatten)]
    pub(crate) game: GameArg,
    /// Number of games to play
    #[clap(long, default_value_t = 1)]
    pub(crate) games: usize,
    /// Stop a game after this many placements
    #[clap(long, default_value_t = 10_000)]
    max_turns: usize,
    /// Output file for the JSON report (stdout if omitted)
    #[clap(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct AutoPlayReport {
    started_at: DateTime<Utc>,
    /// Seed of the first game; later game seeds are drawn from it.
    seed: TileSeed,
    dictionary_words: usize,
    config: GameConfig,
    best_score: u32,
    games: Vec<GameSummary>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct GameSummary {
    seed: TileSeed,
    score: u32,
    turns: usize,
    words: Vec<String>,
    /// `None` when the game was cut off by `--max-turns`.
    outcome: Option<GameOver>,
    final_board: Board,
}

pub(crate) fn run(arg: &AutoPlayArg) -> anyhow::Result<()> {
    let AutoPlayArg {
        game,
        games,
        max_turns,
        output,
    } = arg;

    logging::init(LogTarget::file_or(
        game.log_file.as_deref(),
        LogTarget::Stderr,
    ))?;

    let dictionary = game.load_dictionary();
    let config = game.load_config()?;
    let seed = game.seed.unwrap_or_else(|| rand::rng().random());

    let report = play_games(&dictionary, config, seed, *games, *max_turns)?;
    Output::save_json(&report, output.clone())?;
    Ok(())
}

fn play_games(
    dictionary: &Arc<Dictionary>,
    config: GameConfig,
    seed: TileSeed,
    games: usize,
    max_turns: usize,
) -> Result<AutoPlayReport, ActionError> {
    let started_at = Utc::now();
    let mut seeds = Pcg32::from_seed(seed.to_bytes());
    let mut best_score = 0;
    let mut summaries = Vec::with_capacity(games);

    for index in 0..games {
        let game_seed = if index == 0 { seed } else { seeds.random() };
        let start = Instant::now();
        let summary = play_game(
            Arc::clone(dictionary),
            config,
            best_score,
            game_seed,
            max_turns,
        )?;
        tracing::info!(
            game = index,
            seed = %game_seed,
            score = summary.score,
            turns = summary.turns,
            elapsed = ?start.elapsed(),
            "game finished"
        );
        best_score = best_score.max(summary.score);
        summaries.push(summary);
    }

    Ok(AutoPlayReport {
        started_at,
        seed,
        dictionary_words: dictionary.len(),
        config,
        best_score,
        games: summaries,
    })
}

fn play_game(
    dictionary: Arc<Dictionary>,
    config: GameConfig,
    high_score: u32,
    seed: TileSeed,
    max_turns: usize,
) -> Result<GameSummary, ActionError> {
    let mut session = GameSession::with_seed(dictionary, config, high_score, seed);
    let mut turns = 0;
    while turns < max_turns && !session.state().is_game_over() {
        let Some(placement) = best_placement(&session) else {
            break;
        };
        play_placement(&mut session, placement)?;
        turns += 1;
    }
    if turns == max_turns && !session.state().is_game_over() {
        tracing::warn!(%seed, max_turns, "game cut off");
    }

    let state = session.state();
    Ok(GameSummary {
        seed,
        score: state.score,
        turns,
        words: state.scored_words.clone(),
        outcome: state.game_over,
        final_board: session.board().clone(),
    })
}

/// Picks the placement scoring the most points this turn, preferring the one
/// leaving the fewest letters on the board.
fn best_placement(session: &GameSession) -> Option<Placement> {
    legal_placements(session.board(), session.slots())
        .map(|(placement, block)| {
            let mut board = session.board().clone();
            board.place(&block, placement.row, placement.col);
            let matches = scan(&board, session.dictionary());
            let turn = score_matches(&mut board, &matches);
            (placement, (turn.points, Reverse(board.occupied_count())))
        })
        .max_by_key(|&(_, key)| key)
        .map(|(placement, _)| placement)
}

fn play_placement(session: &mut GameSession, placement: Placement) -> Result<(), ActionError> {
    session.select_slot(placement.slot)?;
    for _ in 0..placement.rotation {
        session.rotate_selected()?;
    }
    let report = session.place_selected(placement.row, placement.col)?;
    tracing::debug!(
        slot = placement.slot,
        row = placement.row,
        col = placement.col,
        points = report.points,
        words = ?report.words,
        "bot placed block"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use wordgrid_engine::SLOT_COUNT;

    use super::*;

    fn seed() -> TileSeed {
        "00112233445566778899aabbccddeeff".parse().unwrap()
    }

    #[test]
    fn test_games_are_reproducible() {
        let dictionary = Arc::new(Dictionary::builtin());
        let config = GameConfig::default();
        let first = play_games(&dictionary, config, seed(), 2, 40).unwrap();
        let second = play_games(&dictionary, config, seed(), 2, 40).unwrap();
        assert_eq!(first.games, second.games);
        assert_eq!(first.games[0].seed, seed());
        assert_ne!(first.games[1].seed, seed());
    }

    #[test]
    fn test_game_summary() {
        let summary = play_game(
            Arc::new(Dictionary::builtin()),
            GameConfig::default(),
            0,
            seed(),
            25,
        )
        .unwrap();
        assert!(summary.turns <= 25);
        assert_eq!(summary.score % 100, 0);
        if summary.outcome.is_none() {
            assert_eq!(summary.turns, 25);
        }
        if summary.score == 0 {
            assert!(summary.words.is_empty());
        }
    }

    #[test]
    fn test_best_placement_is_legal() {
        let session = GameSession::with_seed(
            Arc::new(Dictionary::builtin()),
            GameConfig::default(),
            0,
            seed(),
        );
        let placement = best_placement(&session).unwrap();
        assert!(placement.slot < SLOT_COUNT);
        assert!(placement.rotation < 4);

        let mut played = session.clone();
        play_placement(&mut played, placement).unwrap();
        assert_eq!(played.state().interaction.selected_slot(), None);
        assert!(played.slots().iter().all(|slot| slot.is_some()));
        assert_ne!(played.board(), session.board());
    }

    #[test]
    fn test_empty_dictionary_never_scores() {
        let summary = play_game(
            Arc::new(Dictionary::default()),
            GameConfig::default(),
            0,
            seed(),
            200,
        )
        .unwrap();
        assert_eq!(summary.score, 0);
        assert!(summary.words.is_empty());
        // Nothing is ever cleared, so the board fills up and the game ends.
        assert!(matches!(
            summary.outcome,
            Some(GameOver::FinalScore { score: 0, .. })
        ));
    }

    #[test]
    fn test_report_json() {
        let report = play_games(
            &Arc::new(Dictionary::builtin()),
            GameConfig::default(),
            seed(),
            1,
            5,
        )
        .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["seed"], "00112233445566778899aabbccddeeff");
        assert_eq!(json["games"][0]["seed"], "00112233445566778899aabbccddeeff");
        assert_eq!(json["config"]["initial_discards"], 5);
        assert!(json["started_at"].is_string());
        assert_eq!(
            json["games"][0]["final_board"].as_str().unwrap().split('/').count(),
            9
        );
    }
}
