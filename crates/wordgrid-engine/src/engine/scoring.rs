use std::collections::BTreeSet;

use serde::Serialize;

use crate::{Board, CellPos, GameConfig, WordMatch};

/// Points for one matched word: 100 per letter beyond the second.
#[must_use]
pub fn word_score(word: &str) -> u32 {
    let len = u32::try_from(word.chars().count()).unwrap_or(u32::MAX);
    len.saturating_sub(2).saturating_mul(100)
}

/// Outcome of scoring one turn's matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TurnScore {
    /// Matched words in scan order.
    pub words: Vec<String>,
    pub points: u32,
    /// Every cell emptied by the turn, each listed once.
    pub cleared: Vec<CellPos>,
}

/// Scores `matches` and clears their cells from the board.
///
/// Overlapping matches each earn their full score, while a shared cell is
/// cleared once. No matches means no change.
///
/// # Example
///
/// ```
/// use wordgrid_engine::{Board, Dictionary, scan, score_matches};
///
/// let mut board = Board::from_ascii("CATS.....");
/// let matches = scan(&board, &Dictionary::new(["CATS", "ATS"]));
/// let score = score_matches(&mut board, &matches);
///
/// assert_eq!(score.points, 200 + 100);
/// assert_eq!(score.cleared.len(), 4);
/// assert!(board.is_empty());
/// ```
pub fn score_matches(board: &mut Board, matches: &[WordMatch]) -> TurnScore {
    if matches.is_empty() {
        return TurnScore::default();
    }
    let points = matches
        .iter()
        .map(|m| word_score(&m.word))
        .fold(0, u32::saturating_add);
    let cleared: BTreeSet<CellPos> = matches.iter().flat_map(|m| m.cells.iter().copied()).collect();
    board.clear_cells(&cleared);
    TurnScore {
        words: matches.iter().map(|m| m.word.clone()).collect(),
        points,
        cleared: cleared.into_iter().collect(),
    }
}

/// Resources earned by a scoring turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rewards {
    pub discards: u32,
    pub board_actions: u32,
}

impl Rewards {
    /// Rewards for a turn worth `points`: nothing for zero, otherwise a flat
    /// discard bonus plus one board action per full `points_per_board_action`.
    #[must_use]
    pub fn for_points(points: u32, config: &GameConfig) -> Self {
        if points == 0 {
            return Self::default();
        }
        Self {
            discards: config.discards_per_scoring_turn,
            board_actions: points
                .checked_div(config.points_per_board_action)
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dictionary, Orientation, scan};

    #[test]
    fn test_word_score() {
        assert_eq!(word_score("CAT"), 100);
        assert_eq!(word_score("GAME"), 200);
        assert_eq!(word_score("ABCDEFGHI"), 700);
        assert_eq!(word_score("OX"), 0);
    }

    #[test]
    fn test_overlapping_matches_share_cells() {
        // CAT across row 0 and CAR down column 0 share the C.
        let mut board = Board::from_ascii(
            "
            CAT......
            A........
            R........
            ",
        );
        let matches = scan(&board, &Dictionary::new(["CAT", "CAR"]));
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].orientation, Orientation::Horizontal);

        let score = score_matches(&mut board, &matches);
        assert_eq!(score.points, 200);
        assert_eq!(score.words, ["CAT", "CAR"]);
        assert_eq!(score.cleared.len(), 5);
        assert!(board.is_empty());
    }

    #[test]
    fn test_no_matches_no_change() {
        let mut board = Board::from_ascii("CAT......");
        let score = score_matches(&mut board, &[]);
        assert_eq!(score, TurnScore::default());
        assert_eq!(board.occupied_count(), 3);
    }

    #[test]
    fn test_unmatched_letters_stay() {
        let mut board = Board::from_ascii("XCATX....");
        let matches = scan(&board, &Dictionary::new(["CAT"]));
        score_matches(&mut board, &matches);
        assert_eq!(board.row_strings()[0], "X...X....");
    }

    #[test]
    fn test_rewards() {
        let config = GameConfig::default();
        assert_eq!(Rewards::for_points(0, &config), Rewards::default());
        assert_eq!(
            Rewards::for_points(100, &config),
            Rewards {
                discards: 2,
                board_actions: 0
            }
        );
        assert_eq!(Rewards::for_points(200, &config).board_actions, 1);
        assert_eq!(Rewards::for_points(599, &config).board_actions, 2);
        assert_eq!(Rewards::for_points(600, &config).board_actions, 3);
    }
}
