use serde::{Deserialize, Serialize};

use super::{
    board::{BOARD_HEIGHT, BOARD_WIDTH, Board, CellPos},
    dictionary::{Dictionary, MIN_WORD_LEN},
};

/// Direction in which a word reads on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A dictionary word found on the board together with the cells spelling it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    pub word: String,
    pub cells: Vec<CellPos>,
    pub orientation: Orientation,
}

/// Finds every word match on the board.
///
/// Every row is scanned first, then every column. From each start cell the
/// run of letters is extended until an empty cell or the edge; the longest
/// dictionary word reachable from that start is kept. Different starts inside
/// one run report independently, so matches may overlap.
///
/// # Example
///
/// ```
/// use wordgrid_engine::{Board, CellPos, Dictionary, Orientation, scan};
///
/// let board = Board::from_ascii("DAD......");
/// let matches = scan(&board, &Dictionary::new(["DAD"]));
///
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].word, "DAD");
/// assert_eq!(matches[0].orientation, Orientation::Horizontal);
/// assert_eq!(
///     matches[0].cells,
///     [CellPos::new(0, 0), CellPos::new(0, 1), CellPos::new(0, 2)]
/// );
/// ```
#[must_use]
pub fn scan(board: &Board, dictionary: &Dictionary) -> Vec<WordMatch> {
    let mut matches = vec![];
    if dictionary.is_empty() {
        return matches;
    }
    for row in 0..BOARD_HEIGHT {
        let line: Vec<_> = (0..BOARD_WIDTH).map(|col| CellPos::new(row, col)).collect();
        scan_line(board, dictionary, &line, Orientation::Horizontal, &mut matches);
    }
    for col in 0..BOARD_WIDTH {
        let line: Vec<_> = (0..BOARD_HEIGHT).map(|row| CellPos::new(row, col)).collect();
        scan_line(board, dictionary, &line, Orientation::Vertical, &mut matches);
    }
    matches
}

fn scan_line(
    board: &Board,
    dictionary: &Dictionary,
    line: &[CellPos],
    orientation: Orientation,
    matches: &mut Vec<WordMatch>,
) {
    for start in 0..line.len() {
        let mut word = String::new();
        let mut longest = None;
        for (len, &pos) in line[start..].iter().enumerate().map(|(i, pos)| (i + 1, pos)) {
            let Some(letter) = board.cell(pos) else {
                break;
            };
            word.push(letter.as_char());
            if len >= MIN_WORD_LEN && dictionary.contains(&word) {
                longest = Some(len);
            }
        }
        if let Some(len) = longest {
            matches.push(WordMatch {
                word: word[..len].to_owned(),
                cells: line[start..start + len].to_vec(),
                orientation,
            });
        }
    }
}
