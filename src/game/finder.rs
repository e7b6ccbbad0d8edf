//! Row-major scan that recovers the cell path of a word hidden on a board.

use super::board::Board;
use super::direction::Direction;

/// Find `word` on the board and return the cell path of its first match.
///
/// Origins are scanned row-major and each origin tries every direction in
/// [`Direction::ALL`] order, so the result is deterministic for a given
/// board. Matching is exact on characters; callers submit uppercase words.
/// Returns an empty path when the word is nowhere on the board.
pub fn locate(board: &Board, word: &str) -> Vec<(usize, usize)> {
    let letters: Vec<char> = word.chars().collect();
    for row in 0..board.size() {
        for col in 0..board.size() {
            for direction in Direction::ALL {
                if let Some(path) = match_at(board, &letters, (row, col), direction) {
                    return path;
                }
            }
        }
    }
    Vec::new()
}

/// Whether the word is on the board at all.
pub fn contains(board: &Board, word: &str) -> bool {
    !word.is_empty() && !locate(board, word).is_empty()
}

fn match_at(
    board: &Board,
    letters: &[char],
    start: (usize, usize),
    direction: Direction,
) -> Option<Vec<(usize, usize)>> {
    let mut path = Vec::with_capacity(letters.len());
    for (i, &letter) in letters.iter().enumerate() {
        let (row, col) = direction.offset_from(start, i, board.size())?;
        if board.letter(row, col) != Some(letter) {
            return None;
        }
        path.push((row, col));
    }
    Some(path)
}
