use rand::Rng;
use tracing::warn;

use super::direction::Direction;

/// A single grid cell: either still blank or holding an uppercase letter.
///
/// Blanks only exist while a board is being generated; [`Board::fill_blanks`]
/// replaces every one of them with a random letter before play starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Blank,
    Letter(char),
}

/// A word committed to the board: its text, start cell, and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub word: String,
    pub start: (usize, usize),
    pub direction: Direction,
}

impl PlacedWord {
    /// The (row, col) path covered by this word, letter by letter.
    pub fn path(&self) -> Vec<(usize, usize)> {
        let (dr, dc) = self.direction.delta();
        (0..self.word.chars().count())
            .map(|i| {
                let row = self.start.0 as i32 + dr * i as i32;
                let col = self.start.1 as i32 + dc * i as i32;
                (row as usize, col as usize)
            })
            .collect()
    }
}

/// Square letter grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-blank board of the given side length.
    pub fn empty(size: usize) -> Board {
        Board {
            size,
            cells: vec![Cell::Blank; size * size],
        }
    }

    /// Generate a playable board: hide each word somewhere on the grid, then
    /// fill the leftover blanks with random letters.
    ///
    /// A word that cannot be placed within `attempts` random trials is left
    /// off the board; generation never fails outright.
    pub fn generate(size: usize, words: &[String], attempts: u32, rng: &mut impl Rng) -> Board {
        let mut board = Board::empty(size);
        for word in words {
            board.place_word(word, attempts, rng);
        }
        board.fill_blanks(rng);
        board
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col), or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[self.idx(row, col)])
    }

    /// Letter at (row, col); `None` for out-of-bounds or still-blank cells.
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        match self.get(row, col)? {
            Cell::Letter(letter) => Some(letter),
            Cell::Blank => None,
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over the grid one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.size)
    }

    /// Try up to `attempts` random (start, direction) pairs for the word and
    /// commit the first that fits. Returns `None` if every trial failed.
    pub fn place_word(
        &mut self,
        word: &str,
        attempts: u32,
        rng: &mut impl Rng,
    ) -> Option<PlacedWord> {
        for _ in 0..attempts {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let start = (
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            if let Some(placed) = self.place_word_at(word, start, direction) {
                return Some(placed);
            }
        }
        warn!(word = %word, attempts, "word dropped, no placement found");
        None
    }

    /// Place the word at an exact start cell and direction, if it fits.
    ///
    /// A word fits when every cell along its path is in bounds and either
    /// blank or already holding the same letter, so placed words may cross.
    pub fn place_word_at(
        &mut self,
        word: &str,
        start: (usize, usize),
        direction: Direction,
    ) -> Option<PlacedWord> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return None;
        }
        let path = self.placement_path(&letters, start, direction)?;
        for (&(row, col), &letter) in path.iter().zip(&letters) {
            let idx = self.idx(row, col);
            self.cells[idx] = Cell::Letter(letter);
        }
        Some(PlacedWord {
            word: word.to_string(),
            start,
            direction,
        })
    }

    /// Replace every remaining blank with a random letter A-Z.
    pub fn fill_blanks(&mut self, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            if *cell == Cell::Blank {
                *cell = Cell::Letter((b'A' + rng.random_range(0..26u8)) as char);
            }
        }
    }

    /// Cell path the word would occupy from `start` along `direction`, or
    /// `None` if it leaves the grid or collides with a different letter.
    fn placement_path(
        &self,
        letters: &[char],
        start: (usize, usize),
        direction: Direction,
    ) -> Option<Vec<(usize, usize)>> {
        let mut path = Vec::with_capacity(letters.len());
        for (i, &letter) in letters.iter().enumerate() {
            let (row, col) = direction.offset_from(start, i, self.size)?;
            match self.cells[self.idx(row, col)] {
                Cell::Blank => {}
                Cell::Letter(existing) if existing == letter => {}
                Cell::Letter(_) => return None,
            }
            path.push((row, col));
        }
        Some(path)
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }
}
