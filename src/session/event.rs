use crate::game::Board;

/// Outcome of a word submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Whether the candidate matched a remaining word.
    pub matched: bool,
    /// The matched word in its canonical forward form.
    pub word: Option<String>,
    /// Points gained (positive) or lost (negative) by this submission.
    pub score_delta: i32,
}

/// A revealed hint: the chosen word and its cell path on the board.
///
/// The path is empty when the word never made it onto the board during
/// generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub word: String,
    pub cells: Vec<(usize, usize)>,
}

/// Clock reading returned by `Session::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub elapsed: u32,
    pub remaining: u32,
    /// The budget has run out and the session is over.
    pub expired: bool,
    /// Thirty seconds or less remain.
    pub low_time: bool,
}

/// Updates queued for rendering collaborators to drain.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A freshly generated board is ready to draw.
    BoardReady(Board),
    /// The remaining word set changed; the full list is attached.
    WordSetChanged(Vec<String>),
    /// Every word on the level was found.
    LevelCompleted { level: u32, score: u32 },
    /// The clock ran out.
    TimeExpired { level: u32, score: u32 },
}
