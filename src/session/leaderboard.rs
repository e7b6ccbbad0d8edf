use serde::{Deserialize, Serialize};

/// How many records the board keeps.
pub const MAX_ENTRIES: usize = 10;

/// One leaderboard record, shaped for JSON persistence by the host.
///
/// `time` is the remaining clock at capture formatted as MM:SS, and `date`
/// is unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub level: u32,
    pub time: String,
    pub date: u64,
}

/// Top-scores table: descending by score, ties keep insertion order, capped
/// at [`MAX_ENTRIES`].
///
/// Serializes as a bare array of entries, the layout hosts persist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Leaderboard {
            entries: Vec::new(),
        }
    }

    /// Add a record, keeping the table sorted and capped.
    pub fn record(&mut self, entry: LeaderboardEntry) {
        self.entries.push(entry);
        // Stable sort, so equal scores stay in the order they arrived.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Format a second count as a zero-padded MM:SS clock.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
