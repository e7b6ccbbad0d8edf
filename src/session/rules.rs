/// Scoring and placement rules for a session.
///
/// The defaults are the canonical game rules; [`crate::config::GameConfig`]
/// can override them from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Random placement trials per word before it is dropped from the board.
    pub placement_attempts: u32,
    /// Points awarded per letter of a found word.
    pub letter_score: u32,
    /// Points deducted for a submission that matches nothing.
    pub miss_penalty: u32,
    /// Points a hint costs.
    pub hint_penalty: u32,
    /// Hints allowed per level.
    pub max_hints: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            placement_attempts: 100,
            letter_score: 10,
            miss_penalty: 5,
            hint_penalty: 20,
            max_hints: 3,
        }
    }
}
