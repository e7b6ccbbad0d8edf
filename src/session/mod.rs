//! The play session state machine: level progression, scoring, hints, and
//! the countdown clock, plus the update queue collaborators drain.

mod difficulty;
mod event;
mod leaderboard;
mod rules;

pub use difficulty::{MAX_GRID_SIZE, MIN_GRID_SIZE, MIN_TIME_BUDGET, grid_size, time_budget};
pub use event::{Hint, SessionEvent, Submission, Tick};
pub use leaderboard::{Leaderboard, LeaderboardEntry, MAX_ENTRIES, format_clock};
pub use rules::Rules;

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, warn};

use crate::error::SessionError;
use crate::game::{Board, finder, wordbank};

/// Seconds remaining at or below which [`Tick::low_time`] is set.
pub const LOW_TIME_WARNING: u32 = 30;

/// Where a session currently stands. There is no idle phase: a session is
/// playing from the moment it exists, and "no game" is simply no session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    LevelComplete,
    TimeExpired,
}

/// A running game: one board and word set at a time, advancing through
/// levels until the clock runs out.
///
/// All randomness flows through the session's own rng, so a session built
/// with [`Session::from_seed`] replays identically.
#[derive(Debug)]
pub struct Session {
    level: u32,
    score: u32,
    elapsed: u32,
    time_budget: u32,
    hints_used: u32,
    phase: Phase,
    board: Board,
    words: Vec<String>,
    found: Vec<String>,
    rules: Rules,
    rng: StdRng,
    events: VecDeque<SessionEvent>,
}

impl Session {
    /// Start a new game at level 1 with an OS-seeded rng.
    pub fn new(rules: Rules) -> Self {
        Self::with_rng(rules, StdRng::from_os_rng())
    }

    /// Start a new game at level 1 with a fixed seed, for replayable games
    /// and tests.
    pub fn from_seed(rules: Rules, seed: u64) -> Self {
        Self::with_rng(rules, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rules: Rules, rng: StdRng) -> Self {
        let mut session = Session {
            level: 1,
            score: 0,
            elapsed: 0,
            time_budget: time_budget(1),
            hints_used: 0,
            phase: Phase::Playing,
            board: Board::empty(grid_size(1)),
            words: Vec::new(),
            found: Vec::new(),
            rules,
            rng,
            events: VecDeque::new(),
        };
        session.deal_level();
        session
    }

    /// Generate a fresh board and word set for the current level.
    fn deal_level(&mut self) {
        let size = grid_size(self.level);
        self.time_budget = time_budget(self.level);
        self.words = wordbank::words_for_level(self.level, &mut self.rng);
        self.board = Board::generate(
            size,
            &self.words,
            self.rules.placement_attempts,
            &mut self.rng,
        );
        self.found = Vec::new();
        info!(
            level = self.level,
            size,
            words = self.words.len(),
            budget = self.time_budget,
            "level ready"
        );
        self.events.push_back(SessionEvent::BoardReady(self.board.clone()));
        self.events
            .push_back(SessionEvent::WordSetChanged(self.words.clone()));
    }

    /// Check a candidate string against the remaining words.
    ///
    /// Matching is case-insensitive and accepts the word spelled in either
    /// direction, since a path can be selected from either end. A match
    /// scores `letter_score` per letter and moves the word to the found
    /// list; a miss costs `miss_penalty`, floored at zero. Finding the last
    /// word completes the level.
    pub fn submit(&mut self, candidate: &str) -> Result<Submission, SessionError> {
        if self.phase != Phase::Playing {
            return Err(SessionError::NotPlaying);
        }
        let forward = candidate.to_uppercase();
        let reversed: String = forward.chars().rev().collect();
        let position = self
            .words
            .iter()
            .position(|word| *word == forward || *word == reversed);
        match position {
            Some(index) => {
                let word = self.words.remove(index);
                let gained = word.len() as u32 * self.rules.letter_score;
                self.score += gained;
                self.found.push(word.clone());
                debug!(word = %word, score = self.score, "word found");
                self.events
                    .push_back(SessionEvent::WordSetChanged(self.words.clone()));
                if self.words.is_empty() {
                    self.phase = Phase::LevelComplete;
                    info!(level = self.level, score = self.score, "level complete");
                    self.events.push_back(SessionEvent::LevelCompleted {
                        level: self.level,
                        score: self.score,
                    });
                }
                Ok(Submission {
                    matched: true,
                    word: Some(word),
                    score_delta: gained as i32,
                })
            }
            None => {
                let delta = self.apply_penalty(self.rules.miss_penalty);
                debug!(candidate = %forward, score = self.score, "no such word");
                Ok(Submission {
                    matched: false,
                    word: None,
                    score_delta: delta,
                })
            }
        }
    }

    /// Reveal the cell path of one randomly chosen remaining word.
    ///
    /// Costs `hint_penalty` points (floored at zero) and one of the level's
    /// `max_hints`, whether or not the word turns out to be locatable on the
    /// board. Once the allowance is spent further requests are rejected
    /// without touching the session.
    pub fn request_hint(&mut self) -> Result<Hint, SessionError> {
        if self.phase != Phase::Playing {
            return Err(SessionError::NotPlaying);
        }
        if self.hints_used >= self.rules.max_hints {
            warn!(max = self.rules.max_hints, "hint rejected, allowance spent");
            return Err(SessionError::HintsExhausted {
                max: self.rules.max_hints,
            });
        }
        self.apply_penalty(self.rules.hint_penalty);
        let word = match self.words.as_slice().choose(&mut self.rng) {
            Some(word) => word.clone(),
            None => unreachable!("Word set should not be empty in the playing phase"),
        };
        let cells = finder::locate(&self.board, &word);
        self.hints_used += 1;
        if cells.is_empty() {
            warn!(word = %word, "hinted word is not on the board");
        } else {
            debug!(word = %word, hints_used = self.hints_used, "hint revealed");
        }
        Ok(Hint { word, cells })
    }

    /// Advance the clock by one second.
    ///
    /// Only a playing session ticks; in any other phase the clock is frozen
    /// and the call just reports it. Reaching the budget ends the game.
    pub fn tick(&mut self) -> Tick {
        if self.phase == Phase::Playing {
            self.elapsed += 1;
            if self.elapsed >= self.time_budget {
                self.phase = Phase::TimeExpired;
                info!(level = self.level, score = self.score, "time expired");
                self.events.push_back(SessionEvent::TimeExpired {
                    level: self.level,
                    score: self.score,
                });
            }
        }
        self.clock()
    }

    /// Current clock reading without advancing it.
    pub fn clock(&self) -> Tick {
        let remaining = self.time_budget.saturating_sub(self.elapsed);
        Tick {
            elapsed: self.elapsed,
            remaining,
            expired: self.phase == Phase::TimeExpired,
            low_time: remaining > 0 && remaining <= LOW_TIME_WARNING,
        }
    }

    /// Move a completed level to the next one.
    ///
    /// The score carries over; the hint allowance and the clock reset, and a
    /// fresh board and word set are dealt at the new level's difficulty.
    pub fn advance_level(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::LevelComplete {
            return Err(SessionError::LevelNotComplete);
        }
        self.level += 1;
        self.hints_used = 0;
        self.elapsed = 0;
        self.phase = Phase::Playing;
        self.deal_level();
        Ok(())
    }

    /// Throw the game away and start over at level 1 with score 0.
    pub fn restart(&mut self) {
        info!(level = self.level, score = self.score, "restarting");
        self.level = 1;
        self.score = 0;
        self.elapsed = 0;
        self.hints_used = 0;
        self.phase = Phase::Playing;
        self.events.clear();
        self.deal_level();
    }

    /// Next queued update for rendering collaborators, oldest first.
    pub fn poll_event(&mut self) -> Option<SessionEvent> {
        self.events.pop_front()
    }

    /// Snapshot the current standing as a leaderboard record.
    ///
    /// `time` captures the remaining clock; `date` is the current unix time.
    pub fn leaderboard_entry(&self, name: impl Into<String>) -> LeaderboardEntry {
        let date = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        LeaderboardEntry {
            name: name.into(),
            score: self.score,
            level: self.level,
            time: format_clock(self.time_budget.saturating_sub(self.elapsed)),
            date,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Words still hidden on the current level.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words already found on the current level.
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn hints_remaining(&self) -> u32 {
        self.rules.max_hints.saturating_sub(self.hints_used)
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Subtract a floored-at-zero penalty, returning the applied delta.
    fn apply_penalty(&mut self, penalty: u32) -> i32 {
        let before = self.score;
        self.score = self.score.saturating_sub(penalty);
        self.score as i32 - before as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_session() -> Session {
        Session::from_seed(Rules::default(), 42)
    }

    fn solve_level(session: &mut Session) {
        while let Some(word) = session.words().first().cloned() {
            // Completion must never fire while words remain.
            assert_eq!(session.phase(), Phase::Playing);
            session.submit(&word).unwrap();
        }
        assert_eq!(session.phase(), Phase::LevelComplete);
    }

    fn expire(session: &mut Session) {
        while !session.tick().expired {}
    }

    fn drain_events(session: &mut Session) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while let Some(event) = session.poll_event() {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_new_session_starts_playing_at_level_one() {
        let session = new_session();
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.level(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.hints_used(), 0);
        assert_eq!(session.board().size(), 10);
        assert_eq!(session.clock().remaining, 300);
        assert!(!session.words().is_empty());
        assert!(session.words().len() <= 5);
        assert!(session.found_words().is_empty());
    }

    #[test]
    fn test_same_seed_replays_the_same_game() {
        let a = Session::from_seed(Rules::default(), 7);
        let b = Session::from_seed(Rules::default(), 7);
        assert_eq!(a.board(), b.board());
        assert_eq!(a.words(), b.words());
    }

    #[test]
    fn test_startup_events() {
        let mut session = new_session();
        let board = session.board().clone();
        let words = session.words().to_vec();
        match session.poll_event() {
            Some(SessionEvent::BoardReady(ready)) => assert_eq!(ready, board),
            other => panic!("expected BoardReady, got {other:?}"),
        }
        match session.poll_event() {
            Some(SessionEvent::WordSetChanged(list)) => assert_eq!(list, words),
            other => panic!("expected WordSetChanged, got {other:?}"),
        }
        assert!(session.poll_event().is_none());
    }

    #[test]
    fn test_submit_matches_case_insensitively() {
        let mut session = new_session();
        let word = session.words()[0].clone();
        let submission = session.submit(&word.to_lowercase()).unwrap();
        assert!(submission.matched);
        assert_eq!(submission.word.as_deref(), Some(word.as_str()));
        assert_eq!(submission.score_delta, word.len() as i32 * 10);
        assert_eq!(session.score(), word.len() as u32 * 10);
        assert!(!session.words().contains(&word));
        assert_eq!(session.found_words(), [word]);
    }

    #[test]
    fn test_submit_matches_reversed_selection() {
        let mut session = new_session();
        let word = session.words()[0].clone();
        let backwards: String = word.chars().rev().collect();
        let submission = session.submit(&backwards).unwrap();
        assert!(submission.matched);
        // The canonical forward form is reported, not the selection.
        assert_eq!(submission.word.as_deref(), Some(word.as_str()));
        assert_eq!(submission.score_delta, word.len() as i32 * 10);
        assert_eq!(session.found_words(), [word]);
    }

    #[test]
    fn test_submit_miss_penalty_floors_at_zero() {
        let mut session = new_session();
        // At score 0 a miss costs nothing.
        let submission = session.submit("XQZJVKW").unwrap();
        assert!(!submission.matched);
        assert_eq!(submission.score_delta, 0);
        assert_eq!(session.score(), 0);

        // Earn some points, then grind them away 5 at a time.
        let word = session.words()[0].clone();
        session.submit(&word).unwrap();
        if session.phase() != Phase::Playing {
            return;
        }
        let submission = session.submit("XQZJVKW").unwrap();
        assert_eq!(submission.score_delta, -5);
        assert_eq!(session.score(), word.len() as u32 * 10 - 5);
        while session.score() > 0 {
            let before = session.score();
            let submission = session.submit("XQZJVKW").unwrap();
            assert_eq!(submission.score_delta, -(before.min(5) as i32));
        }
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_found_word_cannot_be_submitted_again() {
        let mut session = new_session();
        let word = session.words()[0].clone();
        assert!(session.submit(&word).unwrap().matched);
        if session.phase() == Phase::Playing {
            let again = session.submit(&word).unwrap();
            assert!(!again.matched);
        }
    }

    #[test]
    fn test_mismatch_queues_no_word_set_event() {
        let mut session = new_session();
        drain_events(&mut session);
        session.submit("XQZJVKW").unwrap();
        assert!(session.poll_event().is_none());
    }

    #[test]
    fn test_finding_every_word_completes_the_level() {
        let mut session = new_session();
        let total: u32 = session.words().iter().map(|w| w.len() as u32 * 10).sum();
        solve_level(&mut session);
        assert_eq!(session.phase(), Phase::LevelComplete);
        assert_eq!(session.score(), total);
        assert!(session.words().is_empty());

        let events = drain_events(&mut session);
        assert!(matches!(
            events.last(),
            Some(SessionEvent::LevelCompleted { level: 1, score }) if *score == total
        ));

        // The completed level no longer accepts play.
        assert_eq!(session.submit("GAME"), Err(SessionError::NotPlaying));
        assert_eq!(session.request_hint().unwrap_err(), SessionError::NotPlaying);
    }

    #[test]
    fn test_completed_level_clock_is_frozen() {
        let mut session = new_session();
        solve_level(&mut session);
        let before = session.clock();
        let tick = session.tick();
        assert_eq!(tick.elapsed, before.elapsed);
        assert!(!tick.expired);
    }

    #[test]
    fn test_hint_reveals_a_remaining_word() {
        let mut session = new_session();
        let hint = session.request_hint().unwrap();
        assert!(session.words().contains(&hint.word));
        assert_eq!(session.hints_used(), 1);
        assert_eq!(session.hints_remaining(), 2);
        // The path, when present, spells the word on the board.
        assert_eq!(!hint.cells.is_empty(), finder::contains(session.board(), &hint.word));
        if !hint.cells.is_empty() {
            let spelled: String = hint
                .cells
                .iter()
                .filter_map(|&(row, col)| session.board().letter(row, col))
                .collect();
            assert_eq!(spelled, hint.word);
        }
    }

    #[test]
    fn test_hint_costs_twenty_floored_at_zero() {
        // At score 0 the cost clamps to nothing.
        let mut session = new_session();
        session.request_hint().unwrap();
        assert_eq!(session.score(), 0);

        let word = session.words()[0].clone();
        session.submit(&word).unwrap();
        if session.phase() != Phase::Playing {
            return;
        }
        let before = session.score();
        session.request_hint().unwrap();
        assert_eq!(session.score(), before - 20);
    }

    #[test]
    fn test_fourth_hint_is_rejected_without_side_effects() {
        let mut session = new_session();
        for _ in 0..3 {
            session.request_hint().unwrap();
        }
        let score = session.score();
        let err = session.request_hint().unwrap_err();
        assert_eq!(err, SessionError::HintsExhausted { max: 3 });
        assert_eq!(session.hints_used(), 3);
        assert_eq!(session.score(), score);
    }

    #[test]
    fn test_tick_counts_down_to_expiry() {
        let mut session = new_session();
        for expected in (1..300).rev() {
            let tick = session.tick();
            assert_eq!(tick.remaining, expected);
            assert!(!tick.expired);
            assert_eq!(tick.low_time, expected <= LOW_TIME_WARNING);
        }
        let tick = session.tick();
        assert!(tick.expired);
        assert_eq!(tick.remaining, 0);
        assert_eq!(tick.elapsed, 300);
        assert_eq!(session.phase(), Phase::TimeExpired);

        // A stale tick after expiry changes nothing.
        let tick = session.tick();
        assert_eq!(tick.elapsed, 300);
        assert!(tick.expired);
    }

    #[test]
    fn test_expiry_queues_a_time_expired_event() {
        let mut session = new_session();
        drain_events(&mut session);
        expire(&mut session);
        let events = drain_events(&mut session);
        assert!(matches!(
            events.last(),
            Some(SessionEvent::TimeExpired { level: 1, .. })
        ));
        assert_eq!(session.submit("GAME"), Err(SessionError::NotPlaying));
    }

    #[test]
    fn test_advance_level_carries_score_and_resets_the_rest() {
        let mut session = new_session();
        session.request_hint().unwrap();
        for _ in 0..25 {
            session.tick();
        }
        solve_level(&mut session);
        let score = session.score();

        session.advance_level().unwrap();
        assert_eq!(session.level(), 2);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.score(), score);
        assert_eq!(session.hints_used(), 0);
        assert_eq!(session.clock().elapsed, 0);
        assert_eq!(session.clock().remaining, time_budget(2));
        assert_eq!(session.board().size(), grid_size(2));
        assert!(!session.words().is_empty());
        assert!(session.found_words().is_empty());
    }

    #[test]
    fn test_advance_level_requires_completion() {
        let mut session = new_session();
        assert_eq!(session.advance_level(), Err(SessionError::LevelNotComplete));

        expire(&mut session);
        assert_eq!(session.advance_level(), Err(SessionError::LevelNotComplete));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = new_session();
        solve_level(&mut session);
        session.advance_level().unwrap();
        session.tick();

        session.restart();
        assert_eq!(session.level(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.hints_used(), 0);
        assert_eq!(session.clock().elapsed, 0);
        assert!(!session.words().is_empty());

        // Stale events are gone; only the fresh deal is queued.
        let events = drain_events(&mut session);
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SessionEvent::BoardReady(_)));
        assert!(matches!(events[1], SessionEvent::WordSetChanged(_)));
    }

    #[test]
    fn test_words_and_found_stay_disjoint() {
        let mut session = new_session();
        let total = session.words().len();
        for _ in 0..2.min(total) {
            let word = session.words()[0].clone();
            session.submit(&word).unwrap();
        }
        for word in session.found_words() {
            assert!(!session.words().contains(word));
        }
        assert_eq!(session.words().len() + session.found_words().len(), total);
    }

    #[test]
    fn test_leaderboard_entry_snapshots_the_session() {
        let mut session = new_session();
        let word = session.words()[0].clone();
        session.submit(&word).unwrap();
        for _ in 0..10 {
            session.tick();
        }
        let entry = session.leaderboard_entry("ana");
        assert_eq!(entry.name, "ana");
        assert_eq!(entry.score, session.score());
        assert_eq!(entry.level, 1);
        assert_eq!(entry.time, format_clock(session.clock().remaining));
        assert!(entry.date > 0);
    }

    #[test]
    fn test_three_level_run() {
        let mut session = new_session();
        let mut expected_score = 0;
        for level in 1..=3 {
            assert_eq!(session.level(), level);
            expected_score += session
                .words()
                .iter()
                .map(|w| w.len() as u32 * 10)
                .sum::<u32>();
            solve_level(&mut session);
            assert_eq!(session.phase(), Phase::LevelComplete);
            assert_eq!(session.score(), expected_score);
            session.advance_level().unwrap();
        }
        assert_eq!(session.level(), 4);
        assert_eq!(session.board().size(), grid_size(4));
        assert_eq!(session.phase(), Phase::Playing);
    }
}
