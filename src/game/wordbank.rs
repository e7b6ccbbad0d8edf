//! Tiered vocabulary and the per-level word draw.
//!
//! The master list is ordered easiest-first and the four difficulty tiers are
//! nested prefixes of it, so higher tiers always include every easier word.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Master vocabulary, ordered easiest-first.
const VOCABULARY: [&str; 30] = [
    "hello",
    "world",
    "game",
    "play",
    "code",
    "fun",
    "win",
    "test",
    "python",
    "javascript",
    "coding",
    "design",
    "learn",
    "solve",
    "think",
    "create",
    "algorithm",
    "programming",
    "technology",
    "develop",
    "system",
    "logic",
    "method",
    "innovation",
    "complexity",
    "engineering",
    "optimize",
    "structure",
    "dynamic",
    "resolve",
];

/// Exclusive end index of each tier's prefix of [`VOCABULARY`].
const TIER_ENDS: [usize; 4] = [8, 16, 23, 30];

/// Tier index for a level: one step up every five levels, capped at the top.
pub fn tier_for_level(level: u32) -> usize {
    ((level.saturating_sub(1) / 5) as usize).min(TIER_ENDS.len() - 1)
}

/// How many words a level asks for before deduplication.
pub fn requested_count(level: u32) -> usize {
    5 + (level / 3) as usize
}

/// Draw the word set for a level: `requested_count` picks with replacement
/// from the level's tier, deduplicated keeping first-draw order, uppercased.
///
/// The result holds between 1 and `requested_count` distinct words. If the
/// draw somehow yields nothing the whole base tier is returned instead, so
/// a playing level always has at least one word to find.
pub fn words_for_level(level: u32, rng: &mut impl Rng) -> Vec<String> {
    let tier = &VOCABULARY[..TIER_ENDS[tier_for_level(level)]];
    let count = requested_count(level);
    let mut words: Vec<String> = Vec::with_capacity(count);
    for _ in 0..count {
        if let Some(&word) = tier.choose(rng) {
            let word = word.to_uppercase();
            if !words.contains(&word) {
                words.push(word);
            }
        }
    }
    if words.is_empty() {
        return VOCABULARY[..TIER_ENDS[0]]
            .iter()
            .map(|word| word.to_uppercase())
            .collect();
    }
    words
}
