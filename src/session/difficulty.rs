//! Difficulty curve: grid size and time budget as pure functions of level.

/// Smallest grid side, used from level 1.
pub const MIN_GRID_SIZE: usize = 10;
/// Largest grid side; growth stops here.
pub const MAX_GRID_SIZE: usize = 20;
/// Time budgets never shrink below this many seconds.
pub const MIN_TIME_BUDGET: u32 = 60;

/// Grid side length for a level: grows by one every three levels, capped.
pub fn grid_size(level: u32) -> usize {
    let grown = MIN_GRID_SIZE + (level.saturating_sub(1) / 3) as usize;
    grown.min(MAX_GRID_SIZE)
}

/// Time budget in seconds for a level.
///
/// Stepped bands down to level 15, then a linear squeeze floored at
/// [`MIN_TIME_BUDGET`].
pub fn time_budget(level: u32) -> u32 {
    match level {
        ..=3 => 300,
        ..=6 => 240,
        ..=9 => 180,
        ..=12 => 120,
        ..=15 => 90,
        _ => MIN_TIME_BUDGET.max(300u32.saturating_sub(level.saturating_mul(15))),
    }
}
