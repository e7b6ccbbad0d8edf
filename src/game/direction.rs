#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    UpRight,
}

impl Direction {
    /// All placement directions, in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::UpRight,
    ];

    /// Per-step (row, col) offset.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
        }
    }

    /// Cell reached after walking `steps` cells from `start`, or `None` if it
    /// falls outside a `size` x `size` grid.
    pub fn offset_from(
        self,
        start: (usize, usize),
        steps: usize,
        size: usize,
    ) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let row = start.0 as i32 + dr * steps as i32;
        let col = start.1 as i32 + dc * steps as i32;
        if row < 0 || row >= size as i32 || col < 0 || col >= size as i32 {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Display name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::DownRight => "down-right",
            Direction::UpRight => "up-right",
        }
    }
}
