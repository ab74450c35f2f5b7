//! NoGo rules engine
//!
//! NoGo is played with Go stones on a rectangular grid, but capturing is
//! forbidden: a move is illegal if it would leave any group, friendly or
//! opposing, without liberties. Players alternate, black first, and the first
//! player with no legal move loses.
//!
//! Points are indexed row-major from the top-left corner. Coordinate labels
//! follow the Go convention: columns `A..` skipping `I`, rows counted from 1 at
//! the bottom.

use std::fmt;

use crate::{
    game_state::{GameState, IllegalMove, PlayerId},
    MCTSError, Result,
};

/// Column letters for coordinate labels (no `I`)
const COLUMNS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Side length of the standard board
pub const STANDARD_SIZE: usize = 9;

/// A NoGo position: the stones on the board and the player to move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoGoBoard {
    width: usize,
    height: usize,
    cells: Vec<Option<PlayerId>>,
    to_move: PlayerId,
}

impl NoGoBoard {
    /// Creates an empty board with black to move
    ///
    /// # Errors
    ///
    /// Fails if either dimension is zero or wider than the coordinate
    /// alphabet allows.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width > COLUMNS.len() || height > COLUMNS.len() {
            return Err(MCTSError::InvalidPosition(format!(
                "unsupported board size {}x{}",
                width, height
            )));
        }

        Ok(NoGoBoard {
            width,
            height,
            cells: vec![None; width * height],
            to_move: PlayerId::First,
        })
    }

    /// Creates an empty 9x9 board with black to move
    pub fn standard() -> Self {
        NoGoBoard {
            width: STANDARD_SIZE,
            height: STANDARD_SIZE,
            cells: vec![None; STANDARD_SIZE * STANDARD_SIZE],
            to_move: PlayerId::First,
        }
    }

    /// Builds a position from a diagram, top row first
    ///
    /// `X` (or `B`) is a black stone, `O` (or `W`) a white stone and `.` an
    /// empty point.
    ///
    /// ```
    /// use nogo_mcts::{nogo::NoGoBoard, GameState, PlayerId};
    ///
    /// let board = NoGoBoard::from_rows(&["X..", "...", "..O"], PlayerId::First).unwrap();
    /// assert_eq!(board.legal_move_count(), 7);
    /// ```
    ///
    /// # Errors
    ///
    /// Rejects ragged rows, unknown symbols and positions in which some group
    /// already has no liberties.
    pub fn from_rows(rows: &[&str], to_move: PlayerId) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut board = NoGoBoard::new(width, height)?;
        board.to_move = to_move;

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(MCTSError::InvalidPosition(format!(
                    "row {} has {} points, expected {}",
                    row + 1,
                    line.chars().count(),
                    width
                )));
            }
            for (col, symbol) in line.chars().enumerate() {
                board.cells[row * width + col] = match symbol {
                    'X' | 'x' | 'B' | 'b' => Some(PlayerId::First),
                    'O' | 'o' | 'W' | 'w' => Some(PlayerId::Second),
                    '.' => None,
                    other => {
                        return Err(MCTSError::InvalidPosition(format!(
                            "unknown symbol '{}' at row {}",
                            other,
                            row + 1
                        )))
                    }
                };
            }
        }

        if let Some(dead) = (0..board.cells.len())
            .find(|&point| board.cells[point].is_some() && !board.has_liberty(point))
        {
            return Err(MCTSError::InvalidPosition(format!(
                "group at {} has no liberties",
                board.coord(dead).unwrap_or_default()
            )));
        }

        Ok(board)
    }

    /// Board width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stone on a point, if any
    pub fn stone_at(&self, point: usize) -> Option<PlayerId> {
        self.cells.get(point).copied().flatten()
    }

    /// Number of stones on the board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the coordinate label of a point, e.g. `"C3"`
    ///
    /// Returns `None` for indices off the board.
    pub fn coord(&self, point: usize) -> Option<String> {
        if point >= self.cells.len() {
            return None;
        }
        let row = point / self.width;
        let col = point % self.width;
        Some(format!("{}{}", COLUMNS[col] as char, self.height - row))
    }

    /// Parses a coordinate label back into a point index
    ///
    /// Returns `None` for labels that do not name a point on this board.
    pub fn parse_coord(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        let mut chars = label.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let col = COLUMNS.iter().position(|&c| c as char == letter)?;
        let number: usize = chars.as_str().parse().ok()?;

        if col >= self.width || number == 0 || number > self.height {
            return None;
        }
        Some((self.height - number) * self.width + col)
    }

    fn neighbors(&self, point: usize) -> impl Iterator<Item = usize> {
        let (width, height) = (self.width, self.height);
        let row = point / width;
        let col = point % width;

        [
            (row > 0).then(|| point - width),
            (row + 1 < height).then(|| point + width),
            (col > 0).then(|| point - 1),
            (col + 1 < width).then(|| point + 1),
        ]
        .into_iter()
        .flatten()
    }

    /// Flood-fills the group containing `start` and reports whether it touches
    /// an empty point
    fn has_liberty(&self, start: usize) -> bool {
        let color = self.cells[start];
        let mut visited = vec![false; self.cells.len()];
        let mut stack = vec![start];

        while let Some(point) = stack.pop() {
            if visited[point] {
                continue;
            }
            visited[point] = true;

            for next in self.neighbors(point) {
                match self.cells[next] {
                    None => return true,
                    stone if stone == color && !visited[next] => stack.push(next),
                    _ => {}
                }
            }
        }

        false
    }
}

impl Default for NoGoBoard {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameState for NoGoBoard {
    fn action_space(&self) -> usize {
        self.cells.len()
    }

    fn apply(&self, index: usize) -> std::result::Result<Self, IllegalMove> {
        if index >= self.cells.len() {
            return Err(IllegalMove::OutOfRange {
                index,
                space: self.cells.len(),
            });
        }
        if self.cells[index].is_some() {
            return Err(IllegalMove::Occupied(index));
        }

        let mut next = self.clone();
        next.cells[index] = Some(self.to_move);

        let opponent = Some(self.to_move.opponent());
        if next
            .neighbors(index)
            .any(|point| next.cells[point] == opponent && !next.has_liberty(point))
        {
            return Err(IllegalMove::Capture(index));
        }
        if !next.has_liberty(index) {
            return Err(IllegalMove::Suicide(index));
        }

        next.to_move = self.to_move.opponent();
        Ok(next)
    }

    fn current_player(&self) -> PlayerId {
        self.to_move
    }
}

impl fmt::Display for NoGoBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.width {
            write!(f, " {}", COLUMNS[col] as char)?;
        }
        writeln!(f)?;

        for row in 0..self.height {
            write!(f, "{:>3}", self.height - row)?;
            for col in 0..self.width {
                let symbol = match self.cells[row * self.width + col] {
                    Some(PlayerId::First) => 'X',
                    Some(PlayerId::Second) => 'O',
                    None => '.',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }

        write!(f, "{} to move", self.to_move)
    }
}
