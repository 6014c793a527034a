//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of cells on the 3x3 board
pub const BOARD_CELLS: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// A player in the game.
///
/// `X` is always the maximizing side during search and `O` the minimizing
/// side, whichever of them is controlled by a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            _ => Err(crate::Error::ParsePlayer {
                input: s.to_string(),
            }),
        }
    }
}

/// Fixed-size 3x3 board.
///
/// Moves mutate the board in place; search code places a mark, recurses and
/// clears the cell again, so callers always get their board back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a board from 9 cell characters (`X`, `O`, `.`), ignoring whitespace
    /// and `/` row separators.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cells are given or a character is not a
    /// valid cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| *c != '/' && !c.is_whitespace())
            .collect();
        if chars.len() < BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().take(BOARD_CELLS).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Cell at position (0-8), `None` off the board
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Whether `pos` is on the board and empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Get all empty positions in increasing order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place `player`'s mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for positions outside 0-8 and
    /// [`crate::Error::InvalidMove`] for occupied cells.
    pub fn place(&mut self, pos: usize, player: Player) -> Result<(), crate::Error> {
        if pos >= BOARD_CELLS {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Overwrite a cell without validation (search make/unmake)
    pub(crate) fn set(&mut self, pos: usize, cell: Cell) {
        self.cells[pos] = cell;
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// The single position where `self` and `next` differ.
    ///
    /// Returns `Err(count)` with the number of differing cells when it is not
    /// exactly one.
    pub fn changed_cell(&self, next: &Board) -> Result<usize, usize> {
        let mut changed = self
            .cells
            .iter()
            .zip(next.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i);

        match (changed.next(), changed.next()) {
            (Some(pos), None) => Ok(pos),
            (None, _) => Err(0),
            (Some(_), Some(_)) => Err(2 + changed.count()),
        }
    }

    /// Key string for table lookups: one character per cell, `.` for empty
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let start = row * 3;
            writeln!(
                f,
                " {} | {} | {}",
                self.cells[start].to_char(),
                self.cells[start + 1].to_char(),
                self.cells[start + 2].to_char()
            )?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}
