use std::fmt;
use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

/// The computer always plays X and searches as the maximizing side.
pub const COMPUTER_MARK: Mark = Mark::X;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, "_"),
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    SinglePlayer,
    Multiplayer,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::SinglePlayer => write!(f, "single player"),
            GameMode::Multiplayer => write!(f, "multiplayer"),
        }
    }
}

/// Who a winning mark belongs to, given the mode it was played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribution {
    FirstPlayer,
    SecondPlayer,
    Computer,
}

impl Attribution {
    pub fn for_mark(mark: Mark, mode: GameMode) -> Option<Self> {
        match (mark, mode) {
            (Mark::O, _) => Some(Attribution::FirstPlayer),
            (Mark::X, GameMode::SinglePlayer) => Some(Attribution::Computer),
            (Mark::X, GameMode::Multiplayer) => Some(Attribution::SecondPlayer),
            (Mark::Empty, _) => None,
        }
    }
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribution::FirstPlayer => write!(f, "Player A"),
            Attribution::SecondPlayer => write!(f, "Player B"),
            Attribution::Computer => write!(f, "Computer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    Won { mark: Mark, by: Attribution },
    Draw,
}

impl GameResult {
    pub fn is_terminal(&self) -> bool {
        *self != GameResult::Ongoing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    ModeNotSelected,
    ModeAlreadySelected,
    GameOver,
    OutOfBounds { row: usize, col: usize },
    NotYourTurn { expected: Mark, found: Mark },
    CellOccupied { row: usize, col: usize },
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::ModeNotSelected => write!(f, "Game mode has not been selected"),
            IllegalMove::ModeAlreadySelected => write!(f, "Game mode is already selected"),
            IllegalMove::GameOver => write!(f, "Game is already over"),
            IllegalMove::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            IllegalMove::NotYourTurn { expected, found } => {
                write!(f, "It is {}'s turn, not {}'s", expected, found)
            }
            IllegalMove::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already marked", row, col)
            }
        }
    }
}

impl std::error::Error for IllegalMove {}
