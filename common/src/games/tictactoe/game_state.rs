use super::board::{Board, has_moves_left};
use super::types::{GameStatus, IllegalMove, Mark, Position, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::O,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_board(board: Board, current_mark: Mark) -> Self {
        Self {
            board,
            current_mark,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Places `mark`, resolves win/draw, then hands the turn over. Nothing
    /// changes when the move is rejected.
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), IllegalMove> {
        if self.status.is_terminal() {
            return Err(IllegalMove::GameOver);
        }

        let pos = Position::new(row, col);
        if !pos.is_on_board() {
            return Err(IllegalMove::OutOfBounds { row, col });
        }

        if mark != self.current_mark {
            return Err(IllegalMove::NotYourTurn {
                expected: self.current_mark,
                found: mark,
            });
        }

        if self.board.get(pos) != Mark::Empty {
            return Err(IllegalMove::CellOccupied { row, col });
        }

        self.board.set(pos, mark);
        self.last_move = Some(pos);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::O => Mark::X,
            _ => Mark::O,
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if !has_moves_left(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        if self.status.winner().is_some() {
            check_win_with_line(&self.board)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = Mark::O;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }
}
