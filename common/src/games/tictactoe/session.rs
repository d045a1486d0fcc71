use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::types::{
    Attribution, COMPUTER_MARK, GameMode, GameResult, GameStatus, IllegalMove, Mark, Position,
    WinningLine,
};

/// What a single `submit_move` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub placed: Position,
    pub mark: Mark,
    pub computer_reply: Option<Position>,
    pub result: GameResult,
}

/// One game plus its mode. A session is owned by exactly one front end and
/// advances one move at a time.
#[derive(Debug, Clone, Default)]
pub struct TicTacToeSession {
    mode: Option<GameMode>,
    game_state: TicTacToeGameState,
}

impl TicTacToeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: GameMode) -> Self {
        Self {
            mode: Some(mode),
            game_state: TicTacToeGameState::new(),
        }
    }

    pub fn select_mode(&mut self, mode: GameMode) -> Result<(), IllegalMove> {
        if self.mode.is_some() {
            log!("Ignoring mode selection: {}", IllegalMove::ModeAlreadySelected);
            return Err(IllegalMove::ModeAlreadySelected);
        }
        self.mode = Some(mode);
        log!("Mode selected: {}", mode);
        Ok(())
    }

    /// Plays the current turn's mark. In single-player mode the computer's
    /// reply is applied before this returns, through the same move path.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, IllegalMove> {
        let Some(mode) = self.mode else {
            log!("Rejected move ({}, {}): {}", row, col, IllegalMove::ModeNotSelected);
            return Err(IllegalMove::ModeNotSelected);
        };

        let mark = self.game_state.current_mark;
        if let Err(e) = self.game_state.apply_move(row, col, mark) {
            log!("Rejected move ({}, {}) for {}: {}", row, col, mark, e);
            return Err(e);
        }
        log!("{} plays ({}, {})", mark, row, col);

        let computer_reply = if mode == GameMode::SinglePlayer {
            self.play_bot_turn()
        } else {
            None
        };

        let result = self.result();
        if result.is_terminal() {
            log!("Game over: {:?}", result);
        }

        Ok(MoveOutcome {
            placed: Position::new(row, col),
            mark,
            computer_reply,
            result,
        })
    }

    fn play_bot_turn(&mut self) -> Option<Position> {
        let input = BotInput::from_game_state(&self.game_state);
        let (pos, score) = calculate_move(&input)?;

        match self.game_state.apply_move(pos.row, pos.col, COMPUTER_MARK) {
            Ok(()) => {
                log!("Computer plays {} (score {})", pos, score);
                Some(pos)
            }
            Err(e) => {
                log!("Computer move {} was rejected: {}", pos, e);
                None
            }
        }
    }

    /// Back to mode selection with an empty board. Calling it twice is the
    /// same as calling it once.
    pub fn reset_session(&mut self) {
        self.game_state.reset();
        self.mode = None;
        log!("Session reset");
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.game_state.board
    }

    pub fn current_mark(&self) -> Mark {
        self.game_state.current_mark
    }

    pub fn last_move(&self) -> Option<Position> {
        self.game_state.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.game_state.winning_line()
    }

    pub fn result(&self) -> GameResult {
        match self.game_state.status {
            GameStatus::InProgress => GameResult::Ongoing,
            GameStatus::Draw => GameResult::Draw,
            status => {
                if let (Some(mark), Some(mode)) = (status.winner(), self.mode)
                    && let Some(by) = Attribution::for_mark(mark, mode)
                {
                    GameResult::Won { mark, by }
                } else {
                    GameResult::Ongoing
                }
            }
        }
    }

    /// True while the session accepts `submit_move`.
    pub fn accepts_moves(&self) -> bool {
        self.mode.is_some() && !self.game_state.status.is_terminal()
    }
}
