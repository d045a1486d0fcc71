mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, has_moves_left, is_valid_move};
pub use bot_controller::{BotInput, calculate_move, find_best_move, find_best_move_with_score, score};
pub use game_state::TicTacToeGameState;
pub use session::{MoveOutcome, TicTacToeSession};
pub use types::{
    Attribution, BOARD_SIZE, COMPUTER_MARK, GameMode, GameResult, GameStatus, IllegalMove, Mark,
    Position, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line};
