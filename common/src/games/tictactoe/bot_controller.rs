use super::board::{Board, get_available_moves, has_moves_left};
use super::game_state::TicTacToeGameState;
use super::types::{COMPUTER_MARK, GameStatus, Mark, Position};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            current_mark: state.current_mark,
            status: state.status,
        }
    }
}

/// Only answers for the computer's own turn on an unfinished game.
pub fn calculate_move(input: &BotInput) -> Option<(Position, i32)> {
    if input.status.is_terminal() || input.current_mark != COMPUTER_MARK {
        return None;
    }
    find_best_move_with_score(&input.board)
}

pub fn find_best_move(board: &Board) -> Option<Position> {
    find_best_move_with_score(board).map(|(pos, _)| pos)
}

/// Tries X on every empty cell in row-major order and keeps the strictly
/// best score, so ties go to the first cell scanned.
pub fn find_best_move_with_score(board: &Board) -> Option<(Position, i32)> {
    let mut board = *board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in get_available_moves(&board) {
        board.set(pos, COMPUTER_MARK);
        let value = score(&mut board, 0, false);
        board.set(pos, Mark::Empty);

        if value > best_score {
            best_score = value;
            best_move = Some((pos, value));
        }
    }

    best_move
}

/// Exhaustive minimax. X maximizes, O minimizes; wins are worth
/// `10 - depth` so quicker wins and slower losses score better. Every trial
/// placement is undone before returning.
pub fn score(board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
    match check_win(board) {
        Some(Mark::X) => return WIN_SCORE - depth,
        Some(Mark::O) => return depth - WIN_SCORE,
        _ => {}
    }

    if !has_moves_left(board) {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for pos in get_available_moves(board) {
            board.set(pos, Mark::X);
            max_eval = max_eval.max(score(board, depth + 1, false));
            board.set(pos, Mark::Empty);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for pos in get_available_moves(board) {
            board.set(pos, Mark::O);
            min_eval = min_eval.min(score(board, depth + 1, true));
            board.set(pos, Mark::Empty);
        }
        min_eval
    }
}
