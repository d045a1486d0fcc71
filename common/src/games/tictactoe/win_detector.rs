use super::board::Board;
use super::types::{BOARD_SIZE, Mark, Position, WinningLine};

/// Rows top to bottom, then columns left to right, then the main diagonal and
/// the anti-diagonal. The first uniform line found wins.
fn lines() -> [[Position; BOARD_SIZE]; 8] {
    let p = Position::new;
    [
        [p(0, 0), p(0, 1), p(0, 2)],
        [p(1, 0), p(1, 1), p(1, 2)],
        [p(2, 0), p(2, 1), p(2, 2)],
        [p(0, 0), p(1, 0), p(2, 0)],
        [p(0, 1), p(1, 1), p(2, 1)],
        [p(0, 2), p(1, 2), p(2, 2)],
        [p(0, 0), p(1, 1), p(2, 2)],
        [p(0, 2), p(1, 1), p(2, 0)],
    ]
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in lines() {
        let mark = board.get(line[0]);
        if mark == Mark::Empty {
            continue;
        }
        if line.iter().all(|&pos| board.get(pos) == mark) {
            return Some(WinningLine::new(mark, line[0], line[BOARD_SIZE - 1]));
        }
    }
    None
}
