use super::types::{BOARD_SIZE, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Panics if `pos` is off the board; callers check `Position::is_on_board` first.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub fn clear(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }
}

pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in board.rows().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

pub fn has_moves_left(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .any(|row| row.iter().any(|&cell| cell == Mark::Empty))
}

pub fn is_valid_move(board: &Board, pos: Position) -> bool {
    pos.is_on_board() && board.get(pos) == Mark::Empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(E), 9);
        assert!(has_moves_left(&board));
        assert_eq!(get_available_moves(&board).len(), 9);
    }

    #[test]
    fn test_available_moves_are_row_major() {
        let board = Board::from_rows([[O, E, X], [E, X, E], [O, O, E]]);
        let moves = get_available_moves(&board);
        assert_eq!(
            moves,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_full_board_has_no_moves_left() {
        let board = Board::from_rows([[O, X, O], [O, X, X], [X, O, O]]);
        assert!(!has_moves_left(&board));
        assert!(get_available_moves(&board).is_empty());
    }

    #[test]
    fn test_is_valid_move() {
        let board = Board::from_rows([[O, E, E], [E, E, E], [E, E, E]]);
        assert!(!is_valid_move(&board, Position::new(0, 0)));
        assert!(is_valid_move(&board, Position::new(0, 1)));
        assert!(!is_valid_move(&board, Position::new(3, 1)));
    }

    #[test]
    fn test_clear_resets_every_cell() {
        let mut board = Board::from_rows([[O, X, O], [O, X, X], [X, O, O]]);
        board.clear();
        assert_eq!(board, Board::new());
    }
}
