use common::games::tictactoe::{
    Attribution, BOARD_SIZE, GameResult, Mark, Position, TicTacToeSession,
};

use crate::config::DisplayConfig;

pub const MODE_PROMPT: &str = "Select mode: 1) Single player  2) Multiplayer";

fn cell_text(mark: Mark) -> &'static str {
    match mark {
        Mark::Empty => " ",
        Mark::X => "X",
        Mark::O => "O",
    }
}

pub fn render_board(session: &TicTacToeSession, display: &DisplayConfig) -> String {
    let board = session.board();
    let mut out = String::new();

    if display.show_coordinates {
        out.push_str("    0   1   2\n");
    }

    for row in 0..BOARD_SIZE {
        if display.show_coordinates {
            out.push_str(&format!("{}  ", row));
        }
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| format!(" {} ", cell_text(board.get(Position::new(row, col)))))
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');

        if row + 1 < BOARD_SIZE {
            if display.show_coordinates {
                out.push_str("   ");
            }
            out.push_str("---+---+---\n");
        }
    }

    out
}

/// One line describing what happens next, or how the game ended.
pub fn render_status(session: &TicTacToeSession) -> String {
    let Some(mode) = session.mode() else {
        return MODE_PROMPT.to_string();
    };

    match session.result() {
        GameResult::Won { by, .. } => match session.winning_line() {
            Some(line) => format!("{} won! ({} to {})", by, line.start, line.end),
            None => format!("{} won!", by),
        },
        GameResult::Draw => "Draw!".to_string(),
        GameResult::Ongoing => {
            let mark = session.current_mark();
            match Attribution::for_mark(mark, mode) {
                Some(player) => format!("Turn: {} ({})", mark, player),
                None => format!("Turn: {}", mark),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::GameMode;

    #[test]
    fn test_empty_board_with_coordinates() {
        let session = TicTacToeSession::with_mode(GameMode::Multiplayer);
        let text = render_board(&session, &DisplayConfig::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "    0   1   2");
        assert_eq!(lines[1], "0     |   |   ");
        assert_eq!(lines[2], "   ---+---+---");
    }

    #[test]
    fn test_board_without_coordinates() {
        let mut session = TicTacToeSession::with_mode(GameMode::Multiplayer);
        session.submit_move(0, 0).unwrap();
        session.submit_move(2, 2).unwrap();
        let display = DisplayConfig {
            show_coordinates: false,
        };

        let text = render_board(&session, &display);

        assert_eq!(
            text,
            " O |   |   \n---+---+---\n   |   |   \n---+---+---\n   |   | X \n"
        );
    }

    #[test]
    fn test_status_lines() {
        let mut session = TicTacToeSession::new();
        assert_eq!(render_status(&session), MODE_PROMPT);

        session.select_mode(GameMode::SinglePlayer).unwrap();
        assert_eq!(render_status(&session), "Turn: O (Player A)");

        let mut multi = TicTacToeSession::with_mode(GameMode::Multiplayer);
        multi.submit_move(1, 1).unwrap();
        assert_eq!(render_status(&multi), "Turn: X (Player B)");
    }

    #[test]
    fn test_win_status_names_the_winner() {
        let mut session = TicTacToeSession::with_mode(GameMode::Multiplayer);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.submit_move(row, col).unwrap();
        }

        assert_eq!(render_status(&session), "Player A won! ((0, 0) to (0, 2))");
    }
}
