use std::io::Write;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use common::games::tictactoe::{GameMode, TicTacToeSession};
use common::log;

use crate::board_view::{render_board, render_status};
use crate::command::{ClientCommand, HELP_TEXT, parse_command};
use crate::config::DisplayConfig;

pub struct RunnerSettings {
    pub computer_move_delay: Duration,
    pub display: DisplayConfig,
}

/// Drives one session from line-based input. Owns the session outright;
/// every command is handled to completion before the next line is read.
pub struct GameRunner<W: Write> {
    session: TicTacToeSession,
    settings: RunnerSettings,
    out: W,
}

impl<W: Write> GameRunner<W> {
    pub fn new(settings: RunnerSettings, preselected_mode: Option<GameMode>, out: W) -> Self {
        let session = match preselected_mode {
            Some(mode) => TicTacToeSession::with_mode(mode),
            None => TicTacToeSession::new(),
        };
        Self {
            session,
            settings,
            out,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &TicTacToeSession {
        &self.session
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> std::io::Result<()> {
        self.show_state()?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if self.handle_line(&line).await?.is_break() {
                break;
            }
        }

        writeln!(self.out, "Bye!")?;
        Ok(())
    }

    pub async fn handle_line(&mut self, line: &str) -> std::io::Result<ControlFlow<()>> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(self.out, "{} (type `help` for commands)", e)?;
                return Ok(ControlFlow::Continue(()));
            }
        };

        match command {
            ClientCommand::Quit => return Ok(ControlFlow::Break(())),
            ClientCommand::Help => writeln!(self.out, "{}", HELP_TEXT)?,
            ClientCommand::Reset => {
                self.session.reset_session();
                self.show_state()?;
            }
            ClientCommand::SelectMode(mode) => match self.session.select_mode(mode) {
                Ok(()) => self.show_state()?,
                Err(e) => writeln!(self.out, "{}", e)?,
            },
            ClientCommand::PlaceMark { row, col } => self.place_mark(row, col).await?,
        }

        Ok(ControlFlow::Continue(()))
    }

    async fn place_mark(&mut self, row: usize, col: usize) -> std::io::Result<()> {
        let outcome = match self.session.submit_move(row, col) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(self.out, "Move ignored: {}", e)?;
                return Ok(());
            }
        };

        if let Some(reply) = outcome.computer_reply {
            if !self.settings.computer_move_delay.is_zero() {
                self.out.flush()?;
                tokio::time::sleep(self.settings.computer_move_delay).await;
            }
            log!("Rendering computer reply {}", reply);
            writeln!(self.out, "Computer plays {}", reply)?;
        }

        self.show_state()
    }

    fn show_state(&mut self) -> std::io::Result<()> {
        if self.session.mode().is_some() {
            let board = render_board(&self.session, &self.settings.display);
            write!(self.out, "{}", board)?;
        }
        writeln!(self.out, "{}", render_status(&self.session))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{Attribution, GameResult, Mark, Position};

    fn settings() -> RunnerSettings {
        RunnerSettings {
            computer_move_delay: Duration::ZERO,
            display: DisplayConfig::default(),
        }
    }

    async fn run_script(script: &str, mode: Option<GameMode>) -> (TicTacToeSession, String) {
        let mut runner = GameRunner::new(settings(), mode, Vec::new());
        runner.run(script.as_bytes()).await.unwrap();
        let session = runner.session().clone();
        let output = String::from_utf8(runner.into_output()).unwrap();
        (session, output)
    }

    #[tokio::test]
    async fn test_moves_before_mode_are_ignored() {
        let (session, output) = run_script("1 1\nquit\n", None).await;

        assert!(output.contains("Move ignored: Game mode has not been selected"));
        assert_eq!(session.board().count(Mark::Empty), 9);
    }

    #[tokio::test]
    async fn test_single_player_game_shows_computer_reply() {
        let (session, output) = run_script("single\n0 0\n", None).await;

        assert!(output.contains("Computer plays (1, 1)"));
        assert_eq!(session.board().get(Position::new(1, 1)), Mark::X);
        assert!(output.ends_with("Bye!\n"));
    }

    #[tokio::test]
    async fn test_multiplayer_game_to_the_end() {
        let script = "0 0\n1 0\n0 1\n1 1\n0 2\n2 2\n";
        let (session, output) = run_script(script, Some(GameMode::Multiplayer)).await;

        assert_eq!(
            session.result(),
            GameResult::Won {
                mark: Mark::O,
                by: Attribution::FirstPlayer
            }
        );
        assert!(output.contains("Player A won!"));
        assert!(output.contains("Move ignored: Game is already over"));
    }

    #[tokio::test]
    async fn test_reset_returns_to_mode_selection() {
        let (session, output) = run_script("2\n0 0\nreset\nreset\n", None).await;

        assert_eq!(session.mode(), None);
        assert_eq!(session.board().count(Mark::Empty), 9);
        assert!(output.matches(crate::board_view::MODE_PROMPT).count() >= 3);
    }

    #[tokio::test]
    async fn test_garbage_input_keeps_running() {
        let (session, output) = run_script("what\n9 9\nhelp\n", Some(GameMode::Multiplayer)).await;

        assert!(output.contains("Unknown command: what"));
        assert!(output.contains("Move ignored: Position (9, 9) is out of bounds"));
        assert!(output.contains("Commands:"));
        assert_eq!(session.current_mark(), Mark::O);
    }
}
