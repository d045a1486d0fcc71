use common::games::tictactoe::GameMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    SelectMode(GameMode),
    PlaceMark { row: usize, col: usize },
    Reset,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1 | single       start a game against the computer
  2 | multi        start a game for two players
  <row> <col>      place your mark, e.g. `1 2` or `1,2` (0-based)
  reset            abandon the game and choose a mode again
  help             show this text
  quit | exit      leave";

pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => return Err("Empty command".to_string()),
        "1" | "single" | "singleplayer" => return Ok(ClientCommand::SelectMode(GameMode::SinglePlayer)),
        "2" | "multi" | "multiplayer" => return Ok(ClientCommand::SelectMode(GameMode::Multiplayer)),
        "reset" | "r" => return Ok(ClientCommand::Reset),
        "help" | "h" | "?" => return Ok(ClientCommand::Help),
        "quit" | "exit" | "q" => return Ok(ClientCommand::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => {
            let row = row
                .parse::<usize>()
                .map_err(|_| format!("Invalid row: {}", row))?;
            let col = col
                .parse::<usize>()
                .map_err(|_| format!("Invalid column: {}", col))?;
            Ok(ClientCommand::PlaceMark { row, col })
        }
        _ => Err(format!("Unknown command: {}", trimmed)),
    }
}
