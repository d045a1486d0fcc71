mod board_view;
mod command;
mod config;
mod runner;

use std::time::Duration;
use clap::{Parser, ValueEnum};
use common::games::tictactoe::GameMode;
use common::version::VERSION;
use common::{log, logger};
use tokio::io::BufReader;

use config::{Config, get_config_manager};
use runner::{GameRunner, RunnerSettings};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Single,
    Multi,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => GameMode::SinglePlayer,
            ModeArg::Multi => GameMode::Multiplayer,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", version = VERSION, about = "Tic-tac-toe in the terminal")]
struct Args {
    /// Skip mode selection for the first game
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Render the computer's reply without the pacing delay
    #[arg(long)]
    no_delay: bool,
}

fn load_config(path: Option<&str>) -> (Config, Option<String>) {
    match get_config_manager(path).get_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e.to_string())),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let (config, config_error) = load_config(args.config.as_deref());

    if config.log.enabled {
        let prefix = if args.use_log_prefix {
            Some(config.log.prefix.clone().unwrap_or_else(|| "Client".to_string()))
        } else {
            config.log.prefix.clone()
        };
        logger::init_logger(prefix);
    }

    if let Some(e) = config_error {
        log!("Using default config: {}", e);
        eprintln!("Config could not be loaded, using defaults: {}", e);
    }

    log!("Tic-tac-toe client {} starting", VERSION);

    let computer_move_delay = if args.no_delay {
        Duration::ZERO
    } else {
        Duration::from_millis(config.game.computer_move_delay_ms)
    };
    let settings = RunnerSettings {
        computer_move_delay,
        display: config.display.clone(),
    };
    let preselected_mode = args.mode.map(GameMode::from).or(config.game.default_mode);

    let mut runner = GameRunner::new(settings, preselected_mode, std::io::stdout());
    runner.run(BufReader::new(tokio::io::stdin())).await?;

    log!("Client shut down");
    Ok(())
}
