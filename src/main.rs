use std::{io, process};

use log::error;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod config;
mod records;
mod session;

use config::AppConfig;
use session::{console::Console, Session};

fn main() {
    let config = AppConfig::default();

    if let Err(e) = TermLogger::init(
        config.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to init logger: {}", e);
    }

    let manager = match records::open_manager(&config.users_path) {
        Ok(manager) => manager,
        Err(e) => {
            error!("Failed to load {}: {}", config.users_path.display(), e);
            process::exit(1);
        }
    };

    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut session = Session::new(manager, console);
    if let Err(e) = session.run() {
        error!("{}", e);
        process::exit(1);
    }
}
