use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use seat_reservation::build_reservation_service;
use seat_reservation::config::{AppConfig, ConfigOverrides};
use seat_reservation::console::session::ConsoleSession;
use seat_reservation::domain::user::user_registry::UserRegistry;
use seat_reservation::logger;

/// Book cinema seats from the terminal.
#[derive(Parser, Debug)]
#[command(name = "seat-reservation", version, about = "Console box office for a single screening room")]
struct Cli {
    /// Path to a JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Credentials file with `username password` pairs.
    #[arg(short, long)]
    users: Option<PathBuf>,

    /// Number of seats in the room.
    #[arg(long)]
    max_seats: Option<u32>,

    /// Hours a reservation holds its seat.
    #[arg(long)]
    hold_hours: Option<i64>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Plain output without terminal colours.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(logger::resolve_level(cli.log_level.as_deref()));

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let overrides = ConfigOverrides { max_seats: cli.max_seats, reservation_hold_hours: cli.hold_hours, users_file: cli.users };
    let config = AppConfig::load(cli.config.as_deref(), overrides).context("failed to load configuration")?;

    let users = match UserRegistry::load_from_file(&config.users_file) {
        Ok(users) => users,
        Err(e) => {
            log::error!("Error opening '{}': {}", config.users_file.display(), e);
            eprintln!("Error opening {}!", config.users_file.display());
            UserRegistry::new()
        }
    };

    let service = build_reservation_service(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock(), &service, &config.catalog, &users).with_color(!cli.no_color);

    let exit = session.run().context("console session failed")?;
    log::info!("Session ended: {:?}.", exit);

    Ok(ExitCode::from(exit.exit_code()))
}
