use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing::info;

use alsa_jack_monitor::audio::{DeviceSession, JackMonitor, elements};
use alsa_jack_monitor::card;

#[derive(Parser)]
#[command(name = "alsa-jack-monitor")]
#[command(about = "ALSA headphone jack monitor with automatic speaker/headphone switching")]
#[command(version)]
struct Cli {
    /// Sound card name, numeric index, or ALSA device path (e.g. "hw:0")
    card: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // The help footer lists the cards actually installed, so it is built at
    // runtime rather than derived.
    let mut command = Cli::command().after_help(card::possible_cards_help());
    let matches = match command.clone().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            // Help and version go to stdout with a clean exit; everything
            // else is a usage error.
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };
    let cli = Cli::from_arg_matches(&matches)?;

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("alsa_jack_monitor={log_level}"))
        .init();

    let Some(identifier) = cli.card else {
        command.print_help()?;
        std::process::exit(1);
    };

    info!("Starting jack monitor for '{}'", identifier);

    let device = card::resolve_card(&identifier)?;
    let session = DeviceSession::open(&device)?;
    let outputs = elements::locate_outputs(session.mixer())?;

    // Never returns Ok: the loop ends only on a fatal error or process kill.
    JackMonitor::new(&session, outputs).run()?;
    Ok(())
}
