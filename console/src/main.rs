
mod config;
mod interfaces;

use clap::Parser;

use interfaces::terminal::TerminalInterface;

use utils::*;

///
/// A structure representing command line arguments.
///
#[derive(Parser)]
#[clap(about = "Two-player tic-tac-toe in the terminal.")]
struct CLIArgs
{
    #[clap(short, long, default_value = "config/config.toml")]
    config: String
}

fn main () -> Result<()>
{
    let args = CLIArgs::parse();

    let config = config::Config::load(& args.config)?;
    let _logger = log::initialize(& config.log_path, "console", & config.log_level)?;

    log::info!("Starting a session with config '{}'.", & args.config);

    let mut terminal = TerminalInterface::new(& config)?;
    let stdin = std::io::stdin();
    terminal.run_session(stdin.lock(), std::io::stdout(), std::io::stdout())?;

    log::info!("Session over.");
    Ok(())
}
