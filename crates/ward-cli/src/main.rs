mod commands;
mod terminal;

use commands::{demo, export, CommandLine, Commands};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Demo { name } => demo::demo(&name),
        Commands::Export { name, format } => export::export(&name, format),
    }
}
