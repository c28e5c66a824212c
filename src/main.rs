//! rHours main entrypoint.

use clap::Parser;
use rhours::cli::parser::Cli;
use rhours::run;
use rhours::telemetry::init_logging;
use rhours::ui::messages::error;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = run(&cli) {
        error(&e);
        if cli.debug {
            eprintln!("{:#?}", e);
        }
        std::process::exit(e.exit_code());
    }
}
