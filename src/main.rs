//! Send HTTP requests from the terminal and inspect the responses.
mod cli;
mod display;
mod history;
mod http;
mod trc;

use clap::Parser;
use tracing::debug;

use cli::Args;
use display::messages::print_error;
use display::style::Palette;
use trc::Trc;

fn main() {
    let args = Args::parse();

    if let Err(e) = Trc::default().init() {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let palette = Palette::detect(&std::io::stdout(), args.no_color);
    let error_palette = Palette::detect(&std::io::stderr(), args.no_color);
    if let Err(e) = cli::run(args, palette, &mut std::io::stdout().lock()) {
        debug!(error = ?e, "command failed");
        print_error(&e.to_string(), error_palette);
        std::process::exit(1);
    }
}
