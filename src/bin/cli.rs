// src/bin/cli.rs
use jobdex::cli;

fn main() {
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: {e}");
    }
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
