//! Melodrama - presentation scaffolding
//!
//! Creates a presentation project directory with a minimal `package.json`,
//! installs its dependencies with yarn or npm and hands over to the
//! installed package's bootstrap step.

use clap::Parser;
use console::Style;
use miette::Diagnostic;

mod bootstrap;
mod cli;
mod commands;
mod dependencies;
mod error;
mod installer;
mod logging;
mod operations;
mod package_manager;
mod process;
mod progress;
mod project;
mod ui;

use cli::Cli;
use error::MelodramaError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::create::run(&cli) {
        report(&e);
        std::process::exit(e.exit_code());
    }
}

/// Print the error, its causes and any help text to stderr
fn report(err: &MelodramaError) {
    let red = Style::new().red();
    eprintln!();
    eprintln!("{}", red.apply_to(format!("Error: {err}")));

    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprintln!("{}", red.apply_to(format!("  Caused by: {cause}")));
        source = cause.source();
    }

    if let Some(help) = err.help() {
        eprintln!("{}", Style::new().dim().apply_to(help));
    }
}
