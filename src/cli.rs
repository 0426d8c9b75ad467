//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::dependencies::Preset;

/// Melodrama - presentation scaffolding
///
/// Create a presentation project and install everything it needs.
#[derive(Parser, Debug)]
#[command(
    name = "melodrama",
    author,
    version,
    disable_version_flag = true,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Scaffold a presentation project and install its dependencies",
    long_about = "Melodrama creates a presentation directory, writes a minimal package.json, \
                  installs the presentation toolchain with yarn (or npm when yarn is missing) \
                  and lets the installed scripts bootstrap the project.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  melodrama my-talk\n    \
                  melodrama my-talk --verbose\n    \
                  melodrama deck --preset spectacle --syntax --theme nova\n    \
                  melodrama . --skip-install"
)]
pub struct Cli {
    /// Directory to create the presentation in
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Print logs and package manager output while running
    #[arg(
        long,
        env = "MELODRAMA_VERBOSE",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub verbose: bool,

    /// Only prepare the directory, do not install dependencies
    #[arg(long)]
    pub skip_install: bool,

    /// Add syntax highlighting (prismjs)
    #[arg(long)]
    pub syntax: bool,

    /// Theme to install (spectacle-theme-<NAME>)
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Which set of packages to install
    #[arg(long, value_enum, default_value_t = Preset::Scripts)]
    pub preset: Preset,

    /// Do not run the installed package's bootstrap step
    #[arg(long)]
    pub no_bootstrap: bool,

    /// Abort the install after this many seconds
    #[arg(long, value_name = "SECS", env = "MELODRAMA_INSTALL_TIMEOUT")]
    pub install_timeout: Option<u64>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}
