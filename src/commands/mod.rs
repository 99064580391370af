//! CLI command implementations

pub mod command_traits;
pub mod extract_command;

pub use command_traits::Command;
pub use extract_command::ExtractCommand;

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the command-line definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("image-to-entities")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a colour-coded level map bitmap into JSON rectangles")
        .arg(
            Arg::new("input")
                .help("Input bitmap (black background, solid colour blocks)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write JSON to this file instead of stdout")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("JSON layout (legacy, json, pretty)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("scan-last-row")
                .long("scan-last-row")
                .help("Also start rectangles on the last image row")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("legacy-geometry")
                .long("legacy-geometry")
                .help("Reproduce the rectangle sizes of the old converter")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .help("Show scan progress on stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging on stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log records to this file")
                .value_name("FILE")
                .required(false),
        )
}
