use clap::error::ErrorKind;
use log::{error, LevelFilter};
use std::process;

use image_to_entities::commands::{build_cli, Command, ExtractCommand};
use image_to_entities::errors::ExtractError;
use image_to_entities::utils::logger::Logger;

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(m) => m,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                process::exit(0);
            }
            _ => {
                eprint!("{}", e.render());
                let usage = ExtractError::InvalidArguments("Expected arguments: input.bmp".into());
                println!("{}", usage);
                process::exit(1);
            }
        },
    };

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let log_file = matches.get_one::<String>("log-file").map(String::as_str);

    if let Err(e) = Logger::init_global_logger(log_file, level) {
        println!("Error - Failed to set up logging: {}", e);
        process::exit(1);
    }

    let command = match ExtractCommand::new(&matches) {
        Ok(command) => command,
        Err(e) => {
            error!("Failed to create command: {}", e);
            println!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = command.execute() {
        if let ExtractError::ImageOpenFailure { reason, .. } = &e {
            error!("{}", reason);
        }
        error!("Command execution error: {}", e);
        println!("{}", e);
        process::exit(1);
    }
}
