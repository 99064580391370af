//! Level map extraction command
//!
//! Loads the input bitmap, extracts its rectangles and writes the JSON
//! document to stdout or to an output file.

use clap::ArgMatches;
use log::{debug, info};
use std::fs::File;
use std::io;

use crate::api::ImageToEntities;
use crate::commands::command_traits::Command;
use crate::config::Config;
use crate::errors::{ExtractError, ExtractResult};
use crate::extractor::{ExtractOptions, Rectangle};
use crate::output::{self, OutputFormat};

/// Command for converting one level map into JSON
#[derive(Debug)]
pub struct ExtractCommand {
    /// Path to the input bitmap
    input_file: String,
    /// Path to the output file, stdout when absent
    output_file: Option<String>,
    /// Scan options after merging config file and flags
    options: ExtractOptions,
    /// JSON layout
    format: OutputFormat,
    /// Whether to draw a progress bar
    progress: bool,
}

impl ExtractCommand {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches) -> ExtractResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| {
                ExtractError::InvalidArguments("Expected arguments: input.bmp".to_string())
            })?
            .clone();
        info!("Input file: {}", input_file);

        let output_file = args.get_one::<String>("output").cloned();
        info!("Output file: {:?}", output_file);

        let config = match args.get_one::<String>("config") {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        debug!("Configuration: {:?}", config);

        let mut options = config.extract;
        if args.get_flag("scan-last-row") {
            options.scan_last_row = true;
        }
        if args.get_flag("legacy-geometry") {
            options.legacy_geometry = true;
        }
        info!("Extract options: {:?}", options);

        let format = match args.get_one::<String>("format") {
            Some(name) => name.parse::<OutputFormat>()?,
            None => config.output.format,
        };
        info!("Output format: {:?}", format);

        Ok(ExtractCommand {
            input_file,
            output_file,
            options,
            format,
            progress: args.get_flag("progress"),
        })
    }

    pub fn input_file(&self) -> &str {
        &self.input_file
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write the rendered rectangles to the output file or stdout
    fn emit(&self, rectangles: &[Rectangle]) -> ExtractResult<()> {
        match &self.output_file {
            Some(path) => {
                info!("Writing {} rectangles to {}", rectangles.len(), path);
                let mut file = File::create(path)?;
                output::write_to(&mut file, rectangles, self.format)
            }
            None => output::write_to(&mut io::stdout().lock(), rectangles, self.format),
        }
    }
}

impl Command for ExtractCommand {
    fn execute(&self) -> ExtractResult<()> {
        info!("Converting level map: {}", self.input_file);

        let converter = ImageToEntities::new(self.options).with_progress(self.progress);

        let rectangles = converter.extract_file(&self.input_file)?;
        self.emit(&rectangles)
    }
}
