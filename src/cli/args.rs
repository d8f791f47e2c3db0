use crate::options::OptionsMap;
use crate::system::System;
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::Path;

/// Command-line arguments for flagline
#[derive(Parser, Debug, Clone)]
#[command(name = "flagline")]
#[command(about = "Reconstructs command-line invocations from a command definition and an options map")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Subcommand path from the program root, e.g. `db migrate`
    #[arg(value_name = "COMMAND")]
    pub path: Vec<String>,

    /// Command definition file (YAML or JSON)
    #[arg(long, value_name = "PATH", default_value = "./flagline.yaml")]
    pub definition: String,

    /// Options as a JSON object; the "_" key holds positional arguments
    #[arg(
        long,
        value_name = "JSON",
        default_value = "{}",
        conflicts_with = "options_file"
    )]
    pub options: String,

    /// Read the options JSON object from a file
    #[arg(long = "options-file", value_name = "PATH")]
    pub options_file: Option<String>,

    /// Output format: line, shell or json
    #[arg(long = "output-format", value_name = "FORMAT", default_value = "line")]
    pub output_format: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Read the options map from `--options-file` or `--options`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The options file cannot be read
    /// - The JSON is invalid or not an object
    pub fn load_options(&self, system: &dyn System) -> Result<OptionsMap> {
        match self.options_file.as_deref() {
            Some(path) => {
                let content = system
                    .read_to_string(Path::new(path))
                    .with_context(|| format!("Failed to read options file: {path}"))?;
                OptionsMap::from_json_str(&content)
                    .with_context(|| format!("Invalid options in file: {path}"))
            }
            None => OptionsMap::from_json_str(&self.options),
        }
    }
}
