//! Command-line interface for printing a blueprint as ASCII art or JSON

use crate::io::configuration::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
use crate::io::error::{ArtError, Result};
use crate::io::logging::Verbosity;
use crate::layout::blueprint::{decode_json, parse_layout, pretty_json};
use crate::render::compose::AsciiArtReader;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// What to print for the decoded blueprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Diagram, separator and legend
    #[default]
    #[value(name = "asciiart")]
    AsciiArt,
    /// Re-indented JSON
    Json,
    /// JSON exactly as decompressed
    RawJson,
}

#[derive(Parser, Debug)]
#[command(name = "blueprintart")]
#[command(author, version, about = "Print Factorio blueprints as ASCII art")]
/// Command-line arguments for the blueprint printer
pub struct Cli {
    /// Blueprint string or JSON file; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::AsciiArt)]
    pub format: OutputFormat,

    /// Characters per grid cell horizontally
    #[arg(short = 'W', long, default_value_t = DEFAULT_CELL_WIDTH)]
    pub cell_width: usize,

    /// Lines per grid cell (1, 2 or 3)
    #[arg(short = 'H', long, default_value_t = DEFAULT_CELL_HEIGHT)]
    pub cell_height: usize,

    /// Log cache construction and timings to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Diagnostic verbosity selected by the flags
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Input file, or `None` for stdin
    pub fn input_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

/// Reads one blueprint and writes it in the selected format
pub struct BlueprintProcessor {
    cli: Cli,
}

impl BlueprintProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Write the output to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if reading, decoding, rendering or writing fails
    pub fn process(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_to(&mut out)?;
        out.flush().map_err(write_error)
    }

    /// Write the output to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if reading, decoding, rendering or writing fails
    pub fn process_to(&self, out: &mut impl Write) -> Result<()> {
        let start_time = Instant::now();
        let json = self.read_json()?;
        debug!(bytes = json.len(), elapsed = ?start_time.elapsed(), "decoded input");

        match self.cli.format {
            OutputFormat::RawJson => {
                out.write_all(&json).map_err(stream_error)?;
            }
            OutputFormat::Json => {
                let pretty = pretty_json(&json)?;
                writeln!(out, "{pretty}").map_err(stream_error)?;
            }
            OutputFormat::AsciiArt => {
                let layout = parse_layout(&json)?;
                info!(
                    entities = layout.entities.len(),
                    tiles = layout.tiles.len(),
                    cell_width = self.cli.cell_width,
                    cell_height = self.cli.cell_height,
                    "rendering blueprint"
                );
                let mut reader =
                    AsciiArtReader::new(&layout, self.cli.cell_width, self.cli.cell_height);
                std::io::copy(&mut reader, out).map_err(stream_error)?;
                // The stream ends on the last legend line without a newline
                writeln!(out).map_err(stream_error)?;
            }
        }

        debug!(elapsed = ?start_time.elapsed(), "finished");
        Ok(())
    }

    fn read_json(&self) -> Result<Vec<u8>> {
        match self.cli.input_path() {
            Some(path) => {
                let file = File::open(path).map_err(|source| ArtError::FileSystem {
                    path: path.to_path_buf(),
                    operation: "open",
                    source,
                })?;
                decode_json(file)
            }
            None => decode_json(std::io::stdin().lock()),
        }
    }
}

/// Recover a rendering error carried through `std::io::copy`
fn stream_error(err: std::io::Error) -> ArtError {
    match err.downcast::<ArtError>() {
        Ok(render_error) => render_error,
        Err(err) => write_error(err),
    }
}

fn write_error(source: std::io::Error) -> ArtError {
    ArtError::FileSystem {
        path: PathBuf::from("<output>"),
        operation: "write",
        source,
    }
}
