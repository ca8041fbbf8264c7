//! Configuration for the `exifwalk` command line tool.
//!
//! Options come from command-line arguments via clap, with environment
//! variable fallbacks under the `EXIFWALK_` prefix:
//!
//! - `EXIFWALK_JSON` - Print the report as JSON (default: false)
//! - `EXIFWALK_CHUNK_SIZE` - Bytes read per loader feed (default: 4096)
//!
//! Logging is controlled separately through `RUST_LOG`.

use std::path::PathBuf;

use clap::Parser;

use crate::exif::DEFAULT_CHUNK_SIZE;

/// Largest chunk size accepted for a single feed (16MB).
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

// =============================================================================
// CLI Arguments
// =============================================================================

/// exifwalk - Print the EXIF metadata of a JPEG or TIFF file.
///
/// Reads the file incrementally, stopping as soon as a JPEG's EXIF segment
/// is complete, and lists every entry of every directory.
#[derive(Parser, Debug, Clone)]
#[command(name = "exifwalk")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// File to read (JPEG, TIFF, or a raw `Exif\0\0` block).
    pub path: PathBuf,

    /// Print the report as JSON instead of text.
    #[arg(long, default_value_t = false, env = "EXIFWALK_JSON")]
    pub json: bool,

    /// Number of bytes read from the file per loader feed.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE, env = "EXIFWALK_CHUNK_SIZE")]
    pub chunk_size: usize,

    /// Only list entries of the GPS directory.
    #[arg(long, default_value_t = false)]
    pub gps_only: bool,

    /// Enable verbose (debug) logging.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration.
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than 0".to_string());
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(format!(
                "chunk_size must be at most {} bytes",
                MAX_CHUNK_SIZE
            ));
        }

        Ok(())
    }

    /// Default log filter for this configuration, used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "exifwalk=debug"
        } else {
            "exifwalk=info"
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
