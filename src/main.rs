//! exifwalk - Print the EXIF metadata of a JPEG or TIFF file.

use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exifwalk::{Config, ExifLoader, Report};

fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(&config);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    run(&config)
}

fn run(config: &Config) -> ExitCode {
    let file = match File::open(&config.path) {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to open {}: {}", config.path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    debug!(path = %config.path.display(), chunk_size = config.chunk_size, "Reading file");

    let exif = match ExifLoader::read_from(BufReader::new(file), config.chunk_size) {
        Ok(exif) => exif,
        Err(e) => {
            error!("Failed to read EXIF data from {}: {}", config.path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        entries = exif.len(),
        byte_order = ?exif.byte_order(),
        "Parsed EXIF data"
    );

    let report = Report::new(&exif, config.gps_only);
    if config.json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", report);
    }

    ExitCode::SUCCESS
}

/// Initialize tracing on stderr; `RUST_LOG` overrides the default filter.
fn init_logging(config: &Config) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
