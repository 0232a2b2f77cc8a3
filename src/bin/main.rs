use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, Level};

use osmway2kml::{batch, InputSet};

/// Converts the ways of OpenStreetMap XML files into KML line strings,
/// writing `<input>.kml` next to each input.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input .osm files.
    #[arg(required_unless_present = "directory", conflicts_with = "directory")]
    files: Vec<PathBuf>,

    /// Convert every entry of DIRECTORY instead.
    #[arg(short = 'd', long = "directory", value_name = "DIRECTORY")]
    directory: Option<PathBuf>,

    /// Log debug output.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::INFO
        }
    }

    fn inputs(&self) -> InputSet {
        match &self.directory {
            Some(dir) => InputSet::Directory(dir.clone()),
            None => InputSet::Files(self.files.clone()),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    let paths = match args.inputs().resolve() {
        Ok(paths) => paths,
        Err(e) => {
            println!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("Input files: {:?}", paths);

    let report = batch::run(&paths, &mut io::stdout().lock());
    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
