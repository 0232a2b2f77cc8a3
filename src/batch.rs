use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::{convert_file, error::ConvertError};

/// Where the inputs of a run come from.
#[derive(Clone, Debug)]
pub enum InputSet {
    Files(Vec<PathBuf>),
    /// Every entry of the directory is an input.
    Directory(PathBuf),
}

impl InputSet {
    pub fn resolve(&self) -> Result<Vec<PathBuf>, ConvertError> {
        match self {
            InputSet::Files(files) => Ok(files.clone()),
            InputSet::Directory(dir) => Self::list_directory(dir),
        }
    }

    fn list_directory(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
        let entries = fs::read_dir(dir).map_err(|e| ConvertError::io(dir, e))?;
        let mut paths = entries
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConvertError::io(dir, e))?;
        paths.sort();
        Ok(paths)
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.missing.is_empty() && self.failed.is_empty()
    }
}

/// Converts each path in turn. A missing or failing file is reported on
/// `out` and does not stop the remaining files.
pub fn run<W: Write>(paths: &[PathBuf], out: &mut W) -> BatchReport {
    let mut report = BatchReport::default();
    for path in paths {
        match convert_file(path) {
            Ok(kml_path) => report.converted.push(kml_path),
            Err(err @ ConvertError::NotFound(_)) => {
                warn!("{}", err);
                report_line(out, &format!("Error: {err}"));
                report.missing.push(path.clone());
            }
            Err(err) => {
                error!("Failed to convert {:?}: {}", path, err);
                report_line(
                    out,
                    &format!("Error: Failed to convert \"{}\": {err}", path.display()),
                );
                report.failed.push((path.clone(), err));
            }
        }
    }
    info!(
        "Converted {} file(s), {} missing, {} failed",
        report.converted.len(),
        report.missing.len(),
        report.failed.len()
    );
    report
}

fn report_line<W: Write>(out: &mut W, line: &str) {
    if let Err(e) = writeln!(out, "{line}") {
        warn!("Failed to write report line: {}", e);
    }
}
