use rxflow_order::Report;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Writes report snapshots into a directory as `report_day<N>.txt`.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    directory: PathBuf,
}

impl ReportWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn path_for(&self, report: &Report) -> PathBuf {
        self.directory.join(report.file_name())
    }

    /// Write the report, replacing any earlier report for the same day.
    pub fn write(&self, report: &Report) -> Result<PathBuf, ReportError> {
        let path = self.path_for(report);

        fs::create_dir_all(&self.directory).map_err(|source| {
            tracing::error!(path = %self.directory.display(), error = %source, "report directory unavailable");
            ReportError::WriteFailed {
                path: self.directory.clone(),
                source,
            }
        })?;
        fs::write(&path, report.to_string()).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "report write failed");
            ReportError::WriteFailed {
                path: path.clone(),
                source,
            }
        })?;

        tracing::info!(path = %path.display(), day = report.day, orders = report.total, "report saved");
        Ok(path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write report {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
