use std::fs;
use std::path::PathBuf;

use crate::domain::ports::ReportWriter;
use crate::utils::error::Result;

/// Writes the report to standard output. Diagnostics stay on stderr, so the
/// CSV stream is the only stdout content.
#[derive(Debug, Clone, Default)]
pub struct StdoutReportWriter;

impl ReportWriter for StdoutReportWriter {
    async fn write_report(&self, content: &str) -> Result<String> {
        println!("{}", content);
        Ok("stdout".to_string())
    }
}

#[derive(Debug, Clone)]
pub struct FileReportWriter {
    path: PathBuf,
}

impl FileReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportWriter for FileReportWriter {
    async fn write_report(&self, content: &str) -> Result<String> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, format!("{}\n", content))?;
        Ok(self.path.display().to_string())
    }
}
