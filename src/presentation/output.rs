/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::utils::id::random_output_file_name;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Where fetched documents go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output
    Terminal,
    /// A new randomly named file in this directory
    Directory(PathBuf),
}

/// What a write produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// File that was created, `None` for terminal output
    pub path: Option<PathBuf>,
    /// Number of elements when the payload is an array
    pub documents: Option<usize>,
}

/// Serializes payloads and sends them to a destination
#[derive(Debug, Clone)]
pub struct OutputWriter {
    destination: Destination,
}

impl OutputWriter {
    /// Creates a writer for `destination`
    pub fn new(destination: Destination) -> Self {
        Self { destination }
    }

    /// Serialized form of a payload, as printed or saved
    pub fn render(payload: &Value) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(payload)?)
    }

    /// Writes `payload` to the destination
    ///
    /// The file is created with a plain write: a failure part way leaves
    /// whatever was written and is returned as `AppError::Io`.
    pub fn write(&self, payload: &Value) -> Result<WriteReport, AppError> {
        let rendered = Self::render(payload)?;

        let path = match &self.destination {
            Destination::Terminal => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{rendered}")?;
                stdout.flush()?;
                None
            }
            Destination::Directory(dir) => {
                let path = dir.join(random_output_file_name());
                fs::write(&path, rendered.as_bytes())?;
                info!("Documents fetched successfully.");
                info!("Fetched documents saved to: {}", path.display());
                Some(path)
            }
        };

        let documents = payload.as_array().map(Vec::len);
        if let Some(count) = documents {
            info!("Number of documents returned: {}", count);
        }

        Ok(WriteReport { path, documents })
    }
}
