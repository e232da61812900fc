pub mod classifier;
pub mod dedupe;
pub mod diagnostics;
pub mod lines;
pub mod merge;
pub mod render;
pub mod router;

use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

pub use classifier::{OverflowPolicy, OverflowPolicyParseError, PersonRecord};
pub use diagnostics::{Diagnostic, TokenIssue};
pub use render::OutputFormat;
pub use router::names_router;

#[derive(Debug)]
pub enum NamesError {
    Io(std::io::Error),
    Utf8(std::str::Utf8Error),
    Csv(csv::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for NamesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamesError::Io(err) => write!(f, "failed to read or write name list: {}", err),
            NamesError::Utf8(err) => write!(f, "name list is not valid UTF-8: {}", err),
            NamesError::Csv(err) => write!(f, "failed to write CSV output: {}", err),
            NamesError::Json(err) => write!(f, "failed to write JSON output: {}", err),
        }
    }
}

impl std::error::Error for NamesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NamesError::Io(err) => Some(err),
            NamesError::Utf8(err) => Some(err),
            NamesError::Csv(err) => Some(err),
            NamesError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for NamesError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<std::str::Utf8Error> for NamesError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::Utf8(err)
    }
}

impl From<csv::Error> for NamesError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for NamesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Switches applied on top of the fixed extraction and classification rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub deduplicate: bool,
    pub overflow: OverflowPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedNames {
    pub records: Vec<PersonRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs a complete name list through extraction, merge expansion,
/// classification and optional deduplication.
///
/// Input is always buffered in full before the first stage runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamePipeline {
    config: PipelineConfig,
}

impl NamePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> PipelineConfig {
        self.config
    }

    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.config.deduplicate = deduplicate;
        self
    }

    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<NormalizedNames, NamesError> {
        let text = std::fs::read_to_string(path)?;
        Ok(self.normalize(&text))
    }

    pub fn from_reader<R: Read>(&self, mut reader: R) -> Result<NormalizedNames, NamesError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.from_bytes(&bytes)
    }

    pub fn from_bytes(&self, bytes: &[u8]) -> Result<NormalizedNames, NamesError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.normalize(text))
    }

    pub fn normalize(&self, csv: &str) -> NormalizedNames {
        let lines = lines::extract_lines(csv);
        let merge::Expansion {
            tokens,
            mut diagnostics,
        } = merge::expand_lines(&lines);

        let mut records = Vec::with_capacity(tokens.len());
        for token in tokens {
            let classifier::Classification { record, issue } =
                classifier::classify(&token.text, self.config.overflow);

            if let Some(issue) = issue {
                warn!(
                    line = token.line,
                    token = %token.text,
                    %issue,
                    "malformed name token"
                );
                diagnostics.push(Diagnostic {
                    line: token.line,
                    token: token.text,
                    issue,
                });
            }
            records.push(record);
        }
        diagnostics.sort_by_key(|diagnostic| diagnostic.line);

        if self.config.deduplicate {
            let before = records.len();
            records = dedupe::deduplicate(records);
            debug!(removed = before - records.len(), "deduplicated name records");
        }

        info!(
            rows = lines.len(),
            records = records.len(),
            diagnostics = diagnostics.len(),
            "normalized name list"
        );

        NormalizedNames {
            records,
            diagnostics,
        }
    }
}
