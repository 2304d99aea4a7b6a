pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod example;
pub mod naming;
pub mod operations;
pub mod passes;
pub mod pipeline;

use std::fmt;

use serde_json::Value;

use config::OafConfig;
use error::PatchError;

pub use pipeline::{PipelineReport, run};

/// Identifies a pass in reports and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassId {
    MissingSchemas,
    OperationMetadata,
    Tags,
    Servers,
    CodeSamples,
    ResponseExamples,
    RequestBodyExamples,
    UniqueSummaries,
}

impl PassId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassId::MissingSchemas => "missing-schemas",
            PassId::OperationMetadata => "operation-metadata",
            PassId::Tags => "tags",
            PassId::Servers => "servers",
            PassId::CodeSamples => "code-samples",
            PassId::ResponseExamples => "response-examples",
            PassId::RequestBodyExamples => "request-body-examples",
            PassId::UniqueSummaries => "unique-summaries",
        }
    }

    /// What the pass counts, for report lines.
    fn unit(&self) -> &'static str {
        match self {
            PassId::MissingSchemas => "schemas added",
            PassId::OperationMetadata => "operations named",
            PassId::Tags => "tags defined",
            PassId::Servers => "servers installed",
            PassId::CodeSamples => "operations given code samples",
            PassId::ResponseExamples => "response examples added",
            PassId::RequestBodyExamples => "request body examples added",
            PassId::UniqueSummaries => "summaries disambiguated",
        }
    }
}

impl fmt::Display for PassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single pass changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    pub pass: PassId,
    pub changed: usize,
    /// Names of the entries touched, where the pass tracks them.
    pub names: Vec<String>,
}

impl PassReport {
    pub fn count(pass: PassId, changed: usize) -> Self {
        Self {
            pass,
            changed,
            names: Vec::new(),
        }
    }

    pub fn with_names(pass: PassId, names: Vec<String>) -> Self {
        Self {
            pass,
            changed: names.len(),
            names,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.changed == 0
    }

    /// One stable line for scripting, e.g. `servers: 2 servers installed`.
    pub fn message(&self) -> String {
        let mut line = format!("{}: {} {}", self.pass, self.changed, self.pass.unit());
        if !self.names.is_empty() {
            line.push_str(&format!(" ({})", self.names.join(", ")));
        }
        line
    }
}

/// A transformation over the whole document.
///
/// Passes mutate the spec in place and must be idempotent: applying a pass to
/// its own output reports no changes.
pub trait Pass {
    fn id(&self) -> PassId;
    fn apply(&self, spec: &mut Value, config: &OafConfig) -> Result<PassReport, PatchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_message() {
        let report = PassReport::count(PassId::Servers, 2);
        assert_eq!(report.message(), "servers: 2 servers installed");
        assert!(!report.is_noop());
    }

    #[test]
    fn test_report_message_with_names() {
        let report = PassReport::with_names(
            PassId::MissingSchemas,
            vec!["A".to_string(), "B".to_string()],
        );
        assert_eq!(report.changed, 2);
        assert_eq!(report.message(), "missing-schemas: 2 schemas added (A, B)");
    }
}
