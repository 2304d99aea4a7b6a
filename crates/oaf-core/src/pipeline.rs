use serde_json::Value;

use crate::config::OafConfig;
use crate::error::PatchError;
use crate::passes::default_passes;
use crate::PassReport;

/// Outcome of a full pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub passes: Vec<PassReport>,
}

impl PipelineReport {
    /// Whether any pass modified the document.
    pub fn changed(&self) -> bool {
        self.passes.iter().any(|report| !report.is_noop())
    }

    /// Reports of the passes that did something, in pipeline order.
    pub fn applied(&self) -> impl Iterator<Item = &PassReport> {
        self.passes.iter().filter(|report| !report.is_noop())
    }
}

/// Apply every pass to `spec` in order.
pub fn run(spec: &mut Value, config: &OafConfig) -> Result<PipelineReport, PatchError> {
    let mut report = PipelineReport::default();
    for pass in default_passes() {
        let outcome = pass.apply(spec, config)?;
        log::info!("{} changed {} entries", pass.id(), outcome.changed);
        report.passes.push(outcome);
    }
    Ok(report)
}
