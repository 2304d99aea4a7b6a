pub mod code_samples;
pub mod metadata;
pub mod request_bodies;
pub mod responses;
pub mod schemas;
pub mod servers;
pub mod summaries;
pub mod tags;

use crate::Pass;

pub use code_samples::CodeSamplesPass;
pub use metadata::OperationMetadataPass;
pub use request_bodies::RequestBodyExamplesPass;
pub use responses::ResponseExamplesPass;
pub use schemas::MissingSchemasPass;
pub use servers::ServersPass;
pub use summaries::UniqueSummariesPass;
pub use tags::TagsPass;

/// Every pass, in the order the pipeline applies them.
pub fn default_passes() -> Vec<Box<dyn Pass>> {
    vec![
        Box::new(MissingSchemasPass),
        Box::new(OperationMetadataPass),
        Box::new(TagsPass),
        Box::new(ServersPass),
        Box::new(CodeSamplesPass),
        Box::new(ResponseExamplesPass),
        Box::new(RequestBodyExamplesPass),
        Box::new(UniqueSummariesPass),
    ]
}
