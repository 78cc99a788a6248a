//! Pipeline-node adapter.
//!
//! Document pipelines hand a node a JSON object and expect one back. This
//! module accepts `{"html": "..."}` and answers `{"markdown": "..."}`.

use serde::{Deserialize, Serialize};

use crate::service::TableConverter;
use crate::Result;

/// Input object. A missing or `null` `html` is treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PipelineInput {
    #[serde(default)]
    pub html: Option<String>,
}

/// Output object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineOutput {
    pub markdown: String,
}

/// Convert the input's `html` field.
pub fn run(input: &PipelineInput, converter: &TableConverter) -> PipelineOutput {
    let html = input.html.as_deref().unwrap_or("");
    PipelineOutput {
        markdown: converter.convert(html),
    }
}

/// Parse a JSON input object, convert it, and serialize the output object.
pub fn run_json(json: &str, converter: &TableConverter) -> Result<String> {
    let input: PipelineInput = serde_json::from_str(json)?;
    Ok(serde_json::to_string(&run(&input, converter))?)
}
