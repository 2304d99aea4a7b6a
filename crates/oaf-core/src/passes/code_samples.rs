use minijinja::{Environment, context};
use serde_json::{Value, json};

use crate::catalog::LOCAL_SERVER_URL;
use crate::config::OafConfig;
use crate::error::PatchError;
use crate::operations::{HttpMethod, operations_mut};
use crate::{Pass, PassId, PassReport};

/// A language a request sample is rendered in.
#[derive(Debug, Clone, Copy)]
pub struct SampleLanguage {
    pub lang: &'static str,
    pub label: &'static str,
    template_name: &'static str,
    template: &'static str,
}

/// Sample languages, in the order they appear under `x-codeSamples`.
pub const SAMPLE_LANGUAGES: [SampleLanguage; 3] = [
    SampleLanguage {
        lang: "cURL",
        label: "cURL",
        template_name: "curl.sh.j2",
        template: include_str!("../../templates/curl.sh.j2"),
    },
    SampleLanguage {
        lang: "Python",
        label: "Python",
        template_name: "python.py.j2",
        template: include_str!("../../templates/python.py.j2"),
    },
    SampleLanguage {
        lang: "JavaScript",
        label: "JavaScript",
        template_name: "javascript.js.j2",
        template: include_str!("../../templates/javascript.js.j2"),
    },
];

/// Path parameters replaced with a concrete id in sample URLs.
const DISPLAY_PARAMS: [&str; 2] = ["{pk}", "{id_or_slug}"];

/// Renders `x-codeSamples` entries. Output depends only on method, path and
/// whether the operation takes a body.
pub struct CodeSampleRenderer {
    env: Environment<'static>,
}

impl CodeSampleRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        for language in &SAMPLE_LANGUAGES {
            env.add_template(language.template_name, language.template)?;
        }
        Ok(Self { env })
    }

    /// The `[{lang, label, source}]` list for one operation.
    pub fn render(
        &self,
        method: HttpMethod,
        path: &str,
        has_body: bool,
    ) -> Result<Value, minijinja::Error> {
        let ctx = context! {
            method => method.as_str(),
            method_key => method.as_key(),
            url => format!("{LOCAL_SERVER_URL}{}", display_path(path)),
            has_body => has_body,
        };

        let mut samples = Vec::with_capacity(SAMPLE_LANGUAGES.len());
        for language in &SAMPLE_LANGUAGES {
            let source = self.env.get_template(language.template_name)?.render(&ctx)?;
            samples.push(json!({
                "lang": language.lang,
                "label": language.label,
                "source": source.trim_end(),
            }));
        }
        Ok(Value::Array(samples))
    }
}

/// The path as shown in samples, with common id parameters filled in.
pub fn display_path(path: &str) -> String {
    DISPLAY_PARAMS
        .iter()
        .fold(path.to_string(), |acc, param| acc.replace(param, "1"))
}

/// Attaches request samples to operations without `x-codeSamples`.
pub struct CodeSamplesPass;

impl Pass for CodeSamplesPass {
    fn id(&self) -> PassId {
        PassId::CodeSamples
    }

    fn apply(&self, spec: &mut Value, _config: &OafConfig) -> Result<PassReport, PatchError> {
        let renderer = CodeSampleRenderer::new()?;
        let mut added = 0;
        for (path, method, op) in operations_mut(spec) {
            if op.contains_key("x-codeSamples") {
                continue;
            }
            let has_body = op.contains_key("requestBody");
            let samples = renderer.render(method, path, has_body)?;
            op.insert("x-codeSamples".to_string(), samples);
            added += 1;
        }
        Ok(PassReport::count(self.id(), added))
    }
}
