//! Template preprocessing applied to MMML text before parsing
//!
//! Comments and variable substitution are resolved here; the parser
//! itself never sees a comment marker or a placeholder.

use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};

use crate::error::MmmlError;

const TEMPLATE_NAME: &str = "expression";

/// Render MMML source text: strip comment lines, then substitute `{name}`
/// placeholders from the context.
pub fn render<C: Serialize>(text: &str, context: &C) -> Result<String, MmmlError> {
    let stripped = strip_comments(text);

    // Texts without a placeholder skip the template engine entirely, so
    // plain MMML never trips over brace escaping rules.
    if !stripped.contains('{') {
        return Ok(stripped);
    }

    let mut templates = TinyTemplate::new();
    templates.set_default_formatter(&format_unescaped);
    templates
        .add_template(TEMPLATE_NAME, &stripped)
        .map_err(|error| MmmlError::InvalidTemplate(error.to_string()))?;
    templates
        .render(TEMPLATE_NAME, context)
        .map_err(|error| MmmlError::InvalidTemplate(error.to_string()))
}

/// Comment lines (first non-blank character `#`) become empty lines, so
/// line positions stay stable for diagnostics.
fn strip_comments(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line
                .trim_start()
                .starts_with('#')
            {
                ""
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
