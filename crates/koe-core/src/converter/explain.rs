use serde::Serialize;

use crate::token::Token;
use crate::tokenizer::Tokenizer;

use super::{ConvertError, Converter};

/// Full diagnostic result for a single input.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub stages: Vec<ExplainStage>,
    pub output: String,
}

/// Token list as it stood after one pipeline stage.
#[derive(Debug, Serialize)]
pub struct ExplainStage {
    pub name: &'static str,
    pub tokens: Vec<Token>,
}

impl ExplainResult {
    pub fn stage(&self, name: &str) -> Option<&ExplainStage> {
        self.stages.iter().find(|s| s.name == name)
    }
}

/// Run the conversion pipeline and capture the token list after every stage.
pub fn explain<T: Tokenizer>(
    converter: &Converter<T>,
    text: &str,
) -> Result<ExplainResult, ConvertError> {
    let mut stages = Vec::new();
    let output = converter.convert_observed(text, |name, tokens| {
        stages.push(ExplainStage {
            name,
            tokens: tokens.to_vec(),
        });
    })?;
    Ok(ExplainResult {
        input: text.to_string(),
        stages,
        output,
    })
}

pub fn format_text(result: &ExplainResult) -> String {
    use unicode_width::UnicodeWidthStr;
    let mut out = String::new();

    out.push_str(&format!(
        "=== Input \"{}\" ({} chars) ===\n",
        result.input,
        result.input.chars().count(),
    ));

    for stage in &result.stages {
        out.push_str(&format!(
            "\n--- {} ({} tokens) ---\n",
            stage.name,
            stage.tokens.len()
        ));
        let surface_width = stage
            .tokens
            .iter()
            .map(|t| t.surface.width())
            .max()
            .unwrap_or(0);
        for t in &stage.tokens {
            // Pad by display width so full-width surfaces line up.
            let pad = " ".repeat(surface_width - t.surface.width());
            let pronunciation = if t.is_annotated() {
                format!(" -> {}", t.pronunciation)
            } else {
                String::new()
            };
            out.push_str(&format!(
                "  [{:>3},{:>3}) {}{}{}\n",
                t.start, t.end, t.surface, pad, pronunciation,
            ));
        }
    }

    out.push_str(&format!("\n=== Output ===\n{}\n", result.output));
    out
}
