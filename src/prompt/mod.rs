//! Rule-based prompt extraction.
//!
//! Two independent extractors scan the same prompt: one for certificate
//! content, one for design preferences. Both are pure and hold no state
//! beyond their compiled rule tables, so they can be called from any thread.

mod fields;
mod preferences;

pub use fields::*;
pub use preferences::*;

use serde::Serialize;
use tracing::debug;

/// Both extraction results for one prompt, side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessedPrompt {
    pub fields: ContentFields,
    pub preferences: PreferenceFields,
}

pub fn process_prompt(prompt: &str) -> ProcessedPrompt {
    let fields = extract_fields(prompt);
    let preferences = extract_preferences(prompt);

    debug!(
        recipient = fields.recipient_name.is_some(),
        title = fields.title.is_some(),
        description = fields.description.is_some(),
        issuer = fields.issuer_name.is_some(),
        date = fields.date.is_some(),
        color = ?preferences.color,
        template = ?preferences.template,
        font = ?preferences.font,
        "Processed prompt ({} chars)",
        prompt.len()
    );

    ProcessedPrompt {
        fields,
        preferences,
    }
}
