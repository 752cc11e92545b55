//! Certificate state owned by the page: content plus design options, seeded
//! with defaults and updated from prompt extraction or the customize form.

pub mod style;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::prompt::{Color, Font, ProcessedPrompt, Template};

pub const DEFAULT_TITLE: &str = "Certificate of Achievement";
pub const DEFAULT_DOWNLOAD_STEM: &str = "certificate";
pub const MAX_BORDER_WIDTH: u8 = 12;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Double,
    Dashed,
    Dotted,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateState {
    pub recipient_name: String,
    pub title: String,
    pub description: String,
    pub issuer_name: String,
    pub date: String,
    pub signature: String,
    pub prompt: String,
    pub template: Template,
    pub color: Color,
    pub font: Font,
    pub border_style: BorderStyle,
    #[serde(deserialize_with = "clamped_border_width")]
    pub border_width: u8,
    pub orientation: Orientation,
}

impl Default for CertificateState {
    fn default() -> Self {
        Self {
            recipient_name: String::new(),
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            issuer_name: String::new(),
            date: chrono::Local::now().format("%-m/%-d/%Y").to_string(),
            signature: String::new(),
            prompt: String::new(),
            template: Template::Elegant,
            color: Color::Gold,
            font: Font::Serif,
            border_style: BorderStyle::Double,
            border_width: 8,
            orientation: Orientation::Landscape,
        }
    }
}

fn clamped_border_width<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let width = u32::deserialize(deserializer)?;
    Ok(width.min(MAX_BORDER_WIDTH as u32) as u8)
}

fn overwrite(slot: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        slot.clone_from(v);
    }
}

impl CertificateState {
    pub fn from_prompt(prompt: &str, processed: &ProcessedPrompt) -> Self {
        let mut state = Self {
            prompt: prompt.to_string(),
            ..Self::default()
        };
        state.apply(processed);
        state
    }

    /// Overwrite only what the extractors found; everything else stays.
    pub fn apply(&mut self, processed: &ProcessedPrompt) {
        let fields = &processed.fields;
        overwrite(&mut self.recipient_name, &fields.recipient_name);
        overwrite(&mut self.title, &fields.title);
        overwrite(&mut self.description, &fields.description);
        overwrite(&mut self.issuer_name, &fields.issuer_name);
        overwrite(&mut self.date, &fields.date);

        let prefs = &processed.preferences;
        if let Some(color) = prefs.color {
            self.color = color;
        }
        if let Some(template) = prefs.template {
            self.template = template;
        }
        if let Some(font) = prefs.font {
            self.font = font;
        }
    }

    /// File name stem for downloads: the recipient with every whitespace run,
    /// leading and trailing ones included, turned into a hyphen. Only an empty
    /// recipient falls back to the default stem.
    pub fn download_stem(&self) -> String {
        let stem = WHITESPACE_RUN.replace_all(&self.recipient_name, "-");
        if stem.is_empty() {
            DEFAULT_DOWNLOAD_STEM.to_string()
        } else {
            stem.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{process_prompt, ContentFields, PreferenceFields};

    #[test]
    fn test_defaults() {
        let state = CertificateState::default();
        assert_eq!(state.title, DEFAULT_TITLE);
        assert_eq!(state.template, Template::Elegant);
        assert_eq!(state.color, Color::Gold);
        assert_eq!(state.font, Font::Serif);
        assert_eq!(state.border_style, BorderStyle::Double);
        assert_eq!(state.border_width, 8);
        assert_eq!(state.orientation, Orientation::Landscape);
        assert!(!state.date.is_empty());
    }

    #[test]
    fn test_apply_keeps_values_on_absence() {
        let mut state = CertificateState {
            recipient_name: "Old Name".to_string(),
            issuer_name: "Old Issuer".to_string(),
            signature: "Dr. Jane Smith".to_string(),
            ..CertificateState::default()
        };
        let processed = ProcessedPrompt {
            fields: ContentFields {
                recipient_name: Some("New Name".to_string()),
                ..ContentFields::default()
            },
            preferences: PreferenceFields {
                font: Some(Font::Monospace),
                ..PreferenceFields::default()
            },
        };

        state.apply(&processed);

        assert_eq!(state.recipient_name, "New Name");
        assert_eq!(state.issuer_name, "Old Issuer");
        assert_eq!(state.signature, "Dr. Jane Smith");
        assert_eq!(state.title, DEFAULT_TITLE);
        assert_eq!(state.font, Font::Monospace);
        assert_eq!(state.color, Color::Gold);
    }

    #[test]
    fn test_from_prompt() {
        let prompt = "A modern teal certificate of merit for Ana Lima";
        let state = CertificateState::from_prompt(prompt, &process_prompt(prompt));
        assert_eq!(state.prompt, prompt);
        assert_eq!(state.recipient_name, "Ana Lima");
        assert_eq!(state.title, "Certificate of merit");
        assert_eq!(state.template, Template::Modern);
        assert_eq!(state.color, Color::Teal);
        assert_eq!(state.border_style, BorderStyle::Double);
    }

    #[test]
    fn test_download_stem() {
        let mut state = CertificateState::default();
        assert_eq!(state.download_stem(), "certificate");

        state.recipient_name = "Jane  Q\tDoe".to_string();
        assert_eq!(state.download_stem(), "Jane-Q-Doe");
    }

    #[test]
    fn test_download_stem_keeps_edge_whitespace() {
        let mut state = CertificateState::default();

        state.recipient_name = "   ".to_string();
        assert_eq!(state.download_stem(), "-");

        state.recipient_name = " Jane Doe ".to_string();
        assert_eq!(state.download_stem(), "-Jane-Doe-");
    }

    #[test]
    fn test_border_width_clamped() {
        let state: CertificateState =
            serde_json::from_str(r#"{"border_width": 40, "font": "sans-serif"}"#).unwrap();
        assert_eq!(state.border_width, MAX_BORDER_WIDTH);
        assert_eq!(state.font, Font::SansSerif);
        assert_eq!(state.title, DEFAULT_TITLE);
    }
}
