use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Content guessed from a prompt. `None` means no rule matched, and callers
/// must keep whatever value they already have.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ContentFields {
    pub fn is_empty(&self) -> bool {
        self.recipient_name.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.issuer_name.is_none()
            && self.date.is_none()
    }
}

// A trailing letter run ends at the first non-letter, the end of input,
// or the connective that introduces the next field: "for" before the
// recipient, "on"/"in" before a date or place.
const TITLE_STOP: &str = r"(?:\s+for\b|\s*[^A-Za-z\s]|\s*$)";
const ISSUER_STOP: &str = r"(?:\s+(?:on|in)\b|\s*[^A-Za-z\s]|\s*$)";

const WORDED_DATE: &str = r"([A-Za-z]+\s+[0-9]{1,2}(?:st|nd|rd|th)?,?\s+[0-9]{4})";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("prompt rule must be a valid regex")
}

static RECIPIENT: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)for\s+([A-Za-z\s]+?)(?:,|\s+(?:on|in|from|at|by|to)\b|\s*$)")
});

static TITLE_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(&format!(r"(?i)certificate\s+of\s+([A-Za-z\s]+?){TITLE_STOP}")),
        compile(r"(?i)([A-Za-z\s]+)\s+certificate"),
        compile(r"(?i)([A-Za-z\s]+)\s+award"),
        compile(&format!(r"(?i)diploma\s+(?:of|in|for)\s+([A-Za-z\s]+?){TITLE_STOP}")),
    ]
});

static DESCRIPTION_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(r"(?i)for\s+(completing|achieving|participating\s+in|winning)\s+([^,.]+)"),
        compile(r"(?i)in\s+recognition\s+of\s+([^,.]+)"),
        compile(r"(?i)to\s+recognize\s+([^,.]+)"),
        compile(r"(?i)has\s+(successfully|excellently)\s+([^,.]+)"),
    ]
});

static ISSUER_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(&format!(r"(?i)issued\s+by\s+([A-Za-z\s]+?){ISSUER_STOP}")),
        compile(&format!(r"(?i)from\s+([A-Za-z\s]+?){ISSUER_STOP}")),
        compile(r"(?i)by\s+([A-Za-z\s]+?)(?:,|\s+on\b|\s+in\b|\s*$)"),
        compile(&format!(r"(?i)presented\s+by\s+([A-Za-z\s]+?){ISSUER_STOP}")),
    ]
});

static DATE_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        compile(&format!(r"(?i)on\s+{WORDED_DATE}")),
        compile(&format!(r"(?i)dated\s+{WORDED_DATE}")),
        compile(r"([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4})"),
    ]
});

/// Trimmed first capture group of the first rule that yields a non-blank one.
fn first_capture(rules: &[Regex], prompt: &str) -> Option<String> {
    rules.iter().find_map(|rule| {
        rule.captures(prompt)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    })
}

/// Pull recipient, title, description, issuer and date out of a free-text
/// prompt. Each field is matched independently against the whole prompt.
pub fn extract_fields(prompt: &str) -> ContentFields {
    let recipient_name = first_capture(std::slice::from_ref(&*RECIPIENT), prompt);

    let title = first_capture(&TITLE_RULES, prompt).map(|x| format!("Certificate of {}", x));

    // The lead-in phrase is part of the description.
    let description = DESCRIPTION_RULES
        .iter()
        .find_map(|rule| rule.find(prompt))
        .map(|m| m.as_str().trim().to_string())
        .filter(|text| !text.is_empty());

    let issuer_name = first_capture(&ISSUER_RULES, prompt);
    let date = first_capture(&DATE_RULES, prompt);

    ContentFields {
        recipient_name,
        title,
        description,
        issuer_name,
        date,
    }
}
