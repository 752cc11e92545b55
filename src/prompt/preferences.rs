use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Green,
    Red,
    Purple,
    Gold,
    Black,
    Teal,
    /// Offered by the customize form; never inferred from a prompt.
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Elegant,
    Modern,
    Classic,
    Vintage,
    Corporate,
    Academic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Font {
    Serif,
    SansSerif,
    Cursive,
    Monospace,
}

/// Design choices inferred from a prompt, one per category at most.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Template>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

// Order is significant: the first listed entry that matches wins.
const COLOR_WORDS: &[(Color, &[&str])] = &[
    (Color::Blue, &["blue", "azure", "navy", "cyan"]),
    (Color::Green, &["green", "emerald", "mint", "olive"]),
    (Color::Red, &["red", "crimson", "maroon", "ruby"]),
    (Color::Purple, &["purple", "violet", "lavender", "plum"]),
    (Color::Gold, &["gold", "yellow", "amber", "bronze"]),
    (Color::Black, &["black", "dark", "obsidian"]),
    (Color::Teal, &["teal", "turquoise", "aqua"]),
];

const TEMPLATE_WORDS: &[(Template, &[&str])] = &[
    (Template::Elegant, &["elegant", "luxury", "premium", "fancy"]),
    (Template::Modern, &["modern", "sleek", "clean", "minimal"]),
    (Template::Classic, &["classic", "traditional", "formal", "standard"]),
    (Template::Vintage, &["vintage", "retro", "old", "antique"]),
    (Template::Corporate, &["corporate", "business", "professional"]),
    (Template::Academic, &["academic", "education", "diploma", "school"]),
];

const FONT_WORDS: &[(Font, &[&str])] = &[
    (Font::Serif, &["serif", "traditional font", "classic font"]),
    (Font::SansSerif, &["sans", "sans-serif", "modern font", "clean font"]),
    (Font::Cursive, &["cursive", "script", "handwriting", "calligraphy"]),
    (Font::Monospace, &["monospace", "typewriter", "code"]),
];

struct LexicalRule<T> {
    pattern: Regex,
    value: T,
}

fn compile_rules<T: Copy>(table: &[(T, &[&str])]) -> Vec<LexicalRule<T>> {
    table
        .iter()
        .map(|(value, words)| {
            let alternation = words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            // ASCII word boundaries: accented letters next to a cue do not
            // join it into a longer word.
            LexicalRule {
                pattern: Regex::new(&format!(r"(?i)(?-u:\b)(?:{})(?-u:\b)", alternation))
                    .expect("preference rule must be a valid regex"),
                value: *value,
            }
        })
        .collect()
}

static COLOR_RULES: Lazy<Vec<LexicalRule<Color>>> = Lazy::new(|| compile_rules(COLOR_WORDS));
static TEMPLATE_RULES: Lazy<Vec<LexicalRule<Template>>> =
    Lazy::new(|| compile_rules(TEMPLATE_WORDS));
static FONT_RULES: Lazy<Vec<LexicalRule<Font>>> = Lazy::new(|| compile_rules(FONT_WORDS));

fn first_match<T: Copy>(rules: &[LexicalRule<T>], prompt: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.pattern.is_match(prompt))
        .map(|rule| rule.value)
}

/// Infer color, template and font from whole-word cues in the prompt.
pub fn extract_preferences(prompt: &str) -> PreferenceFields {
    PreferenceFields {
        color: first_match(&COLOR_RULES, prompt),
        template: first_match(&TEMPLATE_RULES, prompt),
        font: first_match(&FONT_RULES, prompt),
    }
}
