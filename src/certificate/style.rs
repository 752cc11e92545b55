//! Lookup tables from design choices to concrete rendering values, shared by
//! the HTML preview and the PDF layout.

use serde::Serialize;

use super::{BorderStyle, CertificateState, Orientation, DEFAULT_TITLE};
use crate::prompt::{Color, Font, Template};

pub const FALLBACK_RECIPIENT: &str = "Recipient Name";
pub const FALLBACK_DESCRIPTION: &str = "Has successfully completed the requirements";
pub const FALLBACK_SIGNATURE: &str = "Signature";

/// Swatch shown in the color picker.
pub fn swatch(color: Color) -> &'static str {
    match color {
        Color::Gold => "#f9d77e",
        Color::Blue => "#a8c7fa",
        Color::Green => "#a7e3a5",
        Color::Red => "#f9a8a8",
        Color::Purple => "#d8b4fe",
        Color::Teal => "#a5f3eb",
        Color::Black => "#2d3748",
        Color::Gray => "#cbd5e0",
    }
}

pub fn border_color(color: Color) -> &'static str {
    match color {
        Color::Gold => "#eab308",
        Color::Blue => "#3b82f6",
        Color::Green => "#22c55e",
        Color::Red => "#ef4444",
        Color::Purple => "#a855f7",
        Color::Teal => "#14b8a6",
        Color::Black => "#1e293b",
        Color::Gray => "#94a3b8",
    }
}

/// Start and end of the page background gradient.
pub fn background(color: Color) -> (&'static str, &'static str) {
    match color {
        Color::Gold => ("#fffbeb", "#fef3c7"),
        Color::Blue => ("#eff6ff", "#dbeafe"),
        Color::Green => ("#f0fdf4", "#dcfce7"),
        Color::Red => ("#fef2f2", "#fee2e2"),
        Color::Purple => ("#faf5ff", "#f3e8ff"),
        Color::Teal => ("#f0fdfa", "#ccfbf1"),
        Color::Black => ("#f3f4f6", "#e5e7eb"),
        Color::Gray => ("#f9fafb", "#f3f4f6"),
    }
}

/// Text color for the title and recipient.
pub fn accent(color: Color) -> &'static str {
    match color {
        Color::Gold => "#b45309",
        Color::Blue => "#1d4ed8",
        Color::Green => "#15803d",
        Color::Red => "#b91c1c",
        Color::Purple => "#7e22ce",
        Color::Teal => "#0f766e",
        Color::Black => "#1f2937",
        Color::Gray => "#374151",
    }
}

pub fn font_stack(font: Font) -> &'static str {
    match font {
        Font::Serif => "Georgia, Cambria, 'Times New Roman', serif",
        Font::SansSerif => "ui-sans-serif, system-ui, Helvetica, Arial, sans-serif",
        Font::Cursive => "cursive",
        Font::Monospace => "ui-monospace, Menlo, Consolas, monospace",
    }
}

pub fn border_keyword(style: BorderStyle) -> &'static str {
    match style {
        BorderStyle::Solid => "solid",
        BorderStyle::Double => "double",
        BorderStyle::Dashed => "dashed",
        BorderStyle::Dotted => "dotted",
        BorderStyle::None => "none",
    }
}

/// Width over height of the rendered page.
pub fn aspect_ratio(orientation: Orientation) -> f32 {
    match orientation {
        Orientation::Landscape => 1.4,
        Orientation::Portrait => 0.7,
    }
}

/// A4 page size in millimetres, width first.
pub fn page_size_mm(orientation: Orientation) -> (u16, u16) {
    match orientation {
        Orientation::Landscape => (297, 210),
        Orientation::Portrait => (210, 297),
    }
}

/// Parses `#rrggbb`.
pub fn rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Everything a template needs to draw one certificate.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedCertificate {
    pub title: String,
    pub recipient: String,
    pub description: String,
    pub date: String,
    pub signature: String,
    pub issuer: Option<String>,
    pub template: Template,
    pub accent: &'static str,
    pub border_color: &'static str,
    pub background_from: &'static str,
    pub background_to: &'static str,
    pub font_stack: &'static str,
    pub border_style: &'static str,
    pub border_width: u8,
    /// Width of the elegant template's top and bottom rules.
    pub rule_width: f32,
    /// Width of the vintage template's inner double frame.
    pub frame_width: f32,
    pub aspect_ratio: f32,
}

impl RenderedCertificate {
    pub fn new(state: &CertificateState) -> Self {
        let (background_from, background_to) = background(state.color);
        let issuer = state.issuer_name.trim();
        let half_border = f32::from(state.border_width) / 2.0;

        Self {
            title: or_fallback(&state.title, DEFAULT_TITLE).to_string(),
            recipient: or_fallback(&state.recipient_name, FALLBACK_RECIPIENT).to_string(),
            description: or_fallback(&state.description, FALLBACK_DESCRIPTION).to_string(),
            date: state.date.clone(),
            signature: or_fallback(&state.signature, FALLBACK_SIGNATURE).to_string(),
            issuer: (!issuer.is_empty()).then(|| issuer.to_string()),
            template: state.template,
            accent: accent(state.color),
            border_color: border_color(state.color),
            background_from,
            background_to,
            font_stack: font_stack(state.font),
            border_style: border_keyword(state.border_style),
            border_width: state.border_width,
            rule_width: half_border.max(1.0),
            frame_width: half_border.max(3.0),
            aspect_ratio: aspect_ratio(state.orientation),
        }
    }
}
