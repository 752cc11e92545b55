// Certificate PDF rendering
// Uses genpdf - requires Liberation or DejaVu fonts in the configured or standard paths
use genpdf::elements::{Break, LinearLayout, PaddedElement, Paragraph, TableLayout};
use genpdf::style::{Color as PdfColor, Style};
use genpdf::{render, Alignment, Context, Element, Margins, Mm, Position, RenderResult, Size};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::certificate::style::{self, RenderedCertificate};
use crate::certificate::{BorderStyle, CertificateState};
use crate::export::ExportError;
use crate::prompt::{Font, Template};

pub const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/TTF",
    "/System/Library/Fonts/Supplemental",
    "/Library/Fonts",
];

// Roughly one CSS pixel. genpdf strokes every line at a fixed width, so wider
// borders and bands are drawn as parallel lines this far apart.
const MM_PER_BORDER_UNIT: f64 = 0.26;

// Space between the innermost frame line and the body.
const FRAME_PADDING_MM: f64 = 1.5;

/// Offsets from the frame's outer edge, in mm, of each rectangle to stroke.
fn frame_insets(state: &CertificateState) -> Vec<f64> {
    let width = f64::from(state.border_width);
    match state.border_style {
        _ if state.border_width == 0 => Vec::new(),
        BorderStyle::None => Vec::new(),
        BorderStyle::Double => vec![0.0, (width * MM_PER_BORDER_UNIT).max(1.0)],
        // no dash patterns in genpdf; dashed and dotted draw solid
        BorderStyle::Solid | BorderStyle::Dashed | BorderStyle::Dotted => {
            (0..state.border_width)
                .map(|i| f64::from(i) * MM_PER_BORDER_UNIT)
                .collect()
        }
    }
}

/// Draws nested rectangles around the wrapped element.
struct CertificateFrame<E: Element> {
    element: E,
    insets: Vec<f64>,
    color: PdfColor,
}

impl<E: Element> Element for CertificateFrame<E> {
    fn render(
        &mut self,
        context: &Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, genpdf::error::Error> {
        let band = match self.insets.iter().copied().reduce(f64::max) {
            Some(outer) => outer + FRAME_PADDING_MM,
            None => return self.element.render(context, area, style),
        };

        let mut inner = area.clone();
        inner.add_margins(Margins::all(band));
        let mut result = self.element.render(context, inner, style)?;
        result.size = Size::new(
            area.size().width,
            result.size.height + Mm::from(2.0 * band),
        );

        let line = Style::new().with_color(self.color);
        let (width, height) = (result.size.width, result.size.height);
        for &inset in &self.insets {
            let inset = Mm::from(inset);
            area.draw_line(
                vec![
                    Position::new(inset, inset),
                    Position::new(width - inset, inset),
                    Position::new(width - inset, height - inset),
                    Position::new(inset, height - inset),
                    Position::new(inset, inset),
                ],
                line,
            );
        }
        Ok(result)
    }
}

/// Horizontal rules a template draws above and below the body.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RuleSpec {
    color: &'static str,
    lines: u8,
    gap_mm: f64,
    top: bool,
    bottom: bool,
}

fn template_rules(cert: &RenderedCertificate) -> Option<RuleSpec> {
    let (color, lines, gap_mm, top, bottom) = match cert.template {
        Template::Classic => return None,
        Template::Elegant => (
            cert.border_color,
            cert.rule_width.round().max(1.0) as u8,
            MM_PER_BORDER_UNIT,
            true,
            true,
        ),
        Template::Modern => (cert.accent, 8, MM_PER_BORDER_UNIT, true, true),
        Template::Vintage => (cert.border_color, 2, 1.0, true, true),
        Template::Corporate => (cert.accent, 12, MM_PER_BORDER_UNIT, true, false),
        Template::Academic => (cert.accent, 24, MM_PER_BORDER_UNIT, true, false),
    };
    Some(RuleSpec {
        color,
        lines,
        gap_mm,
        top,
        bottom,
    })
}

/// A full-width band of `lines` parallel strokes.
struct AccentRule {
    lines: u8,
    gap_mm: f64,
    color: PdfColor,
}

impl AccentRule {
    fn new(rule: &RuleSpec) -> Self {
        Self {
            lines: rule.lines,
            gap_mm: rule.gap_mm,
            color: pdf_color(rule.color),
        }
    }
}

impl Element for AccentRule {
    fn render(
        &mut self,
        _context: &Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, genpdf::error::Error> {
        let width = area.size().width;
        let line = Style::new().with_color(self.color);
        for i in 0..self.lines {
            let y = Mm::from(f64::from(i) * self.gap_mm);
            area.draw_line(vec![Position::new(0, y), Position::new(width, y)], line);
        }
        Ok(RenderResult {
            size: Size::new(width, f64::from(self.lines) * self.gap_mm + 1.0),
            has_more: false,
        })
    }
}

fn family_candidates(font: Font) -> &'static [&'static str] {
    match font {
        Font::Serif | Font::Cursive => &["LiberationSerif", "DejaVuSerif"],
        Font::SansSerif => &["LiberationSans", "DejaVuSans", "Arial"],
        Font::Monospace => &["LiberationMono", "DejaVuSansMono"],
    }
}

fn load_font_family(
    font: Font,
    font_dirs: &[PathBuf],
) -> Result<genpdf::fonts::FontFamily<genpdf::fonts::FontData>, ExportError> {
    // Preferred family first, then any sans family as a last resort.
    let names = family_candidates(font)
        .iter()
        .chain(family_candidates(Font::SansSerif));

    for name in names {
        for dir in font_dirs.iter().filter(|d| d.exists()) {
            if let Ok(family) = genpdf::fonts::from_files(dir, name, None) {
                debug!("Using font family {} from {}", name, dir.display());
                return Ok(family);
            }
        }
    }

    Err(ExportError::FontsUnavailable)
}

fn pdf_color(hex: &str) -> PdfColor {
    let (r, g, b) = style::rgb(hex).unwrap_or((0, 0, 0));
    PdfColor::Rgb(r, g, b)
}

fn centered(text: &str, style: Style) -> impl Element {
    Paragraph::new(text).aligned(Alignment::Center).styled(style)
}

fn layout_body(cert: &RenderedCertificate, base: Style) -> Result<LinearLayout, ExportError> {
    let accent = pdf_color(cert.accent);
    let mut body = LinearLayout::vertical();

    body.push(centered(
        &cert.title,
        base.bold().with_font_size(28).with_color(accent),
    ));
    body.push(Break::new(2.0));
    body.push(centered("This is to certify that", base.with_font_size(14)));
    body.push(Break::new(1.0));
    body.push(centered(
        &cert.recipient,
        base.bold().with_font_size(32).with_color(accent),
    ));
    body.push(Break::new(1.0));
    body.push(centered(&cert.description, base.with_font_size(14)));
    body.push(Break::new(3.0));

    let label = base.with_font_size(10);
    let value = base.bold().with_font_size(12);
    let mut footer = TableLayout::new(vec![1, 1]);
    footer
        .row()
        .element(centered("Date", label))
        .element(centered("Signature", label))
        .push()?;
    footer
        .row()
        .element(centered(&cert.date, value))
        .element(centered(&cert.signature, value))
        .push()?;
    body.push(footer);

    if let Some(ref issuer) = cert.issuer {
        body.push(Break::new(2.0));
        body.push(centered(
            &format!("Issued by {}", issuer),
            base.with_font_size(10).with_color(PdfColor::Rgb(75, 85, 99)),
        ));
    }

    Ok(body)
}

/// Lays the certificate out on a single A4 page and returns the PDF bytes.
pub fn render_certificate(
    state: &CertificateState,
    font_dirs: &[PathBuf],
) -> Result<Vec<u8>, ExportError> {
    let font_family = load_font_family(state.font, font_dirs)?;
    let cert = RenderedCertificate::new(state);

    let mut doc = genpdf::Document::new(font_family);
    doc.set_title(cert.title.as_str());

    let (width, height) = style::page_size_mm(state.orientation);
    doc.set_paper_size(genpdf::Size::new(f64::from(width), f64::from(height)));

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    let base = if state.font == Font::Cursive {
        Style::new().italic()
    } else {
        Style::new()
    };
    let rules = template_rules(&cert);
    let mut page = LinearLayout::vertical();
    if let Some(rule) = rules.filter(|r| r.top) {
        page.push(AccentRule::new(&rule));
    }
    page.push(PaddedElement::new(layout_body(&cert, base)?, 12));
    if let Some(rule) = rules.filter(|r| r.bottom) {
        page.push(AccentRule::new(&rule));
    }

    doc.push(CertificateFrame {
        element: page,
        insets: frame_insets(state),
        color: pdf_color(cert.border_color),
    });

    let mut bytes = Vec::new();
    doc.render(&mut bytes)?;
    info!("Rendered certificate PDF ({} bytes)", bytes.len());
    Ok(bytes)
}
