use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tera::Context;
use tracing::{error, info};

use crate::certificate::style::{self, RenderedCertificate};
use crate::certificate::{BorderStyle, CertificateState, Orientation, MAX_BORDER_WIDTH};
use crate::prompt::{process_prompt, Color, Font, Template};
use crate::state::AppState;

pub async fn index(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    render_template("index.html", &Context::new())
}

#[derive(Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    prompt: String,
}

pub async fn generate(
    State(_state): State<Arc<AppState>>,
    Form(form): Form<GenerateForm>,
) -> impl IntoResponse {
    let prompt = form.prompt.trim();
    if prompt.is_empty() {
        return Redirect::to("/").into_response();
    }

    let processed = process_prompt(prompt);
    info!(
        "Generated certificate from prompt: {} content field(s), preferences {:?}",
        [
            &processed.fields.recipient_name,
            &processed.fields.title,
            &processed.fields.description,
            &processed.fields.issuer_name,
            &processed.fields.date,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count(),
        processed.preferences
    );

    let certificate = CertificateState::from_prompt(prompt, &processed);
    render_preview(&certificate).into_response()
}

/// Customize form: the full certificate state comes back from the page.
pub async fn update(
    State(_state): State<Arc<AppState>>,
    Form(certificate): Form<CertificateState>,
) -> impl IntoResponse {
    render_preview(&certificate)
}

fn render_preview(certificate: &CertificateState) -> Html<String> {
    let mut ctx = Context::new();
    ctx.insert("state", certificate);
    ctx.insert("cert", &RenderedCertificate::new(certificate));
    ctx.insert("choices", &design_choices());
    render_template("preview.html", &ctx)
}

fn design_choices() -> serde_json::Value {
    let templates = [
        (Template::Elegant, "Elegant"),
        (Template::Modern, "Modern"),
        (Template::Classic, "Classic"),
        (Template::Vintage, "Vintage"),
        (Template::Corporate, "Corporate"),
        (Template::Academic, "Academic"),
    ];
    let colors = [
        Color::Gold,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Purple,
        Color::Teal,
        Color::Black,
        Color::Gray,
    ];
    let fonts = [
        (Font::Serif, "Serif"),
        (Font::SansSerif, "Sans-serif"),
        (Font::Cursive, "Cursive"),
        (Font::Monospace, "Monospace"),
    ];
    let border_styles = [
        (BorderStyle::Solid, "Solid"),
        (BorderStyle::Double, "Double"),
        (BorderStyle::Dashed, "Dashed"),
        (BorderStyle::Dotted, "Dotted"),
        (BorderStyle::None, "None"),
    ];
    let orientations = [
        (Orientation::Landscape, "Landscape"),
        (Orientation::Portrait, "Portrait"),
    ];

    serde_json::json!({
        "templates": templates
            .iter()
            .map(|(value, label)| serde_json::json!({ "value": value, "label": label }))
            .collect::<Vec<_>>(),
        "colors": colors
            .iter()
            .map(|c| serde_json::json!({
                "value": c,
                "swatch": style::swatch(*c),
                "border": style::border_color(*c),
            }))
            .collect::<Vec<_>>(),
        "fonts": fonts
            .iter()
            .map(|(value, label)| serde_json::json!({ "value": value, "label": label }))
            .collect::<Vec<_>>(),
        "border_styles": border_styles
            .iter()
            .map(|(value, label)| serde_json::json!({ "value": value, "label": label }))
            .collect::<Vec<_>>(),
        "orientations": orientations
            .iter()
            .map(|(value, label)| serde_json::json!({ "value": value, "label": label }))
            .collect::<Vec<_>>(),
        "max_border_width": MAX_BORDER_WIDTH,
    })
}

fn render_template(name: &str, ctx: &Context) -> Html<String> {
    let tera = crate::templates::get_tera();
    let rendered = tera.render(name, ctx).unwrap_or_else(|e| {
        error!("Failed to render {}: {}", name, e);
        format!("Template error: {}", name)
    });
    Html(rendered)
}
