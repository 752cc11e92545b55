use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, warn};

use crate::certificate::CertificateState;
use crate::export::{export_certificate, ExportError, ExportFormat};
use crate::prompt::{process_prompt, ProcessedPrompt};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    prompt: String,
}

pub async fn extract(Json(request): Json<ExtractRequest>) -> Json<ProcessedPrompt> {
    Json(process_prompt(&request.prompt))
}

fn content_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    format!("attachment; filename=\"{}\"", safe)
}

pub async fn download(
    State(state): State<Arc<AppState>>,
    Path(format): Path<String>,
    Form(certificate): Form<CertificateState>,
) -> impl IntoResponse {
    let format: ExportFormat = match format.parse() {
        Ok(f) => f,
        Err(e) => {
            warn!("Rejected download: {}", e);
            return Redirect::to("/").into_response();
        }
    };

    let font_dirs = state.font_dirs.clone();
    let exported = tokio::task::spawn_blocking(move || {
        export_certificate(&certificate, format, &font_dirs)
    })
    .await
    .map_err(ExportError::from)
    .and_then(|result| result);

    match exported {
        Ok(file) => (
            [
                (header::CONTENT_TYPE, file.content_type),
                (header::CONTENT_DISPOSITION, content_disposition(&file.filename)),
            ],
            file.bytes,
        )
            .into_response(),
        Err(e) => {
            error!("Certificate export failed: {}", e);
            Redirect::to("/").into_response()
        }
    }
}
