//! Packaging a certificate for download.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::info;

use crate::certificate::style::RenderedCertificate;
use crate::certificate::CertificateState;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No suitable fonts found. Install: apt install fonts-liberation")]
    FontsUnavailable,

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] genpdf::error::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Export task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "html" => Ok(ExportFormat::Html),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct ExportedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub fn download_filename(state: &CertificateState, format: ExportFormat) -> String {
    format!("{}.{}", state.download_stem(), format.extension())
}

/// Standalone page holding only the certificate.
pub fn render_html(state: &CertificateState) -> Result<String, ExportError> {
    let mut ctx = tera::Context::new();
    ctx.insert("cert", &RenderedCertificate::new(state));
    Ok(crate::templates::get_tera().render("certificate_page.html", &ctx)?)
}

pub fn export_certificate(
    state: &CertificateState,
    format: ExportFormat,
    font_dirs: &[PathBuf],
) -> Result<ExportedFile, ExportError> {
    let bytes = match format {
        ExportFormat::Pdf => crate::pdf::render_certificate(state, font_dirs)?,
        ExportFormat::Html => render_html(state)?.into_bytes(),
    };

    let filename = download_filename(state, format);
    let content_type = mime_guess::from_path(&filename)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string();

    info!("Exported {} ({}, {} bytes)", filename, content_type, bytes.len());

    Ok(ExportedFile {
        filename,
        content_type,
        bytes,
    })
}
