//! PDF upload validation and analysis.

pub mod analysis;

pub use analysis::{AnalysisInput, analyze};

pub const PDF_MIME: &str = "application/pdf";
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Request body cap for the upload route. Kept above [`MAX_UPLOAD_BYTES`] so
/// oversized files reach the size check and get its error message.
pub const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 2 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadRejection {
    MissingFile,
    NotPdf,
    TooLarge,
}

impl UploadRejection {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingFile => "No file provided",
            Self::NotPdf => "Only PDF files are allowed",
            Self::TooLarge => "File size must be less than 10MB",
        }
    }
}

/// Checks the declared MIME type and the size of an uploaded file.
pub fn validate_upload(content_type: Option<&str>, size: usize) -> Result<(), UploadRejection> {
    let is_pdf = content_type
        .and_then(|value| value.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case(PDF_MIME))
        .unwrap_or(false);

    if !is_pdf {
        return Err(UploadRejection::NotPdf);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge);
    }
    Ok(())
}
