use std::time::Duration;

use crate::client::ApiClient;
use crate::models::UploadResult;
use crate::upload::PDF_MIME;

const TICK: Duration = Duration::from_millis(200);
const PROGRESS_STEP: u8 = 10;
const PROGRESS_CEILING: u8 = 90;

#[derive(Debug, Default)]
pub struct UploadWidget {
    progress: u8,
    uploading: bool,
    result: Option<UploadResult>,
    error: Option<String>,
}

impl UploadWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn result(&self) -> Option<&UploadResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Simulated progress while the request is in flight; never passes 90
    /// until the server has answered.
    pub fn tick(&mut self) {
        if self.progress < PROGRESS_CEILING {
            self.progress = (self.progress + PROGRESS_STEP).min(PROGRESS_CEILING);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Uploads a file, advancing the progress bar every 200 ms until the
    /// gateway answers. Non-PDF files are refused without a request.
    pub async fn upload(
        &mut self,
        client: &ApiClient,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Option<&UploadResult> {
        if !content_type.eq_ignore_ascii_case(PDF_MIME) {
            self.error = Some("Please select a PDF file".to_string());
            return None;
        }

        self.uploading = true;
        self.progress = 0;
        self.error = None;
        self.result = None;

        let request = client.upload_pdf(filename, content_type, bytes);
        tokio::pin!(request);
        let mut ticker = tokio::time::interval(TICK);
        // The first tick fires immediately.
        ticker.tick().await;

        let outcome = loop {
            tokio::select! {
                biased;
                outcome = &mut request => break outcome,
                _ = ticker.tick() => self.tick(),
            }
        };
        self.uploading = false;

        match outcome {
            Ok(result) => {
                self.progress = 100;
                self.result = Some(result);
            }
            Err(error) => {
                tracing::warn!("Upload of {} failed: {}", filename, error);
                self.progress = 0;
                self.error = Some(
                    error
                        .api_message()
                        .unwrap_or_else(|| "Upload failed. Please try again.".to_string()),
                );
            }
        }
        self.result.as_ref()
    }
}
