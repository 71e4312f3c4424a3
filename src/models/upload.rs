use serde::{Deserialize, Serialize};

use super::document_summary::DocumentSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSection {
    pub title: String,
    pub pages: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub success: bool,
    pub message: String,
    pub filename: String,
    pub file_size: String,
    pub pages: usize,
    pub reading_time: String,
    pub topics: usize,
    pub processing_time: String,
    pub key_topics: Vec<String>,
    pub extracted_sections: Vec<ExtractedSection>,
    pub generated_slides: usize,
    pub detected_language: String,
    pub complexity: String,
    pub summary: DocumentSummary,
    pub extracted_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadStatus {
    pub message: String,
    pub max_file_size: String,
    pub supported_formats: Vec<String>,
    pub status: String,
}
