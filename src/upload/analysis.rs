use std::sync::LazyLock;
use std::time::Instant;

use regex::bytes::Regex;
use tokio::task;

use crate::models::{DocumentSummary, ExtractedSection, UploadResult};
use crate::summary::Summarizer;

pub const EXTRACTED_TEXT_LIMIT: usize = 2000;
const WORDS_PER_MINUTE: usize = 200;

static PAGE_OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)/Type\s*/Page\b").expect("page object pattern is valid")
});

#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Extracts text, summarizes it and derives the upload metrics. The upload
/// itself is dropped afterwards; nothing is written to disk.
pub async fn analyze(input: AnalysisInput, summarizer: &Summarizer) -> UploadResult {
    let started = Instant::now();
    let AnalysisInput { filename, bytes } = input;

    let size = bytes.len();
    let pages = count_pages(&bytes).max(1);
    let text = extract_text(bytes).await;
    let summary = summarizer.summarize(&filename, &text).await;

    let words = text.split_whitespace().count();
    let reading_minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    let elapsed = started.elapsed();

    tracing::info!(
        pages,
        words,
        topics = summary.main_topics.len(),
        "PDF upload processed: {} ({})",
        filename,
        format_file_size(size)
    );

    UploadResult {
        success: true,
        message: format!("Successfully processed \"{}\"", filename),
        file_size: format_file_size(size),
        pages,
        reading_time: format!("{} minutes", reading_minutes),
        topics: summary.main_topics.len(),
        processing_time: format!("{:.2} seconds", elapsed.as_secs_f64()),
        key_topics: summary.main_topics.clone(),
        extracted_sections: sections_for(&summary, pages),
        generated_slides: summary.main_topics.len() + 1,
        detected_language: "English".to_string(),
        complexity: summary.difficulty_level.label().to_string(),
        extracted_text: truncate_chars(&text, EXTRACTED_TEXT_LIMIT),
        summary,
        filename,
    }
}

/// Text from the PDF, or a lossy preview of the raw bytes when the parser
/// rejects (or panics on) the file.
async fn extract_text(bytes: Vec<u8>) -> String {
    let preview = raw_preview(&bytes);

    match task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await {
        Ok(Ok(text)) if !text.trim().is_empty() => text,
        Ok(Ok(_)) => preview,
        Ok(Err(error)) => {
            tracing::warn!("Failed to parse PDF, using raw preview: {}", error);
            preview
        }
        Err(error) => {
            tracing::warn!("PDF parser aborted, using raw preview: {}", error);
            preview
        }
    }
}

fn raw_preview(bytes: &[u8]) -> String {
    let head = &bytes[..bytes.len().min(EXTRACTED_TEXT_LIMIT)];
    String::from_utf8_lossy(head)
        .chars()
        .filter(|ch| !ch.is_control() || ch.is_whitespace())
        .collect()
}

/// Number of `/Type /Page` objects; `/Pages` tree nodes don't count.
pub fn count_pages(bytes: &[u8]) -> usize {
    PAGE_OBJECT.find_iter(bytes).count()
}

pub fn format_file_size(size: usize) -> String {
    format!("{:.2} MB", size as f64 / 1024.0 / 1024.0)
}

/// Spreads the summary's main topics over the page range in order.
fn sections_for(summary: &DocumentSummary, pages: usize) -> Vec<ExtractedSection> {
    let count = summary.main_topics.len();
    summary
        .main_topics
        .iter()
        .enumerate()
        .map(|(idx, topic)| {
            let start = idx * pages / count + 1;
            let end = ((idx + 1) * pages / count).max(start);
            let pages = if start == end {
                start.to_string()
            } else {
                format!("{}-{}", start, end)
            };
            ExtractedSection {
                title: topic.clone(),
                pages,
            }
        })
        .collect()
}

fn truncate_chars(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::samples;

    #[test]
    fn counts_page_objects_but_not_page_trees() {
        let pdf = b"%PDF-1.4\n1 0 obj << /Type /Pages /Count 2 >> endobj\n\
            2 0 obj << /Type /Page /Parent 1 0 R >> endobj\n\
            3 0 obj <</Type/Page/Parent 1 0 R>> endobj\n%%EOF";
        assert_eq!(count_pages(pdf), 2);
        assert_eq!(count_pages(b"not a pdf"), 0);
    }

    #[test]
    fn file_size_has_two_decimals() {
        assert_eq!(format_file_size(0), "0.00 MB");
        assert_eq!(format_file_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_file_size(1_572_864), "1.50 MB");
    }

    #[test]
    fn sections_cover_every_page_in_order() {
        let summary = samples::document_summary();
        let sections = sections_for(&summary, 30);

        assert_eq!(sections.len(), summary.main_topics.len());
        assert_eq!(sections[0].pages, "1-5");
        assert_eq!(sections.last().map(|s| s.pages.as_str()), Some("26-30"));
    }

    #[test]
    fn sections_share_pages_in_short_documents() {
        let sections = sections_for(&samples::document_summary(), 1);
        assert!(sections.iter().all(|section| section.pages == "1"));
    }

    #[test]
    fn raw_preview_drops_binary_noise() {
        let preview = raw_preview(b"%PDF-1.4\n\x00\x01hello");
        assert_eq!(preview, "%PDF-1.4\nhello");
    }

    #[tokio::test]
    async fn unparseable_pdf_still_produces_a_result() {
        let input = AnalysisInput {
            filename: "intro_to_rust.pdf".to_string(),
            bytes: b"%PDF-1.4\n2 0 obj << /Type /Page >> endobj\nsome words here\n%%EOF".to_vec(),
        };

        let result = analyze(input, &Summarizer::Canned).await;

        assert!(result.success);
        assert_eq!(result.filename, "intro_to_rust.pdf");
        assert_eq!(result.pages, 1);
        assert_eq!(result.reading_time, "1 minutes");
        assert_eq!(result.summary.title, "intro to rust");
        assert_eq!(result.topics, result.key_topics.len());
        assert!(result.extracted_text.contains("some words here"));
        assert!(result.extracted_text.chars().count() <= EXTRACTED_TEXT_LIMIT);
    }
}
