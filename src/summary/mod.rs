//! Document summaries for uploaded PDFs.

pub mod openai;

use std::path::Path;

use chrono::Utc;

use crate::models::{DifficultyLevel, DocumentSummary, DocumentType};

pub use openai::{OpenAiSummarizer, SummaryError};

#[derive(Debug, Clone)]
pub enum Summarizer {
    /// Structured summary from the OpenAI chat-completions API.
    OpenAi(OpenAiSummarizer),
    /// No LLM configured; every upload gets the canned summary.
    Canned,
}

impl Summarizer {
    pub fn is_llm_backed(&self) -> bool {
        matches!(self, Self::OpenAi(_))
    }

    /// Never fails: any LLM error is logged and replaced by the canned summary.
    pub async fn summarize(&self, filename: &str, text: &str) -> DocumentSummary {
        match self {
            Self::OpenAi(summarizer) => match summarizer.summarize(text).await {
                Ok(summary) => summary,
                Err(error) => {
                    tracing::warn!("AI summary failed for {}: {}", filename, error);
                    canned_summary(filename)
                }
            },
            Self::Canned => canned_summary(filename),
        }
    }
}

pub fn canned_summary(filename: &str) -> DocumentSummary {
    let title = document_title(filename);

    DocumentSummary {
        abstract_text: format!(
            "This document, \"{}\", was uploaded for the live session. An AI-generated summary is not available, so this overview lists the general structure to expect.",
            title
        ),
        title,
        key_points: vec![
            "Introduction and background of the subject".to_string(),
            "Core concepts and methodology".to_string(),
            "Implementation details and examples".to_string(),
            "Results, conclusions and next steps".to_string(),
        ],
        main_topics: vec![
            "Overview".to_string(),
            "Methodology".to_string(),
            "Implementation".to_string(),
            "Conclusions".to_string(),
        ],
        difficulty_level: DifficultyLevel::Intermediate,
        estimated_read_time: "15 minutes".to_string(),
        document_type: DocumentType::Article,
        authors: vec!["Unknown".to_string()],
        publication_date: Utc::now().date_naive().to_string(),
    }
}

/// "machine_learning-intro.pdf" -> "machine learning intro"
fn document_title(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename);

    let title = stem
        .split(['_', '-'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if title.trim().is_empty() {
        "Uploaded Document".to_string()
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_comes_from_file_stem() {
        assert_eq!(
            document_title("machine_learning-intro.pdf"),
            "machine learning intro"
        );
        assert_eq!(document_title("report.pdf"), "report");
        assert_eq!(document_title("___.pdf"), "Uploaded Document");
    }

    #[test]
    fn canned_summary_mentions_the_file() {
        let summary = canned_summary("quarterly_report.pdf");
        assert_eq!(summary.title, "quarterly report");
        assert!(summary.abstract_text.contains("quarterly report"));
        assert_eq!(summary.key_points.len(), summary.main_topics.len());
    }

    #[tokio::test]
    async fn canned_summarizer_never_calls_out() {
        let summary = Summarizer::Canned.summarize("notes.pdf", "ignored").await;
        assert_eq!(summary.title, "notes");
        assert!(!Summarizer::Canned.is_llm_backed());
    }
}
