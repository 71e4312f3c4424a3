use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// "Research Paper", "research-paper" and "RESEARCH_PAPER" all read as
/// `research_paper`.
fn normalize_variant(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|ch| match ch {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_variant(raw).as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!("unknown difficulty level `{}`", raw)),
        }
    }
}

impl TryFrom<String> for DifficultyLevel {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum DocumentType {
    ResearchPaper,
    Tutorial,
    BookChapter,
    Article,
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_variant(raw).as_str() {
            "research_paper" => Ok(Self::ResearchPaper),
            "tutorial" => Ok(Self::Tutorial),
            "book_chapter" => Ok(Self::BookChapter),
            "article" => Ok(Self::Article),
            _ => Err(format!("unknown document type `{}`", raw)),
        }
    }
}

impl TryFrom<String> for DocumentType {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub main_topics: Vec<String>,
    pub difficulty_level: DifficultyLevel,
    pub estimated_read_time: String,
    pub document_type: DocumentType,
    #[serde(default)]
    pub authors: Vec<String>,
    pub publication_date: String,
}
