//! Where slides and document summaries come from.
//!
//! The gateway either serves its own in-process deck ([`StaticContent`]) or
//! proxies the external content backend ([`BackendContent`]). Both answer with
//! usable payloads only: backend failures are logged and replaced with
//! fallback content here, so route handlers never see them.

pub mod backend;
pub mod deck;
pub mod local;
pub mod samples;

pub use backend::{BackendContent, BackendError};
pub use local::StaticContent;

use crate::models::{ConversationMessage, DocumentSummary, GenerateSlidesResponse, SlideContent};

#[derive(Clone)]
pub enum ContentSource {
    Static(StaticContent),
    Backend(BackendContent),
}

impl ContentSource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Static(_) => "static",
            Self::Backend(_) => "backend",
        }
    }

    /// Full deck in slide order; empty when the backend is unreachable.
    pub async fn slides(&self) -> Vec<SlideContent> {
        match self {
            Self::Static(source) => source.slides(),
            Self::Backend(source) => source.slides().await,
        }
    }

    /// The slide with this number, or `None` if no such slide is known.
    pub async fn slide(&self, slide_number: i64) -> Option<SlideContent> {
        match self {
            Self::Static(source) => source.slide(slide_number),
            Self::Backend(source) => source.slide(slide_number).await,
        }
    }

    pub async fn document_summary(&self) -> DocumentSummary {
        match self {
            Self::Static(source) => source.document_summary(),
            Self::Backend(source) => source.document_summary().await,
        }
    }

    pub async fn generate_slides(
        &self,
        conversation: &[ConversationMessage],
    ) -> GenerateSlidesResponse {
        match self {
            Self::Static(source) => source.generate_slides(conversation),
            Self::Backend(source) => source.generate_slides(conversation).await,
        }
    }
}
