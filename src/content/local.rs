use std::sync::Arc;

use crate::models::{ConversationMessage, DocumentSummary, GenerateSlidesResponse, SlideContent};
use crate::store::{SlideRepository, SummaryRepository};

use super::{deck, samples};

#[derive(Clone)]
pub struct StaticContent {
    slides: Arc<dyn SlideRepository>,
    summaries: Arc<dyn SummaryRepository>,
}

impl StaticContent {
    pub fn new(slides: Arc<dyn SlideRepository>, summaries: Arc<dyn SummaryRepository>) -> Self {
        Self { slides, summaries }
    }

    pub fn slides(&self) -> Vec<SlideContent> {
        self.slides.all()
    }

    pub fn slide(&self, slide_number: i64) -> Option<SlideContent> {
        self.slides.get(slide_number)
    }

    pub fn document_summary(&self) -> DocumentSummary {
        self.summaries
            .current()
            .unwrap_or_else(samples::document_summary)
    }

    pub fn generate_slides(&self, conversation: &[ConversationMessage]) -> GenerateSlidesResponse {
        let summary = self.document_summary();
        let slides = deck::build_deck(&summary, conversation);
        self.slides.replace(slides.clone());

        tracing::info!(
            slide_count = slides.len(),
            "Regenerated slide deck for \"{}\"",
            summary.title
        );

        GenerateSlidesResponse {
            success: true,
            message: format!("Generated {} slides", slides.len()),
            slides,
        }
    }
}
