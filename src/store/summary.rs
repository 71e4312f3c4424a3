use std::sync::RwLock;

use crate::models::DocumentSummary;

pub trait SummaryRepository: Send + Sync {
    /// Summary of the most recent upload, if anything was uploaded.
    fn current(&self) -> Option<DocumentSummary>;

    fn set(&self, summary: DocumentSummary);
}

#[derive(Debug, Default)]
pub struct InMemorySummary {
    current: RwLock<Option<DocumentSummary>>,
}

impl SummaryRepository for InMemorySummary {
    fn current(&self) -> Option<DocumentSummary> {
        super::read(&self.current).clone()
    }

    fn set(&self, summary: DocumentSummary) {
        *super::write(&self.current) = Some(summary);
    }
}
