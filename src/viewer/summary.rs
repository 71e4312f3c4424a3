use crate::client::{ApiClient, ClientError};
use crate::models::DocumentSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySection {
    KeyPoints,
    MainTopics,
}

/// Document summary card. At most one section is expanded at a time.
#[derive(Debug, Default)]
pub struct SummaryPanel {
    summary: Option<DocumentSummary>,
    expanded: Option<SummarySection>,
    error: Option<String>,
}

impl SummaryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> Option<&DocumentSummary> {
        self.summary.as_ref()
    }

    pub fn set_summary(&mut self, summary: DocumentSummary) {
        self.summary = Some(summary);
        self.expanded = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn load(&mut self, client: &ApiClient) -> Result<(), ClientError> {
        match client.get_document_summary().await {
            Ok(summary) => {
                self.set_summary(summary);
                self.error = None;
                Ok(())
            }
            Err(error) => {
                tracing::warn!("Error loading document summary: {}", error);
                self.error = Some("Failed to load document summary".to_string());
                Err(error)
            }
        }
    }

    pub fn expanded(&self) -> Option<SummarySection> {
        self.expanded
    }

    pub fn is_expanded(&self, section: SummarySection) -> bool {
        self.expanded == Some(section)
    }

    /// Opens `section`, closing whichever was open; toggling the open one
    /// collapses it.
    pub fn toggle(&mut self, section: SummarySection) {
        self.expanded = if self.is_expanded(section) {
            None
        } else {
            Some(section)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::samples;

    #[test]
    fn only_one_section_is_open() {
        let mut panel = SummaryPanel::new();
        panel.set_summary(samples::document_summary());

        panel.toggle(SummarySection::KeyPoints);
        assert!(panel.is_expanded(SummarySection::KeyPoints));

        panel.toggle(SummarySection::MainTopics);
        assert!(panel.is_expanded(SummarySection::MainTopics));
        assert!(!panel.is_expanded(SummarySection::KeyPoints));

        panel.toggle(SummarySection::MainTopics);
        assert_eq!(panel.expanded(), None);
    }

    #[test]
    fn new_summary_collapses_sections() {
        let mut panel = SummaryPanel::new();
        panel.toggle(SummarySection::KeyPoints);
        panel.set_summary(samples::document_summary());
        assert_eq!(panel.expanded(), None);
    }
}
