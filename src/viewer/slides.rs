use crate::client::{ApiClient, ClientError};
use crate::models::{NarrationResponse, SlideContent, VoiceOutput};

#[derive(Debug, Default)]
pub struct SlideViewer {
    slides: Vec<SlideContent>,
    current: usize,
    narrating: bool,
    error: Option<String>,
}

impl SlideViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slides(slides: Vec<SlideContent>) -> Self {
        Self {
            slides,
            ..Self::default()
        }
    }

    pub async fn load(&mut self, client: &ApiClient) -> Result<(), ClientError> {
        match client.get_slides().await {
            Ok(slides) => {
                self.slides = slides;
                self.current = 0;
                self.error = None;
                self.stop_narration();
                Ok(())
            }
            Err(error) => {
                tracing::warn!("Failed to load slides: {}", error);
                self.error = Some("Failed to load slides".to_string());
                Err(error)
            }
        }
    }

    pub fn slides(&self) -> &[SlideContent] {
        &self.slides
    }

    pub fn current(&self) -> Option<&SlideContent> {
        self.slides.get(self.current)
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_narrating(&self) -> bool {
        self.narrating
    }

    /// Moves forward one slide; stays on the last one.
    pub fn next(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    /// Moves back one slide; stays on the first one.
    pub fn previous(&mut self) -> bool {
        self.go_to(self.current.saturating_sub(1))
    }

    /// Jumps to `index`, clamped to the deck. Returns whether the slide changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        let target = index.min(self.slides.len().saturating_sub(1));
        if target == self.current {
            return false;
        }
        self.stop_narration();
        self.current = target;
        true
    }

    /// Asks the gateway to narrate the current slide.
    pub async fn narrate(
        &mut self,
        client: &ApiClient,
    ) -> Result<Option<VoiceOutput<NarrationResponse>>, ClientError> {
        let Some(slide_number) = self.current().map(|slide| slide.slide_number) else {
            return Ok(None);
        };
        self.stop_narration();

        let output = client.generate_slide_voice(slide_number).await?;
        self.narrating = true;
        Ok(Some(output))
    }

    pub fn stop_narration(&mut self) {
        self.narrating = false;
    }
}
