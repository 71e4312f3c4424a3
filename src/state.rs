use std::sync::Arc;

use crate::config::{AppConfig, ContentMode};
use crate::content::{BackendContent, ContentSource, StaticContent, samples};
use crate::narration::Narrator;
use crate::store::{
    ConversationRepository, InMemoryConversations, InMemorySlides, InMemorySummary,
    SlideRepository, SummaryRepository,
};
use crate::summary::{OpenAiSummarizer, Summarizer};

/// Shared handler state. Cloning is cheap; every field is a handle.
#[derive(Clone)]
pub struct AppState {
    pub conversation: Arc<dyn ConversationRepository>,
    pub slides: Arc<dyn SlideRepository>,
    pub summaries: Arc<dyn SummaryRepository>,
    pub content: ContentSource,
    pub summarizer: Summarizer,
    pub narrator: Narrator,
}

impl AppState {
    /// State seeded with the sample deck and conversation, serving static
    /// content with no LLM or speech service.
    pub fn in_memory() -> Self {
        let slides: Arc<dyn SlideRepository> =
            Arc::new(InMemorySlides::with_slides(samples::slides()));
        let summaries: Arc<dyn SummaryRepository> = Arc::new(InMemorySummary::default());

        Self {
            conversation: Arc::new(InMemoryConversations::with_messages(samples::conversation())),
            content: ContentSource::Static(StaticContent::new(slides.clone(), summaries.clone())),
            slides,
            summaries,
            summarizer: Summarizer::Canned,
            narrator: Narrator::Disabled,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let mut state = Self::in_memory();

        let backend_client = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .build()?;

        let backend_url = match config.content_mode {
            ContentMode::Backend => config.backend_url.clone(),
            ContentMode::Static => None,
        };

        if let Some(url) = &backend_url {
            state.content = ContentSource::Backend(BackendContent::new(backend_client.clone(), url));
        }

        if let Some(settings) = &config.openai {
            let openai_client = reqwest::Client::builder()
                .timeout(settings.timeout)
                .build()?;
            state.summarizer =
                Summarizer::OpenAi(OpenAiSummarizer::new(openai_client.clone(), settings.clone()));
            state.narrator = Narrator::OpenAi {
                client: openai_client,
                settings: settings.clone(),
            };
        }

        // The backend's own voice service wins over OpenAI speech.
        if let Some(url) = backend_url {
            state.narrator = Narrator::Backend {
                client: backend_client,
                url: format!("{}/api/voice/custom", url),
            };
        }

        tracing::info!(
            content = state.content.name(),
            narrator = state.narrator.name(),
            llm_summaries = state.summarizer.is_llm_backed(),
            seeded_messages = state.conversation.count(),
            "Application state ready"
        );

        Ok(state)
    }
}
