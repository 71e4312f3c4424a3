//! Canned presentation content served when no backend supplies real data.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    ConversationMessage, DifficultyLevel, DocumentSummary, DocumentType, LiveUpdate,
    LiveUpdateKind, MessageKind, ReferenceLink, SlideContent,
};

const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/800x600";

fn placeholder_image(color: &str, text: &str) -> String {
    format!("{}/{}/FFFFFF?text={}", PLACEHOLDER_IMAGE_BASE, color, text)
}

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 28, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

pub fn slides() -> Vec<SlideContent> {
    vec![
        SlideContent {
            title: "Welcome to Claude Agents".to_string(),
            content: "Building intelligent agents with Claude on Vertex AI".to_string(),
            image_url: Some(placeholder_image("4F46E5", "Slide+1")),
            image_description: Some(
                "Title slide with Claude AI branding and agent illustration".to_string(),
            ),
            speaker_notes: Some(
                "Welcome everyone to our presentation on Claude Agents. Today we'll explore how to build intelligent agents using Claude AI on Google's Vertex AI platform.".to_string(),
            ),
            slide_number: 1,
        },
        SlideContent {
            title: "Architecture Overview".to_string(),
            content: "Understanding the MCP (Model Context Protocol) integration".to_string(),
            image_url: Some(placeholder_image("7C3AED", "Slide+2")),
            image_description: Some(
                "Architecture diagram showing MCP components and data flow".to_string(),
            ),
            speaker_notes: Some(
                "Let's dive into the architecture. The Model Context Protocol provides a standardized way for AI agents to interact with external systems and data sources.".to_string(),
            ),
            slide_number: 2,
        },
        SlideContent {
            title: "Implementation Guide".to_string(),
            content: "Step-by-step implementation with code examples".to_string(),
            image_url: Some(placeholder_image("DC2626", "Slide+3")),
            image_description: Some(
                "Code snippets and implementation steps visualization".to_string(),
            ),
            speaker_notes: Some(
                "Now we'll walk through the practical implementation steps. I'll show you code examples and best practices for building robust Claude agents.".to_string(),
            ),
            slide_number: 3,
        },
    ]
}

/// Stand-in returned for a slide number that doesn't exist. It keeps the
/// requested number so the viewer can still show where it is.
pub fn placeholder_slide(slide_number: i64) -> SlideContent {
    SlideContent {
        title: "Slide Not Found".to_string(),
        content: "The requested slide is not available".to_string(),
        image_url: Some(placeholder_image("6B7280", "Not+Found")),
        image_description: None,
        speaker_notes: None,
        slide_number,
    }
}

pub fn references() -> Vec<ReferenceLink> {
    vec![
        ReferenceLink {
            title: "Configure Claude Code on Vertex".to_string(),
            url: "https://cloud.google.com/vertex-ai/docs/generative-ai/models/claude".to_string(),
            description: "Official Google Cloud documentation for Claude on Vertex AI".to_string(),
        },
        ReferenceLink {
            title: "Learn more about MCP".to_string(),
            url: "https://docs.anthropic.com/claude/docs/mcp".to_string(),
            description: "Model Context Protocol documentation".to_string(),
        },
        ReferenceLink {
            title: "Get started with Claude on Vertex AI".to_string(),
            url: "https://console.cloud.google.com/vertex-ai".to_string(),
            description: "Google Cloud Vertex AI Console".to_string(),
        },
    ]
}

pub fn live_updates() -> Vec<LiveUpdate> {
    vec![
        LiveUpdate {
            message: "Welcome everyone! We'll start in 2 minutes.".to_string(),
            timestamp: at(10, 28),
            kind: LiveUpdateKind::Announcement,
        },
        LiveUpdate {
            message: "Demo environment is now live and ready for testing".to_string(),
            timestamp: at(10, 35),
            kind: LiveUpdateKind::Info,
        },
    ]
}

pub fn conversation() -> Vec<ConversationMessage> {
    vec![
        ConversationMessage {
            id: 1,
            user: "Alice".to_string(),
            message: "How do we handle authentication with Claude on Vertex AI?".to_string(),
            timestamp: at(10, 30),
            kind: MessageKind::Question,
        },
        ConversationMessage {
            id: 2,
            user: "Presenter".to_string(),
            message: "Great question! Authentication is handled through Google Cloud IAM. You'll need to set up service accounts with the appropriate permissions.".to_string(),
            timestamp: at(10, 31),
            kind: MessageKind::Answer,
        },
        ConversationMessage {
            id: 3,
            user: "Bob".to_string(),
            message: "What about rate limiting? Are there any constraints we should be aware of?"
                .to_string(),
            timestamp: at(10, 33),
            kind: MessageKind::Question,
        },
    ]
}

/// Summary shown before any document was uploaded.
pub fn document_summary() -> DocumentSummary {
    DocumentSummary {
        title: "Building Intelligent Agents with Claude on Vertex AI".to_string(),
        abstract_text: "This comprehensive guide explores the integration of Anthropic's Claude language model with Google Cloud's Vertex AI platform to create powerful, context-aware intelligent agents. The document covers the Model Context Protocol (MCP), implementation strategies, and best practices for deploying Claude-based agents in production environments.".to_string(),
        key_points: vec![
            "Integration of Claude with Vertex AI infrastructure".to_string(),
            "Implementation of Model Context Protocol (MCP) for enhanced context management"
                .to_string(),
            "Authentication and security considerations for production deployments".to_string(),
            "Scalability patterns and performance optimization techniques".to_string(),
            "Real-world use cases and deployment scenarios".to_string(),
        ],
        main_topics: vec![
            "Claude API Integration".to_string(),
            "Vertex AI Platform".to_string(),
            "Model Context Protocol".to_string(),
            "Authentication & Security".to_string(),
            "Performance Optimization".to_string(),
            "Production Deployment".to_string(),
        ],
        difficulty_level: DifficultyLevel::Intermediate,
        estimated_read_time: "45 minutes".to_string(),
        document_type: DocumentType::Tutorial,
        authors: vec![
            "Google Cloud Team".to_string(),
            "Anthropic Documentation".to_string(),
        ],
        publication_date: "2024-12-28".to_string(),
    }
}

/// Summary shown when the content backend could not be reached.
pub fn unavailable_document_summary() -> DocumentSummary {
    DocumentSummary {
        title: "Document Summary Unavailable".to_string(),
        abstract_text: "The document backend could not be reached, so no summary can be shown right now. Please try again in a moment.".to_string(),
        key_points: vec!["The summary will appear once the backend is reachable again".to_string()],
        main_topics: Vec::new(),
        difficulty_level: DifficultyLevel::Beginner,
        estimated_read_time: "0 minutes".to_string(),
        document_type: DocumentType::Article,
        authors: Vec::new(),
        publication_date: Utc::now().date_naive().to_string(),
    }
}
