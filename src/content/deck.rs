use crate::models::{ConversationMessage, DocumentSummary, MessageKind, SlideContent};

const MAX_QUESTIONS_ON_SLIDE: usize = 5;

/// Builds a fresh deck from the current document summary and the audience
/// questions asked so far: a title slide, one slide per main topic, and a
/// closing Q&A slide when there are questions.
pub fn build_deck(
    summary: &DocumentSummary,
    conversation: &[ConversationMessage],
) -> Vec<SlideContent> {
    let mut slides = Vec::with_capacity(summary.main_topics.len() + 2);

    slides.push(SlideContent {
        title: summary.title.clone(),
        content: first_sentence(&summary.abstract_text),
        image_url: None,
        image_description: None,
        speaker_notes: Some(if summary.authors.is_empty() {
            format!("Welcome everyone. Today we're looking at {}.", summary.title)
        } else {
            format!(
                "Welcome everyone. Today we're looking at {}, by {}.",
                summary.title,
                summary.authors.join(", ")
            )
        }),
        slide_number: 0,
    });

    for (idx, topic) in summary.main_topics.iter().enumerate() {
        let content = summary
            .key_points
            .get(idx)
            .cloned()
            .unwrap_or_else(|| format!("Discussion of {}", topic));
        slides.push(SlideContent {
            title: topic.clone(),
            content,
            image_url: None,
            image_description: None,
            speaker_notes: None,
            slide_number: 0,
        });
    }

    let questions: Vec<&ConversationMessage> = conversation
        .iter()
        .filter(|message| message.kind == MessageKind::Question)
        .collect();

    if !questions.is_empty() {
        let recent = questions
            .iter()
            .rev()
            .take(MAX_QUESTIONS_ON_SLIDE)
            .rev()
            .map(|message| format!("• {} ({})", message.message, message.user))
            .collect::<Vec<_>>()
            .join("\n");

        slides.push(SlideContent {
            title: "Audience Questions".to_string(),
            content: recent,
            image_url: None,
            image_description: None,
            speaker_notes: Some(format!(
                "{} question(s) came in from the audience so far.",
                questions.len()
            )),
            slide_number: 0,
        });
    }

    for (idx, slide) in slides.iter_mut().enumerate() {
        slide.slide_number = idx as i64 + 1;
    }

    slides
}

fn first_sentence(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.find(". ") {
        Some(end) => trimmed[..=end].to_string(),
        None => trimmed.to_string(),
    }
}
