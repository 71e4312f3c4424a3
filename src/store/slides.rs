use std::sync::RwLock;

use crate::models::SlideContent;

pub trait SlideRepository: Send + Sync {
    fn all(&self) -> Vec<SlideContent>;

    fn get(&self, slide_number: i64) -> Option<SlideContent>;

    /// Swaps the whole deck; slides are never edited one by one.
    fn replace(&self, slides: Vec<SlideContent>);
}

#[derive(Debug, Default)]
pub struct InMemorySlides {
    slides: RwLock<Vec<SlideContent>>,
}

impl InMemorySlides {
    pub fn with_slides(slides: Vec<SlideContent>) -> Self {
        Self {
            slides: RwLock::new(slides),
        }
    }
}

impl SlideRepository for InMemorySlides {
    fn all(&self) -> Vec<SlideContent> {
        super::read(&self.slides).clone()
    }

    fn get(&self, slide_number: i64) -> Option<SlideContent> {
        super::read(&self.slides)
            .iter()
            .find(|slide| slide.slide_number == slide_number)
            .cloned()
    }

    fn replace(&self, slides: Vec<SlideContent>) {
        *super::write(&self.slides) = slides;
    }
}
