//! In-process repositories for the mutable state the gateway owns.
//!
//! Everything here lives for the lifetime of the process and is reset on
//! restart. Handlers only see the traits, so a persistent implementation can
//! be swapped in through [`crate::AppState`].

pub mod conversation;
pub mod slides;
pub mod summary;

pub use conversation::{ConversationRepository, InMemoryConversations};
pub use slides::{InMemorySlides, SlideRepository};
pub use summary::{InMemorySummary, SummaryRepository};

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// A panic while holding one of these locks cannot leave a half-written Vec
// behind, so poisoning is ignored rather than propagated.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
