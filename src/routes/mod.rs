pub mod conversation;
pub mod document_summary;
pub mod feeds;
pub mod slides;
pub mod upload;
pub mod voice;

pub use conversation::conversation_routes;
pub use document_summary::document_summary_routes;
pub use feeds::{live_updates_routes, references_routes};
pub use slides::{generate_slides_routes, slides_routes};
pub use upload::upload_routes;
pub use voice::voice_routes;
