//! View-state for the presentation page. Nothing here renders; the types
//! only track what the page shows and talk to the gateway through
//! [`crate::client::ApiClient`].

pub mod qa;
pub mod slides;
pub mod summary;
pub mod upload;

pub use qa::QaPanel;
pub use slides::SlideViewer;
pub use summary::{SummaryPanel, SummarySection};
pub use upload::UploadWidget;
