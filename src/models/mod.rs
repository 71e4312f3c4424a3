pub mod conversation;
pub mod document_summary;
pub mod live_update;
pub mod reference;
pub mod slide;
pub mod upload;
pub mod voice;

pub use conversation::*;
pub use document_summary::*;
pub use live_update::*;
pub use reference::*;
pub use slide::*;
pub use upload::*;
pub use voice::*;
