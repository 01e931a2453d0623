//! Editor/preview shell for the OPR builder.

pub mod editor_session;
pub mod preview;

pub use editor_session::{EditorSession, EditorTab};
pub use preview::render_preview;
