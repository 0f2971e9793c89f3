use thiserror::Error;

pub mod document;
pub mod export;
pub mod image;
pub mod post;

pub use document::{DocType, DocumentRequest, TopicEntry, TopicField, TopicOutline};
pub use image::{AspectRatio, ImageRequest, ImageStyle};
pub use post::{EmojiDensity, Goal, Platform, PostLength, PostRequest, Tone};

/// A required form field was blank. Caught before any network call is made;
/// each variant carries the fixed message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Describe what you want the post to say")]
    EmptyPostTask,
    #[error("Describe the image you want to create")]
    EmptyImageTask,
    #[error("Specify the document subject")]
    EmptySubject,
    #[error("Generate topics before writing the document")]
    EmptyOutline,
}

/// Required free-text fields count as present only when non-empty after trimming.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
