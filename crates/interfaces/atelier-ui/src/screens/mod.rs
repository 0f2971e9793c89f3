pub mod document;
pub mod image;
pub mod post;
pub mod settings;
