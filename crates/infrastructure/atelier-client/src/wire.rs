//! Request and response bodies as the endpoints expect them. Field names are
//! the wire contract; enums serialize to their opaque tags.

use serde::{Deserialize, Serialize};

use atelier_core::{
    AspectRatio, DocType, EmojiDensity, Goal, ImageStyle, Platform, PostLength, Tone, TopicEntry,
};

#[derive(Debug, Serialize)]
pub struct PostBody<'a> {
    pub platform: Platform,
    pub task: &'a str,
    pub tone: Tone,
    pub goal: Goal,
    pub length: PostLength,
    pub emojis: EmojiDensity,
}

#[derive(Debug, Serialize)]
pub struct ImageBody<'a> {
    pub task: &'a str,
    pub style: ImageStyle,
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: AspectRatio,
}

/// Topics phase of the document flow (`mode: "topics"`).
#[derive(Debug, Serialize)]
pub struct TopicsBody<'a> {
    pub mode: &'static str,
    #[serde(rename = "docType")]
    pub doc_type: DocType,
    pub subject: &'a str,
    pub pages: u32,
    #[serde(rename = "additionalInfo")]
    pub additional_info: &'a str,
}

/// Document phase (`mode: "document"`) carrying the user-edited outline.
#[derive(Debug, Serialize)]
pub struct DocumentBody<'a> {
    pub mode: &'static str,
    #[serde(rename = "docType")]
    pub doc_type: DocType,
    pub subject: &'a str,
    pub pages: u32,
    pub topics: &'a [TopicEntry],
    #[serde(rename = "additionalInfo")]
    pub additional_info: &'a str,
}

// Success fields are optional so that a 200 without the expected payload is
// still readable and can be reported as a missing-field failure.

#[derive(Debug, Deserialize)]
pub struct PostReply {
    pub post: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImageReply {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopicsReply {
    pub topics: Option<Vec<TopicEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentReply {
    pub document: Option<String>,
}
