use serde::Serialize;

use crate::ValidationError;

/// Target platform for a generated post. The serde tags are the wire contract
/// understood by the post endpoint; they are passed through opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    #[serde(rename = "telegram")]
    Telegram,
    #[serde(rename = "vk")]
    Vk,
    #[serde(rename = "instagram")]
    Instagram,
    #[serde(rename = "facebook")]
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Telegram,
        Platform::Vk,
        Platform::Instagram,
        Platform::Facebook,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Telegram => "Telegram",
            Platform::Vk => "VKontakte",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
        }
    }
}

/// Voice of the generated post. `BrandVoice` is the branded default the
/// endpoint expands into a full persona prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    #[serde(rename = "anya_vibe")]
    BrandVoice,
    #[serde(rename = "дружелюбный")]
    Friendly,
    #[serde(rename = "профессиональный")]
    Professional,
    #[serde(rename = "вдохновляющий")]
    Inspiring,
    #[serde(rename = "юмористический")]
    Humorous,
    #[serde(rename = "информационный")]
    Informational,
    #[serde(rename = "провокационный")]
    Provocative,
}

impl Tone {
    pub const ALL: [Tone; 7] = [
        Tone::BrandVoice,
        Tone::Friendly,
        Tone::Professional,
        Tone::Inspiring,
        Tone::Humorous,
        Tone::Informational,
        Tone::Provocative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tone::BrandVoice => "Brand voice",
            Tone::Friendly => "Friendly",
            Tone::Professional => "Professional",
            Tone::Inspiring => "Inspiring",
            Tone::Humorous => "Humorous",
            Tone::Informational => "Informational",
            Tone::Provocative => "Provocative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Goal {
    #[serde(rename = "вовлечение")]
    Engagement,
    #[serde(rename = "продажа")]
    Sales,
    #[serde(rename = "информирование")]
    Announcement,
    #[serde(rename = "развлечение")]
    Entertainment,
    #[serde(rename = "обучение")]
    Education,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::Engagement,
        Goal::Sales,
        Goal::Announcement,
        Goal::Entertainment,
        Goal::Education,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Goal::Engagement => "Engagement",
            Goal::Sales => "Sales",
            Goal::Announcement => "Announcement",
            Goal::Entertainment => "Entertainment",
            Goal::Education => "Education",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PostLength {
    #[serde(rename = "короткий")]
    Short,
    #[serde(rename = "средний")]
    Medium,
    #[serde(rename = "длинный")]
    Long,
}

impl PostLength {
    pub const ALL: [PostLength; 3] = [PostLength::Short, PostLength::Medium, PostLength::Long];

    pub fn label(self) -> &'static str {
        match self {
            PostLength::Short => "Short (up to 200 chars)",
            PostLength::Medium => "Medium (200-500 chars)",
            PostLength::Long => "Long (500+ chars)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmojiDensity {
    #[serde(rename = "нет")]
    None,
    #[serde(rename = "мало")]
    Low,
    #[serde(rename = "баланс")]
    Balanced,
    #[serde(rename = "много")]
    High,
}

impl EmojiDensity {
    pub const ALL: [EmojiDensity; 4] = [
        EmojiDensity::None,
        EmojiDensity::Low,
        EmojiDensity::Balanced,
        EmojiDensity::High,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EmojiDensity::None => "No emoji",
            EmojiDensity::Low => "A few (1-2)",
            EmojiDensity::Balanced => "Balanced (3-5)",
            EmojiDensity::High => "A lot (8-12)",
        }
    }
}

/// Everything the post endpoint needs for one generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub platform: Platform,
    pub task: String,
    pub tone: Tone,
    pub goal: Goal,
    pub length: PostLength,
    pub emojis: EmojiDensity,
}

impl Default for PostRequest {
    fn default() -> Self {
        Self {
            platform: Platform::Telegram,
            task: String::new(),
            tone: Tone::BrandVoice,
            goal: Goal::Engagement,
            length: PostLength::Medium,
            emojis: EmojiDensity::Balanced,
        }
    }
}

impl PostRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if crate::is_blank(&self.task) {
            return Err(ValidationError::EmptyPostTask);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_tags_match_endpoint_contract() {
        assert_eq!(serde_json::to_string(&Platform::Vk).unwrap(), "\"vk\"");
        assert_eq!(
            serde_json::to_string(&Tone::BrandVoice).unwrap(),
            "\"anya_vibe\""
        );
        assert_eq!(
            serde_json::to_string(&Tone::Friendly).unwrap(),
            "\"дружелюбный\""
        );
        assert_eq!(
            serde_json::to_string(&PostLength::Short).unwrap(),
            "\"короткий\""
        );
        assert_eq!(
            serde_json::to_string(&EmojiDensity::Balanced).unwrap(),
            "\"баланс\""
        );
        assert_eq!(
            serde_json::to_string(&Goal::Engagement).unwrap(),
            "\"вовлечение\""
        );
    }

    #[test]
    fn blank_task_is_rejected_before_any_network_use() {
        let mut req = PostRequest::default();
        assert_eq!(req.validate(), Err(ValidationError::EmptyPostTask));

        req.task = "   \n\t ".into();
        assert_eq!(req.validate(), Err(ValidationError::EmptyPostTask));

        req.task = "Напиши про кофе".into();
        assert_eq!(req.validate(), Ok(()));
    }
}
