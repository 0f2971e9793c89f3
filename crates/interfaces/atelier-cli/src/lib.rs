pub mod commands;

use clap::ValueEnum;

use atelier_core::{AspectRatio, DocType, EmojiDensity, Goal, ImageStyle, Platform, PostLength, Tone};

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliPlatform {
    Telegram,
    Vk,
    Instagram,
    Facebook,
}

impl From<CliPlatform> for Platform {
    fn from(p: CliPlatform) -> Self {
        match p {
            CliPlatform::Telegram => Platform::Telegram,
            CliPlatform::Vk => Platform::Vk,
            CliPlatform::Instagram => Platform::Instagram,
            CliPlatform::Facebook => Platform::Facebook,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliTone {
    Brand,
    Friendly,
    Professional,
    Inspiring,
    Humorous,
    Informational,
    Provocative,
}

impl From<CliTone> for Tone {
    fn from(t: CliTone) -> Self {
        match t {
            CliTone::Brand => Tone::BrandVoice,
            CliTone::Friendly => Tone::Friendly,
            CliTone::Professional => Tone::Professional,
            CliTone::Inspiring => Tone::Inspiring,
            CliTone::Humorous => Tone::Humorous,
            CliTone::Informational => Tone::Informational,
            CliTone::Provocative => Tone::Provocative,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliGoal {
    Engagement,
    Sales,
    Announcement,
    Entertainment,
    Education,
}

impl From<CliGoal> for Goal {
    fn from(g: CliGoal) -> Self {
        match g {
            CliGoal::Engagement => Goal::Engagement,
            CliGoal::Sales => Goal::Sales,
            CliGoal::Announcement => Goal::Announcement,
            CliGoal::Entertainment => Goal::Entertainment,
            CliGoal::Education => Goal::Education,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliLength {
    Short,
    Medium,
    Long,
}

impl From<CliLength> for PostLength {
    fn from(l: CliLength) -> Self {
        match l {
            CliLength::Short => PostLength::Short,
            CliLength::Medium => PostLength::Medium,
            CliLength::Long => PostLength::Long,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliEmojis {
    None,
    Low,
    Balanced,
    High,
}

impl From<CliEmojis> for EmojiDensity {
    fn from(e: CliEmojis) -> Self {
        match e {
            CliEmojis::None => EmojiDensity::None,
            CliEmojis::Low => EmojiDensity::Low,
            CliEmojis::Balanced => EmojiDensity::Balanced,
            CliEmojis::High => EmojiDensity::High,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliStyle {
    Photorealism,
    Illustration,
    Cartoon,
    Minimalism,
    Watercolor,
    Render3d,
    Anime,
    Comic,
    Vintage,
    Neon,
    Pastel,
    Graffiti,
}

impl From<CliStyle> for ImageStyle {
    fn from(s: CliStyle) -> Self {
        match s {
            CliStyle::Photorealism => ImageStyle::Photorealism,
            CliStyle::Illustration => ImageStyle::Illustration,
            CliStyle::Cartoon => ImageStyle::Cartoon,
            CliStyle::Minimalism => ImageStyle::Minimalism,
            CliStyle::Watercolor => ImageStyle::Watercolor,
            CliStyle::Render3d => ImageStyle::Render3d,
            CliStyle::Anime => ImageStyle::Anime,
            CliStyle::Comic => ImageStyle::Comic,
            CliStyle::Vintage => ImageStyle::Vintage,
            CliStyle::Neon => ImageStyle::Neon,
            CliStyle::Pastel => ImageStyle::Pastel,
            CliStyle::Graffiti => ImageStyle::Graffiti,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliRatio {
    Square,
    Landscape,
    Portrait,
    Wide,
}

impl From<CliRatio> for AspectRatio {
    fn from(r: CliRatio) -> Self {
        match r {
            CliRatio::Square => AspectRatio::Square,
            CliRatio::Landscape => AspectRatio::Landscape,
            CliRatio::Portrait => AspectRatio::Portrait,
            CliRatio::Wide => AspectRatio::Wide,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliDocType {
    Essay,
    TermPaper,
    Report,
    ShortEssay,
}

impl From<CliDocType> for DocType {
    fn from(d: CliDocType) -> Self {
        match d {
            CliDocType::Essay => DocType::Essay,
            CliDocType::TermPaper => DocType::TermPaper,
            CliDocType::Report => DocType::Report,
            CliDocType::ShortEssay => DocType::ShortEssay,
        }
    }
}
