use serde::Serialize;

use crate::ValidationError;

/// Named style presets. Each carries the descriptive sub-prompt the endpoint
/// appends to the user's task; the UI surfaces it as a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageStyle {
    #[serde(rename = "фотореализм")]
    Photorealism,
    #[serde(rename = "иллюстрация")]
    Illustration,
    #[serde(rename = "мультяшный")]
    Cartoon,
    #[serde(rename = "минимализм")]
    Minimalism,
    #[serde(rename = "акварель")]
    Watercolor,
    #[serde(rename = "3d_render")]
    Render3d,
    #[serde(rename = "аниме")]
    Anime,
    #[serde(rename = "комикс")]
    Comic,
    #[serde(rename = "винтаж")]
    Vintage,
    #[serde(rename = "неон")]
    Neon,
    #[serde(rename = "пастель")]
    Pastel,
    #[serde(rename = "граффити")]
    Graffiti,
}

impl ImageStyle {
    pub const ALL: [ImageStyle; 12] = [
        ImageStyle::Photorealism,
        ImageStyle::Illustration,
        ImageStyle::Cartoon,
        ImageStyle::Minimalism,
        ImageStyle::Watercolor,
        ImageStyle::Render3d,
        ImageStyle::Anime,
        ImageStyle::Comic,
        ImageStyle::Vintage,
        ImageStyle::Neon,
        ImageStyle::Pastel,
        ImageStyle::Graffiti,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ImageStyle::Photorealism => "Photorealism",
            ImageStyle::Illustration => "Illustration",
            ImageStyle::Cartoon => "Cartoon",
            ImageStyle::Minimalism => "Minimalism",
            ImageStyle::Watercolor => "Watercolor",
            ImageStyle::Render3d => "3D render",
            ImageStyle::Anime => "Anime",
            ImageStyle::Comic => "Comic book",
            ImageStyle::Vintage => "Vintage",
            ImageStyle::Neon => "Neon",
            ImageStyle::Pastel => "Pastel",
            ImageStyle::Graffiti => "Graffiti",
        }
    }

    pub fn sub_prompt(self) -> &'static str {
        match self {
            ImageStyle::Photorealism => {
                "Photorealistic, ultra-detailed, professional photography"
            }
            ImageStyle::Illustration => "Digital illustration, artistic style, vibrant colors",
            ImageStyle::Cartoon => "Cartoon style, animated, colorful, fun",
            ImageStyle::Minimalism => "Minimalist design, clean lines, simple composition",
            ImageStyle::Watercolor => {
                "Watercolor painting style, soft colors, artistic brush strokes"
            }
            ImageStyle::Render3d => "3D render, CGI, modern digital art, clean look",
            ImageStyle::Anime => "Anime style, manga art, Japanese animation aesthetic",
            ImageStyle::Comic => "Comic book style, bold lines, pop art colors",
            ImageStyle::Vintage => "Vintage style, retro aesthetic, nostalgic feel",
            ImageStyle::Neon => "Neon lights, cyberpunk aesthetic, vibrant glow effects",
            ImageStyle::Pastel => "Pastel colors, soft tones, dreamy atmosphere",
            ImageStyle::Graffiti => "Graffiti art style, urban street art, bold spray paint",
        }
    }
}

/// Output format presets with pixel dimensions and a usage hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AspectRatio {
    #[serde(rename = "квадрат")]
    Square,
    #[serde(rename = "горизонтальный")]
    Landscape,
    #[serde(rename = "вертикальный")]
    Portrait,
    #[serde(rename = "горизонтальный_широкий")]
    Wide,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 4] = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
        AspectRatio::Wide,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "Square 1:1",
            AspectRatio::Landscape => "Landscape 16:9",
            AspectRatio::Portrait => "Portrait 9:16",
            AspectRatio::Wide => "Wide 3:2",
        }
    }

    pub fn dimensions(self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1080, 1080),
            AspectRatio::Landscape => (1920, 1080),
            AspectRatio::Portrait => (1080, 1920),
            AspectRatio::Wide => (1200, 628),
        }
    }

    pub fn fits(self) -> &'static str {
        match self {
            AspectRatio::Square => "Instagram, VK post",
            AspectRatio::Landscape => "YouTube, Telegram",
            AspectRatio::Portrait => "Stories, Reels",
            AspectRatio::Wide => "Facebook, VK banner",
        }
    }
}

/// Everything the image endpoint needs for one generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub task: String,
    pub style: ImageStyle,
    pub aspect_ratio: AspectRatio,
}

impl Default for ImageRequest {
    fn default() -> Self {
        Self {
            task: String::new(),
            style: ImageStyle::Photorealism,
            aspect_ratio: AspectRatio::Square,
        }
    }
}

impl ImageRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if crate::is_blank(&self.task) {
            return Err(ValidationError::EmptyImageTask);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_and_ratio_tags_match_endpoint_contract() {
        assert_eq!(
            serde_json::to_string(&ImageStyle::Photorealism).unwrap(),
            "\"фотореализм\""
        );
        assert_eq!(
            serde_json::to_string(&ImageStyle::Render3d).unwrap(),
            "\"3d_render\""
        );
        assert_eq!(
            serde_json::to_string(&AspectRatio::Wide).unwrap(),
            "\"горизонтальный_широкий\""
        );
    }

    #[test]
    fn every_preset_carries_metadata() {
        for style in ImageStyle::ALL {
            assert!(!style.sub_prompt().is_empty());
        }
        for ratio in AspectRatio::ALL {
            let (w, h) = ratio.dimensions();
            assert!(w > 0 && h > 0);
            assert!(!ratio.fits().is_empty());
        }
    }

    #[test]
    fn blank_task_is_rejected() {
        let req = ImageRequest {
            task: "  ".into(),
            ..Default::default()
        };
        assert_eq!(req.validate(), Err(ValidationError::EmptyImageTask));
    }
}
