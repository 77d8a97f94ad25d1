use crate::config::PromptDefaults;
use serde::{Deserialize, Serialize};

pub const STYLE_OPTIONS: &[&str] = &[
    "realistic",
    "oil painting",
    "pencil drawing",
    "concept art",
    "watercolor",
];

pub const ARTIST_OPTIONS: &[&str] = &[
    "Leonardo DaVinci",
    "Vincent Van Gogh",
    "Albrecht Dürer",
    "Michelangelo",
    "Salvador Dali",
];

pub const FINISHING_TOUCH_OPTIONS: &[&str] = &[
    "highly-detailed",
    "surrealism",
    "trending on artstation",
    "triadic color scheme",
    "smooth",
    "sharp focus",
    "matte",
    "elegant",
    "illustration",
    "digital paint",
    "dark",
    "gloomy",
    "octane render",
    "8k",
    "4k",
    "washed-out colors",
    "sharp",
    "dramatic lighting",
    "beautiful",
    "post-processing",
    "picture of the day",
    "ambient lighting",
    "epic composition",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptField {
    Style,
    Artist,
    FinishingTouches,
}

impl PromptField {
    /// Suggested values for the field's typeahead. Free text is still accepted.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            PromptField::Style => STYLE_OPTIONS,
            PromptField::Artist => ARTIST_OPTIONS,
            PromptField::FinishingTouches => FINISHING_TOUCH_OPTIONS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptField::Style => "style",
            PromptField::Artist => "artist",
            PromptField::FinishingTouches => "finishing_touches",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptParameters {
    pub style: String,
    pub artist: String,
    pub finishing_touches: String,
}

impl From<&PromptDefaults> for PromptParameters {
    fn from(defaults: &PromptDefaults) -> Self {
        PromptParameters {
            style: defaults.style.clone(),
            artist: defaults.artist.clone(),
            finishing_touches: defaults.finishing_touches.clone(),
        }
    }
}

impl Default for PromptParameters {
    fn default() -> Self {
        PromptParameters::from(&PromptDefaults::default())
    }
}

impl PromptParameters {
    pub fn new(
        style: impl Into<String>,
        artist: impl Into<String>,
        finishing_touches: impl Into<String>,
    ) -> Self {
        PromptParameters {
            style: style.into(),
            artist: artist.into(),
            finishing_touches: finishing_touches.into(),
        }
    }

    pub fn get(&self, field: PromptField) -> &str {
        match field {
            PromptField::Style => &self.style,
            PromptField::Artist => &self.artist,
            PromptField::FinishingTouches => &self.finishing_touches,
        }
    }

    pub fn set(&mut self, field: PromptField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PromptField::Style => self.style = value,
            PromptField::Artist => self.artist = value,
            PromptField::FinishingTouches => self.finishing_touches = value,
        }
    }
}
