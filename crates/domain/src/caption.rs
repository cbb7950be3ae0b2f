use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_TEXT: &str = "This is a cool";
pub const DEFAULT_BOTTOM_TEXT: &str = "meme generator";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionSlot {
    Top,
    Bottom,
}

/// Caption strings are stored exactly as typed: no trimming, escaping or
/// length limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captions {
    pub top: String,
    pub bottom: String,
}

impl Default for Captions {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP_TEXT.to_string(),
            bottom: DEFAULT_BOTTOM_TEXT.to_string(),
        }
    }
}

impl Captions {
    pub fn get(&self, slot: CaptionSlot) -> &str {
        match slot {
            CaptionSlot::Top => &self.top,
            CaptionSlot::Bottom => &self.bottom,
        }
    }

    pub fn set(&mut self, slot: CaptionSlot, text: impl Into<String>) {
        let text = text.into();
        match slot {
            CaptionSlot::Top => self.top = text,
            CaptionSlot::Bottom => self.bottom = text,
        }
    }
}
