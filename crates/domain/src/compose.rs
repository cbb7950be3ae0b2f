use serde::{Deserialize, Serialize};

use crate::BackgroundId;

const PREVIEW_SIZE: u32 = 640;
const THUMBNAIL_SIZE: u32 = 150;
const OVERLAY_WIDTH: u32 = 2670 - 20;
const OVERLAY_OFFSET_Y: i32 = 50;
const CAPTION_FONT_FAMILY: &str = "Source Sans Pro";
const CAPTION_FONT_SIZE: u32 = 80;
const CAPTION_BORDER: &str = "20px_solid_black";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Fill,
    Fit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    Auto,
    North,
    South,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: String,
    pub font_family: String,
    pub font_size: u32,
    pub font_weight: String,
    pub stroke: bool,
    pub border: String,
}

impl TextStyle {
    fn caption() -> Self {
        Self {
            color: "white".to_string(),
            font_family: CAPTION_FONT_FAMILY.to_string(),
            font_size: CAPTION_FONT_SIZE,
            font_weight: "bold".to_string(),
            stroke: true,
            border: CAPTION_BORDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayPosition {
    pub x: i32,
    pub y: i32,
    pub gravity: Gravity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOverlay {
    pub width: u32,
    pub crop: Crop,
    pub position: OverlayPosition,
    pub style: TextStyle,
    pub text: String,
}

impl TextOverlay {
    fn caption(gravity: Gravity, text: &str) -> Self {
        Self {
            width: OVERLAY_WIDTH,
            crop: Crop::Fit,
            position: OverlayPosition {
                x: 0,
                y: OVERLAY_OFFSET_Y,
                gravity,
            },
            style: TextStyle::caption(),
            text: text.to_string(),
        }
    }
}

/// Declarative transform handed to the render service. Nothing here touches
/// pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionRequest {
    pub source: BackgroundId,
    pub width: u32,
    pub height: u32,
    pub crop: Crop,
    pub gravity: Gravity,
    pub overlays: Vec<TextOverlay>,
}

/// Full-size preview with the top caption anchored north and the bottom
/// caption anchored south. Caption text is passed through untouched.
pub fn compose_preview(background: &BackgroundId, top: &str, bottom: &str) -> CompositionRequest {
    CompositionRequest {
        source: background.clone(),
        width: PREVIEW_SIZE,
        height: PREVIEW_SIZE,
        crop: Crop::Fill,
        gravity: Gravity::Auto,
        overlays: vec![
            TextOverlay::caption(Gravity::North, top),
            TextOverlay::caption(Gravity::South, bottom),
        ],
    }
}

/// Square gallery tile without captions.
pub fn compose_thumbnail(background: &BackgroundId) -> CompositionRequest {
    CompositionRequest {
        source: background.clone(),
        width: THUMBNAIL_SIZE,
        height: THUMBNAIL_SIZE,
        crop: Crop::Fill,
        gravity: Gravity::Auto,
        overlays: Vec::new(),
    }
}
