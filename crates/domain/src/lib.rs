mod background;
mod caption;
mod compose;
mod error;
mod gallery;

pub use background::{default_catalog, BackgroundEntry, BackgroundId, UploadResult};
pub use caption::{CaptionSlot, Captions, DEFAULT_BOTTOM_TEXT, DEFAULT_TOP_TEXT};
pub use compose::{
    compose_preview, compose_thumbnail, CompositionRequest, Crop, Gravity, OverlayPosition,
    TextOverlay, TextStyle,
};
pub use error::DomainError;
pub use gallery::Gallery;
