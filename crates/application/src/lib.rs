mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{
    Clock, KeyValueStore, RenderService, UploadService, BOTTOM_TEXT_KEY, GALLERY_KEY,
    TOP_TEXT_KEY,
};
pub use service::{GalleryTile, MemeSession, SelectOutcome};
pub use use_cases::{
    BootstrapStoreCommand, GalleryTilesQuery, PreviewQuery, RegisterUploadCommand,
    ResetSessionCommand, RestoreSessionCommand, SelectBackgroundCommand, SetCaptionCommand,
    UploadBackgroundCommand,
};
