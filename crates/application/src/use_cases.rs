use std::path::PathBuf;

use meme_room_domain::{BackgroundId, CaptionSlot, UploadResult};

#[derive(Debug, Clone, Default)]
pub struct BootstrapStoreCommand;

#[derive(Debug, Clone, Default)]
pub struct RestoreSessionCommand;

#[derive(Debug, Clone)]
pub struct SelectBackgroundCommand {
    pub id: BackgroundId,
}

#[derive(Debug, Clone)]
pub struct RegisterUploadCommand {
    pub result: UploadResult,
}

#[derive(Debug, Clone)]
pub struct UploadBackgroundCommand {
    pub source: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SetCaptionCommand {
    pub slot: CaptionSlot,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct PreviewQuery;

#[derive(Debug, Clone, Default)]
pub struct GalleryTilesQuery;

#[derive(Debug, Clone, Default)]
pub struct ResetSessionCommand;
