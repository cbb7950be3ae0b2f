use std::path::Path;

use meme_room_domain::{CompositionRequest, UploadResult};

use crate::ApplicationError;

pub const GALLERY_KEY: &str = "meme_backgrounds";
pub const TOP_TEXT_KEY: &str = "top_text";
pub const BOTTOM_TEXT_KEY: &str = "bottom_text";

/// String-valued persisted slots. Writes replace the previous value.
pub trait KeyValueStore {
    fn initialize(&self) -> Result<(), ApplicationError>;

    fn get(&self, key: &str) -> Result<Option<String>, ApplicationError>;

    fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError>;

    fn remove(&self, key: &str) -> Result<(), ApplicationError>;
}

pub trait UploadService {
    fn upload(&self, source: &Path) -> Result<UploadResult, ApplicationError>;
}

pub trait RenderService {
    fn delivery_url(&self, request: &CompositionRequest) -> Result<String, ApplicationError>;
}

pub trait Clock {
    fn now_timestamp_string(&self) -> String;
}
