pub mod fs;
pub mod memory;
pub mod migrations;
pub mod presenters;
pub mod render;
pub mod sqlite;

pub use fs::{LocalUploadService, SystemClock};
pub use memory::InMemoryKeyValueStore;
pub use presenters::{present_captions, present_gallery_row, present_tile, present_upload};
pub use render::CloudinaryUrlRenderer;
pub use sqlite::SqliteKeyValueStore;
