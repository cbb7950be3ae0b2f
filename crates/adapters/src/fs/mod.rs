mod clock;
mod upload;

pub use clock::SystemClock;
pub use upload::LocalUploadService;
