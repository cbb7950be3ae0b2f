use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use image::ImageReader;
use meme_room_application::{ApplicationError, Clock, UploadService};
use meme_room_domain::{BackgroundId, UploadResult};
use tracing::{debug, info};

/// Stores uploaded backgrounds in a local asset directory and hands out
/// fresh public ids of the form `<folder>/<stem>_<timestamp>`.
pub struct LocalUploadService {
    asset_dir: PathBuf,
    folder: String,
    clock: Box<dyn Clock>,
}

impl LocalUploadService {
    pub fn new(
        asset_dir: impl Into<PathBuf>,
        folder: impl Into<String>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            folder: folder.into().trim_matches('/').to_string(),
            clock,
        }
    }
}

impl UploadService for LocalUploadService {
    fn upload(&self, source: &Path) -> Result<UploadResult, ApplicationError> {
        if !source.is_file() {
            return Err(ApplicationError::NotFound(format!(
                "upload source is not a file: {}",
                source.display()
            )));
        }

        let reader = ImageReader::open(source)
            .map_err(|error| ApplicationError::Io(error.to_string()))?
            .with_guessed_format()
            .map_err(|error| ApplicationError::Io(error.to_string()))?;
        let format = reader.format().ok_or_else(|| {
            ApplicationError::Decode(format!("unrecognized image format: {}", source.display()))
        })?;
        let (width, height) = reader
            .into_dimensions()
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;

        let original_filename = source
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        let base = format!(
            "{}_{}",
            sanitize_stem(&original_filename),
            self.clock.now_timestamp_string()
        );
        let extension = format.extensions_str().first().copied().unwrap_or("img");
        let target_dir = self.asset_dir.join(&self.folder);
        fs::create_dir_all(&target_dir).map_err(|error| ApplicationError::Io(error.to_string()))?;
        let (name, target) = store_unique(source, &target_dir, &base, extension)?;

        let public_id = if self.folder.is_empty() {
            name
        } else {
            format!("{}/{}", self.folder, name)
        };

        debug!(width, height, ?format, target = %target.display(), "asset copied");
        info!(public_id = %public_id, "background uploaded");

        Ok(UploadResult {
            public_id: BackgroundId::new(public_id),
            original_filename,
        })
    }
}

/// Copies `source` under the first free name `base`, `base_1`, `base_2`, ...
/// A name counts as taken when any file in `dir` already uses it as its stem,
/// whatever the extension, since the stem is the public id.
fn store_unique(
    source: &Path,
    dir: &Path,
    base: &str,
    extension: &str,
) -> Result<(String, PathBuf), ApplicationError> {
    let mut suffix = 0_u32;
    loop {
        let name = if suffix == 0 {
            base.to_string()
        } else {
            format!("{base}_{suffix}")
        };
        suffix += 1;

        if stem_taken(dir, &name)? {
            continue;
        }
        let target = dir.join(format!("{name}.{extension}"));
        let mut output = match OpenOptions::new().write(true).create_new(true).open(&target) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(error) => return Err(ApplicationError::Io(error.to_string())),
        };
        let mut input =
            File::open(source).map_err(|error| ApplicationError::Io(error.to_string()))?;
        io::copy(&mut input, &mut output)
            .map_err(|error| ApplicationError::Io(error.to_string()))?;
        return Ok((name, target));
    }
}

fn stem_taken(dir: &Path, name: &str) -> Result<bool, ApplicationError> {
    let entries = fs::read_dir(dir).map_err(|error| ApplicationError::Io(error.to_string()))?;
    for entry in entries {
        let entry = entry.map_err(|error| ApplicationError::Io(error.to_string()))?;
        if entry.path().file_stem().and_then(|stem| stem.to_str()) == Some(name) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn sanitize_stem(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
