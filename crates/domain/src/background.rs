use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

const SAMPLE_ALT: &str = "sample image";

const CATALOG_IDS: [&str; 3] = [
    "meme-backgrounds/5cwx89t4-1389586191_lfcpaf",
    "meme-backgrounds/85f2cb5f-44f8-4f2f-a813-63e657e11acc_5065cac7_g2zw1m",
    "meme-backgrounds/4a5001b7beea096457f480c8808572428b-09-roll-safe.2x.h473.w710_d3sfdy",
];

/// Reference the image service uses to locate an asset. Opaque: any string is
/// accepted, including ids that no longer exist remotely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackgroundId(String);

impl BackgroundId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BackgroundId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BackgroundId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BackgroundId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundEntry {
    pub id: BackgroundId,
    pub alt: String,
    pub active: bool,
}

impl BackgroundEntry {
    pub fn new(id: impl Into<BackgroundId>, alt: impl Into<String>, active: bool) -> Self {
        Self {
            id: id.into(),
            alt: alt.into(),
            active,
        }
    }
}

/// What the upload collaborator reports once an asset is stored remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub public_id: BackgroundId,
    pub original_filename: String,
}

/// Built-in backgrounds used when nothing has been persisted yet. The first
/// one starts out active.
pub fn default_catalog() -> Vec<BackgroundEntry> {
    CATALOG_IDS
        .iter()
        .enumerate()
        .map(|(index, id)| BackgroundEntry::new(*id, SAMPLE_ALT, index == 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_three_entries_with_first_active() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 3);
        assert!(catalog[0].active);
        assert!(!catalog[1].active);
        assert!(!catalog[2].active);
        assert!(catalog.iter().all(|entry| entry.alt == "sample image"));
    }

    #[test]
    fn entry_serializes_with_stored_field_names() {
        let entry = BackgroundEntry::new("uploads/abc123", "cat.png", true);
        let json = serde_json::to_string(&entry).expect("serialize");
        assert_eq!(
            json,
            r#"{"id":"uploads/abc123","alt":"cat.png","active":true}"#
        );
    }

    #[test]
    fn stored_list_decodes_in_order() {
        let json = r#"[
            {"id":"a","alt":"first","active":false},
            {"id":"b","alt":"","active":true}
        ]"#;
        let entries: Vec<BackgroundEntry> = serde_json::from_str(json).expect("decode");
        assert_eq!(
            entries,
            vec![
                BackgroundEntry::new("a", "first", false),
                BackgroundEntry::new("b", "", true),
            ]
        );
    }
}
