use crate::{default_catalog, BackgroundEntry, BackgroundId, DomainError, UploadResult};

/// Ordered list of selectable backgrounds plus the id currently used for the
/// preview.
///
/// `selected` is tracked separately from the `active` flags: selecting an id
/// that is not in the list still moves the selection there, leaving no entry
/// active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    entries: Vec<BackgroundEntry>,
    selected: Option<BackgroundId>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

impl Gallery {
    pub fn with_default_catalog() -> Self {
        let entries = default_catalog();
        let selected = entries.first().map(|entry| entry.id.clone());
        Self { entries, selected }
    }

    /// Rebuilds a gallery from a stored list. The stored list replaces the
    /// default catalog entirely; the first active entry becomes the selection.
    pub fn restore(entries: Vec<BackgroundEntry>) -> Result<Self, DomainError> {
        if entries.is_empty() {
            return Ok(Self {
                entries,
                selected: None,
            });
        }

        let selected = entries
            .iter()
            .find(|entry| entry.active)
            .map(|entry| entry.id.clone())
            .ok_or(DomainError::NoActiveBackground {
                entries: entries.len(),
            })?;

        Ok(Self {
            entries,
            selected: Some(selected),
        })
    }

    pub fn entries(&self) -> &[BackgroundEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> Option<&BackgroundId> {
        self.selected.as_ref()
    }

    pub fn active_entry(&self) -> Option<&BackgroundEntry> {
        self.entries.iter().find(|entry| entry.active)
    }

    /// Marks `id` as the only active entry. Returns whether any entry matched;
    /// an unmatched id is still recorded as the selection.
    pub fn select(&mut self, id: &BackgroundId) -> bool {
        let mut matched = false;
        for entry in &mut self.entries {
            entry.active = &entry.id == id;
            matched |= entry.active;
        }
        self.selected = Some(id.clone());
        matched
    }

    /// Appends the uploaded asset as the new active entry. Ids are not
    /// deduplicated.
    pub fn register_upload(&mut self, upload: UploadResult) -> &BackgroundEntry {
        for entry in &mut self.entries {
            entry.active = false;
        }
        self.selected = Some(upload.public_id.clone());
        self.entries.push(BackgroundEntry {
            id: upload.public_id,
            alt: upload.original_filename,
            active: true,
        });
        &self.entries[self.entries.len() - 1]
    }
}
