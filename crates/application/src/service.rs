use meme_room_domain::{
    compose_preview, compose_thumbnail, BackgroundEntry, CaptionSlot, Captions,
    CompositionRequest, Gallery,
};
use tracing::{debug, info, warn};

use crate::{
    ApplicationError, BootstrapStoreCommand, GalleryTilesQuery, KeyValueStore, PreviewQuery,
    RegisterUploadCommand, RenderService, ResetSessionCommand, RestoreSessionCommand,
    SelectBackgroundCommand, SetCaptionCommand, UploadBackgroundCommand, UploadService,
    BOTTOM_TEXT_KEY, GALLERY_KEY, TOP_TEXT_KEY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    /// The id matched no entry; the selection points at it anyway.
    Dangling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryTile {
    pub entry: BackgroundEntry,
    pub url: String,
}

/// Page-level session: owns the gallery and captions and writes every change
/// through to the key-value store before it becomes visible.
pub struct MemeSession {
    store: Box<dyn KeyValueStore>,
    uploads: Box<dyn UploadService>,
    renderer: Box<dyn RenderService>,
    gallery: Gallery,
    captions: Captions,
}

impl MemeSession {
    pub fn new(
        store: Box<dyn KeyValueStore>,
        uploads: Box<dyn UploadService>,
        renderer: Box<dyn RenderService>,
    ) -> Self {
        Self {
            store,
            uploads,
            renderer,
            gallery: Gallery::with_default_catalog(),
            captions: Captions::default(),
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn captions(&self) -> &Captions {
        &self.captions
    }

    pub fn bootstrap_store(&self, _command: BootstrapStoreCommand) -> Result<(), ApplicationError> {
        self.store.initialize()
    }

    /// Loads whatever has been persisted. The gallery and the two captions
    /// are restored independently: each slot is applied only if it exists,
    /// and a gallery that fails to load keeps the current one without
    /// stopping the caption steps. The first failure is returned.
    pub fn restore(&mut self, _command: RestoreSessionCommand) -> Result<(), ApplicationError> {
        let gallery = self.restore_gallery();
        let top = self.restore_caption(CaptionSlot::Top);
        let bottom = self.restore_caption(CaptionSlot::Bottom);
        gallery.and(top).and(bottom)
    }

    fn restore_gallery(&mut self) -> Result<(), ApplicationError> {
        let Some(raw) = self.store.get(GALLERY_KEY)? else {
            return Ok(());
        };
        let entries: Vec<BackgroundEntry> = serde_json::from_str(&raw)
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;
        let gallery = Gallery::restore(entries)?;
        debug!(entries = gallery.len(), "restored stored gallery");
        self.gallery = gallery;
        Ok(())
    }

    fn restore_caption(&mut self, slot: CaptionSlot) -> Result<(), ApplicationError> {
        if let Some(text) = self.store.get(caption_key(slot))? {
            self.captions.set(slot, text);
        }
        Ok(())
    }

    pub fn select_background(
        &mut self,
        command: SelectBackgroundCommand,
    ) -> Result<SelectOutcome, ApplicationError> {
        let mut next = self.gallery.clone();
        let matched = next.select(&command.id);
        self.save_gallery(&next)?;
        self.gallery = next;

        if matched {
            info!(id = %command.id, "background selected");
            Ok(SelectOutcome::Selected)
        } else {
            warn!(id = %command.id, "selected background is not in the gallery");
            Ok(SelectOutcome::Dangling)
        }
    }

    pub fn register_upload(
        &mut self,
        command: RegisterUploadCommand,
    ) -> Result<BackgroundEntry, ApplicationError> {
        let mut next = self.gallery.clone();
        let added = next.register_upload(command.result).clone();
        self.save_gallery(&next)?;
        self.gallery = next;

        info!(id = %added.id, alt = %added.alt, "upload registered");
        Ok(added)
    }

    /// Hands the file to the upload collaborator and registers the result. A
    /// failed upload leaves the gallery untouched.
    pub fn upload_background(
        &mut self,
        command: UploadBackgroundCommand,
    ) -> Result<BackgroundEntry, ApplicationError> {
        let result = self.uploads.upload(&command.source)?;
        self.register_upload(RegisterUploadCommand { result })
    }

    pub fn set_caption(&mut self, command: SetCaptionCommand) -> Result<(), ApplicationError> {
        self.store.set(caption_key(command.slot), &command.text)?;
        self.captions.set(command.slot, command.text);
        Ok(())
    }

    /// `None` when nothing is selected, e.g. after restoring an empty gallery.
    pub fn preview_request(&self, _query: PreviewQuery) -> Option<CompositionRequest> {
        self.gallery
            .selected()
            .map(|id| compose_preview(id, &self.captions.top, &self.captions.bottom))
    }

    pub fn preview_url(&self, query: PreviewQuery) -> Result<Option<String>, ApplicationError> {
        self.preview_request(query)
            .map(|request| self.renderer.delivery_url(&request))
            .transpose()
    }

    pub fn gallery_tiles(
        &self,
        _query: GalleryTilesQuery,
    ) -> Result<Vec<GalleryTile>, ApplicationError> {
        self.gallery
            .entries()
            .iter()
            .map(|entry| {
                let url = self.renderer.delivery_url(&compose_thumbnail(&entry.id))?;
                Ok(GalleryTile {
                    entry: entry.clone(),
                    url,
                })
            })
            .collect()
    }

    /// Drops every persisted slot and returns to the default catalog and
    /// captions.
    pub fn reset(&mut self, _command: ResetSessionCommand) -> Result<(), ApplicationError> {
        for key in [GALLERY_KEY, TOP_TEXT_KEY, BOTTOM_TEXT_KEY] {
            self.store.remove(key)?;
        }
        self.gallery = Gallery::with_default_catalog();
        self.captions = Captions::default();
        info!("session reset to defaults");
        Ok(())
    }

    fn save_gallery(&self, gallery: &Gallery) -> Result<(), ApplicationError> {
        let json = serde_json::to_string(gallery.entries())
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        self.store.set(GALLERY_KEY, &json)
    }
}

fn caption_key(slot: CaptionSlot) -> &'static str {
    match slot {
        CaptionSlot::Top => TOP_TEXT_KEY,
        CaptionSlot::Bottom => BOTTOM_TEXT_KEY,
    }
}
