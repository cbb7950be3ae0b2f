use meme_room_application::GalleryTile;
use meme_room_domain::{BackgroundEntry, CaptionSlot, Captions};

pub fn present_gallery_row(index: usize, entry: &BackgroundEntry) -> String {
    let marker = if entry.active { '*' } else { ' ' };
    let alt = if entry.alt.is_empty() { "-" } else { entry.alt.as_str() };
    format!("{marker} {index}\t{}\t{alt}", entry.id)
}

pub fn present_tile(index: usize, tile: &GalleryTile) -> String {
    format!("{}\t{}", present_gallery_row(index, &tile.entry), tile.url)
}

pub fn present_captions(captions: &Captions) -> String {
    format!(
        "top: {}\nbottom: {}",
        captions.get(CaptionSlot::Top),
        captions.get(CaptionSlot::Bottom)
    )
}

pub fn present_upload(entry: &BackgroundEntry) -> String {
    format!("registered background {} ({})", entry.id, entry.alt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_row_marks_active_entry() {
        let active = BackgroundEntry::new("uploads/a", "a.png", true);
        let idle = BackgroundEntry::new("uploads/b", "", false);
        assert_eq!(present_gallery_row(0, &active), "* 0\tuploads/a\ta.png");
        assert_eq!(present_gallery_row(1, &idle), "  1\tuploads/b\t-");
    }

    #[test]
    fn tile_appends_url() {
        let tile = GalleryTile {
            entry: BackgroundEntry::new("bg", "sample image", false),
            url: "https://cdn/bg".to_string(),
        };
        assert_eq!(present_tile(2, &tile), "  2\tbg\tsample image\thttps://cdn/bg");
    }

    #[test]
    fn captions_render_on_two_lines() {
        assert_eq!(
            present_captions(&Captions::default()),
            "top: This is a cool\nbottom: meme generator"
        );
    }
}
