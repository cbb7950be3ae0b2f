use meme_room_application::{ApplicationError, RenderService};
use meme_room_domain::{CompositionRequest, Crop, Gravity, TextOverlay};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const DEFAULT_DELIVERY_BASE_URL: &str = "https://res.cloudinary.com";

/// Encodes composition requests as Cloudinary image delivery URLs. The
/// service does the cropping and text compositing when the URL is fetched.
#[derive(Debug, Clone)]
pub struct CloudinaryUrlRenderer {
    cloud_name: String,
    base_url: String,
}

impl CloudinaryUrlRenderer {
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            base_url: DEFAULT_DELIVERY_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl RenderService for CloudinaryUrlRenderer {
    fn delivery_url(&self, request: &CompositionRequest) -> Result<String, ApplicationError> {
        if self.cloud_name.trim().is_empty() {
            return Err(ApplicationError::Config(
                "cloud name must not be empty".to_string(),
            ));
        }

        let mut segments = vec![format!(
            "c_{},g_{},h_{},w_{}",
            crop_code(request.crop),
            gravity_code(request.gravity),
            request.height,
            request.width
        )];
        segments.extend(request.overlays.iter().map(text_layer));

        Ok(format!(
            "{}/{}/image/upload/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.cloud_name,
            segments.join("/"),
            request.source.as_str()
        ))
    }
}

fn text_layer(overlay: &TextOverlay) -> String {
    let style = &overlay.style;
    let mut font = format!(
        "{}_{}_{}",
        escape_text(&style.font_family),
        style.font_size,
        style.font_weight
    );
    if style.stroke {
        font.push_str("_stroke");
    }

    format!(
        "l_text:{font}:{text},co_{color},bo_{border},c_{crop},w_{width}/fl_layer_apply,g_{gravity},x_{x},y_{y}",
        text = escape_text(&overlay.text),
        color = style.color,
        border = style.border,
        crop = crop_code(overlay.crop),
        width = overlay.width,
        gravity = gravity_code(overlay.position.gravity),
        x = overlay.position.x,
        y = overlay.position.y,
    )
}

fn crop_code(crop: Crop) -> &'static str {
    match crop {
        Crop::Fill => "fill",
        Crop::Fit => "fit",
    }
}

fn gravity_code(gravity: Gravity) -> &'static str {
    match gravity {
        Gravity::Auto => "auto",
        Gravity::North => "north",
        Gravity::South => "south",
    }
}

/// Everything except RFC 3986 unreserved characters.
const LAYER_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes layer text. Commas and slashes are escaped twice because
/// the service decodes once before splitting transformation parameters.
fn escape_text(text: &str) -> String {
    utf8_percent_encode(text, LAYER_TEXT)
        .to_string()
        .replace("%2C", "%252C")
        .replace("%2F", "%252F")
}

#[cfg(test)]
mod tests {
    use super::*;
    use meme_room_domain::{compose_preview, compose_thumbnail, BackgroundId};

    #[test]
    fn preview_url_contains_base_transform_and_both_layers() {
        let renderer = CloudinaryUrlRenderer::new("demo");
        let request = compose_preview(&BackgroundId::from("meme-backgrounds/cat"), "hi", "there");

        let url = renderer.delivery_url(&request).expect("url");

        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/image/upload/c_fill,g_auto,h_640,w_640/\
             l_text:Source%20Sans%20Pro_80_bold_stroke:hi,co_white,bo_20px_solid_black,c_fit,w_2650/\
             fl_layer_apply,g_north,x_0,y_50/\
             l_text:Source%20Sans%20Pro_80_bold_stroke:there,co_white,bo_20px_solid_black,c_fit,w_2650/\
             fl_layer_apply,g_south,x_0,y_50/\
             meme-backgrounds/cat"
        );
    }

    #[test]
    fn thumbnail_url_has_single_segment() {
        let renderer = CloudinaryUrlRenderer::new("demo").with_base_url("http://cdn.local/");
        let url = renderer
            .delivery_url(&compose_thumbnail(&BackgroundId::from("uploads/abc123")))
            .expect("url");

        assert_eq!(
            url,
            "http://cdn.local/demo/image/upload/c_fill,g_auto,h_150,w_150/uploads/abc123"
        );
    }

    #[test]
    fn caption_text_is_escaped_for_the_url_only() {
        let renderer = CloudinaryUrlRenderer::new("demo");
        let request = compose_preview(&BackgroundId::from("bg"), "50% off, a/b", "é");

        let url = renderer.delivery_url(&request).expect("url");

        assert!(url.contains(":50%25%20off%252C%20a%252Fb,co_white"));
        assert!(url.contains(":%C3%A9,co_white"));
        assert_eq!(request.overlays[0].text, "50% off, a/b");
    }

    #[test]
    fn literal_percent_sequences_are_not_double_escaped() {
        assert_eq!(escape_text("%2C, x"), "%252C%252C%20x");
        assert_eq!(escape_text("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn empty_cloud_name_is_a_config_error() {
        let renderer = CloudinaryUrlRenderer::new("  ");
        let result = renderer.delivery_url(&compose_thumbnail(&BackgroundId::from("bg")));
        assert!(matches!(result, Err(ApplicationError::Config(_))));
    }
}
