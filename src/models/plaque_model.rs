use std::path::PathBuf;

/// Square plaque photo edge, in page units (mm).
pub const IMAGE_SIDE_MM: f32 = 160.0;
/// Distance of the photo from the top edge of the page.
pub const IMAGE_TOP_MM: f32 = 20.0;
/// Padding between the photo and the caption.
pub const CAPTION_GAP_MM: f32 = 10.0;
/// Height of the single-line caption cell.
pub const CAPTION_CELL_HEIGHT_MM: f32 = 10.0;
/// Caption is pushed up to here when it would fall off the page.
pub const BOTTOM_MARGIN_MM: f32 = 20.0;

/// Image formats accepted for plaque uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
}

impl ImageKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "png" => Some(ImageKind::Png),
            _ => None,
        }
    }
}

/// A multipart upload spooled to temporary storage for the duration of
/// one request. The handler owns the backing temp file; this struct only
/// carries what validation needs.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Content type as declared by the client. Trusted as-is, the bytes
    /// are never sniffed.
    pub mime_type: String,
    pub temp_path: PathBuf,
    pub size: usize,
}

impl UploadedImage {
    /// Subtype after the `/` of the declared MIME type, lowercased.
    /// `image/PNG` yields `png`; a malformed type without `/` yields None.
    pub fn extension(&self) -> Option<String> {
        self.mime_type
            .split('/')
            .nth(1)
            .map(|s| s.to_ascii_lowercase())
    }
}

/// Where the photo and the caption land on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementGeometry {
    pub image_x: f32,
    pub image_y: f32,
    pub image_side: f32,
    pub caption_x: f32,
    pub caption_y: f32,
}

impl PlacementGeometry {
    /// Centers the photo horizontally and puts the caption below it,
    /// clamped so the caption cell never runs past the bottom edge.
    pub fn compute(page_width: f32, page_height: f32, caption_width: f32) -> Self {
        let image_x = (page_width - IMAGE_SIDE_MM) / 2.0;
        let caption_x = (page_width - caption_width) / 2.0;

        let mut caption_y = IMAGE_TOP_MM + IMAGE_SIDE_MM + CAPTION_GAP_MM;
        if caption_y + CAPTION_CELL_HEIGHT_MM > page_height {
            caption_y = page_height - BOTTOM_MARGIN_MM;
        }

        PlacementGeometry {
            image_x,
            image_y: IMAGE_TOP_MM,
            image_side: IMAGE_SIDE_MM,
            caption_x,
            caption_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(mime: &str) -> UploadedImage {
        UploadedImage {
            mime_type: mime.to_string(),
            temp_path: PathBuf::from("/tmp/upload"),
            size: 0,
        }
    }

    #[test]
    fn extension_is_lowercased_subtype() {
        assert_eq!(upload("image/png").extension().as_deref(), Some("png"));
        assert_eq!(upload("image/PNG").extension().as_deref(), Some("png"));
        assert_eq!(upload("image/JpEg").extension().as_deref(), Some("jpeg"));
    }

    #[test]
    fn extension_of_malformed_mime_is_none() {
        assert_eq!(upload("png").extension(), None);
        assert_eq!(upload("").extension(), None);
    }

    #[test]
    fn only_png_is_accepted() {
        assert_eq!(ImageKind::from_extension("png"), Some(ImageKind::Png));
        assert_eq!(ImageKind::from_extension("jpeg"), None);
        assert_eq!(ImageKind::from_extension("PNG"), None);
        assert_eq!(ImageKind::from_extension("gif"), None);
    }

    #[test]
    fn image_is_centered_on_a4() {
        let g = PlacementGeometry::compute(210.0, 297.0, 100.0);
        assert_eq!(g.image_x, 25.0);
        assert_eq!(g.image_y, 20.0);
        assert_eq!(g.image_side, 160.0);
    }

    #[test]
    fn caption_sits_below_the_image() {
        let g = PlacementGeometry::compute(210.0, 297.0, 100.0);
        assert_eq!(g.caption_x, 55.0);
        assert_eq!(g.caption_y, 190.0);
    }

    #[test]
    fn caption_is_clamped_on_short_pages() {
        // 190 + 10 > 195, so the caption moves to page_height - 20
        let g = PlacementGeometry::compute(210.0, 195.0, 100.0);
        assert_eq!(g.caption_y, 175.0);
    }
}
