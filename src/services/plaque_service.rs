use std::path::Path;

use crate::models::plaque_model::{ImageKind, PlacementGeometry, CAPTION_CELL_HEIGHT_MM};
use crate::utils::pdf_canvas::{PdfCanvas, PdfError};

pub const CAPTION_TEXT: &str = "Thank you for using mesplaques. See you soon!";
pub const CAPTION_FONT_SIZE_PT: f32 = 16.0;

const DOCUMENT_TITLE: &str = "Mesplaques";

pub struct PlaqueService;

impl PlaqueService {
    /// Builds the one-page plaque preview: the uploaded photo centered
    /// near the top, the thank-you caption centered below it.
    ///
    /// CPU-bound; callers on the async runtime should wrap this in
    /// `spawn_blocking`.
    pub fn generate_preview(image_path: &Path, kind: ImageKind) -> Result<Vec<u8>, PdfError> {
        let mut canvas = PdfCanvas::a4(DOCUMENT_TITLE);
        canvas.line_break();

        canvas.set_bold_font(CAPTION_FONT_SIZE_PT)?;
        let caption_width = canvas.string_width(CAPTION_TEXT);

        let geometry = PlacementGeometry::compute(
            canvas.page_width(),
            canvas.page_height(),
            caption_width,
        );

        canvas.place_image(
            image_path,
            geometry.image_x,
            geometry.image_y,
            geometry.image_side,
            geometry.image_side,
            kind,
        )?;

        canvas.set_position(geometry.caption_x, geometry.caption_y);
        canvas.text_cell(caption_width, CAPTION_CELL_HEIGHT_MM, CAPTION_TEXT)?;

        canvas.finish()
    }
}
