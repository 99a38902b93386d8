//! Thin drawing surface over printpdf.
//!
//! Coordinates are millimetres from the top-left corner of the page.
//! printpdf wants points from the bottom-left, the conversion happens
//! here so callers never see it.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference,
};
use thiserror::Error;

use crate::models::plaque_model::ImageKind;

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

const MM_PER_PT: f32 = 25.4 / 72.0;
const MM_PER_INCH: f32 = 25.4;

/// Images are embedded at this resolution; scale factors are derived
/// from it so the placed size is exact regardless of pixel dimensions.
const IMAGE_DPI: f32 = 300.0;

/// Cursor advance for a line break when no font has been selected yet.
const DEFAULT_LINE_HEIGHT_MM: f32 = 5.0;

const PAGE_MARGIN_MM: f32 = 10.0;

/// Failure while assembling a document. The inner cause, when present,
/// is reachable through `std::error::Error::source`.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to open image file: {path}")]
    ImageFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image data")]
    ImageDecode {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("no font selected before drawing text")]
    FontNotSet,

    #[error("failed to assemble pdf document")]
    Document {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

struct ActiveFont {
    font: IndirectFontRef,
    size_pt: f32,
}

/// One-page A4 canvas with a drawing cursor.
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: Option<ActiveFont>,
    cursor_x: f32,
    cursor_y: f32,
}

impl PdfCanvas {
    /// Blank document with a single A4 portrait page.
    pub fn a4(title: &str) -> Self {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
        let layer = doc.get_page(page).get_layer(layer);
        PdfCanvas {
            doc,
            layer,
            font: None,
            cursor_x: PAGE_MARGIN_MM,
            cursor_y: PAGE_MARGIN_MM,
        }
    }

    pub fn page_width(&self) -> f32 {
        A4_WIDTH_MM
    }

    pub fn page_height(&self) -> f32 {
        A4_HEIGHT_MM
    }

    /// Moves the cursor down one line. Drawing operations take absolute
    /// positions, so this only affects cursor-relative calls.
    pub fn line_break(&mut self) {
        let advance = self
            .font
            .as_ref()
            .map(|f| f.size_pt * MM_PER_PT)
            .unwrap_or(DEFAULT_LINE_HEIGHT_MM);
        self.cursor_x = PAGE_MARGIN_MM;
        self.cursor_y += advance;
    }

    /// Decodes the file at `path` as `kind` and draws it with its top-left
    /// corner at (x, y), scaled to width × height mm.
    pub fn place_image(
        &mut self,
        path: &Path,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        kind: ImageKind,
    ) -> Result<(), PdfError> {
        let file = File::open(path).map_err(|e| PdfError::ImageFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        let image = match kind {
            ImageKind::Png => {
                let decoder = PngDecoder::new(reader).map_err(|e| PdfError::ImageDecode {
                    source: Box::new(e),
                })?;
                Image::try_from(decoder).map_err(|e| PdfError::ImageDecode {
                    source: Box::new(e),
                })?
            }
        };

        let native_width_mm = image.image.width.0 as f32 * MM_PER_INCH / IMAGE_DPI;
        let native_height_mm = image.image.height.0 as f32 * MM_PER_INCH / IMAGE_DPI;

        let transform = ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(A4_HEIGHT_MM - y - height)),
            scale_x: Some(width / native_width_mm),
            scale_y: Some(height / native_height_mm),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        };
        image.add_to_layer(self.layer.clone(), transform);
        Ok(())
    }

    /// Selects the built-in Helvetica-Bold font at `size_pt` for all
    /// following text operations.
    pub fn set_bold_font(&mut self, size_pt: f32) -> Result<(), PdfError> {
        let font = self
            .doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| PdfError::Document {
                source: Box::new(e),
            })?;
        self.font = Some(ActiveFont { font, size_pt });
        Ok(())
    }

    /// Width of `text` in the current font, in mm. Zero when no font has
    /// been selected.
    pub fn string_width(&self, text: &str) -> f32 {
        match &self.font {
            Some(f) => super::font_metrics::helvetica_bold_width_mm(text, f.size_pt),
            None => 0.0,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Draws `text` centered in a borderless cell of width × height mm at
    /// the cursor. The cursor does not advance.
    pub fn text_cell(&mut self, width: f32, height: f32, text: &str) -> Result<(), PdfError> {
        let font = self.font.as_ref().ok_or(PdfError::FontNotSet)?;

        let text_width = super::font_metrics::helvetica_bold_width_mm(text, font.size_pt);
        let text_x = self.cursor_x + (width - text_width) / 2.0;

        // Baseline rule for a single line: mid-cell plus 0.3x the font size.
        let font_size_mm = font.size_pt * MM_PER_PT;
        let baseline_y = self.cursor_y + height / 2.0 + 0.3 * font_size_mm;

        self.layer.use_text(
            text,
            font.size_pt,
            Mm(text_x),
            Mm(A4_HEIGHT_MM - baseline_y),
            &font.font,
        );
        Ok(())
    }

    /// Finalizes the document and returns the encoded bytes.
    pub fn finish(self) -> Result<Vec<u8>, PdfError> {
        self.doc.save_to_bytes().map_err(|e| PdfError::Document {
            source: Box::new(e),
        })
    }
}
