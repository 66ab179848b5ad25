//! # Code Generation
//!
//! Converts IR documents to PDF bytes with `printpdf`, using the built-in
//! Helvetica fonts (no font files are embedded).
//!
//! The IR measures from the top-left corner; PDF measures from the
//! bottom-left. Every `y` is flipped against the page height here and
//! nowhere else.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject,
    IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Px, Rect,
};

use super::ops::{Align, Document, FontWeight, Op, Paint, Rgb, StyleState};
use crate::error::BillError;
use crate::layout::PageConfig;
use crate::render::metrics;

const LAYER_NAME: &str = "Layer 1";
const PT_PER_MM: f32 = 72.0 / 25.4;

impl Document {
    /// Compile the document to PDF bytes on A4 pages.
    pub fn to_pdf(&self, title: &str) -> Result<Vec<u8>, BillError> {
        self.to_pdf_with_config(title, &PageConfig::A4)
    }

    /// Compile the document to PDF bytes with a specific page configuration.
    pub fn to_pdf_with_config(&self, title: &str, config: &PageConfig) -> Result<Vec<u8>, BillError> {
        let width = Mm(config.width_mm);
        let height = Mm(config.height_mm);

        let (pdf, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);

        let regular = pdf
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| BillError::Pdf(e.to_string()))?;
        let bold = pdf
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| BillError::Pdf(e.to_string()))?;

        for (index, page) in self.pages.iter().enumerate() {
            let layer = if index == 0 {
                pdf.get_page(first_page).get_layer(first_layer)
            } else {
                let (p, l) = pdf.add_page(width, height, LAYER_NAME);
                pdf.get_page(p).get_layer(l)
            };

            let mut painter = Painter::new(layer, &regular, &bold, config.height_mm);

            for op in page.iter() {
                painter.apply(op, self);
            }
        }

        pdf.save_to_bytes().map_err(|e| BillError::Pdf(e.to_string()))
    }
}

/// Per-page drawing state.
///
/// PDF has one fill colour shared by shapes and text, while the IR keeps a
/// separate text colour; `active_fill` tracks what the layer currently has.
struct Painter<'a> {
    layer: PdfLayerReference,
    regular: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
    page_height: f32,
    fill: Rgb,
    text: Rgb,
    stroke: Rgb,
    line_width: f32,
    active_fill: Option<Rgb>,
    weight: FontWeight,
    size: f32,
}

impl<'a> Painter<'a> {
    /// Start a page in [`StyleState::default`], the state the optimizer
    /// assumes. The layer is set explicitly so PDF defaults never leak in.
    fn new(
        layer: PdfLayerReference,
        regular: &'a IndirectFontRef,
        bold: &'a IndirectFontRef,
        page_height: f32,
    ) -> Self {
        let style = StyleState::default();
        let mut painter = Self {
            layer,
            regular,
            bold,
            page_height,
            fill: style.fill,
            text: style.text,
            stroke: style.stroke,
            line_width: style.line_width,
            active_fill: None,
            weight: style.weight,
            size: style.size,
        };
        painter.layer.set_outline_color(pdf_color(painter.stroke));
        painter
            .layer
            .set_outline_thickness(painter.line_width * PT_PER_MM);
        painter.use_fill(painter.fill);
        painter
    }

    /// Style the layer is in, as the optimizer tracks it.
    #[cfg(test)]
    fn style(&self) -> StyleState {
        StyleState {
            fill: self.fill,
            stroke: self.stroke,
            text: self.text,
            line_width: self.line_width,
            weight: self.weight,
            size: self.size,
        }
    }

    fn apply(&mut self, op: &Op, doc: &Document) {
        match op {
            // ===== Style Changes =====
            Op::SetFillColor(c) => {
                self.fill = *c;
            }
            Op::SetTextColor(c) => {
                self.text = *c;
            }
            Op::SetStrokeColor(c) => {
                self.stroke = *c;
                self.layer.set_outline_color(pdf_color(*c));
            }
            Op::SetLineWidth(w) => {
                self.line_width = *w;
                self.layer.set_outline_thickness(w * PT_PER_MM);
            }
            Op::SetFont { weight, size } => {
                self.weight = *weight;
                self.size = *size;
            }

            // ===== Content =====
            Op::Text {
                x,
                y,
                content,
                align,
            } => {
                let content = ascii_lossy(content);
                let width = metrics::text_width_mm(&content, self.weight, self.size);
                let left = match align {
                    Align::Left => *x,
                    Align::Center => x - width / 2.0,
                    Align::Right => x - width,
                };
                self.use_fill(self.text);
                let font = match self.weight {
                    FontWeight::Normal => self.regular,
                    FontWeight::Bold => self.bold,
                };
                self.layer
                    .use_text(content, self.size, Mm(left), Mm(self.flip(*y)), font);
            }
            Op::Rect {
                x,
                y,
                width,
                height,
                paint,
            } => {
                let mode = match paint {
                    Paint::Fill => PaintMode::Fill,
                    Paint::Stroke => PaintMode::Stroke,
                    Paint::FillStroke => PaintMode::FillStroke,
                };
                if !matches!(paint, Paint::Stroke) {
                    self.use_fill(self.fill);
                }
                let rect = Rect::new(
                    Mm(*x),
                    Mm(self.flip(y + height)),
                    Mm(x + width),
                    Mm(self.flip(*y)),
                )
                .with_mode(mode);
                self.layer.add_rect(rect);
            }
            Op::Line { x1, y1, x2, y2 } => {
                let line = Line {
                    points: vec![
                        (Point::new(Mm(*x1), Mm(self.flip(*y1))), false),
                        (Point::new(Mm(*x2), Mm(self.flip(*y2))), false),
                    ],
                    is_closed: false,
                };
                self.layer.add_line(line);
            }

            // ===== Graphics =====
            Op::Watermark {
                x,
                y,
                width,
                height: box_height,
            } => {
                let Some(watermark) = &doc.watermark else {
                    return;
                };
                let image = Image::from(ImageXObject {
                    width: Px(watermark.width as usize),
                    height: Px(watermark.height as usize),
                    color_space: ColorSpace::Rgb,
                    bits_per_component: ColorBits::Bit8,
                    interpolate: true,
                    image_data: watermark.rgb.clone(),
                    image_filter: None,
                    clipping_bbox: None,
                    smask: None,
                });
                // DPI that makes the pixel width span the requested box width
                let dpi = watermark.width as f32 / (width / 25.4);
                image.add_to_layer(
                    self.layer.clone(),
                    ImageTransform {
                        translate_x: Some(Mm(*x)),
                        translate_y: Some(Mm(self.flip(y + box_height))),
                        dpi: Some(dpi),
                        ..Default::default()
                    },
                );
            }
        }
    }

    fn use_fill(&mut self, color: Rgb) {
        if self.active_fill != Some(color) {
            self.layer.set_fill_color(pdf_color(color));
            self.active_fill = Some(color);
        }
    }

    #[inline]
    fn flip(&self, y: f32) -> f32 {
        self.page_height - y
    }
}

fn pdf_color(c: Rgb) -> Color {
    let (r, g, b) = c.to_unit();
    Color::Rgb(printpdf::Rgb::new(r, g, b, None))
}

/// Built-in fonts only cover Latin-1 reliably; replace anything outside ASCII.
fn ascii_lossy(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Page;

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        let bytes = doc.to_pdf("empty").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_text_and_shapes() {
        let mut doc = Document::new();
        doc.push(Op::SetFillColor(Rgb(46, 204, 113)));
        doc.push(Op::Rect {
            x: 10.0,
            y: 10.0,
            width: 190.0,
            height: 30.0,
            paint: Paint::Fill,
        });
        doc.push(Op::SetTextColor(Rgb::WHITE));
        doc.push(Op::SetFont {
            weight: FontWeight::Bold,
            size: 18.0,
        });
        doc.push(Op::Text {
            x: 105.0,
            y: 25.0,
            content: "FIX PLUS".into(),
            align: Align::Center,
        });
        doc.push(Op::Line {
            x1: 10.0,
            y1: 50.0,
            x2: 200.0,
            y2: 50.0,
        });
        let bytes = doc.to_pdf("shapes").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 200);
    }

    #[test]
    fn test_multi_page() {
        let mut doc = Document::new();
        doc.pages.push(Page::new());
        doc.pages.push(Page::new());
        let bytes = doc.to_pdf("three").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_watermark_without_asset_is_skipped() {
        let mut doc = Document::new();
        doc.push(Op::Watermark {
            x: 50.0,
            y: 100.0,
            width: 110.0,
            height: 110.0,
        });
        assert!(doc.to_pdf("no-asset").is_ok());
    }

    #[test]
    fn test_page_starts_in_optimizer_state() {
        let (pdf, page, layer) = PdfDocument::new("state", Mm(210.0), Mm(297.0), LAYER_NAME);
        let regular = pdf.add_builtin_font(BuiltinFont::Helvetica).unwrap();
        let bold = pdf.add_builtin_font(BuiltinFont::HelveticaBold).unwrap();
        let layer = pdf.get_page(page).get_layer(layer);

        let painter = Painter::new(layer, &regular, &bold, 297.0);
        assert_eq!(painter.style(), StyleState::default());
        assert_eq!(painter.active_fill, Some(StyleState::default().fill));
    }

    #[test]
    fn test_painter_tracks_stroke_changes() {
        let (pdf, page, layer) = PdfDocument::new("stroke", Mm(210.0), Mm(297.0), LAYER_NAME);
        let regular = pdf.add_builtin_font(BuiltinFont::Helvetica).unwrap();
        let bold = pdf.add_builtin_font(BuiltinFont::HelveticaBold).unwrap();
        let layer = pdf.get_page(page).get_layer(layer);
        let doc = Document::new();

        let mut painter = Painter::new(layer, &regular, &bold, 297.0);
        painter.apply(&Op::SetLineWidth(0.6), &doc);
        painter.apply(&Op::SetStrokeColor(Rgb(46, 204, 113)), &doc);
        assert_eq!(painter.style().line_width, 0.6);
        assert_eq!(painter.style().stroke, Rgb(46, 204, 113));
    }

    #[test]
    fn test_ascii_lossy() {
        assert_eq!(ascii_lossy("Rs. 100"), "Rs. 100");
        assert_eq!(ascii_lossy("₹100"), "?100");
    }
}
