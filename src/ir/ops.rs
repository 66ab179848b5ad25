//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for invoice
//! pages. A page is a sequence of absolute drawing ops that can be
//! inspected, optimized, and compiled to PDF.
//!
//! ## Design Philosophy
//!
//! The IR sits between the page renderer and the PDF encoder:
//!
//! ```text
//! Renderer → IR (inspectable) → Optimizer → Codegen → PDF bytes
//! ```
//!
//! Coordinates are millimetres from the top-left corner of the page; `y`
//! of a `Text` op is the text baseline. Style changes are individual ops
//! (not combined) to enable fine-grained optimization.

use serde::Serialize;

use crate::render::watermark::Watermark;

/// RGB colour, 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Channels scaled to 0.0..=1.0.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

/// Font weight. Both map to the built-in Helvetica family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Horizontal anchor of a text op's `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// How a rectangle is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Paint {
    Fill,
    Stroke,
    FillStroke,
}

/// Style state tracked for optimization.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    pub fill: Rgb,
    pub stroke: Rgb,
    pub text: Rgb,
    pub line_width: f32,
    pub weight: FontWeight,
    pub size: f32,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            fill: Rgb::BLACK,
            stroke: Rgb::BLACK,
            text: Rgb::BLACK,
            line_width: 0.2,
            weight: FontWeight::Normal,
            size: 16.0,
        }
    }
}

/// IR opcodes - the drawing commands of one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Op {
    // ========== Style Changes ==========
    /// Fill colour for rectangles.
    SetFillColor(Rgb),

    /// Stroke colour for lines and rectangle borders.
    SetStrokeColor(Rgb),

    /// Colour for text.
    SetTextColor(Rgb),

    /// Stroke width in millimetres.
    SetLineWidth(f32),

    /// Font weight and size in points.
    SetFont { weight: FontWeight, size: f32 },

    // ========== Content ==========
    /// Single line of text with its baseline at `y`.
    Text {
        x: f32,
        y: f32,
        content: String,
        align: Align,
    },

    /// Axis-aligned rectangle, `(x, y)` is the top-left corner.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        paint: Paint,
    },

    /// Straight line segment.
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },

    // ========== Graphics ==========
    /// The document's watermark image, placed in the given box.
    Watermark {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl Op {
    /// Whether this op only changes style state.
    pub fn is_style(&self) -> bool {
        matches!(
            self,
            Op::SetFillColor(_)
                | Op::SetStrokeColor(_)
                | Op::SetTextColor(_)
                | Op::SetLineWidth(_)
                | Op::SetFont { .. }
        )
    }
}

/// One physical page.
///
/// Style state does not carry over between pages; every page starts from
/// [`StyleState::default`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub ops: Vec<Op>,
}

impl Page {
    /// Create an empty page.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Add an op to the page.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Get the number of ops on the page.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over ops.
    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Text content of every `Text` op, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            Op::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }

    /// Whether any `Text` op on the page contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

/// A rendered invoice: ordered pages plus the image assets they reference.
///
/// A new document already has one open page, so the first content drawn
/// lands on page 1 without an explicit [`Document::add_page`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub pages: Vec<Page>,
    #[serde(skip)]
    pub watermark: Option<Watermark>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with one open, empty page.
    pub fn new() -> Self {
        Self {
            pages: vec![Page::new()],
            watermark: None,
        }
    }

    /// Attach the watermark image drawn by `Op::Watermark`.
    pub fn with_watermark(mut self, watermark: Option<Watermark>) -> Self {
        self.watermark = watermark;
        self
    }

    /// Start a new page; subsequent ops go there.
    pub fn add_page(&mut self) {
        self.pages.push(Page::new());
    }

    /// Add an op to the current (last) page.
    pub fn push(&mut self, op: Op) {
        // `new()` guarantees at least one page
        if let Some(page) = self.pages.last_mut() {
            page.push(op);
        }
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
