//! # Page Renderer
//!
//! Draws one physical page of one invoice copy into the current page of a
//! [`Document`].
//!
//! ## Page Anatomy
//!
//! ```text
//!  first page                          continuation page
//! ┌──────────────────────────────┐    ┌──────────────────────────────┐
//! │ GSTIN   CASH BILL      Mob   │    │      BUSINESS NAME           │
//! │        BUSINESS NAME         │    │  CUSTOMER COPY - Page 2 of 3 │
//! │   tagline / address / copy   │    ├──────────────────────────────┤
//! ├──────────────────────────────┤    │ Bill No.   Vehicle No.  Date │
//! │ No.                     Date │    │ ┌──────────────────────────┐ │
//! │ ┌ customer / vehicle ──────┐ │    │ │ item table               │ │
//! │ └──────────────────────────┘ │    │ └──────────────────────────┘ │
//! │ ┌ item table ──────────────┐ │    │    totals or "Continued"     │
//! │ └──────────────────────────┘ │    │                              │
//! │    totals or "Continued"     │    │                              │
//! ├──────────────────────────────┤    ├──────────────────────────────┤
//! │ footer                       │    │ footer                       │
//! └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! Vertical positions are fixed offsets from the top of the page; the
//! footer sits at [`PageConfig::footer_top_mm`]. [`check_fits`] verifies a
//! configuration's capacities keep full pages clear of the footer.

use crate::error::BillError;
use crate::invoice::tax::half_rate_label;
use crate::invoice::{CopyKind, InvoiceHeader, LineItem};
use crate::ir::{Align, Document, FontWeight, Op, Paint, Rgb};
use crate::layout::PageConfig;
use crate::shop::ShopProfile;

// ============================================================================
// GEOMETRY
// ============================================================================

/// Brand colour of the header band, table header and rules.
pub const GREEN: Rgb = Rgb(46, 204, 113);

/// Background of shaded item rows.
pub const ROW_SHADE: Rgb = Rgb(235, 250, 241);

/// Particulars longer than this are shortened.
pub const PARTICULARS_MAX_CHARS: usize = 55;

/// Characters kept before the ellipsis when shortening.
const PARTICULARS_KEEP_CHARS: usize = 52;

const BAND_TOP: f32 = 10.0;
const FIRST_BAND_HEIGHT: f32 = 36.0;
const CONTINUATION_BAND_HEIGHT: f32 = 18.0;

const DETAIL_TOP: f32 = 56.0;
const DETAIL_HEIGHT: f32 = 21.0;
const DETAIL_ROW: f32 = 6.0;

const CONTINUATION_TABLE_TOP: f32 = 40.0;
const TABLE_GAP: f32 = 4.0;
const TABLE_HEADER_HEIGHT: f32 = 8.0;

/// Space below the table used by totals, words and signature.
pub const TOTALS_BLOCK_HEIGHT: f32 = 55.0;

/// Inset of text from the bordered content edges.
const TEXT_INSET: f32 = 4.0;

const WATERMARK_WIDTH: f32 = 110.0;

const FOOTER_NOTE_TOP: f32 = 9.5;
const FOOTER_NOTE_SPACING: f32 = 4.0;
const FOOTER_BOTTOM_MARGIN: f32 = 3.0;

const BODY_SIZE: f32 = 10.0;
const SMALL_SIZE: f32 = 9.0;
const TRUNCATED_SIZE: f32 = 8.0;

/// Height of the customer/vehicle block.
fn detail_height(header: &InvoiceHeader) -> f32 {
    if header.customer_gstin.is_some() {
        DETAIL_HEIGHT + DETAIL_ROW
    } else {
        DETAIL_HEIGHT
    }
}

/// Top of the item table on the first page of a copy.
fn first_table_top(header: &InvoiceHeader) -> f32 {
    DETAIL_TOP + detail_height(header) + TABLE_GAP
}

/// Check that full pages at the configured capacities, totals included,
/// end above the footer band, and that `footer_notes` lines of footer
/// copy stay above the bottom page margin.
///
/// The worst case for a first page is a customer with a GSTIN, which
/// makes the detail block one row taller.
pub fn check_fits(config: &PageConfig, footer_notes: usize) -> Result<(), BillError> {
    let footer_bottom = footer_note_baseline(config, footer_notes.max(1) - 1);
    let limit = config.height_mm - FOOTER_BOTTOM_MARGIN;
    if footer_notes > 0 && footer_bottom > limit {
        return Err(BillError::Layout(format!(
            "{} footer notes end at {:.1}mm, below the {:.1}mm limit",
            footer_notes, footer_bottom, limit
        )));
    }

    let worst_first_top = DETAIL_TOP + DETAIL_HEIGHT + DETAIL_ROW + TABLE_GAP;
    let pages = [
        ("first page", worst_first_top, config.first_page_capacity),
        (
            "continuation page",
            CONTINUATION_TABLE_TOP,
            config.continuation_capacity,
        ),
    ];

    for (name, table_top, capacity) in pages {
        let bottom = table_top
            + TABLE_HEADER_HEIGHT
            + capacity as f32 * config.row_height_mm
            + TOTALS_BLOCK_HEIGHT;
        if bottom > config.footer_top_mm {
            return Err(BillError::Layout(format!(
                "{} with {} items ends at {:.1}mm, below the footer at {}mm",
                name, capacity, bottom, config.footer_top_mm
            )));
        }
    }
    Ok(())
}

/// Baseline of footer note `index`.
fn footer_note_baseline(config: &PageConfig, index: usize) -> f32 {
    config.footer_top_mm + FOOTER_NOTE_TOP + FOOTER_NOTE_SPACING * index as f32
}

/// Shorten long particulars. Returns the text and its font size.
pub fn fit_particulars(text: &str) -> (String, f32) {
    if text.chars().count() > PARTICULARS_MAX_CHARS {
        let kept: String = text.chars().take(PARTICULARS_KEEP_CHARS).collect();
        (format!("{}...", kept), TRUNCATED_SIZE)
    } else {
        (text.to_string(), BODY_SIZE)
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Everything shared by all pages of both copies.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub shop: &'a ShopProfile,
    pub config: &'a PageConfig,
    pub header: &'a InvoiceHeader,
    pub items: &'a [LineItem],
}

/// Where a page sits within its copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRole {
    pub copy: CopyKind,
    pub is_first: bool,
    pub is_last: bool,
    /// 1-based, restarting for each copy.
    pub page_number: usize,
    pub total_pages: usize,
    /// Index of this page's first item in the full item list.
    pub start: usize,
}

/// Horizontal anchors derived from the page config.
struct Columns {
    left: f32,
    right: f32,
    width: f32,
    center: f32,
    text_left: f32,
    text_right: f32,
    particulars: f32,
    qty: f32,
    totals_label: f32,
}

impl Columns {
    fn new(config: &PageConfig) -> Self {
        let left = config.margin_mm;
        let right = config.right_mm();
        Self {
            left,
            right,
            width: config.content_width_mm(),
            center: config.center_x_mm(),
            text_left: left + TEXT_INSET,
            text_right: right - TEXT_INSET,
            particulars: left + 18.0,
            qty: right - 50.0,
            totals_label: right - 60.0,
        }
    }
}

/// Draw one page into the document's current page.
///
/// `items` is this page's slice; row numbers come from `role.start` so
/// numbering continues across pages of a copy.
pub fn render_page(doc: &mut Document, ctx: &RenderContext<'_>, items: &[LineItem], role: &PageRole) {
    let cols = Columns::new(ctx.config);

    draw_watermark(doc, ctx.config, &cols);

    let table_top = if role.is_first {
        draw_first_header(doc, ctx, role, &cols);
        draw_detail_block(doc, ctx.header, &cols);
        first_table_top(ctx.header)
    } else {
        draw_continuation_header(doc, ctx, role, &cols);
        CONTINUATION_TABLE_TOP
    };

    let table_bottom = draw_table(doc, items, role.start, table_top, ctx.config, &cols);

    if role.is_last {
        draw_totals(doc, ctx.header, table_bottom, &cols);
    } else {
        font(doc, FontWeight::Normal, SMALL_SIZE);
        text(
            doc,
            cols.text_right,
            table_bottom + 6.0,
            "Continued on next page...",
            Align::Right,
        );
    }

    draw_footer(doc, ctx.shop, ctx.config, &cols);
}

fn draw_watermark(doc: &mut Document, config: &PageConfig, cols: &Columns) {
    let Some(mark) = &doc.watermark else {
        return;
    };
    let height = mark.height_for_width(WATERMARK_WIDTH);
    let center_y = config.height_mm * 0.54;
    doc.push(Op::Watermark {
        x: cols.center - WATERMARK_WIDTH / 2.0,
        y: center_y - height / 2.0,
        width: WATERMARK_WIDTH,
        height,
    });
}

fn draw_first_header(doc: &mut Document, ctx: &RenderContext<'_>, role: &PageRole, cols: &Columns) {
    let shop = ctx.shop;
    let header = ctx.header;

    doc.push(Op::SetFillColor(GREEN));
    doc.push(Op::Rect {
        x: cols.left,
        y: BAND_TOP,
        width: cols.width,
        height: FIRST_BAND_HEIGHT,
        paint: Paint::Fill,
    });

    doc.push(Op::SetTextColor(Rgb::WHITE));
    font(doc, FontWeight::Normal, SMALL_SIZE);
    text(doc, cols.text_left, 16.0, &format!("GSTIN: {}", shop.gstin), Align::Left);
    for (i, phone) in shop.phones.iter().take(2).enumerate() {
        let line = if i == 0 {
            format!("Mob: {}", phone)
        } else {
            phone.clone()
        };
        text(doc, cols.text_right, 16.0 + 4.5 * i as f32, &line, Align::Right);
    }

    font(doc, FontWeight::Bold, BODY_SIZE);
    text(doc, cols.center, 16.0, &header.bill_type, Align::Center);

    font(doc, FontWeight::Bold, 18.0);
    text(doc, cols.center, 27.0, &shop.business_name, Align::Center);
    font(doc, FontWeight::Normal, BODY_SIZE);
    text(doc, cols.center, 33.0, &shop.tagline, Align::Center);
    font(doc, FontWeight::Normal, SMALL_SIZE);
    text(doc, cols.center, 38.5, &shop.address, Align::Center);

    let label = if role.total_pages > 1 {
        format!(
            "{} - Page {} of {}",
            role.copy.label(),
            role.page_number,
            role.total_pages
        )
    } else {
        role.copy.label().to_string()
    };
    font(doc, FontWeight::Bold, SMALL_SIZE);
    text(doc, cols.center, 44.0, &label, Align::Center);

    doc.push(Op::SetTextColor(Rgb::BLACK));
    font(doc, FontWeight::Bold, BODY_SIZE);
    text(doc, cols.text_left, 53.0, &format!("No. {}", header.bill_number), Align::Left);
    font(doc, FontWeight::Normal, BODY_SIZE);
    text(
        doc,
        cols.text_right,
        53.0,
        &format!("Date: {}", header.display_date()),
        Align::Right,
    );
}

fn draw_detail_block(doc: &mut Document, header: &InvoiceHeader, cols: &Columns) {
    doc.push(Op::SetStrokeColor(GREEN));
    doc.push(Op::SetLineWidth(0.3));
    doc.push(Op::Rect {
        x: cols.left,
        y: DETAIL_TOP,
        width: cols.width,
        height: detail_height(header),
        paint: Paint::Stroke,
    });

    doc.push(Op::SetTextColor(Rgb::BLACK));
    font(doc, FontWeight::Normal, BODY_SIZE);
    let row = |n: f32| DETAIL_TOP + DETAIL_ROW * (n + 1.0);
    text(
        doc,
        cols.text_left,
        row(0.0),
        &format!("Customer Name: {}", header.customer_name),
        Align::Left,
    );
    text(
        doc,
        cols.text_left,
        row(1.0),
        &format!("Cell/Tele No: {}", header.customer_phone),
        Align::Left,
    );
    text(
        doc,
        cols.text_left,
        row(2.0),
        &format!("Vehicle Make: {}", header.vehicle_make),
        Align::Left,
    );
    text(
        doc,
        cols.center + 10.0,
        row(2.0),
        &format!("Vehicle No: {}", header.vehicle_number),
        Align::Left,
    );
    if let Some(gstin) = &header.customer_gstin {
        text(
            doc,
            cols.text_left,
            row(3.0),
            &format!("Customer GSTIN: {}", gstin),
            Align::Left,
        );
    }
}

fn draw_continuation_header(
    doc: &mut Document,
    ctx: &RenderContext<'_>,
    role: &PageRole,
    cols: &Columns,
) {
    doc.push(Op::SetFillColor(GREEN));
    doc.push(Op::Rect {
        x: cols.left,
        y: BAND_TOP,
        width: cols.width,
        height: CONTINUATION_BAND_HEIGHT,
        paint: Paint::Fill,
    });

    doc.push(Op::SetTextColor(Rgb::WHITE));
    font(doc, FontWeight::Bold, 14.0);
    text(doc, cols.center, 18.0, &ctx.shop.business_name, Align::Center);
    font(doc, FontWeight::Normal, SMALL_SIZE);
    text(
        doc,
        cols.center,
        24.5,
        &format!(
            "{} - Page {} of {}",
            role.copy.label(),
            role.page_number,
            role.total_pages
        ),
        Align::Center,
    );

    // Recap line
    doc.push(Op::SetTextColor(Rgb::BLACK));
    let header = ctx.header;
    text(doc, cols.text_left, 35.0, &format!("Bill No. {}", header.bill_number), Align::Left);
    text(
        doc,
        cols.center,
        35.0,
        &format!("Vehicle No: {}", header.vehicle_number),
        Align::Center,
    );
    text(
        doc,
        cols.text_right,
        35.0,
        &format!("Date: {}", header.display_date()),
        Align::Right,
    );
}

/// Draw the item table. Returns the y of its bottom edge.
fn draw_table(
    doc: &mut Document,
    items: &[LineItem],
    start: usize,
    top: f32,
    config: &PageConfig,
    cols: &Columns,
) -> f32 {
    let row_height = config.row_height_mm;
    // Baseline sits at the same proportion of the row as 4.3mm of 6mm
    let baseline = row_height * 0.72;

    doc.push(Op::SetFillColor(GREEN));
    doc.push(Op::SetStrokeColor(GREEN));
    doc.push(Op::SetLineWidth(0.2));
    doc.push(Op::Rect {
        x: cols.left,
        y: top,
        width: cols.width,
        height: TABLE_HEADER_HEIGHT,
        paint: Paint::FillStroke,
    });

    doc.push(Op::SetTextColor(Rgb::WHITE));
    font(doc, FontWeight::Bold, BODY_SIZE);
    let header_y = top + 5.5;
    text(doc, cols.text_left, header_y, "No.", Align::Left);
    text(doc, cols.particulars, header_y, "Particulars", Align::Left);
    text(doc, cols.qty, header_y, "Qty", Align::Left);
    text(doc, cols.text_right, header_y, "Amount", Align::Right);

    doc.push(Op::SetTextColor(Rgb::BLACK));
    let rows_top = top + TABLE_HEADER_HEIGHT;
    for (i, item) in items.iter().enumerate() {
        let y = rows_top + i as f32 * row_height;

        if i % 2 == 0 {
            doc.push(Op::SetFillColor(ROW_SHADE));
            doc.push(Op::Rect {
                x: cols.left,
                y,
                width: cols.width,
                height: row_height,
                paint: Paint::Fill,
            });
        }

        font(doc, FontWeight::Normal, BODY_SIZE);
        text(doc, cols.text_left, y + baseline, &(start + i + 1).to_string(), Align::Left);

        let (particulars, size) = fit_particulars(&item.particulars);
        font(doc, FontWeight::Normal, size);
        text(doc, cols.particulars, y + baseline, &particulars, Align::Left);

        font(doc, FontWeight::Normal, BODY_SIZE);
        text(doc, cols.qty, y + baseline, &item.qty, Align::Left);
        text(doc, cols.text_right, y + baseline, &item.amount, Align::Right);

        doc.push(Op::SetStrokeColor(GREEN));
        doc.push(Op::SetLineWidth(0.2));
        doc.push(Op::Line {
            x1: cols.left,
            y1: y + row_height,
            x2: cols.right,
            y2: y + row_height,
        });
    }

    rows_top + items.len() as f32 * row_height
}

fn draw_totals(doc: &mut Document, header: &InvoiceHeader, table_bottom: f32, cols: &Columns) {
    let base = table_bottom + 7.0;
    let half = half_rate_label(header.gst_rate);

    doc.push(Op::SetTextColor(Rgb::BLACK));
    font(doc, FontWeight::Bold, BODY_SIZE);
    let rows = [
        ("Basic:".to_string(), &header.basic),
        (format!("SGST {}:", half), &header.sgst),
        (format!("CGST {}:", half), &header.cgst),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        let y = base + 5.5 * i as f32;
        text(doc, cols.totals_label, y, label, Align::Left);
        text(doc, cols.text_right, y, value, Align::Right);
    }

    doc.push(Op::SetStrokeColor(GREEN));
    doc.push(Op::SetLineWidth(0.6));
    doc.push(Op::Line {
        x1: cols.totals_label - 5.0,
        y1: base + 14.0,
        x2: cols.right - 2.0,
        y2: base + 14.0,
    });

    font(doc, FontWeight::Bold, 12.0);
    text(doc, cols.totals_label, base + 20.0, "Total:", Align::Left);
    text(doc, cols.text_right, base + 20.0, &header.grand_total, Align::Right);

    font(doc, FontWeight::Normal, BODY_SIZE);
    text(
        doc,
        cols.text_left,
        base + 28.0,
        &format!("Received Rupees: {}", header.amount_in_words),
        Align::Left,
    );

    // Signature
    let sig_left = cols.right - 50.0;
    doc.push(Op::SetStrokeColor(Rgb::BLACK));
    doc.push(Op::SetLineWidth(0.3));
    doc.push(Op::Line {
        x1: sig_left,
        y1: base + 42.0,
        x2: cols.text_right,
        y2: base + 42.0,
    });
    font(doc, FontWeight::Normal, SMALL_SIZE);
    text(
        doc,
        (sig_left + cols.text_right) / 2.0,
        base + 46.5,
        "Authorised Signature",
        Align::Center,
    );
}

fn draw_footer(doc: &mut Document, shop: &ShopProfile, config: &PageConfig, cols: &Columns) {
    let top = config.footer_top_mm;

    doc.push(Op::SetStrokeColor(GREEN));
    doc.push(Op::SetLineWidth(0.4));
    doc.push(Op::Line {
        x1: cols.left,
        y1: top,
        x2: cols.right,
        y2: top,
    });

    doc.push(Op::SetTextColor(Rgb::BLACK));
    font(doc, FontWeight::Normal, SMALL_SIZE);
    text(doc, cols.center, top + 5.0, &shop.footer_tagline, Align::Center);

    font(doc, FontWeight::Normal, 7.0);
    for (i, note) in shop.footer_notes.iter().enumerate() {
        text(doc, cols.center, footer_note_baseline(config, i), note, Align::Center);
    }
}

#[inline]
fn font(doc: &mut Document, weight: FontWeight, size: f32) {
    doc.push(Op::SetFont { weight, size });
}

#[inline]
fn text(doc: &mut Document, x: f32, y: f32, content: &str, align: Align) {
    doc.push(Op::Text {
        x,
        y,
        content: content.to_string(),
        align,
    });
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Page;
    use crate::render::watermark::Watermark;
    use chrono::NaiveDate;
    use image::{DynamicImage, RgbImage};

    fn header(gstin: Option<&str>) -> InvoiceHeader {
        InvoiceHeader {
            bill_type: "CASH BILL".into(),
            bill_number: 186,
            bill_date: NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
            customer_name: "Ravi Kumar".into(),
            customer_phone: "9876543210".into(),
            customer_gstin: gstin.map(String::from),
            vehicle_make: "Maruti Swift".into(),
            vehicle_number: "KA10AB1234".into(),
            gst_rate: 0.18,
            basic: "338.98".into(),
            sgst: "30.51".into(),
            cgst: "30.51".into(),
            grand_total: "400.00".into(),
            amount_in_words: "Four Hundred Rupees Only".into(),
        }
    }

    fn items(n: usize) -> Vec<LineItem> {
        (0..n)
            .map(|i| LineItem {
                no: i + 1,
                particulars: format!("Part {}", i + 1),
                qty: "1".into(),
                amount: "10.00".into(),
            })
            .collect()
    }

    fn role(is_first: bool, is_last: bool) -> PageRole {
        PageRole {
            copy: CopyKind::Customer,
            is_first,
            is_last,
            page_number: if is_first { 1 } else { 2 },
            total_pages: if is_first && is_last { 1 } else { 2 },
            start: if is_first { 0 } else { 20 },
        }
    }

    fn render(header: &InvoiceHeader, items: &[LineItem], role: PageRole) -> Page {
        let shop = ShopProfile::default();
        let config = PageConfig::A4;
        let ctx = RenderContext {
            shop: &shop,
            config: &config,
            header,
            items,
        };
        let mut doc = Document::new();
        render_page(&mut doc, &ctx, items, &role);
        doc.pages.remove(0)
    }

    fn shaded_rows(page: &Page) -> usize {
        let mut fill = Rgb::BLACK;
        let mut count = 0;
        for op in page.iter() {
            match op {
                Op::SetFillColor(c) => fill = *c,
                Op::Rect {
                    paint: Paint::Fill, ..
                } if fill == ROW_SHADE => count += 1,
                _ => {}
            }
        }
        count
    }

    #[test]
    fn test_a4_fits() {
        assert!(check_fits(&PageConfig::A4, 2).is_ok());
    }

    #[test]
    fn test_oversized_capacity_rejected() {
        let config = PageConfig {
            continuation_capacity: 40,
            ..PageConfig::A4
        };
        let err = check_fits(&config, 2).unwrap_err();
        assert!(err.to_string().contains("continuation page"));

        let config = PageConfig {
            first_page_capacity: 25,
            ..PageConfig::A4
        };
        assert!(matches!(check_fits(&config, 2), Err(BillError::Layout(_))));
    }

    #[test]
    fn test_footer_notes_must_fit_on_page() {
        // A4: notes at 283.5, 287.5, 291.5 stay above 294mm
        assert!(check_fits(&PageConfig::A4, 0).is_ok());
        assert!(check_fits(&PageConfig::A4, 3).is_ok());
        let err = check_fits(&PageConfig::A4, 4).unwrap_err();
        assert!(err.to_string().contains("4 footer notes"));
    }

    #[test]
    fn test_fit_particulars() {
        let short = "Engine oil change";
        assert_eq!(fit_particulars(short), (short.to_string(), BODY_SIZE));

        let exact = "x".repeat(55);
        assert_eq!(fit_particulars(&exact).0, exact);

        let long = "y".repeat(60);
        let (text, size) = fit_particulars(&long);
        assert_eq!(text, format!("{}...", "y".repeat(52)));
        assert_eq!(size, TRUNCATED_SIZE);
    }

    #[test]
    fn test_single_page_has_everything() {
        let h = header(None);
        let page = render(&h, &items(3), role(true, true));

        assert!(page.contains_text("FIX PLUS AUTO CARE CENTER"));
        assert!(page.contains_text("GSTIN: 29CGBPM0738G1ZF"));
        assert!(page.contains_text("Mob: 94488 07237"));
        assert!(page.contains_text("77957 40356"));
        assert!(page.contains_text("CASH BILL"));
        assert!(page.texts().any(|t| t == "CUSTOMER COPY"));
        assert!(page.contains_text("No. 186"));
        assert!(page.contains_text("Date: 07/03/2026"));
        assert!(page.contains_text("Customer Name: Ravi Kumar"));
        assert!(page.contains_text("Vehicle No: KA10AB1234"));
        assert!(page.contains_text("SGST 9%:"));
        assert!(page.contains_text("CGST 9%:"));
        assert!(page.contains_text("Total:"));
        assert!(page.contains_text("400.00"));
        assert!(page.contains_text("Received Rupees: Four Hundred Rupees Only"));
        assert!(page.contains_text("Authorised Signature"));
        assert!(!page.contains_text("Continued on next page"));
        assert!(!page.contains_text("Customer GSTIN"));
    }

    #[test]
    fn test_customer_gstin_row() {
        let h = header(Some("29ABCDE1234F1Z5"));
        let page = render(&h, &items(1), role(true, true));
        assert!(page.contains_text("Customer GSTIN: 29ABCDE1234F1Z5"));
        assert_eq!(first_table_top(&h), 87.0);
        assert_eq!(first_table_top(&header(None)), 81.0);
    }

    #[test]
    fn test_non_last_page_has_marker_not_totals() {
        let h = header(None);
        let page = render(&h, &items(20), role(true, false));
        assert!(page.contains_text("Continued on next page..."));
        assert!(!page.contains_text("Total:"));
        assert!(!page.contains_text("Received Rupees"));
        assert!(page.texts().any(|t| t == "CUSTOMER COPY - Page 1 of 2"));
    }

    #[test]
    fn test_continuation_header() {
        let h = header(None);
        let slice = items(5);
        let page = render(&h, &slice, role(false, true));
        assert!(page.contains_text("CUSTOMER COPY - Page 2 of 2"));
        assert!(page.contains_text("Bill No. 186"));
        assert!(!page.contains_text("Customer Name"));
        assert!(!page.contains_text("GSTIN"));
        // Numbering continues from the slice start
        assert!(page.texts().any(|t| t == "21"));
        assert!(page.texts().any(|t| t == "25"));
        assert!(!page.texts().any(|t| t == "20"));
    }

    #[test]
    fn test_row_numbers_ignore_stored_no() {
        let h = header(None);
        let mut list = items(3);
        for (item, no) in list.iter_mut().zip([7, 7, 2]) {
            item.no = no;
        }

        let numbers = |page: &Page| -> Vec<String> {
            page.iter()
                .filter_map(|op| match op {
                    Op::Text { x, content, .. }
                        if *x == 14.0 && content.chars().all(|c| c.is_ascii_digit()) =>
                    {
                        Some(content.clone())
                    }
                    _ => None,
                })
                .collect()
        };

        let first = render(&h, &list, role(true, true));
        assert_eq!(numbers(&first), vec!["1", "2", "3"]);

        // Continuation slice starting at index 20
        let continued = render(&h, &list, role(false, true));
        assert_eq!(numbers(&continued), vec!["21", "22", "23"]);
    }

    #[test]
    fn test_even_rows_shaded() {
        let h = header(None);
        assert_eq!(shaded_rows(&render(&h, &items(5), role(true, true))), 3);
        assert_eq!(shaded_rows(&render(&h, &items(4), role(true, true))), 2);
        assert_eq!(shaded_rows(&render(&h, &items(0), role(true, true))), 0);
    }

    #[test]
    fn test_long_particulars_drawn_small() {
        let h = header(None);
        let mut list = items(1);
        list[0].particulars = "Front bumper replacement with paint and polish, both sides".into();
        let page = render(&h, &list, role(true, true));

        let pos = page
            .iter()
            .position(|op| matches!(op, Op::Text { content, .. } if content.ends_with("...")))
            .unwrap();
        assert_eq!(
            page.ops[pos - 1],
            Op::SetFont {
                weight: FontWeight::Normal,
                size: TRUNCATED_SIZE
            }
        );
    }

    #[test]
    fn test_footer_on_every_role() {
        let h = header(None);
        for r in [role(true, true), role(true, false), role(false, true)] {
            let page = render(&h, &items(2), r);
            assert!(page.contains_text("Thank you for your business"));
            assert!(page.contains_text("computer generated invoice"));
        }
    }

    #[test]
    fn test_watermark_drawn_first() {
        let h = header(None);
        let shop = ShopProfile::default();
        let config = PageConfig::A4;
        let list = items(1);
        let ctx = RenderContext {
            shop: &shop,
            config: &config,
            header: &h,
            items: &list,
        };
        let img = DynamicImage::ImageRgb8(RgbImage::new(200, 100));
        let mut doc = Document::new().with_watermark(Some(Watermark::from_image(&img, 0.1)));
        render_page(&mut doc, &ctx, &list, &role(true, true));

        match &doc.pages[0].ops[0] {
            Op::Watermark {
                x,
                y,
                width,
                height,
            } => {
                assert_eq!(*x, 50.0);
                assert_eq!(*width, 110.0);
                assert_eq!(*height, 55.0);
                assert!((y - (297.0 * 0.54 - 27.5)).abs() < 1e-3);
            }
            other => panic!("expected watermark first, got {:?}", other),
        }
    }

    #[test]
    fn test_no_watermark_op_without_asset() {
        let h = header(None);
        let page = render(&h, &items(1), role(true, true));
        assert!(!page.iter().any(|op| matches!(op, Op::Watermark { .. })));
    }
}
