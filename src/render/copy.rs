//! # Copy Orchestration
//!
//! Lays out one labelled copy of the invoice across as many pages as its
//! items need, and renders the full two-copy document.

use tracing::{debug, info};

use super::page::{check_fits, render_page, PageRole, RenderContext};
use super::watermark::Watermark;
use crate::error::BillError;
use crate::invoice::{CopyKind, Invoice};
use crate::ir::Document;
use crate::layout::{plan_for, PageConfig};
use crate::shop::ShopProfile;

/// Render every page of one copy.
///
/// The first page of the first copy goes on the document's already-open
/// page; every other page starts a new one. Page numbers restart at 1.
pub fn render_copy(
    doc: &mut Document,
    ctx: &RenderContext<'_>,
    copy: CopyKind,
    is_first_copy: bool,
) {
    let slices = plan_for(ctx.items.len(), ctx.config);
    let total_pages = slices.len();

    for (index, slice) in slices.iter().enumerate() {
        if index > 0 || !is_first_copy {
            doc.add_page();
        }

        debug!(
            copy = copy.label(),
            page = index + 1,
            total_pages,
            start = slice.start,
            len = slice.len,
            "Rendering page"
        );

        let role = PageRole {
            copy,
            is_first: index == 0,
            is_last: index + 1 == total_pages,
            page_number: index + 1,
            total_pages,
            start: slice.start,
        };
        render_page(doc, ctx, slice.items(ctx.items), &role);
    }
}

/// Renders a prepared invoice as customer and merchant copies.
///
/// ## Example
///
/// ```
/// use autobill::invoice::{BillForm, FormItem};
/// use autobill::render::InvoiceRenderer;
/// use autobill::shop::ShopProfile;
/// use chrono::NaiveDate;
///
/// let form = BillForm {
///     customer_name: "Ravi".into(),
///     customer_phone: "98765 43210".into(),
///     vehicle_make: "Swift".into(),
///     vehicle_number: "ka10ab1234".into(),
///     bill_date: NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
///     items: vec![FormItem { particulars: "Oil change".into(), qty: 1.0, amount: 118.0 }],
///     ..Default::default()
/// };
/// let shop = ShopProfile::default();
/// let invoice = form.prepare(186, shop.gst_rate).unwrap();
///
/// let doc = InvoiceRenderer::new(&shop, &invoice).render().unwrap();
/// assert_eq!(doc.page_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct InvoiceRenderer<'a> {
    shop: &'a ShopProfile,
    invoice: &'a Invoice,
    config: PageConfig,
    watermark: Option<Watermark>,
}

impl<'a> InvoiceRenderer<'a> {
    /// Renderer using the shop's page configuration and no watermark.
    pub fn new(shop: &'a ShopProfile, invoice: &'a Invoice) -> Self {
        Self {
            shop,
            invoice,
            config: shop.page_config(),
            watermark: None,
        }
    }

    /// Override the page configuration.
    pub fn with_config(mut self, config: PageConfig) -> Self {
        self.config = config;
        self
    }

    /// Draw `watermark` behind every page.
    pub fn with_watermark(mut self, watermark: Option<Watermark>) -> Self {
        self.watermark = watermark;
        self
    }

    /// Page configuration in use.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Render both copies into a fresh document.
    ///
    /// Fails only when the page configuration is invalid or its capacities
    /// would push content into the footer.
    pub fn render(&self) -> Result<Document, BillError> {
        self.config.validate()?;
        check_fits(&self.config, self.shop.footer_notes.len())?;

        let ctx = RenderContext {
            shop: self.shop,
            config: &self.config,
            header: &self.invoice.header,
            items: &self.invoice.items,
        };

        let mut doc = Document::new().with_watermark(self.watermark.clone());
        for (index, copy) in CopyKind::ALL.into_iter().enumerate() {
            render_copy(&mut doc, &ctx, copy, index == 0);
        }

        info!(
            bill_number = self.invoice.header.bill_number,
            items = self.invoice.items.len(),
            pages = doc.page_count(),
            "Rendered invoice"
        );
        Ok(doc)
    }
}
