//! # Autobill - GST Invoices for an Auto-Repair Shop
//!
//! Autobill turns a bill form into a multi-page A4 PDF invoice with a
//! customer copy and a merchant copy. It provides:
//!
//! - **Invoice arithmetic**: GST-inclusive tax split and amount in words
//! - **Pagination**: fixed item capacities for first and continuation pages
//! - **Rendering**: page drawing into an inspectable op list
//! - **PDF output**: op list to PDF via built-in Helvetica fonts
//!
//! ## Quick Start
//!
//! ```no_run
//! use autobill::{
//!     counter::BillCounter,
//!     invoice::BillForm,
//!     output,
//!     render::InvoiceRenderer,
//!     shop::ShopProfile,
//! };
//! use std::path::Path;
//!
//! let form: BillForm = serde_json::from_str(&std::fs::read_to_string("bill.json")?)?;
//! let shop = ShopProfile::default();
//! let counter = BillCounter::new(BillCounter::DEFAULT_FILE);
//!
//! // Prepare: validate, extend quantities, split GST
//! let bill_number = match form.bill_number {
//!     Some(n) => n,
//!     None => counter.next()?,
//! };
//! let invoice = form.prepare(bill_number, shop.gst_rate)?;
//!
//! // Render both copies and encode
//! let doc = InvoiceRenderer::new(&shop, &invoice).render()?;
//! let pdf = doc.optimize().to_pdf("Invoice")?;
//!
//! output::save_pdf(Path::new(output::DEFAULT_OUTPUT_DIR), &invoice.header, &pdf)?;
//! counter.save(bill_number)?;
//!
//! # Ok::<(), autobill::error::BillError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`invoice`] | Form input, invoice records, tax and words |
//! | [`layout`] | Page geometry and pagination |
//! | [`render`] | Page and copy rendering |
//! | [`ir`] | Drawing ops, optimizer, PDF codegen |
//! | [`shop`] | Shop branding and settings |
//! | [`counter`] | Persisted bill number |
//! | [`output`] | File naming and saving |
//! | [`share`] | WhatsApp share link |
//! | [`error`] | Error types |

pub mod counter;
pub mod error;
pub mod invoice;
pub mod ir;
pub mod layout;
pub mod output;
pub mod render;
pub mod share;
pub mod shop;

// Re-exports for convenience
pub use error::BillError;
pub use ir::Document;
pub use layout::PageConfig;
pub use render::InvoiceRenderer;
