//! # Rendering Module
//!
//! Turns a prepared [`Invoice`](crate::invoice::Invoice) into a
//! [`Document`](crate::ir::Document) of absolute drawing ops.
//!
//! ## Modules
//!
//! - [`copy`]: customer and merchant copies, one after the other
//! - [`page`]: one physical page (header, details, table, totals, footer)
//! - [`metrics`]: Helvetica widths for aligned text
//! - [`watermark`]: faded logo drawn behind each page
//!
//! ## Usage Example
//!
//! ```
//! use autobill::invoice::{BillForm, FormItem};
//! use autobill::render::InvoiceRenderer;
//! use autobill::shop::ShopProfile;
//!
//! let form = BillForm {
//!     customer_name: "Ravi".into(),
//!     customer_phone: "9876543210".into(),
//!     vehicle_make: "Swift".into(),
//!     vehicle_number: "KA10AB1234".into(),
//!     items: vec![FormItem { particulars: "Wheel alignment".into(), qty: 1.0, amount: 400.0 }],
//!     ..Default::default()
//! };
//! let shop = ShopProfile::default();
//! let invoice = form.prepare(186, shop.gst_rate).unwrap();
//!
//! let pdf = InvoiceRenderer::new(&shop, &invoice)
//!     .render()
//!     .unwrap()
//!     .optimize()
//!     .to_pdf("Bill 186")
//!     .unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

pub mod copy;
pub mod metrics;
pub mod page;
pub mod watermark;

pub use copy::{render_copy, InvoiceRenderer};
pub use page::{render_page, PageRole, RenderContext};
pub use watermark::Watermark;
