//! # Invoice Model
//!
//! Typed invoice records plus the arithmetic that fills them in.
//!
//! ## Modules
//!
//! - [`types`]: `InvoiceHeader`, `LineItem`, `CopyKind`
//! - [`words`]: amount in words (Indian numbering)
//! - [`tax`]: GST-inclusive split and rounding
//! - [`form`]: raw form input, validation and preparation

pub mod form;
pub mod tax;
pub mod types;
pub mod words;

pub use form::{BillForm, FormItem};
pub use tax::{DEFAULT_GST_RATE, TaxSplit};
pub use types::*;
