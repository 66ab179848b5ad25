//! Invoice records consumed by the renderer.
//!
//! Every amount here is already formatted. The renderer draws these
//! strings as-is and never re-validates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Header metadata shared by every page of both copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    /// Free-text label printed in the header band, e.g. "CASH BILL".
    pub bill_type: String,
    pub bill_number: u64,
    pub bill_date: NaiveDate,
    pub customer_name: String,
    pub customer_phone: String,
    /// Customer GSTIN. Adds a row to the detail block when present.
    #[serde(default)]
    pub customer_gstin: Option<String>,
    pub vehicle_make: String,
    /// Registration number, uppercased.
    pub vehicle_number: String,
    /// GST rate used for the SGST/CGST labels (0.18 = 18%).
    pub gst_rate: f64,
    pub basic: String,
    pub sgst: String,
    pub cgst: String,
    pub grand_total: String,
    pub amount_in_words: String,
}

impl InvoiceHeader {
    /// Bill date as printed on the invoice (`DD/MM/YYYY`).
    pub fn display_date(&self) -> String {
        self.bill_date.format("%d/%m/%Y").to_string()
    }
}

/// One row of the item table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// 1-based sequence number. Informational only: the renderer numbers
    /// rows by their position in the list.
    pub no: usize,
    pub particulars: String,
    pub qty: String,
    /// Line subtotal (quantity already applied), two decimals.
    pub amount: String,
}

/// A prepared invoice, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub header: InvoiceHeader,
    pub items: Vec<LineItem>,
}

/// Which duplicate of the invoice a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CopyKind {
    Customer,
    Merchant,
}

impl CopyKind {
    /// Copies in document order.
    pub const ALL: [CopyKind; 2] = [CopyKind::Customer, CopyKind::Merchant];

    /// Label printed in the page header.
    pub fn label(&self) -> &'static str {
        match self {
            CopyKind::Customer => "CUSTOMER COPY",
            CopyKind::Merchant => "MERCHANT COPY",
        }
    }
}
