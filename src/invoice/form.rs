//! # Bill Form
//!
//! Raw bill input as entered at the counter, and its preparation into an
//! [`Invoice`]: validation, line subtotals, GST split and amount in words.
//!
//! ## JSON Shape
//!
//! ```json
//! {
//!   "bill_date": "2026-10-17",
//!   "customer_name": "Ravi Kumar",
//!   "customer_phone": "9876543210",
//!   "vehicle_make": "Maruti Swift",
//!   "vehicle_number": "ka 10 ab 1234",
//!   "items": [
//!     { "particulars": "Engine oil change", "qty": 1, "amount": 100.0 }
//!   ]
//! }
//! ```
//!
//! `amount` is the unit rate; the line subtotal is `qty * amount`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tax::{self, round2};
use super::types::{Invoice, InvoiceHeader, LineItem};
use super::words::amount_to_words;
use crate::error::BillError;

fn default_bill_type() -> String {
    "CASH BILL".to_string()
}

/// One item row of the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormItem {
    pub particulars: String,
    #[serde(default = "default_qty")]
    pub qty: f64,
    /// Unit rate, GST-inclusive.
    pub amount: f64,
}

fn default_qty() -> f64 {
    1.0
}

impl FormItem {
    /// Line subtotal, rounded to cents.
    pub fn subtotal(&self) -> f64 {
        round2(self.qty * self.amount)
    }
}

/// Bill form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillForm {
    #[serde(default = "default_bill_type")]
    pub bill_type: String,
    /// Explicit bill number. When absent the counter assigns one.
    #[serde(default)]
    pub bill_number: Option<u64>,
    pub bill_date: NaiveDate,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_gstin: Option<String>,
    pub vehicle_make: String,
    pub vehicle_number: String,
    pub items: Vec<FormItem>,
}

impl Default for BillForm {
    fn default() -> Self {
        Self {
            bill_type: default_bill_type(),
            bill_number: None,
            bill_date: NaiveDate::default(),
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_gstin: None,
            vehicle_make: String::new(),
            vehicle_number: String::new(),
            items: Vec::new(),
        }
    }
}

impl BillForm {
    /// Check the form the way the counter clerk's form does before a bill
    /// is generated.
    pub fn validate(&self) -> Result<(), BillError> {
        require("customer name", &self.customer_name)?;
        require("vehicle make", &self.vehicle_make)?;
        require("vehicle number", &self.vehicle_number)?;

        let phone = normalize_phone(&self.customer_phone);
        if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(BillError::Validation(format!(
                "customer phone must be exactly 10 digits, got '{}'",
                self.customer_phone
            )));
        }

        if self.items.is_empty() {
            return Err(BillError::Validation(
                "at least one item is required".to_string(),
            ));
        }

        for (i, item) in self.items.iter().enumerate() {
            let row = i + 1;
            if item.particulars.trim().is_empty() {
                return Err(BillError::Validation(format!(
                    "item {}: particulars are required",
                    row
                )));
            }
            if !item.qty.is_finite() || item.qty < 1.0 {
                return Err(BillError::Validation(format!(
                    "item {}: quantity must be at least 1, got {}",
                    row, item.qty
                )));
            }
            if !item.amount.is_finite() || item.amount < 0.0 {
                return Err(BillError::Validation(format!(
                    "item {}: amount must be zero or more, got {}",
                    row, item.amount
                )));
            }
        }

        Ok(())
    }

    /// Validate and turn the form into a renderable invoice.
    pub fn prepare(&self, bill_number: u64, gst_rate: f64) -> Result<Invoice, BillError> {
        self.validate()?;

        let items: Vec<LineItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| LineItem {
                no: i + 1,
                particulars: item.particulars.trim().to_string(),
                qty: format_qty(item.qty),
                amount: format!("{:.2}", item.subtotal()),
            })
            .collect();

        let total = tax::grand_total(self.items.iter().map(FormItem::subtotal));
        let split = tax::split_inclusive_total(total, gst_rate);

        let customer_gstin = self
            .customer_gstin
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_uppercase);

        let header = InvoiceHeader {
            bill_type: self.bill_type.trim().to_string(),
            bill_number,
            bill_date: self.bill_date,
            customer_name: self.customer_name.trim().to_string(),
            customer_phone: normalize_phone(&self.customer_phone),
            customer_gstin,
            vehicle_make: self.vehicle_make.trim().to_string(),
            vehicle_number: self.vehicle_number.trim().to_uppercase(),
            gst_rate,
            basic: format!("{:.2}", split.basic),
            sgst: format!("{:.2}", split.sgst),
            cgst: format!("{:.2}", split.cgst),
            grand_total: format!("{:.2}", total),
            amount_in_words: amount_to_words(total),
        };

        Ok(Invoice { header, items })
    }
}

fn require(field: &str, value: &str) -> Result<(), BillError> {
    if value.trim().is_empty() {
        return Err(BillError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Quantity without a trailing ".0" for whole numbers.
fn format_qty(qty: f64) -> String {
    if qty.fract() == 0.0 {
        format!("{}", qty as i64)
    } else {
        format!("{}", qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::tax::DEFAULT_GST_RATE;

    fn form() -> BillForm {
        BillForm {
            bill_type: "CASH BILL".into(),
            bill_number: None,
            bill_date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            customer_name: " Ravi Kumar ".into(),
            customer_phone: "98765 43210".into(),
            customer_gstin: Some("".into()),
            vehicle_make: "Maruti Swift".into(),
            vehicle_number: "ka10ab1234".into(),
            items: vec![
                FormItem {
                    particulars: "Engine oil".into(),
                    qty: 1.0,
                    amount: 100.0,
                },
                FormItem {
                    particulars: "Wheel alignment".into(),
                    qty: 1.0,
                    amount: 250.5,
                },
                FormItem {
                    particulars: "Air filter".into(),
                    qty: 1.0,
                    amount: 49.5,
                },
            ],
        }
    }

    #[test]
    fn test_prepare_scenario() {
        let invoice = form().prepare(186, DEFAULT_GST_RATE).unwrap();
        let h = &invoice.header;
        assert_eq!(h.bill_number, 186);
        assert_eq!(h.grand_total, "400.00");
        assert_eq!(h.basic, "338.98");
        assert_eq!(h.sgst, "30.51");
        assert_eq!(h.cgst, "30.51");
        assert_eq!(h.amount_in_words, "Four Hundred Rupees Only");
        assert_eq!(h.customer_name, "Ravi Kumar");
        assert_eq!(h.customer_phone, "9876543210");
        assert_eq!(h.vehicle_number, "KA10AB1234");
        assert_eq!(h.customer_gstin, None);
    }

    #[test]
    fn test_prepare_items() {
        let invoice = form().prepare(1, DEFAULT_GST_RATE).unwrap();
        let amounts: Vec<_> = invoice.items.iter().map(|i| i.amount.as_str()).collect();
        assert_eq!(amounts, vec!["100.00", "250.50", "49.50"]);
        let numbers: Vec<_> = invoice.items.iter().map(|i| i.no).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(invoice.items[0].qty, "1");
    }

    #[test]
    fn test_quantity_extends_amount() {
        let mut f = form();
        f.items = vec![FormItem {
            particulars: "Spark plug".into(),
            qty: 4.0,
            amount: 125.25,
        }];
        let invoice = f.prepare(1, DEFAULT_GST_RATE).unwrap();
        assert_eq!(invoice.items[0].amount, "501.00");
        assert_eq!(invoice.header.grand_total, "501.00");
    }

    #[test]
    fn test_fractional_quantity_format() {
        assert_eq!(format_qty(2.0), "2");
        assert_eq!(format_qty(1.5), "1.5");
    }

    #[test]
    fn test_gstin_is_kept_uppercased() {
        let mut f = form();
        f.customer_gstin = Some(" 29abcde1234f1z5 ".into());
        let invoice = f.prepare(1, DEFAULT_GST_RATE).unwrap();
        assert_eq!(
            invoice.header.customer_gstin.as_deref(),
            Some("29ABCDE1234F1Z5")
        );
    }

    #[test]
    fn test_rejects_short_phone() {
        let mut f = form();
        f.customer_phone = "12345".into();
        assert!(matches!(f.validate(), Err(BillError::Validation(_))));
    }

    #[test]
    fn test_rejects_non_digit_phone() {
        let mut f = form();
        f.customer_phone = "98765x3210".into();
        assert!(matches!(f.validate(), Err(BillError::Validation(_))));
    }

    #[test]
    fn test_rejects_blank_fields() {
        let mut f = form();
        f.vehicle_number = "  ".into();
        let err = f.validate().unwrap_err();
        assert!(err.to_string().contains("vehicle number"));
    }

    #[test]
    fn test_rejects_empty_items() {
        let mut f = form();
        f.items.clear();
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_item_values() {
        let mut f = form();
        f.items[1].qty = 0.0;
        assert!(f.validate().unwrap_err().to_string().contains("item 2"));

        let mut f = form();
        f.items[2].amount = -1.0;
        assert!(f.validate().unwrap_err().to_string().contains("item 3"));

        let mut f = form();
        f.items[0].amount = f64::NAN;
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "bill_date": "2026-10-17",
            "customer_name": "Ravi",
            "customer_phone": "9876543210",
            "vehicle_make": "Swift",
            "vehicle_number": "KA10AB1234",
            "items": [{ "particulars": "Oil", "amount": 100 }]
        }"#;
        let f: BillForm = serde_json::from_str(json).unwrap();
        assert_eq!(f.bill_type, "CASH BILL");
        assert_eq!(f.bill_number, None);
        assert_eq!(f.items[0].qty, 1.0);
        assert!(f.validate().is_ok());
    }
}
