//! # GST Arithmetic
//!
//! Bills are entered GST-inclusive. The pre-tax base is recovered by
//! division and the tax is split evenly into state (SGST) and central
//! (CGST) halves.
//!
//! ```text
//! basic = round2(total / (1 + rate))
//! sgst  = round2(basic * rate / 2)
//! cgst  = round2(basic * rate / 2)
//! ```

use serde::Serialize;

/// Default GST rate (18%, split 9% SGST + 9% CGST).
pub const DEFAULT_GST_RATE: f64 = 0.18;

/// Round to two decimals, half away from zero.
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Sum line subtotals into the grand total.
///
/// Each subtotal is rounded to cents before summing and the sum is rounded
/// again, so boundary cases match what the bill displays line by line.
pub fn grand_total<I>(subtotals: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    round2(subtotals.into_iter().map(round2).sum())
}

/// Tax components derived from a GST-inclusive total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxSplit {
    pub basic: f64,
    pub sgst: f64,
    pub cgst: f64,
}

impl TaxSplit {
    /// Sum of the three parts. May differ from the input total by a cent.
    pub fn total(&self) -> f64 {
        round2(self.basic + self.sgst + self.cgst)
    }
}

/// Split a GST-inclusive `grand_total` into basic, SGST and CGST.
pub fn split_inclusive_total(grand_total: f64, rate: f64) -> TaxSplit {
    let basic = round2(grand_total / (1.0 + rate));
    let half = round2(basic * rate / 2.0);
    TaxSplit {
        basic,
        sgst: half,
        cgst: half,
    }
}

/// Label for one half of the rate, e.g. `0.18` → "9%".
pub fn half_rate_label(rate: f64) -> String {
    let half = rate * 100.0 / 2.0;
    if (half - half.round()).abs() < 1e-9 {
        format!("{}%", half.round() as i64)
    } else {
        format!("{:.1}%", half)
    }
}
