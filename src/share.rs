//! # Share Link
//!
//! Builds a WhatsApp `wa.me` link carrying a plain-text bill summary, and
//! hands it to the system browser.

use tracing::info;

use crate::error::BillError;
use crate::invoice::{InvoiceHeader, LineItem};
use crate::shop::ShopProfile;

/// Plain-text summary of a bill.
pub fn summary_text(shop: &ShopProfile, header: &InvoiceHeader, items: &[LineItem]) -> String {
    let mut text = format!(
        "{}\nBill No. {}  Date: {}\nVehicle: {} ({})\n\n",
        shop.business_name,
        header.bill_number,
        header.display_date(),
        header.vehicle_number,
        header.vehicle_make,
    );

    for (i, item) in items.iter().enumerate() {
        text.push_str(&format!(
            "{}. {} x{} = {}\n",
            i + 1,
            item.particulars,
            item.qty,
            item.amount
        ));
    }

    text.push_str(&format!(
        "\nTotal: Rs. {}\n{}\nThank you, {}!",
        header.grand_total, header.amount_in_words, header.customer_name
    ));
    text
}

/// `https://wa.me/<country code><phone>?text=<summary>`
pub fn whatsapp_link(country_code: &str, phone: &str, text: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!(
        "https://wa.me/{}{}?text={}",
        country_code,
        digits,
        urlencoding::encode(text)
    )
}

/// Open a link in the default browser.
pub fn open_link(url: &str) -> Result<(), BillError> {
    webbrowser::open(url)?;
    info!(url, "Opened share link");
    Ok(())
}
