//! # Shop Profile
//!
//! Branding and billing settings of the issuing shop. Every field has a
//! default, so a profile file only needs the fields that differ.
//!
//! ```json
//! {
//!   "business_name": "FIX PLUS AUTO CARE CENTER",
//!   "phones": ["94488 07237", "77957 40356"],
//!   "layout": { "first_page_capacity": 18 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BillError;
use crate::invoice::DEFAULT_GST_RATE;
use crate::layout::PageConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopProfile {
    pub business_name: String,
    pub gstin: String,
    /// Contact numbers; the first two are printed in the header band.
    pub phones: Vec<String>,
    pub tagline: String,
    pub address: String,
    pub footer_tagline: String,
    pub footer_notes: Vec<String>,
    /// Combined GST rate, split evenly into SGST and CGST.
    pub gst_rate: f64,
    /// Dialling prefix for share links, without `+`.
    pub country_code: String,
    /// Strength of the logo watermark, 0.0 to 1.0.
    pub watermark_opacity: f32,
    /// Page geometry override. A4 when absent.
    pub layout: Option<PageConfig>,
}

impl Default for ShopProfile {
    fn default() -> Self {
        Self {
            business_name: "FIX PLUS AUTO CARE CENTER".to_string(),
            gstin: "29CGBPM0738G1ZF".to_string(),
            phones: vec!["94488 07237".to_string(), "77957 40356".to_string()],
            tagline: "All New Generation Car Spare Parts Available".to_string(),
            address: "C-8, SRI MAHADESHWARA COLLEGE ROAD,KOLLEGALA-571440".to_string(),
            footer_tagline: "Thank you for your business. Drive safe!".to_string(),
            footer_notes: vec![
                "Goods once sold will not be taken back. Subject to Kollegala jurisdiction.".to_string(),
                "This is a computer generated invoice.".to_string(),
            ],
            gst_rate: DEFAULT_GST_RATE,
            country_code: "91".to_string(),
            watermark_opacity: 0.1,
            layout: None,
        }
    }
}

impl ShopProfile {
    /// Read a profile from a JSON file.
    pub fn load(path: &Path) -> Result<Self, BillError> {
        let text = fs::read_to_string(path)?;
        let profile: ShopProfile = serde_json::from_str(&text)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Page configuration to render with.
    pub fn page_config(&self) -> PageConfig {
        self.layout.unwrap_or(PageConfig::A4)
    }

    fn validate(&self) -> Result<(), BillError> {
        if self.business_name.trim().is_empty() {
            return Err(BillError::Config("business_name must not be empty".to_string()));
        }
        if !self.gst_rate.is_finite() || self.gst_rate < 0.0 || self.gst_rate >= 1.0 {
            return Err(BillError::Config(format!(
                "gst_rate must be a fraction in 0.0..1.0, got {}",
                self.gst_rate
            )));
        }
        if !self.country_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(BillError::Config(format!(
                "country_code must be digits only, got {:?}",
                self.country_code
            )));
        }
        Ok(())
    }
}
