//! # Page Configuration
//!
//! Physical page geometry and the tuned per-page item capacities.
//!
//! ## Built-in Profile
//!
//! | Profile | Size (mm) | Row height | First page | Continuation |
//! |---------|-----------|------------|------------|--------------|
//! | A4 | 210 x 297 | 6 mm | 20 items | 25 items |
//!
//! ## Usage
//!
//! ```
//! use autobill::layout::PageConfig;
//!
//! let config = PageConfig::A4;
//! assert_eq!(config.first_page_capacity, 20);
//! assert_eq!(config.content_width_mm(), 190.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::BillError;

/// # Page Configuration
///
/// All lengths are millimetres, measured from the top-left corner of the
/// page.
///
/// The footer band sits at a fixed `footer_top_mm`; it is not pushed down
/// by content. Capacities are what keep the table and totals clear of it,
/// and the renderer checks that they do before drawing anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page width
    pub width_mm: f32,

    /// Page height
    pub height_mm: f32,

    /// Left/right margin of the bordered content area
    pub margin_mm: f32,

    /// Height of one item row
    pub row_height_mm: f32,

    /// Items on the first page of a copy
    pub first_page_capacity: usize,

    /// Items on each continuation page
    pub continuation_capacity: usize,

    /// Top edge of the footer band
    pub footer_top_mm: f32,
}

impl PageConfig {
    /// # A4 Portrait
    ///
    /// ```text
    /// ├─ 10mm ─┼──────── 190mm content ────────┼─ 10mm ─┤
    /// ```
    pub const A4: Self = Self {
        width_mm: 210.0,
        height_mm: 297.0,
        margin_mm: 10.0,
        row_height_mm: 6.0,
        first_page_capacity: 20,
        continuation_capacity: 25,
        footer_top_mm: 274.0,
    };

    /// Width between the margins
    #[inline]
    pub fn content_width_mm(&self) -> f32 {
        self.width_mm - 2.0 * self.margin_mm
    }

    /// Right edge of the content area
    #[inline]
    pub fn right_mm(&self) -> f32 {
        self.width_mm - self.margin_mm
    }

    /// Horizontal centre of the page
    #[inline]
    pub fn center_x_mm(&self) -> f32 {
        self.width_mm / 2.0
    }

    /// Basic sanity checks that do not depend on what is drawn.
    pub fn validate(&self) -> Result<(), BillError> {
        if self.first_page_capacity == 0 || self.continuation_capacity == 0 {
            return Err(BillError::Layout(
                "page capacities must be at least 1".to_string(),
            ));
        }
        if self.row_height_mm <= 0.0 {
            return Err(BillError::Layout(format!(
                "row height must be positive, got {}",
                self.row_height_mm
            )));
        }
        if self.footer_top_mm <= 0.0 || self.footer_top_mm >= self.height_mm {
            return Err(BillError::Layout(format!(
                "footer top {}mm is outside the {}mm page",
                self.footer_top_mm, self.height_mm
            )));
        }
        if self.margin_mm * 2.0 >= self.width_mm {
            return Err(BillError::Layout(format!(
                "margins of {}mm leave no room on a {}mm page",
                self.margin_mm, self.width_mm
            )));
        }
        Ok(())
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::A4
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_dimensions() {
        let config = PageConfig::A4;
        assert_eq!(config.width_mm, 210.0);
        assert_eq!(config.height_mm, 297.0);
        assert_eq!(config.right_mm(), 200.0);
        assert_eq!(config.center_x_mm(), 105.0);
    }

    #[test]
    fn test_default_is_a4() {
        assert_eq!(PageConfig::default(), PageConfig::A4);
    }

    #[test]
    fn test_a4_validates() {
        assert!(PageConfig::A4.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = PageConfig {
            continuation_capacity: 0,
            ..PageConfig::A4
        };
        assert!(matches!(config.validate(), Err(BillError::Layout(_))));
    }

    #[test]
    fn test_footer_outside_page_rejected() {
        let config = PageConfig {
            footer_top_mm: 300.0,
            ..PageConfig::A4
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_a4_defaults() {
        let config: PageConfig = serde_json::from_str(r#"{"first_page_capacity": 15}"#).unwrap();
        assert_eq!(config.first_page_capacity, 15);
        assert_eq!(config.continuation_capacity, 25);
        assert_eq!(config.height_mm, 297.0);
    }
}
