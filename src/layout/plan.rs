//! # Page Planning
//!
//! Splits an item list across physical pages. The first page of a copy
//! holds fewer rows than continuation pages because the customer/vehicle
//! block sits above its table.
//!
//! ## Example
//!
//! ```
//! use autobill::layout::plan::{plan, PageSlice};
//!
//! let slices = plan(46, 20, 25);
//! assert_eq!(
//!     slices,
//!     vec![
//!         PageSlice { start: 0, len: 20 },
//!         PageSlice { start: 20, len: 25 },
//!         PageSlice { start: 45, len: 1 },
//!     ]
//! );
//! ```

use serde::Serialize;

use super::config::PageConfig;

/// Contiguous run of items drawn on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSlice {
    /// Index of the first item in the full list
    pub start: usize,
    /// Number of items on the page
    pub len: usize,
}

impl PageSlice {
    /// Exclusive end index
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Borrow this slice's items out of the full list.
    pub fn items<'a, T>(&self, all: &'a [T]) -> &'a [T] {
        &all[self.start..self.end()]
    }
}

/// Plan page slices for `item_count` items.
///
/// Always returns at least one slice: with no items a single empty page is
/// still rendered so the header and footer appear.
///
/// Capacities must be non-zero (see [`PageConfig::validate`]).
pub fn plan(
    item_count: usize,
    first_capacity: usize,
    continuation_capacity: usize,
) -> Vec<PageSlice> {
    if item_count <= first_capacity {
        return vec![PageSlice {
            start: 0,
            len: item_count,
        }];
    }

    let remaining = item_count - first_capacity;
    let continuation_pages = remaining.div_ceil(continuation_capacity);

    let mut slices = Vec::with_capacity(1 + continuation_pages);
    slices.push(PageSlice {
        start: 0,
        len: first_capacity,
    });

    let mut start = first_capacity;
    while start < item_count {
        let len = (item_count - start).min(continuation_capacity);
        slices.push(PageSlice { start, len });
        start += len;
    }

    slices
}

/// Plan using the capacities of a page configuration.
pub fn plan_for(item_count: usize, config: &PageConfig) -> Vec<PageSlice> {
    plan(
        item_count,
        config.first_page_capacity,
        config.continuation_capacity,
    )
}
