//! Core types for the range-pager link calculator.
//!
//! This crate computes which page links a numeric pagination control shows
//! and in what order. It has no notion of the data being paged, only of
//! the page count, and performs no I/O.
//!
//! # Overview
//!
//! The main items are:
//!
//! - [`PaginationConfig`] - Input describing item count, page size and display rules
//! - [`Link`] - One element of the computed link sequence
//! - [`compute`] - Builds the link sequence for a configuration
//! - [`total_pages`] - Page count derivation
//!
//! # Example
//!
//! ```
//! use range_pager_core::{compute, Link, PaginationConfig};
//!
//! let config = PaginationConfig {
//!     total: 500,
//!     current: 10,
//!     ..Default::default()
//! };
//!
//! let links = compute(&config);
//!
//! assert_eq!(links.first(), Some(&Link::First { page: 1 }));
//! assert_eq!(links.last(), Some(&Link::Last { page: 20 }));
//! assert!(links.contains(&Link::Page { number: 10, active: true }));
//! ```

use serde::{Deserialize, Serialize};

mod range;

pub use range::{compute, Window};

/// Smallest window width. Narrower `mid_range` values are raised to this.
pub const MIN_MID_RANGE: u64 = 3;

/// Configuration errors reported by [`PaginationConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Input to the link calculator.
///
/// Every field has a default, so a partial TOML or JSON document
/// deserializes into a complete configuration.
///
/// # Example
///
/// ```
/// use range_pager_core::PaginationConfig;
///
/// let config: PaginationConfig = serde_json::from_str(r#"{"total": 120}"#).unwrap();
///
/// assert_eq!(config.total, 120);
/// assert_eq!(config.page_size, 25);
/// assert_eq!(config.total_pages(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Requested current page (1-indexed). Out-of-range values are clamped.
    #[serde(default = "default_current")]
    pub current: i64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,
    /// Number of page links centered on the current page. Minimum 3.
    #[serde(default = "default_mid_range")]
    pub mid_range: u64,
    /// Page count above which the window and gap markers are used.
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Emit [`Link::Prev`] and [`Link::Next`] in windowed mode.
    #[serde(default = "default_true")]
    pub show_prev_next: bool,
    /// Emit [`Link::First`] and [`Link::Last`] when there is more than one page.
    #[serde(default = "default_true")]
    pub show_first_last: bool,
    /// How the gap after the window is detected.
    #[serde(default)]
    pub trailing_gap: TrailingGap,
}

fn default_current() -> i64 {
    1
}

fn default_page_size() -> u64 {
    25
}

fn default_mid_range() -> u64 {
    5
}

fn default_limit() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            current: default_current(),
            page_size: default_page_size(),
            total: 0,
            mid_range: default_mid_range(),
            limit: default_limit(),
            show_prev_next: true,
            show_first_last: true,
            trailing_gap: TrailingGap::default(),
        }
    }
}

impl PaginationConfig {
    /// Total number of pages for this configuration.
    pub fn total_pages(&self) -> u64 {
        total_pages(self.total, self.page_size)
    }

    /// Strict check for callers that want bad input rejected.
    ///
    /// [`compute`] does not call this; it normalizes instead.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidConfiguration(
                "page_size must be greater than 0".into(),
            ));
        }
        if self.limit == 0 {
            return Err(Error::InvalidConfiguration(
                "limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Selects which window element is tested for the gap marker after the window.
///
/// The two policies only disagree when the window holds more pages than
/// `mid_range`, which happens for even `mid_range` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingGap {
    /// Test the last page of the window.
    #[default]
    WindowEnd,
    /// Test the window element at position `mid_range - 1`, as older
    /// deployments did. No marker is emitted when that position is past
    /// the end of the window.
    FixedOffset,
}

/// One element of the computed link sequence.
///
/// Navigational variants carry the page they point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Link {
    /// A numbered page link.
    Page { number: u64, active: bool },
    /// A non-navigable gap between shown blocks.
    Ellipsis,
    /// Jump to page 1.
    First { page: u64 },
    /// Jump to the last page.
    Last { page: u64 },
    /// Step to the previous page.
    Prev { page: u64 },
    /// Step to the next page.
    Next { page: u64 },
}

impl Link {
    /// The page this link navigates to, or `None` for [`Link::Ellipsis`].
    ///
    /// ```
    /// use range_pager_core::Link;
    ///
    /// assert_eq!(Link::Prev { page: 4 }.target(), Some(4));
    /// assert_eq!(Link::Ellipsis.target(), None);
    /// ```
    pub fn target(&self) -> Option<u64> {
        match *self {
            Link::Page { number, .. } => Some(number),
            Link::First { page }
            | Link::Last { page }
            | Link::Prev { page }
            | Link::Next { page } => Some(page),
            Link::Ellipsis => None,
        }
    }

    /// Whether this is the highlighted current page.
    pub fn is_active(&self) -> bool {
        matches!(self, Link::Page { active: true, .. })
    }
}

/// Compute the number of pages needed for `total` items.
///
/// Returns 0 when there are no items or `page_size` is 0.
///
/// ```
/// use range_pager_core::total_pages;
///
/// assert_eq!(total_pages(0, 25), 0);
/// assert_eq!(total_pages(101, 25), 5);
/// ```
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}
