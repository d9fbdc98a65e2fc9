//! Numeric pagination links for long page lists.
//!
//! Wraps [`range_pager_core`] with layered configuration loading and
//! HTML/text rendering.
//!
//! # Example
//!
//! ```
//! use range_pager::{compute, render, PaginationConfig};
//!
//! let links = compute(&PaginationConfig {
//!     total: 500,
//!     current: 10,
//!     ..Default::default()
//! });
//!
//! assert_eq!(
//!     render::text(&links),
//!     "« First ‹ Prev 1 … 8 9 [10] 11 12 … 20 Next › Last »"
//! );
//! ```

pub mod config;
pub mod error;
pub mod render;

pub use config::{Config, Overrides};
pub use error::{Error, Result};
pub use range_pager_core::{compute, total_pages, Link, PaginationConfig, TrailingGap, Window};
pub use render::RenderOptions;
