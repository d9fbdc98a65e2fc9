//! Window placement and link sequence construction.

use std::iter;
use std::ops::RangeInclusive;

use crate::{Link, PaginationConfig, TrailingGap, MIN_MID_RANGE};

/// The contiguous block of page numbers centered on the current page.
///
/// Near the start of the page list the bounds can fall below 1; only pages
/// inside `1..=last` are ever shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    range: RangeInclusive<i64>,
}

impl Window {
    /// Center a window of `mid_range` pages on `current`, shifted so that it
    /// starts at 1 or ends at `last` when it would cross either edge.
    ///
    /// ```
    /// use range_pager_core::Window;
    ///
    /// let window = Window::around(10, 5, 20);
    /// assert_eq!((window.start(), window.end()), (8, 12));
    ///
    /// let window = Window::around(1, 5, 20);
    /// assert_eq!((window.start(), window.end()), (1, 5));
    /// ```
    pub fn around(current: i64, mid_range: u64, last: i64) -> Self {
        let half = i64::try_from(mid_range.max(MIN_MID_RANGE) / 2).unwrap_or(i64::MAX);
        let mut start = current.saturating_sub(half);
        let mut end = current.saturating_add(half);

        if start <= 0 {
            end = end.saturating_add(1i64.saturating_sub(start));
            start = 1;
        }

        if end > last {
            start = start.saturating_sub(end.saturating_sub(last));
            end = last;
        }

        Self { range: start..=end }
    }

    pub fn start(&self) -> i64 {
        *self.range.start()
    }

    pub fn end(&self) -> i64 {
        *self.range.end()
    }

    /// Every page number in the window, in ascending order.
    pub fn pages(&self) -> RangeInclusive<i64> {
        self.range.clone()
    }

    /// The window element at zero-based `index`, if the window is that long.
    pub fn nth(&self, index: u64) -> Option<i64> {
        let offset = i64::try_from(index).ok()?;
        let page = self.start().checked_add(offset)?;
        (page <= self.end()).then_some(page)
    }

    pub fn contains(&self, page: i64) -> bool {
        self.range.contains(&page)
    }
}

/// Build the link sequence for `config`.
///
/// Out-of-range input is normalized rather than rejected: `current` is
/// clamped into the page range, `mid_range` is raised to
/// [`MIN_MID_RANGE`], and a configuration with no pages yields an empty
/// sequence.
///
/// ```
/// use range_pager_core::{compute, Link, PaginationConfig};
///
/// let links = compute(&PaginationConfig { total: 50, ..Default::default() });
///
/// assert_eq!(
///     links,
///     vec![
///         Link::First { page: 1 },
///         Link::Page { number: 1, active: true },
///         Link::Page { number: 2, active: false },
///         Link::Last { page: 2 },
///     ]
/// );
/// ```
pub fn compute(config: &PaginationConfig) -> Vec<Link> {
    let last = match i64::try_from(config.total_pages()) {
        Ok(0) => return Vec::new(),
        Ok(pages) => pages,
        Err(_) => i64::MAX,
    };
    let current = config.current.clamp(1, last);
    let with_ends = last > 1 && config.show_first_last;

    let mut links = Vec::new();

    if with_ends {
        links.push(Link::First { page: 1 });
    }

    if page_number(last) <= config.limit {
        links.extend((1..=last).map(|i| page_link(i, current)));
    } else {
        push_windowed(&mut links, config, current, last);
    }

    if with_ends {
        links.push(Link::Last {
            page: page_number(last),
        });
    }

    links
}

fn push_windowed(links: &mut Vec<Link>, config: &PaginationConfig, current: i64, last: i64) {
    let mid_range = config.mid_range.max(MIN_MID_RANGE);

    if config.show_prev_next && current != 1 {
        links.push(Link::Prev {
            page: page_number(current - 1),
        });
    }

    let window = Window::around(current, mid_range, last);
    let gap_after = match config.trailing_gap {
        TrailingGap::WindowEnd => Some(window.end()),
        TrailingGap::FixedOffset => window.nth(mid_range - 1),
    };

    // Page 1, the window pages strictly between the ends, then the last page.
    let inner = window.start().max(2)..=window.end().min(last - 1);
    let shown = iter::once(1).chain(inner).chain((last > 1).then_some(last));

    for i in shown {
        if i == window.start() && i > 2 {
            links.push(Link::Ellipsis);
        }

        links.push(page_link(i, current));

        if gap_after == Some(i) && i < last {
            links.push(Link::Ellipsis);
        }
    }

    if config.show_prev_next && current != last {
        links.push(Link::Next {
            page: page_number(current + 1),
        });
    }
}

fn page_link(number: i64, current: i64) -> Link {
    Link::Page {
        number: page_number(number),
        active: number == current,
    }
}

// Callers only pass numbers already clamped to 1 or above.
fn page_number(n: i64) -> u64 {
    n.unsigned_abs()
}
