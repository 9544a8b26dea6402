//! Pagination (pure).
//!
//! Page numbers are 1-based throughout. Requests outside the valid range
//! are clamped rather than rejected: page buttons are allowed to be stale.

use std::fmt;
use std::num::NonZeroUsize;

/// Items per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 16;

/// Page buttons shown around the current page when nothing else is configured.
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 10;

// ===== PageSize =====

/// Items per page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Smart constructor: rejects zero.
    pub fn new(size: usize) -> Result<Self, InvalidPageSize> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(InvalidPageSize::Zero)
    }

    /// Number of items per page.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected page size.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPageSize {
    /// A page must hold at least one item.
    #[error("Page size must be at least 1")]
    Zero,
}

// ===== Page =====

/// One page of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Clamped 1-based page number.
    pub page: usize,
    /// Total number of pages (0 for an empty list).
    pub total_pages: usize,
    /// Items on this page, at most one page size long.
    pub items: &'a [T],
}

/// Number of pages needed for `len` items.
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get())
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.max(1).min(total_pages.max(1))
}

/// Slice out the requested page, clamping the page number first.
pub fn paginate<T>(items: &[T], page_size: PageSize, requested_page: usize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let page = clamp_page(requested_page, total_pages);

    let start = ((page - 1) * page_size.get()).min(items.len());
    let end = (start + page_size.get()).min(items.len());

    Page {
        page,
        total_pages,
        items: &items[start..end],
    }
}

// ===== Visible Page Window =====

/// Page numbers to show as buttons.
///
/// At most `max_visible` pages, centered on `current_page` with the extra
/// page going before it for even widths, shifted back inside
/// `[1, total_pages]` at either edge. The (clamped) current page is always
/// included when there is at least one page.
pub fn visible_page_window(
    total_pages: usize,
    current_page: usize,
    max_visible: usize,
) -> Vec<usize> {
    if total_pages == 0 || max_visible == 0 {
        return Vec::new();
    }
    if total_pages <= max_visible {
        return (1..=total_pages).collect();
    }

    let current = clamp_page(current_page, total_pages);
    let half = max_visible / 2;

    let mut start = current.saturating_sub(half).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    if end - start + 1 < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    (start..=end).collect()
}

// ===== Page Controls =====

/// One element of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// "Prev" button; disabled on the first page.
    Prev {
        /// Whether pressing it does anything.
        enabled: bool,
    },
    /// A page-number button.
    Page {
        /// 1-based page number.
        number: usize,
        /// Whether this is the current page.
        active: bool,
    },
    /// Gap marker between non-adjacent page buttons.
    Ellipsis,
    /// "Next" button; disabled on the last page.
    Next {
        /// Whether pressing it does anything.
        enabled: bool,
    },
}

/// Lay out the pagination bar.
///
/// Empty when there is at most one page. Otherwise Prev, then (when
/// `show_numbers`) the visible window with the first/last page pinned at
/// either end behind an ellipsis if they fall outside it, then Next.
pub fn page_controls(
    total_pages: usize,
    current_page: usize,
    max_visible: usize,
    show_numbers: bool,
) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let current = clamp_page(current_page, total_pages);
    let mut controls = vec![PageControl::Prev {
        enabled: current > 1,
    }];

    if show_numbers {
        let window = visible_page_window(total_pages, current, max_visible);
        let page = |number: usize| PageControl::Page {
            number,
            active: number == current,
        };

        if let (Some(&first), Some(&last)) = (window.first(), window.last()) {
            if first > 1 {
                controls.push(page(1));
                if first > 2 {
                    controls.push(PageControl::Ellipsis);
                }
            }

            controls.extend(window.iter().copied().map(page));

            if last < total_pages {
                if last < total_pages - 1 {
                    controls.push(PageControl::Ellipsis);
                }
                controls.push(page(total_pages));
            }
        }
    }

    controls.push(PageControl::Next {
        enabled: current < total_pages,
    });
    controls
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
