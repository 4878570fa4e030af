//! Offset/limit pagination arithmetic and the paginated response envelope.
//!
//! A [`PageRequest`] is a validated 1-based `(page, page_size)` pair. Once
//! constructed, everything downstream (offset/limit computation, metadata)
//! assumes the values are in range and does not re-check them.
//!
//! `total_pages` is computed with integer ceiling division so that
//! `total_items == 0` gives `0` pages and no float rounding is involved.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Hard upper bound on rows per page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A validated page request.
///
/// Deserialization goes through [`PageRequest::new`], so a decoded value is
/// as trustworthy as a constructed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest")]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

#[derive(Deserialize)]
struct RawPageRequest {
    page: u32,
    page_size: u32,
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = CoreError;

    fn try_from(raw: RawPageRequest) -> Result<Self, Self::Error> {
        Self::new(raw.page, raw.page_size)
    }
}

impl PageRequest {
    /// Validate a `(page, page_size)` pair against [`MAX_PAGE_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `page < 1` or `page_size` is outside
    /// `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, page_size: u32) -> Result<Self, CoreError> {
        Self::with_max(page, page_size, MAX_PAGE_SIZE)
    }

    /// Validate a `(page, page_size)` pair against a caller-chosen cap.
    ///
    /// The cap itself is clamped to [`MAX_PAGE_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `page < 1` or `page_size` is outside
    /// `1..=max_page_size`.
    pub fn with_max(page: u32, page_size: u32, max_page_size: u32) -> Result<Self, CoreError> {
        let max = max_page_size.min(MAX_PAGE_SIZE);
        if page < 1 {
            return Err(CoreError::Validation(format!(
                "page must be >= 1, got {page}"
            )));
        }
        if page_size < 1 || page_size > max {
            return Err(CoreError::Validation(format!(
                "page_size must be between 1 and {max}, got {page_size}"
            )));
        }
        Ok(Self { page, page_size })
    }

    /// First page with the default page size.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_size(self) -> u32 {
        self.page_size
    }

    /// Rows to skip: `(page - 1) * page_size`.
    #[must_use]
    pub const fn offset(self) -> u64 {
        (self.page as u64 - 1) * self.page_size as u64
    }

    /// Rows to fetch: `page_size`.
    #[must_use]
    pub const fn limit(self) -> u64 {
        self.page_size as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Pagination metadata returned alongside every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u32,
}

impl PaginationMeta {
    /// Number of rows the requested page holds given `total_items`.
    ///
    /// `0` for any page past the end.
    #[must_use]
    pub const fn items_on_page(&self) -> u64 {
        let offset = (self.current_page as u64).saturating_sub(1) * self.items_per_page as u64;
        let remaining = self.total_items.saturating_sub(offset);
        if remaining < self.items_per_page as u64 {
            remaining
        } else {
            self.items_per_page as u64
        }
    }
}

/// Compute page metadata for a listing of `total_items` rows.
#[must_use]
pub const fn compute_page_metadata(total_items: u64, request: PageRequest) -> PaginationMeta {
    PaginationMeta {
        current_page: request.page,
        total_pages: total_items.div_ceil(request.page_size as u64),
        total_items,
        items_per_page: request.page_size,
    }
}

/// A single page of items plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> Paginated<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, pagination: PaginationMeta) -> Self {
        Self { items, pagination }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
