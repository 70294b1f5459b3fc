//! Page-number pagination primitives shared by Herodex listing endpoints.
//!
//! Every paginated endpoint uses the same model: a validated 1-indexed
//! [`PageNumber`], a fixed per-endpoint [`PageSize`], and a [`PageSlice`]
//! computed from the two that adapters translate into the store's
//! offset/limit primitives. Results travel back in a [`PageEnvelope`]
//! carrying the window plus totals for response metadata.
//!
//! Invariant: element `i` of page `p` has global rank
//! `(p - 1) * page_size + i` within the sorted, filtered set.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Validation failures when constructing or parsing a [`PageNumber`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// The value was not a base-10 positive integer.
    #[error("page number must be a positive integer, got `{value}`")]
    Invalid {
        /// Raw input that failed to parse.
        value: String,
    },
    /// Pages are 1-indexed; zero is never valid.
    #[error("page number must be at least 1")]
    Zero,
}

/// Validated 1-indexed page number.
///
/// Page zero (and anything that fails to parse as a positive integer) is a
/// validation error, never a silent clamp to the first page.
///
/// # Examples
/// ```
/// use pagination::PageNumber;
///
/// let page: PageNumber = "3".parse().expect("valid page");
/// assert_eq!(page.get(), 3);
/// assert!("0".parse::<PageNumber>().is_err());
/// assert!("two".parse::<PageNumber>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroU64);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Construct a page number, rejecting zero.
    pub fn new(value: u64) -> Result<Self, PageError> {
        NonZeroU64::new(value).map(Self).ok_or(PageError::Zero)
    }

    /// The underlying 1-indexed value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// Compute the store window for this page at the given page size.
    ///
    /// `offset = (page - 1) * size`, `limit = size`. Pure; no clamping to
    /// the matching count — a page past the end simply yields an empty
    /// window when applied.
    #[must_use]
    pub fn slice(self, size: PageSize) -> PageSlice {
        PageSlice {
            offset: (self.get() - 1).saturating_mul(size.get()),
            limit: size.get(),
        }
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl FromStr for PageNumber {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s.parse().map_err(|_| PageError::Invalid {
            value: s.to_owned(),
        })?;
        Self::new(value).map_err(|_| PageError::Invalid {
            value: s.to_owned(),
        })
    }
}

/// Fixed maximum number of items per page for one endpoint family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroU64);

impl PageSize {
    /// Wrap a non-zero page size.
    #[must_use]
    pub const fn new(value: NonZeroU64) -> Self {
        Self(value)
    }

    /// The underlying maximum items per page.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<NonZeroU64> for PageSize {
    fn from(value: NonZeroU64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Offset/limit window a driven adapter applies after sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    /// Number of sorted, filtered elements to skip.
    pub offset: u64,
    /// Maximum number of elements to return.
    pub limit: u64,
}

/// Number of pages needed to hold `total_count` items at `size` per page.
///
/// # Examples
/// ```
/// use std::num::NonZeroU64;
/// use pagination::{PageSize, total_pages};
///
/// let size = PageSize::new(NonZeroU64::new(5).expect("non-zero"));
/// assert_eq!(total_pages(7, size), 2);
/// assert_eq!(total_pages(0, size), 0);
/// ```
#[must_use]
pub fn total_pages(total_count: u64, size: PageSize) -> u64 {
    total_count.div_ceil(size.get())
}

/// One page of results plus the metadata clients need to walk the set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    /// The window of matching elements for this page, in sort order.
    pub items: Vec<T>,
    /// 1-indexed page number that produced this window.
    pub page: u64,
    /// Maximum items per page for this endpoint.
    pub page_size: u64,
    /// Size of the full matching set.
    pub total_count: u64,
    /// `ceil(total_count / page_size)`.
    pub total_pages: u64,
}

impl<T> PageEnvelope<T> {
    /// Assemble an envelope from a fetched window and the matching count.
    #[must_use]
    pub fn new(items: Vec<T>, page: PageNumber, size: PageSize, total_count: u64) -> Self {
        Self {
            items,
            page: page.get(),
            page_size: size.get(),
            total_count,
            total_pages: total_pages(total_count, size),
        }
    }

    /// Map the items while keeping the page metadata, e.g. into DTOs.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageEnvelope<U> {
        PageEnvelope {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}
