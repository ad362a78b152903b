//! Page size choices and page arithmetic for the events listing.
//!
//! The listing API is offset-paginated: the client asks for a 1-based page of
//! a given size and receives the total match count, from which the number of
//! pages is derived.

use std::fmt;

use super::error::ListingError;

/// Items-per-page choices offered by the filter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    /// One event per page.
    One,
    /// Five events per page.
    Five,
    /// Ten events per page.
    Ten,
    /// Twenty events per page.
    #[default]
    Twenty,
}

impl PageSize {
    /// All choices in the order the form cycles through them.
    pub const CHOICES: [Self; 4] = [Self::Twenty, Self::Ten, Self::Five, Self::One];

    /// Returns the numeric page size sent as `page_size`.
    #[must_use]
    pub const fn get(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
        }
    }

    /// Returns the next choice, wrapping from 1 back to 20.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Twenty => Self::Ten,
            Self::Ten => Self::Five,
            Self::Five => Self::One,
            Self::One => Self::Twenty,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = ListingError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            other => Err(ListingError::InvalidArgument {
                message: format!("page size must be one of 1, 5, 10 or 20 (got {other})"),
            }),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Returns `max(1, ceil(total / page_size))`.
///
/// A `page_size` of zero is treated as one so a malformed response cannot
/// produce a division by zero.
///
/// # Examples
///
/// ```
/// use eventlens::api::pagination::total_pages;
///
/// assert_eq!(total_pages(0, 20), 1);
/// assert_eq!(total_pages(3, 1), 3);
/// assert_eq!(total_pages(21, 20), 2);
/// ```
#[must_use]
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let divisor = u64::from(page_size.max(1));
    let pages = total.div_ceil(divisor).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Returns true when a "previous page" action is available.
#[must_use]
pub const fn can_go_prev(page: u32, loading: bool) -> bool {
    page > 1 && !loading
}

/// Returns true when a "next page" action is available.
#[must_use]
pub const fn can_go_next(page: u32, total_pages: u32, loading: bool) -> bool {
    page < total_pages && !loading
}

/// Clamps `page` into `[1, total_pages]`.
#[must_use]
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}
