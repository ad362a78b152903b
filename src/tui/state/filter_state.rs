//! Filter and pagination state for the events listing.
//!
//! Every mutation other than explicit page navigation moves the view back to
//! the first page, so the page number always refers to the current filter
//! criteria.

use crate::api::pagination::PageSize;
use crate::api::query::EventQuery;

/// Text filters that can receive keyboard focus in the filter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Title keyword (`q`).
    Keyword,
    /// Department name.
    Department,
    /// Inclusive lower date bound.
    DateFrom,
    /// Inclusive upper date bound.
    DateTo,
}

impl FilterField {
    /// Fields in form order.
    pub const ALL: [Self; 4] = [Self::Keyword, Self::Department, Self::DateFrom, Self::DateTo];

    /// Returns the form label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Keyword => "Keyword (q)",
            Self::Department => "Department",
            Self::DateFrom => "From",
            Self::DateTo => "To",
        }
    }

    /// Returns true for the date fields.
    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(self, Self::DateFrom | Self::DateTo)
    }

    /// Returns the following field, or `None` after the last one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Keyword => Some(Self::Department),
            Self::Department => Some(Self::DateFrom),
            Self::DateFrom => Some(Self::DateTo),
            Self::DateTo => None,
        }
    }

    /// Returns the preceding field, or `None` before the first one.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Keyword => None,
            Self::Department => Some(Self::Keyword),
            Self::DateFrom => Some(Self::Department),
            Self::DateTo => Some(Self::DateFrom),
        }
    }
}

/// Current filter criteria and page cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    keyword: String,
    department: String,
    date_from: String,
    date_to: String,
    cme_only: bool,
    virtual_only: bool,
    page: u32,
    page_size: PageSize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            department: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            cme_only: false,
            virtual_only: false,
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl FilterState {
    /// Creates a filter state with no criteria on page 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the keyword filter.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns the department filter.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the lower date bound.
    #[must_use]
    pub fn date_from(&self) -> &str {
        &self.date_from
    }

    /// Returns the upper date bound.
    #[must_use]
    pub fn date_to(&self) -> &str {
        &self.date_to
    }

    /// Returns whether only CME-eligible events are requested.
    #[must_use]
    pub const fn cme_only(&self) -> bool {
        self.cme_only
    }

    /// Returns whether only virtual events are requested.
    #[must_use]
    pub const fn virtual_only(&self) -> bool {
        self.virtual_only
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Returns the value of a text field.
    #[must_use]
    pub fn field(&self, field: FilterField) -> &str {
        match field {
            FilterField::Keyword => &self.keyword,
            FilterField::Department => &self.department,
            FilterField::DateFrom => &self.date_from,
            FilterField::DateTo => &self.date_to,
        }
    }

    const fn reset_page(&mut self) {
        self.page = 1;
    }

    fn field_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Keyword => &mut self.keyword,
            FilterField::Department => &mut self.department,
            FilterField::DateFrom => &mut self.date_from,
            FilterField::DateTo => &mut self.date_to,
        }
    }

    /// Replaces a text field and returns to page 1.
    pub fn set_field(&mut self, field: FilterField, value: impl Into<String>) {
        self.reset_page();
        *self.field_mut(field) = value.into();
    }

    /// Sets the keyword filter and returns to page 1.
    pub fn set_keyword(&mut self, value: impl Into<String>) {
        self.set_field(FilterField::Keyword, value);
    }

    /// Sets the department filter and returns to page 1.
    pub fn set_department(&mut self, value: impl Into<String>) {
        self.set_field(FilterField::Department, value);
    }

    /// Sets the lower date bound and returns to page 1.
    pub fn set_date_from(&mut self, value: impl Into<String>) {
        self.set_field(FilterField::DateFrom, value);
    }

    /// Sets the upper date bound and returns to page 1.
    pub fn set_date_to(&mut self, value: impl Into<String>) {
        self.set_field(FilterField::DateTo, value);
    }

    /// Appends a character to a text field and returns to page 1.
    pub fn push_char(&mut self, field: FilterField, ch: char) {
        self.reset_page();
        self.field_mut(field).push(ch);
    }

    /// Removes the last character of a text field and returns to page 1.
    pub fn pop_char(&mut self, field: FilterField) {
        self.reset_page();
        self.field_mut(field).pop();
    }

    /// Sets the CME-only flag and returns to page 1.
    pub const fn set_cme_only(&mut self, value: bool) {
        self.reset_page();
        self.cme_only = value;
    }

    /// Sets the virtual-only flag and returns to page 1.
    pub const fn set_virtual_only(&mut self, value: bool) {
        self.reset_page();
        self.virtual_only = value;
    }

    /// Sets the page size and returns to page 1.
    pub const fn set_page_size(&mut self, value: PageSize) {
        self.reset_page();
        self.page_size = value;
    }

    /// Advances to the next page size choice and returns to page 1.
    pub const fn cycle_page_size(&mut self) {
        self.set_page_size(self.page_size.next());
    }

    /// Sets the page number directly. Values below 1 are raised to 1.
    ///
    /// This is the only mutation that keeps the rest of the criteria and does
    /// not reset the page.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Clears every filter and returns to page 1, keeping the page size.
    pub fn clear(&mut self) {
        *self = Self {
            page_size: self.page_size,
            ..Self::default()
        };
    }

    /// Builds the listing query for the current state.
    #[must_use]
    pub fn to_query(&self) -> EventQuery {
        EventQuery {
            keyword: self.keyword.clone(),
            department: self.department.clone(),
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
            cme_only: self.cme_only,
            virtual_only: self.virtual_only,
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Returns the canonical query string for the current state.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.to_query().to_query_string()
    }
}
