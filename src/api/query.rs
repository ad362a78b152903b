//! Canonical query string construction for `GET /api/events`.
//!
//! The query is a pure function of the filter values. Keys always appear in
//! the same order and sparse values are left out entirely, so two equal
//! filter states always produce byte-identical query strings.

use url::form_urlencoded;

use super::pagination::PageSize;

/// Sort direction sent with every request; earliest events come first.
const ORDER: &str = "asc";

/// Parameters for one listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    /// Title keyword, sent as `q`.
    pub keyword: String,
    /// Department name, sent as `department`.
    pub department: String,
    /// Inclusive lower date bound, sent as `from`.
    pub date_from: String,
    /// Inclusive upper date bound, sent as `to`.
    pub date_to: String,
    /// Restrict to CME-eligible events.
    pub cme_only: bool,
    /// Restrict to virtual events.
    pub virtual_only: bool,
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub page_size: PageSize,
}

impl Default for EventQuery {
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

impl EventQuery {
    /// Returns the query parameters in canonical order.
    ///
    /// Text filters are omitted when empty, flags are omitted when false, and
    /// `page`, `page_size`, and `order` are always present.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(9);

        push_text(&mut pairs, "q", &self.keyword);
        push_text(&mut pairs, "department", &self.department);
        push_text(&mut pairs, "from", &self.date_from);
        push_text(&mut pairs, "to", &self.date_to);
        push_flag(&mut pairs, "cme", self.cme_only);
        push_flag(&mut pairs, "virtual", self.virtual_only);

        pairs.push(("page", self.page.to_string()));
        pairs.push(("page_size", self.page_size.get().to_string()));
        pairs.push(("order", ORDER.to_owned()));
        pairs
    }

    /// Renders the canonical, form-url-encoded query string.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventlens::api::query::EventQuery;
    ///
    /// let query = EventQuery {
    ///     keyword: "Oncology".to_owned(),
    ///     cme_only: true,
    ///     ..EventQuery::default()
    /// };
    /// assert_eq!(
    ///     query.to_query_string(),
    ///     "q=Oncology&cme=true&page=1&page_size=20&order=asc"
    /// );
    /// ```
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}

fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &str) {
    if !value.is_empty() {
        pairs.push((key, value.to_owned()));
    }
}

fn push_flag(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: bool) {
    if value {
        pairs.push((key, "true".to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn keys(query: &EventQuery) -> Vec<&'static str> {
        query.pairs().into_iter().map(|(key, _)| key).collect()
    }

    #[test]
    fn default_query_only_carries_paging_and_order() {
        let query = EventQuery::default();
        assert_eq!(query.to_query_string(), "page=1&page_size=20&order=asc");
    }

    #[test]
    fn all_fields_appear_in_canonical_order() {
        let query = EventQuery {
            keyword: "stroke".to_owned(),
            department: "Neurology".to_owned(),
            date_from: "2026-01-01".to_owned(),
            date_to: "2026-01-31".to_owned(),
            cme_only: true,
            virtual_only: true,
            page: 3,
            page_size: PageSize::Five,
        };

        assert_eq!(
            keys(&query),
            vec![
                "q",
                "department",
                "from",
                "to",
                "cme",
                "virtual",
                "page",
                "page_size",
                "order"
            ]
        );
        assert_eq!(
            query.to_query_string(),
            "q=stroke&department=Neurology&from=2026-01-01&to=2026-01-31\
             &cme=true&virtual=true&page=3&page_size=5&order=asc"
        );
    }

    #[rstest]
    #[case::keyword_only(EventQuery { keyword: "x".to_owned(), ..EventQuery::default() }, "q")]
    #[case::department_only(EventQuery { department: "x".to_owned(), ..EventQuery::default() }, "department")]
    #[case::from_only(EventQuery { date_from: "2026-01-01".to_owned(), ..EventQuery::default() }, "from")]
    #[case::to_only(EventQuery { date_to: "2026-01-01".to_owned(), ..EventQuery::default() }, "to")]
    #[case::cme_only(EventQuery { cme_only: true, ..EventQuery::default() }, "cme")]
    #[case::virtual_only(EventQuery { virtual_only: true, ..EventQuery::default() }, "virtual")]
    fn sparse_fields_are_included_only_when_set(#[case] query: EventQuery, #[case] key: &str) {
        let present = keys(&query);
        assert!(present.contains(&key));
        assert_eq!(present.len(), 4, "only {key} plus paging and order expected");
    }

    #[test]
    fn never_emits_empty_or_false_values() {
        let query = EventQuery::default();
        for (key, value) in query.pairs() {
            assert!(!value.is_empty(), "{key} has an empty value");
            assert_ne!(value, "false", "{key} was sent as false");
        }
    }

    #[test]
    fn values_are_form_encoded() {
        let query = EventQuery {
            keyword: "heart & lung".to_owned(),
            ..EventQuery::default()
        };
        assert_eq!(
            query.to_query_string(),
            "q=heart+%26+lung&page=1&page_size=20&order=asc"
        );
    }
}
