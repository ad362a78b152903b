//! In-memory listing backend served through wiremock.
//!
//! Filters, orders, and paginates a fixed set of events the same way the
//! real listing endpoint does, so browser scenarios can assert on results
//! without a database.

use std::collections::HashMap;
use std::time::Duration;

use eventlens::api::models::test_support::{page_of, seeded_events};
use eventlens::{EventItem, ListingResponse};
use wiremock::{Request, Respond, ResponseTemplate};

/// Wiremock responder for `GET /api/events`.
pub(crate) struct SeededBackend {
    events: Vec<EventItem>,
    keyword_delay: Option<Duration>,
}

impl SeededBackend {
    pub(crate) fn new() -> Self {
        Self {
            events: seeded_events(),
            keyword_delay: None,
        }
    }

    /// Delays every response to a request that carries a keyword.
    pub(crate) fn with_keyword_delay(mut self, delay: Duration) -> Self {
        self.keyword_delay = Some(delay);
        self
    }

    fn listing(&self, params: &HashMap<String, String>) -> ListingResponse {
        let text = |key: &str| param(params, key);
        let keyword = text("q").to_lowercase();
        let department = text("department").to_lowercase();
        let from = text("from");
        let to = text("to");
        let cme_only = text("cme") == "true";
        let virtual_only = text("virtual") == "true";

        let mut matching: Vec<EventItem> = self
            .events
            .iter()
            .filter(|item| keyword.is_empty() || item.title.to_lowercase().contains(&keyword))
            .filter(|item| {
                department.is_empty()
                    || item
                        .departments
                        .as_deref()
                        .is_some_and(|value| value.to_lowercase().contains(&department))
            })
            .filter(|item| from.is_empty() || start_date(item) >= from)
            .filter(|item| to.is_empty() || start_date(item) <= to)
            .filter(|item| !cme_only || item.cme_eligible.is_set())
            .filter(|item| !virtual_only || item.is_virtual.is_set())
            .cloned()
            .collect();
        if text("order") == "desc" {
            matching.reverse();
        }

        let page = text("page").parse::<u32>().unwrap_or(1).max(1);
        let page_size = text("page_size").parse::<u32>().unwrap_or(20).max(1);
        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let skip = usize::try_from((page - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
        let take = usize::try_from(page_size).unwrap_or(usize::MAX);
        let items = matching.into_iter().skip(skip).take(take).collect();

        page_of(items, page, page_size, total)
    }
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> &'a str {
    params.get(key).map_or("", String::as_str)
}

fn start_date(item: &EventItem) -> &str {
    item.start_at.get(..10).unwrap_or(item.start_at.as_str())
}

impl Respond for SeededBackend {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let params: HashMap<String, String> = request.url.query_pairs().into_owned().collect();
        let response = ResponseTemplate::new(200).set_body_json(self.listing(&params));

        match self.keyword_delay {
            Some(delay) if params.contains_key("q") => response.set_delay(delay),
            _ => response,
        }
    }
}
