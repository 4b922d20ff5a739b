use crate::session::{SearchMode, SearchSession};

/// Longest query text the server accepts.
pub const QUERY_MAX_CHARS: usize = 100;

/// Query strings the server treats as feed selectors rather than text
/// matches ("trending" and friends).
const RESERVED_TERMS: [&str; 5] = ["new", "trending", "similar", "new arrivals", "for you"];

/// Ordered request parameters for one page fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.push((key, value.into()));
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    /// First value for `key`, if emitted.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Canonical query text: trimmed, lower-cased, capped at
/// [`QUERY_MAX_CHARS`] characters (never mid-character).
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase().chars().take(QUERY_MAX_CHARS).collect()
}

pub fn is_reserved_term(normalized: &str) -> bool {
    RESERVED_TERMS.contains(&normalized)
}

/// Composes the parameter list for the session's next fetch.
///
/// Returns `None` when the active mode's target id is missing, in which case
/// no request may be sent at all.
pub fn build_query(session: &SearchSession) -> Option<QueryParams> {
    let mut params = QueryParams::default();

    match session.mode() {
        SearchMode::Related => {
            let target = session.related_target()?;
            params.push("vs", target.to_string());
            // Related lookups are relevance-driven; the filter tail stays off.
            push_page(&mut params, session.page());
            return Some(params);
        }
        SearchMode::Vendor => {
            let vendor = session.vendor_target()?;
            params.push("vu", vendor.to_string());
            if let Some(category) = session.vendor_category() {
                params.push("ci", category.to_string());
            }
            if let Some(location) = session.vendor_location() {
                params.push("nm", location.to_string());
            }
            if session.within_vendor() {
                let text = normalize_query(session.query());
                if !text.is_empty() {
                    params.push("vq", text);
                }
            }
        }
        SearchMode::Search => {
            let text = normalize_query(session.query());
            if !text.is_empty() {
                // A reserved term passes through while it is the whole
                // request; once any filter narrows things it is dropped so
                // the server filters instead of switching feeds.
                if !is_reserved_term(&text) || session.filters().is_empty() {
                    params.push("vq", text);
                }
            }
            if let Some(category) = &session.filters().category {
                params.push("vc", category.param_value());
            }
            if let Some(location) = &session.filters().location {
                params.push("vl", location.param_value());
            }
        }
    }

    let filters = session.filters();
    if let Some(from) = filters.price_from {
        params.push("price_from", from.to_string());
    }
    if let Some(to) = filters.price_to {
        params.push("price_to", to.to_string());
    }
    if filters.on_sale {
        params.push("onsale", "1");
    }
    if filters.restricted {
        params.push("restricted", "1");
    }
    push_page(&mut params, session.page());

    Some(params)
}

fn push_page(params: &mut QueryParams, page: u32) {
    // Page 1 is implicit on the wire.
    if page > 1 {
        params.push("page", page.to_string());
    }
}
