//! Query-string mirroring of [`QueryState`].
//!
//! A list view keeps its state in the URL so it can be shared or bookmarked:
//!
//! ```text
//! q=drag&sort=-flight_hours&status=active&page=2&size=10
//! ```
//!
//! `q`, `sort`, `page` and `size` are reserved; every other key is a filter.

use crate::error::{QueryError, Result};
use crate::ordering::OrderBy;
use crate::state::{is_set, QueryState};

/// Search text parameter.
pub const SEARCH_PARAM: &str = "q";
/// Sort parameter (`field,-other`).
pub const SORT_PARAM: &str = "sort";
/// Page parameter.
pub const PAGE_PARAM: &str = "page";
/// Page size parameter.
pub const SIZE_PARAM: &str = "size";

const RESERVED: [&str; 4] = [SEARCH_PARAM, SORT_PARAM, PAGE_PARAM, SIZE_PARAM];

/// Returns `true` if `key` is one of the reserved query-string keys.
pub fn is_reserved(key: &str) -> bool {
    RESERVED.contains(&key)
}

impl QueryState {
    /// Encodes this state as a query string.
    ///
    /// Blank search text, an empty sort and unset filters (blank or `all`)
    /// are omitted. Values are written as typed, surrounding whitespace
    /// included. Filters are emitted in key order, so equal states encode
    /// identically. Filters named like a reserved key are not mirrored.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = Vec::new();

        if !self.search_text.trim().is_empty() {
            pairs.push((SEARCH_PARAM, self.search_text.as_str()));
        }
        let sort = self
            .sort
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        if !sort.is_empty() {
            pairs.push((SORT_PARAM, sort.as_str()));
        }
        for (field, value) in &self.filters {
            if is_set(value) && !is_reserved(field) {
                pairs.push((field.as_str(), value.as_str()));
            }
        }
        let page = self.page.to_string();
        let size = self.page_size.to_string();
        pairs.push((PAGE_PARAM, page.as_str()));
        pairs.push((SIZE_PARAM, size.as_str()));

        // Serializing a list of string pairs cannot fail.
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }

    /// Decodes a query string leniently.
    ///
    /// Malformed input never fails: undecodable strings give the default
    /// state, a missing or unusable `page` gives page 1, a missing or
    /// unusable `size` gives `default_page_size`. Filters with an empty key
    /// or a blank value are dropped. A leading `?` is accepted.
    pub fn from_query_string(query: &str, default_page_size: usize) -> QueryState {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(strip_prefix(query)).unwrap_or_default();
        let mut state = QueryState::new(default_page_size);

        for (key, value) in pairs {
            match key.as_str() {
                SEARCH_PARAM => state.search_text = value,
                SORT_PARAM => state.sort = OrderBy::parse_list(&value),
                PAGE_PARAM => {
                    state.page = parse_positive(&value).unwrap_or(1);
                }
                SIZE_PARAM => {
                    state.page_size = parse_positive(&value).unwrap_or(default_page_size);
                }
                _ if key.is_empty() || value.trim().is_empty() => {}
                _ => {
                    state.filters.insert(key, value);
                }
            }
        }
        state
    }

    /// Decodes a query string strictly, for user-supplied input.
    ///
    /// Unlike [`QueryState::from_query_string`], these are errors: a `%`
    /// not followed by two hex digits, escapes that decode to invalid UTF-8,
    /// an empty parameter key, and a `page` or `size` that is not a positive
    /// integer.
    ///
    /// # Example
    ///
    /// ```
    /// use flightdesk_query::QueryState;
    ///
    /// let state = QueryState::parse_query_string("?status=active&page=2", 10).unwrap();
    /// assert_eq!(state.page, 2);
    /// assert_eq!(state.filters["status"], "active");
    ///
    /// assert!(QueryState::parse_query_string("size=0", 10).is_err());
    /// assert!(QueryState::parse_query_string("q=%ZZ", 10).is_err());
    /// ```
    pub fn parse_query_string(query: &str, default_page_size: usize) -> Result<QueryState> {
        let pairs = decode_strict(query)?;
        let mut state = QueryState::new(default_page_size);

        for (key, value) in pairs {
            match key.as_str() {
                SEARCH_PARAM => state.search_text = value,
                SORT_PARAM => state.sort = OrderBy::parse_list(&value),
                PAGE_PARAM => {
                    state.page =
                        parse_positive(&value).ok_or_else(|| QueryError::InvalidPage(value))?;
                }
                SIZE_PARAM => {
                    state.page_size =
                        parse_positive(&value).ok_or_else(|| QueryError::InvalidPageSize(value))?;
                }
                _ if value.trim().is_empty() => {}
                _ => {
                    state.filters.insert(key, value);
                }
            }
        }
        Ok(state)
    }
}

fn strip_prefix(query: &str) -> &str {
    query.trim().trim_start_matches('?')
}

fn decode_strict(query: &str) -> Result<Vec<(String, String)>> {
    strip_prefix(query)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key)?;
            if key.is_empty() {
                return Err(QueryError::InvalidEncoding(format!("empty key in '{pair}'")));
            }
            Ok((key, decode_component(value)?))
        })
        .collect()
}

/// Decodes one `application/x-www-form-urlencoded` component.
fn decode_component(raw: &str) -> Result<String> {
    let mut rest = raw;
    while let Some(at) = rest.find('%') {
        let hex = rest
            .get(at + 1..at + 3)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()));
        if hex.is_none() {
            return Err(QueryError::InvalidEncoding(format!(
                "bad percent escape in '{raw}'"
            )));
        }
        rest = &rest[at + 3..];
    }
    urlencoding::decode(&raw.replace('+', " "))
        .map(|decoded| decoded.into_owned())
        .map_err(|_| QueryError::InvalidEncoding(format!("'{raw}' is not valid UTF-8")))
}

fn parse_positive(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|n| *n > 0)
}
