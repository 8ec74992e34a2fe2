//! Shared wire shapes and request options.

use serde::{Deserialize, Serialize};

/// Cover art in one size.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub height: i32,
    pub width: i32,
    pub url: String,
}

/// A copyright statement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Copyright {
    pub text: String,
    /// `C` for the copyright, `P` for the sound recording.
    #[serde(rename = "type")]
    pub kind: String,
}

/// One page of a paginated listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Endpoint returning the full result of the request.
    #[serde(default)]
    pub href: String,
    /// Maximum number of items in the response.
    #[serde(default)]
    pub limit: i32,
    /// Offset of the items returned.
    #[serde(default)]
    pub offset: i32,
    /// Total number of items available.
    #[serde(default)]
    pub total: i32,
    /// URL of the next page of items, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page of items, if any.
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub items: Vec<T>,
}

/// Optional parameters accepted by the catalog endpoints.
///
/// Each parameter is encoded into the query string only when set.
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// ISO 3166-1 alpha-2 market code.
    pub market: Option<String>,
    /// Maximum number of items to return.
    pub limit: Option<u32>,
    /// Index of the first item to return.
    pub offset: Option<u32>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Query pairs for endpoints that only accept a market parameter.
    pub(crate) fn market_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(market) = &self.market {
            pairs.push(("market", market.clone()));
        }
        pairs
    }

    /// Query pairs for paginated endpoints.
    pub(crate) fn page_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.market_query();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_encode_no_pairs() {
        let opt = Options::new();
        assert!(opt.market_query().is_empty());
        assert!(opt.page_query().is_empty());
    }

    #[test]
    fn test_each_parameter_is_independent() {
        let opt = Options::new().with_limit(10);
        assert_eq!(opt.page_query(), vec![("limit", "10".to_string())]);

        let opt = Options::new().with_market("US").with_offset(40);
        assert_eq!(
            opt.page_query(),
            vec![("market", "US".to_string()), ("offset", "40".to_string())]
        );
    }

    #[test]
    fn test_market_query_ignores_paging() {
        let opt = Options::new().with_market("SE").with_limit(5).with_offset(10);
        assert_eq!(opt.market_query(), vec![("market", "SE".to_string())]);
    }

    #[test]
    fn test_page_defaults_when_fields_absent() {
        let page: Page<i32> = serde_json::from_str("{}").unwrap();
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
        assert!(page.next.is_none());
    }
}
