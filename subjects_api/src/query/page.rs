//! Pagination query for listing subjects.

use url::Url;

use super::Query;

/// Page cursor sent with a list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageQuery {
    /// Page number (1-indexed). Defaults to 1.
    pub page: u32,
    /// Results per page. Defaults to 5.
    pub limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, limit: 5 }
    }
}

impl PageQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the number of results per page.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl Query for PageQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string())
            .append_pair("limit", &self.limit.to_string());
        url
    }
}
