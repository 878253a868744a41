//! Pagination intent for collection fetches

/// Either one explicit page or the whole collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageRequest {
    /// `?page=N`
    Page(u32),
    /// `?pagesize=all`
    #[default]
    All,
}

impl PageRequest {
    /// An explicit `--page` selects single-page mode; absence means everything
    pub fn from_flag(page: Option<u32>) -> Self {
        match page {
            Some(n) => PageRequest::Page(n),
            None => PageRequest::All,
        }
    }

    /// The query parameter for this mode
    pub fn query(&self) -> String {
        match self {
            PageRequest::Page(n) => format!("page={}", n),
            PageRequest::All => "pagesize=all".to_string(),
        }
    }

    /// Append the pagination parameter to a URL that may already have a query
    pub fn apply(&self, url: &str) -> String {
        let separator = if url.contains('?') { "&" } else { "?" };
        format!("{}{}{}", url, separator, self.query())
    }
}
