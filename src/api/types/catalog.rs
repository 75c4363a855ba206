//! Catalog request parameters: SKU listing and product search.

/// Default safety bound on the number of pages a paginated call will fetch.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Parameters for the paginated SKU listing
/// (`GET /api/catalog_system/pvt/sku/stockkeepingunitidsbysaleschannel`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListParams {
    /// Keep fetching pages until an empty one comes back
    pub paginate: bool,
    /// First page to fetch (1-based)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Extra query filters appended after `page`/`pageSize`
    pub filters: Vec<(String, String)>,
    /// Stop after this many pages even if the API keeps returning data (must be at least 1)
    pub max_pages: u32,
}

impl Default for ProductListParams {
    fn default() -> Self {
        Self {
            paginate: true,
            page: 1,
            page_size: 100,
            filters: Vec::new(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl ProductListParams {
    /// Create params with default paging (page 1, 100 per page, paginated).
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch only the first page.
    pub fn single_page(mut self) -> Self {
        self.paginate = false;
        self
    }

    /// Set the starting page.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Add an extra query filter.
    pub fn with_filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((name.into(), value.into()));
        self
    }

    /// Set the page safety bound.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Query parameters for the given page.
    pub fn query_for_page(&self, page: u32) -> Vec<(String, String)> {
        let mut query = Vec::with_capacity(2 + self.filters.len());
        query.push(("page".to_string(), page.to_string()));
        query.push(("pageSize".to_string(), self.page_size.to_string()));
        query.extend(self.filters.iter().cloned());
        query
    }
}

/// Parameters for the paginated product search
/// (`GET /api/catalog_system/pub/products/search`).
///
/// VTEX pages this endpoint with an inclusive `_from`/`_to` item range; both
/// bounds move forward by `step` after every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSearchParams {
    /// Keep fetching pages until an empty one comes back
    pub paginate: bool,
    /// First item index
    pub from: u32,
    /// Last item index
    pub to: u32,
    /// Amount added to both bounds per page
    pub step: u32,
    /// Stop after this many pages even if the API keeps returning data (must be at least 1)
    pub max_pages: u32,
}

impl Default for ProductSearchParams {
    fn default() -> Self {
        Self {
            paginate: true,
            from: 0,
            to: 49,
            step: 50,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl ProductSearchParams {
    /// Create params with the default range (`0..=49`, step 50, paginated).
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch only the first range.
    pub fn single_page(mut self) -> Self {
        self.paginate = false;
        self
    }

    /// Set the initial range.
    pub fn with_range(mut self, from: u32, to: u32) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Set the step applied to both bounds after each page.
    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    /// Set the page safety bound.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// `(from, to)` bounds for the zero-based page index.
    pub fn range_for_page(&self, index: u32) -> (u32, u32) {
        let offset = self.step.saturating_mul(index);
        (self.from.saturating_add(offset), self.to.saturating_add(offset))
    }

    /// Query parameters for the zero-based page index, filtered to products
    /// available in `sales_channel`.
    pub fn query_for_page(&self, index: u32, sales_channel: &str) -> Vec<(String, String)> {
        let (from, to) = self.range_for_page(index);
        vec![
            ("_from".to_string(), from.to_string()),
            ("_to".to_string(), to.to_string()),
            (
                "fq".to_string(),
                format!("isAvailablePerSalesChannel_{}", sales_channel),
            ),
        ]
    }
}
