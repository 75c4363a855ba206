//! Order management (OMS) request helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// Query filters for `GET /api/oms/pvt/orders/search`.
///
/// The filters are sent exactly as built, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSearchFilters {
    params: Vec<(String, String)>,
}

impl OrderSearchFilters {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary filter.
    pub fn with_filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Free-text search (order id, client email, document...).
    pub fn with_query(self, q: impl Into<String>) -> Self {
        self.with_filter("q", q)
    }

    /// Filter by order status, e.g. `ready-for-handling`.
    pub fn with_status(self, status: impl Into<String>) -> Self {
        self.with_filter("f_status", status)
    }

    /// Filter by creation date, inclusive on both ends.
    pub fn with_creation_date(self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        let value = format!(
            "creationDate:[{} TO {}]",
            from.to_rfc3339_opts(SecondsFormat::Millis, true),
            to.to_rfc3339_opts(SecondsFormat::Millis, true)
        );
        self.with_filter("f_creationDate", value)
    }

    /// Result page (1-based).
    pub fn with_page(self, page: u32) -> Self {
        self.with_filter("page", page.to_string())
    }

    /// Results per page.
    pub fn with_per_page(self, per_page: u32) -> Self {
        self.with_filter("per_page", per_page.to_string())
    }

    /// The filters as query parameters.
    pub fn as_params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Whether no filter has been set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl From<OrderSearchFilters> for Vec<(String, String)> {
    fn from(filters: OrderSearchFilters) -> Self {
        filters.params
    }
}

impl AsRef<[(String, String)]> for OrderSearchFilters {
    fn as_ref(&self) -> &[(String, String)] {
        &self.params
    }
}
