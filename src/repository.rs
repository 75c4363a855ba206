//! Catalog, simulation and order operations over a [`Transport`].
//!
//! [`VtexRepository`] composes endpoint paths, query strings and request
//! bodies, and drives the two paginated catalog loops and the batched
//! price/stock simulation. Every operation awaits its requests one after the
//! other; the first failure aborts the whole operation and nothing already
//! fetched is returned.
//!
//! # Example
//!
//! ```rust,ignore
//! use vtex_sdk::prelude::*;
//!
//! let config = VtexConfig::from_env()?;
//! let repo = VtexRepository::new(&config)?;
//!
//! let products = repo.search_products(ProductSearchParams::new()).await?;
//! let prices = repo
//!     .get_price_and_stock(&["1", "2", "3"], &SimulationOptions::new().with_country("BRA"))
//!     .await?;
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::api::transport::Transport;
use crate::api::types::{ProductListParams, ProductSearchParams, SimulationOptions};
use crate::config::StoreContext;
use crate::shared::{append_items, is_empty_page};

#[cfg(feature = "http")]
use crate::api::client::VtexHttpClient;
#[cfg(feature = "http")]
use crate::config::VtexConfig;

const SKU_IDS_BY_SALES_CHANNEL_PATH: &str =
    "/api/catalog_system/pvt/sku/stockkeepingunitidsbysaleschannel";
const PRODUCT_SEARCH_PATH: &str = "/api/catalog_system/pub/products/search";
const SIMULATION_PATH: &str = "/api/fulfillment/pvt/orderForms/simulation";
const ORDERS_PATH: &str = "/api/oms/pvt/orders";
const ORDER_SEARCH_PATH: &str = "/api/oms/pvt/orders/search";

/// High-level VTEX catalog and order client.
#[derive(Debug, Clone)]
pub struct VtexRepository<T> {
    transport: T,
    store: StoreContext,
}

#[cfg(feature = "http")]
impl VtexRepository<VtexHttpClient> {
    /// Create a repository backed by [`VtexHttpClient`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built from `config`.
    pub fn new(config: &VtexConfig) -> ApiResult<Self> {
        let transport = VtexHttpClient::from_config(config)?;
        Ok(Self::with_transport(transport, config.store.clone()))
    }
}

impl<T: Transport> VtexRepository<T> {
    /// Create a repository over any transport.
    pub fn with_transport(transport: T, store: StoreContext) -> Self {
        Self { transport, store }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The store context this repository operates for.
    pub fn store(&self) -> &StoreContext {
        &self.store
    }

    /// Configured seller id.
    pub fn seller_id(&self) -> &str {
        &self.store.seller_id
    }

    /// Configured affiliate id.
    pub fn affiliate_id(&self) -> &str {
        &self.store.affiliate_id
    }

    /// Configured sales channel.
    pub fn sales_channel(&self) -> &str {
        &self.store.sales_channel
    }

    /// Fetch pages from `path` until pagination is off, a page comes back
    /// empty, or `max_pages` pages have been read. A `max_pages` of zero is
    /// rejected before any request is sent.
    async fn collect_pages<F>(
        &self,
        path: &str,
        paginate: bool,
        max_pages: u32,
        query_for: F,
    ) -> ApiResult<Vec<Value>>
    where
        F: Fn(u32) -> Vec<(String, String)>,
    {
        if max_pages == 0 {
            return Err(ApiError::InvalidParameter("max_pages must be at least 1".to_string()));
        }

        let mut items = Vec::new();
        let mut index = 0u32;

        loop {
            let query = query_for(index);
            let page = self.transport.get(path, &query).await?;
            let empty = is_empty_page(&page);
            let appended = append_items(&mut items, page);
            tracing::debug!(path, page = index, appended, total = items.len(), "fetched page");

            index += 1;
            if !paginate || empty {
                break;
            }
            if index >= max_pages {
                tracing::warn!(path, max_pages, total = items.len(), "page limit reached, stopping pagination");
                break;
            }
        }

        Ok(items)
    }

    // =========================================================================
    // Catalog endpoints
    // =========================================================================

    /// List SKU ids for the store, page by page.
    ///
    /// Sends `page`/`pageSize` (plus any extra filters) on every request and
    /// concatenates the pages in order.
    pub async fn get_products(&self, params: ProductListParams) -> ApiResult<Vec<Value>> {
        self.collect_pages(
            SKU_IDS_BY_SALES_CHANNEL_PATH,
            params.paginate,
            params.max_pages,
            |index| params.query_for_page(params.page.saturating_add(index)),
        )
        .await
    }

    /// Search products available in the configured sales channel.
    pub async fn search_products(&self, params: ProductSearchParams) -> ApiResult<Vec<Value>> {
        let sales_channel = self.store.sales_channel.as_str();
        self.collect_pages(
            PRODUCT_SEARCH_PATH,
            params.paginate,
            params.max_pages,
            |index| params.query_for_page(index, sales_channel),
        )
        .await
    }

    /// Get a product by id.
    pub async fn get_product(&self, product_id: &str) -> ApiResult<Value> {
        let path = format!("/api/catalog/pvt/product/{}", urlencoding::encode(product_id));
        self.transport.get(&path, &[]).await
    }

    /// Get a SKU by id.
    pub async fn get_sku(&self, sku_id: &str) -> ApiResult<Value> {
        let path = format!(
            "/api/catalog_system/pvt/sku/stockkeepingunitbyid/{}",
            urlencoding::encode(sku_id)
        );
        self.transport.get(&path, &[]).await
    }

    /// Get several SKUs, one request per id, in input order.
    pub async fn get_skus_by_ids<S: AsRef<str> + Sync>(&self, sku_ids: &[S]) -> ApiResult<Vec<Value>> {
        let mut skus = Vec::with_capacity(sku_ids.len());
        for sku_id in sku_ids {
            skus.push(self.get_sku(sku_id.as_ref()).await?);
        }
        Ok(skus)
    }

    // =========================================================================
    // Pricing / stock
    // =========================================================================

    /// Simulate one unit of each SKU to get price and availability.
    ///
    /// SKUs are sent in batches of `options.batch_size`; batch results are
    /// concatenated in batch order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidParameter`] if the batch size is zero, or the
    /// first failing batch's error.
    pub async fn get_price_and_stock<S: AsRef<str> + Sync>(
        &self,
        sku_ids: &[S],
        options: &SimulationOptions,
    ) -> ApiResult<Vec<Value>> {
        if options.batch_size == 0 {
            return Err(ApiError::InvalidParameter("batch_size must be at least 1".to_string()));
        }

        let mut results = Vec::new();
        for (batch, chunk) in sku_ids.chunks(options.batch_size).enumerate() {
            let request = options.request_for(chunk, &self.store.seller_id, &self.store.sales_channel);
            let body = serde_json::to_value(&request)?;
            let response = self.transport.post(SIMULATION_PATH, Some(&body)).await?;
            let appended = append_items(&mut results, response);
            tracing::debug!(batch, skus = chunk.len(), appended, "simulated batch");
        }

        Ok(results)
    }

    // =========================================================================
    // Order endpoints
    // =========================================================================

    /// Create an order. The payload is sent as-is.
    pub async fn send_order<B: Serialize + ?Sized + Sync>(&self, order: &B) -> ApiResult<Value> {
        let body = serde_json::to_value(order)?;
        self.transport.post(ORDERS_PATH, Some(&body)).await
    }

    /// Authorize an order for dispatch.
    pub async fn authorize_order(&self, order_id: &str) -> ApiResult<Value> {
        let path = format!("{}/{}/authorize", ORDERS_PATH, urlencoding::encode(order_id));
        self.transport.post(&path, None).await
    }

    /// Search orders. The filters are sent as query parameters, unmodified.
    pub async fn search_orders<Q>(&self, filters: &Q) -> ApiResult<Value>
    where
        Q: AsRef<[(String, String)]> + ?Sized + Sync,
    {
        self.transport.get(ORDER_SEARCH_PATH, filters.as_ref()).await
    }

    /// Cancel an order.
    pub async fn cancel_order(&self, order_id: &str) -> ApiResult<Value> {
        let path = format!("{}/{}/cancel", ORDERS_PATH, urlencoding::encode(order_id));
        self.transport.post(&path, None).await
    }
}
