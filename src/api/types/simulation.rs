//! Fulfillment simulation types (`POST /api/fulfillment/pvt/orderForms/simulation`).

use serde::Serialize;

/// Default number of SKUs sent per simulation request.
pub const DEFAULT_SIMULATION_BATCH_SIZE: usize = 10;

/// One line item in a simulation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationItem {
    /// SKU id
    pub id: String,
    /// Quantity, sent as a string
    pub quantity: String,
    /// Seller id
    pub seller: String,
}

impl SimulationItem {
    /// A single unit of `sku_id` from `seller`.
    pub fn single(sku_id: impl Into<String>, seller: impl Into<String>) -> Self {
        Self {
            id: sku_id.into(),
            quantity: "1".to_string(),
            seller: seller.into(),
        }
    }
}

/// Simulation request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Line items
    pub items: Vec<SimulationItem>,
    /// Sales channel
    pub sc: String,
    /// Three-letter country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Caller options for price/stock simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Postal code to simulate shipping to
    pub postal_code: Option<String>,
    /// Country code to simulate shipping to
    pub country: Option<String>,
    /// SKUs per request
    pub batch_size: usize,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            postal_code: None,
            country: None,
            batch_size: DEFAULT_SIMULATION_BATCH_SIZE,
        }
    }
}

impl SimulationOptions {
    /// Options with no location and the default batch size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the postal code.
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Build the request body for one batch of SKU ids.
    pub fn request_for<S: AsRef<str>>(
        &self,
        sku_ids: &[S],
        seller_id: &str,
        sales_channel: &str,
    ) -> SimulationRequest {
        SimulationRequest {
            items: sku_ids
                .iter()
                .map(|id| SimulationItem::single(id.as_ref(), seller_id))
                .collect(),
            sc: sales_channel.to_string(),
            country: self.country.clone(),
            postal_code: self.postal_code.clone(),
        }
    }
}
