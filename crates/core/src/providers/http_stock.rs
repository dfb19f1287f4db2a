use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::product::{Product, ProductId, Stock};
use crate::models::settings::Settings;
use super::traits::StockService;

const SERVICE_NAME: &str = "StockAPI";

/// Stock/catalog client for the storefront REST API.
///
/// - `GET {base}/stock/{id}` → `{ "id": 1, "amount": 3 }`
/// - `GET {base}/products/{id}` → product object
///
/// Any non-2xx status is an error; so is a body that does not parse.
pub struct HttpStockService {
    client: Client,
    base_url: String,
}

impl HttpStockService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, crate::models::settings::DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_timeout(settings.api_base_url.clone(), settings.request_timeout_secs)
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn stock_url(&self, product_id: ProductId) -> String {
        format!("{}/stock/{product_id}", self.base_url)
    }

    pub fn product_url(&self, product_id: ProductId) -> String {
        format!("{}/products/{product_id}", self.base_url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T, CoreError> {
        let resp = self.client.get(url).send().await?;
        let resp = Self::check_status(resp, what)?;
        resp.json().await.map_err(|e| CoreError::Api {
            service: SERVICE_NAME.into(),
            message: format!("Failed to parse {what}: {e}"),
        })
    }

    fn check_status(resp: Response, what: &str) -> Result<Response, CoreError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            Err(CoreError::Api {
                service: SERVICE_NAME.into(),
                message: format!("{what} request failed with status {status}"),
            })
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl StockService for HttpStockService {
    fn name(&self) -> &str {
        SERVICE_NAME
    }

    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, CoreError> {
        let url = self.stock_url(product_id);
        self.fetch_json(&url, &format!("stock for product {product_id}"))
            .await
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Product, CoreError> {
        let url = self.product_url(product_id);
        let product: Product = self
            .fetch_json(&url, &format!("product {product_id}"))
            .await?;

        if product.id != product_id {
            return Err(CoreError::Api {
                service: SERVICE_NAME.into(),
                message: format!("Asked for product {product_id}, got {}", product.id),
            });
        }
        Ok(product)
    }
}
