//! Catalog REST API response types.

use serde::Deserialize;

use crate::domain::{Item, Page};
use crate::error::FetchError;

/// Body of `GET /products`.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub total: u64,
    pub count: u64,
    #[serde(default)]
    pub products: Vec<Item>,
}

impl TryFrom<ProductsResponse> for Page {
    type Error = FetchError;

    fn try_from(response: ProductsResponse) -> Result<Self, Self::Error> {
        let items = response.products.len();
        if response.count != items as u64 || response.count > response.total {
            return Err(FetchError::InconsistentPage {
                total: response.total,
                count: response.count,
                items,
            });
        }
        Ok(Self {
            total: response.total,
            count: response.count,
            items: response.products,
        })
    }
}
