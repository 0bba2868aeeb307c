use crate::data::models::product::Product;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Wire-facing projection of a [`Product`]. Used for both request payloads
/// and responses; prices are surfaced scaled to 2 decimal places.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductDomain {
    pub name: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub price: BigDecimal,
}

impl From<Product> for ProductDomain {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            image_url: product.product_image_uri,
            description: product.description,
            price: product.price.with_scale(2),
        }
    }
}

/// Optional listing parameters; anything missing falls back to the service
/// defaults. Malformed numeric values are rejected by the query extractor
/// before they reach the service.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
    pub name: Option<String>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
}
