use serde::Deserialize;

use crate::error::{DgkalaError, Result};
use crate::models::ProductDetail;

#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    #[serde(rename = "Data", alias = "data")]
    data: ProductDetail,
}

/// Decode a single-product lookup from its `Data` envelope.
pub fn decode_product_detail(bytes: &[u8]) -> Result<ProductDetail> {
    let envelope: ProductEnvelope =
        serde_json::from_slice(bytes).map_err(|source| DgkalaError::Decode {
            context: "product detail",
            source,
        })?;
    tracing::debug!(id = envelope.data.id, "decoded product detail");
    Ok(envelope.data)
}
