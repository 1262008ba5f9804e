use serde::Deserialize;

use crate::error::{DgkalaError, Result};
use crate::models::Offer;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OffersEnvelope {
    #[serde(alias = "data")]
    data: Vec<Offer>,
    #[serde(alias = "status")]
    status: String,
}

/// Decode the incredible-offers listing.
///
/// The whole document is decoded in one pass; a single malformed offer fails
/// the call and no partial list is returned.
pub fn decode_offer_list(bytes: &[u8]) -> Result<Vec<Offer>> {
    let envelope: OffersEnvelope =
        serde_json::from_slice(bytes).map_err(|source| DgkalaError::Decode {
            context: "incredible offers",
            source,
        })?;
    tracing::debug!(
        offers = envelope.data.len(),
        status = %envelope.status,
        "decoded incredible offers"
    );
    Ok(envelope.data)
}
