use serde::{Deserialize, Serialize};

use super::sub::ImagePaths;

// ---------------------------------------------------------------------------
// Offer — an entry of the incredible-offers listing
// ---------------------------------------------------------------------------

/// A promotional item with banner and pricing metadata.
///
/// Every field is required: the listing is decoded strictly and a single
/// mismatched offer fails the whole call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Offer {
    #[serde(alias = "ID")]
    pub id: u64,
    #[serde(alias = "ProductID")]
    pub product_id: u64,
    pub title: String,
    pub image_paths: ImagePaths,
    pub banner_path: String,
    pub banner_path_mobile: String,
    pub banner_path_tablet: String,
    pub row: u64,
    pub product_title_fa: String,
    pub product_title_en: String,
    pub discount: u64,
    pub price: u64,
    pub only_for_application: bool,
    pub only_for_members: bool,
}
