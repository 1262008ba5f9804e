use serde::{Deserialize, Serialize};

use super::sub::ImagePaths;

// ---------------------------------------------------------------------------
// ProductDetail — single-product lookup
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductDetail {
    #[serde(alias = "ID")]
    pub id: u64,
    #[serde(rename = "EnTitle")]
    pub english_title: String,
    #[serde(rename = "FaTitle")]
    pub persian_title: String,
    pub description: String,
    pub image_paths: ImagePaths,
    pub is_incredible_offer: bool,
    pub strengths: String,
    pub weaknesses: String,
    #[serde(rename = "MinPrice")]
    pub minimum_price: u64,
}
