use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::sub::{Color, ExistsStatus};

// ---------------------------------------------------------------------------
// SearchHit — one product of a keyword search
// ---------------------------------------------------------------------------

/// A product entry of a search result.
///
/// Built field by field from the index document; any field the document
/// lacks (or carries with the wrong type) holds its zero value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: i64,
    pub english_title: String,
    pub persian_title: String,
    /// Absolute image address.
    pub image: String,
    pub exists_status: ExistsStatus,
    pub is_active: bool,
    /// URL slug of the product page.
    pub url: String,
    pub rate: i64,
    pub minimum_price: i64,
    pub maximum_price: i64,
    pub likes: i64,
    pub last_period_likes: i64,
    pub views: i64,
    pub last_period_views: i64,
    pub is_special_offer: bool,
    pub registered_at: NaiveDateTime,
    pub has_video: bool,
    pub colors: Vec<Color>,
    pub user_rating_count: i64,
    pub favorites: i64,
    pub last_period_favorites: i64,
    pub last_period_sales: i64,
    pub has_gift: bool,
    pub html_details: String,
}

// ---------------------------------------------------------------------------
// SearchResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Server-side search time (`took`), in milliseconds.
    pub response_time_ms: i64,
    /// Total matches reported by the index, not the length of `hits`.
    pub total_count: i64,
    /// Hits in upstream relevance order.
    pub hits: Vec<SearchHit>,
    /// Number of hit and color fields that fell back to their zero value.
    pub defaulted_fields: usize,
}
