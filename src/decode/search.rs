//! Keyword search decoding.
//!
//! The search index evolves independently of this client, so only the two
//! envelope scalars (`took`, `hits.total`) are required. Each hit is read
//! field by field and never dropped; a field that is missing or mistyped
//! takes its zero value and is counted in
//! [`SearchResult::defaulted_fields`](crate::models::SearchResult).

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::config::Endpoints;
use crate::decode::field::FieldReader;
use crate::error::{DgkalaError, Result};
use crate::models::{Color, ExistsStatus, SearchHit, SearchResult};

/// Layout of `RegDateTime`; fractional seconds are accepted when present.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Decode a search response, resolving image paths against the production
/// static-files address.
pub fn decode_search_result(bytes: &[u8]) -> Result<SearchResult> {
    decode_search_result_with(bytes, &Endpoints::default())
}

/// Decode a search response, resolving image paths against `endpoints`.
pub fn decode_search_result_with(bytes: &[u8], endpoints: &Endpoints) -> Result<SearchResult> {
    let document: Value =
        serde_json::from_slice(bytes).map_err(|source| DgkalaError::Decode {
            context: "search response",
            source,
        })?;

    let response_time_ms = document
        .get("took")
        .and_then(Value::as_i64)
        .ok_or(DgkalaError::MissingField { path: "took" })?;
    let total_count = document
        .pointer("/hits/total")
        .and_then(Value::as_i64)
        .ok_or(DgkalaError::MissingField { path: "hits.total" })?;

    let mut hits = Vec::new();
    let mut defaulted_fields = 0;
    if let Some(entries) = document.pointer("/hits/hits").and_then(Value::as_array) {
        hits.reserve(entries.len());
        for entry in entries {
            let (hit, misses) = decode_hit(entry, endpoints);
            defaulted_fields += misses;
            hits.push(hit);
        }
    }

    tracing::debug!(
        took = response_time_ms,
        total = total_count,
        hits = hits.len(),
        defaulted_fields,
        "decoded search result"
    );

    Ok(SearchResult {
        response_time_ms,
        total_count,
        hits,
        defaulted_fields,
    })
}

/// Build one hit from its `_source` document, returning the hit and the
/// number of fields that fell back to zero values.
fn decode_hit(entry: &Value, endpoints: &Endpoints) -> (SearchHit, usize) {
    let mut source = FieldReader::new(entry.get("_source"));

    let id = source.int("Id").unwrap_or_default();
    let persian_title = source.string("FaTitle").unwrap_or_default();
    let english_title = source.string("EnTitle").unwrap_or_default();
    let image =
        endpoints.static_resource_address(&source.string("ImagePath").unwrap_or_default());
    let exists_status = ExistsStatus::from(source.int("ExistStatus").unwrap_or_default());
    let is_active = source.boolean("IsActive").unwrap_or_default();
    let url = source.string("UrlCode").unwrap_or_default();
    let rate = source.int("Rate").unwrap_or_default();
    let minimum_price = source.int("MinPrice").unwrap_or_default();
    let maximum_price = source.int("MaxPrice").unwrap_or_default();
    let likes = source.int("LikeCounter").unwrap_or_default();
    let last_period_likes = source.int("LastPeriodLikeCounter").unwrap_or_default();
    let views = source.int("ViewCounter").unwrap_or_default();
    let last_period_views = source.int("LastPeriodViewCounter").unwrap_or_default();
    let is_special_offer = source.boolean("IsSpecialOffer").unwrap_or_default();
    let registered_at = source
        .field("RegDateTime", |v| v.as_str().and_then(parse_timestamp))
        .unwrap_or_else(zero_time);
    let has_video = source.boolean("HasVideo").unwrap_or_default();

    let mut color_misses = 0;
    let colors: Vec<Color> = source
        .array("ProductColorList")
        .map(|entries| {
            entries
                .iter()
                .map(|entry| {
                    let (color, misses) = decode_color(entry);
                    color_misses += misses;
                    color
                })
                .collect()
        })
        .unwrap_or_default();

    let user_rating_count = source.int("UserRating").unwrap_or_default();
    let favorites = source.int("FavoriteCounter").unwrap_or_default();
    let last_period_favorites = source.int("LastPeriodFavoriteCounter").unwrap_or_default();
    let last_period_sales = source.int("LastPeriodSaleCounter").unwrap_or_default();
    let has_gift = source.boolean("HasGift").unwrap_or_default();
    let html_details = source.string("DetailSource").unwrap_or_default();

    let hit = SearchHit {
        id,
        english_title,
        persian_title,
        image,
        exists_status,
        is_active,
        url,
        rate,
        minimum_price,
        maximum_price,
        likes,
        last_period_likes,
        views,
        last_period_views,
        is_special_offer,
        registered_at,
        has_video,
        colors,
        user_rating_count,
        favorites,
        last_period_favorites,
        last_period_sales,
        has_gift,
        html_details,
    };
    (hit, source.misses() + color_misses)
}

/// A malformed entry still yields a color with whatever fields it had.
fn decode_color(entry: &Value) -> (Color, usize) {
    let mut fields = FieldReader::new(Some(entry));
    let color = Color {
        title: fields.string("ColorTitle").unwrap_or_default(),
        hex: fields.string("ColorHex").unwrap_or_default(),
        code: fields.string("ColorCode").unwrap_or_default(),
    };
    (color, fields.misses())
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
}

/// `0001-01-01T00:00:00`, the value of an unparseable registration time.
pub fn zero_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}
